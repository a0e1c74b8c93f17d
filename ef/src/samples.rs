//! Sample error messages for demos and the `sample` subcommand

use crate::random::{RandomSource, pick};

/// Real-world-shaped error messages covering every kind the pools key on
pub const SAMPLE_ERRORS: &[&str] = &[
    "TypeError: Cannot read property 'length' of undefined",
    "ReferenceError: x is not defined",
    "SyntaxError: Unexpected token {",
    "RangeError: Maximum call stack size exceeded",
    "TypeError: null is not an object",
    "Error: Network request failed",
    "TypeError: Cannot set property 'innerHTML' of null",
    "ReferenceError: $ is not defined",
    "SyntaxError: Unexpected end of input",
    "TypeError: Object.assign is not a function",
    "Error: ENOENT: no such file or directory, open 'config.json'",
    "TypeError: Cannot read property 'map' of undefined",
    "ReferenceError: React is not defined",
    "SyntaxError: Unexpected token '>'",
    "RangeError: Invalid array length",
    "TypeError: Cannot read property 'then' of undefined",
    "Error: ECONNREFUSED: connection refused",
    "TypeError: Cannot read property 'split' of null",
    "ReferenceError: document is not defined",
    "SyntaxError: Unexpected identifier",
    "Error: ETIMEDOUT: request timeout",
    "TypeError: Cannot read property 'toString' of undefined",
    "ReferenceError: window is not defined",
    "RangeError: Maximum call stack size exceeded",
    "TypeError: Cannot read property 'push' of undefined",
    "Error: EACCES: permission denied, open 'package.json'",
    "TypeError: Cannot read property 'charAt' of null",
    "ReferenceError: require is not defined",
    "SyntaxError: Unexpected token ';'",
    "Error: ENOTFOUND: getaddrinfo ENOTFOUND api.example.com",
];

/// Draw one sample error at random
pub fn random_sample(rng: &mut dyn RandomSource) -> &'static str {
    *pick(rng, SAMPLE_ERRORS)
}
