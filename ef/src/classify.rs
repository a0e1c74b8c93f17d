//! Coarse error classification
//!
//! The trimmed text before the first colon is the error kind ("TypeError",
//! "ReferenceError", ...). Input with no colon, or nothing usable before
//! it, collapses to [`DEFAULT_KIND`]. Pure function of the input, no state.

/// Kind used when the input carries no usable prefix
pub const DEFAULT_KIND: &str = "Error";

/// Classify an error message by the segment before its first colon.
///
/// Never fails: empty, whitespace-only, colon-first, and colon-free input
/// all resolve to [`DEFAULT_KIND`].
pub fn classify(error: &str) -> &str {
    match error.split_once(':') {
        Some((kind, _)) => {
            let kind = kind.trim();
            if kind.is_empty() { DEFAULT_KIND } else { kind }
        }
        None => DEFAULT_KIND,
    }
}

/// The detail text after the first colon, or `""` when there is none
pub fn detail(error: &str) -> &str {
    error.split_once(':').map(|(_, rest)| rest).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_with_colon() {
        assert_eq!(classify("TypeError: x is undefined"), "TypeError");
        assert_eq!(classify("ReferenceError: x is not defined"), "ReferenceError");
        assert_eq!(classify("  RangeError : too big"), "RangeError");
    }

    #[test]
    fn test_classify_defaults() {
        assert_eq!(classify(""), DEFAULT_KIND);
        assert_eq!(classify("   "), DEFAULT_KIND);
        assert_eq!(classify("no colon here"), DEFAULT_KIND);
        assert_eq!(classify(":details only"), DEFAULT_KIND);
        assert_eq!(classify(":"), DEFAULT_KIND);
    }

    #[test]
    fn test_detail() {
        assert_eq!(detail("TypeError: x is undefined"), " x is undefined");
        assert_eq!(detail("no colon here"), "");
        assert_eq!(detail("a:b:c"), "b:c");
    }
}
