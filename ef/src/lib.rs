//! ErrorFortune - error messages in, fortune-cookie wisdom out
//!
//! Takes a raw error string ("TypeError: x is undefined"), classifies it by
//! the text before the first colon, and feeds it through one of 25 style
//! transformers (confucius, haiku, tarot, pirate, ...). Each transformer
//! draws phrases from kind-keyed pools (with a guaranteed default pool) and
//! fills a randomly chosen template. Transformation never fails: every
//! lookup has a fallback and there is no error path.
//!
//! # Modules
//!
//! - [`classify`] - coarse error-kind classification
//! - [`styles`] - the transformer registry and all 25 styles
//! - [`fortune`] - `crack()` orchestration producing [`Fortune`] records
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```ignore
//! use errorfortune::{CrackOptions, crack};
//!
//! let fortune = crack("TypeError: x is undefined", &CrackOptions::default(), None)?;
//! println!("{}", fortune.wisdom);
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod fortune;
pub mod pool;
pub mod random;
pub mod samples;
pub mod styles;
pub mod template;

// Re-export commonly used types
pub use classify::{DEFAULT_KIND, classify, detail};
pub use config::Config;
pub use fortune::{CrackError, CrackOptions, crack};
pub use pool::KindPool;
pub use random::{RandomSource, SeqRandom, ThreadRandom, pick};
pub use samples::{SAMPLE_ERRORS, random_sample};
pub use styles::{DEFAULT_STYLE, Transform, resolve, style_names, transform};
pub use template::fill;

pub use fortunestore::{Fortune, FortuneStore, StoreLimits};
