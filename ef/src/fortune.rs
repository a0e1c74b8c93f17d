//! Cracking a cookie: validate the error message, apply a style, and
//! produce a [`Fortune`] record, optionally saving it to history.

use fortunestore::{Fortune, FortuneStore};
use log::debug;
use thiserror::Error;

use crate::random::ThreadRandom;
use crate::styles::{DEFAULT_STYLE, resolve};

#[derive(Debug, Error)]
pub enum CrackError {
    #[error("error message is empty")]
    BlankInput,
    #[error("failed to save fortune: {0}")]
    Store(String),
}

/// Options for [`crack`]
#[derive(Debug, Clone)]
pub struct CrackOptions {
    /// Style name; unknown names fall back to the default style
    pub style: String,
    /// Record the fortune in history when a store is supplied
    pub save_to_history: bool,
}

impl Default for CrackOptions {
    fn default() -> Self {
        Self { style: DEFAULT_STYLE.to_string(), save_to_history: true }
    }
}

/// Crack a fortune cookie from an error message.
///
/// The message is trimmed before use; a blank message is rejected without
/// touching the store. When `store` is supplied and `save_to_history` is
/// set, the fortune is recorded before being returned.
pub fn crack(
    error_message: &str,
    options: &CrackOptions,
    store: Option<&FortuneStore>,
) -> Result<Fortune, CrackError> {
    let message = error_message.trim();
    if message.is_empty() {
        return Err(CrackError::BlankInput);
    }

    let mut rng = ThreadRandom;
    let wisdom = resolve(&options.style)(message, &mut rng);
    let fortune = Fortune::new(message, &wisdom, &options.style);
    debug!("cracked fortune {} with style {}", fortune.id, fortune.style);

    if options.save_to_history {
        if let Some(store) = store {
            store
                .add_history(&fortune)
                .map_err(|err| CrackError::Store(err.to_string()))?;
        }
    }

    Ok(fortune)
}
