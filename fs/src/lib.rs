//! FortuneStore - bounded persistence for cracked fortunes
//!
//! Keeps two most-recent-first lists on disk as JSON: a history of cracked
//! fortunes and a set of favorites deduplicated by `(original, style)`.
//! Lists are capped; oldest entries are evicted on overflow.
//!
//! # Architecture
//!
//! ```text
//! fortunestore/
//! ├── history.json     # [Fortune], newest first, capped
//! └── favorites.json   # [Fortune], newest first, unique (original, style)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use fortunestore::{Fortune, FortuneStore, StoreLimits};
//!
//! let store = FortuneStore::open(".fortunestore", StoreLimits::default())?;
//! let fortune = Fortune::new("TypeError: x is undefined", "Wisdom here", "confucius");
//! store.add_history(&fortune)?;
//! assert_eq!(store.history()[0].id, fortune.id);
//! ```

pub mod store;

pub use store::{ExportData, Fortune, FortuneStore, StoreLimits};

/// Default maximum number of history entries
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Default maximum number of favorites
pub const DEFAULT_MAX_FAVORITES: usize = 20;
