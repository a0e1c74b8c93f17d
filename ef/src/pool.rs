//! Kind-keyed phrase pools
//!
//! Every pool is constructed with a mandatory default list, so lookup never
//! fails and never yields an empty slice. This replaces the original
//! engine's `pools[kind] || pools.default` truthiness dance with a type
//! that cannot be built without a fallback.

/// Phrase lists keyed by error kind, with a guaranteed default list
pub struct KindPool {
    kinds: &'static [(&'static str, &'static [&'static str])],
    default: &'static [&'static str],
}

impl KindPool {
    /// Build a pool. The default list is a required argument, not a key
    /// that might be missing.
    pub const fn new(
        kinds: &'static [(&'static str, &'static [&'static str])],
        default: &'static [&'static str],
    ) -> Self {
        Self { kinds, default }
    }

    /// The list for `kind`, falling back to the default list
    pub fn for_kind(&self, kind: &str) -> &'static [&'static str] {
        self.kinds
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, list)| *list)
            .unwrap_or(self.default)
    }
}
