//! Style registry
//!
//! Every style is a plain function from an error message (plus a random
//! source) to a wisdom string. The registry maps the public style names to
//! those functions; unknown names fall back to the default style rather
//! than erroring, so a stale style name in config still produces a fortune.

pub mod classic;
pub mod creative;
pub mod mocking;
pub mod nerdy;

use crate::random::{RandomSource, ThreadRandom};

/// A style transformer: error message in, styled wisdom out
pub type Transform = fn(&str, &mut dyn RandomSource) -> String;

/// Style used when none is requested or the requested one is unknown
pub const DEFAULT_STYLE: &str = "confucius";

/// All registered styles, in display order
const REGISTRY: &[(&str, Transform)] = &[
    ("confucius", classic::confucius),
    ("haiku", classic::haiku),
    ("tarot", classic::tarot),
    ("blame", classic::blame),
    ("motivational", classic::motivational),
    ("techSupport", classic::tech_support),
    ("poetic", classic::poetic),
    ("zen", classic::zen),
    ("shakespeare", creative::shakespeare),
    ("filmNoir", creative::film_noir),
    ("sciFi", creative::sci_fi),
    ("pirate", creative::pirate),
    ("western", creative::western),
    ("superhero", creative::superhero),
    ("fantasy", creative::fantasy),
    ("bMovie", creative::b_movie),
    ("influencer", creative::influencer),
    ("legal", creative::legal),
    ("recipe", creative::recipe),
    ("sports", creative::sports),
    ("mocking", mocking::mocking),
    ("starWars", nerdy::star_wars),
    ("matrix", nerdy::matrix),
    ("meme", nerdy::meme),
    ("hitchhiker", nerdy::hitchhiker),
];

/// Look up a style by exact name
pub fn lookup(name: &str) -> Option<Transform> {
    REGISTRY.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Resolve a style name, falling back to [`DEFAULT_STYLE`] when unknown
pub fn resolve(name: &str) -> Transform {
    lookup(name).unwrap_or(classic::confucius)
}

/// Registered style names in display order
pub fn style_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(n, _)| *n).collect()
}

/// Apply a style to an error message using the process-wide RNG
pub fn transform(style: &str, error: &str) -> String {
    let mut rng = ThreadRandom;
    resolve(style)(error, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeqRandom;

    #[test]
    fn test_registry_has_twenty_five_styles() {
        assert_eq!(style_names().len(), 25);
    }

    #[test]
    fn test_no_duplicate_style_names() {
        let mut names = style_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert!(lookup("pirate").is_some());
        assert!(lookup("techSupport").is_some());
        assert!(lookup("klingon").is_none());
    }

    #[test]
    fn test_unknown_style_behaves_like_default() {
        // Same random script, same output
        let error = "TypeError: Cannot read property 'length' of undefined";
        let mut a = SeqRandom::new([0.3, 0.6, 0.1]);
        let mut b = SeqRandom::new([0.3, 0.6, 0.1]);
        let from_unknown = resolve("notAStyle")(error, &mut a);
        let from_default = resolve(DEFAULT_STYLE)(error, &mut b);
        assert_eq!(from_unknown, from_default);
    }

    #[test]
    fn test_every_style_produces_output() {
        let error = "ReferenceError: x is not defined";
        for name in style_names() {
            let mut rng = SeqRandom::new([0.2, 0.7, 0.4, 0.9]);
            let wisdom = resolve(name)(error, &mut rng);
            assert!(!wisdom.trim().is_empty(), "style {name} produced nothing");
        }
    }

    #[test]
    fn test_transform_varies_over_trials() {
        let outputs: std::collections::HashSet<String> = (0..100)
            .map(|_| transform("pirate", "TypeError: bad"))
            .collect();
        assert!(outputs.len() > 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_transform_never_panics(input in ".*", index in 0usize..25) {
            let name = style_names()[index];
            let wisdom = transform(name, &input);
            proptest::prop_assert!(!wisdom.is_empty());
        }
    }
}
