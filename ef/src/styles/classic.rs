//! The original fortune styles: proverbs, haiku, tarot, blame, zen,
//! motivational posters, tech support, and verse.
//!
//! Phrase content is data; the only logic is classify → draw → fill.

use crate::classify::{classify, detail};
use crate::pool::KindPool;
use crate::random::{RandomSource, pick};
use crate::template::fill;

const CONFUCIUS_TEMPLATES: &[&str] = &[
    "Confucius say: Developer who encounters '{error}' must first examine their assumptions.",
    "Ancient wisdom tells us: Those who rush through code will surely meet '{error}' on their path.",
    "Confucius say: Error '{error}' is not your enemy, but your teacher in disguise.",
    "Man who sees '{error}' has opportunity to grow wiser through debugging.",
    "Wise programmer knows: '{error}' today leads to understanding tomorrow.",
];

/// Confucius-style wisdom quoting the classified kind
pub fn confucius(error: &str, rng: &mut dyn RandomSource) -> String {
    let kind = classify(error);
    fill(*pick(rng, CONFUCIUS_TEMPLATES), &[("error", kind)])
}

const HAIKUS: KindPool = KindPool::new(
    &[
        (
            "TypeError",
            &[
                "Types confused and mixed<br>String where number should reside<br>Check your variables",
                "Undefined waits here<br>In the shadows of your code<br>Initialize first",
            ],
        ),
        (
            "ReferenceError",
            &[
                "Variable not found<br>Searching through empty namespace<br>Define before use",
                "Name does not exist<br>Ghost variables haunt your code<br>Declare what you need",
            ],
        ),
        (
            "SyntaxError",
            &[
                "Grammar rules broken<br>Compiler cannot understand<br>Fix your punctuation",
                "Brackets left alone<br>Seeking their missing partners<br>Balance brings harmony",
            ],
        ),
    ],
    &[
        "Code breaks silently<br>Error messages whisper truth<br>Listen and debug",
        "Exception thrown high<br>Like autumn leaves falling down<br>Catch what you can hold",
    ],
);

/// Three-line haiku joined by `<br>`
pub fn haiku(error: &str, rng: &mut dyn RandomSource) -> String {
    let kind = classify(error);
    pick(rng, HAIKUS.for_kind(kind)).to_string()
}

const TAROT_CARDS: KindPool = KindPool::new(
    &[
        ("TypeError", &["The Type Mismatch"]),
        ("ReferenceError", &["The Undefined Variable"]),
        ("SyntaxError", &["The Broken Grammar"]),
        ("RangeError", &["The Boundary Crosser"]),
    ],
    &["The Hidden Bug"],
);

const TAROT_UPRIGHT: &[&str] = &[
    "This reveals a clear path forward once you address the root cause.",
    "You face a challenge that requires careful attention to detail.",
    "The solution exists but requires looking from a new perspective.",
];

const TAROT_REVERSED: &[&str] = &[
    "Hidden complexity lurks beneath the surface of this error.",
    "You may be overcomplicating a simple solution.",
    "The true source lies elsewhere in your codebase.",
];

/// Mystical tarot reading: kind-keyed card, coin-flip position
pub fn tarot(error: &str, rng: &mut dyn RandomSource) -> String {
    let kind = classify(error);
    let card = pick(rng, TAROT_CARDS.for_kind(kind));
    let (position, interpretations) = if rng.next_f64() > 0.5 {
        ("upright", TAROT_UPRIGHT)
    } else {
        ("reversed", TAROT_REVERSED)
    };
    let interpretation = pick(rng, interpretations);
    format!("The digital tarot reveals <strong>{card}</strong> in {position} position. {interpretation}")
}

const BLAME_EXCUSES: &[&str] = &[
    "This error is clearly caused by cosmic rays flipping bits in your RAM. Totally unavoidable!",
    "Mercury is in retrograde, affecting all JavaScript engines in your timezone this week.",
    "A butterfly in Tokyo flapped its wings, creating quantum entanglement with your variables.",
    "The code was perfect until someone looked at it. Classic quantum observer effect bug!",
    "Solar flare activity is interfering with your CPU's ability to execute perfect logic.",
    "Your code exists in a quantum superposition of working and broken until observed by QA.",
    "The error is actually a feature if viewed from a non-Euclidean quantum geometric perspective.",
    "Cosmic time dilation effects near your development server are causing temporal paradoxes.",
    "The compiler is clearly having an existential crisis today due to solar interference. It's not you, it's them.",
    "Electromagnetic interference from nearby microwaves is corrupting your variable assignments via butterfly effect.",
];

/// Blame deflection; ignores the error content entirely
pub fn blame(_error: &str, rng: &mut dyn RandomSource) -> String {
    pick(rng, BLAME_EXCUSES).to_string()
}

const ZEN_OPENINGS: &[&str] = &[
    "Breathe deeply. In the space between error and solution",
    "Be present with this moment of confusion. When code breaks",
    "Like water flowing around stones, let your mind flow around this obstacle",
    "In the garden of programming, even weeds teach us about growth",
    "The wise developer sees errors not as failures, but as teachers",
];

const ZEN_MIDDLES: &[&str] = &[
    "wisdom emerges from patient observation",
    "understanding blooms through gentle investigation",
    "clarity comes to those who do not rush",
    "the path reveals itself to the mindful coder",
    "solutions arise naturally when we stop forcing",
];

const ZEN_ENDINGS: &[&str] = &[
    "Return to your code with fresh eyes and renewed purpose.",
    "This too shall pass, leaving behind deeper understanding.",
    "The error contains within it the seed of its own resolution.",
    "Trust the process; debugging is just another form of meditation.",
    "Each bug encountered strengthens your wisdom for the next journey.",
];

/// Zen meditation; ignores the error content entirely
pub fn zen(_error: &str, rng: &mut dyn RandomSource) -> String {
    let opening = pick(rng, ZEN_OPENINGS);
    let middle = pick(rng, ZEN_MIDDLES);
    let ending = pick(rng, ZEN_ENDINGS);
    format!("{opening}, {middle}. {ending}")
}

const MOTIVATIONAL_TITLES: KindPool = KindPool::new(
    &[
        ("TypeError", &["PERSISTENCE"]),
        ("ReferenceError", &["PREPARATION"]),
        ("SyntaxError", &["ATTENTION TO DETAIL"]),
        ("RangeError", &["BOUNDARIES"]),
    ],
    &["RESILIENCE"],
);

const MOTIVATIONAL_QUOTES: &[&str] = &[
    "The difference between a novice and expert isn't the number of errors—it's the speed of recovery.",
    "Every error you solve makes you stronger. You're not just debugging; you're leveling up.",
    "Behind every great developer is a trail of conquered bugs and lessons learned.",
    "This error isn't a roadblock—it's your chance to become a better programmer.",
    "Success isn't the absence of errors; it's the presence of persistence and curiosity.",
    "The best developers aren't those who write perfect code, but those who fix imperfect code elegantly.",
    "Your future self will thank you for taking the time to understand this error completely.",
    "Every 'impossible' bug becomes 'obvious' once you find the solution. Keep looking!",
    "Debugging is like being a detective in a crime drama where you're also the criminal. Embrace it!",
    "The most valuable skills come from solving problems you've never seen before.",
];

/// Motivational poster: bold kind-keyed title over a random quote
pub fn motivational(error: &str, rng: &mut dyn RandomSource) -> String {
    let kind = classify(error);
    let title = pick(rng, MOTIVATIONAL_TITLES.for_kind(kind));
    let quote = pick(rng, MOTIVATIONAL_QUOTES);
    format!("<strong>{title}</strong><br><br>{quote}")
}

const TECH_SUPPORT_RESPONSES: &[&str] = &[
    "Have you tried turning your variables off and on again? Classic troubleshooting step #1.",
    "I see the problem here. Your code is working exactly as you wrote it, not as you intended it.",
    "This is a PEBKAC error: Problem Exists Between Keyboard And Chair. Very common issue.",
    "Looking at our knowledge base... ah yes, this is a Code-ID-10-T error. Please try again.",
    "Did you check if your computer is plugged in? No? Well, your logic might not be either.",
    "I'm going to need you to restart your thought process and try a different approach.",
    "This error is operating within normal parameters for untested code. Working as designed.",
    "Have you updated your assumptions recently? Try checking for outdated expectations that can cause compatibility issues.",
    "I see you're experiencing a logic leak. Try wrapping your code in some error handling.",
    "This appears to be a user-generated error. The system is working correctly; the input isn't.",
];

/// Deadpan help-desk response; ignores the error content entirely
pub fn tech_support(_error: &str, rng: &mut dyn RandomSource) -> String {
    pick(rng, TECH_SUPPORT_RESPONSES).to_string()
}

// Subject nouns scanned out of the post-colon detail text, first match in
// this order wins.
const POETIC_SUBJECTS: &[(&str, &str)] = &[
    ("undefined", "undefined value"),
    ("null", "null reference"),
    ("property", "missing property"),
    ("function", "absent function"),
];

const POETIC_VERSES: &[&str] = &[
    "Roses are red, violets are blue,<br>Your {subject} is missing, and your tests are too.",
    "Once upon a midnight dreary, while I debugged, weak and weary,<br>Over many a quaint and curious stack trace of forgotten lore,<br>Quoth the terminal: your {subject}, nothing more.",
    "Shall I compare thee to a summer's deploy?<br>Thou art more buggy and more intemperate:<br>Rough errors do shake thy {subject} from its place,<br>And production's lease hath all too short a date.",
    "I wandered lonely as a cloud<br>That floats on high o'er stacks and heaps,<br>When all at once I saw a crowd:<br>A host of errors round your {subject}.",
    "Do not go gentle into that good night;<br>Old code should burn and rave at close of day.<br>Rage, rage against the dying of the {subject}.",
];

fn poetic_subject(error: &str) -> &'static str {
    let text = detail(error);
    for (needle, noun) in POETIC_SUBJECTS {
        if text.contains(needle) {
            return noun;
        }
    }
    "code"
}

/// Verse with a subject noun derived from the post-colon detail text
pub fn poetic(error: &str, rng: &mut dyn RandomSource) -> String {
    let subject = poetic_subject(error);
    fill(*pick(rng, POETIC_VERSES), &[("subject", subject)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeqRandom;

    const TEST_ERROR: &str = "TypeError: Cannot read property 'length' of undefined";

    #[test]
    fn test_confucius_quotes_the_kind() {
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = confucius(TEST_ERROR, &mut rng);
        assert!(wisdom.contains("'TypeError'"));
        assert!(wisdom.to_lowercase().contains("confucius") || wisdom.to_lowercase().contains("wis"));
    }

    #[test]
    fn test_haiku_has_two_line_breaks() {
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = haiku(TEST_ERROR, &mut rng);
        assert_eq!(wisdom.matches("<br>").count(), 2);
    }

    #[test]
    fn test_haiku_falls_back_for_unknown_kind() {
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = haiku("WeirdError: who knows", &mut rng);
        assert_eq!(wisdom, HAIKUS.for_kind("anything")[0]);
    }

    #[test]
    fn test_tarot_positions() {
        // First draw picks the card, second decides the position
        let mut upright = SeqRandom::new([0.0, 0.9, 0.0]);
        let wisdom = tarot(TEST_ERROR, &mut upright);
        assert!(wisdom.contains("<strong>The Type Mismatch</strong>"));
        assert!(wisdom.contains("upright position"));

        let mut reversed = SeqRandom::new([0.0, 0.1, 0.0]);
        let wisdom = tarot(TEST_ERROR, &mut reversed);
        assert!(wisdom.contains("reversed position"));
    }

    #[test]
    fn test_zen_shape() {
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = zen("anything", &mut rng);
        assert!(wisdom.contains(", "));
        assert!(wisdom.ends_with('.'));
    }

    #[test]
    fn test_motivational_markup() {
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = motivational(TEST_ERROR, &mut rng);
        assert!(wisdom.starts_with("<strong>PERSISTENCE</strong>"));
        assert!(wisdom.contains("<br>"));
    }

    #[test]
    fn test_poetic_subject_priority() {
        // "undefined" wins over "property" even though both appear
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = poetic(TEST_ERROR, &mut rng);
        assert!(wisdom.contains("undefined value"));

        let wisdom = poetic("TypeError: null has no property 'x'", &mut rng);
        assert!(wisdom.contains("null reference"));

        let wisdom = poetic("Error: something odd", &mut rng);
        assert!(wisdom.contains("code"));
    }

    #[test]
    fn test_poetic_subject_only_scans_detail() {
        // No colon means no detail text, so the generic noun is used
        let mut rng = SeqRandom::new([0.0]);
        let wisdom = poetic("undefined", &mut rng);
        assert!(wisdom.contains("code"));
    }
}
