//! Post-experience checkup questions.

use super::mean_score;

/// Experiences that have their own question bank.
pub const CATEGORIES: [&str; 5] = ["airplane", "injection", "thunder", "darkness", "heights"];

const FALLBACK_CATEGORY: &str = "airplane";

/// Route names that map onto a category with a different bank.
const ALIASES: [(&str, &str); 1] = [("ocean", "heights")];

const AIRPLANE: [&str; 3] = [
    "How anxious do you feel about flying right now?",
    "How confident are you about taking a flight soon?",
    "How relaxed did this experience make you feel?",
];

const INJECTION: [&str; 3] = [
    "How anxious do you feel about needles right now?",
    "How confident are you about receiving an injection?",
    "How helpful was this experience?",
];

const THUNDER: [&str; 3] = [
    "How anxious do you feel about thunderstorms?",
    "How calm would you feel during a storm now?",
    "How much did this experience help you?",
];

const DARKNESS: [&str; 3] = [
    "How comfortable do you feel in darkness now?",
    "How confident are you being alone in the dark?",
    "How relaxing was this experience?",
];

const HEIGHTS: [&str; 3] = [
    "How anxious do you feel about heights right now?",
    "How confident are you at elevated places?",
    "How calming was this experience?",
];

/// Map an experience name onto the category whose bank it uses.
/// Unknown names use the airplane bank.
pub fn canonical_category(category: &str) -> &'static str {
    let lower = category.trim().to_ascii_lowercase();
    if let Some(known) = CATEGORIES.iter().find(|c| **c == lower) {
        return known;
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or(FALLBACK_CATEGORY, |(_, target)| target)
}

/// Find the experience a route like `#!/injection/intro` belongs to.
pub fn experience_from_route(route: &str) -> Option<&'static str> {
    let route = route.to_ascii_lowercase();
    CATEGORIES
        .iter()
        .copied()
        .find(|c| route.contains(c))
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| route.contains(alias))
                .map(|(_, target)| *target)
        })
}

pub fn questions(category: &str) -> &'static [&'static str] {
    match canonical_category(category) {
        "injection" => &INJECTION,
        "thunder" => &THUNDER,
        "darkness" => &DARKNESS,
        "heights" => &HEIGHTS,
        _ => &AIRPLANE,
    }
}

/// Human-readable name of an experience, as shown on the dashboard.
pub fn display_name(category: &str) -> Option<&'static str> {
    match category {
        "airplane" => Some("Fear of Flying"),
        "injection" => Some("Fear of Needles"),
        "thunder" => Some("Fear of Thunder"),
        "darkness" => Some("Fear of Darkness"),
        "heights" => Some("Fear of Heights"),
        "ocean" => Some("Fear of Water"),
        _ => None,
    }
}

/// Checkup score for a set of slider answers.
pub fn score_answers(answers: &[u8]) -> u8 {
    mean_score(answers)
}
