//! Maneuver instruction text.
//!
//! Maps a provider maneuver descriptor to a Ukrainian instruction string
//! with layered fallback: the exact (type, modifier) pair first, then the
//! type alone, then a generic "continue". The table is closed; unknown
//! maneuver types degrade to the generic text rather than erroring.

use crate::domain::Maneuver;

/// Generic instruction used when nothing more specific applies.
const CONTINUE: &str = "Продовжуйте";

/// Localized instruction for a maneuver descriptor.
///
/// Pure function: identical input always yields identical output.
pub fn maneuver_text(maneuver: Option<&Maneuver>) -> &'static str {
    let Some(m) = maneuver else {
        return CONTINUE;
    };

    let modifier = m.modifier.as_deref().unwrap_or("");

    if let Some(text) = pair_text(&m.kind, modifier) {
        return text;
    }
    if let Some(text) = type_text(&m.kind) {
        return text;
    }
    CONTINUE
}

/// Exact (type, modifier) entries.
fn pair_text(kind: &str, modifier: &str) -> Option<&'static str> {
    Some(match (kind, modifier) {
        ("turn", "left") => "Поверніть ліворуч",
        ("turn", "right") => "Поверніть праворуч",
        ("turn", "slight left") => "Злегка ліворуч",
        ("turn", "slight right") => "Злегка праворуч",
        ("turn", "sharp left") => "Різко ліворуч",
        ("turn", "sharp right") => "Різко праворуч",
        ("continue", "straight") => "Продовжуйте прямо",
        _ => return None,
    })
}

/// Type-only entries, used when no pair entry matched.
fn type_text(kind: &str) -> Option<&'static str> {
    Some(match kind {
        "depart" => "Почніть рух",
        "arrive" => "Прибуття",
        "roundabout" => "Кільце",
        "rotary" => "Кільцевий рух",
        _ => return None,
    })
}
