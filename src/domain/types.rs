// ==========================================
// Teaching Claim - Domain types
// ==========================================
// Weekday tokens used by timetable exports.
// Sunday is not a representable token.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Weekday token
// ==========================================
// Ordered Mon..Sat, matching chrono's Monday-first numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All valid tokens in calendar order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Canonical token text ("Mon", "Tue", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    /// Parses a raw day token.
    ///
    /// The token is normalised by upper-casing the first letter and
    /// lower-casing the rest, so "MON", "mon" and "Mon" are all accepted.
    /// Full names ("Monday") are not tokens and are rejected.
    pub fn from_token(raw: &str) -> Option<Weekday> {
        let normalized = capitalize(raw.trim());
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == normalized)
    }

    /// Maps a chrono weekday; Sunday has no token.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Weekday> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Mon),
            chrono::Weekday::Tue => Some(Weekday::Tue),
            chrono::Weekday::Wed => Some(Weekday::Wed),
            chrono::Weekday::Thu => Some(Weekday::Thu),
            chrono::Weekday::Fri => Some(Weekday::Fri),
            chrono::Weekday::Sat => Some(Weekday::Sat),
            chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First letter upper-case, remainder lower-case.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_normalizes_case() {
        assert_eq!(Weekday::from_token("MON"), Some(Weekday::Mon));
        assert_eq!(Weekday::from_token("mon"), Some(Weekday::Mon));
        assert_eq!(Weekday::from_token("Mon"), Some(Weekday::Mon));
        assert_eq!(Weekday::from_token("sAT"), Some(Weekday::Sat));
    }

    #[test]
    fn test_from_token_rejects_sunday_and_full_names() {
        assert_eq!(Weekday::from_token("Sun"), None);
        assert_eq!(Weekday::from_token("Monday"), None);
        assert_eq!(Weekday::from_token(""), None);
        assert_eq!(Weekday::from_token("nan"), None);
    }

    #[test]
    fn test_from_chrono_skips_sunday() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Wed), Some(Weekday::Wed));
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tHU"), "Thu");
        assert_eq!(capitalize(""), "");
    }
}
