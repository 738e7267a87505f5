use serde::{Deserialize, Serialize};

/// Work location shared by candidates and openings. The set is flat: there is
/// no distance between values, only equality plus the remote carve-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[default]
    Paris,
    Lyon,
    Remote,
}

/// Keyword rules checked in order; the first rule with a matching keyword wins.
const LOCATION_RULES: &[(&[&str], Location)] = &[
    (&["paris"], Location::Paris),
    (&["lyon"], Location::Lyon),
    (&["remote", "télétravail"], Location::Remote),
];

impl Location {
    /// Guesses a location from free text using the keyword rules.
    /// Falls back to the default (`Paris`) when nothing matches.
    pub fn guess(text: &str) -> Self {
        let text_lower = text.to_lowercase();
        LOCATION_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text_lower.contains(k)))
            .map(|(_, location)| *location)
            .unwrap_or_default()
    }

    /// Whether a candidate based at `self` can take an opening located at
    /// `opening` with the given remote policy.
    pub fn is_compatible_with(self, opening: Location, remote_allowed: bool) -> bool {
        self == opening || (remote_allowed && self == Location::Remote)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Location::Paris => "paris",
            Location::Lyon => "lyon",
            Location::Remote => "remote",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_paris_takes_precedence() {
        assert_eq!(Location::guess("Lyon ou Paris, remote ok"), Location::Paris);
    }

    #[test]
    fn test_guess_lyon_before_remote() {
        assert_eq!(Location::guess("Basé à Lyon, ouvert au remote"), Location::Lyon);
    }

    #[test]
    fn test_guess_remote_keywords() {
        assert_eq!(Location::guess("Je cherche du REMOTE"), Location::Remote);
        assert_eq!(Location::guess("100% Télétravail"), Location::Remote);
    }

    #[test]
    fn test_guess_defaults_to_paris() {
        assert_eq!(Location::guess(""), Location::Paris);
        assert_eq!(Location::guess("Based in Marseille"), Location::Paris);
    }

    #[test]
    fn test_same_location_is_compatible() {
        assert!(Location::Lyon.is_compatible_with(Location::Lyon, false));
    }

    #[test]
    fn test_remote_candidate_needs_remote_allowed() {
        assert!(Location::Remote.is_compatible_with(Location::Paris, true));
        assert!(!Location::Remote.is_compatible_with(Location::Paris, false));
    }

    #[test]
    fn test_remote_allowed_does_not_help_onsite_candidates() {
        assert!(!Location::Lyon.is_compatible_with(Location::Paris, true));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Location::Remote).unwrap();
        assert_eq!(json, r#""remote""#);
        let parsed: Location = serde_json::from_str(r#""lyon""#).unwrap();
        assert_eq!(parsed, Location::Lyon);
    }
}
