use std::fmt;
use std::str::FromStr;

use crate::error::GuessError;

/// How likely a guess is to be correct.
///
/// Variants are declared lowest first so the derived ordering is the ranking:
/// `VeryHigh > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    /// Every level, highest first.
    pub const ALL: [Confidence; 4] = [
        Confidence::VeryHigh,
        Confidence::High,
        Confidence::Medium,
        Confidence::Low,
    ];

    pub fn weight(self) -> u8 {
        match self {
            Confidence::VeryHigh => 3,
            Confidence::High => 2,
            Confidence::Medium => 1,
            Confidence::Low => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Confidence::VeryHigh => "very_high",
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// Validates a raw ranking weight.
    pub fn from_weight(weight: i64) -> Result<Self, GuessError> {
        Self::ALL
            .into_iter()
            .find(|level| i64::from(level.weight()) == weight)
            .ok_or_else(|| GuessError::invalid_confidence(weight))
    }

    pub(crate) fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|level| format!("{} ({})", level.name(), level.weight()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Confidence {
    type Error = GuessError;

    fn try_from(weight: i64) -> Result<Self, Self::Error> {
        Self::from_weight(weight)
    }
}

impl FromStr for Confidence {
    type Err = GuessError;

    /// Accepts a level name (`very_high`, `HIGH`, `very-high`) or a weight (`0`..=`3`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(weight) = trimmed.parse::<i64>() {
            return Self::from_weight(weight).map_err(|_| GuessError::invalid_confidence(raw));
        }

        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| GuessError::invalid_confidence(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_is_very_high_high_medium_low() {
        assert!(Confidence::VeryHigh > Confidence::High);
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);

        let mut sorted = Confidence::ALL;
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, Confidence::ALL);
    }

    #[test]
    fn weight_order_matches_level_order() {
        for pair in Confidence::ALL.windows(2) {
            assert!(pair[0].weight() > pair[1].weight());
        }
    }

    #[test]
    fn every_weight_round_trips() {
        for level in Confidence::ALL {
            assert_eq!(Confidence::from_weight(i64::from(level.weight())), Ok(level));
            assert_eq!(Confidence::try_from(i64::from(level.weight())), Ok(level));
        }
    }

    #[test]
    fn out_of_range_weights_are_rejected() {
        for weight in [4, -1, i64::MAX, i64::MIN] {
            assert_eq!(
                Confidence::from_weight(weight),
                Err(GuessError::InvalidConfidence {
                    value: weight.to_string()
                })
            );
        }
    }

    #[test]
    fn parses_names_and_weights() {
        assert_eq!("very_high".parse(), Ok(Confidence::VeryHigh));
        assert_eq!("Very-High".parse(), Ok(Confidence::VeryHigh));
        assert_eq!(" HIGH ".parse(), Ok(Confidence::High));
        assert_eq!("medium".parse(), Ok(Confidence::Medium));
        assert_eq!("0".parse(), Ok(Confidence::Low));
        assert_eq!("3".parse(), Ok(Confidence::VeryHigh));
    }

    #[test]
    fn rejects_garbage_with_original_input_in_error() {
        for raw in ["4", "-1", "certain", "", "1.5"] {
            let error = raw.parse::<Confidence>().unwrap_err();
            assert_eq!(
                error,
                GuessError::InvalidConfidence {
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(Confidence::VeryHigh.to_string(), "very_high");
        assert_eq!(Confidence::Low.to_string(), "low");
    }
}
