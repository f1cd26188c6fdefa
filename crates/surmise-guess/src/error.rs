use thiserror::Error;

use crate::confidence::Confidence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid confidence '{value}': expected one of {}", Confidence::allowed_values())]
    InvalidConfidence { value: String },
}

impl GuessError {
    pub(crate) fn invalid_confidence(value: impl ToString) -> Self {
        Self::InvalidConfidence {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_confidence_message_lists_allowed_values() {
        let error = GuessError::invalid_confidence(4);
        assert_eq!(
            error.to_string(),
            "invalid confidence '4': expected one of very_high (3), high (2), medium (1), low (0)"
        );
    }
}
