//! Card data errors.

use cg_enums::{Category, GameTag, LookupError};

/// Failure to load or write a card-details document.
#[derive(Debug, thiserror::Error)]
pub enum CardDataError {
    #[error("malformed card data")]
    Json(#[from] serde_json::Error),

    #[error("card data must be a JSON object keyed by card id")]
    NotAnObject,

    #[error("card `{card}` must be a JSON object keyed by tag name")]
    CardNotAnObject { card: String },

    #[error("card `{card}`: unknown tag `{tag}`")]
    UnknownTag {
        card: String,
        tag: String,
        #[source]
        source: LookupError,
    },

    #[error("card `{card}`: tag {tag} expects {expected}, found {found}")]
    WrongShape {
        card: String,
        tag: GameTag,
        expected: Category,
        found: &'static str,
    },

    #[error("card `{card}`: invalid value for tag {tag}")]
    InvalidEnumValue {
        card: String,
        tag: GameTag,
        #[source]
        source: LookupError,
    },

    #[error("card `{card}`: value {value} of tag {tag} is out of range")]
    OutOfRange {
        card: String,
        tag: GameTag,
        value: String,
    },
}

impl CardDataError {
    /// The card the error was raised for, if any.
    pub fn card(&self) -> Option<&str> {
        match self {
            CardDataError::Json(_) | CardDataError::NotAnObject => None,
            CardDataError::CardNotAnObject { card }
            | CardDataError::UnknownTag { card, .. }
            | CardDataError::WrongShape { card, .. }
            | CardDataError::InvalidEnumValue { card, .. }
            | CardDataError::OutOfRange { card, .. } => Some(card),
        }
    }
}
