//! Lookup failures.

/// A name or value that is not a declared item of an enum.
///
/// Both variants are "not found" conditions. Strict lookups never fall back
/// to a default item, so a typo or a stale value surfaces here instead of
/// being read as a valid member.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No item of `enum_name` is called `name` (compared case-insensitively).
    #[error("`{name}` is not an item of enum {enum_name}")]
    UnknownName {
        enum_name: &'static str,
        name: String,
    },
    /// No item of `enum_name` has the integer value `value`.
    #[error("{value} is not a value of enum {enum_name}")]
    UnknownValue { enum_name: &'static str, value: i32 },
}

impl LookupError {
    pub(crate) fn unknown_name(enum_name: &'static str, name: &str) -> Self {
        LookupError::UnknownName {
            enum_name,
            name: name.to_owned(),
        }
    }

    /// The enum the failed lookup was made against.
    pub fn enum_name(&self) -> &'static str {
        match self {
            LookupError::UnknownName { enum_name, .. }
            | LookupError::UnknownValue { enum_name, .. } => enum_name,
        }
    }

    /// Whether this is a not-found condition. True for every variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::UnknownName { .. } | LookupError::UnknownValue { .. }
        )
    }
}
