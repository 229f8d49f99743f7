//! Generic name/value conversion for enums known at compile time.
//!
//! These are the entry points for callers that can name `E`. They always
//! route through the enum's [`EnumMap`](crate::EnumMap), and names always
//! pass through [`normalize`] first.

use crate::casing::normalize;
use crate::{EnumType, LookupError};

/// Parse an item name (any casing) into a value of `E`.
///
/// ```
/// use cg_enums::{parse_value, Zone};
///
/// assert_eq!(parse_value::<Zone>("hand"), Ok(Zone::Hand));
/// ```
pub fn parse_value<E: EnumType>(name: &str) -> Result<E, LookupError> {
    let key = normalize(name);
    E::enum_map().string_to_value(&key).map_err(|err| match err {
        // Report the caller's spelling, not the normalized key.
        LookupError::UnknownName { enum_name, .. } => LookupError::unknown_name(enum_name, name),
        other => other,
    })
}

/// The item name of `value`.
pub fn value_name<E: EnumType>(value: E) -> Result<&'static str, LookupError> {
    E::enum_map().value_to_string(value)
}

/// The declared name of `E`.
#[inline]
pub fn enum_name<E: EnumType>() -> &'static str {
    E::enum_map().enum_name()
}

#[cfg(test)]
mod tests;
