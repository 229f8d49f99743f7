//! Lookup key normalization.
//!
//! Item names are declared in upper case, and every name lookup goes through
//! [`normalize`] first, so matching is case-insensitive regardless of how the
//! caller spelled the key.

use std::borrow::Cow;

/// Normalize a lookup key to its canonical (ASCII upper case) form.
///
/// Borrows the input when it is already canonical. Non-ASCII characters are
/// left untouched.
#[inline]
pub fn normalize(name: &str) -> Cow<'_, str> {
    if is_normalized(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.to_ascii_uppercase())
    }
}

/// Check whether `name` is already in canonical form.
#[inline]
pub fn is_normalized(name: &str) -> bool {
    !name.bytes().any(|b| b.is_ascii_lowercase())
}
