//! Tag values.

use cg_enums::{EnumId, EnumType, LookupError};
use serde::ser::{Error as _, Serialize, Serializer};

/// The value a card holds for one tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagValue {
    /// A numeric, boolean, entity, or player value.
    Int(i32),
    /// A string value.
    Str(String),
    /// An item of a registered enum.
    Enum { enum_id: EnumId, value: i32 },
}

impl TagValue {
    /// An enum item value.
    pub fn from_enum<E: EnumType>(value: E) -> Self {
        TagValue::Enum {
            enum_id: E::ID,
            value: value.to_int(),
        }
    }

    /// The raw integer, for numeric and enum values.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TagValue::Int(value) | TagValue::Enum { value, .. } => Some(*value),
            TagValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Str(s) => Some(s),
            TagValue::Int(_) | TagValue::Enum { .. } => None,
        }
    }

    /// What kind of value this is, for error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            TagValue::Int(_) => "integer",
            TagValue::Str(_) => "string",
            TagValue::Enum { enum_id, .. } => enum_id.name(),
        }
    }

    /// The item name of an enum value.
    pub fn item_name(&self) -> Option<Result<&'static str, LookupError>> {
        match self {
            TagValue::Enum { enum_id, value } => Some(enum_id.type_info().int_to_name(*value)),
            TagValue::Int(_) | TagValue::Str(_) => None,
        }
    }
}

// Enum items are written as lower case item names, the way card data files
// spell them.
impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TagValue::Int(value) => serializer.serialize_i32(*value),
            TagValue::Str(s) => serializer.serialize_str(s),
            TagValue::Enum { enum_id, value } => match enum_id.type_info().int_to_name(*value) {
                Ok(name) => serializer.serialize_str(&name.to_ascii_lowercase()),
                Err(err) => Err(S::Error::custom(err)),
            },
        }
    }
}
