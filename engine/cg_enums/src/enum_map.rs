//! Per-enum lookup tables.
//!
//! Every declared enum implements [`EnumType`], which ties the Rust type to
//! its item list and to the two lazily built tables derived from it:
//! [`EnumMap`] for callers that know the type at compile time, and
//! [`TypeInfo`] for callers that only know it at runtime.
//!
//! Both tables are built from the same `ITEMS` slice, so they cannot drift.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::casing::{is_normalized, normalize};
use crate::{EnumId, LookupError, TypeInfo};

/// A closed enum with a declared name and a fixed `(name, value)` item list.
///
/// Implemented by the `define_enums!` declarations; not meant to be
/// implemented by hand.
pub trait EnumType: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Identity of this enum in the registry.
    const ID: EnumId;
    /// The declared enum name, e.g. `"Zone"`.
    const ENUM_NAME: &'static str;
    /// Items in declaration order. Names are upper case.
    const ITEMS: &'static [(&'static str, Self)];

    /// The raw integer value of this item.
    fn to_int(self) -> i32;

    /// The item with raw value `value`, if one is declared.
    fn from_int(value: i32) -> Option<Self>;

    /// The shared lookup table for this enum (built on first use).
    fn enum_map() -> &'static EnumMap<Self>;

    /// The shared type-erasable metadata for this enum (built on first use).
    fn type_info() -> &'static TypeInfo<Self>;
}

/// Read-only bidirectional name/value table for one enum.
///
/// # Invariants
/// - `string_to_value` and `value_to_string` are exact inverses over the
///   declared items.
/// - `string_to_int` is `string_to_value` with values widened to `i32`.
/// - Keys are stored in canonical upper case.
pub struct EnumMap<E: EnumType> {
    enum_name: &'static str,
    items: &'static [(&'static str, E)],
    value_to_string: FxHashMap<E, &'static str>,
    string_to_value: FxHashMap<&'static str, E>,
    string_to_int: FxHashMap<&'static str, i32>,
}

impl<E: EnumType> EnumMap<E> {
    /// Build the table from an item list.
    ///
    /// # Panics
    /// Panics if a name is not upper case, or if a name or value is declared
    /// twice. Both are contract violations of the enum declaration itself.
    pub fn new(enum_name: &'static str, items: &'static [(&'static str, E)]) -> Self {
        let mut value_to_string = FxHashMap::default();
        let mut string_to_value = FxHashMap::default();
        let mut string_to_int = FxHashMap::default();
        value_to_string.reserve(items.len());
        string_to_value.reserve(items.len());
        string_to_int.reserve(items.len());

        for &(name, value) in items {
            assert!(
                is_normalized(name),
                "item `{name}` of enum {enum_name} is not upper case"
            );
            if string_to_value.insert(name, value).is_some() {
                panic!("enum {enum_name} declares item `{name}` twice");
            }
            if let Some(previous) = value_to_string.insert(value, name) {
                panic!(
                    "enum {enum_name} declares value {} for both `{previous}` and `{name}`",
                    value.to_int()
                );
            }
            string_to_int.insert(name, value.to_int());
        }

        tracing::debug!(enum_name, items = items.len(), "built enum map");

        EnumMap {
            enum_name,
            items,
            value_to_string,
            string_to_value,
            string_to_int,
        }
    }

    /// The declared name of the enum.
    #[inline]
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The item name of `value`.
    pub fn value_to_string(&self, value: E) -> Result<&'static str, LookupError> {
        self.value_to_string.get(&value).copied().ok_or_else(|| {
            tracing::trace!(enum_name = self.enum_name, ?value, "value lookup miss");
            LookupError::UnknownValue {
                enum_name: self.enum_name,
                value: value.to_int(),
            }
        })
    }

    /// The item called `name`, compared case-insensitively.
    pub fn string_to_value(&self, name: &str) -> Result<E, LookupError> {
        let key = normalize(name);
        self.string_to_value
            .get(&*key)
            .copied()
            .ok_or_else(|| self.name_miss(name))
    }

    /// The raw value of the item called `name`, compared case-insensitively.
    pub fn string_to_int(&self, name: &str) -> Result<i32, LookupError> {
        let key = normalize(name);
        self.string_to_int
            .get(&*key)
            .copied()
            .ok_or_else(|| self.name_miss(name))
    }

    /// Items in declaration order.
    pub fn items(&self) -> &'static [(&'static str, E)] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn name_miss(&self, name: &str) -> LookupError {
        tracing::trace!(enum_name = self.enum_name, name, "name lookup miss");
        LookupError::unknown_name(self.enum_name, name)
    }
}

impl<E: EnumType> fmt::Debug for EnumMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumMap")
            .field("enum_name", &self.enum_name)
            .field("items", &self.items.len())
            .finish()
    }
}
