//! Type-erased enum metadata.
//!
//! [`TypeInfoBase`] lets a caller convert names and values of an enum whose
//! concrete type it does not know, only that "this tag's value is drawn
//! from enum X". There is one [`TypeInfo<E>`] per declared enum, reached
//! through `E::type_info()`, `EnumId::type_info()`, or the tag dispatch.

use std::fmt;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::casing::normalize;
use crate::{EnumType, LookupError};

/// Name/value conversion for an enum known only at runtime.
pub trait TypeInfoBase: fmt::Debug + Send + Sync {
    /// The declared enum name.
    fn enum_name(&self) -> &'static str;

    /// The raw value of the item called `name`, compared case-insensitively.
    fn name_to_int(&self, name: &str) -> Result<i32, LookupError>;

    /// The item name for raw value `value`.
    fn int_to_name(&self, value: i32) -> Result<&'static str, LookupError>;

    /// All `(name, value)` items, ordered by value.
    fn entries(&self) -> &[(&'static str, i32)];

    fn contains_int(&self, value: i32) -> bool {
        self.int_to_name(value).is_ok()
    }
}

/// Metadata for one enum `E`, usable through [`TypeInfoBase`].
pub struct TypeInfo<E> {
    enum_name: &'static str,
    name_to_int: FxHashMap<&'static str, i32>,
    int_to_name: FxHashMap<i32, &'static str>,
    entries: Vec<(&'static str, i32)>,
    marker: PhantomData<fn() -> E>,
}

impl<E: EnumType> TypeInfo<E> {
    /// Build from the enum name and its two raw tables.
    ///
    /// The tables must describe the same items; nothing here checks that
    /// beyond a debug assertion on their sizes.
    pub fn new(
        enum_name: &'static str,
        name_to_int: FxHashMap<&'static str, i32>,
        int_to_name: FxHashMap<i32, &'static str>,
    ) -> Self {
        debug_assert_eq!(
            name_to_int.len(),
            int_to_name.len(),
            "inconsistent tables for enum {enum_name}"
        );
        let mut entries: Vec<_> = int_to_name.iter().map(|(&v, &n)| (n, v)).collect();
        entries.sort_unstable_by_key(|&(_, value)| value);

        TypeInfo {
            enum_name,
            name_to_int,
            int_to_name,
            entries,
            marker: PhantomData,
        }
    }

    /// Build from a declared item list.
    pub fn from_items(enum_name: &'static str, items: &[(&'static str, E)]) -> Self {
        let name_to_int = items
            .iter()
            .map(|&(name, value)| (name, value.to_int()))
            .collect();
        let int_to_name = items
            .iter()
            .map(|&(name, value)| (value.to_int(), name))
            .collect();
        let info = Self::new(enum_name, name_to_int, int_to_name);
        tracing::debug!(enum_name, items = info.entries.len(), "built type info");
        info
    }

    /// Typed form of [`TypeInfoBase::name_to_int`].
    pub fn name_to_value(&self, name: &str) -> Result<E, LookupError> {
        let value = self.name_to_int(name)?;
        E::from_int(value).ok_or(LookupError::UnknownValue {
            enum_name: self.enum_name,
            value,
        })
    }

    /// Typed form of [`TypeInfoBase::int_to_name`].
    pub fn value_to_name(&self, value: E) -> Result<&'static str, LookupError> {
        self.int_to_name(value.to_int())
    }
}

impl<E: EnumType> TypeInfoBase for TypeInfo<E> {
    #[inline]
    fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    fn name_to_int(&self, name: &str) -> Result<i32, LookupError> {
        let key = normalize(name);
        self.name_to_int.get(&*key).copied().ok_or_else(|| {
            tracing::trace!(enum_name = self.enum_name, name, "name lookup miss");
            LookupError::unknown_name(self.enum_name, name)
        })
    }

    fn int_to_name(&self, value: i32) -> Result<&'static str, LookupError> {
        self.int_to_name.get(&value).copied().ok_or_else(|| {
            tracing::trace!(enum_name = self.enum_name, value, "value lookup miss");
            LookupError::UnknownValue {
                enum_name: self.enum_name,
                value,
            }
        })
    }

    fn entries(&self) -> &[(&'static str, i32)] {
        &self.entries
    }
}

impl<E> fmt::Debug for TypeInfo<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("enum_name", &self.enum_name)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests;
