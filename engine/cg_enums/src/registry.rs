//! Registry of every declared enum, indexed by [`EnumId`].
//!
//! The set is closed: it is fixed by the `define_enums!` declaration and
//! nothing can be added at runtime.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::{EnumId, TypeInfoBase};

static BY_NAME: OnceLock<FxHashMap<&'static str, EnumId>> = OnceLock::new();

fn by_name() -> &'static FxHashMap<&'static str, EnumId> {
    BY_NAME.get_or_init(|| EnumId::ALL.iter().map(|&id| (id.name(), id)).collect())
}

impl EnumId {
    /// Look up an enum by its declared name (case-sensitive: these are type
    /// names, not item names).
    pub fn from_name(name: &str) -> Option<EnumId> {
        by_name().get(name).copied()
    }
}

/// Metadata for every registered enum, in [`EnumId::ALL`] order.
pub fn all_type_infos() -> impl Iterator<Item = &'static dyn TypeInfoBase> {
    EnumId::ALL.iter().copied().map(EnumId::type_info)
}

/// Metadata for the enum declared as `enum_name`.
pub fn find_type_info(enum_name: &str) -> Option<&'static dyn TypeInfoBase> {
    EnumId::from_name(enum_name).map(EnumId::type_info)
}
