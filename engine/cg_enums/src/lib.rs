//! Card game enum registry and tag type introspection.
//!
//! This crate owns the closed set of enums the rules engine exposes by name,
//! and answers three questions about them:
//! - name ↔ value conversion, generic over the enum ([`parse_value`],
//!   [`value_name`], [`EnumMap`])
//! - name ↔ value conversion when the enum is only known at runtime
//!   ([`TypeInfoBase`], [`TypeInfo`], [`EnumId`])
//! - what a [`GameTag`]'s value is ([`get_tag_type`], [`get_tag_type_info`],
//!   [`get_tag_enum_value_name`])
//!
//! # Lookup discipline
//!
//! - **Strict**: codec and table lookups return [`LookupError`] on a miss.
//! - **Best-effort**: [`get_tag_enum_value_name`] renders misses as
//!   [`UNKNOWN_NAME`].
//! - **Total**: [`get_tag_type`] always answers; unlisted tags are numbers.
//!
//! Name lookups are case-insensitive. All tables are built lazily on first
//! use behind `OnceLock` and are immutable afterwards.
//!
//! # Example
//!
//! ```
//! use cg_enums::{get_tag_type, get_tag_type_info, Category, GameTag};
//!
//! assert_eq!(get_tag_type(GameTag::Zone), Category::Enum);
//! let info = get_tag_type_info(GameTag::Zone).ok_or("ZONE is enum-valued")?;
//! assert_eq!(info.int_to_name(3), Ok("DECK"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod casing;
mod codec;
mod declare;
mod enum_map;
mod enums;
mod error;
mod registry;
mod tags;
mod type_info;

pub use casing::{is_normalized, normalize};
pub use codec::{enum_name, parse_value, value_name};
pub use enum_map::{EnumMap, EnumType};
pub use enums::{
    BlockType, CardType, Category, EnumId, GameTag, OptionType, Requirement, ResourceType, Step,
    Tribe, Zone,
};
pub use error::LookupError;
pub use registry::{all_type_infos, find_type_info};
pub use tags::{
    get_tag_enum_value_name, get_tag_type, get_tag_type_info, tag_kind, TagKind,
    RENDERED_ENUM_TAGS, UNKNOWN_NAME,
};
pub use type_info::{TypeInfo, TypeInfoBase};
