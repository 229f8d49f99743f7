//! Tag classification.
//!
//! One table, [`tag_kind`], says what shape each [`GameTag`]'s value has and,
//! for enum-valued tags, which enum the value is drawn from.
//! [`get_tag_type`] and [`get_tag_type_info`] are both projections of it, so
//! a tag can never be classified `ENUM` without a registered enum behind it.

use crate::{Category, CardType, EnumId, EnumType, GameTag, Step, Tribe, TypeInfoBase, Zone};

/// Rendered by [`get_tag_enum_value_name`] when no name is available.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Tags whose values [`get_tag_enum_value_name`] renders.
///
/// Kept as an explicit list rather than derived from [`tag_kind`]: a new
/// enum-valued tag is not rendered until it is added here.
pub const RENDERED_ENUM_TAGS: [GameTag; 4] =
    [GameTag::Tribe, GameTag::CardType, GameTag::Step, GameTag::Zone];

/// Classification of a tag's value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TagKind {
    /// A non-enum value of the given category.
    Scalar(Category),
    /// An item of the given enum.
    Enum(EnumId),
}

impl TagKind {
    /// The category this kind projects to.
    pub const fn category(self) -> Category {
        match self {
            TagKind::Scalar(category) => category,
            TagKind::Enum(_) => Category::Enum,
        }
    }

    /// The enum this kind draws values from, if any.
    pub const fn enum_id(self) -> Option<EnumId> {
        match self {
            TagKind::Scalar(_) => None,
            TagKind::Enum(id) => Some(id),
        }
    }
}

/// The value classification of `tag`. Tags not listed are numbers.
pub const fn tag_kind(tag: GameTag) -> TagKind {
    match tag {
        GameTag::Tribe => TagKind::Enum(EnumId::Tribe),
        GameTag::CardType => TagKind::Enum(EnumId::CardType),
        GameTag::Step => TagKind::Enum(EnumId::Step),
        GameTag::Zone => TagKind::Enum(EnumId::Zone),

        GameTag::Controller => TagKind::Scalar(Category::Player),

        GameTag::Name | GameTag::Text | GameTag::CardId => TagKind::Scalar(Category::String),

        GameTag::DeclaredAttack | GameTag::DeclaredIntercept => {
            TagKind::Scalar(Category::Entity)
        }

        _ => TagKind::Scalar(Category::Number),
    }
}

/// The category of `tag`'s value. Never fails.
#[inline]
pub const fn get_tag_type(tag: GameTag) -> Category {
    tag_kind(tag).category()
}

/// The enum metadata for `tag`, present exactly when `tag` is enum-valued.
pub fn get_tag_type_info(tag: GameTag) -> Option<&'static dyn TypeInfoBase> {
    tag_kind(tag).enum_id().map(EnumId::type_info)
}

/// Render `value` as an item name of `tag`'s enum, for diagnostics.
///
/// Only tags in [`RENDERED_ENUM_TAGS`] are rendered. Any other tag, and any
/// value that is not a declared item, renders as [`UNKNOWN_NAME`].
pub fn get_tag_enum_value_name(tag: GameTag, value: i32) -> &'static str {
    let info: &'static dyn TypeInfoBase = match tag {
        GameTag::Tribe => Tribe::type_info(),
        GameTag::CardType => CardType::type_info(),
        GameTag::Step => Step::type_info(),
        GameTag::Zone => Zone::type_info(),
        _ => return UNKNOWN_NAME,
    };

    match info.int_to_name(value) {
        Ok(name) => name,
        Err(err) => {
            tracing::debug!(%tag, value, %err, "rendering unknown tag value");
            UNKNOWN_NAME
        }
    }
}

impl GameTag {
    /// The category of this tag's value.
    #[inline]
    pub const fn category(self) -> Category {
        get_tag_type(self)
    }

    /// Whether this tag carries a string.
    pub fn is_string_tag(self) -> bool {
        self.category() == Category::String
    }
}

#[cfg(test)]
mod tests;
