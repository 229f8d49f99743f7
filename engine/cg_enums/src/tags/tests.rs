use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_zone_example() {
    assert_eq!(get_tag_type(GameTag::Zone), Category::Enum);
    assert_eq!(get_tag_type(GameTag::Name), Category::String);
    let Some(info) = get_tag_type_info(GameTag::Zone) else {
        panic!("ZONE should be enum-valued");
    };
    assert_eq!(info.enum_name(), "Zone");
    assert_eq!(info.int_to_name(3), Ok("DECK"));
}

#[test]
fn test_explicit_classifications() {
    assert_eq!(get_tag_type(GameTag::Tribe), Category::Enum);
    assert_eq!(get_tag_type(GameTag::CardType), Category::Enum);
    assert_eq!(get_tag_type(GameTag::Step), Category::Enum);
    assert_eq!(get_tag_type(GameTag::Controller), Category::Player);
    assert_eq!(get_tag_type(GameTag::Text), Category::String);
    assert_eq!(get_tag_type(GameTag::CardId), Category::String);
    assert_eq!(get_tag_type(GameTag::DeclaredAttack), Category::Entity);
    assert_eq!(get_tag_type(GameTag::DeclaredIntercept), Category::Entity);
}

#[test]
fn test_unlisted_tags_are_numbers() {
    for tag in [
        GameTag::Invalid,
        GameTag::Power,
        GameTag::Health,
        GameTag::NextStep,
        GameTag::Owner,
        GameTag::Heroic,
    ] {
        assert_eq!(get_tag_type(tag), Category::Number, "{tag}");
        assert!(get_tag_type_info(tag).is_none(), "{tag}");
    }
}

#[test]
fn test_enum_tags_reference_expected_enums() {
    let expected = [
        (GameTag::Tribe, "Tribe"),
        (GameTag::CardType, "CardType"),
        (GameTag::Step, "Step"),
        (GameTag::Zone, "Zone"),
    ];
    for (tag, enum_name) in expected {
        assert_eq!(
            get_tag_type_info(tag).map(|info| info.enum_name()),
            Some(enum_name)
        );
    }
}

#[test]
fn test_only_dispatch_categories_produced() {
    for &(_, tag) in GameTag::ITEMS {
        assert!(matches!(
            get_tag_type(tag),
            Category::Enum
                | Category::String
                | Category::Number
                | Category::Entity
                | Category::Player
        ));
    }
}

#[test]
fn test_tag_kind_projection() {
    assert_eq!(tag_kind(GameTag::Zone), TagKind::Enum(EnumId::Zone));
    assert_eq!(tag_kind(GameTag::Name), TagKind::Scalar(Category::String));
    assert_eq!(TagKind::Enum(EnumId::Step).category(), Category::Enum);
    assert_eq!(TagKind::Scalar(Category::Player).enum_id(), None);
}

#[test]
fn test_render_enum_values() {
    assert_eq!(get_tag_enum_value_name(GameTag::Zone, 2), "HAND");
    assert_eq!(get_tag_enum_value_name(GameTag::Tribe, 6), "AARD");
    assert_eq!(get_tag_enum_value_name(GameTag::CardType, 3), "UNIT");
    assert_eq!(get_tag_enum_value_name(GameTag::Step, 5), "COMBAT");
}

#[test]
fn test_render_unlisted_tag_is_sentinel() {
    assert_eq!(get_tag_enum_value_name(GameTag::Power, 3), UNKNOWN_NAME);
    assert_eq!(get_tag_enum_value_name(GameTag::Name, 0), "UNKNOWN");
}

#[test]
fn test_render_out_of_range_value_is_sentinel() {
    assert_eq!(get_tag_enum_value_name(GameTag::Zone, 99), UNKNOWN_NAME);
    assert_eq!(get_tag_enum_value_name(GameTag::Tribe, -1), UNKNOWN_NAME);
    assert_eq!(get_tag_enum_value_name(GameTag::Step, i32::MAX), UNKNOWN_NAME);
}

#[test]
fn test_rendered_tags_are_enum_valued() {
    for tag in RENDERED_ENUM_TAGS {
        assert_eq!(get_tag_type(tag), Category::Enum, "{tag}");
    }
}

#[test]
fn test_every_enum_tag_is_rendered() {
    for &(_, tag) in GameTag::ITEMS {
        if get_tag_type(tag) == Category::Enum {
            assert!(RENDERED_ENUM_TAGS.contains(&tag), "{tag} is not rendered");
        }
    }
}

#[test]
fn test_string_tags() {
    assert!(GameTag::Name.is_string_tag());
    assert!(GameTag::CardId.is_string_tag());
    assert!(!GameTag::Zone.is_string_tag());
    assert_eq!(GameTag::Controller.category(), Category::Player);
}

fn any_tag() -> impl Strategy<Value = GameTag> {
    prop::sample::select(GameTag::ITEMS).prop_map(|(_, tag)| tag)
}

proptest! {
    #[test]
    fn prop_enum_category_iff_type_info(tag in any_tag()) {
        let is_enum = get_tag_type(tag) == Category::Enum;
        prop_assert_eq!(is_enum, get_tag_type_info(tag).is_some());
    }

    #[test]
    fn prop_type_info_matches_tag_kind(tag in any_tag()) {
        let from_kind = tag_kind(tag).enum_id().map(EnumId::name);
        let from_info = get_tag_type_info(tag).map(|info| info.enum_name());
        prop_assert_eq!(from_kind, from_info);
    }

    #[test]
    fn prop_render_agrees_with_type_info(tag in any_tag(), value in -4i32..16) {
        let rendered = get_tag_enum_value_name(tag, value);
        if RENDERED_ENUM_TAGS.contains(&tag) {
            let expected = get_tag_type_info(tag)
                .and_then(|info| info.int_to_name(value).ok())
                .unwrap_or(UNKNOWN_NAME);
            prop_assert_eq!(rendered, expected);
        } else {
            prop_assert_eq!(rendered, UNKNOWN_NAME);
        }
    }
}
