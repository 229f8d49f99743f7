use super::*;
use crate::{BlockType, CardType, Category, GameTag, OptionType, Requirement, ResourceType};
use crate::{Step, Tribe, Zone};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_zone_example() {
    assert_eq!(parse_value::<Zone>("hand"), Ok(Zone::Hand));
    assert_eq!(value_name(Zone::Play), Ok("PLAY"));
    assert_eq!(enum_name::<Zone>(), "Zone");
}

#[test]
fn test_parse_value_any_casing() {
    assert_eq!(parse_value::<CardType>("unit"), Ok(CardType::Unit));
    assert_eq!(parse_value::<CardType>("UNIT"), Ok(CardType::Unit));
    assert_eq!(parse_value::<CardType>("Unit"), Ok(CardType::Unit));
    assert_eq!(parse_value::<GameTag>("max_hand_size"), Ok(GameTag::MaxHandSize));
}

#[test]
fn test_parse_value_reports_caller_spelling() {
    assert_eq!(
        parse_value::<Tribe>("Kraken"),
        Err(LookupError::UnknownName {
            enum_name: "Tribe",
            name: "Kraken".to_owned(),
        })
    );
}

#[test]
fn test_not_a_name_fails_for_every_enum() {
    fn miss<E: EnumType>() {
        let Err(err) = parse_value::<E>("NOT_A_NAME") else {
            panic!("NOT_A_NAME parsed as an item of {}", E::ENUM_NAME);
        };
        assert!(err.is_not_found());
        assert_eq!(err.enum_name(), E::ENUM_NAME);
    }

    miss::<GameTag>();
    miss::<BlockType>();
    miss::<CardType>();
    miss::<ResourceType>();
    miss::<Requirement>();
    miss::<Tribe>();
    miss::<Zone>();
    miss::<Step>();
    miss::<OptionType>();
    miss::<Category>();
}

#[test]
fn test_round_trip_every_item() {
    fn round_trip<E: EnumType>() {
        for &(name, value) in E::ITEMS {
            assert_eq!(value_name(value), Ok(name));
            assert_eq!(parse_value::<E>(name), Ok(value));
            assert_eq!(parse_value::<E>(&name.to_ascii_lowercase()), Ok(value));
        }
    }

    round_trip::<GameTag>();
    round_trip::<BlockType>();
    round_trip::<CardType>();
    round_trip::<ResourceType>();
    round_trip::<Requirement>();
    round_trip::<Tribe>();
    round_trip::<Zone>();
    round_trip::<Step>();
    round_trip::<OptionType>();
    round_trip::<Category>();
}

#[test]
fn test_std_trait_impls() {
    assert_eq!("set_aside".parse::<Zone>(), Ok(Zone::SetAside));
    assert_eq!(Zone::SetAside.to_string(), "SET_ASIDE");
    assert_eq!(Zone::try_from(3), Ok(Zone::Deck));
    assert_eq!(i32::from(Requirement::Invalid), -1);
    assert_eq!(
        Step::try_from(99),
        Err(LookupError::UnknownValue {
            enum_name: "Step",
            value: 99,
        })
    );
}

/// Flip the case of each ASCII letter according to `mask`.
fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_parse_ignores_casing(
        item in prop::sample::select(GameTag::ITEMS),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let (name, value) = item;
        let spelled = recase(name, &mask);
        prop_assert_eq!(parse_value::<GameTag>(&spelled), Ok(value));
    }

    #[test]
    fn prop_undeclared_values_fail(value in any::<i32>()) {
        let declared = Zone::ITEMS.iter().any(|&(_, zone)| zone.to_int() == value);
        prop_assert_eq!(Zone::try_from(value).is_ok(), declared);
    }
}
