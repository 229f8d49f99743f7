use super::*;
use crate::{all_type_infos, EnumId, GameTag, Requirement, Step, Tribe, Zone};
use pretty_assertions::assert_eq;

#[test]
fn test_enum_name_matches_enum_map() {
    assert_eq!(TypeInfoBase::enum_name(Zone::type_info()), "Zone");
    assert_eq!(
        TypeInfoBase::enum_name(Step::type_info()),
        Step::enum_map().enum_name()
    );
}

#[test]
fn test_name_to_int() {
    let info = Zone::type_info();
    assert_eq!(info.name_to_int("DECK"), Ok(3));
    assert_eq!(info.name_to_int("deck"), Ok(3));
    assert_eq!(
        info.name_to_int("library"),
        Err(LookupError::UnknownName {
            enum_name: "Zone",
            name: "library".to_owned(),
        })
    );
}

#[test]
fn test_int_to_name() {
    let info = Zone::type_info();
    assert_eq!(info.int_to_name(1), Ok("PLAY"));
    assert_eq!(info.int_to_name(3), Ok("DECK"));
    assert_eq!(
        info.int_to_name(42),
        Err(LookupError::UnknownValue {
            enum_name: "Zone",
            value: 42,
        })
    );
    assert!(info.contains_int(0));
    assert!(!info.contains_int(-1));
}

#[test]
fn test_negative_values() {
    let info = Requirement::type_info();
    assert_eq!(info.int_to_name(-1), Ok("INVALID"));
    assert_eq!(info.name_to_int("invalid"), Ok(-1));
    assert_eq!(info.name_to_value("INVALID"), Ok(Requirement::Invalid));
}

#[test]
fn test_typed_wrappers() {
    let info = Tribe::type_info();
    assert_eq!(info.name_to_value("octopi"), Ok(Tribe::Octopi));
    assert_eq!(info.value_to_name(Tribe::Pheasant), Ok("PHEASANT"));
    assert!(info.name_to_value("KRAKEN").is_err());
}

#[test]
fn test_entries_sorted_by_value() {
    let info = GameTag::type_info();
    let entries = info.entries();
    assert_eq!(entries.len(), GameTag::ITEMS.len());
    assert_eq!(entries.first(), Some(&("INVALID", -1)));
    assert_eq!(entries.last(), Some(&("HEROIC", 114)));
    assert!(entries.windows(2).all(|w| w[0].1 < w[1].1));
}

#[test]
fn test_new_from_raw_tables() {
    let name_to_int = [("PLAY", 1), ("HAND", 2)].into_iter().collect();
    let int_to_name = [(2, "HAND"), (1, "PLAY")].into_iter().collect();
    let info: TypeInfo<Zone> = TypeInfo::new("Zone", name_to_int, int_to_name);
    assert_eq!(info.entries(), &[("PLAY", 1), ("HAND", 2)]);
    assert_eq!(info.name_to_value("hand"), Ok(Zone::Hand));
    assert!(info.int_to_name(3).is_err());
}

#[test]
fn test_agrees_with_enum_map_for_every_enum() {
    fn check<E: EnumType>() {
        let map = E::enum_map();
        let info = E::type_info();
        for &(name, value) in E::ITEMS {
            assert_eq!(map.value_to_string(value), info.int_to_name(value.to_int()));
            assert_eq!(map.string_to_int(name), info.name_to_int(name));
            assert_eq!(info.value_to_name(value), Ok(name));
            assert_eq!(info.name_to_value(name), Ok(value));
        }
        assert_eq!(info.entries().len(), map.len());
    }

    check::<GameTag>();
    check::<crate::BlockType>();
    check::<crate::CardType>();
    check::<crate::ResourceType>();
    check::<Requirement>();
    check::<Tribe>();
    check::<Zone>();
    check::<Step>();
    check::<crate::OptionType>();
    check::<crate::Category>();
    assert_eq!(all_type_infos().count(), EnumId::COUNT);
}

#[test]
fn test_usable_as_trait_object() {
    let infos: [&dyn TypeInfoBase; 2] = [Zone::type_info(), Step::type_info()];
    let names: Vec<_> = infos.iter().map(|info| info.int_to_name(1)).collect();
    assert_eq!(names, vec![Ok("PLAY"), Ok("UNFLIP")]);
}
