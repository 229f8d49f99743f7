//! `cgc tag`: describe a tag value.

use cg_enums::{get_tag_enum_value_name, get_tag_type, get_tag_type_info, parse_value, GameTag};

use super::CommandError;

/// Describe `value` as held by the tag called `tag_name`.
///
/// ```text
/// ZONE: ENUM Zone, 3 = DECK
/// POWER: NUMBER, 3
/// ```
pub fn describe_tag(tag_name: &str, value: &str) -> Result<String, CommandError> {
    let tag = parse_value::<GameTag>(tag_name)?;
    let raw: i32 = value
        .trim()
        .parse()
        .map_err(|_| CommandError::NotAnInteger(value.to_owned()))?;

    let category = get_tag_type(tag);
    Ok(match get_tag_type_info(tag) {
        Some(info) => format!(
            "{tag}: {category} {}, {raw} = {}",
            info.enum_name(),
            get_tag_enum_value_name(tag, raw)
        ),
        None => format!("{tag}: {category}, {raw}"),
    })
}

/// `cgc tag <TAG> <VALUE>`
pub fn print_tag(tag_name: &str, value: &str) -> Result<(), CommandError> {
    println!("{}", describe_tag(tag_name, value)?);
    Ok(())
}
