//! Reading and writing card-details documents.
//!
//! A document is a JSON object keyed by card id. Each card is an object
//! keyed by tag name (any casing, conventionally lower case). How a value is
//! read depends on the tag's classification:
//!
//! | Tag kind | Accepted JSON |
//! |----------|---------------|
//! | string   | string |
//! | enum     | item name (any casing), or the item's integer value |
//! | other    | integer, or boolean (`true` = 1) |

use cg_enums::{parse_value, tag_kind, Category, EnumId, GameTag, TagKind};
use serde_json::{Map, Value};

use crate::{CardDataError, CardDatabase, CardDetails, TagValue};

/// Parse a card-details document.
pub fn parse_card_details(json: &str) -> Result<CardDatabase, CardDataError> {
    let Value::Object(cards) = serde_json::from_str::<Value>(json)? else {
        return Err(CardDataError::NotAnObject);
    };

    let mut db = CardDatabase::new();
    for (id, tags) in &cards {
        let Value::Object(tags) = tags else {
            return Err(CardDataError::CardNotAnObject { card: id.clone() });
        };
        db.insert(parse_card(id, tags)?);
    }

    tracing::debug!(cards = db.len(), "loaded card details");
    Ok(db)
}

/// Render `db` as a card-details document.
///
/// Tag names and enum items are written in lower case. Parsing the output
/// yields an equal database.
pub fn write_card_details(db: &CardDatabase) -> Result<String, CardDataError> {
    Ok(serde_json::to_string_pretty(db)?)
}

fn parse_card(id: &str, tags: &Map<String, Value>) -> Result<CardDetails, CardDataError> {
    let mut card = CardDetails::new(id);
    for (key, value) in tags {
        let tag = parse_value::<GameTag>(key).map_err(|source| CardDataError::UnknownTag {
            card: id.to_owned(),
            tag: key.clone(),
            source,
        })?;
        card.set(tag, parse_tag_value(id, tag, value)?)?;
    }
    tracing::trace!(card = id, tags = tags.len(), "parsed card");
    Ok(card)
}

fn parse_tag_value(card: &str, tag: GameTag, value: &Value) -> Result<TagValue, CardDataError> {
    match tag_kind(tag) {
        TagKind::Enum(enum_id) => parse_enum_value(card, tag, enum_id, value),
        TagKind::Scalar(Category::String) => match value {
            Value::String(s) => Ok(TagValue::Str(s.clone())),
            other => Err(wrong_shape(card, tag, Category::String, other)),
        },
        TagKind::Scalar(category) => match value {
            Value::Bool(b) => Ok(TagValue::Int(i32::from(*b))),
            Value::Number(_) => parse_int(card, tag, value).map(TagValue::Int),
            other => Err(wrong_shape(card, tag, category, other)),
        },
    }
}

fn parse_enum_value(
    card: &str,
    tag: GameTag,
    enum_id: EnumId,
    value: &Value,
) -> Result<TagValue, CardDataError> {
    let info = enum_id.type_info();
    let invalid = |source| CardDataError::InvalidEnumValue {
        card: card.to_owned(),
        tag,
        source,
    };

    match value {
        Value::String(name) => Ok(TagValue::Enum {
            enum_id,
            value: info.name_to_int(name).map_err(invalid)?,
        }),
        // Checked against the enum by `CardDetails::set`.
        Value::Number(_) => parse_int(card, tag, value).map(TagValue::Int),
        other => Err(wrong_shape(card, tag, Category::Enum, other)),
    }
}

fn parse_int(card: &str, tag: GameTag, value: &Value) -> Result<i32, CardDataError> {
    let out_of_range = || CardDataError::OutOfRange {
        card: card.to_owned(),
        tag,
        value: value.to_string(),
    };
    match (value.as_i64(), value.as_u64()) {
        (Some(wide), _) => i32::try_from(wide).map_err(|_| out_of_range()),
        (None, Some(_)) => Err(out_of_range()),
        (None, None) => Err(wrong_shape(card, tag, Category::Number, value)),
    }
}

fn wrong_shape(card: &str, tag: GameTag, expected: Category, found: &Value) -> CardDataError {
    CardDataError::WrongShape {
        card: card.to_owned(),
        tag,
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
