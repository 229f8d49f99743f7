//! Card definitions and the card database.

use cg_enums::{tag_kind, CardType, Category, EnumId, EnumType, GameTag, TagKind, Tribe};
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{CardDataError, TagValue};

/// One card definition: its id and the tags it sets, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetails {
    id: String,
    tags: Vec<(GameTag, TagValue)>,
}

impl CardDetails {
    pub fn new(id: impl Into<String>) -> Self {
        CardDetails {
            id: id.into(),
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set `tag`, replacing any earlier value while keeping its position.
    ///
    /// The value must fit the tag's kind: an item of the tag's enum (given as
    /// [`TagValue::Enum`] or a raw [`TagValue::Int`]) for enum tags, a string
    /// for string tags, and an integer otherwise. Raw integers on enum tags
    /// are stored as enum items.
    pub fn set(&mut self, tag: GameTag, value: TagValue) -> Result<(), CardDataError> {
        let value = self.checked(tag, value)?;
        match self.tags.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, slot)) => *slot = value,
            None => self.tags.push((tag, value)),
        }
        Ok(())
    }

    pub fn get(&self, tag: GameTag) -> Option<&TagValue> {
        self.tags.iter().find(|(t, _)| *t == tag).map(|(_, v)| v)
    }

    /// Tags in document order.
    pub fn tags(&self) -> impl Iterator<Item = (GameTag, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (*tag, value))
    }

    /// The raw integer of a numeric or enum tag.
    pub fn int(&self, tag: GameTag) -> Option<i32> {
        self.get(tag).and_then(TagValue::as_int)
    }

    pub fn string(&self, tag: GameTag) -> Option<&str> {
        self.get(tag).and_then(TagValue::as_str)
    }

    /// The display name (`NAME` tag).
    pub fn name(&self) -> Option<&str> {
        self.string(GameTag::Name)
    }

    pub fn card_type(&self) -> Option<CardType> {
        self.int(GameTag::CardType).and_then(CardType::from_int)
    }

    pub fn tribe(&self) -> Option<Tribe> {
        self.int(GameTag::Tribe).and_then(Tribe::from_int)
    }
}

impl CardDetails {
    fn checked(&self, tag: GameTag, value: TagValue) -> Result<TagValue, CardDataError> {
        let kind = tag_kind(tag);
        match (kind, value) {
            (TagKind::Enum(enum_id), TagValue::Int(value)) => self.enum_item(tag, enum_id, value),
            (TagKind::Enum(enum_id), TagValue::Enum { enum_id: found, value })
                if found == enum_id =>
            {
                self.enum_item(tag, enum_id, value)
            }
            (TagKind::Scalar(Category::String), value @ TagValue::Str(_)) => Ok(value),
            (TagKind::Scalar(category), value @ TagValue::Int(_))
                if category != Category::String =>
            {
                Ok(value)
            }
            (_, value) => Err(CardDataError::WrongShape {
                card: self.id.clone(),
                tag,
                expected: kind.category(),
                found: value.kind_name(),
            }),
        }
    }

    fn enum_item(
        &self,
        tag: GameTag,
        enum_id: EnumId,
        value: i32,
    ) -> Result<TagValue, CardDataError> {
        match enum_id.type_info().int_to_name(value) {
            Ok(_) => Ok(TagValue::Enum { enum_id, value }),
            Err(source) => Err(CardDataError::InvalidEnumValue {
                card: self.id.clone(),
                tag,
                source,
            }),
        }
    }
}

/// Written as an object keyed by lower case tag name.
impl Serialize for CardDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len()))?;
        for (tag, value) in &self.tags {
            map.serialize_entry(&tag.to_string().to_ascii_lowercase(), value)?;
        }
        map.end()
    }
}

/// All loaded cards, in document order, indexed by id.
#[derive(Clone, Debug, Default)]
pub struct CardDatabase {
    cards: Vec<CardDetails>,
    index: FxHashMap<String, usize>,
}

impl CardDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card, replacing any earlier card with the same id.
    pub fn insert(&mut self, card: CardDetails) {
        if let Some(&slot) = self.index.get(card.id()) {
            self.cards[slot] = card;
        } else {
            self.index.insert(card.id.clone(), self.cards.len());
            self.cards.push(card);
        }
    }

    /// Find a card by its id.
    pub fn find(&self, id: &str) -> Option<&CardDetails> {
        self.index.get(id).map(|&slot| &self.cards[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDetails> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl PartialEq for CardDatabase {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for CardDatabase {}

impl Serialize for CardDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cards.len()))?;
        for card in &self.cards {
            map.serialize_entry(card.id(), card)?;
        }
        map.end()
    }
}
