//! The registered enums of the rules engine.
//!
//! This is data: every enum the engine exposes by name, with its items and
//! values. Adding an item here is all it takes for it to show up in the
//! lookup tables, the registry, and `cgc enums`.

use crate::declare::define_enums;

define_enums! {
    /// Attribute identifiers carried by entities.
    pub enum GameTag {
        INVALID => Invalid = -1,
        POWER => Power = 1,
        HEALTH => Health = 2,
        TRIBE => Tribe = 3,
        CARD_TYPE => CardType = 4,
        REQUIREMENT => Requirement = 5,
        CONTROLLER => Controller = 6,
        RESOURCE_TYPE => ResourceType = 7,
        MORALE => Morale = 8,
        SUPPLY => Supply = 9,
        BATTLE => Battle = 10,
        NAME => Name = 11,
        TEXT => Text = 12,
        TERRITORY => Territory = 13,
        MAX_HAND_SIZE => MaxHandSize = 14,

        STEP => Step = 15,
        NEXT_STEP => NextStep = 16,

        CARD_ID => CardId = 17,
        ENTITY_ID => EntityId = 18,
        ZONE => Zone = 19,
        DAMAGE => Damage = 20,
        OWNER => Owner = 21,

        DECLARED_ATTACK => DeclaredAttack = 22,
        DECLARED_INTERCEPT => DeclaredIntercept = 23,

        // Keywords
        MUDDLE => Muddle = 100,
        AFTERMATH => Aftermath = 101,
        STING => Sting = 102,
        CORRUPT => Corrupt = 103,
        INSPIRE => Inspire = 104,
        EMERGE => Emerge = 105,
        SPY => Spy = 106,
        INFORM => Inform = 107,
        CONDUIT => Conduit = 108,
        // Upstream data aliases TOXIC to CONDUIT (108); tables need unique values.
        TOXIC => Toxic = 109,
        WISDOM => Wisdom = 110,
        RENEW => Renew = 111,
        FURY => Fury = 112,
        SWARM => Swarm = 113,
        HEROIC => Heroic = 114,
    }

    /// Kind of an action block in the game history.
    pub enum BlockType {
        ATTACK => Attack = 1,
        POWER => Power = 3,
        TRIGGER => Trigger = 5,
        DEATHS => Deaths = 6,
        PLAY => Play = 7,
    }

    pub enum CardType {
        INVALID => Invalid = 0,
        GAME => Game = 1,
        PLAYER => Player = 2,
        UNIT => Unit = 3,
        SPELL => Spell = 4,
        EFFECT => Effect = 5,
        TOKEN => Token = 6,
    }

    pub enum ResourceType {
        INVALID => Invalid = 0,
        MORALE => Morale = 1,
        SUPPLY => Supply = 2,
    }

    /// Targeting requirement of a card.
    pub enum Requirement {
        INVALID => Invalid = -1,
        REQ_UNIT_TARGET => UnitTarget = 0,
        REQ_ALLIED_TARGET => AlliedTarget = 1,
        REQ_ENEMY_TARGET => EnemyTarget = 2,
    }

    pub enum Tribe {
        INVALID => Invalid = 0,
        SLUG => Slug = 1,
        OCTOPI => Octopi = 2,
        MOLE => Mole = 3,
        DRAKE => Drake = 4,
        EEL => Eel = 5,
        AARD => Aard = 6,
        PHEASANT => Pheasant = 7,
    }

    pub enum Zone {
        INVALID => Invalid = 0,
        PLAY => Play = 1,
        HAND => Hand = 2,
        DECK => Deck = 3,
        DISCARD => Discard = 4,
        SET_ASIDE => SetAside = 5,
        REMOVED_FROM_GAME => RemovedFromGame = 6,
    }

    /// Turn structure.
    pub enum Step {
        INVALID => Invalid = 0,
        /// All flipped units are unflipped.
        UNFLIP => Unflip = 1,
        /// Choose to gain either 1 morale or 1 supply.
        RESOURCE => Resource = 2,
        /// Commit allied units to attack enemy units, play battle cards.
        DECLARE => Declare = 3,
        /// Choose units to intercept, play battle cards.
        RESPONSE => Response = 4,
        /// All combat resolves.
        COMBAT => Combat = 5,
        /// Play spells and units from hand.
        PLAY => Play = 6,
    }

    /// Kind of a choice offered to a player.
    pub enum OptionType {
        INVALID => Invalid = 0,
        DONE => Done = 1,
        /// Declare an attack or intercept.
        DECLARE => Declare = 2,
        /// Flip or unflip a unit.
        FLIP => Flip = 3,
        PLAY => Play = 4,
    }

    /// Shape of a tag's value.
    ///
    /// Tag dispatch only produces `ENUM`, `STRING`, `NUMBER`, `ENTITY` and
    /// `PLAYER`; the other items exist for wire compatibility.
    pub enum Category {
        LOCSTRING => LocString = -2,
        UNKNOWN => Unknown = 0,
        BOOL => Bool = 1,
        NUMBER => Number = 2,
        COUNTER => Counter = 3,
        ENTITY => Entity = 4,
        PLAYER => Player = 5,
        TEAM => Team = 6,
        ENTITY_DEFINITION => EntityDefinition = 7,
        STRING => String = 8,
        ENUM => Enum = 9,
    }
}

impl Tribe {
    /// Tribes a card can belong to.
    pub const PLAYABLE: [Tribe; 7] = [
        Tribe::Slug,
        Tribe::Octopi,
        Tribe::Mole,
        Tribe::Drake,
        Tribe::Eel,
        Tribe::Aard,
        Tribe::Pheasant,
    ];
}
