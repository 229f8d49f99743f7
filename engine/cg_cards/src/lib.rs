//! Card definition data.
//!
//! Cards are described by the tags they set. Card-details documents spell
//! tags and enum items by name, and this crate turns them into typed
//! [`CardDetails`] through the `cg_enums` lookups:
//!
//! ```
//! use cg_enums::CardType;
//!
//! let db = cg_cards::parse_card_details(r#"{
//!     "IchorExile": { "name": "Ichor Exile", "card_type": "unit", "tribe": "slug", "power": 1 }
//! }"#)?;
//! let card = db.find("IchorExile").ok_or("IchorExile is loaded")?;
//! assert_eq!(card.card_type(), Some(CardType::Unit));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod card;
mod error;
mod parse;
mod value;

pub use card::{CardDatabase, CardDetails};
pub use error::CardDataError;
pub use parse::{parse_card_details, write_card_details};
pub use value::TagValue;
