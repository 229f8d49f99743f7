//! CLI command implementations.

mod cards;
mod enums;
mod tag;

pub use cards::{card_summary, check_cards};
pub use enums::{print_enums, render_enums, EnumFormat};
pub use tag::{describe_tag, print_tag};

use cg_cards::CardDataError;
use cg_enums::LookupError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{path}`")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cards(#[from] CardDataError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("`{0}` is not an integer")]
    NotAnInteger(String),

    #[error("cannot render enums")]
    Render(#[from] serde_json::Error),
}
