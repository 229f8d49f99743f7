//! `cgc cards`: validate a card-details file.

use cg_cards::{parse_card_details, CardDetails};

use super::CommandError;

/// One summary line for `card`.
pub fn card_summary(card: &CardDetails) -> String {
    let card_type = card
        .card_type()
        .map_or_else(|| "-".to_owned(), |t| t.to_string());
    let tribe = card.tribe().map_or_else(|| "-".to_owned(), |t| t.to_string());
    format!(
        "{:<24} {:<8} {:<10} {:?} ({} tags)",
        card.id(),
        card_type,
        tribe,
        card.name().unwrap_or(""),
        card.tags().count()
    )
}

/// `cgc cards <file>`
pub fn check_cards(path: &str) -> Result<(), CommandError> {
    let json = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })?;
    let db = parse_card_details(&json)?;
    tracing::debug!(path, cards = db.len(), "checked card file");

    for card in db.iter() {
        println!("{}", card_summary(card));
    }
    println!("{} cards OK", db.len());
    Ok(())
}
