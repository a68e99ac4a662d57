use std::collections::BTreeMap;

use crate::cards::card_record::{CardRecord, LegalityTable};
use crate::cards::deck_list::{CardDigest, DeckCardEntry};

pub const JUDITH_ID: &str = "3f3a0e8c-6a1f-4c5f-9d5e-2a4b1c8e7f01";
pub const DECK_ID: &str = "2ca4c348-b07a-4930-8b4e-3496db97199e";

pub fn legality_table(statuses: &[(&str, &str)]) -> LegalityTable {
    let raw: BTreeMap<&str, &str> = statuses.iter().copied().collect();
    serde_json::from_value(serde_json::json!(raw)).unwrap()
}

pub fn judith_card_record() -> CardRecord {
    CardRecord {
        object: "card".to_string(),
        id: JUDITH_ID.to_string(),
        name: "Judith, Carnage Connoisseur".to_string(),
        legalities: legality_table(&[
            ("standard", "legal"),
            ("commander", "legal"),
            ("pauper", "not_legal"),
        ]),
        ..Default::default()
    }
}

pub fn card_record(id: &str, name: &str, statuses: &[(&str, &str)]) -> CardRecord {
    CardRecord {
        object: "card".to_string(),
        id: id.to_string(),
        name: name.to_string(),
        legalities: legality_table(statuses),
        ..Default::default()
    }
}

pub fn deck_entry(card_id: &str, card_name: &str) -> DeckCardEntry {
    DeckCardEntry {
        object: "deck_entry".to_string(),
        id: format!("entry-{}", card_id),
        deck_id: DECK_ID.to_string(),
        count: 1,
        found: true,
        card_digest: Some(CardDigest {
            object: "card_digest".to_string(),
            id: card_id.to_string(),
            name: card_name.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn empty_deck_entry(entry_id: &str) -> DeckCardEntry {
    DeckCardEntry {
        object: "deck_entry".to_string(),
        id: entry_id.to_string(),
        deck_id: DECK_ID.to_string(),
        card_digest: None,
        ..Default::default()
    }
}
