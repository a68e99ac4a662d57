use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use crate::utilities::string_manipulators::normalize_format_name;

/// A card as returned by the Scryfall single card endpoint
#[allow(dead_code)]
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    #[serde(deserialize_with = "lenient::field")]
    pub object: String,
    #[serde(deserialize_with = "lenient::field")]
    pub id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::field")]
    pub released_at: String,
    #[serde(deserialize_with = "lenient::field")]
    pub uri: String,
    #[serde(deserialize_with = "lenient::field")]
    pub scryfall_uri: String,
    #[serde(deserialize_with = "lenient::field")]
    pub rarity: String,
    #[serde(deserialize_with = "lenient::field")]
    pub legalities: LegalityTable,
}

impl CardRecord {
    /// True only when the card's status for the format is exactly `legal`.
    /// Unknown formats and every other status are treated as not legal.
    pub fn is_legal_for_format(&self, format: &str) -> bool {
        matches!(self.legalities.status(format), Some(LegalityStatus::Legal))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalityStatus {
    Legal,
    NotLegal,
    Restricted,
    Banned,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            LegalityStatus::Legal => "legal",
            LegalityStatus::NotLegal => "not_legal",
            LegalityStatus::Restricted => "restricted",
            LegalityStatus::Banned => "banned",
            LegalityStatus::Unknown => "unknown",
        };
        write!(f, "{}", status)
    }
}

/// Format name to status, keyed by lowercase format name.
/// A status that is not a known string decodes as `Unknown`.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct LegalityTable(BTreeMap<String, LegalityStatus>);

impl From<BTreeMap<String, Value>> for LegalityTable {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        LegalityTable(
            raw.into_iter()
                .map(|(format, status)| {
                    let status = serde_json::from_value(status).unwrap_or(LegalityStatus::Unknown);
                    (normalize_format_name(&format), status)
                })
                .collect(),
        )
    }
}

impl LegalityTable {
    /// Case insensitive lookup of a format's status
    pub fn status(&self, format: &str) -> Option<LegalityStatus> {
        self.0.get(&normalize_format_name(format)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{judith_card_record, legality_table};

    #[test]
    fn test_deserialize_card_response() {
        let card: CardRecord = serde_json::from_str(include_str!("../test/card_resp.json")).unwrap();

        assert_eq!(card.id, "3f3a0e8c-6a1f-4c5f-9d5e-2a4b1c8e7f01");
        assert_eq!(card.name, "Judith, Carnage Connoisseur");
        assert_eq!(card.rarity, "rare");
        assert_eq!(card.legalities.len(), 22);
        assert_eq!(card.legalities.status("pauper"), Some(LegalityStatus::NotLegal));
        assert_eq!(card.legalities.status("commander"), Some(LegalityStatus::Legal));
    }

    #[test]
    fn test_legal_for_format_is_case_insensitive() {
        let card = judith_card_record();
        assert!(card.is_legal_for_format("Commander"));
        assert!(card.is_legal_for_format("commander"));
        assert!(card.is_legal_for_format(" STANDARD "));
    }

    #[test]
    fn test_not_legal_status_is_false() {
        let card = judith_card_record();
        assert!(!card.is_legal_for_format("Pauper"));
    }

    #[test]
    fn test_unknown_format_is_false() {
        let card = judith_card_record();
        assert!(!card.is_legal_for_format("Nonexistent"));
        assert!(!card.is_legal_for_format(""));
    }

    #[test]
    fn test_only_legal_status_is_true() {
        let card = CardRecord {
            id: "id".to_string(),
            name: "Black Lotus".to_string(),
            legalities: legality_table(&[
                ("vintage", "restricted"),
                ("legacy", "banned"),
                ("modern", "not_legal"),
                ("oldschool", "legal"),
                ("future", "suspended"),
            ]),
            ..Default::default()
        };
        assert!(!card.is_legal_for_format("vintage"));
        assert!(!card.is_legal_for_format("legacy"));
        assert!(!card.is_legal_for_format("modern"));
        assert!(!card.is_legal_for_format("future"));
        assert!(card.is_legal_for_format("oldschool"));
        assert_eq!(card.legalities.status("future"), Some(LegalityStatus::Unknown));
    }

    #[test]
    fn test_null_name_keeps_id_and_legalities() {
        let card: CardRecord = serde_json::from_str(
            r#"{"id": "3f3a0e8c-6a1f-4c5f-9d5e-2a4b1c8e7f01", "name": null, "rarity": 3, "legalities": {"commander": "legal"}}"#,
        )
        .unwrap();
        assert_eq!(card.id, "3f3a0e8c-6a1f-4c5f-9d5e-2a4b1c8e7f01");
        assert_eq!(card.name, "");
        assert_eq!(card.rarity, "");
        assert!(card.is_legal_for_format("Commander"));
    }

    #[test]
    fn test_bad_status_only_affects_its_format() {
        let card: CardRecord = serde_json::from_str(
            r#"{"id": "abc", "legalities": {"commander": "legal", "pauper": null, "modern": 1}}"#,
        )
        .unwrap();
        assert!(card.is_legal_for_format("commander"));
        assert_eq!(card.legalities.status("pauper"), Some(LegalityStatus::Unknown));
        assert_eq!(card.legalities.status("modern"), Some(LegalityStatus::Unknown));
        assert!(!card.is_legal_for_format("modern"));
    }

    #[test]
    fn test_missing_legalities_are_empty() {
        let card: CardRecord = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert!(card.legalities.is_empty());
        assert!(!card.is_legal_for_format("commander"));
    }

    #[test]
    fn test_table_keys_are_normalized() {
        let table = legality_table(&[("Commander", "legal")]);
        assert_eq!(table, legality_table(&[("commander", "legal")]));
        assert_eq!(table.status("COMMANDER"), Some(LegalityStatus::Legal));
    }
}
