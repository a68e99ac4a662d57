use serde::Deserialize;

use super::lenient;

/// A deck as returned by the Scryfall deck export endpoint
#[allow(dead_code)]
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct DeckList {
    #[serde(deserialize_with = "lenient::field")]
    pub object: String,
    #[serde(deserialize_with = "lenient::field")]
    pub id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::field")]
    pub format: String,
    #[serde(deserialize_with = "lenient::field")]
    pub layout: String,
    #[serde(deserialize_with = "lenient::field")]
    pub uri: String,
    #[serde(deserialize_with = "lenient::field")]
    pub scryfall_uri: String,
    #[serde(deserialize_with = "lenient::field")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub trashed: bool,
    #[serde(deserialize_with = "lenient::field")]
    pub in_compliance: bool,
    #[serde(deserialize_with = "lenient::field")]
    pub sections: DeckSections,
    #[serde(deserialize_with = "lenient::field")]
    pub entries: DeckEntries,
}

/// Which entry categories the deck builder shows as primary and secondary
#[allow(dead_code)]
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct DeckSections {
    #[serde(deserialize_with = "lenient::list")]
    pub primary: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub secondary: Vec<String>,
}

#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct DeckEntries {
    #[serde(deserialize_with = "lenient::list")]
    pub commanders: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub mainboard: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub nonlands: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub lands: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub sideboard: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub maybeboard: Vec<DeckCardEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub outside: Vec<DeckCardEntry>,
}

impl DeckEntries {
    /// All sections in a fixed order, commanders first
    pub fn sections(&self) -> [(&'static str, &Vec<DeckCardEntry>); 7] {
        [
            ("commanders", &self.commanders),
            ("mainboard", &self.mainboard),
            ("nonlands", &self.nonlands),
            ("lands", &self.lands),
            ("sideboard", &self.sideboard),
            ("maybeboard", &self.maybeboard),
            ("outside", &self.outside),
        ]
    }

    pub fn into_sections(self) -> [Vec<DeckCardEntry>; 7] {
        [
            self.commanders,
            self.mainboard,
            self.nonlands,
            self.lands,
            self.sideboard,
            self.maybeboard,
            self.outside,
        ]
    }
}

/// One line of a decklist
#[allow(dead_code)]
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct DeckCardEntry {
    #[serde(deserialize_with = "lenient::field")]
    pub object: String,
    #[serde(deserialize_with = "lenient::field")]
    pub id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub deck_id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub section: String,
    #[serde(deserialize_with = "lenient::field")]
    pub cardinality: f64,
    #[serde(deserialize_with = "lenient::field")]
    pub count: u32,
    #[serde(deserialize_with = "lenient::field")]
    pub raw_text: String,
    #[serde(deserialize_with = "lenient::field")]
    pub found: bool,
    #[serde(deserialize_with = "lenient::field")]
    pub printing_specified: bool,
    #[serde(deserialize_with = "lenient::field")]
    pub finish: bool,
    /// Empty slots in the deck builder come back with a null digest
    #[serde(deserialize_with = "lenient::field")]
    pub card_digest: Option<CardDigest>,
}

impl DeckCardEntry {
    /// Name of the card in the digest, empty when there is no digest
    pub fn card_name(&self) -> &str {
        self.card_digest
            .as_ref()
            .map(|digest| digest.name.as_str())
            .unwrap_or("")
    }

    pub fn card_id(&self) -> &str {
        self.card_digest
            .as_ref()
            .map(|digest| digest.id.as_str())
            .unwrap_or("")
    }

    pub fn is_resolvable(&self) -> bool {
        !self.card_name().is_empty()
    }
}

#[allow(dead_code)]
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default)]
pub struct CardDigest {
    #[serde(deserialize_with = "lenient::field")]
    pub object: String,
    #[serde(deserialize_with = "lenient::field")]
    pub id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub oracle_id: String,
    #[serde(deserialize_with = "lenient::field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::field")]
    pub scryfall_uri: String,
    #[serde(deserialize_with = "lenient::field")]
    pub mana_cost: String,
    #[serde(deserialize_with = "lenient::field")]
    pub type_line: String,
    #[serde(deserialize_with = "lenient::field")]
    pub set: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub collector_number: Option<String>,
}
