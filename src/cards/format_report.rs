use serde::Serialize;

use super::legality_verdict::LegalityVerdict;

/// The summary printed at the end of a run
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatReport {
    pub deck_name: String,
    pub format: String,
    pub legal_card_count: usize,
    pub illegal_card_count: usize,
    pub legal_cards: Vec<String>,
    pub illegal_cards: Vec<String>,
}

impl FormatReport {
    /// Splits verdicts into legal and illegal names, keeping the order the verdicts came in
    pub fn new(deck_name: &str, format: &str, verdicts: &[LegalityVerdict]) -> Self {
        let (legal, illegal): (Vec<&LegalityVerdict>, Vec<&LegalityVerdict>) =
            verdicts.iter().partition(|verdict| verdict.legal);

        let legal_cards: Vec<String> = legal.into_iter().map(|v| v.name.clone()).collect();
        let illegal_cards: Vec<String> = illegal.into_iter().map(|v| v.name.clone()).collect();

        FormatReport {
            deck_name: deck_name.to_string(),
            format: format.to_string(),
            legal_card_count: legal_cards.len(),
            illegal_card_count: illegal_cards.len(),
            legal_cards,
            illegal_cards,
        }
    }

    /// Report as a single line of JSON followed by a newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        Ok(format!("{}\n", serde_json::to_string(self)?))
    }
}
