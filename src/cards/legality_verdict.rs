use super::card_record::CardRecord;
use crate::utilities::debug_printer::DebugPrinter;

pub const UNKNOWN_NAME_PREFIX: &str = "UNKNOWN NAME: ";

/// Whether a single card may be played in the requested format
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LegalityVerdict {
    pub id: String,
    pub name: String,
    pub legal: bool,
}

impl LegalityVerdict {
    pub fn new(card: &CardRecord, format: &str, debug_printer: &DebugPrinter) -> Self {
        debug_printer.print_with(|| format!("looking up Card info from: {}", card.id));
        let legal = Self::resolve_legality(card, format, debug_printer);
        debug_printer.print_with(|| format!("Card Legality for {} is {}", card.name, legal));

        let name = if card.name.is_empty() {
            debug_printer.print_with(|| format!("Card Name empty for {}", card.id));
            format!("{}{}", UNKNOWN_NAME_PREFIX, card.id)
        } else {
            card.name.clone()
        };

        LegalityVerdict {
            id: card.id.clone(),
            name,
            legal,
        }
    }

    fn resolve_legality(card: &CardRecord, format: &str, debug_printer: &DebugPrinter) -> bool {
        match card.legalities.status(format) {
            Some(status) => {
                debug_printer.print_with(|| format!("Card Format found: {}", status));
                card.is_legal_for_format(format)
            }
            None if card.legalities.is_empty() => {
                debug_printer.print_with(|| format!("No legalities found for {}", card.id));
                false
            }
            None => {
                debug_printer.print_with(|| {
                    format!(
                        "Invalid field: {} looking up format for {} ({} formats known)",
                        format,
                        card.id,
                        card.legalities.len()
                    )
                });
                false
            }
        }
    }
}
