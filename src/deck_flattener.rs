use log::{debug, info};

use crate::cards::deck_list::{DeckCardEntry, DeckList};
use crate::utilities::debug_printer::DebugPrinter;

/// Merges every section of the deck into one list and drops entries without a card name.
/// Entries keep their order within a section, section membership is not kept.
pub fn flatten(deck_list: DeckList, debug_printer: &DebugPrinter) -> Vec<DeckCardEntry> {
    for (section, entries) in deck_list.entries.sections() {
        debug!("Section {} has {} entries", section, entries.len());
    }

    let mut cards: Vec<DeckCardEntry> = deck_list
        .entries
        .into_sections()
        .into_iter()
        .flatten()
        .collect();

    debug_printer.print_with(|| {
        let names: Vec<&str> = cards.iter().map(|card| card.card_name()).collect();
        format!("Cards in Deck: {:?}\nCount: {}", names, cards.len())
    });

    let total = cards.len();
    cards.retain(DeckCardEntry::is_resolvable);

    info!(
        "Flattened deck '{}' into {} cards, dropped {} unnamed entries",
        deck_list.name,
        cards.len(),
        total - cards.len()
    );
    debug_printer.print_with(|| {
        let names: Vec<&str> = cards.iter().map(|card| card.card_name()).collect();
        format!("{:?}", names)
    });

    cards
}
