use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error, info};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::cards::deck_list::DeckCardEntry;
use crate::cards::legality_verdict::LegalityVerdict;
use crate::error::CheckerError;
use crate::scryfall_client::CardCatalog;
use crate::utilities::debug_printer::DebugPrinter;

pub struct LegalityChecker<C: CardCatalog + 'static> {
    catalog: Arc<C>,
    max_concurrent_requests: usize,
    debug_printer: DebugPrinter,
}

impl<C: CardCatalog + 'static> LegalityChecker<C> {
    pub fn new(catalog: Arc<C>, max_concurrent_requests: usize, debug_printer: DebugPrinter) -> Self {
        LegalityChecker {
            catalog,
            max_concurrent_requests: max_concurrent_requests.max(1),
            debug_printer,
        }
    }

    /// Fetches every card on its own task and resolves it against the format.
    /// Verdicts come back in completion order, not in the order of `cards`.
    /// The first failed lookup aborts the lookups still running and is returned.
    pub async fn check_cards(
        &self,
        format: &str,
        cards: Vec<DeckCardEntry>,
    ) -> Result<Vec<LegalityVerdict>, CheckerError> {
        info!(
            "Checking {} cards for format '{}' with at most {} requests in flight",
            cards.len(),
            format,
            self.max_concurrent_requests
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_requests));
        let format: Arc<str> = Arc::from(format);

        let mut tasks: FuturesUnordered<JoinHandle<Result<LegalityVerdict, CheckerError>>> = cards
            .into_iter()
            .map(|card| {
                let catalog = Arc::clone(&self.catalog);
                let semaphore = Arc::clone(&semaphore);
                let format = Arc::clone(&format);
                let debug_printer = self.debug_printer.clone();

                tokio::spawn(async move {
                    // The semaphore is never closed so acquiring only waits
                    let _permit = semaphore.acquire_owned().await.ok();
                    let card_record = catalog.fetch_card(card.card_id()).await?;
                    Ok(LegalityVerdict::new(&card_record, &format, &debug_printer))
                })
            })
            .collect();

        let mut verdicts = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.next().await {
            match joined.map_err(CheckerError::from).and_then(|verdict| verdict) {
                Ok(verdict) => {
                    debug!("Card {} legal: {}", verdict.id, verdict.legal);
                    verdicts.push(verdict);
                }
                Err(e) => {
                    error!(
                        "Card lookup failed, aborting {} remaining lookups: {}",
                        tasks.len(),
                        e
                    );
                    for task in tasks.iter() {
                        task.abort();
                    }
                    return Err(e);
                }
            }
        }

        Ok(verdicts)
    }
}
