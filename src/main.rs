mod cards;
mod deck_flattener;
mod error;
mod legality_checker;
mod scryfall_client;
#[cfg(test)]
mod test;
mod utilities;

use std::io::{self, Write};
use std::sync::Arc;

use log::info;

use cards::format_report::FormatReport;
use error::CheckerError;
use legality_checker::LegalityChecker;
use scryfall_client::{CardCatalog, ScryfallClient};
use utilities::config::Config;
use utilities::debug_printer::DebugPrinter;

/// Fetches the deck, checks every card against the format and summarises the result
async fn check_deck_legality<C>(
    catalog: Arc<C>,
    config: &Config,
    debug_printer: DebugPrinter,
) -> Result<FormatReport, CheckerError>
where
    C: CardCatalog + 'static,
{
    let start_time = chrono::prelude::Local::now();
    info!("Starting at {}", start_time);

    let deck_list = catalog.fetch_deck(&config.deck_url).await?;
    let deck_name = deck_list.name.clone();
    let cards = deck_flattener::flatten(deck_list, &debug_printer);

    let checker = LegalityChecker::new(catalog, config.max_concurrent_requests, debug_printer);
    let verdicts = checker.check_cards(&config.format, cards).await?;
    let report = FormatReport::new(&deck_name, &config.format, &verdicts);

    let end_time = chrono::prelude::Local::now();
    info!(
        "Legality check of '{}' started at: {}. Finished at: {}. Took: {} seconds, {} legal and {} illegal cards",
        deck_name,
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        report.legal_card_count,
        report.illegal_card_count
    );
    Ok(report)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting");

    let config = Config::new();
    let debug_printer = DebugPrinter::new(config.debug);
    let client = ScryfallClient::new(
        Some(&config.scryfall_api_url),
        reqwest::Client::new(),
        debug_printer.clone(),
    );

    let report = check_deck_legality(Arc::new(client), &config, debug_printer).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.to_json_line()?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
