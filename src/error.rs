use thiserror::Error;

/// Failures that abort a legality check run.
/// Malformed JSON is not in here, the client degrades it to empty records instead.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scryfall returned status {status} for {url}")]
    Api { status: u16, url: String },

    #[error("card lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
