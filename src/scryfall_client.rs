use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::cards::card_record::CardRecord;
use crate::cards::deck_list::DeckList;
use crate::error::CheckerError;
use crate::utilities::constants::{self, SCRYFALL_API_URL};
use crate::utilities::debug_printer::DebugPrinter;
use crate::utilities::string_manipulators::extract_deck_id;

/// Read only access to decks and cards
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardCatalog: Send + Sync {
    async fn fetch_deck(&self, deck_url: &str) -> Result<DeckList, CheckerError>;
    async fn fetch_card(&self, card_id: &str) -> Result<CardRecord, CheckerError>;
}

pub struct ScryfallClient {
    client: reqwest::Client,
    base_url: String,
    debug_printer: DebugPrinter,
}

impl ScryfallClient {
    pub fn new(base_url: Option<&str>, client: reqwest::Client, debug_printer: DebugPrinter) -> Self {
        ScryfallClient {
            client,
            base_url: base_url
                .unwrap_or(SCRYFALL_API_URL)
                .trim_end_matches('/')
                .to_string(),
            debug_printer,
        }
    }

    fn setup_http_headers() -> HeaderMap {
        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header_map.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        header_map
    }

    pub fn deck_export_url(&self, deck_url: &str) -> String {
        let deck_id = extract_deck_id(deck_url);
        if deck_id.is_empty() {
            warn!("No deck id found in url: {}", deck_url);
        }
        format!("{}/decks/{}/export/json", self.base_url, deck_id)
    }

    pub fn card_url(&self, card_id: &str) -> String {
        format!(
            "{}/cards/{}?format=json&pretty=true",
            self.base_url,
            encode(card_id)
        )
    }

    async fn get_body(&self, url: &str) -> Result<String, CheckerError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .headers(Self::setup_http_headers())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        self.debug_printer.print(&body);

        if !status.is_success() {
            return Err(CheckerError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(body)
    }

    /// Malformed bodies become empty records, the run keeps going
    fn decode<T>(&self, body: &str, url: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                warn!("Can not decode response from {}: {}", url, e);
                self.debug_printer.print("Can not unmarshal JSON");
                T::default()
            }
        }
    }
}

#[async_trait]
impl CardCatalog for ScryfallClient {
    async fn fetch_deck(&self, deck_url: &str) -> Result<DeckList, CheckerError> {
        let url = self.deck_export_url(deck_url);
        info!("Fetching deck list from: {}", url);
        let body = self.get_body(&url).await?;
        Ok(self.decode(&body, &url))
    }

    async fn fetch_card(&self, card_id: &str) -> Result<CardRecord, CheckerError> {
        let url = self.card_url(card_id);
        debug!("Fetching card: {}", card_id);
        let body = self.get_body(&url).await?;
        Ok(self.decode(&body, &url))
    }
}
