use std::env;

use log::warn;

use super::constants::{
    DEFAULT_DECK_URL, DEFAULT_FORMAT, DEFAULT_MAX_CONCURRENT_REQUESTS, KNOWN_FORMATS,
    SCRYFALL_API_URL,
};
use super::string_manipulators::normalize_format_name;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub deck_url: String,
    pub format: String,
    pub debug: bool,
    pub max_concurrent_requests: usize,
    pub scryfall_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_url: DEFAULT_DECK_URL.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            debug: false,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            scryfall_api_url: SCRYFALL_API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from(|key| env::var(key).ok());
        config
    }

    fn update_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(deck_url) = lookup("DECK_URL") {
            if !deck_url.trim().is_empty() {
                self.deck_url = deck_url.trim().to_string();
            }
        }
        if let Some(format) = lookup("FORMAT") {
            if !format.trim().is_empty() {
                self.format = format.trim().to_string();
            }
        }
        if let Some(debug) = lookup("DEBUG") {
            self.debug = debug == "1";
        }
        if let Some(max_concurrent_requests) = lookup("MAX_CONCURRENT_REQUESTS") {
            self.max_concurrent_requests = match max_concurrent_requests.parse() {
                Ok(0) | Err(_) => {
                    warn!(
                        "Invalid MAX_CONCURRENT_REQUESTS '{}', using {}",
                        max_concurrent_requests, DEFAULT_MAX_CONCURRENT_REQUESTS
                    );
                    DEFAULT_MAX_CONCURRENT_REQUESTS
                }
                Ok(value) => value,
            };
        }
        if let Some(api_url) = lookup("SCRYFALL_API_URL") {
            if !api_url.is_empty() {
                self.scryfall_api_url = api_url.trim_end_matches('/').to_string();
            }
        }

        if !self.is_known_format() {
            warn!(
                "Format '{}' is not a known format, every card will be reported as illegal",
                self.format
            );
        }
    }

    pub fn is_known_format(&self) -> bool {
        KNOWN_FORMATS.contains(&normalize_format_name(&self.format).as_str())
    }
}
