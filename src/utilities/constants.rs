pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

pub const DEFAULT_DECK_URL: &str =
    "https://scryfall.com/@Pacobart/decks/2ca4c348-b07a-4930-8b4e-3496db97199e";
pub const DEFAULT_FORMAT: &str = "commander";

pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 25;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const DEBUG_BANNER: &str = "---------";

pub const KNOWN_FORMATS: [&str; 22] = [
    "standard",
    "future",
    "historic",
    "timeless",
    "gladiator",
    "pioneer",
    "explorer",
    "modern",
    "legacy",
    "pauper",
    "vintage",
    "penny",
    "commander",
    "oathbreaker",
    "standardbrawl",
    "brawl",
    "alchemy",
    "paupercommander",
    "duel",
    "oldschool",
    "premodern",
    "predh",
];
