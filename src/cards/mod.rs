pub mod card_record;
pub mod deck_list;
pub mod format_report;
pub mod legality_verdict;
mod lenient;
