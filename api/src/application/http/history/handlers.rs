pub mod clear_history;
pub mod get_history;
pub mod select_history_entry;
pub mod toggle_history;
