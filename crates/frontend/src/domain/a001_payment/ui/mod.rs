pub mod approval;
pub mod entry;
pub mod quick_entry;
