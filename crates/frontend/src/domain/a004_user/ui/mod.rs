pub mod ach_limit;
pub mod edit;
pub mod list;
