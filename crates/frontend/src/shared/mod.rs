pub mod bulk_action;
pub mod components;
pub mod config;
pub mod filterable_list;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notify;
pub mod selectable_table;
pub mod toast;
pub mod wizard;
