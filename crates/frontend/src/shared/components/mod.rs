pub mod pagination_controls;
pub mod table_checkbox;
pub mod ui;
pub mod wizard_nav;
