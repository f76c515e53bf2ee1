pub mod badge;
pub mod button;
pub mod form;

pub use badge::StatusBadge;
pub use button::Button;
pub use form::{CheckField, RadioChoice, SelectField, TextField};
