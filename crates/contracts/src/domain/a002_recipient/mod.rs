pub mod aggregate;

pub use aggregate::{Recipient, RecipientContact};
