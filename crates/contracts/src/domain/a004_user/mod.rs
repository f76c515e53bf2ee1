pub mod aggregate;

pub use aggregate::{AchLimits, Entitlement, LimitMode, User};
