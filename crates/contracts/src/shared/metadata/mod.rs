//! Field-level metadata shared by forms
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::ValidationRules;
//!
//! const NAME: ValidationRules = ValidationRules::required().max_length(80);
//! NAME.validate_string(&draft.name, "Recipient Name")?;
//! ```

mod validation;

pub use validation::{parse_date, parse_number, ValidationError, ValidationRules};
