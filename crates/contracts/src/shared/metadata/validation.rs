//! Validation rules for form fields

use chrono::NaiveDate;
use thiserror::Error;

/// Ошибка валидации одного поля формы
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be a number")]
    NotNumeric { field: String },

    #[error("{field} must contain digits only")]
    NotDigits { field: String },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: String },

    #[error("{field} must be a valid date")]
    InvalidDate { field: String },

    #[error("{field} must be at least {min}")]
    BelowMin { field: String, min: f64 },

    #[error("{field} must not exceed {max}")]
    AboveMax { field: String, max: f64 },

    #[error("{field} must contain at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: String, max: usize },
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub numeric: bool,
    pub digits_only: bool,
    pub email: bool,
    pub date: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            numeric: false,
            digits_only: false,
            email: false,
            date: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required field that must parse as a non-negative number
    pub const fn required_amount() -> Self {
        Self {
            required: true,
            numeric: true,
            min: Some(0.0),
            ..Self::none()
        }
    }

    pub const fn digits(mut self) -> Self {
        self.digits_only = true;
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Дата в формате `YYYY-MM-DD` или `MM/DD/YYYY`, см. [`parse_date`]
    pub const fn date(mut self) -> Self {
        self.date = true;
        self
    }

    /// Необязательное неотрицательное число
    pub const fn amount(mut self) -> Self {
        self.numeric = true;
        self.min = Some(0.0);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    ///
    /// Empty optional values pass without further checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(ValidationError::Required {
                    field: field_label.to_string(),
                });
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if trimmed.chars().count() < min {
                return Err(ValidationError::TooShort {
                    field: field_label.to_string(),
                    min,
                });
            }
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(ValidationError::TooLong {
                    field: field_label.to_string(),
                    max,
                });
            }
        }

        if self.digits_only && !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotDigits {
                field: field_label.to_string(),
            });
        }

        if self.email && !looks_like_email(trimmed) {
            return Err(ValidationError::InvalidEmail {
                field: field_label.to_string(),
            });
        }

        if self.date && parse_date(trimmed).is_none() {
            return Err(ValidationError::InvalidDate {
                field: field_label.to_string(),
            });
        }

        if self.numeric {
            let number = parse_number(trimmed).ok_or_else(|| ValidationError::NotNumeric {
                field: field_label.to_string(),
            })?;
            self.validate_number(number, field_label)?;
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::BelowMin {
                    field: field_label.to_string(),
                    min,
                });
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::AboveMax {
                    field: field_label.to_string(),
                    max,
                });
            }
        }

        Ok(())
    }
}

/// Разбор числа из пользовательского ввода: допускаются "$", запятые-разделители и пробелы
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Разбор даты: значение поля `<input type="date">` (`2023-03-01`) или ручной ввод `03/01/2023`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Recipient Name"),
            Err(ValidationError::Required {
                field: "Recipient Name".into()
            })
        );
        assert!(rules.validate_string("dfg", "Recipient Name").is_ok());
    }

    #[test]
    fn test_optional_blank_skips_other_checks() {
        let rules = ValidationRules::none().email();
        assert!(rules.validate_string("", "Email").is_ok());
        assert!(rules.validate_string("not-an-email", "Email").is_err());
        assert!(rules.validate_string("ar@acmesupplies.com", "Email").is_ok());
    }

    #[test]
    fn test_amount_rules() {
        let rules = ValidationRules::required_amount();
        assert!(rules.validate_string("10,000", "Payment limit").is_ok());
        assert!(rules.validate_string("$ 2500.50", "Payment limit").is_ok());
        assert_eq!(
            rules.validate_string("ten", "Payment limit"),
            Err(ValidationError::NotNumeric {
                field: "Payment limit".into()
            })
        );
        assert!(matches!(
            rules.validate_string("-5", "Payment limit"),
            Err(ValidationError::BelowMin { .. })
        ));
    }

    #[test]
    fn test_digits_and_length() {
        let rules = ValidationRules::required().digits().max_length(9);
        assert!(rules.validate_string("221982389", "Bank ID").is_ok());
        assert!(matches!(
            rules.validate_string("22198238A", "Bank ID"),
            Err(ValidationError::NotDigits { .. })
        ));
        assert!(matches!(
            rules.validate_string("2219823890", "Bank ID"),
            Err(ValidationError::TooLong { max: 9, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "Account Number".into(),
        };
        assert_eq!(err.to_string(), "Account Number is required");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,000"), Some(1000.0));
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_date_rules() {
        let rules = ValidationRules::required().date();
        assert!(rules.validate_string("2023-03-01", "Effective Date").is_ok());
        assert!(rules.validate_string("03/01/2023", "Effective Date").is_ok());
        assert_eq!(
            rules.validate_string("2023-02-30", "Effective Date"),
            Err(ValidationError::InvalidDate {
                field: "Effective Date".into()
            })
        );
        assert_eq!(
            parse_date(" 12/31/2023 "),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn test_optional_amount() {
        let rules = ValidationRules::none().amount();
        assert!(rules.validate_string("", "Template limit").is_ok());
        assert!(rules.validate_string("5,000", "Template limit").is_ok());
        assert!(matches!(
            rules.validate_string("lots", "Template limit"),
            Err(ValidationError::NotNumeric { .. })
        ));
    }
}
