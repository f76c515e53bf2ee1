use serde::{Deserialize, Serialize};

/// Тип ACH-платежа (SEC code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentType {
    /// Prearranged Payment and Deposit
    #[default]
    #[serde(rename = "PPD")]
    Ppd,
    /// Corporate Credit or Debit
    #[serde(rename = "CCD")]
    Ccd,
}

impl PaymentType {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::Ppd => "PPD",
            PaymentType::Ccd => "CCD",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Ppd => "PPD - Prearranged Payment and Deposit",
            PaymentType::Ccd => "CCD - Corporate Credit or Debit",
        }
    }

    pub fn all() -> Vec<PaymentType> {
        vec![PaymentType::Ppd, PaymentType::Ccd]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "PPD" => Some(PaymentType::Ppd),
            "CCD" => Some(PaymentType::Ccd),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
