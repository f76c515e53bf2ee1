use serde::{Deserialize, Serialize};

/// Тип банковского счёта получателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
}

impl AccountType {
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }

    pub fn all() -> Vec<AccountType> {
        vec![AccountType::Checking, AccountType::Savings]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Checking" => Some(AccountType::Checking),
            "Savings" => Some(AccountType::Savings),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
