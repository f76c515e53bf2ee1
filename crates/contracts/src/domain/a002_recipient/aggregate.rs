use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{FieldValue, Record};
use crate::enums::{AccountType, PaymentType, RecordStatus};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Получатель ACH-платежей (мастер-список получателей)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: String,
    pub name: String,
    pub status: RecordStatus,
    /// ACH Recipient ID
    pub recipient_id: String,
    /// Routing number банка
    pub bank_id: String,
    #[serde(default)]
    pub bank_name: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub payment_type: PaymentType,
    pub ach_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<RecipientContact>,
}

/// Контактная информация получателя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecipientContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Recipient {
    /// Создать нового активного получателя с новым UUID
    pub fn new_for_insert(
        name: String,
        recipient_id: String,
        bank_id: String,
        bank_name: String,
        account_number: String,
        account_type: AccountType,
        payment_type: PaymentType,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            status: RecordStatus::Active,
            recipient_id,
            bank_id,
            bank_name,
            account_number,
            account_type,
            payment_type,
            ach_enabled: true,
            contact: None,
        }
    }

    /// Номер счёта с маской: видны только последние 4 цифры
    pub fn masked_account_number(&self) -> String {
        let digits: Vec<char> = self.account_number.chars().collect();
        if digits.len() <= 4 {
            return self.account_number.clone();
        }
        let visible: String = digits[digits.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(digits.len() - 4), visible)
    }
}

impl Record for Recipient {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "status" => Some(self.status.code().into()),
            "recipient_id" => Some(self.recipient_id.as_str().into()),
            "bank_id" => Some(self.bank_id.as_str().into()),
            "bank_name" => Some(self.bank_name.as_str().into()),
            "account_number" => Some(self.account_number.as_str().into()),
            "account_type" => Some(self.account_type.code().into()),
            "payment_type" => Some(self.payment_type.code().into()),
            "ach_enabled" => Some(self.ach_enabled.into()),
            _ => None,
        }
    }

    fn collection_name() -> &'static str {
        "recipient"
    }

    fn element_name() -> &'static str {
        "Recipient"
    }

    fn list_name() -> &'static str {
        "Recipients"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_for_insert_is_active_with_unique_id() {
        let make = || {
            Recipient::new_for_insert(
                "Joe Wells".into(),
                "SVB0922".into(),
                "257079033".into(),
                String::new(),
                "0922202201".into(),
                AccountType::Checking,
                PaymentType::Ppd,
            )
        };
        let a = make();
        let b = make();
        assert_eq!(a.status, RecordStatus::Active);
        assert!(a.ach_enabled);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_masked_account_number() {
        let mut r = Recipient::new_for_insert(
            "dfg".into(),
            "12322".into(),
            "221982389".into(),
            String::new(),
            "12345678909".into(),
            AccountType::Savings,
            PaymentType::Ppd,
        );
        assert_eq!(r.masked_account_number(), "*******8909");
        r.account_number = "123".into();
        assert_eq!(r.masked_account_number(), "123");
    }
}
