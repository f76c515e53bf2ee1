use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{FieldValue, Record};
use crate::enums::{PaymentType, RecordStatus};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Шаблон платежа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
    /// Маскированный счёт компании, например "******4019"
    pub company_account: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub recipient: String,
    pub amount: f64,
    pub created_at: NaiveDate,
    pub modified_at: NaiveDate,
    pub modified_by: String,
}

impl Template {
    /// Новый шаблон с новым UUID; даты создания и изменения совпадают
    pub fn new_for_insert(
        name: String,
        description: String,
        status: RecordStatus,
        company_account: String,
        payment_type: PaymentType,
        recipient: String,
        amount: f64,
        created_at: NaiveDate,
        created_by: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            status,
            company_account,
            payment_type,
            recipient,
            amount,
            created_at,
            modified_at: created_at,
            modified_by: created_by,
        }
    }
}

impl Record for Template {
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
            "description" => Some(self.description.as_str().into()),
            "status" => Some(self.status.code().into()),
            "company_account" => Some(self.company_account.as_str().into()),
            "payment_type" => Some(self.payment_type.code().into()),
            "recipient" => Some(self.recipient.as_str().into()),
            "amount" => Some(self.amount.into()),
            "created_at" => Some(self.created_at.to_string().into()),
            "modified_at" => Some(self.modified_at.to_string().into()),
            "modified_by" => Some(self.modified_by.as_str().into()),
            _ => None,
        }
    }

    fn collection_name() -> &'static str {
        "template"
    }

    fn element_name() -> &'static str {
        "Template"
    }

    fn list_name() -> &'static str {
        "Templates"
    }
}
