use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{FieldValue, Record};
use crate::enums::{Frequency, PaymentType, RecordStatus};

// ============================================================================
// Aggregate Root
// ============================================================================

/// ACH-платёж, ожидающий или прошедший утверждение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub recipient_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: RecordStatus,
    pub effective_date: NaiveDate,
    pub frequency: Frequency,
    pub created_at: NaiveDate,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Payment {
    /// Создать новый платёж с новым UUID; шаблон и описание не заданы
    pub fn new_for_insert(
        recipient_id: String,
        amount: f64,
        payment_type: PaymentType,
        status: RecordStatus,
        effective_date: NaiveDate,
        frequency: Frequency,
        created_at: NaiveDate,
        created_by: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            template_id: None,
            recipient_id,
            amount,
            payment_type,
            status,
            effective_date,
            frequency,
            created_at,
            created_by,
            description: None,
        }
    }

    /// Попадает ли дата исполнения в диапазон (границы включительно, пустая граница не ограничивает)
    pub fn is_effective_between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |d| self.effective_date >= d) && to.map_or(true, |d| self.effective_date <= d)
    }

    /// Сумма в формате "$ 4,750.50"
    pub fn formatted_amount(&self) -> String {
        format_usd(self.amount)
    }
}

impl Record for Payment {
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
            "template_id" => self.template_id.as_deref().map(Into::into),
            "recipient_id" => Some(self.recipient_id.as_str().into()),
            "amount" => Some(self.amount.into()),
            "payment_type" => Some(self.payment_type.code().into()),
            "status" => Some(self.status.code().into()),
            "effective_date" => Some(self.effective_date.to_string().into()),
            "frequency" => Some(self.frequency.display_name().into()),
            "created_at" => Some(self.created_at.to_string().into()),
            "created_by" => Some(self.created_by.as_str().into()),
            "description" => self.description.as_deref().map(Into::into),
            _ => None,
        }
    }

    fn collection_name() -> &'static str {
        "payment"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }
}

/// Форматирует сумму в долларах с разделителями тысяч: `4750.5` -> `"$ 4,750.50"`
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let whole: String = grouped.chars().rev().collect();
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("$ {}{}.{:02}", sign, whole, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Payment {
        Payment {
            id: "pay-001".into(),
            template_id: Some("temp-001".into()),
            recipient_id: "rec-001".into(),
            amount: 1000.0,
            payment_type: PaymentType::Ppd,
            status: RecordStatus::Pending,
            effective_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            frequency: Frequency::OneTime,
            created_at: NaiveDate::from_ymd_opt(2023, 2, 15).unwrap(),
            created_by: "Sanjna C".into(),
            description: None,
        }
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$ 0.00");
        assert_eq!(format_usd(1000.0), "$ 1,000.00");
        assert_eq!(format_usd(4750.5), "$ 4,750.50");
        assert_eq!(format_usd(1234567.891), "$ 1,234,567.89");
    }

    #[test]
    fn test_field_values() {
        let p = sample();
        assert_eq!(p.field_value("status"), Some(FieldValue::Text("pending".into())));
        assert_eq!(p.field_value("amount"), Some(FieldValue::Number(1000.0)));
        assert_eq!(p.field_value("description"), None);
        assert_eq!(p.field_value("unknown"), None);
    }

    #[test]
    fn test_effective_range() {
        let p = sample();
        let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day);
        assert!(p.is_effective_between(None, None));
        assert!(p.is_effective_between(d(3, 1), d(3, 1)));
        assert!(!p.is_effective_between(d(3, 2), None));
        assert!(!p.is_effective_between(None, d(2, 28)));
    }

    #[test]
    fn test_new_payment_gets_fresh_id() {
        let d = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        let a = Payment::new_for_insert(
            "rec-001".into(),
            10.0,
            PaymentType::Ppd,
            RecordStatus::Pending,
            d,
            Frequency::OneTime,
            d,
            "Sanjna C".into(),
        );
        let b = Payment::new_for_insert(
            "rec-001".into(),
            10.0,
            PaymentType::Ppd,
            RecordStatus::Pending,
            d,
            Frequency::OneTime,
            d,
            "Sanjna C".into(),
        );
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert_eq!(a.template_id, None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "PPD");
        assert_eq!(json["effectiveDate"], "2023-03-01");
        assert_eq!(json["status"], "pending");
        assert!(json.get("description").is_none());
    }
}
