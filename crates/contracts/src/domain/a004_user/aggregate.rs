use serde::{Deserialize, Serialize};

use crate::domain::common::{FieldValue, Record};
use crate::enums::RecordStatus;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пользователь портала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Логин пользователя (только чтение в форме редактирования)
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
    pub status: RecordStatus,
    pub language: String,
    pub security_level: String,
    pub entitlement: Entitlement,
    pub is_approver: bool,
    pub is_admin: bool,
    #[serde(default)]
    pub payment_limits: LimitMode,
    #[serde(default)]
    pub access_schedule: LimitMode,
    pub ach_limits: AchLimits,
}

/// Права пользователя на шаблоны и платежи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Entitlement {
    #[default]
    Full,
    None,
    Custom,
}

impl Entitlement {
    pub fn code(&self) -> &'static str {
        match self {
            Entitlement::Full => "Full",
            Entitlement::None => "None",
            Entitlement::Custom => "Custom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "full" => Some(Entitlement::Full),
            "none" => Some(Entitlement::None),
            "custom" => Some(Entitlement::Custom),
            _ => None,
        }
    }
}

/// Режим ограничения: без ограничений или индивидуальные настройки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LimitMode {
    #[default]
    Unlimited,
    Custom,
}

impl LimitMode {
    pub fn code(&self) -> &'static str {
        match self {
            LimitMode::Unlimited => "unlimited",
            LimitMode::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LimitMode::Unlimited => "Unlimited",
            LimitMode::Custom => "Custom",
        }
    }
}

/// ACH-лимиты пользователя
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchLimits {
    /// Лимит одного платежа
    pub transaction: f64,
    /// Количество утверждений в день
    pub approvals_per_day: u32,
    /// Суммарный дневной лимит
    pub daily_cumulative: f64,
}

impl User {
    /// "Фамилия, Имя" как в таблице пользователей
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

impl Record for User {
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
            "user_id" => Some(self.user_id.as_str().into()),
            "first_name" => Some(self.first_name.as_str().into()),
            "last_name" => Some(self.last_name.as_str().into()),
            "name" => Some(self.display_name().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "status" => Some(self.status.code().into()),
            "entitlement" => Some(self.entitlement.code().into()),
            "is_approver" => Some(self.is_approver.into()),
            "is_admin" => Some(self.is_admin.into()),
            "payment_limits" => Some(self.payment_limits.code().into()),
            "access_schedule" => Some(self.access_schedule.code().into()),
            "transaction_limit" => Some(self.ach_limits.transaction.into()),
            "daily_cumulative" => Some(self.ach_limits.daily_cumulative.into()),
            _ => None,
        }
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock_data::mock_users;

    #[test]
    fn test_display_name() {
        let users = mock_users();
        assert_eq!(users[1].display_name(), "Smith, John");
        assert_eq!(users[1].field_text("name").as_deref(), Some("Smith, John"));
    }

    #[test]
    fn test_limit_modes_default_when_missing() {
        let mut json = serde_json::to_value(&mock_users()[0]).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("paymentLimits");
        object.remove("accessSchedule");
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.payment_limits, LimitMode::Unlimited);
        assert_eq!(user.access_schedule, LimitMode::Unlimited);
    }

    #[test]
    fn test_entitlement_from_code() {
        assert_eq!(Entitlement::from_code(" custom "), Some(Entitlement::Custom));
        assert_eq!(Entitlement::from_code("partial"), None);
    }
}
