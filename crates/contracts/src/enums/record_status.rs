use serde::{Deserialize, Serialize};

/// Статус записи (платёж, получатель, шаблон, пользователь)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Active,
    Inactive,
    Incomplete,
    Error,
    Approved,
    Rejected,
    Draft,
    Scheduled,
    Completed,
    Complete,
    Overdue,
    Reversed,
}

impl RecordStatus {
    /// Получить код статуса (как он хранится в данных)
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Incomplete => "incomplete",
            RecordStatus::Error => "error",
            RecordStatus::Approved => "approved",
            RecordStatus::Rejected => "rejected",
            RecordStatus::Draft => "draft",
            RecordStatus::Scheduled => "scheduled",
            RecordStatus::Completed => "completed",
            RecordStatus::Complete => "complete",
            RecordStatus::Overdue => "overdue",
            RecordStatus::Reversed => "reversed",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Incomplete => "Incomplete",
            RecordStatus::Error => "Error",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
            RecordStatus::Draft => "Draft",
            RecordStatus::Scheduled => "Scheduled",
            RecordStatus::Completed => "Completed",
            RecordStatus::Complete => "Complete",
            RecordStatus::Overdue => "Overdue",
            RecordStatus::Reversed => "Reversed",
        }
    }

    /// Вариант бейджа для отображения статуса
    pub fn badge_variant(&self) -> &'static str {
        match self {
            RecordStatus::Approved
            | RecordStatus::Active
            | RecordStatus::Completed
            | RecordStatus::Complete => "success",
            RecordStatus::Pending | RecordStatus::Scheduled | RecordStatus::Draft => "warning",
            RecordStatus::Rejected
            | RecordStatus::Error
            | RecordStatus::Overdue
            | RecordStatus::Reversed => "error",
            RecordStatus::Incomplete | RecordStatus::Inactive => "neutral",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<RecordStatus> {
        vec![
            RecordStatus::Pending,
            RecordStatus::Active,
            RecordStatus::Inactive,
            RecordStatus::Incomplete,
            RecordStatus::Error,
            RecordStatus::Approved,
            RecordStatus::Rejected,
            RecordStatus::Draft,
            RecordStatus::Scheduled,
            RecordStatus::Completed,
            RecordStatus::Complete,
            RecordStatus::Overdue,
            RecordStatus::Reversed,
        ]
    }

    /// Парсинг из строки (без учёта регистра: "Active" и "active" равнозначны)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(RecordStatus::from_code("Active"), Some(RecordStatus::Active));
        assert_eq!(RecordStatus::from_code("pending"), Some(RecordStatus::Pending));
        assert_eq!(RecordStatus::from_code(" REVERSED "), Some(RecordStatus::Reversed));
        assert_eq!(RecordStatus::from_code("All Status"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&RecordStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
        let parsed: RecordStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, RecordStatus::Approved);
    }
}
