use crate::shared::wizard::{FieldErrors, WizardForm};
use contracts::domain::a004_user::{Entitlement, LimitMode, User};
use contracts::enums::RecordStatus;
use contracts::shared::metadata::ValidationRules;

pub const DEFAULT_LANGUAGE: &str = "English (United States)";
pub const SYSTEM_ADMIN_LEVEL: &str = "system-admin";
pub const STANDARD_LEVEL: &str = "standard";

const NAME_RULES: ValidationRules = ValidationRules::required().max_length(50);
const EMAIL_RULES: ValidationRules = ValidationRules::none().email();
const PHONE_RULES: ValidationRules = ValidationRules::none().max_length(20);

/// Черновик мастера "Edit User"
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    /// id редактируемой записи
    pub id: String,

    // Шаг 1
    pub status: RecordStatus,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    // Шаг 2
    pub user_id: String,
    pub language: String,

    // Шаг 3
    pub system_admin: bool,
    pub custom_approvals: bool,
    pub payment_limits: LimitMode,
    pub access_schedule: LimitMode,
    pub entitlement: Entitlement,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            status: RecordStatus::Active,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            user_id: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            system_admin: true,
            custom_approvals: false,
            payment_limits: LimitMode::Unlimited,
            access_schedule: LimitMode::Unlimited,
            entitlement: Entitlement::Full,
        }
    }
}

impl UserDraft {
    /// Черновик из существующего пользователя
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            status: user.status,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            user_id: user.user_id.clone(),
            language: if user.language.trim().is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                user.language.clone()
            },
            system_admin: user.security_level == SYSTEM_ADMIN_LEVEL,
            custom_approvals: user.is_approver,
            payment_limits: user.payment_limits,
            access_schedule: user.access_schedule,
            entitlement: user.entitlement,
        }
    }
}

/// Изменения пользователя, полученные из мастера
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub id: String,
    draft: UserDraft,
}

impl UserUpdate {
    /// Перенести поля черновика в запись
    pub fn apply(&self, user: &mut User) {
        let d = &self.draft;
        user.status = d.status;
        user.user_id = d.user_id.trim().to_string();
        user.first_name = d.first_name.trim().to_string();
        user.last_name = d.last_name.trim().to_string();
        user.email = d.email.trim().to_string();
        user.phone = d.phone.trim().to_string();
        user.language = d.language.trim().to_string();
        user.security_level = if d.system_admin {
            SYSTEM_ADMIN_LEVEL.to_string()
        } else {
            STANDARD_LEVEL.to_string()
        };
        user.is_admin = d.system_admin;
        user.is_approver = d.custom_approvals;
        user.payment_limits = d.payment_limits;
        user.access_schedule = d.access_schedule;
        user.entitlement = d.entitlement;
    }
}

impl WizardForm for UserDraft {
    type Output = UserUpdate;

    const STEPS: usize = 3;

    fn step_title(step: usize) -> &'static str {
        match step {
            1 => "User Information",
            2 => "Login Settings",
            _ => "Security & Entitlements",
        }
    }

    fn validate_step(&self, step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => {
                errors.check("first_name", NAME_RULES, &self.first_name, "First Name");
                errors.check("last_name", NAME_RULES, &self.last_name, "Last Name");
                errors.check("email", EMAIL_RULES, &self.email, "Email Address");
                errors.check("phone", PHONE_RULES, &self.phone, "Phone Number");
            }
            2 => {
                errors.check("user_id", ValidationRules::required(), &self.user_id, "User ID");
                errors.check(
                    "language",
                    ValidationRules::required(),
                    &self.language,
                    "Default Language",
                );
            }
            _ => {}
        }
        errors
    }

    fn build(&self) -> UserUpdate {
        UserUpdate {
            id: self.id.clone(),
            draft: self.clone(),
        }
    }
}
