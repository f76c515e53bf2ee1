use crate::shared::wizard::{FieldErrors, WizardForm};
use contracts::domain::a004_user::{AchLimits, User};
use contracts::shared::metadata::{parse_number, ValidationRules};

const APPROVALS_RULES: ValidationRules = ValidationRules::required().digits().max_length(6);
const AMOUNT_RULES: ValidationRules = ValidationRules::required_amount();

/// Подсказки шагов 1-7; поля вводятся только на последнем шаге
const GUIDE: [&str; 7] = [
    "Click Administration to begin",
    "Select Users from the menu",
    "Click on the Action dropdown button",
    "Click Edit User",
    "Check all the information and proceed",
    "Review the information",
    "Click Next to continue",
];

/// Черновик мастера "Assign ACH Limit"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchLimitDraft {
    /// id пользователя, которому назначаются лимиты
    pub user: String,
    pub approvals_per_day: String,
    pub payment_limit: String,
    pub daily_cumulation: String,
}

impl AchLimitDraft {
    pub fn for_user(user: &User) -> Self {
        Self {
            user: user.id.clone(),
            ..Self::default()
        }
    }

    /// Текст подсказки для шагов 1-7
    pub fn guide(step: usize) -> Option<&'static str> {
        step.checked_sub(1).and_then(|i| GUIDE.get(i)).copied()
    }
}

impl WizardForm for AchLimitDraft {
    type Output = (String, AchLimits);

    const STEPS: usize = 8;

    fn step_title(step: usize) -> &'static str {
        if step == Self::STEPS {
            "Required Fields"
        } else {
            "Assign ACH Limit"
        }
    }

    fn validate_step(&self, step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if step == Self::STEPS {
            errors.check(
                "approvals_per_day",
                APPROVALS_RULES,
                &self.approvals_per_day,
                "No. of approvals per day",
            );
            errors.check("payment_limit", AMOUNT_RULES, &self.payment_limit, "Payment limit");
            errors.check(
                "daily_cumulation",
                AMOUNT_RULES,
                &self.daily_cumulation,
                "Daily Cumulation",
            );
        }
        errors
    }

    fn build(&self) -> Self::Output {
        let limits = AchLimits {
            transaction: parse_number(&self.payment_limit).unwrap_or_default(),
            approvals_per_day: self.approvals_per_day.trim().parse().unwrap_or_default(),
            daily_cumulative: parse_number(&self.daily_cumulation).unwrap_or_default(),
        };
        (self.user.clone(), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Wizard, WizardError};
    use contracts::shared::mock_data::mock_users;

    fn on_last_step() -> Wizard<AchLimitDraft> {
        let mut wizard = Wizard::new();
        wizard.open_with(AchLimitDraft::for_user(&mock_users()[0]));
        for _ in 1..8 {
            wizard.next().unwrap();
        }
        wizard
    }

    #[test]
    fn test_guide_steps_need_no_input() {
        let wizard = on_last_step();
        assert_eq!(wizard.step(), Some(8));
        assert_eq!(AchLimitDraft::guide(1), Some("Click Administration to begin"));
        assert_eq!(AchLimitDraft::guide(7), Some("Click Next to continue"));
        assert_eq!(AchLimitDraft::guide(8), None);
        assert_eq!(AchLimitDraft::guide(0), None);
    }

    #[test]
    fn test_last_step_fields_required_and_numeric() {
        let mut wizard = on_last_step();
        let err = wizard.submit().unwrap_err();
        match err {
            WizardError::Invalid { step, errors } => {
                assert_eq!(step, 8);
                assert_eq!(errors.len(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        wizard.update_draft("approvals_per_day", |d| d.approvals_per_day = "ten".into());
        wizard.update_draft("payment_limit", |d| d.payment_limit = "$5,000".into());
        wizard.update_draft("daily_cumulation", |d| d.daily_cumulation = "-1".into());
        assert!(wizard.submit().is_err());
        assert!(wizard.errors().contains("approvals_per_day"));
        assert!(!wizard.errors().contains("payment_limit"));
        assert!(wizard.errors().contains("daily_cumulation"));
    }

    #[test]
    fn test_submit_builds_limits() {
        let mut wizard = on_last_step();
        wizard.update_draft("approvals_per_day", |d| d.approvals_per_day = "12".into());
        wizard.update_draft("payment_limit", |d| d.payment_limit = "5,000".into());
        wizard.update_draft("daily_cumulation", |d| d.daily_cumulation = "25000.50".into());
        let (user, limits) = wizard.submit().unwrap();
        assert_eq!(user, "user-001");
        assert_eq!(limits.approvals_per_day, 12);
        assert_eq!(limits.transaction, 5000.0);
        assert_eq!(limits.daily_cumulative, 25000.5);
        assert!(!wizard.is_open());
    }
}
