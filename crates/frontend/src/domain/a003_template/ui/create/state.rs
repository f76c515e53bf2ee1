use crate::shared::notify::Notifier;
use crate::shared::wizard::FieldErrors;
use chrono::NaiveDate;
use contracts::domain::a002_recipient::Recipient;
use contracts::domain::a003_template::Template;
use contracts::enums::{PaymentType, RecordStatus};
use contracts::shared::metadata::{parse_number, ValidationRules};

const ACTIVATION_DATE_RULES: ValidationRules = ValidationRules::required().date();
const TEMPLATE_LIMIT_RULES: ValidationRules = ValidationRules::none().amount();

/// Форма шаблона PPD
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PpdTemplateForm {
    pub activation_date: String,
    pub name: String,
    pub originating_account: String,
    pub originating_ach_company_id: String,
    pub company_entry_description: String,
    pub company_discretionary_data: String,
    pub template_limit: String,
    pub recipients: Vec<Recipient>,
}

impl PpdTemplateForm {
    /// Пустая форма, дата активации по умолчанию сегодня
    pub fn new(today: NaiveDate) -> Self {
        Self {
            activation_date: today.to_string(),
            ..Self::default()
        }
    }

    pub fn recipient_ids(&self) -> Vec<String> {
        self.recipients.iter().map(|r| r.id.clone()).collect()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "activation_date",
            ACTIVATION_DATE_RULES,
            &self.activation_date,
            "Template activation date",
        );
        errors.check("name", ValidationRules::required(), &self.name, "Template name");
        errors.check(
            "originating_account",
            ValidationRules::required(),
            &self.originating_account,
            "Originating account",
        );
        errors.check(
            "originating_ach_company_id",
            ValidationRules::required(),
            &self.originating_ach_company_id,
            "Originating ACH Company ID",
        );
        errors.check(
            "company_entry_description",
            ValidationRules::required(),
            &self.company_entry_description,
            "Company entry description",
        );
        errors.check(
            "template_limit",
            TEMPLATE_LIMIT_RULES,
            &self.template_limit,
            "Template limit",
        );
        errors
    }

    /// Получатель в списке шаблонов: имя единственного получателя или их число
    fn recipient_summary(&self) -> String {
        match self.recipients.as_slice() {
            [] => String::new(),
            [single] => single.name.clone(),
            many => format!("{} recipients", many.len()),
        }
    }

    fn build(&self, status: RecordStatus, today: NaiveDate, created_by: &str) -> Template {
        Template::new_for_insert(
            self.name.trim().to_string(),
            self.company_entry_description.trim().to_string(),
            status,
            self.originating_account.clone(),
            PaymentType::Ppd,
            self.recipient_summary(),
            parse_number(&self.template_limit).unwrap_or_default(),
            today,
            created_by.to_string(),
        )
    }
}

/// Состояние формы создания шаблона PPD
#[derive(Debug, Clone, Default)]
pub struct PpdTemplateState {
    pub form: PpdTemplateForm,
    pub errors: FieldErrors,
}

impl PpdTemplateState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: PpdTemplateForm::new(today),
            errors: FieldErrors::new(),
        }
    }

    /// Изменить форму; ошибка поля снимается
    pub fn update(&mut self, field: &str, f: impl FnOnce(&mut PpdTemplateForm)) {
        f(&mut self.form);
        self.errors.remove(field);
    }

    /// "Done" в диалоге выбора получателей
    pub fn set_recipients(&mut self, recipients: Vec<Recipient>, notifier: &impl Notifier) {
        let count = recipients.len();
        self.form.recipients = recipients;
        notifier.notify(
            "Recipients Selected",
            &format!("Added {} recipients to the template.", count),
        );
    }

    pub fn remove_recipient(&mut self, id: &str) -> bool {
        let before = self.form.recipients.len();
        self.form.recipients.retain(|r| r.id != id);
        self.form.recipients.len() != before
    }

    /// "Continue": проверенный шаблон уходит на утверждение (Pending)
    pub fn submit(
        &mut self,
        today: NaiveDate,
        created_by: &str,
        notifier: &impl Notifier,
    ) -> Result<Template, FieldErrors> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        let template = self.form.build(RecordStatus::Pending, today, created_by);
        log::info!("template {} saved", template.id);
        notifier.notify(
            "Template Information Updated",
            "Your PPD template information has been updated.",
        );
        Ok(template)
    }

    /// "Save Incomplete": черновик сохраняется без проверки полей
    pub fn save_incomplete(
        &mut self,
        today: NaiveDate,
        created_by: &str,
        notifier: &impl Notifier,
    ) -> Template {
        self.errors.clear();
        let template = self.form.build(RecordStatus::Draft, today, created_by);
        log::info!("template {} saved as draft", template.id);
        notifier.notify("Draft Saved", "Your template has been saved as a draft.");
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::RecordingNotifier;
    use contracts::shared::mock_data::mock_recipients;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
    }

    fn filled() -> PpdTemplateState {
        let mut state = PpdTemplateState::new(today());
        state.update("name", |f| f.name = " Bi-weekly payroll ".into());
        state.update("originating_account", |f| f.originating_account = "Account 1".into());
        state.update("originating_ach_company_id", |f| {
            f.originating_ach_company_id = "7451266791 - E2ETesting7".into()
        });
        state.update("company_entry_description", |f| {
            f.company_entry_description = "PAYROLL".into()
        });
        state
    }

    #[test]
    fn test_activation_date_defaults_to_today() {
        let state = PpdTemplateState::new(today());
        assert_eq!(state.form.activation_date, "2023-03-01");
    }

    #[test]
    fn test_required_field_messages() {
        let mut state = PpdTemplateState::new(today());
        state.update("activation_date", |f| f.activation_date.clear());
        let notifier = RecordingNotifier::new();
        let errors = state.submit(today(), "Sanjna C", &notifier).unwrap_err();

        let message = |field| errors.message(field).unwrap_or_default();
        assert_eq!(message("activation_date"), "Template activation date is required");
        assert_eq!(message("name"), "Template name is required");
        assert_eq!(message("originating_account"), "Originating account is required");
        assert_eq!(
            message("originating_ach_company_id"),
            "Originating ACH Company ID is required"
        );
        assert_eq!(
            message("company_entry_description"),
            "Company entry description is required"
        );
        assert_eq!(errors.len(), 5);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_template_limit_must_be_a_number() {
        let mut state = filled();
        state.update("template_limit", |f| f.template_limit = "a lot".into());
        assert_eq!(
            state.form.validate().message("template_limit").as_deref(),
            Some("Template limit must be a number")
        );
    }

    #[test]
    fn test_recipients_selected() {
        let mut state = filled();
        let notifier = RecordingNotifier::new();
        let chosen: Vec<Recipient> = mock_recipients().into_iter().take(2).collect();
        state.set_recipients(chosen, &notifier);
        assert_eq!(state.form.recipient_ids(), vec!["rec-001", "rec-002"]);
        assert_eq!(
            notifier.last(),
            Some((
                "Recipients Selected".to_string(),
                "Added 2 recipients to the template.".to_string()
            ))
        );
        assert!(state.remove_recipient("rec-001"));
        assert_eq!(state.form.recipient_ids(), vec!["rec-002"]);
    }

    #[test]
    fn test_submit_builds_pending_ppd_template() {
        let mut state = filled();
        state.update("template_limit", |f| f.template_limit = "5,000".into());
        state.set_recipients(mock_recipients().into_iter().skip(2).take(1).collect(), &RecordingNotifier::new());
        let notifier = RecordingNotifier::new();
        let template = state.submit(today(), "Sanjna C", &notifier).unwrap();

        assert_eq!(template.name, "Bi-weekly payroll");
        assert_eq!(template.description, "PAYROLL");
        assert_eq!(template.status, RecordStatus::Pending);
        assert_eq!(template.payment_type, PaymentType::Ppd);
        assert_eq!(template.recipient, "Acme Supplies");
        assert_eq!(template.amount, 5000.0);
        assert_eq!(template.modified_by, "Sanjna C");
        assert_eq!(
            notifier.last().map(|(title, _)| title),
            Some("Template Information Updated".to_string())
        );
    }

    #[test]
    fn test_save_incomplete_skips_validation() {
        let mut state = PpdTemplateState::new(today());
        let _ = state.submit(today(), "Sanjna C", &RecordingNotifier::new());
        assert!(!state.errors.is_empty());

        let notifier = RecordingNotifier::new();
        let template = state.save_incomplete(today(), "Sanjna C", &notifier);
        assert_eq!(template.status, RecordStatus::Draft);
        assert!(state.errors.is_empty());
        assert_eq!(
            notifier.last(),
            Some((
                "Draft Saved".to_string(),
                "Your template has been saved as a draft.".to_string()
            ))
        );
    }

    #[test]
    fn test_many_recipients_summary() {
        let mut state = filled();
        state.set_recipients(mock_recipients(), &RecordingNotifier::new());
        let template = state.submit(today(), "Sanjna C", &RecordingNotifier::new()).unwrap();
        assert_eq!(template.recipient, "5 recipients");
    }
}
