use crate::shared::notify::Notifier;
use crate::shared::wizard::FieldErrors;
use chrono::NaiveDate;
use contracts::domain::a001_payment::Payment;
use contracts::domain::a002_recipient::Recipient;
use contracts::enums::{Frequency, PaymentType, RecordStatus};
use contracts::shared::metadata::{parse_date, parse_number, ValidationError, ValidationRules};

const EFFECTIVE_DATE_RULES: ValidationRules = ValidationRules::required().date();
const AMOUNT_RULES: ValidationRules = ValidationRules::required_amount();

/// Получатель платежа и введённая для него сумма
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLine {
    pub recipient: Recipient,
    pub amount: String,
}

/// Форма "Create Payment"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub payment_type: PaymentType,
    pub frequency: Frequency,
    pub effective_date: String,
    pub approve_on_submit: bool,
    pub lines: Vec<PaymentLine>,
}

impl PaymentForm {
    /// "One-Time Only" или "Recurring"; повторяющийся платёж по умолчанию ежемесячный
    pub fn set_recurring(&mut self, recurring: bool) {
        self.frequency = match (recurring, self.frequency.is_recurring()) {
            (true, true) => self.frequency,
            (true, false) => Frequency::Monthly,
            (false, _) => Frequency::OneTime,
        };
    }

    /// Заменить список получателей; суммы оставшихся получателей сохраняются
    pub fn set_recipients(&mut self, recipients: Vec<Recipient>) {
        let previous = std::mem::take(&mut self.lines);
        self.lines = recipients
            .into_iter()
            .map(|recipient| {
                let amount = previous
                    .iter()
                    .find(|line| line.recipient.id == recipient.id)
                    .map(|line| line.amount.clone())
                    .unwrap_or_default();
                PaymentLine { recipient, amount }
            })
            .collect();
    }

    pub fn set_amount(&mut self, recipient_id: &str, amount: String) -> bool {
        match self.lines.iter_mut().find(|l| l.recipient.id == recipient_id) {
            Some(line) => {
                line.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove_line(&mut self, recipient_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.recipient.id != recipient_id);
        self.lines.len() != before
    }

    pub fn recipient_ids(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.recipient.id.clone()).collect()
    }

    /// Сумма всех корректно введённых сумм
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .filter_map(|l| parse_number(&l.amount))
            .sum()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "effective_date",
            EFFECTIVE_DATE_RULES,
            &self.effective_date,
            "Effective Date",
        );
        if self.lines.is_empty() {
            errors.insert(
                "recipients",
                ValidationError::Required {
                    field: "Recipient".into(),
                },
            );
        }
        // только первая ошибочная сумма
        for line in &self.lines {
            let label = format!("Amount for {}", line.recipient.name);
            errors.check("amounts", AMOUNT_RULES, &line.amount, &label);
            if errors.contains("amounts") {
                break;
            }
        }
        errors
    }

    /// Платёж на каждого получателя; форма должна быть проверена
    fn build(&self, today: NaiveDate, created_by: &str) -> Vec<Payment> {
        let status = if self.approve_on_submit {
            RecordStatus::Approved
        } else {
            RecordStatus::Pending
        };
        let effective_date = parse_date(&self.effective_date).unwrap_or(today);
        self.lines
            .iter()
            .map(|line| {
                Payment::new_for_insert(
                    line.recipient.id.clone(),
                    parse_number(&line.amount).unwrap_or_default(),
                    self.payment_type,
                    status,
                    effective_date,
                    self.frequency,
                    today,
                    created_by.to_string(),
                )
            })
            .collect()
    }
}

/// Состояние страницы "Create Payment"
#[derive(Debug, Clone, Default)]
pub struct PaymentEntryState {
    pub form: PaymentForm,
    pub errors: FieldErrors,
    /// Платежи, созданные на странице
    pub created: Vec<Payment>,
}

impl PaymentEntryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Изменить форму; ошибка поля снимается
    pub fn update(&mut self, field: &str, f: impl FnOnce(&mut PaymentForm)) {
        f(&mut self.form);
        self.errors.remove(field);
    }

    pub fn set_recipients(&mut self, recipients: Vec<Recipient>) {
        self.form.set_recipients(recipients);
        self.errors.remove("recipients");
        self.errors.remove("amounts");
    }

    /// Создать платежи; при ошибках форма остаётся заполненной
    pub fn submit(
        &mut self,
        today: NaiveDate,
        created_by: &str,
        notifier: &impl Notifier,
    ) -> Result<Vec<Payment>, FieldErrors> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        let payments = self.form.build(today, created_by);
        log::info!("created {} payment(s)", payments.len());
        self.created.extend(payments.iter().cloned());
        self.form = PaymentForm::default();
        self.errors.clear();
        notifier.notify("Payment Created", "Your payment has been successfully created.");
        Ok(payments)
    }

    pub fn reset(&mut self) {
        self.form = PaymentForm::default();
        self.errors.clear();
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

    fn recipients(ids: &[&str]) -> Vec<Recipient> {
        mock_recipients()
            .into_iter()
            .filter(|r| ids.contains(&r.id.as_str()))
            .collect()
    }

    fn filled() -> PaymentEntryState {
        let mut state = PaymentEntryState::new();
        state.set_recipients(recipients(&["rec-001", "rec-003"]));
        state.update("effective_date", |f| f.effective_date = "2023-03-10".into());
        state.update("amounts", |f| {
            f.set_amount("rec-001", "1,000".into());
            f.set_amount("rec-003", "250.50".into());
        });
        state
    }

    #[test]
    fn test_empty_form_errors() {
        let mut state = PaymentEntryState::new();
        let notifier = RecordingNotifier::new();
        let errors = state.submit(today(), "Sanjna C", &notifier).unwrap_err();
        assert_eq!(
            errors.message("effective_date").as_deref(),
            Some("Effective Date is required")
        );
        assert_eq!(
            errors.message("recipients").as_deref(),
            Some("Recipient is required")
        );
        assert_eq!(state.errors, errors);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_first_missing_amount_is_reported() {
        let mut state = filled();
        state.update("amounts", |f| {
            f.set_amount("rec-001", String::new());
            f.set_amount("rec-003", String::new());
        });
        let errors = state.form.validate();
        assert_eq!(
            errors.message("amounts").as_deref(),
            Some("Amount for Chemical Strategies is required")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_effective_date() {
        let mut state = filled();
        state.update("effective_date", |f| f.effective_date = "2023-13-01".into());
        assert_eq!(
            state.form.validate().message("effective_date").as_deref(),
            Some("Effective Date must be a valid date")
        );
    }

    #[test]
    fn test_changing_recipients_keeps_entered_amounts() {
        let mut state = filled();
        state.set_recipients(recipients(&["rec-003", "rec-004"]));
        let amounts: Vec<(&str, &str)> = state
            .form
            .lines
            .iter()
            .map(|l| (l.recipient.id.as_str(), l.amount.as_str()))
            .collect();
        assert_eq!(amounts, vec![("rec-003", "250.50"), ("rec-004", "")]);
        assert!(state.form.remove_line("rec-004"));
        assert!(!state.form.remove_line("rec-004"));
        assert_eq!(state.form.total(), 250.5);
    }

    #[test]
    fn test_submit_creates_pending_payments() {
        let mut state = filled();
        let notifier = RecordingNotifier::new();
        let payments = state.submit(today(), "Sanjna C", &notifier).unwrap();

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].recipient_id, "rec-001");
        assert_eq!(payments[0].amount, 1000.0);
        assert_eq!(payments[1].amount, 250.5);
        assert!(payments.iter().all(|p| p.status == RecordStatus::Pending));
        assert_eq!(
            payments[0].effective_date,
            NaiveDate::from_ymd_opt(2023, 3, 10).unwrap()
        );
        assert_eq!(payments[0].created_at, today());
        assert_eq!(
            notifier.last(),
            Some((
                "Payment Created".to_string(),
                "Your payment has been successfully created.".to_string()
            ))
        );
        assert_eq!(state.form, PaymentForm::default());
        assert_eq!(state.created.len(), 2);
    }

    #[test]
    fn test_approve_on_submit_and_recurring() {
        let mut state = filled();
        state.update("approve_on_submit", |f| f.approve_on_submit = true);
        state.update("frequency", |f| f.set_recurring(true));
        assert_eq!(state.form.frequency, Frequency::Monthly);
        state.update("frequency", |f| f.frequency = Frequency::Weekly);
        state.update("frequency", |f| f.set_recurring(true));
        assert_eq!(state.form.frequency, Frequency::Weekly);

        let payments = state
            .submit(today(), "Sanjna C", &RecordingNotifier::new())
            .unwrap();
        assert!(payments.iter().all(|p| p.status == RecordStatus::Approved));
        assert!(payments.iter().all(|p| p.frequency == Frequency::Weekly));
    }

    #[test]
    fn test_update_clears_field_error() {
        let mut state = PaymentEntryState::new();
        let _ = state.submit(today(), "Sanjna C", &RecordingNotifier::new());
        state.update("effective_date", |f| f.effective_date = "03/10/2023".into());
        assert!(!state.errors.contains("effective_date"));
        state.set_recipients(recipients(&["rec-002"]));
        assert!(state.errors.is_empty());
    }
}
