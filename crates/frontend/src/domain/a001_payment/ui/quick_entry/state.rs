use crate::shared::notify::Notifier;
use crate::shared::selectable_table::SelectableTable;
use crate::shared::wizard::FieldErrors;
use chrono::NaiveDate;
use contracts::domain::a001_payment::Payment;
use contracts::domain::a003_template::Template;
use contracts::enums::{Frequency, RecordStatus};
use contracts::shared::metadata::{parse_date, ValidationError, ValidationRules};
use std::collections::HashMap;

const PAYMENT_DATE_RULES: ValidationRules = ValidationRules::required().date();

/// Экран "ACH Quick Entry"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickEntryStage {
    /// Таблица "AVAILABLE TEMPLATES" с выбором шаблонов
    #[default]
    Select,
    /// "PREVIEW ACH QUICK ENTRY PAYMENTS"
    Preview,
}

/// Быстрый ввод платежей по шаблонам: выбор шаблонов, даты платежей, предпросмотр, отправка
#[derive(Debug, Clone)]
pub struct QuickEntryState {
    pub table: SelectableTable<Template>,
    stage: QuickEntryStage,
    /// id шаблона -> дата платежа, как её ввёл пользователь
    dates: HashMap<String, String>,
    pub errors: FieldErrors,
}

impl QuickEntryState {
    pub fn new(templates: Vec<Template>, page_size: usize) -> Self {
        Self {
            table: SelectableTable::new(templates, page_size),
            stage: QuickEntryStage::Select,
            dates: HashMap::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn stage(&self) -> QuickEntryStage {
        self.stage
    }

    pub fn set_payment_date(&mut self, template_id: &str, text: String) {
        self.dates.insert(template_id.to_string(), text);
        self.errors.remove("payment_date");
    }

    pub fn payment_date_text(&self, template_id: &str) -> String {
        self.dates.get(template_id).cloned().unwrap_or_default()
    }

    /// Дата для предпросмотра: `MM/DD/YYYY` или "Not set"
    pub fn payment_date_label(&self, template_id: &str) -> String {
        self.dates
            .get(template_id)
            .and_then(|text| parse_date(text))
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| "Not set".to_string())
    }

    /// Кнопка "Continue" активна, только если выбран хотя бы один шаблон
    pub fn can_continue(&self) -> bool {
        self.table.selected_count() > 0
    }

    pub fn continue_to_preview(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.stage = QuickEntryStage::Preview;
        true
    }

    /// "Edit Payment": назад к выбору, выбор и даты сохраняются
    pub fn edit(&mut self) {
        self.stage = QuickEntryStage::Select;
        self.errors.clear();
    }

    /// "Cancel": назад к выбору с пустым выбором
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Выбранные шаблоны в порядке таблицы
    pub fn preview_rows(&self) -> Vec<&Template> {
        self.table.selected_records()
    }

    pub fn total(&self) -> f64 {
        self.preview_rows().iter().map(|t| t.amount).sum()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let rows = self.preview_rows();
        if rows.is_empty() {
            errors.insert(
                "templates",
                ValidationError::Required {
                    field: "Template".into(),
                },
            );
        }
        for template in rows {
            let label = format!("Payment Date for {}", template.name);
            errors.check(
                "payment_date",
                PAYMENT_DATE_RULES,
                &self.payment_date_text(&template.id),
                &label,
            );
            if errors.contains("payment_date") {
                break;
            }
        }
        errors
    }

    /// "Submit Payment": по платежу на каждый выбранный шаблон, статус Pending
    pub fn submit(
        &mut self,
        today: NaiveDate,
        created_by: &str,
        notifier: &impl Notifier,
    ) -> Result<Vec<Payment>, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        let payments: Vec<Payment> = self
            .preview_rows()
            .into_iter()
            .map(|template| {
                let effective_date = self
                    .dates
                    .get(&template.id)
                    .and_then(|text| parse_date(text))
                    .unwrap_or(today);
                let mut payment = Payment::new_for_insert(
                    template.recipient.clone(),
                    template.amount,
                    template.payment_type,
                    RecordStatus::Pending,
                    effective_date,
                    Frequency::OneTime,
                    today,
                    created_by.to_string(),
                );
                payment.template_id = Some(template.id.clone());
                payment.description = Some(template.description.clone());
                payment
            })
            .collect();
        log::info!("quick entry: {} payment(s) submitted", payments.len());
        notifier.notify(
            "Payments Submitted",
            &format!("Submitted {} quick entry payment(s).", payments.len()),
        );
        self.reset();
        Ok(payments)
    }

    fn reset(&mut self) {
        self.stage = QuickEntryStage::Select;
        self.table.clear_selection();
        self.dates.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::RecordingNotifier;
    use contracts::shared::mock_data::mock_templates;

    fn state() -> QuickEntryState {
        QuickEntryState::new(mock_templates(), 10)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
    }

    #[test]
    fn test_continue_requires_selection() {
        let mut state = state();
        assert!(!state.can_continue());
        assert!(!state.continue_to_preview());
        assert_eq!(state.stage(), QuickEntryStage::Select);

        state.table.toggle_row("temp-003");
        assert!(state.continue_to_preview());
        assert_eq!(state.stage(), QuickEntryStage::Preview);
    }

    #[test]
    fn test_preview_rows_and_dates() {
        let mut state = state();
        state.table.toggle_row("temp-004");
        state.table.toggle_row("temp-002");
        state.set_payment_date("temp-002", "2023-03-15".into());
        state.continue_to_preview();

        let names: Vec<&str> = state.preview_rows().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["BD Review Template", "Office Rent"]);
        assert_eq!(state.payment_date_label("temp-002"), "03/15/2023");
        assert_eq!(state.payment_date_label("temp-004"), "Not set");
        assert_eq!(state.total(), 5700.0);
    }

    #[test]
    fn test_edit_keeps_selection_cancel_clears_it() {
        let mut state = state();
        state.table.toggle_row("temp-001");
        state.set_payment_date("temp-001", "2023-03-15".into());
        state.continue_to_preview();

        state.edit();
        assert_eq!(state.stage(), QuickEntryStage::Select);
        assert_eq!(state.table.selected_ids(), vec!["temp-001"]);
        assert_eq!(state.payment_date_text("temp-001"), "2023-03-15");

        state.continue_to_preview();
        state.cancel();
        assert_eq!(state.stage(), QuickEntryStage::Select);
        assert_eq!(state.table.selected_count(), 0);
        assert_eq!(state.payment_date_text("temp-001"), "");
    }

    #[test]
    fn test_submit_requires_payment_dates() {
        let mut state = state();
        state.table.toggle_row("temp-002");
        state.table.toggle_row("temp-004");
        state.set_payment_date("temp-002", "03/15/2023".into());
        state.continue_to_preview();

        let notifier = RecordingNotifier::new();
        let errors = state.submit(today(), "Sanjna C", &notifier).unwrap_err();
        assert_eq!(
            errors.message("payment_date").as_deref(),
            Some("Payment Date for Office Rent is required")
        );
        assert_eq!(state.stage(), QuickEntryStage::Preview);
        assert!(notifier.messages().is_empty());

        state.set_payment_date("temp-004", "2023-03-20".into());
        assert!(state.errors.is_empty());
        let payments = state.submit(today(), "Sanjna C", &notifier).unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[1].template_id.as_deref(), Some("temp-004"));
        assert_eq!(payments[1].amount, 3200.0);
        assert_eq!(
            payments[1].effective_date,
            NaiveDate::from_ymd_opt(2023, 3, 20).unwrap()
        );
        assert!(payments.iter().all(|p| p.status == RecordStatus::Pending));
        assert_eq!(
            notifier.last().map(|(_, message)| message),
            Some("Submitted 2 quick entry payment(s).".to_string())
        );
        assert_eq!(state.stage(), QuickEntryStage::Select);
        assert_eq!(state.table.selected_count(), 0);
    }

    #[test]
    fn test_select_all_visible_templates() {
        let mut state = state();
        state.table.toggle_select_all_visible();
        assert_eq!(state.table.selected_count(), 4);
        state.table.toggle_select_all_visible();
        assert!(!state.can_continue());
    }
}
