use crate::shared::list_utils::{FieldPredicate, Filter};
use crate::shared::selectable_table::SelectableTable;
use contracts::domain::a002_recipient::Recipient;

/// Поля, по которым ищет строка поиска диалога
pub const SEARCH_FIELDS: [&str; 3] = ["name", "recipient_id", "account_number"];

/// Диалог "SELECT RECIPIENTS": поиск и множественный выбор получателей
///
/// Выбор не теряется при смене поискового запроса.
#[derive(Debug, Clone)]
pub struct RecipientPicker {
    table: SelectableTable<Recipient>,
    query: String,
}

impl RecipientPicker {
    pub fn new(recipients: Vec<Recipient>, page_size: usize) -> Self {
        Self {
            table: SelectableTable::new(recipients, page_size),
            query: String::new(),
        }
    }

    pub fn table(&self) -> &SelectableTable<Recipient> {
        &self.table
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Открыть диалог: пустой запрос, отмечены уже выбранные получатели
    pub fn open_with(&mut self, selected_ids: &[String]) {
        self.set_query("");
        self.table.clear_selection();
        for id in selected_ids {
            self.table.toggle_row(id);
        }
    }

    /// Поиск без учёта регистра по имени, ACH Recipient ID и номеру счёта
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.table.set_filter(
            Filter::new().with_any(&SEARCH_FIELDS, FieldPredicate::Contains(query.trim().to_string())),
        );
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.table.toggle_row(id)
    }

    pub fn set_page(&mut self, page: usize) {
        self.table.set_page(page);
    }

    /// Выбранные получатели в порядке списка
    pub fn chosen(&self) -> Vec<Recipient> {
        self.table.selected_records().into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::mock_data::mock_recipients;

    fn picker() -> RecipientPicker {
        RecipientPicker::new(mock_recipients(), 10)
    }

    fn visible(picker: &RecipientPicker) -> Vec<String> {
        picker.table().list().current_page_ids()
    }

    #[test]
    fn test_search_by_account_number_and_name() {
        let mut picker = picker();
        picker.set_query("9876");
        assert_eq!(visible(&picker), vec!["rec-002"]);
        picker.set_query("construction");
        assert_eq!(visible(&picker), vec!["rec-005"]);
        picker.set_query("");
        assert_eq!(visible(&picker).len(), 5);
    }

    #[test]
    fn test_selection_survives_search() {
        let mut picker = picker();
        assert!(picker.toggle("rec-003"));
        picker.set_query("dfg");
        assert!(picker.toggle("rec-002"));
        picker.set_query("");
        let names: Vec<String> = picker.chosen().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["dfg", "Acme Supplies"]);
    }

    #[test]
    fn test_open_with_marks_previous_choice() {
        let mut picker = picker();
        picker.toggle("rec-001");
        picker.set_query("acme");

        picker.open_with(&["rec-004".to_string(), "rec-404".to_string()]);
        assert_eq!(picker.query(), "");
        assert_eq!(picker.table().selected_ids(), vec!["rec-004"]);
        assert_eq!(visible(&picker).len(), 5);
    }

    #[test]
    fn test_toggle_twice_unselects() {
        let mut picker = picker();
        assert!(picker.toggle("rec-005"));
        assert!(!picker.toggle("rec-005"));
        assert!(picker.chosen().is_empty());
    }
}
