use crate::shared::bulk_action::{BulkActionDispatcher, BulkActionKind, BulkActionOutcome};
use crate::shared::list_utils::{option_predicate, FieldPredicate, Filter};
use crate::shared::notify::Notifier;
use crate::shared::selectable_table::SelectableTable;
use chrono::NaiveDate;
use contracts::domain::a001_payment::Payment;
use contracts::domain::common::{FieldValue, Record};

pub const REVERSAL_NOTICE: &str =
    "Reversal entries must be initiated within 5 days from the 'effective date' of the original entry.";

/// Параметры поиска на странице утверждения платежей
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentSearch {
    /// Код статуса или "All Statuses"
    pub status: String,
    /// Код типа платежа (PPD, CCD) или "All Payment Types"
    pub payment_type: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PaymentSearch {
    pub fn to_filter(&self) -> Filter {
        Filter::new()
            .with("status", option_predicate(&self.status))
            .with("payment_type", option_predicate(&self.payment_type))
            .with(
                "effective_date",
                FieldPredicate::Range {
                    min: self.from.map(|d| FieldValue::Text(d.to_string())),
                    max: self.to.map(|d| FieldValue::Text(d.to_string())),
                },
            )
    }
}

/// Состояние страницы "Payment Approval"
#[derive(Debug, Clone)]
pub struct PaymentApprovalState {
    pub table: SelectableTable<Payment>,
    pub dispatcher: BulkActionDispatcher,
    pub search: PaymentSearch,
}

impl PaymentApprovalState {
    pub fn new(payments: Vec<Payment>, page_size: usize) -> Self {
        Self {
            table: SelectableTable::new(payments, page_size),
            dispatcher: BulkActionDispatcher::new(),
            search: PaymentSearch::default(),
        }
    }

    pub fn apply_search(&mut self, search: PaymentSearch) {
        self.table.set_filter(search.to_filter());
        self.search = search;
    }

    pub fn is_enabled(&self, kind: BulkActionKind) -> bool {
        self.dispatcher.is_enabled(kind, self.table.selection())
    }

    /// Нажатие кнопки действия; `true`, если открыт диалог подтверждения
    pub fn request(&mut self, kind: BulkActionKind) -> bool {
        self.dispatcher
            .request_action(kind, self.table.selection())
            .is_some()
    }

    /// Ожидается подтверждение отмены (экран с уведомлением о сроках), а не обычный диалог
    pub fn is_reversal_pending(&self) -> bool {
        self.dispatcher
            .pending()
            .map_or(false, |request| request.kind().is_reversal())
    }

    /// Платежи из ожидающего запроса, в порядке списка
    pub fn pending_payments(&self) -> Vec<&Payment> {
        let Some(request) = self.dispatcher.pending() else {
            return Vec::new();
        };
        self.table
            .list()
            .items()
            .iter()
            .filter(|p| request.ids().iter().any(|id| id == p.id()))
            .collect()
    }

    pub fn confirm(&mut self, notifier: &impl Notifier) -> Option<BulkActionOutcome> {
        let outcome = self.dispatcher.confirm(&mut self.table)?;
        notifier.notify(
            &outcome.title(Payment::list_name()),
            &outcome.message(Payment::element_name()),
        );
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        self.dispatcher.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::RecordingNotifier;
    use contracts::enums::RecordStatus;
    use contracts::shared::mock_data::mock_payments;

    fn state() -> PaymentApprovalState {
        PaymentApprovalState::new(mock_payments(), 5)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_approve_flow_notifies() {
        let mut state = state();
        state.table.toggle_row("pay-001");
        state.table.toggle_row("pay-003");
        assert!(state.request(BulkActionKind::Approve));
        assert!(!state.is_reversal_pending());

        let notifier = RecordingNotifier::new();
        let outcome = state.confirm(&notifier).unwrap();
        assert_eq!(outcome.affected, 2);
        assert_eq!(
            notifier.last(),
            Some((
                "Payments Approved".to_string(),
                "Successfully approved 2 payment(s).".to_string()
            ))
        );
        assert_eq!(state.table.selected_count(), 0);
    }

    #[test]
    fn test_reversal_screen_lists_selected_payments() {
        let mut state = state();
        state.table.toggle_row("pay-004");
        assert!(state.is_enabled(BulkActionKind::ReversePayment));
        assert!(state.request(BulkActionKind::ReversePayment));
        assert!(state.is_reversal_pending());
        let ids: Vec<&str> = state.pending_payments().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["pay-004"]);

        let notifier = RecordingNotifier::new();
        state.confirm(&notifier).unwrap();
        assert_eq!(
            state.table.list().get("pay-004").map(|p| p.status),
            Some(RecordStatus::Reversed)
        );
        assert_eq!(
            notifier.last().map(|(_, message)| message),
            Some("Successfully reversed 1 payment(s).".to_string())
        );
    }

    #[test]
    fn test_cancel_returns_to_table() {
        let mut state = state();
        state.table.toggle_row("pay-002");
        state.request(BulkActionKind::Reject);
        state.cancel();
        assert!(state.pending_payments().is_empty());
        assert_eq!(state.table.selected_count(), 1);
        assert!(state.is_enabled(BulkActionKind::Reject));
    }

    #[test]
    fn test_search_by_status_and_dates() {
        let mut state = state();
        state.apply_search(PaymentSearch {
            status: "complete".into(),
            payment_type: "All Payment Types".into(),
            from: None,
            to: None,
        });
        assert_eq!(state.table.list().current_page_ids(), vec!["pay-003", "pay-004"]);

        state.apply_search(PaymentSearch {
            status: "All Statuses".into(),
            payment_type: "PPD".into(),
            from: Some(date(2023, 2, 25)),
            to: Some(date(2023, 3, 1)),
        });
        assert_eq!(state.table.list().current_page_ids(), vec!["pay-001", "pay-004"]);
    }

    #[test]
    fn test_pending_search_finds_single_payment() {
        let mut state = state();
        assert_eq!(state.table.list().total_count(), 4);
        state.apply_search(PaymentSearch {
            status: "pending".into(),
            payment_type: "All Payment Types".into(),
            from: None,
            to: None,
        });
        assert_eq!(state.table.list().total_count(), 1);
        assert_eq!(state.table.list().current_page_ids(), vec!["pay-001"]);
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let mut state = state();
        state.apply_search(PaymentSearch::default());
        assert!(state.table.list().filter().is_empty());
        assert_eq!(state.table.list().total_count(), 4);
    }
}
