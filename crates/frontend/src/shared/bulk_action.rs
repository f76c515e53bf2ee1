//! Групповые действия над выбранными строками с обязательным подтверждением

use super::selectable_table::SelectableTable;
use contracts::domain::common::Record;
use contracts::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulkActionKind {
    Approve,
    Reject,
    ReverseTxns,
    ReversePayment,
}

impl BulkActionKind {
    /// Статус, который получают записи после подтверждения
    pub fn target_status(&self) -> RecordStatus {
        match self {
            BulkActionKind::Approve => RecordStatus::Approved,
            BulkActionKind::Reject => RecordStatus::Rejected,
            BulkActionKind::ReverseTxns | BulkActionKind::ReversePayment => {
                RecordStatus::Reversed
            }
        }
    }

    /// Доступность кнопки при данном количестве выбранных строк
    pub fn is_enabled(&self, selected_count: usize) -> bool {
        match self {
            BulkActionKind::ReversePayment => selected_count == 1,
            _ => selected_count >= 1,
        }
    }

    pub fn is_reversal(&self) -> bool {
        matches!(
            self,
            BulkActionKind::ReverseTxns | BulkActionKind::ReversePayment
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkActionKind::Approve => "Approve",
            BulkActionKind::Reject => "Reject",
            BulkActionKind::ReverseTxns => "Reverse Txns",
            BulkActionKind::ReversePayment => "Reverse Payment",
        }
    }

    /// Глагол для текста уведомления: "approved", "rejected", "reversed"
    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkActionKind::Approve => "approved",
            BulkActionKind::Reject => "rejected",
            BulkActionKind::ReverseTxns | BulkActionKind::ReversePayment => "reversed",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            BulkActionKind::Approve => "approve",
            BulkActionKind::Reject => "reject",
            BulkActionKind::ReverseTxns | BulkActionKind::ReversePayment => "reverse",
        }
    }

    fn verb_title(&self) -> &'static str {
        match self {
            BulkActionKind::Approve => "Approve",
            BulkActionKind::Reject => "Reject",
            BulkActionKind::ReverseTxns | BulkActionKind::ReversePayment => "Reverse",
        }
    }
}

/// Запрос на подтверждение: действие и зафиксированный набор id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    kind: BulkActionKind,
    ids: Vec<String>,
}

impl ConfirmationRequest {
    pub fn kind(&self) -> BulkActionKind {
        self.kind
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Например, "Approve Payments"
    pub fn title(&self, list_name: &str) -> String {
        format!("{} {}", self.kind.verb_title(), list_name)
    }

    /// Например, "Are you sure you want to approve 2 payment(s)? This action cannot be undone."
    pub fn message(&self, element_name: &str) -> String {
        format!(
            "Are you sure you want to {} {} {}(s)? This action cannot be undone.",
            self.kind.verb(),
            self.ids.len(),
            element_name.to_lowercase()
        )
    }
}

/// Результат подтверждённого действия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkActionOutcome {
    pub kind: BulkActionKind,
    pub affected: usize,
}

impl BulkActionOutcome {
    /// Заголовок уведомления, например "Payments Approved"
    pub fn title(&self, list_name: &str) -> String {
        let past = self.kind.past_tense();
        let mut chars = past.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} {}", list_name, capitalized)
    }

    /// Текст уведомления, например "Successfully approved 2 payment(s)."
    pub fn message(&self, element_name: &str) -> String {
        format!(
            "Successfully {} {} {}(s).",
            self.kind.past_tense(),
            self.affected,
            element_name.to_lowercase()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DispatcherState {
    #[default]
    Idle,
    PendingConfirmation(ConfirmationRequest),
}

/// Диспетчер групповых действий: `Idle -> PendingConfirmation -> Idle`
#[derive(Debug, Clone, Default)]
pub struct BulkActionDispatcher {
    state: DispatcherState,
}

impl BulkActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DispatcherState {
        &self.state
    }

    pub fn pending(&self) -> Option<&ConfirmationRequest> {
        match &self.state {
            DispatcherState::PendingConfirmation(request) => Some(request),
            DispatcherState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Кнопка активна, если подходит количество выбранных строк и нет другого запроса
    pub fn is_enabled(&self, kind: BulkActionKind, selection: &HashSet<String>) -> bool {
        !self.is_pending() && kind.is_enabled(selection.len())
    }

    /// Запросить подтверждение. Недоступное действие ничего не меняет.
    pub fn request_action(
        &mut self,
        kind: BulkActionKind,
        selection: &HashSet<String>,
    ) -> Option<&ConfirmationRequest> {
        if !self.is_enabled(kind, selection) {
            log::debug!(
                "bulk action {:?} ignored, {} row(s) selected",
                kind,
                selection.len()
            );
            return None;
        }
        let mut ids: Vec<String> = selection.iter().cloned().collect();
        ids.sort();
        log::debug!("bulk action {:?} awaits confirmation for {:?}", kind, ids);
        self.state = DispatcherState::PendingConfirmation(ConfirmationRequest { kind, ids });
        self.pending()
    }

    /// Применить ожидающее действие к таблице и очистить выбор
    pub fn confirm<T: Record>(&mut self, table: &mut SelectableTable<T>) -> Option<BulkActionOutcome> {
        let request = match std::mem::take(&mut self.state) {
            DispatcherState::PendingConfirmation(request) => request,
            DispatcherState::Idle => return None,
        };
        let affected = table.set_status(&request.ids, request.kind.target_status());
        table.clear_selection();
        log::debug!(
            "bulk action {:?} applied to {} {}",
            request.kind,
            affected,
            T::collection_name()
        );
        Some(BulkActionOutcome {
            kind: request.kind,
            affected,
        })
    }

    /// Отменить запрос; выбор строк не меняется
    pub fn cancel(&mut self) -> Option<ConfirmationRequest> {
        match std::mem::take(&mut self.state) {
            DispatcherState::PendingConfirmation(request) => Some(request),
            DispatcherState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_payment::Payment;
    use contracts::shared::mock_data::mock_payments;

    fn table() -> SelectableTable<Payment> {
        SelectableTable::new(mock_payments(), 5)
    }

    #[test]
    fn test_approve_two_payments() {
        let mut table = table();
        table.toggle_row("pay-001");
        table.toggle_row("pay-002");
        let mut dispatcher = BulkActionDispatcher::new();

        let request = dispatcher
            .request_action(BulkActionKind::Approve, table.selection())
            .cloned()
            .unwrap();
        assert_eq!(request.ids(), ["pay-001", "pay-002"]);
        assert_eq!(
            request.message("Payment"),
            "Are you sure you want to approve 2 payment(s)? This action cannot be undone."
        );

        let outcome = dispatcher.confirm(&mut table).unwrap();
        assert_eq!(outcome.affected, 2);
        assert_eq!(outcome.title("Payments"), "Payments Approved");
        assert_eq!(outcome.message("Payment"), "Successfully approved 2 payment(s).");

        let list = table.list();
        assert_eq!(list.get("pay-001").map(|p| p.status), Some(RecordStatus::Approved));
        assert_eq!(list.get("pay-002").map(|p| p.status), Some(RecordStatus::Approved));
        assert_eq!(list.get("pay-003").map(|p| p.status), Some(RecordStatus::Complete));
        assert_eq!(list.get("pay-004").map(|p| p.status), Some(RecordStatus::Complete));
        assert_eq!(table.selected_count(), 0);
        assert_eq!(dispatcher.state(), &DispatcherState::Idle);
    }

    #[test]
    fn test_reverse_payment_needs_exactly_one_row() {
        let mut table = table();
        let mut dispatcher = BulkActionDispatcher::new();
        assert!(!dispatcher.is_enabled(BulkActionKind::ReversePayment, table.selection()));
        assert!(!dispatcher.is_enabled(BulkActionKind::Approve, table.selection()));

        table.toggle_row("pay-002");
        assert!(dispatcher.is_enabled(BulkActionKind::ReversePayment, table.selection()));

        table.toggle_row("pay-004");
        assert!(dispatcher
            .request_action(BulkActionKind::ReversePayment, table.selection())
            .is_none());
        assert!(!dispatcher.is_pending());
        assert!(dispatcher.is_enabled(BulkActionKind::ReverseTxns, table.selection()));
    }

    #[test]
    fn test_cancel_keeps_selection() {
        let mut table = table();
        table.toggle_row("pay-001");
        let mut dispatcher = BulkActionDispatcher::new();
        dispatcher.request_action(BulkActionKind::Reject, table.selection());
        let cancelled = dispatcher.cancel().unwrap();
        assert_eq!(cancelled.kind(), BulkActionKind::Reject);
        assert_eq!(table.selected_ids(), vec!["pay-001"]);
        assert_eq!(
            table.list().get("pay-001").map(|p| p.status),
            Some(RecordStatus::Pending)
        );
        assert!(dispatcher.confirm(&mut table).is_none());
    }

    #[test]
    fn test_second_request_while_pending_is_ignored() {
        let mut table = table();
        table.toggle_row("pay-001");
        let mut dispatcher = BulkActionDispatcher::new();
        dispatcher.request_action(BulkActionKind::Approve, table.selection());
        assert!(dispatcher
            .request_action(BulkActionKind::Reject, table.selection())
            .is_none());
        assert_eq!(dispatcher.pending().map(|r| r.kind()), Some(BulkActionKind::Approve));
    }

    #[test]
    fn test_reversal_outcome_text() {
        let mut table = table();
        table.toggle_row("pay-003");
        let mut dispatcher = BulkActionDispatcher::new();
        dispatcher.request_action(BulkActionKind::ReverseTxns, table.selection());
        let outcome = dispatcher.confirm(&mut table).unwrap();
        assert_eq!(outcome.title("Payments"), "Payments Reversed");
        assert_eq!(
            table.list().get("pay-003").map(|p| p.status),
            Some(RecordStatus::Reversed)
        );
        assert!(BulkActionKind::ReverseTxns.is_reversal());
        assert!(!BulkActionKind::Approve.is_reversal());
    }
}
