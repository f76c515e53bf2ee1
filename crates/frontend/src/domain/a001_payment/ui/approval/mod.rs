pub mod state;

use self::state::{PaymentApprovalState, PaymentSearch, REVERSAL_NOTICE};
use crate::shared::bulk_action::BulkActionKind;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::{Button, SelectField, StatusBadge, TextField};
use crate::shared::config::PortalConfig;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toasts;
use chrono::NaiveDate;
use contracts::domain::a001_payment::Payment;
use contracts::domain::common::Record;
use contracts::enums::{PaymentType, RecordStatus};
use contracts::shared::metadata::parse_date;
use contracts::shared::mock_data::mock_payments;
use leptos::prelude::*;

const ALL_STATUSES: &str = "All Statuses";
const ALL_PAYMENT_TYPES: &str = "All Payment Types";

fn status_options() -> Vec<(String, String)> {
    std::iter::once((ALL_STATUSES.to_string(), ALL_STATUSES.to_string()))
        .chain(
            [
                RecordStatus::Pending,
                RecordStatus::Approved,
                RecordStatus::Complete,
                RecordStatus::Rejected,
                RecordStatus::Reversed,
            ]
            .iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect()
}

fn payment_type_options() -> Vec<(String, String)> {
    std::iter::once((ALL_PAYMENT_TYPES.to_string(), ALL_PAYMENT_TYPES.to_string()))
        .chain(
            PaymentType::all()
                .iter()
                .map(|t| (t.code().to_string(), t.code().to_string())),
        )
        .collect()
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Страница "Payment Approval": поиск, выбор платежей и групповые действия
#[component]
pub fn PaymentApprovalPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let toasts = use_toasts();

    let state = RwSignal::new(PaymentApprovalState::new(
        mock_payments(),
        config.lists.payment_approval_page_size,
    ));
    // Параметры поиска применяются только по кнопке "Search"
    let search = RwSignal::new(PaymentSearch {
        status: ALL_STATUSES.to_string(),
        payment_type: ALL_PAYMENT_TYPES.to_string(),
        ..PaymentSearch::default()
    });

    let apply_search = move |_| {
        let current = search.get_untracked();
        state.update(|s| s.apply_search(current));
    };

    let header_state = Signal::derive(move || state.with(|s| s.table.header_state()));
    let rows = move || state.with(|s| s.table.list().current_page());

    let action_button = move |kind: BulkActionKind, variant: &'static str| {
        view! {
            <Button
                variant=variant
                disabled=Signal::derive(move || state.with(|s| !s.is_enabled(kind)))
                on_click=Callback::new(move |_| {
                    state.update(|s| {
                        s.request(kind);
                    });
                })
            >
                {kind.label()}
            </Button>
        }
    };

    let confirm = Callback::new(move |_| {
        state.update(|s| {
            s.confirm(&toasts);
        });
    });
    let cancel = Callback::new(move |_| state.update(|s| s.cancel()));

    view! {
        <div class="page payment-approval">
            <div class="page__header">
                <h1 class="page__title">"Payment Approval"</h1>
            </div>

            <div class="search-panel">
                <TextField
                    label="From"
                    input_type="date"
                    value=Signal::derive(move || search.with(|s| date_text(s.from)))
                    on_input=Callback::new(move |v: String| search.update(|s| s.from = parse_date(&v)))
                />
                <TextField
                    label="To"
                    input_type="date"
                    value=Signal::derive(move || search.with(|s| date_text(s.to)))
                    on_input=Callback::new(move |v: String| search.update(|s| s.to = parse_date(&v)))
                />
                <SelectField
                    label="Payment Type"
                    value=Signal::derive(move || search.with(|s| s.payment_type.clone()))
                    options=payment_type_options()
                    on_change=Callback::new(move |v| search.update(|s| s.payment_type = v))
                />
                <SelectField
                    label="Status"
                    value=Signal::derive(move || search.with(|s| s.status.clone()))
                    options=status_options()
                    on_change=Callback::new(move |v| search.update(|s| s.status = v))
                />
                <Button on_click=Callback::new(apply_search)>"Search"</Button>
            </div>

            <div class="bulk-actions">
                <span class="bulk-actions__count">
                    {move || format!("{} selected", state.with(|s| s.table.selected_count()))}
                </span>
                {action_button(BulkActionKind::Approve, "primary")}
                {action_button(BulkActionKind::Reject, "danger")}
                {action_button(BulkActionKind::ReverseTxns, "outline")}
                {action_button(BulkActionKind::ReversePayment, "outline")}
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <TableHeaderCheckbox
                            state=header_state
                            on_toggle=Callback::new(move |_| state.update(|s| s.table.toggle_select_all_visible()))
                        />
                        <th class="table__header-cell">"Effective Date"</th>
                        <th class="table__header-cell">"Recipient"</th>
                        <th class="table__header-cell">"Type"</th>
                        <th class="table__header-cell">"Frequency"</th>
                        <th class="table__header-cell table__header-cell--right">"Amount"</th>
                        <th class="table__header-cell">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__empty" colspan="7">"No payments found"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter().map(|payment| payment_row(payment, state)).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.table.list().page()))
                total_pages=Signal::derive(move || state.with(|s| s.table.list().total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.table.list().total_count()))
                on_page_change=Callback::new(move |page| state.update(|s| s.table.set_page(page)))
            />

            {move || {
                let request = state.with(|s| s.dispatcher.pending().cloned())?;
                if request.kind().is_reversal() {
                    return Some(view! { <ReversalScreen state=state on_confirm=confirm on_cancel=cancel /> }.into_any());
                }
                Some(
                    view! {
                        <ConfirmDialog
                            title=request.title(Payment::list_name())
                            message=request.message(Payment::element_name())
                            confirm_label=request.kind().label().to_string()
                            on_confirm=confirm
                            on_cancel=cancel
                        />
                    }
                    .into_any(),
                )
            }}
        </div>
    }
}

fn payment_row(payment: Payment, state: RwSignal<PaymentApprovalState>) -> impl IntoView {
    let id = payment.id.clone();
    let checked_id = id.clone();
    let status = payment.status;

    view! {
        <tr class="table__row">
            <TableCheckbox
                checked=Signal::derive(move || state.with(|s| s.table.is_selected(&checked_id)))
                on_toggle=Callback::new(move |_| {
                    state.update(|s| {
                        s.table.toggle_row(&id);
                    });
                })
            />
            <td class="table__cell">{payment.effective_date.format("%m/%d/%Y").to_string()}</td>
            <td class="table__cell">{payment.recipient_id.clone()}</td>
            <td class="table__cell">{payment.payment_type.code()}</td>
            <td class="table__cell">{payment.frequency.display_name()}</td>
            <td class="table__cell table__cell--right">{payment.formatted_amount()}</td>
            <td class="table__cell"><StatusBadge status=status /></td>
        </tr>
    }
}

/// Экран отмены: уведомление о сроке и выбранные платежи
#[component]
fn ReversalScreen(
    state: RwSignal<PaymentApprovalState>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = move || {
        state.with(|s| {
            s.dispatcher
                .pending()
                .map(|r| r.title(Payment::list_name()))
                .unwrap_or_default()
        })
    };
    let confirm_label = move || {
        state.with(|s| {
            s.dispatcher
                .pending()
                .map(|r| r.kind().label().to_string())
                .unwrap_or_default()
        })
    };
    let payments = move || {
        state.with(|s| s.pending_payments().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="reversal-screen">
            <h2 class="reversal-screen__title">{title}</h2>
            <div class="notice notice--warning">{REVERSAL_NOTICE}</div>
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Effective Date"</th>
                        <th class="table__header-cell">"Recipient"</th>
                        <th class="table__header-cell">"Type"</th>
                        <th class="table__header-cell table__header-cell--right">"Amount"</th>
                        <th class="table__header-cell">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        payments()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{p.effective_date.format("%m/%d/%Y").to_string()}</td>
                                        <td class="table__cell">{p.recipient_id.clone()}</td>
                                        <td class="table__cell">{p.payment_type.code()}</td>
                                        <td class="table__cell table__cell--right">{p.formatted_amount()}</td>
                                        <td class="table__cell"><StatusBadge status=p.status /></td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="reversal-screen__footer">
                <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>"Cancel"</Button>
                <Button variant="danger" on_click=Callback::new(move |_| on_confirm.run(()))>{confirm_label}</Button>
            </div>
        </div>
    }
}
