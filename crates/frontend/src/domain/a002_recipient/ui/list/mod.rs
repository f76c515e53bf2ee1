pub mod state;

use self::state::{RecipientListState, RecipientSearch, ALL_STATUS};
use crate::domain::a002_recipient::ui::create::CreateRecipientModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, SelectField, StatusBadge, TextField};
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toasts;
use contracts::domain::a002_recipient::Recipient;
use contracts::enums::RecordStatus;
use contracts::shared::mock_data::mock_recipients;
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    std::iter::once((ALL_STATUS.to_string(), ALL_STATUS.to_string()))
        .chain(
            [
                RecordStatus::Active,
                RecordStatus::Inactive,
                RecordStatus::Pending,
                RecordStatus::Approved,
            ]
            .iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect()
}

/// Страница "Recipients": поиск по маске, удаление, мастер создания
#[component]
pub fn RecipientListPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let toasts = use_toasts();

    let state = RwSignal::new(RecipientListState::new(
        mock_recipients(),
        config.lists.recipients_page_size,
    ));
    let search = RwSignal::new(RecipientSearch::default());
    // id получателя, ожидающего подтверждения удаления
    let pending_delete = RwSignal::new(None::<String>);

    let run_search = move |_| {
        let current = search.get_untracked();
        state.update(|s| {
            s.search(&current, &toasts);
        });
    };

    let confirm_delete = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            state.update(|s| {
                s.delete(&id, &toasts);
            });
        }
        pending_delete.set(None);
    });

    view! {
        <div class="page recipients">
            <div class="page__header">
                <h1 class="page__title">"Recipients"</h1>
                <Button on_click=Callback::new(move |_| state.update(|s| s.open_create()))>
                    {icon("plus")}
                    " Create Recipient"
                </Button>
            </div>

            <div class="search-panel">
                <TextField
                    label="Recipient Name"
                    placeholder="Use * as a wildcard"
                    value=Signal::derive(move || search.with(|s| s.name.clone()))
                    on_input=Callback::new(move |v| search.update(|s| s.name = v))
                />
                <SelectField
                    label="Status"
                    value=Signal::derive(move || search.with(|s| s.status.clone()))
                    options=status_options()
                    on_change=Callback::new(move |v| search.update(|s| s.status = v))
                />
                <Button on_click=Callback::new(run_search)>"Search"</Button>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Recipient Name"</th>
                        <th class="table__header-cell">"ACH Recipient ID"</th>
                        <th class="table__header-cell">"Bank"</th>
                        <th class="table__header-cell">"Account"</th>
                        <th class="table__header-cell">"Payment Type"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.with(|s| s.list.current_page());
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__empty" colspan="7">"No recipients found"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|recipient| recipient_row(recipient, pending_delete))
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.list.page()))
                total_pages=Signal::derive(move || state.with(|s| s.list.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.list.total_count()))
                on_page_change=Callback::new(move |page| state.update(|s| s.list.set_page(page)))
            />

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Recipient".to_string()
                    message="Are you sure you want to delete this recipient? This action cannot be undone.".to_string()
                    confirm_label="Delete".to_string()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>

            <Show when=move || state.with(|s| s.create.is_open())>
                <CreateRecipientModal state=state />
            </Show>
        </div>
    }
}

fn recipient_row(recipient: Recipient, pending_delete: RwSignal<Option<String>>) -> impl IntoView {
    let id = recipient.id.clone();
    let account = format!(
        "{} {}",
        recipient.account_type.code(),
        recipient.masked_account_number()
    );

    view! {
        <tr class="table__row">
            <td class="table__cell">{recipient.name.clone()}</td>
            <td class="table__cell">{recipient.recipient_id.clone()}</td>
            <td class="table__cell">{recipient.bank_name.clone()}</td>
            <td class="table__cell">{account}</td>
            <td class="table__cell">{recipient.payment_type.code()}</td>
            <td class="table__cell"><StatusBadge status=recipient.status /></td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="Delete"
                    on:click=move |_| pending_delete.set(Some(id.clone()))
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}
