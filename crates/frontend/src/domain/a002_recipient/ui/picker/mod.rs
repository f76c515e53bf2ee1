pub mod state;

use self::state::RecipientPicker;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::{Button, TextField};
use crate::shared::modal::Modal;
use contracts::domain::a002_recipient::Recipient;
use leptos::prelude::*;

/// Диалог "SELECT RECIPIENTS"
///
/// Состояние выбора живёт в `picker`; `on_done` получает выбранных получателей.
#[component]
pub fn RecipientPickerModal(
    picker: RwSignal<RecipientPicker>,
    on_done: Callback<Vec<Recipient>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let rows = move || picker.with(|p| p.table().list().current_page());

    view! {
        <Modal title=Signal::derive(|| "SELECT RECIPIENTS".to_string()) on_close=on_cancel>
            <TextField
                label="Search"
                input_type="search"
                placeholder="Name, Recipient ID or Account Number"
                value=Signal::derive(move || picker.with(|p| p.query().to_string()))
                on_input=Callback::new(move |v: String| picker.update(|p| p.set_query(&v)))
            />
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell table__header-cell--checkbox"></th>
                        <th class="table__header-cell">"Recipient Name"</th>
                        <th class="table__header-cell">"Recipient ID"</th>
                        <th class="table__header-cell">"Bank ID"</th>
                        <th class="table__header-cell">"Account Number"</th>
                        <th class="table__header-cell">"Account Type"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__empty" colspan="6">"No recipients found"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter().map(|r| picker_row(r, picker)).collect_view().into_any()
                    }}
                </tbody>
            </table>
            <PaginationControls
                current_page=Signal::derive(move || picker.with(|p| p.table().list().page()))
                total_pages=Signal::derive(move || picker.with(|p| p.table().list().total_pages()))
                total_count=Signal::derive(move || picker.with(|p| p.table().list().total_count()))
                on_page_change=Callback::new(move |page| picker.update(|p| p.set_page(page)))
            />
            <div class="modal__actions">
                <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>"Cancel"</Button>
                <Button on_click=Callback::new(move |_| on_done.run(picker.with_untracked(|p| p.chosen())))>
                    "Done"
                </Button>
            </div>
        </Modal>
    }
}

fn picker_row(recipient: Recipient, picker: RwSignal<RecipientPicker>) -> impl IntoView {
    let id = recipient.id.clone();
    let checked_id = id.clone();
    let row_id = id.clone();

    view! {
        <tr
            class="table__row table__row--clickable"
            on:click=move |_| picker.update(|p| {
                p.toggle(&row_id);
            })
        >
            <TableCheckbox
                checked=Signal::derive(move || picker.with(|p| p.table().is_selected(&checked_id)))
                on_toggle=Callback::new(move |_| picker.update(|p| {
                    p.toggle(&id);
                }))
            />
            <td class="table__cell">{recipient.name.clone()}</td>
            <td class="table__cell">{recipient.recipient_id.clone()}</td>
            <td class="table__cell">{recipient.bank_id.clone()}</td>
            <td class="table__cell">{recipient.account_number.clone()}</td>
            <td class="table__cell">{recipient.account_type.code()}</td>
        </tr>
    }
}
