pub mod state;

use self::state::{QuickEntryStage, QuickEntryState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::Button;
use crate::shared::config::PortalConfig;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_payment::format_usd;
use contracts::domain::a003_template::Template;
use contracts::shared::mock_data::{mock_templates, CURRENT_USER};
use leptos::prelude::*;

/// Страница "ACH Quick Entry"
#[component]
pub fn QuickEntryPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let state = RwSignal::new(QuickEntryState::new(
        mock_templates(),
        config.lists.templates_page_size,
    ));

    view! {
        <div class="page quick-entry">
            {move || match state.with(|s| s.stage()) {
                QuickEntryStage::Select => view! { <TemplateSelection state=state /> }.into_any(),
                QuickEntryStage::Preview => view! { <QuickEntryPreview state=state /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TemplateSelection(state: RwSignal<QuickEntryState>) -> impl IntoView {
    let header_state = Signal::derive(move || state.with(|s| s.table.header_state()));
    // строки не пересоздаются при вводе даты
    let page_ids = Memo::new(move |_| state.with(|s| s.table.list().current_page_ids()));

    view! {
        <div class="page__header">
            <h1 class="page__title">"ACH QUICK ENTRY"</h1>
        </div>
        <h2 class="section__title">"AVAILABLE TEMPLATES"</h2>
        <table class="table">
            <thead>
                <tr>
                    <TableHeaderCheckbox
                        state=header_state
                        on_toggle=Callback::new(move |_| state.update(|s| s.table.toggle_select_all_visible()))
                    />
                    <th class="table__header-cell">"Template Name"</th>
                    <th class="table__header-cell">"Payment Date"</th>
                    <th class="table__header-cell">"Company Account"</th>
                    <th class="table__header-cell">"Type"</th>
                    <th class="table__header-cell">"Recipient"</th>
                    <th class="table__header-cell table__header-cell--right">"Total Amount"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page_ids.track();
                    let rows = state.with_untracked(|s| s.table.list().current_page());
                    if rows.is_empty() {
                        return view! {
                            <tr><td class="table__empty" colspan="7">"No templates found"</td></tr>
                        }
                        .into_any();
                    }
                    rows.into_iter().map(|t| template_row(t, state)).collect_view().into_any()
                }}
            </tbody>
        </table>
        <PaginationControls
            current_page=Signal::derive(move || state.with(|s| s.table.list().page()))
            total_pages=Signal::derive(move || state.with(|s| s.table.list().total_pages()))
            total_count=Signal::derive(move || state.with(|s| s.table.list().total_count()))
            on_page_change=Callback::new(move |page| state.update(|s| s.table.set_page(page)))
        />
        <div class="page__actions">
            <Button
                disabled=Signal::derive(move || !state.with(|s| s.can_continue()))
                on_click=Callback::new(move |_| state.update(|s| {
                    s.continue_to_preview();
                }))
            >
                "Continue"
            </Button>
        </div>
    }
}

fn template_row(template: Template, state: RwSignal<QuickEntryState>) -> impl IntoView {
    let id = template.id.clone();
    let checked_id = id.clone();
    let date_id = id.clone();
    let value_id = id.clone();

    view! {
        <tr class="table__row">
            <TableCheckbox
                checked=Signal::derive(move || state.with(|s| s.table.is_selected(&checked_id)))
                on_toggle=Callback::new(move |_| state.update(|s| {
                    s.table.toggle_row(&id);
                }))
            />
            <td class="table__cell">
                <div class="table__cell-title">{template.name.clone()}</div>
                <div class="table__cell-subtitle">{template.description.clone()}</div>
            </td>
            <td class="table__cell">
                <input
                    type="date"
                    class="form__input form__input--date"
                    prop:value=move || state.with(|s| s.payment_date_text(&value_id))
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_payment_date(&date_id, text))
                    }
                />
            </td>
            <td class="table__cell">{template.company_account.clone()}</td>
            <td class="table__cell">{template.payment_type.code()}</td>
            <td class="table__cell">{template.recipient.clone()}</td>
            <td class="table__cell table__cell--right">{format!("{:.2}", template.amount)}</td>
        </tr>
    }
}

#[component]
fn QuickEntryPreview(state: RwSignal<QuickEntryState>) -> impl IntoView {
    let toasts = use_toasts();

    let on_submit = Callback::new(move |_| {
        let today = chrono::Local::now().date_naive();
        state.update(|s| {
            if let Err(errors) = s.submit(today, CURRENT_USER, &toasts) {
                log::debug!("quick entry: {} invalid field(s)", errors.len());
            }
        })
    });

    let rows = move || {
        state.with(|s| {
            s.preview_rows()
                .into_iter()
                .map(|t| (t.clone(), s.payment_date_label(&t.id)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page__header">
            <h1 class="page__title">"PREVIEW ACH QUICK ENTRY PAYMENTS"</h1>
        </div>
        {move || {
            state
                .with(|s| s.errors.message("payment_date"))
                .map(|e| view! { <div class="form__error">{e}</div> })
        }}
        <table class="table">
            <thead>
                <tr>
                    <th class="table__header-cell">"Template Name"</th>
                    <th class="table__header-cell">"Payment Date"</th>
                    <th class="table__header-cell">"Company Account"</th>
                    <th class="table__header-cell">"Type"</th>
                    <th class="table__header-cell">"Recipient"</th>
                    <th class="table__header-cell table__header-cell--right">"Total Amount"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(template, date)| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div class="table__cell-title">{template.name.clone()}</div>
                                        <div class="table__cell-subtitle">{template.description.clone()}</div>
                                    </td>
                                    <td class="table__cell">{date}</td>
                                    <td class="table__cell">{template.company_account.clone()}</td>
                                    <td class="table__cell">{template.payment_type.code()}</td>
                                    <td class="table__cell">{template.recipient.clone()}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", template.amount)}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
        <div class="table__footer">
            {move || format!("Total: {}", format_usd(state.with(|s| s.total())))}
        </div>
        <div class="page__actions">
            <Button variant="outline" on_click=Callback::new(move |_| state.update(|s| s.cancel()))>
                "Cancel"
            </Button>
            <Button variant="outline" on_click=Callback::new(move |_| state.update(|s| s.edit()))>
                "Edit Payment"
            </Button>
            <Button on_click=on_submit>"Submit Payment"</Button>
        </div>
    }
}
