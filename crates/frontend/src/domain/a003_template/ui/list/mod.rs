pub mod state;

use self::state::{TemplateListState, TemplateSearch, ALL_PAYMENT_TYPES, ALL_STATUSES, SORTABLE_FIELDS};
use crate::domain::a003_template::ui::create::CreatePpdTemplate;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, SelectField, StatusBadge, TextField};
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::get_sort_indicator;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_payment::format_usd;
use contracts::domain::a003_template::Template;
use contracts::enums::{PaymentType, RecordStatus};
use contracts::shared::mock_data::mock_templates;
use leptos::prelude::*;

fn payment_type_options() -> Vec<(String, String)> {
    std::iter::once((ALL_PAYMENT_TYPES.to_string(), ALL_PAYMENT_TYPES.to_string()))
        .chain(
            PaymentType::all()
                .iter()
                .map(|t| (t.code().to_string(), t.code().to_string())),
        )
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    std::iter::once((ALL_STATUSES.to_string(), ALL_STATUSES.to_string()))
        .chain(
            [RecordStatus::Approved, RecordStatus::Draft, RecordStatus::Incomplete, RecordStatus::Pending]
                .iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect()
}

/// Страница "Templates": поиск, сортировка по колонкам, удаление, создание шаблона PPD
#[component]
pub fn TemplateListPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let toasts = use_toasts();

    let state = RwSignal::new(TemplateListState::new(
        mock_templates(),
        config.lists.templates_page_size,
    ));
    let search = RwSignal::new(TemplateSearch::default());
    let pending_delete = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let on_saved = Callback::new(move |template: Template| {
        state.update(|s| s.add(template));
        creating.set(false);
    });

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

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| state.update(|s| s.sort_by(field))
            >
                {label}
                <span class="table__sort-indicator">
                    {move || state.with(|s| get_sort_indicator(s.list.sort(), field))}
                </span>
            </th>
        }
    };

    view! {
        <Show when=move || creating.get()>
            <CreatePpdTemplate on_saved=on_saved on_cancel=Callback::new(move |_| creating.set(false)) />
        </Show>
        <Show when=move || !creating.get()>
            <div class="page templates">
                <div class="page__header">
                    <h1 class="page__title">"Templates"</h1>
                    <Button on_click=Callback::new(move |_| creating.set(true))>
                        {icon("plus")}
                        "Create PPD Template"
                    </Button>
                </div>

                <div class="search-panel">
                    <TextField
                        label="Template Name"
                        placeholder="Use * as a wildcard"
                        value=Signal::derive(move || search.with(|s| s.name.clone()))
                        on_input=Callback::new(move |v| search.update(|s| s.name = v))
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
                    <Button on_click=Callback::new(run_search)>"Search"</Button>
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            {SORTABLE_FIELDS
                                .iter()
                                .map(|&(field, label)| sortable_header(field, label))
                                .collect_view()}
                            <th class="table__header-cell">"Payment Type"</th>
                            <th class="table__header-cell">"Recipient"</th>
                            <th class="table__header-cell">"Modified"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.with(|s| s.list.current_page());
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__empty" colspan="7">"No templates found"</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|template| template_row(template, pending_delete))
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
                        title="Delete Template".to_string()
                        message="Are you sure you want to delete this template? This action cannot be undone.".to_string()
                        confirm_label="Delete".to_string()
                        on_confirm=confirm_delete
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                    />
                </Show>
            </div>
        </Show>
    }
}

fn template_row(template: Template, pending_delete: RwSignal<Option<String>>) -> impl IntoView {
    let id = template.id.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="table__cell-title">{template.name.clone()}</div>
                <div class="table__cell-subtitle">{template.description.clone()}</div>
            </td>
            <td class="table__cell"><StatusBadge status=template.status /></td>
            <td class="table__cell table__cell--right">{format_usd(template.amount)}</td>
            <td class="table__cell">{template.payment_type.code()}</td>
            <td class="table__cell">{template.recipient.clone()}</td>
            <td class="table__cell">
                {format!("{} by {}", template.modified_at.format("%m/%d/%Y"), template.modified_by)}
            </td>
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
