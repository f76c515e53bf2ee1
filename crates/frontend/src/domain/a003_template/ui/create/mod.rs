pub mod state;

use self::state::{PpdTemplateForm, PpdTemplateState};
use crate::domain::a002_recipient::ui::picker::state::RecipientPicker;
use crate::domain::a002_recipient::ui::picker::RecipientPickerModal;
use crate::shared::components::ui::{Button, SelectField, StatusBadge, TextField};
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a002_recipient::Recipient;
use contracts::domain::a003_template::Template;
use contracts::shared::mock_data::{mock_recipients, ACH_COMPANY_IDS, CURRENT_USER, ORIGINATING_ACCOUNTS};
use leptos::prelude::*;

fn form_field(
    state: RwSignal<PpdTemplateState>,
    field: &'static str,
    label: &'static str,
    required: bool,
    get: fn(&PpdTemplateForm) -> String,
    set: fn(&mut PpdTemplateForm, String),
) -> impl IntoView {
    view! {
        <TextField
            label=label
            required=required
            value=Signal::derive(move || state.with(|s| get(&s.form)))
            error=Signal::derive(move || state.with(|s| s.errors.message(field)))
            on_input=Callback::new(move |v: String| state.update(|s| s.update(field, |f| set(f, v))))
        />
    }
}

fn choice_field(
    state: RwSignal<PpdTemplateState>,
    field: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
    get: fn(&PpdTemplateForm) -> String,
    set: fn(&mut PpdTemplateForm, String),
) -> impl IntoView {
    view! {
        <SelectField
            label=label
            placeholder="Select"
            value=Signal::derive(move || state.with(|s| get(&s.form)))
            options={choices.iter().map(|c| (c.to_string(), c.to_string())).collect::<Vec<_>>()}
            error=Signal::derive(move || state.with(|s| s.errors.message(field)))
            on_change=Callback::new(move |v: String| state.update(|s| s.update(field, |f| set(f, v))))
        />
    }
}

/// Форма "PPD Template": реквизиты шаблона и список получателей
///
/// `on_saved` получает шаблон после "Continue" (Pending) или "Save Incomplete" (Draft).
#[component]
pub fn CreatePpdTemplate(on_saved: Callback<Template>, on_cancel: Callback<()>) -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let toasts = use_toasts();
    let today = chrono::Local::now().date_naive();

    let state = RwSignal::new(PpdTemplateState::new(today));
    let picker = RwSignal::new(RecipientPicker::new(
        mock_recipients(),
        config.lists.recipients_page_size,
    ));
    let picker_open = RwSignal::new(false);

    let open_picker = Callback::new(move |_| {
        let ids = state.with_untracked(|s| s.form.recipient_ids());
        picker.update(|p| p.open_with(&ids));
        picker_open.set(true);
    });
    let on_picked = Callback::new(move |recipients: Vec<Recipient>| {
        state.update(|s| s.set_recipients(recipients, &toasts));
        picker_open.set(false);
    });

    let on_continue = Callback::new(move |_| {
        let result = state
            .try_update(|s| s.submit(today, CURRENT_USER, &toasts))
            .and_then(Result::ok);
        if let Some(template) = result {
            on_saved.run(template);
        }
    });
    let on_save_incomplete = Callback::new(move |_| {
        if let Some(template) = state.try_update(|s| s.save_incomplete(today, CURRENT_USER, &toasts)) {
            on_saved.run(template);
        }
    });

    view! {
        <div class="page ppd-template">
            <div class="page__header">
                <h1 class="page__title">"PPD Template"</h1>
            </div>

            <div class="form">
                <TextField
                    label="Template Activation Date"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || state.with(|s| s.form.activation_date.clone()))
                    error=Signal::derive(move || state.with(|s| s.errors.message("activation_date")))
                    on_input=Callback::new(move |v: String| {
                        state.update(|s| s.update("activation_date", |f| f.activation_date = v))
                    })
                />
                {form_field(state, "name", "Template Name", true, |f| f.name.clone(), |f, v| f.name = v)}
                {choice_field(state, "originating_account", "Originating Account", ORIGINATING_ACCOUNTS, |f| f.originating_account.clone(), |f, v| f.originating_account = v)}
                {choice_field(state, "originating_ach_company_id", "Originating ACH Company ID", ACH_COMPANY_IDS, |f| f.originating_ach_company_id.clone(), |f, v| f.originating_ach_company_id = v)}
                {form_field(state, "company_entry_description", "Company Entry Description", true, |f| f.company_entry_description.clone(), |f, v| f.company_entry_description = v)}
                {form_field(state, "company_discretionary_data", "Company Discretionary Data", false, |f| f.company_discretionary_data.clone(), |f, v| f.company_discretionary_data = v)}
                {form_field(state, "template_limit", "Template Limit", false, |f| f.template_limit.clone(), |f, v| f.template_limit = v)}
            </div>

            <div class="section__header">
                <h2 class="section__title">"Recipients"</h2>
                <Button variant="outline" on_click=open_picker>
                    {icon("plus")}
                    "Select Recipients"
                </Button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Recipient Name"</th>
                        <th class="table__header-cell">"Bank ID"</th>
                        <th class="table__header-cell">"Account Number"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let recipients = state.with(|s| s.form.recipients.clone());
                        if recipients.is_empty() {
                            return view! {
                                <tr><td class="table__empty" colspan="5">"NO RECIPIENT SELECTED"</td></tr>
                            }
                            .into_any();
                        }
                        recipients
                            .into_iter()
                            .map(|r| recipient_row(r, state))
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <div class="page__actions">
                <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>"Cancel"</Button>
                <Button variant="outline" on_click=on_save_incomplete>"Save Incomplete"</Button>
                <Button on_click=on_continue>"Continue"</Button>
            </div>

            <Show when=move || picker_open.get()>
                <RecipientPickerModal
                    picker=picker
                    on_done=on_picked
                    on_cancel=Callback::new(move |_| picker_open.set(false))
                />
            </Show>
        </div>
    }
}

fn recipient_row(recipient: Recipient, state: RwSignal<PpdTemplateState>) -> impl IntoView {
    let id = recipient.id.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="table__cell-title">{recipient.name.clone()}</div>
                <div class="table__cell-subtitle">{recipient.recipient_id.clone()}</div>
            </td>
            <td class="table__cell">
                <div>{recipient.bank_id.clone()}</div>
                <div class="table__cell-subtitle">{recipient.bank_name.clone()}</div>
            </td>
            <td class="table__cell">{recipient.masked_account_number()}</td>
            <td class="table__cell"><StatusBadge status=recipient.status /></td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="Remove"
                    on:click=move |_| state.update(|s| {
                        s.remove_recipient(&id);
                    })
                >
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}
