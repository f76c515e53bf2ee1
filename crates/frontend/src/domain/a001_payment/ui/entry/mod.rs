pub mod state;

use self::state::{PaymentEntryState, PaymentForm, PaymentLine};
use crate::domain::a002_recipient::ui::picker::state::RecipientPicker;
use crate::domain::a002_recipient::ui::picker::RecipientPickerModal;
use crate::shared::components::ui::{Button, CheckField, RadioChoice, SelectField, StatusBadge, TextField};
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_payment::format_usd;
use contracts::domain::a002_recipient::Recipient;
use contracts::enums::{Frequency, PaymentType};
use contracts::shared::mock_data::{mock_recipients, CURRENT_USER};
use leptos::prelude::*;

fn form_value(state: RwSignal<PaymentEntryState>, get: fn(&PaymentForm) -> String) -> Signal<String> {
    Signal::derive(move || state.with(|s| get(&s.form)))
}

fn field_error(state: RwSignal<PaymentEntryState>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || state.with(|s| s.errors.message(field)))
}

/// Страница "Create Payment": тип, периодичность, дата исполнения, получатели и суммы
#[component]
pub fn PaymentEntryPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let toasts = use_toasts();

    let state = RwSignal::new(PaymentEntryState::new());
    let picker = RwSignal::new(RecipientPicker::new(
        mock_recipients(),
        config.lists.recipients_page_size,
    ));
    let picker_open = RwSignal::new(false);

    // строки таблицы пересоздаются только при смене получателей, не при вводе суммы
    let line_ids = Memo::new(move |_| state.with(|s| s.form.recipient_ids()));

    let open_picker = Callback::new(move |_| {
        let ids = state.with_untracked(|s| s.form.recipient_ids());
        picker.update(|p| p.open_with(&ids));
        picker_open.set(true);
    });
    let on_picked = Callback::new(move |recipients: Vec<Recipient>| {
        state.update(|s| s.set_recipients(recipients));
        picker_open.set(false);
    });

    let on_submit = Callback::new(move |_| {
        let today = chrono::Local::now().date_naive();
        state.update(|s| {
            if let Err(errors) = s.submit(today, CURRENT_USER, &toasts) {
                log::debug!("payment entry: {} invalid field(s)", errors.len());
            }
        })
    });

    let payment_types = PaymentType::all()
        .iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect::<Vec<_>>();
    let frequencies = Frequency::recurring()
        .iter()
        .map(|f| (f.display_name().to_string(), f.display_name().to_string()))
        .collect::<Vec<_>>();
    let is_recurring = move || state.with(|s| s.form.frequency.is_recurring());

    view! {
        <div class="page payment-entry">
            <div class="page__header">
                <h1 class="page__title">"Create Payment"</h1>
            </div>

            <div class="form">
                <SelectField
                    label="Payment Type"
                    value=form_value(state, |f| f.payment_type.code().to_string())
                    options=payment_types
                    on_change=Callback::new(move |v: String| {
                        if let Some(payment_type) = PaymentType::from_code(&v) {
                            state.update(|s| s.update("payment_type", |f| f.payment_type = payment_type))
                        }
                    })
                />
                <RadioChoice
                    label="Frequency"
                    name="frequency"
                    value=Signal::derive(move || if is_recurring() { "recurring".to_string() } else { "one-time".to_string() })
                    options=vec![
                        ("one-time".to_string(), "One-Time Only".to_string()),
                        ("recurring".to_string(), "Recurring".to_string()),
                    ]
                    on_change=Callback::new(move |v: String| {
                        state.update(|s| s.update("frequency", |f| f.set_recurring(v == "recurring")))
                    })
                />
                <Show when=is_recurring>
                    <SelectField
                        label="Repeats"
                        value=form_value(state, |f| f.frequency.display_name().to_string())
                        options=frequencies.clone()
                        on_change=Callback::new(move |v: String| {
                            if let Some(frequency) = Frequency::from_display_name(&v) {
                                state.update(|s| s.update("frequency", |f| f.frequency = frequency))
                            }
                        })
                    />
                </Show>
                <TextField
                    label="Effective Date"
                    input_type="date"
                    required=true
                    value=form_value(state, |f| f.effective_date.clone())
                    error=field_error(state, "effective_date")
                    on_input=Callback::new(move |v: String| {
                        state.update(|s| s.update("effective_date", |f| f.effective_date = v))
                    })
                />
                <CheckField
                    label="Approve on submit"
                    checked=Signal::derive(move || state.with(|s| s.form.approve_on_submit))
                    on_change=Callback::new(move |checked: bool| {
                        state.update(|s| s.update("approve_on_submit", |f| f.approve_on_submit = checked))
                    })
                />
            </div>

            <div class="section__header">
                <h2 class="section__title">"Recipients"</h2>
                <Button variant="outline" on_click=open_picker>
                    {icon("plus")}
                    "Select Recipients"
                </Button>
            </div>
            {move || state.with(|s| s.errors.message("recipients")).map(|e| view! { <div class="form__error">{e}</div> })}
            {move || state.with(|s| s.errors.message("amounts")).map(|e| view! { <div class="form__error">{e}</div> })}

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Recipient Name"</th>
                        <th class="table__header-cell">"Bank ID"</th>
                        <th class="table__header-cell">"Account Number"</th>
                        <th class="table__header-cell">"Amount"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        line_ids.track();
                        let lines = state.with_untracked(|s| s.form.lines.clone());
                        if lines.is_empty() {
                            return view! {
                                <tr><td class="table__empty" colspan="6">"NO RECIPIENT SELECTED"</td></tr>
                            }
                            .into_any();
                        }
                        lines.into_iter().map(|line| line_row(line, state)).collect_view().into_any()
                    }}
                </tbody>
            </table>
            <div class="table__footer">
                {move || format!("Total: {}", format_usd(state.with(|s| s.form.total())))}
            </div>

            <div class="page__actions">
                <Button variant="outline" on_click=Callback::new(move |_| state.update(|s| s.reset()))>
                    "Cancel"
                </Button>
                <Button on_click=on_submit>"Submit Payment"</Button>
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

fn line_row(line: PaymentLine, state: RwSignal<PaymentEntryState>) -> impl IntoView {
    let id = line.recipient.id.clone();
    let amount_id = id.clone();
    let value_id = id.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="table__cell-title">{line.recipient.name.clone()}</div>
                <div class="table__cell-subtitle">{line.recipient.recipient_id.clone()}</div>
            </td>
            <td class="table__cell">{line.recipient.bank_id.clone()}</td>
            <td class="table__cell">{line.recipient.masked_account_number()}</td>
            <td class="table__cell">
                <input
                    class="form__input form__input--amount"
                    placeholder="0.00"
                    prop:value=move || {
                        state.with(|s| {
                            s.form
                                .lines
                                .iter()
                                .find(|l| l.recipient.id == value_id)
                                .map(|l| l.amount.clone())
                                .unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        let amount = event_target_value(&ev);
                        state.update(|s| {
                            s.update("amounts", |f| {
                                f.set_amount(&amount_id, amount);
                            })
                        })
                    }
                />
            </td>
            <td class="table__cell"><StatusBadge status=line.recipient.status /></td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="Remove"
                    on:click=move |_| state.update(|s| {
                        s.update("recipients", |f| {
                            f.remove_line(&id);
                        })
                    })
                >
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}
