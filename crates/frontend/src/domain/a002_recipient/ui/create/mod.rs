pub mod model;

use self::model::{AchRecipientKind, BankSelection, RecipientDraft};
use crate::domain::a002_recipient::ui::list::state::RecipientListState;
use crate::shared::components::ui::{CheckField, RadioChoice, SelectField, TextField};
use crate::shared::components::wizard_nav::{WizardNav, WizardProgress};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::shared::wizard::WizardForm;
use contracts::enums::{AccountType, PaymentType};
use contracts::shared::mock_data::PREFERRED_BANKS;
use leptos::prelude::*;

/// Текстовое поле черновика; ошибка берётся из мастера по имени поля
fn draft_field(
    state: RwSignal<RecipientListState>,
    field: &'static str,
    label: &'static str,
    required: bool,
    get: fn(&RecipientDraft) -> String,
    set: fn(&mut RecipientDraft, String),
) -> impl IntoView {
    view! {
        <TextField
            label=label
            required=required
            value=Signal::derive(move || state.with(|s| get(s.create.draft())))
            error=Signal::derive(move || state.with(|s| s.create.errors().message(field)))
            on_input=Callback::new(move |v: String| {
                state.update(|s| s.create.update_draft(field, |d| set(d, v)))
            })
        />
    }
}

/// Мастер "Create Master Recipient" (3 шага)
#[component]
pub fn CreateRecipientModal(state: RwSignal<RecipientListState>) -> impl IntoView {
    let toasts = use_toasts();
    let step = Signal::derive(move || state.with(|s| s.create.step().unwrap_or(1)));

    let on_next = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.create.next() {
                log::debug!("recipient wizard: {}", e);
            }
        })
    });
    let on_back = Callback::new(move |_| {
        state.update(|s| {
            let _ = s.create.back();
        })
    });
    let on_submit = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.submit_create(&toasts) {
                log::debug!("recipient wizard: {}", e);
            }
        })
    });
    let on_cancel = Callback::new(move |_| state.update(|s| s.create.cancel()));

    view! {
        <Modal title=Signal::derive(|| "Create Master Recipient".to_string()) on_close=on_cancel>
            <WizardProgress step=step step_count=RecipientDraft::STEPS />
            <p class="wizard__step-title">
                {move || RecipientDraft::step_title(step.get())}
            </p>
            {move || match step.get() {
                1 => view! { <RecipientKindStep state=state /> }.into_any(),
                2 => view! { <AccountStep state=state /> }.into_any(),
                _ => view! { <ReviewStep state=state /> }.into_any(),
            }}
            <WizardNav
                step=step
                step_count=RecipientDraft::STEPS
                on_back=on_back
                on_next=on_next
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </Modal>
    }
}

#[component]
fn RecipientKindStep(state: RwSignal<RecipientListState>) -> impl IntoView {
    let kinds = [AchRecipientKind::Individual, AchRecipientKind::Business]
        .iter()
        .map(|k| (k.display_name().to_string(), k.display_name().to_string()))
        .collect::<Vec<_>>();
    let payment_types = PaymentType::all()
        .iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <RadioChoice
            label="ACH Recipient Type"
            name="ach_recipient_kind"
            value=Signal::derive(move || {
                state.with(|s| s.create.draft().ach_recipient_kind.display_name().to_string())
            })
            options=kinds
            on_change=Callback::new(move |v: String| {
                let kind = if v == AchRecipientKind::Business.display_name() {
                    AchRecipientKind::Business
                } else {
                    AchRecipientKind::Individual
                };
                state.update(|s| s.create.update_draft("ach_recipient_kind", |d| d.ach_recipient_kind = kind))
            })
        />
        <SelectField
            label="Payment Type"
            value=Signal::derive(move || state.with(|s| s.create.draft().payment_type.code().to_string()))
            options=payment_types
            on_change=Callback::new(move |v: String| {
                if let Some(payment_type) = PaymentType::from_code(&v) {
                    state.update(|s| s.create.update_draft("payment_type", |d| d.payment_type = payment_type))
                }
            })
        />
    }
}

#[component]
fn AccountStep(state: RwSignal<RecipientListState>) -> impl IntoView {
    let account_types = AccountType::all()
        .iter()
        .map(|t| (t.code().to_string(), t.code().to_string()))
        .collect::<Vec<_>>();
    let banks = PREFERRED_BANKS
        .iter()
        .map(|(id, name)| (id.to_string(), format!("{} - {}", id, name)))
        .collect::<Vec<_>>();
    let is_manual =
        move || state.with(|s| s.create.draft().bank_selection == BankSelection::Manual);

    view! {
        {draft_field(state, "name", "Recipient Name", true, |d| d.name.clone(), |d, v| d.name = v)}
        {draft_field(state, "recipient_id", "ACH Recipient ID", true, |d| d.recipient_id.clone(), |d, v| d.recipient_id = v)}
        <RadioChoice
            label="Account Type"
            name="account_type"
            value=Signal::derive(move || state.with(|s| s.create.draft().account_type.code().to_string()))
            options=account_types
            on_change=Callback::new(move |v: String| {
                if let Some(account_type) = AccountType::from_code(&v) {
                    state.update(|s| s.create.update_draft("account_type", |d| d.account_type = account_type))
                }
            })
        />
        {draft_field(state, "account_number", "Account Number", true, |d| d.account_number.clone(), |d, v| d.account_number = v)}
        <RadioChoice
            label="Bank"
            name="bank_selection"
            value=Signal::derive(move || if is_manual() { "manual".to_string() } else { "list".to_string() })
            options=vec![
                ("list".to_string(), "Select from list".to_string()),
                ("manual".to_string(), "Enter manually".to_string()),
            ]
            on_change=Callback::new(move |v: String| {
                let selection = if v == "manual" { BankSelection::Manual } else { BankSelection::List };
                state.update(|s| s.create.update_draft("bank_id", |d| d.set_bank_selection(selection)))
            })
        />
        <Show
            when=is_manual
            fallback=move || view! {
                <SelectField
                    label="Bank ID"
                    placeholder="Select a Bank"
                    value=Signal::derive(move || state.with(|s| s.create.draft().bank_id.clone()))
                    options=banks.clone()
                    error=Signal::derive(move || state.with(|s| s.create.errors().message("bank_id")))
                    on_change=Callback::new(move |v: String| {
                        state.update(|s| s.create.update_draft("bank_id", |d| d.select_bank(&v)))
                    })
                />
            }
        >
            {draft_field(state, "bank_id", "Bank ID (Routing Number)", true, |d| d.bank_id.clone(), |d, v| d.bank_id = v)}
            {draft_field(state, "bank_name", "Bank Name", true, |d| d.bank_name.clone(), |d, v| d.bank_name = v)}
        </Show>
    }
}

#[component]
fn ReviewStep(state: RwSignal<RecipientListState>) -> impl IntoView {
    let summary = move || {
        state.with(|s| {
            let d = s.create.draft();
            vec![
                ("ACH Recipient Type", d.ach_recipient_kind.display_name().to_string()),
                ("Payment Type", d.payment_type.code().to_string()),
                ("Recipient Name", d.name.clone()),
                ("ACH Recipient ID", d.recipient_id.clone()),
                ("Account Type", d.account_type.code().to_string()),
                ("Account Number", d.account_number.clone()),
                ("Bank ID", d.bank_id.clone()),
                ("Bank Name", d.bank_name.clone()),
            ]
        })
    };
    let add_contact = move || state.with(|s| s.create.draft().add_contact_info);

    view! {
        <dl class="review-list">
            {move || {
                summary()
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                    .collect_view()
            }}
        </dl>
        <CheckField
            label="Add contact information"
            checked=Signal::derive(add_contact)
            on_change=Callback::new(move |checked: bool| {
                state.update(|s| s.create.update_draft("add_contact_info", |d| d.add_contact_info = checked))
            })
        />
        <Show when=add_contact>
            {draft_field(state, "contact_name", "Contact Name", true, |d| d.contact_name.clone(), |d, v| d.contact_name = v)}
            {draft_field(state, "contact_email", "Contact Email", false, |d| d.contact_email.clone(), |d, v| d.contact_email = v)}
            {draft_field(state, "contact_phone", "Contact Phone", false, |d| d.contact_phone.clone(), |d, v| d.contact_phone = v)}
        </Show>
    }
}
