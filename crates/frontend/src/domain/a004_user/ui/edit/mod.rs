pub mod model;

use self::model::UserDraft;
use crate::domain::a004_user::ui::list::state::UsersState;
use crate::shared::components::ui::{CheckField, RadioChoice, SelectField, TextField};
use crate::shared::components::wizard_nav::{WizardNav, WizardProgress};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::shared::wizard::WizardForm;
use contracts::domain::a004_user::{Entitlement, LimitMode};
use contracts::enums::RecordStatus;
use leptos::prelude::*;

const STATUSES: [RecordStatus; 3] = [
    RecordStatus::Active,
    RecordStatus::Inactive,
    RecordStatus::Pending,
];

fn draft_field(
    state: RwSignal<UsersState>,
    field: &'static str,
    label: &'static str,
    required: bool,
    get: fn(&UserDraft) -> String,
    set: fn(&mut UserDraft, String),
) -> impl IntoView {
    view! {
        <TextField
            label=label
            required=required
            value=Signal::derive(move || state.with(|s| get(s.edit.draft())))
            error=Signal::derive(move || state.with(|s| s.edit.errors().message(field)))
            on_input=Callback::new(move |v: String| {
                state.update(|s| s.edit.update_draft(field, |d| set(d, v)))
            })
        />
    }
}

fn limit_mode_choice(
    state: RwSignal<UsersState>,
    field: &'static str,
    label: &'static str,
    get: fn(&UserDraft) -> LimitMode,
    set: fn(&mut UserDraft, LimitMode),
) -> impl IntoView {
    let options = [LimitMode::Unlimited, LimitMode::Custom]
        .iter()
        .map(|m| (m.code().to_string(), m.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <RadioChoice
            label=label
            name=field
            value=Signal::derive(move || state.with(|s| get(s.edit.draft()).code().to_string()))
            options=options
            on_change=Callback::new(move |v: String| {
                let mode = if v == LimitMode::Custom.code() { LimitMode::Custom } else { LimitMode::Unlimited };
                state.update(|s| s.edit.update_draft(field, |d| set(d, mode)))
            })
        />
    }
}

/// Мастер "Edit User" (3 шага)
#[component]
pub fn EditUserModal(state: RwSignal<UsersState>) -> impl IntoView {
    let toasts = use_toasts();
    let step = Signal::derive(move || state.with(|s| s.edit.step().unwrap_or(1)));

    let on_next = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.edit.next() {
                log::debug!("edit user: {}", e);
            }
        })
    });
    let on_back = Callback::new(move |_| {
        state.update(|s| {
            let _ = s.edit.back();
        })
    });
    let on_submit = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.submit_edit(&toasts) {
                log::debug!("edit user: {}", e);
            }
        })
    });
    let on_cancel = Callback::new(move |_| state.update(|s| s.edit.cancel()));

    view! {
        <Modal title=Signal::derive(|| "Edit User".to_string()) on_close=on_cancel>
            <WizardProgress step=step step_count=UserDraft::STEPS />
            <h3 class="wizard__step-title">{move || UserDraft::step_title(step.get())}</h3>
            {move || match step.get() {
                1 => view! { <UserInfoStep state=state /> }.into_any(),
                2 => view! { <LoginSettingsStep state=state /> }.into_any(),
                _ => view! { <SecurityStep state=state /> }.into_any(),
            }}
            <WizardNav
                step=step
                step_count=UserDraft::STEPS
                on_back=on_back
                on_next=on_next
                on_submit=on_submit
                on_cancel=on_cancel
                submit_label="Save Changes"
            />
        </Modal>
    }
}

#[component]
fn UserInfoStep(state: RwSignal<UsersState>) -> impl IntoView {
    let statuses = STATUSES
        .iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <SelectField
            label="Status"
            value=Signal::derive(move || state.with(|s| s.edit.draft().status.code().to_string()))
            options=statuses
            on_change=Callback::new(move |v: String| {
                if let Some(status) = RecordStatus::from_code(&v) {
                    state.update(|s| s.edit.update_draft("status", |d| d.status = status))
                }
            })
        />
        {draft_field(state, "first_name", "First Name", true, |d| d.first_name.clone(), |d, v| d.first_name = v)}
        {draft_field(state, "last_name", "Last Name", true, |d| d.last_name.clone(), |d, v| d.last_name = v)}
        {draft_field(state, "email", "Email Address", true, |d| d.email.clone(), |d, v| d.email = v)}
        {draft_field(state, "phone", "Phone Number", true, |d| d.phone.clone(), |d, v| d.phone = v)}
    }
}

#[component]
fn LoginSettingsStep(state: RwSignal<UsersState>) -> impl IntoView {
    view! {
        {draft_field(state, "user_id", "User ID", true, |d| d.user_id.clone(), |d, v| d.user_id = v)}
        {draft_field(state, "language", "Default Language", true, |d| d.language.clone(), |d, v| d.language = v)}
    }
}

#[component]
fn SecurityStep(state: RwSignal<UsersState>) -> impl IntoView {
    let entitlements = [Entitlement::Full, Entitlement::None, Entitlement::Custom]
        .iter()
        .map(|e| (e.code().to_string(), e.code().to_string()))
        .collect::<Vec<_>>();

    view! {
        <CheckField
            label="System Administrator"
            checked=Signal::derive(move || state.with(|s| s.edit.draft().system_admin))
            on_change=Callback::new(move |checked: bool| {
                state.update(|s| s.edit.update_draft("system_admin", |d| d.system_admin = checked))
            })
        />
        <CheckField
            label="Custom approvals"
            checked=Signal::derive(move || state.with(|s| s.edit.draft().custom_approvals))
            on_change=Callback::new(move |checked: bool| {
                state.update(|s| s.edit.update_draft("custom_approvals", |d| d.custom_approvals = checked))
            })
        />
        {limit_mode_choice(state, "payment_limits", "Payment Limits", |d| d.payment_limits, |d, m| d.payment_limits = m)}
        {limit_mode_choice(state, "access_schedule", "Access Schedule", |d| d.access_schedule, |d, m| d.access_schedule = m)}
        <SelectField
            label="Templates & Payments Entitlement"
            value=Signal::derive(move || state.with(|s| s.edit.draft().entitlement.code().to_string()))
            options=entitlements
            on_change=Callback::new(move |v: String| {
                if let Some(entitlement) = Entitlement::from_code(&v) {
                    state.update(|s| s.edit.update_draft("entitlement", |d| d.entitlement = entitlement))
                }
            })
        />
    }
}
