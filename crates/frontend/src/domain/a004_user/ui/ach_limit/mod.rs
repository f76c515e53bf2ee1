pub mod model;

use self::model::AchLimitDraft;
use crate::domain::a004_user::ui::list::state::UsersState;
use crate::shared::components::ui::TextField;
use crate::shared::components::wizard_nav::{WizardNav, WizardProgress};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::shared::wizard::WizardForm;
use leptos::prelude::*;

fn limit_field(
    state: RwSignal<UsersState>,
    field: &'static str,
    label: &'static str,
    get: fn(&AchLimitDraft) -> String,
    set: fn(&mut AchLimitDraft, String),
) -> impl IntoView {
    view! {
        <TextField
            label=label
            required=true
            value=Signal::derive(move || state.with(|s| get(s.ach_limits.draft())))
            error=Signal::derive(move || state.with(|s| s.ach_limits.errors().message(field)))
            on_input=Callback::new(move |v: String| {
                state.update(|s| s.ach_limits.update_draft(field, |d| set(d, v)))
            })
        />
    }
}

/// Мастер "Assign ACH Limit": 7 шагов-подсказок и форма лимитов на 8-м
#[component]
pub fn AssignAchLimitModal(state: RwSignal<UsersState>) -> impl IntoView {
    let toasts = use_toasts();
    let step = Signal::derive(move || state.with(|s| s.ach_limits.step().unwrap_or(1)));

    let on_next = Callback::new(move |_| {
        state.update(|s| {
            let _ = s.ach_limits.next();
        })
    });
    let on_back = Callback::new(move |_| {
        state.update(|s| {
            let _ = s.ach_limits.back();
        })
    });
    let on_submit = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.submit_ach_limits(&toasts) {
                log::debug!("assign ACH limit: {}", e);
            }
        })
    });
    let on_cancel = Callback::new(move |_| state.update(|s| s.ach_limits.cancel()));

    view! {
        <Modal title=Signal::derive(|| "Assign ACH Limit".to_string()) on_close=on_cancel>
            <WizardProgress step=step step_count=AchLimitDraft::STEPS />
            <h3 class="wizard__step-title">{move || AchLimitDraft::step_title(step.get())}</h3>
            {move || match AchLimitDraft::guide(step.get()) {
                Some(text) => view! { <p class="wizard__guide">{text}</p> }.into_any(),
                None => view! {
                    <div class="wizard__form">
                        {limit_field(state, "approvals_per_day", "No. of approvals per day", |d| d.approvals_per_day.clone(), |d, v| d.approvals_per_day = v)}
                        {limit_field(state, "payment_limit", "Payment limit", |d| d.payment_limit.clone(), |d, v| d.payment_limit = v)}
                        {limit_field(state, "daily_cumulation", "Daily Cumulation", |d| d.daily_cumulation.clone(), |d, v| d.daily_cumulation = v)}
                    </div>
                }
                .into_any(),
            }}
            <WizardNav
                step=step
                step_count=AchLimitDraft::STEPS
                on_back=on_back
                on_next=on_next
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </Modal>
    }
}
