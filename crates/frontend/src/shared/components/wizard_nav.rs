use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// CSS-класс точки шага `n` при текущем шаге `step`
fn dot_class(step: usize, n: usize) -> &'static str {
    if step == n {
        "wizard__dot wizard__dot--active"
    } else if step > n {
        "wizard__dot wizard__dot--done"
    } else {
        "wizard__dot"
    }
}

/// Индикатор шагов мастера: "Step 2 of 3" и точки
#[component]
pub fn WizardProgress(
    #[prop(into)]
    step: Signal<usize>,
    step_count: usize,
) -> impl IntoView {
    view! {
        <div class="wizard__progress">
            <span class="wizard__progress-label">
                {move || format!("Step {} of {}", step.get(), step_count)}
            </span>
            <div class="wizard__progress-dots">
                {(1..=step_count)
                    .map(|n| {
                        view! { <span class=move || dot_class(step.get(), n)></span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Кнопки мастера: Cancel, Back, Next или Submit на последнем шаге
#[component]
pub fn WizardNav(
    #[prop(into)]
    step: Signal<usize>,
    step_count: usize,
    on_back: Callback<()>,
    on_next: Callback<()>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    /// Подпись кнопки последнего шага
    #[prop(optional, into)]
    submit_label: MaybeProp<String>,
) -> impl IntoView {
    let is_first = move || step.get() <= 1;
    let is_last = move || step.get() >= step_count;

    view! {
        <div class="modal-footer wizard__nav">
            <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Cancel"
            </Button>
            <Show when=move || !is_first()>
                <Button variant="secondary" on_click=Callback::new(move |_| on_back.run(()))>
                    "Back"
                </Button>
            </Show>
            <Show
                when=is_last
                fallback=move || view! {
                    <Button on_click=Callback::new(move |_| on_next.run(()))>"Next"</Button>
                }
            >
                <Button on_click=Callback::new(move |_| on_submit.run(()))>
                    {move || submit_label.get().unwrap_or_else(|| "Submit".to_string())}
                </Button>
            </Show>
        </div>
    }
}
