use contracts::enums::RecordStatus;
use leptos::prelude::*;

/// Бейдж статуса записи; цвет определяется статусом
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<RecordStatus>,
) -> impl IntoView {
    let class = move || format!("badge badge--{}", status.get().badge_variant());

    view! {
        <span class=class>{move || status.get().display_name()}</span>
    }
}
