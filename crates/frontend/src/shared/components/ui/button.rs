use leptos::prelude::*;

/// Кнопка портала
///
/// Варианты: "primary" (по умолчанию), "secondary", "outline", "danger".
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Всплывающая подсказка
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "outline" => "button--outline",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), class.get().unwrap_or_default())
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
