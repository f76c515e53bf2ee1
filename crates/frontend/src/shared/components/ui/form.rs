//! Поля форм мастеров: подпись, отметка обязательности, текст ошибки под полем

use leptos::prelude::*;

/// Текстовое поле
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Ошибка валидации (показывается под полем)
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    readonly: bool,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (по умолчанию), "email", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--error=has_error>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                readonly=readonly
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Выпадающий список: варианты (значение, подпись)
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Пустой первый вариант ("Select a Bank")
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || placeholder.get().map(|p| view! { <option value="">{p}</option> })}
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let for_selected = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == for_selected
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Группа переключателей
#[component]
pub fn RadioChoice(
    #[prop(into)]
    label: String,
    /// Имя группы (атрибут name)
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <span class="form__label">{label}</span>
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let for_checked = option_value.clone();
                        let for_change = option_value.clone();
                        view! {
                            <label class="form__radio-wrapper">
                                <input
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=option_value
                                    prop:checked=move || value.get() == for_checked
                                    on:change=move |_| on_change.run(for_change.clone())
                                />
                                <span class="form__radio-label">{option_label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Флажок с подписью
#[component]
pub fn CheckField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
