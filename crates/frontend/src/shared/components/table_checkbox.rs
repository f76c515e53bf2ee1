use crate::shared::selectable_table::CheckboxState;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Чекбокс строки таблицы (`<td>`)
///
/// Клик по чекбоксу не вызывает клик по строке.
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    /// Вызывается при клике, состояние переключает владелец таблицы
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(())
            />
        </td>
    }
}

/// Чекбокс "выбрать все на странице" в заголовке таблицы (`<th>`)
///
/// Три состояния: unchecked, checked, indeterminate.
#[component]
pub fn TableHeaderCheckbox(
    state: Signal<CheckboxState>,
    on_toggle: Callback<()>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |_| on_toggle.run(())
            />
        </th>
    }
}
