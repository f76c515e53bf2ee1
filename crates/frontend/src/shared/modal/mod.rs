use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::KeyboardEvent;

/// Модальное окно: закрывается по Escape, клику по подложке и кнопке "x"
#[component]
pub fn Modal(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Escape key; слушатель снимается вместе с окном
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);
    let listener: Function = closure.into_js_value().unchecked_into();
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", &listener);
    }
    let listener = StoredValue::new_local(listener);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            listener.with_value(|listener| {
                let _ = window.remove_event_listener_with_callback("keydown", listener);
            });
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Диалог подтверждения действия
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into)]
    confirm_label: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal__message">{move || message.get()}</p>
            <div class="modal-footer">
                <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(move |_| on_confirm.run(()))>
                    {move || confirm_label.get()}
                </Button>
            </div>
        </Modal>
    }
}
