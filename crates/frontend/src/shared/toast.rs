use super::notify::{LogNotifier, Notifier};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
}

/// Всплывающие уведомления, исчезают через `lifetime_ms`
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime_ms: u32,
}

impl ToastService {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            lifetime_ms,
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, title: &str, message: &str) {
        LogNotifier.notify(title, message);
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let service = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(service.lifetime_ms).await;
            service.dismiss(id);
        });
    }
}

/// Область показа уведомлений (правый нижний угол)
#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(service) = use_context::<ToastService>() else {
        log::warn!("ToastHost rendered without ToastService");
        return view! { <></> }.into_any();
    };

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" role="status">
                            <div class="toast__content">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                            <button class="button button--icon toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}

/// Уведомитель из контекста; без контекста сообщения уходят в лог
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().unwrap_or_else(|| {
        log::warn!("ToastService not found in context");
        ToastService::new(0)
    })
}
