use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_browser_config;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_browser_config();
    log::info!(
        "portal config: payment approval page size {}, toast {} ms",
        config.lists.payment_approval_page_size,
        config.notifications.toast_ms
    );

    provide_context(ToastService::new(config.notifications.toast_ms));
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
        <ToastHost />
    }
}
