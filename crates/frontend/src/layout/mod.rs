pub mod global_context;
pub mod sidebar;

use crate::domain::a001_payment::ui::approval::PaymentApprovalPage;
use crate::domain::a001_payment::ui::entry::PaymentEntryPage;
use crate::domain::a001_payment::ui::quick_entry::QuickEntryPage;
use crate::domain::a002_recipient::ui::list::RecipientListPage;
use crate::domain::a003_template::ui::list::TemplateListPage;
use crate::domain::a004_user::ui::list::UsersPage;
use global_context::{AppGlobalContext, PortalPage};
use leptos::prelude::*;
use sidebar::Sidebar;

/// Оболочка приложения: верхняя панель, меню слева, активная страница в центре
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="button button--icon" title="Toggle menu" on:click=move |_| ctx.toggle_left()>
                    "☰"
                </button>
                <span class="top-header__title">{move || ctx.active.get().label()}</span>
            </header>
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {move || match ctx.active.get() {
                        PortalPage::PaymentApproval => view! { <PaymentApprovalPage /> }.into_any(),
                        PortalPage::CreatePayment => view! { <PaymentEntryPage /> }.into_any(),
                        PortalPage::QuickEntry => view! { <QuickEntryPage /> }.into_any(),
                        PortalPage::Recipients => view! { <RecipientListPage /> }.into_any(),
                        PortalPage::Templates => view! { <TemplateListPage /> }.into_any(),
                        PortalPage::Users => view! { <UsersPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
