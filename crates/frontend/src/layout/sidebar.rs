use crate::layout::global_context::{AppGlobalContext, PortalPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Боковое меню портала
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <nav class="sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="sidebar__brand">"ACH Payments"</div>
            <ul class="sidebar__menu">
                {PortalPage::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active.get() == page
                                on:click=move |_| ctx.open(page)
                            >
                                <span class="sidebar__icon">{icon(page.icon())}</span>
                                <span class="sidebar__label">{page.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
