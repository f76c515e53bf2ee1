pub mod state;

use self::state::UsersState;
use crate::domain::a004_user::ui::ach_limit::AssignAchLimitModal;
use crate::domain::a004_user::ui::edit::EditUserModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use contracts::domain::a004_user::User;
use contracts::shared::mock_data::mock_users;
use leptos::prelude::*;

/// Страница "User Management"
#[component]
pub fn UsersPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let state = RwSignal::new(UsersState::new(mock_users(), config.lists.users_page_size));

    view! {
        <div class="page users">
            <div class="page__header">
                <h1 class="page__title">"User Management"</h1>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"User ID"</th>
                        <th class="table__header-cell">"Email"</th>
                        <th class="table__header-cell">"Role"</th>
                        <th class="table__header-cell">"ACH Limits"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.list.current_page())
                            .into_iter()
                            .map(|user| user_row(user, state))
                            .collect_view()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.list.page()))
                total_pages=Signal::derive(move || state.with(|s| s.list.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.list.total_count()))
                on_page_change=Callback::new(move |page| state.update(|s| s.list.set_page(page)))
            />

            <Show when=move || state.with(|s| s.edit.is_open())>
                <EditUserModal state=state />
            </Show>
            <Show when=move || state.with(|s| s.ach_limits.is_open())>
                <AssignAchLimitModal state=state />
            </Show>
        </div>
    }
}

fn user_row(user: User, state: RwSignal<UsersState>) -> impl IntoView {
    let edit_id = user.id.clone();
    let limits_id = user.id.clone();
    let limits = if user.ach_limits.approvals_per_day == 0 {
        "Not assigned".to_string()
    } else {
        format!(
            "{} / day, {:.2} per payment",
            user.ach_limits.approvals_per_day, user.ach_limits.transaction
        )
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">{user.display_name()}</td>
            <td class="table__cell">{user.user_id.clone()}</td>
            <td class="table__cell">{user.email.clone()}</td>
            <td class="table__cell">{user.role.clone()}</td>
            <td class="table__cell">{limits}</td>
            <td class="table__cell"><StatusBadge status=user.status /></td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="Edit User"
                    on:click=move |_| {
                        state.update(|s| {
                            s.open_edit(&edit_id);
                        })
                    }
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        state.update(|s| {
                            s.open_ach_limits(&limits_id);
                        })
                    }
                >
                    "Assign ACH Limit"
                </button>
            </td>
        </tr>
    }
}
