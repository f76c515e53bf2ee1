use crate::domain::a004_user::ui::ach_limit::model::AchLimitDraft;
use crate::domain::a004_user::ui::edit::model::UserDraft;
use crate::shared::filterable_list::FilterableList;
use crate::shared::list_utils::SortDirection;
use crate::shared::notify::Notifier;
use crate::shared::wizard::{Wizard, WizardError};
use contracts::domain::a004_user::User;

/// Состояние страницы "User Management"
#[derive(Debug, Clone)]
pub struct UsersState {
    pub list: FilterableList<User>,
    pub edit: Wizard<UserDraft>,
    pub ach_limits: Wizard<AchLimitDraft>,
}

impl UsersState {
    pub fn new(users: Vec<User>, page_size: usize) -> Self {
        Self {
            list: FilterableList::new(users, page_size).sorted_by("name", SortDirection::Ascending),
            edit: Wizard::new(),
            ach_limits: Wizard::new(),
        }
    }

    /// Открыть мастер редактирования для пользователя; неизвестный id игнорируется
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(user) = self.list.get(id) else {
            log::warn!("edit requested for unknown user {}", id);
            return false;
        };
        let draft = UserDraft::from_user(user);
        self.edit.open_with(draft);
        true
    }

    pub fn submit_edit(&mut self, notifier: &impl Notifier) -> Result<(), WizardError> {
        let update = self.edit.submit()?;
        if self.list.update(&update.id, |user| update.apply(user)) {
            notifier.notify("Success", "User information has been updated successfully.");
        } else {
            log::warn!("user {} disappeared before save", update.id);
        }
        Ok(())
    }

    pub fn open_ach_limits(&mut self, id: &str) -> bool {
        let Some(user) = self.list.get(id) else {
            log::warn!("ACH limits requested for unknown user {}", id);
            return false;
        };
        let draft = AchLimitDraft::for_user(user);
        self.ach_limits.open_with(draft);
        true
    }

    pub fn submit_ach_limits(&mut self, notifier: &impl Notifier) -> Result<(), WizardError> {
        let (id, limits) = self.ach_limits.submit()?;
        if self.list.update(&id, |user| user.ach_limits = limits) {
            notifier.notify("Success", "ACH limits have been successfully updated.");
        } else {
            log::warn!("user {} disappeared before save", id);
        }
        Ok(())
    }
}
