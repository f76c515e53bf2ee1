use crate::domain::a002_recipient::ui::create::model::RecipientDraft;
use crate::shared::filterable_list::FilterableList;
use crate::shared::list_utils::{option_predicate, FieldPredicate, Filter};
use crate::shared::notify::Notifier;
use crate::shared::wizard::{Wizard, WizardError};
use contracts::domain::a002_recipient::Recipient;

pub const ALL_STATUS: &str = "All Status";

/// Поиск по мастер-списку получателей
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientSearch {
    /// Имя получателя, допускается `*`
    pub name: String,
    /// Код статуса или "All Status"
    pub status: String,
}

impl Default for RecipientSearch {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: ALL_STATUS.to_string(),
        }
    }
}

impl RecipientSearch {
    pub fn to_filter(&self) -> Filter {
        Filter::new()
            .with("name", FieldPredicate::Wildcard(self.name.trim().to_string()))
            .with("status", option_predicate(&self.status))
    }
}

/// Состояние страницы "Master Recipient List"
#[derive(Debug, Clone)]
pub struct RecipientListState {
    pub list: FilterableList<Recipient>,
    pub create: Wizard<RecipientDraft>,
}

impl RecipientListState {
    pub fn new(recipients: Vec<Recipient>, page_size: usize) -> Self {
        Self {
            list: FilterableList::new(recipients, page_size),
            create: Wizard::new(),
        }
    }

    /// Применить поиск; возвращает количество найденных получателей
    pub fn search(&mut self, search: &RecipientSearch, notifier: &impl Notifier) -> usize {
        self.list.set_filter(search.to_filter());
        let found = self.list.total_count();
        notifier.notify(
            "Search Results",
            &format!("Found {} recipients matching your criteria.", found),
        );
        found
    }

    pub fn delete(&mut self, id: &str, notifier: &impl Notifier) -> bool {
        if self.list.remove(id).is_none() {
            return false;
        }
        notifier.notify(
            "Recipient Deleted",
            "The recipient has been successfully deleted.",
        );
        true
    }

    pub fn open_create(&mut self) {
        self.create.open();
    }

    /// Завершить мастер создания; новый получатель добавляется в список
    pub fn submit_create(&mut self, notifier: &impl Notifier) -> Result<String, WizardError> {
        let recipient = self.create.submit()?;
        let id = recipient.id.clone();
        log::debug!("recipient {} created", id);
        self.list.insert(recipient);
        notifier.notify(
            "Recipient Created",
            "The recipient has been successfully created.",
        );
        Ok(id)
    }
}
