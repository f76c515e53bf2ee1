use crate::shared::filterable_list::FilterableList;
use crate::shared::list_utils::{option_predicate, FieldPredicate, Filter, SortDirection};
use crate::shared::notify::Notifier;
use contracts::domain::a003_template::Template;

pub const ALL_PAYMENT_TYPES: &str = "All Payment Types";
pub const ALL_STATUSES: &str = "All Statuses";

/// Колонки, по которым можно сортировать шаблоны
pub const SORTABLE_FIELDS: &[(&str, &str)] = &[
    ("name", "Template Name"),
    ("status", "Status"),
    ("amount", "Amount"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSearch {
    pub name: String,
    pub payment_type: String,
    pub status: String,
}

impl Default for TemplateSearch {
    fn default() -> Self {
        Self {
            name: String::new(),
            payment_type: ALL_PAYMENT_TYPES.to_string(),
            status: ALL_STATUSES.to_string(),
        }
    }
}

impl TemplateSearch {
    pub fn to_filter(&self) -> Filter {
        Filter::new()
            .with("name", FieldPredicate::Wildcard(self.name.trim().to_string()))
            .with("payment_type", option_predicate(&self.payment_type))
            .with("status", option_predicate(&self.status))
    }
}

/// Состояние страницы "Templates"
#[derive(Debug, Clone)]
pub struct TemplateListState {
    pub list: FilterableList<Template>,
}

impl TemplateListState {
    /// Список изначально отсортирован по имени
    pub fn new(templates: Vec<Template>, page_size: usize) -> Self {
        Self {
            list: FilterableList::new(templates, page_size).sorted_by("name", SortDirection::Ascending),
        }
    }

    pub fn search(&mut self, search: &TemplateSearch, notifier: &impl Notifier) -> usize {
        self.list.set_filter(search.to_filter());
        let found = self.list.total_count();
        notifier.notify(
            "Search Results",
            &format!("Found {} templates matching your criteria.", found),
        );
        found
    }

    pub fn sort_by(&mut self, field: &str) {
        if SORTABLE_FIELDS.iter().any(|(f, _)| *f == field) {
            self.list.toggle_sort(field);
        }
    }

    /// Новый шаблон из формы PPD; сортировка и фильтр сохраняются
    pub fn add(&mut self, template: Template) {
        log::debug!("template {} added to list", template.id);
        self.list.insert(template);
    }

    pub fn delete(&mut self, id: &str, notifier: &impl Notifier) -> bool {
        if self.list.remove(id).is_none() {
            return false;
        }
        notifier.notify(
            "Template Deleted",
            "The template has been successfully deleted.",
        );
        true
    }
}
