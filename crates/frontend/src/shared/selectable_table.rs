use super::filterable_list::FilterableList;
use super::list_utils::{Filter, SortDirection};
use contracts::domain::common::Record;
use contracts::enums::RecordStatus;
use std::collections::HashSet;

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Таблица с выбором строк поверх [`FilterableList`]
///
/// Выбор хранится как множество id и переживает смену фильтра, сортировки и страницы:
/// строка, скрытая фильтром, остаётся выбранной. Из выбора удаляются только id записей,
/// которых больше нет в коллекции.
#[derive(Debug, Clone)]
pub struct SelectableTable<T> {
    list: FilterableList<T>,
    selected: HashSet<String>,
}

impl<T: Record> SelectableTable<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self::from_list(FilterableList::new(items, page_size))
    }

    pub fn from_list(list: FilterableList<T>) -> Self {
        Self {
            list,
            selected: HashSet::new(),
        }
    }

    pub fn list(&self) -> &FilterableList<T> {
        &self.list
    }

    // ========================================================================
    // Выбор строк
    // ========================================================================

    pub fn selection(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Выбранные id в порядке коллекции
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected_records()
            .into_iter()
            .map(|record| record.id().to_string())
            .collect()
    }

    /// Выбранные записи в порядке коллекции
    pub fn selected_records(&self) -> Vec<&T> {
        self.list
            .items()
            .iter()
            .filter(|record| self.selected.contains(record.id()))
            .collect()
    }

    /// Переключить строку; id вне коллекции игнорируется. Возвращает новое состояние строки.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        if !self.list.contains(id) {
            log::warn!("{}: toggle of unknown row {}", T::list_name(), id);
            return false;
        }
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Чекбокс в заголовке: действует только на строки текущей страницы.
    /// Если выбраны все видимые строки, они снимаются, иначе выбираются все видимые.
    pub fn toggle_select_all_visible(&mut self) {
        let visible = self.list.current_page_ids();
        if visible.is_empty() {
            return;
        }
        let all_selected = visible.iter().all(|id| self.selected.contains(id));
        if all_selected {
            for id in &visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible);
        }
    }

    /// Состояние чекбокса в заголовке относительно текущей страницы
    pub fn header_state(&self) -> CheckboxState {
        let visible = self.list.current_page_ids();
        let selected_count = visible
            .iter()
            .filter(|id| self.selected.contains(*id))
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == visible.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ========================================================================
    // Операции списка (с очисткой выбора от удалённых записей)
    // ========================================================================

    pub fn set_filter(&mut self, filter: Filter) {
        self.list.set_filter(filter);
        self.prune();
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.list.set_sort(field, direction);
        self.prune();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.list.toggle_sort(field);
        self.prune();
    }

    pub fn set_page(&mut self, page: usize) {
        self.list.set_page(page);
        self.prune();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.list.set_page_size(page_size);
        self.prune();
    }

    pub fn insert(&mut self, record: T) {
        self.list.insert(record);
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.selected.remove(id);
        self.list.remove(id)
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.list.replace_all(items);
        self.prune();
    }

    /// Установить статус перечисленным записям. Возвращает число изменённых записей.
    pub fn set_status(&mut self, ids: &[String], status: RecordStatus) -> usize {
        ids.iter()
            .filter(|id| self.list.update(id, |record| record.set_status(status)))
            .count()
    }

    fn prune(&mut self) {
        let list = &self.list;
        self.selected.retain(|id| list.contains(id));
    }
}
