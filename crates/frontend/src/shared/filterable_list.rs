use super::list_utils::{paginate, total_pages, Filter, SortDirection, SortSpec};
use contracts::domain::common::Record;

/// Список записей с фильтром, сортировкой и постраничным выводом
///
/// Хранит полную коллекцию; отфильтрованное и отсортированное представление вычисляется
/// при каждом запросе. Страницы нумеруются с нуля.
#[derive(Debug, Clone)]
pub struct FilterableList<T> {
    items: Vec<T>,
    filter: Filter,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl<T: Record> FilterableList<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            filter: Filter::default(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Начальная сортировка (builder)
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    // ========================================================================
    // Коллекция
    // ========================================================================

    /// Полная коллекция без фильтра, в порядке добавления
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Добавить запись; запись с тем же id заменяется на месте
    pub fn insert(&mut self, record: T) {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.items.push(record),
        }
    }

    /// Удалить запись по id
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        self.clamp_page();
        Some(removed)
    }

    /// Изменить запись по id; `false`, если записи нет
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                self.clamp_page();
                true
            }
            None => false,
        }
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_page();
    }

    // ========================================================================
    // Фильтр и сортировка
    // ========================================================================

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Новый фильтр всегда возвращает на первую страницу
    pub fn set_filter(&mut self, filter: Filter) {
        log::debug!("{}: filter changed {:?}", T::list_name(), filter);
        self.filter = filter;
        self.page = 0;
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort = Some(SortSpec::new(field, direction));
    }

    /// Клик по заголовку: то же поле меняет направление, новое поле сортируется по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        let direction = match &self.sort {
            Some(spec) if spec.field == field => spec.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        log::debug!("{}: sort by {} {:?}", T::list_name(), field, direction);
        self.sort = Some(SortSpec::new(field, direction));
    }

    /// Отфильтрованные и отсортированные записи (без пагинации)
    pub fn view(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(*item))
            .collect();
        if let Some(spec) = &self.sort {
            rows.sort_by(|a, b| spec.compare(*a, *b));
        }
        rows
    }

    /// Количество записей, прошедших фильтр
    pub fn total_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.filter.matches(*item))
            .count()
    }

    // ========================================================================
    // Пагинация
    // ========================================================================

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page_size)
    }

    /// Номер страницы не ограничивается: страница за концом списка просто пуста
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Произвольная страница текущего представления
    pub fn get_page(&self, page: usize, page_size: usize) -> Vec<T> {
        let rows = self.view();
        paginate(&rows, page, page_size)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Текущая страница
    pub fn current_page(&self) -> Vec<T> {
        self.get_page(self.page, self.page_size)
    }

    pub fn current_page_ids(&self) -> Vec<String> {
        let rows = self.view();
        paginate(&rows, self.page, self.page_size)
            .into_iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    /// После изменения коллекции страница не может выходить за последнюю
    fn clamp_page(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::FieldPredicate;
    use contracts::domain::a002_recipient::Recipient;
    use contracts::domain::a003_template::Template;
    use contracts::enums::RecordStatus;
    use contracts::shared::mock_data::{mock_recipients, mock_templates};

    fn names<T: Record>(rows: &[T]) -> Vec<String> {
        rows.iter()
            .filter_map(|r| r.field_text("name"))
            .collect()
    }

    #[test]
    fn test_wildcard_name_and_exact_status() {
        let mut list = FilterableList::new(mock_recipients(), 10);
        list.set_filter(
            Filter::new()
                .with("name", FieldPredicate::Wildcard("*construction".into()))
                .with("status", FieldPredicate::Exact("active".into())),
        );
        assert_eq!(list.total_count(), 1);
        assert_eq!(names(&list.current_page()), vec!["ABC Construction Management"]);

        list.set_filter(
            Filter::new()
                .with("name", FieldPredicate::Wildcard("*construction".into()))
                .with("status", FieldPredicate::Exact("approved".into())),
        );
        assert_eq!(list.total_count(), 0);
        assert!(list.current_page().is_empty());
        assert_eq!(list.total_pages(), 1);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut list = FilterableList::new(mock_recipients(), 2);
        list.set_page(2);
        assert_eq!(list.current_page().len(), 1);
        list.set_filter(Filter::new().with("name", FieldPredicate::Contains("a".into())));
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_sort_toggle_by_header() {
        let mut list = FilterableList::new(mock_templates(), 10);
        list.toggle_sort("name");
        assert_eq!(
            names(&list.current_page()),
            vec!["ABC DEMO", "BD Review Template", "Monthly Vendor Payment", "Office Rent"]
        );
        list.toggle_sort("name");
        assert_eq!(
            names(&list.current_page()),
            vec!["Office Rent", "Monthly Vendor Payment", "BD Review Template", "ABC DEMO"]
        );
        list.toggle_sort("amount");
        assert_eq!(list.sort().map(|s| s.direction), Some(SortDirection::Ascending));
        let amounts: Vec<f64> = list.current_page().iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1000.0, 2500.0, 3200.0, 4750.5]);
    }

    #[test]
    fn test_page_partitions_view() {
        let list = FilterableList::new(mock_recipients(), 2);
        let mut seen = Vec::new();
        for page in 0..list.total_pages() {
            let rows = list.get_page(page, 2);
            assert!(rows.len() <= 2);
            seen.extend(rows.into_iter().map(|r| r.id));
        }
        let all: Vec<String> = list.view().iter().map(|r| r.id.clone()).collect();
        assert_eq!(seen, all);
        assert!(list.get_page(10, 2).is_empty());
    }

    #[test]
    fn test_remove_clamps_page() {
        let mut list = FilterableList::new(mock_recipients(), 2);
        list.set_page(2);
        assert_eq!(list.current_page_ids(), vec!["rec-005"]);
        assert!(list.remove("rec-005").is_some());
        assert_eq!(list.page(), 1);
        assert_eq!(list.current_page_ids(), vec!["rec-003", "rec-004"]);
        assert!(list.remove("rec-005").is_none());
    }

    #[test]
    fn test_update_can_drop_record_from_view() {
        let mut list = FilterableList::new(mock_templates(), 10);
        list.set_filter(Filter::new().with("status", FieldPredicate::Exact("approved".into())));
        assert_eq!(list.total_count(), 3);
        assert!(list.update("temp-002", |t: &mut Template| t.status = RecordStatus::Rejected));
        assert_eq!(list.total_count(), 2);
        assert!(!list.update("temp-999", |_| {}));
    }

    #[test]
    fn test_insert_appends_or_replaces() {
        let mut list = FilterableList::new(mock_recipients(), 10);
        let mut recipient: Recipient = list.items()[0].clone();
        recipient.name = "Renamed".into();
        list.insert(recipient);
        assert_eq!(list.len(), 5);
        assert_eq!(list.items()[0].name, "Renamed");

        let mut extra = list.items()[0].clone();
        extra.id = "rec-100".into();
        list.insert(extra);
        assert_eq!(list.len(), 6);
        assert!(list.contains("rec-100"));
    }

    #[test]
    fn test_replace_all_with_empty_collection() {
        let mut list = FilterableList::new(mock_recipients(), 2);
        list.set_page(2);
        list.replace_all(Vec::new());
        assert_eq!(list.page(), 0);
        assert_eq!(list.total_pages(), 1);
        assert!(list.current_page().is_empty());
    }

    #[test]
    fn test_huge_page_size_holds_everything_on_one_page() {
        let mut list = FilterableList::new(mock_recipients(), usize::MAX);
        assert_eq!(list.total_pages(), 1);
        assert_eq!(list.current_page().len(), 5);
        list.set_page(3);
        assert!(list.remove("rec-001").is_some());
        assert_eq!(list.page(), 0);
    }
}
