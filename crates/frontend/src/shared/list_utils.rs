/// Универсальные утилиты для работы со списками (поиск, сортировка, пагинация)
use contracts::domain::common::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// Поиск
// ============================================================================

/// Проверка шаблона с `*` (без учёта регистра)
///
/// Шаблон делится по `*`, каждый непустой фрагмент должен встречаться в строке как подстрока,
/// в любом порядке. Привязки к началу или концу строки нет: `"abc*"` совпадает с любой строкой,
/// содержащей `"abc"`. Шаблон без `*` проверяется как обычная подстрока.
///
/// # Примеры
/// ```
/// use frontend::shared::list_utils::wildcard_matches;
/// assert!(wildcard_matches("*construction", "ABC Construction Management"));
/// assert!(!wildcard_matches("*construction", "Acme Supplies"));
/// ```
pub fn wildcard_matches(pattern: &str, target: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let target = target.to_lowercase();

    if pattern.contains('*') {
        pattern
            .split('*')
            .filter(|part| !part.is_empty())
            .all(|part| target.contains(part))
    } else {
        target.contains(&pattern)
    }
}

/// Предикат фильтра для одного поля записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldPredicate {
    /// Точное совпадение без учёта регистра
    Exact(String),
    /// Подстрока без учёта регистра
    Contains(String),
    /// Шаблон с `*`, см. [`wildcard_matches`]
    Wildcard(String),
    /// Диапазон значений (границы включительно)
    Range {
        min: Option<FieldValue>,
        max: Option<FieldValue>,
    },
}

impl FieldPredicate {
    /// Пустой предикат ничего не отсекает
    pub fn is_blank(&self) -> bool {
        match self {
            FieldPredicate::Exact(s) | FieldPredicate::Contains(s) | FieldPredicate::Wildcard(s) => {
                s.trim().is_empty()
            }
            FieldPredicate::Range { min, max } => min.is_none() && max.is_none(),
        }
    }

    /// Проверка значения поля. Отсутствующее поле считается пустой строкой.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        if self.is_blank() {
            return true;
        }
        let text = || value.map(FieldValue::as_text).unwrap_or_default();
        match self {
            FieldPredicate::Exact(expected) => text().to_lowercase() == expected.to_lowercase(),
            FieldPredicate::Contains(needle) => {
                text().to_lowercase().contains(&needle.to_lowercase())
            }
            FieldPredicate::Wildcard(pattern) => wildcard_matches(pattern, &text()),
            FieldPredicate::Range { min, max } => {
                let Some(value) = value else {
                    return false;
                };
                let above_min = min
                    .as_ref()
                    .map_or(true, |m| compare_values(value, m) != Some(Ordering::Less));
                let below_max = max
                    .as_ref()
                    .map_or(true, |m| compare_values(value, m) != Some(Ordering::Greater));
                above_min && below_max
            }
        }
    }
}

/// Значение выпадающего списка "All Status", "All Statuses", "All Payment Types" и т.п.
pub fn is_all_option(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value.is_empty() || value == "all" || value.starts_with("all ")
}

/// Точное совпадение со значением выпадающего списка; вариант "All ..." не фильтрует
pub fn option_predicate(value: &str) -> FieldPredicate {
    if is_all_option(value) {
        FieldPredicate::Exact(String::new())
    } else {
        FieldPredicate::Exact(value.trim().to_string())
    }
}

/// Один предикат сразу для нескольких полей: достаточно совпадения в любом из них
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnyFieldPredicate {
    pub fields: Vec<String>,
    pub predicate: FieldPredicate,
}

impl AnyFieldPredicate {
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.fields
            .iter()
            .any(|field| self.predicate.matches(record.field_value(field).as_ref()))
    }
}

/// Фильтр списка: имя поля -> предикат. Запись проходит, если выполнены все предикаты.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    predicates: BTreeMap<String, FieldPredicate>,
    #[serde(default)]
    any_field: Option<AnyFieldPredicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить предикат (builder)
    pub fn with(mut self, field: impl Into<String>, predicate: FieldPredicate) -> Self {
        self.set(field, predicate);
        self
    }

    /// Установить предикат для поля, пустые предикаты не сохраняются
    pub fn set(&mut self, field: impl Into<String>, predicate: FieldPredicate) {
        let field = field.into();
        if predicate.is_blank() {
            self.predicates.remove(&field);
        } else {
            self.predicates.insert(field, predicate);
        }
    }

    /// Поиск по нескольким полям сразу (builder); пустой предикат снимает такой поиск
    pub fn with_any(mut self, fields: &[&str], predicate: FieldPredicate) -> Self {
        self.any_field = (!predicate.is_blank()).then(|| AnyFieldPredicate {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            predicate,
        });
        self
    }

    pub fn remove(&mut self, field: &str) {
        self.predicates.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&FieldPredicate> {
        self.predicates.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.any_field.is_none()
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.predicates
            .iter()
            .all(|(field, predicate)| predicate.matches(record.field_value(field).as_ref()))
            && self.any_field.as_ref().map_or(true, |any| any.matches(record))
    }
}

/// Фильтрует список по фильтру
pub fn filter_list<T: Record>(items: Vec<T>, filter: &Filter) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    items.into_iter().filter(|item| filter.matches(item)).collect()
}

// ============================================================================
// Сортировка
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Активная сортировка списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        let cmp = compare_by_field(a, b, &self.field);
        if self.direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    }
}

/// Сравнение двух значений одного типа: строки без учёта регистра, числа численно.
/// Для разных типов и флагов порядок не определён (`None`).
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => Some(
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(y)),
        ),
        (FieldValue::Number(x), FieldValue::Number(y)) => x.partial_cmp(y),
        _ => None,
    }
}

/// Сравнивает две записи по указанному полю; неподдерживаемые комбинации считаются равными
pub fn compare_by_field<T: Record>(a: &T, b: &T, field: &str) -> Ordering {
    match (a.field_value(field), b.field_value(field)) {
        (Some(x), Some(y)) => compare_values(&x, &y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Сортирует список по указанному полю (стабильная сортировка)
pub fn sort_list<T: Record>(items: &mut [T], field: &str, direction: SortDirection) {
    let spec = SortSpec::new(field, direction);
    items.sort_by(|a, b| spec.compare(a, b));
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => {
            if spec.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

// ============================================================================
// Пагинация
// ============================================================================

/// Количество страниц (минимум одна)
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Срез страницы (страницы нумеруются с нуля); страница за пределами списка пуста
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::mock_data::{mock_recipients, mock_templates};

    #[test]
    fn test_wildcard_fragments_in_any_order() {
        assert!(wildcard_matches("a*b", "b then a"));
        assert!(wildcard_matches("a*b", "ab"));
        assert!(wildcard_matches("a*b", "XXBXXAXX"));
        assert!(!wildcard_matches("a*b", "only a here"));
        // a single "a" does not satisfy a pattern that also needs "b"
        assert!(!wildcard_matches("a*b", "a"));
    }

    #[test]
    fn test_wildcard_has_no_anchoring() {
        assert!(wildcard_matches("abc*", "ABC DEMO"));
        assert!(wildcard_matches("abc*", "the abc"));
        assert!(wildcard_matches("*construction", "ABC Construction Management"));
        assert!(!wildcard_matches("*construction", "Acme Supplies"));
    }

    #[test]
    fn test_wildcard_empty_pattern_matches_everything() {
        assert!(wildcard_matches("", "anything"));
        assert!(wildcard_matches("*", "anything"));
        assert!(wildcard_matches("**", ""));
    }

    #[test]
    fn test_predicates() {
        let text = FieldValue::Text("Approved".into());
        assert!(FieldPredicate::Exact("approved".into()).matches(Some(&text)));
        assert!(!FieldPredicate::Exact("approve".into()).matches(Some(&text)));
        assert!(FieldPredicate::Contains("PROV".into()).matches(Some(&text)));
        assert!(FieldPredicate::Exact("".into()).matches(None));
        assert!(!FieldPredicate::Contains("x".into()).matches(None));

        let range = FieldPredicate::Range {
            min: Some(FieldValue::Number(1000.0)),
            max: Some(FieldValue::Number(3000.0)),
        };
        assert!(range.matches(Some(&FieldValue::Number(1000.0))));
        assert!(range.matches(Some(&FieldValue::Number(2500.0))));
        assert!(!range.matches(Some(&FieldValue::Number(4750.5))));
        assert!(!range.matches(None));
    }

    #[test]
    fn test_all_options_do_not_filter() {
        assert!(is_all_option("All Status"));
        assert!(is_all_option("All Statuses"));
        assert!(is_all_option("all payment types"));
        assert!(!is_all_option("Approved"));
        assert!(option_predicate("All Statuses").is_blank());
        assert_eq!(
            option_predicate(" Approved "),
            FieldPredicate::Exact("Approved".into())
        );
    }

    #[test]
    fn test_filter_ignores_blank_predicates() {
        let filter = Filter::new().with("name", FieldPredicate::Wildcard("  ".into()));
        assert!(filter.is_empty());
        assert_eq!(filter_list(mock_recipients(), &filter).len(), 5);
    }

    #[test]
    fn test_filter_combines_predicates() {
        let filter = Filter::new()
            .with("name", FieldPredicate::Wildcard("*e*".into()))
            .with("payment_type", FieldPredicate::Exact("ppd".into()));
        let names: Vec<String> = filter_list(mock_templates(), &filter)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["ABC DEMO", "BD Review Template", "Office Rent"]);
    }

    #[test]
    fn test_any_field_search() {
        let fields = ["name", "recipient_id", "account_number"];
        let ids = |needle: &str| -> Vec<String> {
            let filter = Filter::new().with_any(&fields, FieldPredicate::Contains(needle.into()));
            filter_list(mock_recipients(), &filter)
                .into_iter()
                .map(|r| r.id)
                .collect()
        };
        // bank id 987654321 of rec-001 is not searched
        assert_eq!(ids("9876"), vec!["rec-002"]);
        assert_eq!(ids("ACME"), vec!["rec-003"]);
        assert_eq!(ids("rec-00").len(), 5);
        assert!(Filter::new().with_any(&fields, FieldPredicate::Contains(" ".into())).is_empty());
    }

    #[test]
    fn test_sort_text_and_numbers() {
        let mut templates = mock_templates();
        sort_list(&mut templates, "name", SortDirection::Ascending);
        let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ABC DEMO", "BD Review Template", "Monthly Vendor Payment", "Office Rent"]
        );

        sort_list(&mut templates, "amount", SortDirection::Descending);
        let amounts: Vec<f64> = templates.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![4750.5, 3200.0, 2500.0, 1000.0]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut recipients = mock_recipients();
        sort_list(&mut recipients, "name", SortDirection::Ascending);
        let names: Vec<&str> = recipients.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ABC Construction Management",
                "Acme Supplies",
                "Chemical Strategies",
                "dfg",
                "Property Management LLC"
            ]
        );
    }

    #[test]
    fn test_sort_unsupported_field_keeps_order() {
        let mut recipients = mock_recipients();
        let before: Vec<String> = recipients.iter().map(|r| r.id.clone()).collect();
        sort_list(&mut recipients, "ach_enabled", SortDirection::Descending);
        sort_list(&mut recipients, "no_such_field", SortDirection::Ascending);
        let after: Vec<String> = recipients.iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::new("name", SortDirection::Descending);
        assert_eq!(get_sort_indicator(Some(&spec), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(&spec), "amount"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 0, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, 5), vec![11, 12]);
        assert!(paginate(&items, 3, 5).is_empty());
        assert!(paginate(&items, usize::MAX, 5).is_empty());
        assert!(paginate(&items, 0, 0).is_empty());
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(0, 5), 1);
    }

    #[test]
    fn test_total_pages_with_huge_page_size() {
        assert_eq!(total_pages(4, usize::MAX), 1);
        assert_eq!(total_pages(usize::MAX, usize::MAX), 1);
        assert_eq!(total_pages(usize::MAX, 1), usize::MAX);
    }
}
