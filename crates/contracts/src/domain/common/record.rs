use super::FieldValue;
use crate::enums::RecordStatus;

/// Трейт для записей портала (платёж, получатель, шаблон, пользователь)
///
/// Записи живут только в памяти страницы: идентификатор уникален внутри коллекции,
/// статус берётся из закрытого перечисления [`RecordStatus`].
pub trait Record: Clone {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &str;

    /// Текущий статус
    fn status(&self) -> RecordStatus;

    /// Установить статус (используется массовыми действиями)
    fn set_status(&mut self, status: RecordStatus);

    /// Значение поля по имени, `None` для неизвестных полей
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    // ============================================================================
    // Метаданные класса записи
    // ============================================================================

    /// Имя коллекции (например, "payment")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Текстовое значение поля для поиска
    fn field_text(&self, field: &str) -> Option<String> {
        self.field_value(field).map(|v| v.as_text())
    }
}
