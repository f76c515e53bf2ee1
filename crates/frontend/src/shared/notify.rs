/// Уведомления пользователя (toast в браузере)
///
/// Операции страниц получают уведомитель параметром и не знают, как он показывает сообщения.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

/// Уведомитель по умолчанию: пишет в лог
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str) {
        log::info!("{}: {}", title, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, title: &str, message: &str) {
        (**self).notify(title, message);
    }
}

/// Запоминает уведомления для проверки в тестах
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: std::cell::RefCell<Vec<(String, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.messages.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announce(notifier: &impl Notifier) {
        notifier.notify("Success", "Saved.");
    }

    #[test]
    fn test_notifier_by_reference_forwards() {
        let recorder = RecordingNotifier::new();
        announce(&&recorder);
        announce(&LogNotifier);
        assert_eq!(
            recorder.messages(),
            vec![("Success".to_string(), "Saved.".to_string())]
        );
    }
}
