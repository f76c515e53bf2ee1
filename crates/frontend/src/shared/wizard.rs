//! Пошаговый мастер ввода (wizard) с черновиком формы и пошаговой валидацией

use contracts::shared::metadata::{ValidationError, ValidationRules};
use std::collections::BTreeMap;
use thiserror::Error;

/// Ошибки полей текущего шага: ключ поля -> ошибка
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    /// Текст ошибки для отображения под полем
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: &'static str, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Проверить значение по правилам и запомнить ошибку
    pub fn check(&mut self, field: &'static str, rules: ValidationRules, value: &str, label: &str) {
        if let Err(error) = rules.validate_string(value, label) {
            self.insert(field, error);
        }
    }
}

/// Черновик формы мастера
pub trait WizardForm: Clone + Default {
    /// Результат успешного завершения мастера
    type Output;

    /// Количество шагов (шаги нумеруются с 1)
    const STEPS: usize;

    /// Заголовок шага
    fn step_title(step: usize) -> &'static str;

    /// Валидация полей одного шага; пустой результат означает, что шаг заполнен верно
    fn validate_step(&self, step: usize) -> FieldErrors;

    /// Построение результата из проверенного черновика
    fn build(&self) -> Self::Output;
}

/// Ошибки переходов мастера
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("wizard is closed")]
    Closed,

    #[error("step {step} has {} invalid field(s)", .errors.len())]
    Invalid { step: usize, errors: FieldErrors },

    #[error("already on the first step")]
    AtFirstStep,

    #[error("already on the last step")]
    AtLastStep,

    #[error("submit is only available on step {last}, current step is {step}")]
    NotOnLastStep { step: usize, last: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    Closed,
    Step(usize),
}

/// Мастер ввода: линейные шаги 1..=N над черновиком `F`
///
/// Черновик никогда не применяется частично: результат строится только в `submit`,
/// после чего черновик сбрасывается.
#[derive(Debug, Clone, Default)]
pub struct Wizard<F: WizardForm> {
    state: WizardState,
    draft: F,
    errors: FieldErrors,
}

impl<F: WizardForm> Wizard<F> {
    pub fn new() -> Self {
        Self {
            state: WizardState::Closed,
            draft: F::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != WizardState::Closed
    }

    /// Текущий шаг или `None`, если мастер закрыт
    pub fn step(&self) -> Option<usize> {
        match self.state {
            WizardState::Step(n) => Some(n),
            WizardState::Closed => None,
        }
    }

    pub fn step_count(&self) -> usize {
        F::STEPS
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == Some(F::STEPS)
    }

    pub fn draft(&self) -> &F {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Открыть с пустым черновиком
    pub fn open(&mut self) {
        self.open_with(F::default());
    }

    /// Открыть с заполненным черновиком (например, редактирование существующей записи)
    pub fn open_with(&mut self, draft: F) {
        self.draft = draft;
        self.errors.clear();
        self.state = WizardState::Step(1);
        log::debug!("wizard opened, {} step(s)", F::STEPS);
    }

    /// Изменить черновик; ошибка изменённого поля снимается
    pub fn update_draft(&mut self, field: &str, f: impl FnOnce(&mut F)) {
        f(&mut self.draft);
        self.errors.remove(field);
    }

    pub fn next(&mut self) -> Result<usize, WizardError> {
        let step = self.step().ok_or(WizardError::Closed)?;
        if step >= F::STEPS {
            return Err(WizardError::AtLastStep);
        }
        self.validate(step)?;
        self.state = WizardState::Step(step + 1);
        log::debug!("wizard step {} -> {}", step, step + 1);
        Ok(step + 1)
    }

    pub fn back(&mut self) -> Result<usize, WizardError> {
        let step = self.step().ok_or(WizardError::Closed)?;
        if step <= 1 {
            return Err(WizardError::AtFirstStep);
        }
        self.errors.clear();
        self.state = WizardState::Step(step - 1);
        Ok(step - 1)
    }

    /// Завершить мастер на последнем шаге
    pub fn submit(&mut self) -> Result<F::Output, WizardError> {
        let step = self.step().ok_or(WizardError::Closed)?;
        if step != F::STEPS {
            return Err(WizardError::NotOnLastStep {
                step,
                last: F::STEPS,
            });
        }
        self.validate(step)?;
        let output = self.draft.build();
        self.reset();
        log::debug!("wizard submitted");
        Ok(output)
    }

    /// Закрыть без сохранения, черновик отбрасывается
    pub fn cancel(&mut self) {
        if self.is_open() {
            log::debug!("wizard cancelled at step {:?}", self.step());
        }
        self.reset();
    }

    fn validate(&mut self, step: usize) -> Result<(), WizardError> {
        let errors = self.draft.validate_step(step);
        if errors.is_empty() {
            self.errors.clear();
            Ok(())
        } else {
            self.errors = errors.clone();
            Err(WizardError::Invalid { step, errors })
        }
    }

    fn reset(&mut self) {
        self.draft = F::default();
        self.errors.clear();
        self.state = WizardState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NoteDraft {
        title: String,
        body: String,
    }

    impl WizardForm for NoteDraft {
        type Output = (String, String);
        const STEPS: usize = 3;

        fn step_title(step: usize) -> &'static str {
            match step {
                1 => "Title",
                2 => "Body",
                _ => "Review",
            }
        }

        fn validate_step(&self, step: usize) -> FieldErrors {
            let mut errors = FieldErrors::new();
            match step {
                1 => errors.check("title", ValidationRules::required(), &self.title, "Title"),
                2 => errors.check(
                    "body",
                    ValidationRules::required().max_length(10),
                    &self.body,
                    "Body",
                ),
                _ => {}
            }
            errors
        }

        fn build(&self) -> Self::Output {
            (self.title.clone(), self.body.clone())
        }
    }

    fn filled() -> NoteDraft {
        NoteDraft {
            title: "Hello".into(),
            body: "World".into(),
        }
    }

    #[test]
    fn test_closed_wizard_rejects_transitions() {
        let mut wizard: Wizard<NoteDraft> = Wizard::new();
        assert_eq!(wizard.next(), Err(WizardError::Closed));
        assert_eq!(wizard.back(), Err(WizardError::Closed));
        assert_eq!(wizard.submit(), Err(WizardError::Closed));
    }

    #[test]
    fn test_next_blocked_by_empty_required_field() {
        let mut wizard: Wizard<NoteDraft> = Wizard::new();
        wizard.open();
        let err = wizard.next().unwrap_err();
        assert!(matches!(err, WizardError::Invalid { step: 1, .. }));
        assert_eq!(wizard.step(), Some(1));
        assert_eq!(wizard.errors().message("title").as_deref(), Some("Title is required"));

        wizard.update_draft("title", |d| d.title = "Hi".into());
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(), Ok(2));
    }

    #[test]
    fn test_back_preserves_draft() {
        let mut wizard = Wizard::new();
        wizard.open_with(filled());
        assert_eq!(wizard.next(), Ok(2));
        assert_eq!(wizard.back(), Ok(1));
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
        assert_eq!(wizard.draft(), &filled());
    }

    #[test]
    fn test_back_skips_validation_of_invalid_draft() {
        let mut wizard = Wizard::new();
        wizard.open_with(filled());
        assert_eq!(wizard.next(), Ok(2));
        wizard.update_draft("body", |d| d.body = "far too long for the body".into());
        assert!(matches!(wizard.next(), Err(WizardError::Invalid { step: 2, .. })));

        assert_eq!(wizard.back(), Ok(1));
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.draft().body, "far too long for the body");
        assert_eq!(wizard.draft().title, "Hello");
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut wizard = Wizard::new();
        wizard.open_with(filled());
        assert_eq!(
            wizard.submit(),
            Err(WizardError::NotOnLastStep { step: 1, last: 3 })
        );
        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.next(), Err(WizardError::AtLastStep));
        assert!(wizard.is_last_step());

        let output = wizard.submit().unwrap();
        assert_eq!(output, ("Hello".to_string(), "World".to_string()));
        assert_eq!(wizard.state(), WizardState::Closed);
        assert_eq!(wizard.draft(), &NoteDraft::default());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut wizard = Wizard::new();
        wizard.open_with(filled());
        wizard.next().unwrap();
        wizard.cancel();
        assert!(!wizard.is_open());
        wizard.open();
        assert_eq!(wizard.draft(), &NoteDraft::default());
        assert_eq!(wizard.step(), Some(1));
    }

    #[test]
    fn test_invalid_error_reports_field_count() {
        let mut wizard = Wizard::new();
        wizard.open_with(NoteDraft {
            title: "T".into(),
            body: "far too long body".into(),
        });
        wizard.next().unwrap();
        let err = wizard.next().unwrap_err();
        assert_eq!(err.to_string(), "step 2 has 1 invalid field(s)");
        assert!(wizard.errors().contains("body"));
        assert_eq!(NoteDraft::step_title(2), "Body");
    }
}
