use crate::shared::wizard::{FieldErrors, WizardForm};
use contracts::domain::a002_recipient::{Recipient, RecipientContact};
use contracts::enums::{AccountType, PaymentType};
use contracts::shared::metadata::ValidationRules;
use contracts::shared::mock_data::bank_name_for;

/// Вид получателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchRecipientKind {
    #[default]
    Individual,
    Business,
}

impl AchRecipientKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            AchRecipientKind::Individual => "Individual",
            AchRecipientKind::Business => "Business",
        }
    }
}

/// Способ указания банка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankSelection {
    /// Выбор из списка предпочтительных банков
    #[default]
    List,
    /// Ручной ввод routing number и названия банка
    Manual,
}

const NAME_RULES: ValidationRules = ValidationRules::required().max_length(100);
const RECIPIENT_ID_RULES: ValidationRules = ValidationRules::required().max_length(22);
const ACCOUNT_NUMBER_RULES: ValidationRules = ValidationRules::required().digits().max_length(17);
const BANK_ID_RULES: ValidationRules = ValidationRules::required().digits().max_length(9);
const CONTACT_EMAIL_RULES: ValidationRules = ValidationRules::none().email();

/// Черновик мастера "Create Master Recipient"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipientDraft {
    // Шаг 1
    pub ach_recipient_kind: AchRecipientKind,
    pub payment_type: PaymentType,

    // Шаг 2
    pub name: String,
    pub recipient_id: String,
    pub account_type: AccountType,
    pub account_number: String,
    pub bank_selection: BankSelection,
    pub bank_id: String,
    pub bank_name: String,

    // Шаг 3
    pub add_contact_info: bool,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl RecipientDraft {
    /// Выбор банка из списка заполняет и название банка
    pub fn select_bank(&mut self, bank_id: &str) {
        self.bank_id = bank_id.to_string();
        self.bank_name = bank_name_for(bank_id).to_string();
    }

    pub fn set_bank_selection(&mut self, selection: BankSelection) {
        if self.bank_selection != selection {
            self.bank_selection = selection;
            self.bank_id.clear();
            self.bank_name.clear();
        }
    }
}

impl WizardForm for RecipientDraft {
    type Output = Recipient;

    const STEPS: usize = 3;

    fn step_title(step: usize) -> &'static str {
        match step {
            1 => "Step 1: Use this page to add a new payment recipient",
            2 => "Step 2: Use this page to add payment information for each payment type",
            _ => "Step 3: Before submitting, use this page to review the payment recipient information",
        }
    }

    fn validate_step(&self, step: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            2 => {
                errors.check("name", NAME_RULES, &self.name, "Recipient Name");
                errors.check(
                    "recipient_id",
                    RECIPIENT_ID_RULES,
                    &self.recipient_id,
                    "ACH Recipient ID",
                );
                errors.check(
                    "account_number",
                    ACCOUNT_NUMBER_RULES,
                    &self.account_number,
                    "Account Number",
                );
                errors.check("bank_id", BANK_ID_RULES, &self.bank_id, "Bank ID");
                if self.bank_selection == BankSelection::Manual {
                    errors.check(
                        "bank_name",
                        ValidationRules::required(),
                        &self.bank_name,
                        "Bank Name",
                    );
                }
            }
            3 if self.add_contact_info => {
                errors.check(
                    "contact_name",
                    ValidationRules::required(),
                    &self.contact_name,
                    "Contact Name",
                );
                errors.check(
                    "contact_email",
                    CONTACT_EMAIL_RULES,
                    &self.contact_email,
                    "Contact Email",
                );
            }
            _ => {}
        }
        errors
    }

    fn build(&self) -> Recipient {
        let mut recipient = Recipient::new_for_insert(
            self.name.trim().to_string(),
            self.recipient_id.trim().to_string(),
            self.bank_id.trim().to_string(),
            self.bank_name.trim().to_string(),
            self.account_number.trim().to_string(),
            self.account_type,
            self.payment_type,
        );
        if self.add_contact_info {
            recipient.contact = Some(RecipientContact {
                name: self.contact_name.trim().to_string(),
                email: self.contact_email.trim().to_string(),
                phone: self.contact_phone.trim().to_string(),
            });
        }
        recipient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Wizard, WizardError};
    use contracts::enums::RecordStatus;

    fn fill_step_two(draft: &mut RecipientDraft) {
        draft.name = "Northwind Traders".into();
        draft.recipient_id = "NW-01".into();
        draft.account_number = "000123456".into();
        draft.select_bank("226077862");
    }

    #[test]
    fn test_empty_name_blocks_step_two() {
        let mut wizard: Wizard<RecipientDraft> = Wizard::new();
        wizard.open();
        assert_eq!(wizard.next(), Ok(2));
        wizard.update_draft("recipient_id", |d| d.recipient_id = "NW-01".into());
        wizard.update_draft("account_number", |d| d.account_number = "000123456".into());
        wizard.update_draft("bank_id", |d| d.select_bank("226077862"));

        let err = wizard.next().unwrap_err();
        assert!(matches!(err, WizardError::Invalid { step: 2, .. }));
        assert_eq!(wizard.step(), Some(2));
        assert_eq!(
            wizard.errors().message("name").as_deref(),
            Some("Recipient Name is required")
        );
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(wizard.draft().recipient_id, "NW-01");
    }

    #[test]
    fn test_bank_from_list_fills_name() {
        let mut draft = RecipientDraft::default();
        draft.select_bank("263078950");
        assert_eq!(draft.bank_name, "FIRST NATIONAL BANK");
        draft.select_bank("000000000");
        assert_eq!(draft.bank_name, "Unknown Bank");

        draft.set_bank_selection(BankSelection::Manual);
        assert!(draft.bank_id.is_empty());
        assert!(draft.bank_name.is_empty());
    }

    #[test]
    fn test_manual_bank_requires_name() {
        let mut draft = RecipientDraft::default();
        fill_step_two(&mut draft);
        draft.set_bank_selection(BankSelection::Manual);
        draft.bank_id = "123456789".into();
        let errors = draft.validate_step(2);
        assert!(errors.contains("bank_name"));
        assert!(!errors.contains("bank_id"));
    }

    #[test]
    fn test_account_number_digits_only() {
        let mut draft = RecipientDraft::default();
        fill_step_two(&mut draft);
        draft.account_number = "12-34".into();
        assert!(draft.validate_step(2).contains("account_number"));
    }

    #[test]
    fn test_contact_info_checked_only_when_enabled() {
        let mut draft = RecipientDraft::default();
        assert!(draft.validate_step(3).is_empty());
        draft.add_contact_info = true;
        draft.contact_email = "not-an-email".into();
        let errors = draft.validate_step(3);
        assert!(errors.contains("contact_name"));
        assert!(errors.contains("contact_email"));
    }

    #[test]
    fn test_build_creates_active_recipient() {
        let mut draft = RecipientDraft::default();
        fill_step_two(&mut draft);
        draft.payment_type = PaymentType::Ccd;
        draft.add_contact_info = true;
        draft.contact_name = "Ann".into();

        let recipient = draft.build();
        assert_eq!(recipient.status, RecordStatus::Active);
        assert!(recipient.ach_enabled);
        assert_eq!(recipient.bank_name, "SEIU FEDERAL CREDIT UNION");
        assert_eq!(recipient.payment_type, PaymentType::Ccd);
        assert_eq!(recipient.contact.map(|c| c.name), Some("Ann".to_string()));
        assert!(uuid::Uuid::parse_str(&recipient.id).is_ok());
    }
}
