//! Seed data loaded by pages at mount time
//!
//! There is no backend: every page starts from these collections and mutates its own copy.

use chrono::NaiveDate;

use crate::domain::a001_payment::Payment;
use crate::domain::a002_recipient::{Recipient, RecipientContact};
use crate::domain::a003_template::Template;
use crate::domain::a004_user::{AchLimits, Entitlement, LimitMode, User};
use crate::enums::{AccountType, Frequency, PaymentType, RecordStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Пользователь, от имени которого работает портал
pub const CURRENT_USER: &str = "Sanjna C";

/// Счета компании для исходящих платежей
pub const ORIGINATING_ACCOUNTS: &[&str] = &["Account 1", "Account 2"];

/// ACH Company ID отправителя
pub const ACH_COMPANY_IDS: &[&str] = &["7451266791 - E2ETesting7", "8862377892 - Test Company"];

/// Банки из списка "Preferred Bank List": (routing number, название)
pub const PREFERRED_BANKS: &[(&str, &str)] = &[
    ("221982389", "(AFCU) ACADEMIC FEDERAL CREDIT UNION"),
    ("226077862", "SEIU FEDERAL CREDIT UNION"),
    ("263078950", "FIRST NATIONAL BANK"),
];

/// Название банка по routing number, "Unknown Bank" для банков вне списка
pub fn bank_name_for(bank_id: &str) -> &'static str {
    PREFERRED_BANKS
        .iter()
        .find(|(id, _)| *id == bank_id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown Bank")
}

pub fn mock_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "pay-001".into(),
            template_id: Some("temp-001".into()),
            recipient_id: "rec-001".into(),
            amount: 1000.0,
            payment_type: PaymentType::Ppd,
            status: RecordStatus::Pending,
            effective_date: date(2023, 3, 1),
            frequency: Frequency::OneTime,
            created_at: date(2023, 2, 15),
            created_by: CURRENT_USER.into(),
            description: None,
        },
        Payment {
            id: "pay-002".into(),
            template_id: Some("temp-002".into()),
            recipient_id: "rec-002".into(),
            amount: 2500.0,
            payment_type: PaymentType::Ppd,
            status: RecordStatus::Approved,
            effective_date: date(2023, 3, 5),
            frequency: Frequency::Monthly,
            created_at: date(2023, 2, 10),
            created_by: CURRENT_USER.into(),
            description: None,
        },
        Payment {
            id: "pay-003".into(),
            template_id: None,
            recipient_id: "rec-003".into(),
            amount: 4750.50,
            payment_type: PaymentType::Ccd,
            status: RecordStatus::Complete,
            effective_date: date(2023, 2, 20),
            frequency: Frequency::OneTime,
            created_at: date(2023, 2, 5),
            created_by: CURRENT_USER.into(),
            description: None,
        },
        Payment {
            id: "pay-004".into(),
            template_id: Some("temp-004".into()),
            recipient_id: "rec-004".into(),
            amount: 3200.0,
            payment_type: PaymentType::Ppd,
            status: RecordStatus::Complete,
            effective_date: date(2023, 2, 25),
            frequency: Frequency::Monthly,
            created_at: date(2023, 2, 1),
            created_by: CURRENT_USER.into(),
            description: None,
        },
    ]
}

pub fn mock_recipients() -> Vec<Recipient> {
    let recipient = |id: &str,
                     name: &str,
                     status: RecordStatus,
                     account_number: &str,
                     bank_id: &str,
                     account_type: AccountType,
                     email: &str,
                     phone: &str| Recipient {
        id: id.into(),
        name: name.into(),
        status,
        recipient_id: id.to_uppercase(),
        bank_id: bank_id.into(),
        bank_name: bank_name_for(bank_id).into(),
        account_number: account_number.into(),
        account_type,
        payment_type: PaymentType::Ppd,
        ach_enabled: true,
        contact: Some(RecipientContact {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }),
    };

    vec![
        recipient(
            "rec-001",
            "Chemical Strategies",
            RecordStatus::Approved,
            "123456789",
            "987654321",
            AccountType::Checking,
            "accounting@chemicalstrategies.com",
            "(555) 123-4567",
        ),
        recipient(
            "rec-002",
            "dfg",
            RecordStatus::Approved,
            "987654321",
            "221982389",
            AccountType::Savings,
            "contact@dfg.com",
            "(555) 987-6543",
        ),
        recipient(
            "rec-003",
            "Acme Supplies",
            RecordStatus::Approved,
            "456123789",
            "789123456",
            AccountType::Checking,
            "ar@acmesupplies.com",
            "(555) 222-3333",
        ),
        recipient(
            "rec-004",
            "Property Management LLC",
            RecordStatus::Approved,
            "789456123",
            "263078950",
            AccountType::Checking,
            "billing@propertymanagement.com",
            "(555) 444-5555",
        ),
        recipient(
            "rec-005",
            "ABC Construction Management",
            RecordStatus::Active,
            "0922202201",
            "226077862",
            AccountType::Checking,
            "payables@abcconstruction.com",
            "(555) 666-7777",
        ),
    ]
}

pub fn mock_templates() -> Vec<Template> {
    let template = |id: &str,
                    name: &str,
                    description: &str,
                    status: RecordStatus,
                    company_account: &str,
                    payment_type: PaymentType,
                    recipient: &str,
                    amount: f64,
                    created_at: NaiveDate,
                    modified_at: NaiveDate| Template {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        status,
        company_account: company_account.into(),
        payment_type,
        recipient: recipient.into(),
        amount,
        created_at,
        modified_at,
        modified_by: CURRENT_USER.into(),
    };

    vec![
        template(
            "temp-001",
            "ABC DEMO",
            "DEMO",
            RecordStatus::Incomplete,
            "******4019",
            PaymentType::Ppd,
            "Scott Thompson",
            1000.0,
            date(2023, 1, 15),
            date(2023, 2, 1),
        ),
        template(
            "temp-002",
            "BD Review Template",
            "BD Review",
            RecordStatus::Approved,
            "******0361",
            PaymentType::Ppd,
            "Joe Wells",
            2500.0,
            date(2023, 1, 10),
            date(2023, 1, 25),
        ),
        template(
            "temp-003",
            "Monthly Vendor Payment",
            "Regular payment to main vendor",
            RecordStatus::Approved,
            "******1234",
            PaymentType::Ccd,
            "Acme Supplies",
            4750.50,
            date(2023, 2, 5),
            date(2023, 2, 15),
        ),
        template(
            "temp-004",
            "Office Rent",
            "Monthly office rent payment",
            RecordStatus::Approved,
            "******5678",
            PaymentType::Ppd,
            "Property Management LLC",
            3200.0,
            date(2023, 1, 20),
            date(2023, 2, 10),
        ),
    ]
}

pub fn mock_users() -> Vec<User> {
    let user = |id: &str,
                user_id: &str,
                first_name: &str,
                last_name: &str,
                entitlement: Entitlement,
                is_approver: bool,
                is_admin: bool,
                status: RecordStatus| User {
        id: id.into(),
        user_id: user_id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: String::new(),
        phone: String::new(),
        role: (if is_admin { "Administrator" } else { "User" }).to_string(),
        status,
        language: "English (United States)".into(),
        security_level: "system-admin".into(),
        entitlement,
        is_approver,
        is_admin,
        payment_limits: LimitMode::Unlimited,
        access_schedule: LimitMode::Unlimited,
        ach_limits: AchLimits {
            transaction: 10000.0,
            approvals_per_day: 25,
            daily_cumulative: 50000.0,
        },
    };

    vec![
        user(
            "user-001",
            "CindGoss5675",
            "test",
            "123",
            Entitlement::Full,
            true,
            true,
            RecordStatus::Active,
        ),
        user(
            "user-002",
            "JohnSmith123",
            "John",
            "Smith",
            Entitlement::Custom,
            false,
            false,
            RecordStatus::Pending,
        ),
        user(
            "user-003",
            "SarahJones456",
            "Sarah",
            "Jones",
            Entitlement::None,
            true,
            false,
            RecordStatus::Active,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Record;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        fn unique<T: Record>(items: &[T]) -> bool {
            let ids: HashSet<&str> = items.iter().map(|r| r.id()).collect();
            ids.len() == items.len()
        }
        assert!(unique(&mock_payments()));
        assert!(unique(&mock_recipients()));
        assert!(unique(&mock_templates()));
        assert!(unique(&mock_users()));
    }

    #[test]
    fn test_payment_statuses() {
        let statuses: Vec<RecordStatus> = mock_payments().iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                RecordStatus::Pending,
                RecordStatus::Approved,
                RecordStatus::Complete,
                RecordStatus::Complete
            ]
        );
    }

    #[test]
    fn test_bank_name_for() {
        assert_eq!(bank_name_for("226077862"), "SEIU FEDERAL CREDIT UNION");
        assert_eq!(bank_name_for("000000000"), "Unknown Bank");
    }
}
