pub mod account_type;
pub mod frequency;
pub mod payment_type;
pub mod record_status;

pub use account_type::AccountType;
pub use frequency::Frequency;
pub use payment_type::PaymentType;
pub use record_status::RecordStatus;
