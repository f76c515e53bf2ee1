pub mod a001_payment;
pub mod a002_recipient;
pub mod a003_template;
pub mod a004_user;
