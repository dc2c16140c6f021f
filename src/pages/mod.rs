//! Page components, one per route.

mod contacts;
mod forgot_password;
mod home;
mod login;
mod personal_account;
mod register;
mod report;
mod statistics;

pub use contacts::Contacts;
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use personal_account::PersonalAccount;
pub use register::Register;
pub use report::Report;
pub use statistics::Statistics;
