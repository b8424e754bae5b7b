//! Pages
//!
//! One component per route.

mod forgot_password_page;
mod login_page;
mod projects_page;
mod range_page;
mod reset_password_page;
mod verify_code_page;

pub use forgot_password_page::ForgotPasswordPage;
pub use login_page::LoginPage;
pub use projects_page::ProjectsPage;
pub use range_page::RangePage;
pub use reset_password_page::ResetPasswordPage;
pub use verify_code_page::VerifyCodePage;
