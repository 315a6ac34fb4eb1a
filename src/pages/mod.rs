//! Pages
//!
//! One component per top-level page.

mod diagnostics;
mod home;
mod login;
mod not_found;
mod register;
mod spells;
mod submit;

pub use diagnostics::DiagnosticsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use spells::SpellsPage;
pub use submit::SubmitPage;
