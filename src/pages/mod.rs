//! Top-level Views
//!
//! One component per `Route`.

mod dashboard;
mod landing;
mod sign_in;
mod sign_up;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
