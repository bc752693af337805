//! Authentication
//!
//! Credential storage and the sign-up / sign-in / sign-out façade.

mod service;
mod token;

pub use service::AuthService;
pub use token::*;
