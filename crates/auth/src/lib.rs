//! `storefront-auth` — login form boundary.
//!
//! Credentials are parsed and echoed only; nothing here verifies them.

pub mod credentials;

pub use credentials::LoginForm;
