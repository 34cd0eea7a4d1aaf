//! `storefront-core` — validation building blocks shared by the domain crates.
//!
//! This crate is pure: no HTTP, no IO beyond the OS random source used by
//! [`token::random_hex`].

pub mod error;
pub mod token;
pub mod validate;
pub mod validators;

pub use error::{ErrorKind, FieldError, ValidationErrors, Violation};
pub use validate::{Checker, Validate};
