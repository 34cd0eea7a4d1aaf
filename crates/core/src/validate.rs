//! The `Validate` trait and a small collector for per-field checks.
//!
//! Deserialization establishes the *shape* of a record; `Validate` then checks
//! the declared constraints and reports every violation, not just the first.

use crate::error::{FieldError, ValidationErrors, Violation};

/// A record with per-field constraints.
pub trait Validate {
    /// Check all constraints, collecting every violation.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (index, item) in self.iter().enumerate() {
            if let Err(e) = item.validate() {
                errors.merge_nested(&index.to_string(), e);
            }
        }
        errors.into_result()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// Accumulates field checks for one record.
///
/// ```ignore
/// Checker::new()
///     .check("price", validators::greater_than(self.price, 0.0))
///     .nested("images", &self.images)
///     .finish()
/// ```
#[derive(Debug, Default)]
pub struct Checker {
    errors: ValidationErrors,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` against `field` if it failed.
    pub fn check(mut self, field: &str, result: Result<(), Violation>) -> Self {
        if let Err(v) = result {
            self.errors.push(FieldError::new(field, v.kind, v.message));
        }
        self
    }

    /// Validate a nested record, prefixing its error locations with `field`.
    pub fn nested<T: Validate + ?Sized>(mut self, field: &str, value: &T) -> Self {
        if let Err(e) = value.validate() {
            self.errors.merge_nested(field, e);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validators;

    struct Leaf {
        amount: f64,
    }

    impl Validate for Leaf {
        fn validate(&self) -> Result<(), ValidationErrors> {
            Checker::new()
                .check("amount", validators::greater_than(self.amount, 0.0))
                .finish()
        }
    }

    struct Branch {
        label: String,
        leaves: Vec<Leaf>,
        spare: Option<Leaf>,
    }

    impl Validate for Branch {
        fn validate(&self) -> Result<(), ValidationErrors> {
            Checker::new()
                .check("label", validators::max_chars(&self.label, 3))
                .nested("leaves", &self.leaves)
                .nested("spare", &self.spare)
                .finish()
        }
    }

    #[test]
    fn collects_every_violation_with_paths() {
        let branch = Branch {
            label: "toolong".to_string(),
            leaves: vec![Leaf { amount: 1.0 }, Leaf { amount: -1.0 }],
            spare: Some(Leaf { amount: 0.0 }),
        };

        let errors = branch.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has("label"));
        assert!(errors.has("leaves.1.amount"));
        assert!(errors.has("spare.amount"));
        assert_eq!(errors.errors()[0].kind, ErrorKind::StringTooLong);
    }

    #[test]
    fn absent_optional_is_valid() {
        let branch = Branch {
            label: "ok".to_string(),
            leaves: Vec::new(),
            spare: None,
        };
        assert!(branch.validate().is_ok());
    }
}
