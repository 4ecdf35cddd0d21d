//! Declarative form validation.
//!
//! Schemas carry field-level rules via the `validator` derive;
//! [`validate_form`] runs them and flattens the outcome into a
//! field → message map suitable for display next to form inputs.

mod de;
mod forms;
mod procurement;

pub use forms::LoginForm;
pub use procurement::{
    ClientKind, ClientRegistration, Gender, PoultryPurchase, PurchaseLine, ZoneRegistration,
};

use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Flattened validation outcome: one message per offending field, keyed
/// by field path (`lines[0].gross_weight` for nested list entries).
pub type FieldErrors = BTreeMap<String, String>;

/// Run a schema's rules, flattening any failures.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    match form.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut flat = FieldErrors::new();
            collect("", &errors, &mut flat);
            Err(flat)
        }
    }
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                // First message per field, like the form UI shows
                if let Some(error) = list.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.entry(path).or_insert(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "too short"))]
        name: String,

        #[validate(range(min = 0, message = "negative"))]
        amount: i64,
    }

    #[test]
    fn test_ok_form_has_no_errors() {
        let probe = Probe {
            name: "ok".to_string(),
            amount: 1,
        };
        assert!(validate_form(&probe).is_ok());
    }

    #[test]
    fn test_each_failing_field_gets_one_message() {
        let probe = Probe {
            name: "x".to_string(),
            amount: -1,
        };
        let errors = validate_form(&probe).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name").map(String::as_str), Some("too short"));
        assert_eq!(errors.get("amount").map(String::as_str), Some("negative"));
    }
}
