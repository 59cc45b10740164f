// SPDX-License-Identifier: MPL-2.0
//! Field validation shared by the enquiry and contact forms.

use super::{Field, FormValues};
use crate::config::MIN_ORDER_QUANTITY_KG;
use regex::Regex;
use std::sync::LazyLock;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

// South African numbers: +27 or 0, then 6-8, then eight digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+27|0)[6-8][0-9]{8}$").expect("phone regex should compile")
});

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    NameTooShort,
    EmailInvalid,
    PhoneInvalid,
    QuantityTooSmall,
    QuantityInvalid,
    MessageTooShort,
}

impl Violation {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Violation::Required => "field-required",
            Violation::NameTooShort => "name-too-short",
            Violation::EmailInvalid => "email-invalid",
            Violation::PhoneInvalid => "phone-invalid",
            Violation::QuantityTooSmall => "quantity-too-small",
            Violation::QuantityInvalid => "quantity-invalid",
            Violation::MessageTooShort => "message-too-short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

/// Checks every rule and returns all violations in field order.
///
/// A blank required field only reports [`Violation::Required`]; format rules
/// apply to non-blank values whether or not the field is required.
#[must_use]
pub fn validate(values: &FormValues, required: &[Field]) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in Field::ALL {
        let value = values.get(field).trim();
        if value.is_empty() {
            if required.contains(&field) {
                errors.push(FieldError {
                    field,
                    violation: Violation::Required,
                });
            }
            continue;
        }
        if let Some(violation) = check(field, value) {
            errors.push(FieldError { field, violation });
        }
    }
    errors
}

fn check(field: Field, value: &str) -> Option<Violation> {
    match field {
        Field::Name if value.chars().count() < MIN_NAME_CHARS => Some(Violation::NameTooShort),
        Field::Email if !EMAIL_PATTERN.is_match(value) => Some(Violation::EmailInvalid),
        Field::Phone if !PHONE_PATTERN.is_match(value) => Some(Violation::PhoneInvalid),
        Field::Quantity => match value.parse::<f64>() {
            Ok(quantity) if quantity.is_finite() && quantity >= MIN_ORDER_QUANTITY_KG => None,
            Ok(quantity) if quantity.is_finite() => Some(Violation::QuantityTooSmall),
            _ => Some(Violation::QuantityInvalid),
        },
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Some(Violation::MessageTooShort)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(Field, &str)]) -> FormValues {
        let mut values = FormValues::default();
        for (field, value) in pairs {
            values.set(*field, (*value).to_string());
        }
        values
    }

    fn violations(errors: &[FieldError]) -> Vec<(Field, Violation)> {
        errors.iter().map(|e| (e.field, e.violation)).collect()
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let errors = validate(
            &values(&[(Field::Name, "   ")]),
            &[Field::Name, Field::Email],
        );
        assert_eq!(
            violations(&errors),
            vec![
                (Field::Name, Violation::Required),
                (Field::Email, Violation::Required)
            ]
        );
    }

    #[test]
    fn valid_form_has_no_errors() {
        let form = values(&[
            (Field::Name, "Thabo"),
            (Field::Email, "thabo@example.co.za"),
            (Field::Phone, "0821234567"),
            (Field::Quantity, "2.5"),
            (Field::Message, "Please call me back tomorrow."),
        ]);
        assert!(validate(&form, &[Field::Name, Field::Email]).is_empty());
    }

    #[test]
    fn phone_accepts_international_prefix() {
        let form = values(&[(Field::Phone, "+27721234567")]);
        assert!(validate(&form, &[]).is_empty());
    }

    #[test]
    fn phone_rejects_wrong_leading_digit_and_length() {
        for phone in ["0123456789", "082123456", "+2782123456789", "27821234567"] {
            let errors = validate(&values(&[(Field::Phone, phone)]), &[]);
            assert_eq!(
                violations(&errors),
                vec![(Field::Phone, Violation::PhoneInvalid)],
                "{phone}"
            );
        }
    }

    #[test]
    fn email_requires_at_and_dot() {
        for email in ["plain", "a@b", "a b@c.d", "@b.c"] {
            let errors = validate(&values(&[(Field::Email, email)]), &[]);
            assert_eq!(errors.len(), 1, "{email}");
        }
    }

    #[test]
    fn short_name_and_message_are_rejected() {
        let errors = validate(
            &values(&[(Field::Name, "A"), (Field::Message, "too short")]),
            &[],
        );
        assert_eq!(
            violations(&errors),
            vec![
                (Field::Name, Violation::NameTooShort),
                (Field::Message, Violation::MessageTooShort)
            ]
        );
    }

    #[test]
    fn quantity_minimum_and_parse_failures() {
        let small = validate(&values(&[(Field::Quantity, "0.4")]), &[]);
        assert_eq!(
            violations(&small),
            vec![(Field::Quantity, Violation::QuantityTooSmall)]
        );

        let junk = validate(&values(&[(Field::Quantity, "lots")]), &[]);
        assert_eq!(
            violations(&junk),
            vec![(Field::Quantity, Violation::QuantityInvalid)]
        );

        assert!(validate(&values(&[(Field::Quantity, "0.5")]), &[]).is_empty());
    }
}
