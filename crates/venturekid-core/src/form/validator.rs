//! Step validator.
//!
//! Pure function from (step definition, current field values) to a map
//! of field-name -> error message. An empty map means the step may
//! advance. Callable repeatedly with identical results; no side
//! effects.

use super::fields::{ErrorMap, FieldMap, FieldValue};
use super::flow::{FieldRule, RuleKind, StepDef};

/// Characters a phone number may contain besides digits.
const PHONE_SYMBOLS: &[char] = &['+', '(', ')', '-', ' '];

/// Minimum count of non-space characters in a phone number.
const PHONE_MIN_CHARS: usize = 10;

/// Validate one step against the current field values.
pub fn validate(step: &StepDef, fields: &FieldMap) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for rule in &step.rules {
        if let Some(message) = check_rule(rule, fields) {
            errors.insert(rule.field.to_string(), message);
        }
    }
    errors
}

fn check_rule(rule: &FieldRule, fields: &FieldMap) -> Option<String> {
    let value = fields.get(rule.field);
    match rule.kind {
        RuleKind::Required => match value {
            None => Some(format!("{} is required", rule.label)),
            Some(v) if v.is_blank() => Some(format!("{} is required", rule.label)),
            Some(_) => None,
        },
        RuleKind::Email => match value.and_then(FieldValue::as_text) {
            None => Some(format!("{} is required", rule.label)),
            Some(s) if s.trim().is_empty() => Some(format!("{} is required", rule.label)),
            Some(s) if !is_valid_email(s.trim()) => {
                Some("Enter a valid email address".to_string())
            }
            Some(_) => None,
        },
        RuleKind::Phone => match value.and_then(FieldValue::as_text) {
            None => Some(format!("{} is required", rule.label)),
            Some(s) if s.trim().is_empty() => Some(format!("{} is required", rule.label)),
            Some(s) if !is_valid_phone(s.trim()) => {
                Some("Enter a valid phone number".to_string())
            }
            Some(_) => None,
        },
        RuleKind::NonEmptyList => match value.and_then(FieldValue::as_list) {
            None => Some("Pick at least one option".to_string()),
            Some(items) if items.is_empty() => Some("Pick at least one option".to_string()),
            Some(_) => None,
        },
        RuleKind::MustBeTrue => match value.and_then(FieldValue::as_flag) {
            Some(true) => None,
            _ => Some("Please confirm to continue".to_string()),
        },
    }
}

/// `local@domain.tld` shape: non-whitespace local part, one `@`, and a
/// domain containing a dot with non-whitespace on both sides.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Every character from `+()- ` or 0-9, and at least ten non-space
/// characters overall.
pub fn is_valid_phone(s: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || PHONE_SYMBOLS.contains(&c);
    if !s.chars().all(allowed) {
        return false;
    }
    s.chars().filter(|c| *c != ' ').count() >= PHONE_MIN_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::flow::FormFlow;

    fn valid_contact_fields() -> FieldMap {
        let mut fields = FormFlow::career_guide().defaults();
        fields.insert("parent_name".into(), FieldValue::text("Sam Rivera"));
        fields.insert("parent_email".into(), FieldValue::text("sam@example.com"));
        fields.insert("parent_phone".into(), FieldValue::text("+1 (555) 123-4567"));
        fields
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("kid@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.uk"));
        assert!(!is_valid_email("kid@example"));
        assert!(!is_valid_email("kid example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("kid@.com"));
        assert!(!is_valid_email("kid@examplecom"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-1234"), "too short");
        assert!(!is_valid_phone("555 123 456x"), "letters rejected");
        assert!(!is_valid_phone("55 51 23 45"), "spaces don't count");
    }

    #[test]
    fn contact_step_accepts_valid_fields() {
        let flow = FormFlow::career_guide();
        let step = flow.step(2).unwrap();
        let errors = validate(step, &valid_contact_fields());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn contact_step_flags_each_missing_field() {
        let flow = FormFlow::career_guide();
        let step = flow.step(2).unwrap();
        for rule in &step.rules {
            let mut fields = valid_contact_fields();
            fields.insert(rule.field.to_string(), FieldValue::text("  "));
            let errors = validate(step, &fields);
            assert!(
                errors.contains_key(rule.field),
                "blanking {} should produce an error",
                rule.field
            );
        }
    }

    #[test]
    fn ruleless_step_always_validates() {
        let flow = FormFlow::career_guide();
        let step = flow.step(9).unwrap();
        assert!(validate(step, &FieldMap::new()).is_empty());
    }

    #[test]
    fn interests_must_be_non_empty() {
        let flow = FormFlow::career_guide();
        let step = flow.step(3).unwrap();
        let mut fields = flow.defaults();
        assert!(validate(step, &fields).contains_key("interests"));

        fields.insert(
            "interests".into(),
            FieldValue::List(vec!["selling".into()]),
        );
        assert!(validate(step, &fields).is_empty());
    }

    #[test]
    fn consent_must_be_checked() {
        let flow = FormFlow::enrollment();
        let step = flow.step(5).unwrap();
        let mut fields = flow.defaults();
        assert!(validate(step, &fields).contains_key("consent"));

        fields.insert("consent".into(), FieldValue::Flag(true));
        assert!(validate(step, &fields).is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let flow = FormFlow::career_guide();
        let step = flow.step(2).unwrap();
        let fields = flow.defaults();
        let first = validate(step, &fields);
        let second = validate(step, &fields);
        assert_eq!(first, second);
    }
}
