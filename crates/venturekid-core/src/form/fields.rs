//! Field values for wizard sessions.
//!
//! A form session holds a flat map of field name to value. Values are
//! loosely typed -- the validator checks shape at advance time, and the
//! scoring engine parses what it needs with documented defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name -> value, for one wizard session.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Field name -> human-readable error message.
pub type ErrorMap = BTreeMap<String, String>;

/// A single form field value.
///
/// Untagged so answer files read naturally:
/// `{"child_name": "Ada", "leadership": 5, "interests": ["selling"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// A value counts as blank when there is nothing meaningful in it:
    /// whitespace-only text or an empty list. Flags and numbers are
    /// never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Flag(_) | FieldValue::Number(_) => false,
        }
    }
}

/// Clamp a raw numeric answer onto the 1-5 Likert scale.
pub fn likert(value: i64) -> u8 {
    value.clamp(1, 5) as u8
}

// ── Map helpers ──────────────────────────────────────────────────────

pub fn get_text<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(FieldValue::as_text)
}

pub fn get_number(fields: &FieldMap, name: &str) -> Option<i64> {
    fields.get(name).and_then(FieldValue::as_number)
}

pub fn get_flag(fields: &FieldMap, name: &str) -> bool {
    fields
        .get(name)
        .and_then(FieldValue::as_flag)
        .unwrap_or(false)
}

pub fn get_list<'a>(fields: &'a FieldMap, name: &str) -> &'a [String] {
    fields
        .get(name)
        .and_then(FieldValue::as_list)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::text("Ada").is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
        assert!(!FieldValue::Number(0).is_blank());
    }

    #[test]
    fn likert_clamps_to_scale() {
        assert_eq!(likert(-3), 1);
        assert_eq!(likert(1), 1);
        assert_eq!(likert(3), 3);
        assert_eq!(likert(5), 5);
        assert_eq!(likert(99), 5);
    }

    #[test]
    fn untagged_json_round_trip() {
        let mut fields = FieldMap::new();
        fields.insert("child_name".into(), FieldValue::text("Ada"));
        fields.insert("leadership".into(), FieldValue::Number(5));
        fields.insert("consent".into(), FieldValue::Flag(true));
        fields.insert(
            "interests".into(),
            FieldValue::List(vec!["selling".into()]),
        );

        let json = serde_json::to_string(&fields).unwrap();
        let parsed: FieldMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fields);
        assert_eq!(get_number(&parsed, "leadership"), Some(5));
        assert_eq!(get_list(&parsed, "interests"), ["selling".to_string()]);
    }
}
