// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form field maps and declarative validation.
//!
//! Each resource describes its form as a static list of [`FieldSpec`]s. A
//! [`FieldMap`] holds the raw values a user typed; [`validate`] checks every
//! field and collects all violations instead of stopping at the first one.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// How a field is encoded in the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be present and not blank.
    Required,
    /// At most this many characters.
    MaxLength(usize),
    /// At least this many characters.
    MinLength(usize),
    /// Integer value must be at least this.
    Min(i64),
    /// Value must look like an email address.
    Email,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    pub const fn text(name: &'static str, rules: &'static [FieldRule]) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            rules,
        }
    }

    pub const fn integer(name: &'static str, rules: &'static [FieldRule]) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            rules,
        }
    }

    fn is_required(&self) -> bool {
        self.rules.contains(&FieldRule::Required)
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing,
    TooLong { max: usize, actual: usize },
    TooShort { min: usize, actual: usize },
    BelowMinimum { min: i64 },
    NotAnInteger,
    InvalidEmail,
}

/// A violation attached to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub violation: Violation,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = &self.field;
        match &self.violation {
            Violation::Missing => write!(f, "{field} is required"),
            Violation::TooLong { max, actual } => {
                write!(f, "{field} must be at most {max} characters (got {actual})")
            }
            Violation::TooShort { min, actual } => {
                write!(f, "{field} must be at least {min} characters (got {actual})")
            }
            Violation::BelowMinimum { min } => write!(f, "{field} must be at least {min}"),
            Violation::NotAnInteger => write!(f, "{field} must be a whole number"),
            Violation::InvalidEmail => write!(f, "{field} must be a valid email address"),
        }
    }
}

/// Raw form values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Inserts the value only when present; `None` leaves the field blank.
    pub fn set_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the trimmed value, treating blank as absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Parses an integer field. Blank or non-numeric values yield `None`.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(|v| v.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlays `other` on top of `self`; fields in `other` win.
    pub fn merged(mut self, other: &FieldMap) -> FieldMap {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
        self
    }

    /// Encodes the fields named in `schema` as a JSON object.
    ///
    /// Integer fields become numbers, blank fields become `null`, and fields
    /// outside the schema are dropped.
    pub fn to_payload(&self, schema: &[FieldSpec]) -> Value {
        let mut object = Map::new();
        for field in schema {
            let value = match (self.value(field.name), field.kind) {
                (None, _) => Value::Null,
                (Some(raw), FieldKind::Integer) => match raw.parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::from(raw),
                },
                (Some(raw), FieldKind::Text) => Value::from(raw),
            };
            object.insert(field.name.to_string(), value);
        }
        Value::Object(object)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Checks `fields` against every field in `schema`.
///
/// Optional blank fields are skipped; required blank fields report
/// [`Violation::Missing`] and nothing else.
pub fn validate(schema: &[FieldSpec], fields: &FieldMap) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    for field in schema {
        let Some(value) = fields.value(field.name) else {
            if field.is_required() {
                violations.push(FieldViolation::new(field.name, Violation::Missing));
            }
            continue;
        };

        let parsed = match field.kind {
            FieldKind::Integer => match value.parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    violations.push(FieldViolation::new(field.name, Violation::NotAnInteger));
                    continue;
                }
            },
            FieldKind::Text => None,
        };

        let length = value.chars().count();
        for rule in field.rules {
            let violation = match *rule {
                FieldRule::Required => None,
                FieldRule::MaxLength(max) if length > max => Some(Violation::TooLong {
                    max,
                    actual: length,
                }),
                FieldRule::MinLength(min) if length < min => Some(Violation::TooShort {
                    min,
                    actual: length,
                }),
                FieldRule::Min(min) => match parsed.or_else(|| value.parse().ok()) {
                    Some(n) if n >= min => None,
                    Some(_) => Some(Violation::BelowMinimum { min }),
                    None => Some(Violation::NotAnInteger),
                },
                FieldRule::Email if !looks_like_email(value) => Some(Violation::InvalidEmail),
                _ => None,
            };
            if let Some(violation) = violation {
                violations.push(FieldViolation::new(field.name, violation));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .all(|label| !label.is_empty())
        && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use FieldRule::*;

    const SHELF: &[FieldSpec] = &[
        FieldSpec::text("shelfCode", &[Required, MaxLength(5)]),
        FieldSpec::integer("capacity", &[Required, Min(1)]),
        FieldSpec::text("locationDescription", &[MaxLength(10)]),
    ];

    #[test]
    fn valid_fields_pass() {
        let fields = FieldMap::new()
            .with("shelfCode", "A-1")
            .with("capacity", "12");
        assert!(validate(SHELF, &fields).is_ok());
    }

    #[test]
    fn collects_all_violations() {
        let fields = FieldMap::new()
            .with("shelfCode", "TOO-LONG-CODE")
            .with("capacity", "0")
            .with("locationDescription", "back of the store, left");
        let err = validate(SHELF, &fields).unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.has_field("shelfCode"));
        assert!(err.has_field("capacity"));
        assert!(err.has_field("locationDescription"));
    }

    #[test]
    fn blank_required_field_is_missing_only() {
        let fields = FieldMap::new().with("shelfCode", "   ").with("capacity", "3");
        let err = validate(SHELF, &fields).unwrap_err();
        assert_eq!(
            err.violations,
            vec![FieldViolation::new("shelfCode", Violation::Missing)]
        );
    }

    #[test]
    fn integer_fields_reject_text() {
        let fields = FieldMap::new().with("shelfCode", "A").with("capacity", "lots");
        let err = validate(SHELF, &fields).unwrap_err();
        assert_eq!(
            err.violations,
            vec![FieldViolation::new("capacity", Violation::NotAnInteger)]
        );
    }

    #[test]
    fn email_and_min_length_rules() {
        const LOGIN: &[FieldSpec] = &[
            FieldSpec::text("email", &[Required, Email]),
            FieldSpec::text("password", &[Required, MinLength(6)]),
        ];
        let ok = FieldMap::new()
            .with("email", "a@x.com")
            .with("password", "secret1");
        assert!(validate(LOGIN, &ok).is_ok());

        let bad = FieldMap::new()
            .with("email", "a@x")
            .with("password", "short");
        let err = validate(LOGIN, &bad).unwrap_err();
        assert!(err.violations.contains(&FieldViolation::new("email", Violation::InvalidEmail)));
        assert!(err
            .violations
            .contains(&FieldViolation::new("password", Violation::TooShort { min: 6, actual: 5 })));
    }

    #[test]
    fn payload_coerces_integers_and_nulls_blanks() {
        let fields = FieldMap::new()
            .with("shelfCode", "A-1")
            .with("capacity", "12")
            .with("ignored", "x");
        let payload = fields.to_payload(SHELF);
        assert_eq!(
            payload,
            serde_json::json!({
                "shelfCode": "A-1",
                "capacity": 12,
                "locationDescription": null,
            })
        );
    }

    #[test]
    fn merged_prefers_overlay() {
        let base = FieldMap::new().with("a", "1").with("b", "2");
        let merged = base.merged(&FieldMap::new().with("b", "3"));
        assert_eq!(merged.get("a"), Some("1"));
        assert_eq!(merged.get("b"), Some("3"));
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("ops@shelf.example.com"));
        assert!(!looks_like_email("ops@"));
        assert!(!looks_like_email("@shelf.com"));
        assert!(!looks_like_email("ops @shelf.com"));
        assert!(!looks_like_email("ops@shelf..com"));
    }

    proptest::proptest! {
        #[test]
        fn validate_never_panics(code in ".{0,80}", capacity in ".{0,12}") {
            let fields = FieldMap::new().with("shelfCode", code).with("capacity", capacity);
            let _ = validate(SHELF, &fields);
        }

        #[test]
        fn max_length_counts_chars(code in "[a-zé]{1,10}") {
            let fields = FieldMap::new().with("shelfCode", &code).with("capacity", "1");
            let too_long = code.chars().count() > 5;
            proptest::prop_assert_eq!(validate(SHELF, &fields).is_err(), too_long);
        }
    }
}
