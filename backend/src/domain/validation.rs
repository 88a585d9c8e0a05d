//! Constraint checks collected into a list of violations.
//!
//! Unlike the fail-fast `TryFrom` conversions elsewhere in the domain, entity
//! validation gathers every violation so callers can report each offending
//! field at once. Field paths use `/` separators and list indices, e.g.
//! `contacts/0/address/postcode`.

use std::fmt;

use validator::ValidateEmail;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    field: Option<String>,
    message: String,
}

impl ConstraintViolation {
    /// Violation attached to a field path.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Violation of a rule spanning the whole object.
    pub fn object(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Field path, or `None` for object-level violations.
    #[must_use]
    pub fn field_path(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn nested_under(self, prefix: &str) -> Self {
        let field = match self.field {
            Some(field) => format!("{prefix}/{field}"),
            None => prefix.to_owned(),
        };
        Self {
            field: Some(field),
            message: self.message,
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Ordered collection of constraint violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintViolations {
    violations: Vec<ConstraintViolation>,
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constraint violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConstraintViolations {}

impl ConstraintViolations {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, violation: ConstraintViolation) {
        self.violations.push(violation);
    }

    /// Append every violation from `nested`, prefixing field paths.
    pub fn extend_nested(&mut self, prefix: &str, nested: Self) {
        self.violations.extend(
            nested
                .violations
                .into_iter()
                .map(|violation| violation.nested_under(prefix)),
        );
    }

    /// Whether no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterate in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintViolation> {
        self.violations.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collection itself when it holds any violation.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub(crate) fn require_not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(ConstraintViolation::field(field, "must not be blank"));
        }
    }

    pub(crate) fn require_max_chars(&mut self, field: &str, value: Option<&str>, max: usize) {
        if value.is_some_and(|value| value.chars().count() > max) {
            self.push(ConstraintViolation::field(field, size_message(max)));
        }
    }

    pub(crate) fn require_max_items(&mut self, field: &str, count: usize, max: usize) {
        if count > max {
            self.push(ConstraintViolation::field(field, size_message(max)));
        }
    }

    pub(crate) fn require_email(&mut self, field: &str, value: Option<&str>) {
        if value.is_some_and(|value| !value.validate_email()) {
            self.push(ConstraintViolation::field(
                field,
                "must be a well-formed email address",
            ));
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn size_message(max: usize) -> String {
    format!("size must be between 0 and {max}")
}

/// Types whose constraints can be checked as a whole.
pub trait Validate {
    /// Record every violated constraint into `violations`.
    fn collect_violations(&self, violations: &mut ConstraintViolations);

    /// Check all constraints.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint.
    fn validate(&self) -> Result<(), ConstraintViolations> {
        let mut violations = ConstraintViolations::new();
        self.collect_violations(&mut violations);
        violations.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nested_paths_are_prefixed() {
        let mut inner = ConstraintViolations::new();
        inner.push(ConstraintViolation::field("postcode", "too long"));
        inner.push(ConstraintViolation::object("inconsistent"));

        let mut outer = ConstraintViolations::new();
        outer.extend_nested("contacts/1/address", inner);

        let paths: Vec<_> = outer.iter().map(ConstraintViolation::field_path).collect();
        assert_eq!(
            paths,
            vec![
                Some("contacts/1/address/postcode"),
                Some("contacts/1/address"),
            ]
        );
    }

    #[rstest]
    #[case::blank("  ", 1)]
    #[case::present("Jack", 0)]
    fn require_not_blank_flags_whitespace(#[case] value: &str, #[case] expected: usize) {
        let mut violations = ConstraintViolations::new();
        violations.require_not_blank("name", value);
        assert_eq!(violations.len(), expected);
    }

    #[rstest]
    fn require_max_chars_counts_characters_not_bytes() {
        let mut violations = ConstraintViolations::new();
        violations.require_max_chars("name", Some("ÅÅÅ"), 3);
        assert!(violations.is_empty());
        violations.require_max_chars("name", Some("ÅÅÅÅ"), 3);
        let messages: Vec<_> = violations.iter().map(ConstraintViolation::message).collect();
        assert_eq!(messages, vec!["size must be between 0 and 3"]);
    }

    #[rstest]
    #[case::valid("hp@lovecraft.com", true)]
    #[case::missing_at("hp.lovecraft.com", false)]
    #[case::missing_domain("hp@", false)]
    fn require_email_checks_format(#[case] value: &str, #[case] valid: bool) {
        let mut violations = ConstraintViolations::new();
        violations.require_email("email", Some(value));
        assert_eq!(violations.is_empty(), valid);
    }

    #[rstest]
    fn into_result_reports_emptiness() {
        assert!(ConstraintViolations::new().into_result().is_ok());
        let mut violations = ConstraintViolations::new();
        violations.push(ConstraintViolation::object("bad"));
        assert_eq!(violations.clone().into_result(), Err(violations));
    }
}
