//! Validation schema adapter.
//!
//! Wraps declarative per-collection field rules into a uniform
//! `validate(value) -> Valid | Invalid` contract used identically for
//! change-triggered and submit-triggered validation. Validation never
//! panics; every issue carries a human-readable message and the path of
//! the offending field.

use serde_json::{Map, Value};

/// One validation failure, addressed to a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub message: String,
    pub path: String,
}

impl Issue {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Declarative field rules, a closed set.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty string.
    Required { message: String },
    /// String with at least `min` characters.
    MinChars { min: usize, message: String },
    /// Array of non-empty strings with at least `min` entries.
    MinItems {
        min: usize,
        message: String,
        item_message: String,
    },
    /// String drawn from a fixed set.
    OneOf {
        allowed: Vec<String>,
        message: String,
    },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn min_chars(min: usize, message: impl Into<String>) -> Self {
        Rule::MinChars {
            min,
            message: message.into(),
        }
    }

    pub fn min_items(
        min: usize,
        message: impl Into<String>,
        item_message: impl Into<String>,
    ) -> Self {
        Rule::MinItems {
            min,
            message: message.into(),
            item_message: item_message.into(),
        }
    }

    pub fn one_of<I, S>(allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::OneOf {
            allowed: allowed.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    fn check(&self, name: &str, value: Option<&Value>, issues: &mut Vec<Issue>) {
        match self {
            Rule::Required { message } => match value.and_then(Value::as_str) {
                Some(s) if !s.is_empty() => {}
                _ => issues.push(Issue::new(message.clone(), name)),
            },
            Rule::MinChars { min, message } => match value.and_then(Value::as_str) {
                Some(s) if s.chars().count() >= *min => {}
                _ => issues.push(Issue::new(message.clone(), name)),
            },
            Rule::MinItems {
                min,
                message,
                item_message,
            } => match value.and_then(Value::as_array) {
                Some(items) => {
                    if items.len() < *min {
                        issues.push(Issue::new(message.clone(), name));
                    }
                    for (index, item) in items.iter().enumerate() {
                        match item.as_str() {
                            Some(s) if !s.is_empty() => {}
                            _ => issues.push(Issue::new(
                                item_message.clone(),
                                format!("{}.{}", name, index),
                            )),
                        }
                    }
                }
                None => issues.push(Issue::new(message.clone(), name)),
            },
            Rule::OneOf { allowed, message } => match value.and_then(Value::as_str) {
                Some(s) if allowed.iter().any(|a| a == s) => {}
                _ => issues.push(Issue::new(message.clone(), name)),
            },
        }
    }
}

/// Ordered set of named fields with their rules.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

/// Result of validating a payload.
#[derive(Debug, Clone)]
pub enum Validation {
    /// The parsed payload, containing only the declared fields.
    Valid(Map<String, Value>),
    Invalid(Vec<Issue>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn issues(&self) -> &[Issue] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(issues) => issues,
        }
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with its rules. Declaration order is preserved.
    pub fn field<I>(mut self, name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.fields
            .push((name.into(), rules.into_iter().collect()));
        self
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validate a payload against the declared rules.
    ///
    /// On success the returned value carries only the declared fields;
    /// unknown keys (including `id`) are stripped.
    pub fn validate(&self, value: &Map<String, Value>) -> Validation {
        let mut issues = Vec::new();

        for (name, rules) in &self.fields {
            let field_value = value.get(name);
            for rule in rules {
                rule.check(name, field_value, &mut issues);
            }
        }

        if !issues.is_empty() {
            return Validation::Invalid(issues);
        }

        let mut parsed = Map::new();
        for (name, _) in &self.fields {
            parsed.insert(
                name.clone(),
                value.get(name).cloned().unwrap_or(Value::Null),
            );
        }
        Validation::Valid(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_required_rejects_empty_and_missing() {
        let schema = Schema::new().field("question", [Rule::required("Question is required")]);

        let result = schema.validate(&payload(json!({ "question": "" })));
        assert_eq!(result.issues(), &[Issue::new("Question is required", "question")]);

        let result = schema.validate(&payload(json!({})));
        assert!(!result.is_valid());

        // Non-string values fail the same rule.
        let result = schema.validate(&payload(json!({ "question": 42 })));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_valid_payload_strips_unknown_keys() {
        let schema = Schema::new()
            .field("question", [Rule::required("Question is required")])
            .field("answer", [Rule::required("Answer is required")]);

        let result = schema.validate(&payload(json!({
            "question": "Do pets attend?",
            "answer": "<p>No.</p>",
            "id": "should-not-leak",
            "extra": true
        })));

        match result {
            Validation::Valid(parsed) => {
                assert_eq!(parsed.len(), 2);
                assert!(!parsed.contains_key("id"));
                assert_eq!(parsed["question"], json!("Do pets attend?"));
            }
            Validation::Invalid(issues) => panic!("unexpected issues: {:?}", issues),
        }
    }

    #[test]
    fn test_min_items_rejects_empty_array() {
        let schema = Schema::new().field(
            "highlights",
            [Rule::min_items(1, "Add at least one highlight", "Highlight must not be empty")],
        );

        let result = schema.validate(&payload(json!({ "highlights": [] })));
        assert_eq!(
            result.issues(),
            &[Issue::new("Add at least one highlight", "highlights")]
        );

        let result = schema.validate(&payload(json!({ "highlights": ["live music", ""] })));
        assert_eq!(
            result.issues(),
            &[Issue::new("Highlight must not be empty", "highlights.1")]
        );

        let result = schema.validate(&payload(json!({ "highlights": ["live music"] })));
        assert!(result.is_valid());
    }

    #[test]
    fn test_min_chars() {
        let schema = Schema::new().field("title", [Rule::min_chars(3, "Title too short")]);
        assert!(!schema.validate(&payload(json!({ "title": "ab" }))).is_valid());
        assert!(schema.validate(&payload(json!({ "title": "abc" }))).is_valid());
    }

    #[test]
    fn test_one_of_membership() {
        let schema = Schema::new().field(
            "role",
            [Rule::one_of(["admin", "editor"], "Unknown role")],
        );
        assert!(schema.validate(&payload(json!({ "role": "admin" }))).is_valid());
        assert_eq!(
            schema
                .validate(&payload(json!({ "role": "guest" })))
                .issues(),
            &[Issue::new("Unknown role", "role")]
        );
    }

    #[test]
    fn test_issues_collect_across_fields() {
        let schema = Schema::new()
            .field("title", [Rule::required("Title is required")])
            .field("location", [Rule::required("Location is required")]);

        let result = schema.validate(&payload(json!({})));
        assert_eq!(result.issues().len(), 2);
        assert_eq!(result.issues()[0].path, "title");
        assert_eq!(result.issues()[1].path, "location");
    }
}
