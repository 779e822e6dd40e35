//! Composable request validation over JSON bodies.
//!
//! A [`ValidationRule`] is a closure from `(value, key, whole body)` to an optional
//! [`ValidationError`]. Rules are registered per field in [`PropertyRules`], where
//! they only run when the field is present, or in [`SchemaRules`], where they run
//! against the whole body every time. [`validate_request`] runs every applicable
//! rule and returns all failures together; it never stops at the first one.
//!
//! A field is present when its key exists in the body, including when its value
//! is `null`.

use serde::Serialize;
use serde_json::Value;

/// Machine readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The value is not of the type the rule expects.
    TypeError,
    /// The value is numeric but outside the allowed set or range.
    OutOfBounds,
    /// Part of an all-or-nothing field group is missing.
    MissingField,
}

/// A single validation failure as reported to the caller.
///
/// `field` is `None` for failures raised by schema-level rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
    pub error_code: ErrorCode,
}

impl ValidationError {
    fn new(field: Option<&str>, message: String, error_code: ErrorCode) -> Self {
        Self {
            field: field.map(str::to_string),
            message,
            error_code,
        }
    }
}

/// A boxed validation rule: `(value, key, body) -> Option<ValidationError>`.
///
/// Property rules receive the field's value and name; schema rules receive the
/// whole body as the value and no key.
pub type ValidationRule =
    Box<dyn Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync>;

/// Field name to rule mapping, evaluated in insertion order.
#[derive(Default)]
pub struct PropertyRules {
    rules: Vec<(String, ValidationRule)>,
}

impl PropertyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` for `field`, replacing any rule already registered for it.
    pub fn with<F>(mut self, field: &str, rule: F) -> Self
    where
        F: Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync + 'static,
    {
        let rule: ValidationRule = Box::new(rule);
        match self.rules.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((field.to_string(), rule)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Ordered rules evaluated against the whole body.
#[derive(Default)]
pub struct SchemaRules {
    rules: Vec<ValidationRule>,
}

impl SchemaRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, rule: F) -> Self
    where
        F: Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }
}

/// Run every applicable rule against `body` and collect the failures.
///
/// Property rules run first, in registration order, for the fields present in
/// `body`. Schema rules then run in order regardless of which fields are present.
/// An empty result means the body is valid. A body that is not a JSON object has
/// no fields, so only schema rules can fail for it.
pub fn validate_request(
    body: &Value,
    property_rules: &PropertyRules,
    schema_rules: &SchemaRules,
) -> Vec<ValidationError> {
    let property_errors = property_rules
        .rules
        .iter()
        .filter_map(|(field, rule)| {
            body.get(field.as_str())
                .and_then(|value| rule(value, Some(field.as_str()), body))
        });

    let schema_errors = schema_rules
        .rules
        .iter()
        .filter_map(|rule| rule(body, None, body));

    property_errors.chain(schema_errors).collect()
}

/// The value must be a number contained in `allowed`.
///
/// Fails with [`ErrorCode::TypeError`] for non-numeric values and with
/// [`ErrorCode::OutOfBounds`] for numbers outside the set.
pub fn in_number_array(
    allowed: &[i64],
) -> impl Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync + Clone {
    let allowed = allowed.to_vec();
    move |value: &Value, key: Option<&str>, _body: &Value| {
        let Some(number) = value.as_f64() else {
            return Some(type_error(key));
        };

        if allowed.iter().any(|candidate| *candidate as f64 == number) {
            None
        } else {
            let listed = allowed
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Some(ValidationError::new(
                key,
                format!("{} must be one of [{}]", display_name(key), listed),
                ErrorCode::OutOfBounds,
            ))
        }
    }
}

/// The value must be a number within `min..=max`.
///
/// Fails with [`ErrorCode::TypeError`] for non-numeric values and with
/// [`ErrorCode::OutOfBounds`] for numbers outside the inclusive range.
pub fn is_between(
    min: i64,
    max: i64,
) -> impl Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync + Clone {
    move |value: &Value, key: Option<&str>, _body: &Value| {
        let Some(number) = value.as_f64() else {
            return Some(type_error(key));
        };

        if (min as f64..=max as f64).contains(&number) {
            None
        } else {
            Some(ValidationError::new(
                key,
                format!(
                    "{} must be between {} and {}",
                    display_name(key),
                    min,
                    max
                ),
                ErrorCode::OutOfBounds,
            ))
        }
    }
}

/// Schema rule: the named fields are either all present or all absent.
///
/// Fails with [`ErrorCode::MissingField`] when some but not all are present.
pub fn is_required_all_or_none(
    fields: &[&str],
) -> impl Fn(&Value, Option<&str>, &Value) -> Option<ValidationError> + Send + Sync + Clone {
    let fields: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
    move |_value: &Value, _key: Option<&str>, body: &Value| {
        let present = fields
            .iter()
            .filter(|field| body.get(field.as_str()).is_some())
            .count();

        if present == 0 || present == fields.len() {
            return None;
        }

        let missing = fields
            .iter()
            .filter(|field| body.get(field.as_str()).is_none())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Some(ValidationError::new(
            None,
            format!(
                "{} must be provided together; missing: {}",
                fields.join(", "),
                missing
            ),
            ErrorCode::MissingField,
        ))
    }
}

fn type_error(key: Option<&str>) -> ValidationError {
    ValidationError::new(
        key,
        format!("{} must be a number", display_name(key)),
        ErrorCode::TypeError,
    )
}

fn display_name(key: Option<&str>) -> &str {
    key.unwrap_or("value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property_rules() -> PropertyRules {
        PropertyRules::new()
            .with("role", in_number_array(&[0, 1]))
            .with("expirationSeconds", is_between(1800, 172800))
    }

    fn schema_rules() -> SchemaRules {
        SchemaRules::new().with(is_required_all_or_none(&["meetingNumber", "role"]))
    }

    fn run(body: Value) -> Vec<ValidationError> {
        validate_request(&body, &property_rules(), &schema_rules())
    }

    #[test]
    fn test_valid_body_has_no_errors() {
        let errors = run(json!({"meetingNumber": 123, "role": 1, "expirationSeconds": 3600}));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_absent_optional_fields_are_not_checked() {
        assert!(run(json!({})).is_empty());
        assert!(run(json!({"meetingNumber": 1, "role": 0})).is_empty());
    }

    #[test]
    fn test_in_number_array_rejects_value_outside_set() {
        let rule = in_number_array(&[0, 1]);
        let error = rule(&json!(2), Some("role"), &json!({"role": 2})).unwrap();

        assert_eq!(error.error_code, ErrorCode::OutOfBounds);
        assert_eq!(error.field, Some("role".to_string()));
        assert_eq!(error.message, "role must be one of [0, 1]");
    }

    #[test]
    fn test_in_number_array_rejects_non_numeric() {
        let rule = in_number_array(&[0, 1]);
        let error = rule(&json!("x"), Some("role"), &json!({"role": "x"})).unwrap();

        assert_eq!(error.error_code, ErrorCode::TypeError);
    }

    #[test]
    fn test_in_number_array_accepts_member() {
        let rule = in_number_array(&[0, 1]);
        assert_eq!(rule(&json!(0), Some("role"), &json!({"role": 0})), None);
        assert_eq!(rule(&json!(1.0), Some("role"), &json!({"role": 1.0})), None);
    }

    #[test]
    fn test_is_between_bounds_are_inclusive() {
        let rule = is_between(1800, 172800);
        let body = json!({});

        assert_eq!(rule(&json!(1800), Some("expirationSeconds"), &body), None);
        assert_eq!(rule(&json!(172800), Some("expirationSeconds"), &body), None);

        for outside in [1799, 172801] {
            let error = rule(&json!(outside), Some("expirationSeconds"), &body).unwrap();
            assert_eq!(error.error_code, ErrorCode::OutOfBounds);
            assert_eq!(
                error.message,
                "expirationSeconds must be between 1800 and 172800"
            );
        }
    }

    #[test]
    fn test_is_between_rejects_non_numeric() {
        let rule = is_between(1800, 172800);
        let error = rule(&json!(null), Some("expirationSeconds"), &json!({})).unwrap();
        assert_eq!(error.error_code, ErrorCode::TypeError);
    }

    #[test]
    fn test_all_or_none_group() {
        let rule = is_required_all_or_none(&["meetingNumber", "role"]);

        let both = json!({"meetingNumber": 1, "role": 0});
        let neither = json!({"expirationSeconds": 3600});
        assert_eq!(rule(&both, None, &both), None);
        assert_eq!(rule(&neither, None, &neither), None);

        let only_meeting = json!({"meetingNumber": 1});
        let error = rule(&only_meeting, None, &only_meeting).unwrap();
        assert_eq!(error.error_code, ErrorCode::MissingField);
        assert_eq!(error.field, None);
        assert!(error.message.ends_with("missing: role"));

        let only_role = json!({"role": 1});
        assert!(rule(&only_role, None, &only_role).is_some());
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let errors = run(json!({"role": 5, "expirationSeconds": "soon"}));

        let codes: Vec<(Option<&str>, ErrorCode)> = errors
            .iter()
            .map(|e| (e.field.as_deref(), e.error_code))
            .collect();
        assert_eq!(
            codes,
            vec![
                (Some("role"), ErrorCode::OutOfBounds),
                (Some("expirationSeconds"), ErrorCode::TypeError),
                (None, ErrorCode::MissingField),
            ]
        );
    }

    #[test]
    fn test_reports_exactly_the_violating_field() {
        let errors = run(json!({"meetingNumber": 1, "role": 2}));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("role"));
        assert_eq!(errors[0].error_code, ErrorCode::OutOfBounds);
    }

    #[test]
    fn test_null_counts_as_present() {
        let errors = run(json!({"meetingNumber": 1, "role": null}));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code, ErrorCode::TypeError);
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        assert!(run(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_registering_a_field_twice_replaces_the_rule() {
        let rules = PropertyRules::new()
            .with("role", in_number_array(&[0]))
            .with("role", in_number_array(&[0, 1]));

        assert_eq!(rules.len(), 1);
        assert!(validate_request(&json!({"role": 1}), &rules, &SchemaRules::new()).is_empty());
    }

    #[test]
    fn test_error_serializes_with_screaming_snake_case_code() {
        let error = ValidationError::new(
            Some("role"),
            "role must be a number".to_string(),
            ErrorCode::TypeError,
        );

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"field": "role", "message": "role must be a number", "error_code": "TYPE_ERROR"})
        );
    }
}
