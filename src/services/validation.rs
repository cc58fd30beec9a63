use crate::models::{DocumentKind, FieldDef, FieldType, Rule};
use crate::services::slug::{is_valid_slug, DEFAULT_SLUG_MAX_LENGTH};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Keys the host stores on image values next to the declared fields.
const IMAGE_KEYS: [&str; 3] = ["asset", "hotspot", "crop"];

#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    pub reject_unknown_fields: bool,
}

/// Resolves a referenced document id to the name of its kind.
pub trait DocumentLookup {
    fn kind_of(&self, id: &str) -> Option<String>;
}

impl DocumentLookup for HashMap<String, String> {
    fn kind_of(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Evaluates the kind's declared rules against a JSON document. Keys
/// starting with `_` are host metadata and never checked.
pub fn validate_document(
    kind: &DocumentKind,
    doc: &Value,
    options: &ValidationOptions,
    lookup: Option<&dyn DocumentLookup>,
) -> Vec<ValidationIssue> {
    let mut validator = Validator {
        options,
        lookup,
        issues: Vec::new(),
    };

    match doc.as_object() {
        Some(map) => validator.validate_object("", &kind.fields, map, &[]),
        None => validator.push("", "document must be a JSON object".to_string()),
    }

    tracing::debug!(
        "Validated {} document: {} issue(s)",
        kind.name,
        validator.issues.len()
    );
    validator.issues
}

struct Validator<'a> {
    options: &'a ValidationOptions,
    lookup: Option<&'a dyn DocumentLookup>,
    issues: Vec<ValidationIssue>,
}

impl Validator<'_> {
    fn push(&mut self, path: &str, message: String) {
        self.issues.push(ValidationIssue {
            path: path.to_string(),
            message,
        });
    }

    fn validate_object(
        &mut self,
        prefix: &str,
        fields: &[FieldDef],
        map: &Map<String, Value>,
        extra_keys: &[&str],
    ) {
        for field in fields {
            let path = join(prefix, &field.name);
            self.validate_field(&path, field, map.get(&field.name));
        }

        if self.options.reject_unknown_fields {
            for key in map.keys() {
                if key.starts_with('_') || extra_keys.contains(&key.as_str()) {
                    continue;
                }
                if !fields.iter().any(|f| &f.name == key) {
                    self.push(&join(prefix, key), "unknown field".to_string());
                }
            }
        }
    }

    fn validate_field(&mut self, path: &str, field: &FieldDef, value: Option<&Value>) {
        let Some(value) = value.filter(|v| !is_missing(field, v)) else {
            if field.is_required() {
                self.push(path, "is required".to_string());
            }
            return;
        };

        match field.field_type {
            FieldType::String | FieldType::Text => match value.as_str() {
                Some(s) => {
                    self.check_option(path, field, s);
                    self.check_bounds(path, &field.rules, s.chars().count() as f64, "characters");
                }
                None => self.push(path, "expected a string".to_string()),
            },
            FieldType::Number => match value.as_f64() {
                Some(n) => self.check_number(path, &field.rules, n),
                None => self.push(path, "expected a number".to_string()),
            },
            FieldType::Url => match value.as_str() {
                Some(s) if url::Url::parse(s).is_ok() => {}
                Some(s) => self.push(path, format!("'{}' is not a valid URL", s)),
                None => self.push(path, "expected a URL string".to_string()),
            },
            FieldType::Datetime => match value.as_str() {
                Some(s) if chrono::DateTime::parse_from_rfc3339(s).is_ok() => {}
                Some(s) => self.push(path, format!("'{}' is not an RFC 3339 datetime", s)),
                None => self.push(path, "expected a datetime string".to_string()),
            },
            FieldType::Slug => self.check_slug(path, field, value),
            FieldType::Image => match value.as_object() {
                Some(map) => self.validate_object(path, &field.fields, map, &IMAGE_KEYS),
                None => self.push(path, "expected an image object".to_string()),
            },
            FieldType::Object => match value.as_object() {
                Some(map) => self.validate_object(path, &field.fields, map, &[]),
                None => self.push(path, "expected an object".to_string()),
            },
            FieldType::Array => match value.as_array() {
                Some(items) => self.check_array(path, field, items),
                None => self.push(path, "expected an array".to_string()),
            },
            FieldType::Reference => self.check_reference(path, field, value),
        }
    }

    fn check_option(&mut self, path: &str, field: &FieldDef, value: &str) {
        let list = &field.options.list;
        if !list.is_empty() && !list.iter().any(|item| item.value == value) {
            let allowed: Vec<&str> = list.iter().map(|item| item.value.as_str()).collect();
            self.push(
                path,
                format!("'{}' is not one of: {}", value, allowed.join(" | ")),
            );
        }
    }

    fn check_number(&mut self, path: &str, rules: &[Rule], n: f64) {
        if rules.contains(&Rule::Integer) && n.fract() != 0.0 {
            self.push(path, "must be an integer".to_string());
        }
        if rules.contains(&Rule::Positive) && n <= 0.0 {
            self.push(path, "must be a positive number".to_string());
        }
        if let Some(min) = Rule::min_of(rules) {
            if n < min {
                self.push(path, format!("must be greater than or equal to {}", min));
            }
        }
        if let Some(max) = Rule::max_of(rules) {
            if n > max {
                self.push(path, format!("must be less than or equal to {}", max));
            }
        }
    }

    fn check_bounds(&mut self, path: &str, rules: &[Rule], count: f64, unit: &str) {
        if let Some(min) = Rule::min_of(rules) {
            if count < min {
                self.push(path, format!("must have at least {} {}", min, unit));
            }
        }
        if let Some(max) = Rule::max_of(rules) {
            if count > max {
                self.push(path, format!("must have at most {} {}", max, unit));
            }
        }
    }

    fn check_slug(&mut self, path: &str, field: &FieldDef, value: &Value) {
        let max_length = field
            .options
            .slug
            .as_ref()
            .map(|s| s.max_length)
            .unwrap_or(DEFAULT_SLUG_MAX_LENGTH);

        match value.get("current").and_then(Value::as_str) {
            Some(current) if is_valid_slug(current, max_length) => {}
            Some(current) => self.push(
                path,
                format!(
                    "slug '{}' must be 1-{} characters of lowercase letters, digits, underscores and hyphens",
                    current, max_length
                ),
            ),
            None => self.push(path, "expected a slug object with a 'current' string".to_string()),
        }
    }

    fn check_array(&mut self, path: &str, field: &FieldDef, items: &[Value]) {
        self.check_bounds(path, &field.rules, items.len() as f64, "items");

        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{}[{}]", path, i);
            match member_for(&field.of, item) {
                Some(member) => self.validate_field(&item_path, member, Some(item)),
                None => {
                    let ty = item.get("_type").and_then(Value::as_str).unwrap_or("unknown");
                    self.push(&item_path, format!("item type '{}' is not allowed here", ty));
                }
            }
        }
    }

    fn check_reference(&mut self, path: &str, field: &FieldDef, value: &Value) {
        let Some(id) = value.get("_ref").and_then(Value::as_str) else {
            self.push(path, "expected a reference with a string '_ref'".to_string());
            return;
        };
        let (Some(lookup), Some(reference)) = (self.lookup, field.options.reference.as_ref()) else {
            return;
        };

        match lookup.kind_of(id) {
            None => self.push(path, format!("references unknown document '{}'", id)),
            Some(kind) if !reference.to.contains(&kind) => self.push(
                path,
                format!(
                    "must reference one of: {} (got '{}')",
                    reference.to.join(", "),
                    kind
                ),
            ),
            Some(_) => {}
        }
    }
}

/// The single member definition, or the one whose name or type matches the
/// item's `_type`.
fn member_for<'f>(of: &'f [FieldDef], item: &Value) -> Option<&'f FieldDef> {
    if of.len() == 1 {
        return of.first();
    }
    let ty = item.get("_type").and_then(Value::as_str)?;
    of.iter()
        .find(|m| m.name == ty || ty.parse::<FieldType>() == Ok(m.field_type))
}

fn is_missing(field: &FieldDef, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) if field.field_type == FieldType::Slug => map
            .get("current")
            .and_then(Value::as_str)
            .map_or(true, str::is_empty),
        _ => false,
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
