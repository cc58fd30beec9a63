use crate::models::{DocumentKind, InitialValue, SlugSource};
use crate::services::slug::{compose_source, slugify, Identifier};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Fills absent or null top-level fields that declare an initial value.
/// Returns the names of the fields that were set.
pub fn apply_initial_values(kind: &DocumentKind, doc: &mut Value, now: DateTime<Utc>) -> Vec<String> {
    let Some(map) = doc.as_object_mut() else {
        return Vec::new();
    };

    let mut applied = Vec::new();
    for field in &kind.fields {
        let Some(initial) = field.initial_value else {
            continue;
        };
        if map.get(&field.name).is_some_and(|v| !v.is_null()) {
            continue;
        }
        let value = match initial {
            InitialValue::Now => Value::String(iso_timestamp(now)),
        };
        map.insert(field.name.clone(), value);
        applied.push(field.name.clone());
    }

    if !applied.is_empty() {
        tracing::debug!("Applied initial values on {}: {}", kind.name, applied.join(", "));
    }
    applied
}

/// `2024-03-01T09:30:00.000Z`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The source string the kind's slug is derived from, or `None` when the
/// kind has no slug field.
pub fn document_slug_source(kind: &DocumentKind, doc: &Value) -> Option<String> {
    let (_, opts) = kind.slug_field()?;
    let source = match &opts.source {
        SlugSource::Field { field } => text_of(doc.get(field)).unwrap_or_default(),
        SlugSource::IdentifierAndTitle {
            identifier_field,
            title_field,
        } => {
            let identifier = doc.get(identifier_field).and_then(Identifier::from_json);
            let title = text_of(doc.get(title_field));
            compose_source(identifier.as_ref(), title.as_deref())
        }
    };
    Some(source)
}

pub fn derive_document_slug(kind: &DocumentKind, doc: &Value) -> Option<String> {
    let (_, opts) = kind.slug_field()?;
    let source = document_slug_source(kind, doc)?;
    Some(slugify(&source, opts.max_length))
}

/// Derives the slug and stores it in the host's slug shape. Returns `None`
/// without touching the document when the kind has no slug field or the
/// document is not an object.
pub fn fill_slug(kind: &DocumentKind, doc: &mut Value) -> Option<String> {
    let (field, _) = kind.slug_field()?;
    let name = field.name.clone();
    let slug = derive_document_slug(kind, doc)?;
    let map = doc.as_object_mut()?;
    map.insert(name, json!({ "_type": "slug", "current": slug }));
    tracing::debug!("Filled slug '{}' on {}", slug, kind.name);
    Some(slug)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preview {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub media: Option<Value>,
}

pub fn preview(kind: &DocumentKind, doc: &Value) -> Preview {
    let empty = Map::new();
    let map = doc.as_object().unwrap_or(&empty);
    let select = |name: Option<&String>| name.and_then(|n| map.get(n)).filter(|v| !v.is_null());

    match &kind.preview {
        Some(p) => Preview {
            title: text_of(select(p.title.as_ref())),
            subtitle: text_of(select(p.subtitle.as_ref())),
            media: select(p.media.as_ref()).cloned(),
        },
        None => Preview {
            title: text_of(map.get("title")),
            ..Preview::default()
        },
    }
}

fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
