use super::{FieldDef, FieldType, SlugOptions};
use serde::{Deserialize, Serialize};

/// Field names the host reads to render a document in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentKind {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewSelect>,
}

impl DocumentKind {
    pub fn new(name: &str, title: &str, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            fields,
            preview: None,
        }
    }

    pub fn with_preview(mut self, title: &str, subtitle: Option<&str>, media: Option<&str>) -> Self {
        self.preview = Some(PreviewSelect {
            title: Some(title.to_string()),
            subtitle: subtitle.map(str::to_string),
            media: media.map(str::to_string),
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The first slug field together with its options.
    pub fn slug_field(&self) -> Option<(&FieldDef, &SlugOptions)> {
        self.fields
            .iter()
            .filter(|f| f.field_type == FieldType::Slug)
            .find_map(|f| f.options.slug.as_ref().map(|opts| (f, opts)))
    }
}
