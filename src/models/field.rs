use super::Rule;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Number,
    Slug,
    Datetime,
    Image,
    Url,
    Object,
    Array,
    Reference,
}

impl FromStr for FieldType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "slug" => Ok(Self::Slug),
            "datetime" => Ok(Self::Datetime),
            "image" => Ok(Self::Image),
            "url" => Ok(Self::Url),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "reference" => Ok(Self::Reference),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Slug => write!(f, "slug"),
            Self::Datetime => write!(f, "datetime"),
            Self::Image => write!(f, "image"),
            Self::Url => write!(f, "url"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Radio,
    Dropdown,
}

/// One picker entry. `value` is what gets persisted, `title` is display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub title: String,
    pub value: String,
}

impl OptionItem {
    pub fn new(title: &str, value: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
        }
    }

    /// Entry whose display label is the value itself.
    pub fn plain(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Where a slug field takes its source string from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlugSource {
    /// A single field, used as-is.
    Field { field: String },
    /// `"{identifier}-{title}"`, or the title alone when the identifier is absent.
    #[serde(rename_all = "camelCase")]
    IdentifierAndTitle {
        identifier_field: String,
        title_field: String,
    },
}

impl SlugSource {
    pub fn field(name: &str) -> Self {
        Self::Field {
            field: name.to_string(),
        }
    }

    pub fn identifier_and_title(identifier_field: &str, title_field: &str) -> Self {
        Self::IdentifierAndTitle {
            identifier_field: identifier_field.to_string(),
            title_field: title_field.to_string(),
        }
    }

    pub fn referenced_fields(&self) -> Vec<&str> {
        match self {
            Self::Field { field } => vec![field.as_str()],
            Self::IdentifierAndTitle {
                identifier_field,
                title_field,
            } => vec![identifier_field.as_str(), title_field.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugOptions {
    pub source: SlugSource,
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceOptions {
    pub to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<OptionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hotspot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<SlugOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceOptions>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
            && self.layout.is_none()
            && !self.hotspot
            && self.slug.is_none()
            && self.reference.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialValue {
    /// Current UTC time at document creation.
    Now,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Empty for anonymous array members such as `{ type: "string" }`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<InitialValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "FieldOptions::is_empty")]
    pub options: FieldOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<FieldDef>,
}

impl FieldDef {
    pub fn new(name: &str, title: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            field_type,
            description: None,
            read_only: false,
            initial_value: None,
            rules: Vec::new(),
            options: FieldOptions::default(),
            fields: Vec::new(),
            of: Vec::new(),
        }
    }

    /// Anonymous array member of the given type.
    pub fn member(field_type: FieldType) -> Self {
        Self::new("", "", field_type)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_initial_value(mut self, value: InitialValue) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn required(self) -> Self {
        self.with_rules([Rule::Required])
    }

    pub fn with_list(mut self, list: Vec<OptionItem>) -> Self {
        self.options.list = list;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.options.layout = Some(layout);
        self
    }

    pub fn with_hotspot(mut self) -> Self {
        self.options.hotspot = true;
        self
    }

    pub fn with_slug(mut self, source: SlugSource, max_length: usize) -> Self {
        self.options.slug = Some(SlugOptions { source, max_length });
        self
    }

    pub fn with_reference(mut self, reference: ReferenceOptions) -> Self {
        self.options.reference = Some(reference);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDef>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_members(mut self, of: Vec<FieldDef>) -> Self {
        self.of = of;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
