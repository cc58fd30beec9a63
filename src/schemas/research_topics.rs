use super::{options, shared};
use crate::models::{DocumentKind, FieldDef, FieldType, ReferenceOptions, Rule, SlugSource};

pub const NAME: &str = "researchTopics";

pub fn research_topics() -> DocumentKind {
    DocumentKind::new(
        NAME,
        "Research Topics",
        vec![
            FieldDef::new("id", "ID", FieldType::Number)
                .read_only()
                .with_description("Auto-incremented unique identifier"),
            shared::title(),
            shared::slug(SlugSource::field("title")),
            shared::created_at(),
            FieldDef::new("category", "Category", FieldType::String)
                .with_list(options::plain(&options::RESEARCH_CATEGORIES))
                .required()
                .with_description("Select one of the predefined categories"),
            FieldDef::new("researchType", "Type", FieldType::String)
                .with_list(options::plain(&options::RESEARCH_TYPES))
                .required()
                .with_description("Select one of the predefined categories"),
            shared::text("teaser", "Teaser", Some("Short description of the topic")),
            shared::text(
                "simplified",
                "Simplified Explanation",
                Some("A simplified version of the topic"),
            ),
            shared::text("body", "Body", Some("Detailed description of the topic")),
            shared::inline_images("h2"),
            FieldDef::new("relatedTopics", "Related Topics", FieldType::Array)
                .with_members(vec![FieldDef::member(FieldType::Reference).with_reference(
                    ReferenceOptions {
                        to: vec!["articles".to_string()],
                        filter: Some("title != null".to_string()),
                        search_field: Some("title".to_string()),
                    },
                )])
                .with_rules([Rule::Required, Rule::Min(1.0)])
                .with_description("Select one or more related articles."),
            shared::seo_with_keywords(),
        ],
    )
    .with_preview("title", Some("teaser"), Some("image"))
}
