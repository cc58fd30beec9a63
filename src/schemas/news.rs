use super::shared;
use crate::models::{DocumentKind, FieldDef, FieldType, SlugSource};

pub const NAME: &str = "news";

pub fn news() -> DocumentKind {
    DocumentKind::new(
        NAME,
        "News",
        vec![
            FieldDef::new("id", "ID", FieldType::Number)
                .read_only()
                .with_description("Auto-incremented unique identifier"),
            shared::title(),
            shared::slug(SlugSource::field("title")),
            shared::created_at(),
            shared::news_category(),
            shared::text("teaser", "Teaser", Some("Short description of the topic")),
            shared::text(
                "simplified",
                "Simplified Explanation",
                Some("A simplified version of the topic"),
            ),
            shared::text("body", "Body", Some("Detailed description of the topic")),
            shared::inline_images("p"),
            FieldDef::new("headerImage", "Header Image", FieldType::Image)
                .with_description("Image to appear at the top of the article"),
            FieldDef::new("externalLinks", "External Links", FieldType::Array)
                .with_description("Links for additional reading")
                .with_members(vec![FieldDef::new(
                    "externalLink",
                    "External Link",
                    FieldType::Object,
                )
                .with_fields(vec![
                    FieldDef::new("title", "Title", FieldType::String),
                    FieldDef::new("url", "URL", FieldType::Url),
                ])]),
            shared::seo_with_keywords(),
        ],
    )
    .with_preview("title", Some("teaser"), Some("image"))
}
