use super::shared;
use crate::models::{DocumentKind, FieldDef, FieldType, SlugSource};

pub const NAME: &str = "podcast";

pub fn podcast() -> DocumentKind {
    DocumentKind::new(
        NAME,
        "Podcast",
        vec![
            FieldDef::new("id", "ID", FieldType::Number)
                .required()
                .with_description("Use it as a unique identifier"),
            shared::title(),
            shared::slug(SlugSource::identifier_and_title("id", "title")),
            shared::created_at(),
            shared::news_category(),
            shared::text(
                "description",
                "Description",
                Some("A brief summary of the episode"),
            ),
            FieldDef::new("audioUrl", "Audio URL", FieldType::Url)
                .with_description("Link to the podcast audio file"),
            FieldDef::new("duration", "Duration (minutes)", FieldType::Number)
                .with_description("Length of the episode in minutes"),
            FieldDef::new("coverImage", "Cover Image", FieldType::Image)
                .with_description("Image to appear at the top of the article"),
            shared::string_array("tags", "Tags")
                .with_description("Keywords or tags for categorizing the episode"),
            shared::string_array("guests", "Guests")
                .with_description("Names of guests featured in the episode"),
            shared::seo_with_keywords(),
        ],
    )
    .with_preview("title", None, Some("headerImage"))
}
