use super::options;
use crate::models::{FieldDef, FieldType, InitialValue, ReferenceOptions, Rule, SlugSource};
use crate::services::slug::DEFAULT_SLUG_MAX_LENGTH;

pub fn title() -> FieldDef {
    FieldDef::new("title", "Title", FieldType::String).required()
}

pub fn slug(source: SlugSource) -> FieldDef {
    FieldDef::new("slug", "Slug", FieldType::Slug)
        .with_slug(source, DEFAULT_SLUG_MAX_LENGTH)
        .required()
}

pub fn created_at() -> FieldDef {
    FieldDef::new("createdAt", "Created At", FieldType::Datetime)
        .with_initial_value(InitialValue::Now)
        .with_description("Date when this document was created")
}

pub fn news_category() -> FieldDef {
    FieldDef::new("category", "Category", FieldType::String)
        .with_list(options::titled(&options::NEWS_CATEGORIES))
        .required()
        .with_description("Select one of the predefined categories")
}

pub fn text(name: &str, title: &str, description: Option<&str>) -> FieldDef {
    let field = FieldDef::new(name, title, FieldType::Text);
    match description {
        Some(d) => field.with_description(d),
        None => field,
    }
}

/// Up to three inline images, each placed before the nth `anchor` element of
/// the body.
pub fn inline_images(anchor: &str) -> FieldDef {
    let image_object = FieldDef::new("imageObject", "Image Object", FieldType::Object).with_fields(vec![
        FieldDef::new("image", "Image", FieldType::Image)
            .with_hotspot()
            .with_fields(vec![FieldDef::new("caption", "Caption", FieldType::String)
                .with_description("Optional HTML caption for the image")]),
        FieldDef::new("position", "Image Position", FieldType::Number).with_description(&format!(
            "Place the image before the nth <{}> element in the body.",
            anchor
        )),
    ]);

    FieldDef::new("images", "Images", FieldType::Array)
        .with_members(vec![image_object])
        .with_rules([Rule::Max(3.0)])
}

pub fn string_array(name: &str, title: &str) -> FieldDef {
    FieldDef::new(name, title, FieldType::Array).with_members(vec![FieldDef::member(FieldType::String)])
}

/// SEO block shared by news, podcasts and research topics.
pub fn seo_with_keywords() -> FieldDef {
    FieldDef::new("seo", "SEO", FieldType::Object).with_fields(vec![
        FieldDef::new("metaTitle", "Meta Title", FieldType::String),
        FieldDef::new("metaDescription", "Meta Description", FieldType::Text),
        string_array("keywords", "Keywords"),
    ])
}

pub fn article_reference(name: &str, title: &str) -> FieldDef {
    FieldDef::new(name, title, FieldType::Reference).with_reference(ReferenceOptions {
        to: vec!["articles".to_string()],
        filter: None,
        search_field: None,
    })
}
