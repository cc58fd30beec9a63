use super::{options, shared};
use crate::models::{DocumentKind, FieldDef, FieldType, Layout, Rule, SlugSource};

pub const NAME: &str = "articles";

pub fn articles() -> DocumentKind {
    DocumentKind::new(
        NAME,
        "Articles",
        vec![
            shared::title(),
            FieldDef::new("content_id", "Content ID", FieldType::Number).with_rules([
                Rule::Required,
                Rule::Integer,
                Rule::Positive,
            ]),
            shared::slug(SlugSource::identifier_and_title("content_id", "title")),
            FieldDef::new("articleType", "Article Type", FieldType::String)
                .with_list(options::titled(&options::ARTICLE_TYPES))
                .with_layout(Layout::Radio)
                .required(),
            shared::text("body", "Body", None),
            shared::text("advanced", "Advanced Concepts", None),
            shared::text("clinical", "Clinical Relevance", None),
            shared::text("references", "References", None),
            shared::text("simplified", "Simplified Version", None),
            FieldDef::new("chapter_id", "Chapter ID", FieldType::String).required(),
            shared::article_reference("previousArticle", "Previous Article"),
            shared::article_reference("nextArticle", "Next Article"),
            shared::article_reference("parentArticle", "Parent Article"),
            seo(),
        ],
    )
}

fn seo() -> FieldDef {
    FieldDef::new("seo", "SEO Metadata", FieldType::Object).with_fields(vec![
        FieldDef::new("metaTitle", "Meta Title", FieldType::String).with_rules([Rule::Max(60.0)]),
        FieldDef::new("metaDescription", "Meta Description", FieldType::Text)
            .with_rules([Rule::Max(160.0)]),
        FieldDef::new("ogImage", "Open Graph Image", FieldType::Image).with_hotspot(),
        FieldDef::new("ogType", "Open Graph Type", FieldType::String)
            .with_list(options::plain(&options::OPEN_GRAPH_TYPES))
            .with_layout(Layout::Radio),
        FieldDef::new("metaRobots", "Meta Robots", FieldType::String)
            .with_list(options::plain(&options::META_ROBOTS)),
    ])
}
