#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{
            compose_source, derive_slug, is_valid_slug, slugify, Identifier,
        };

        fn id(n: i64) -> Identifier {
            Identifier::from(n)
        }

        #[test]
        fn test_derive_slug_with_identifier() {
            assert_eq!(derive_slug(Some(&id(42)), Some("Hello World")), "42-hello-world");
        }

        #[test]
        fn test_derive_slug_strips_punctuation() {
            assert_eq!(derive_slug(None, Some("Hello, World!")), "hello-world");
        }

        #[test]
        fn test_derive_slug_all_absent() {
            assert_eq!(derive_slug(None, None), "");
        }

        #[test]
        fn test_derive_slug_keeps_trailing_separator_without_title() {
            assert_eq!(derive_slug(Some(&id(7)), None), "7-");
        }

        #[test]
        fn test_derive_slug_empty_text_identifier_is_absent() {
            let empty = Identifier::Text(String::new());
            assert_eq!(derive_slug(Some(&empty), Some("Spin Echo")), "spin-echo");
        }

        #[test]
        fn test_derive_slug_zero_identifier_is_present() {
            assert_eq!(derive_slug(Some(&id(0)), Some("Intro")), "0-intro");
        }

        #[test]
        fn test_derive_slug_text_identifier() {
            let text = Identifier::from("A12");
            assert_eq!(derive_slug(Some(&text), Some("T1 Weighting")), "a12-t1-weighting");
        }

        #[test]
        fn test_integral_float_identifier_renders_as_integer() {
            assert_eq!(Identifier::Float(42.0).to_string(), "42");
            assert_eq!(
                derive_slug(Some(&Identifier::Float(42.0)), Some("Hello")),
                "42-hello"
            );
        }

        #[test]
        fn test_float_identifier_rendering() {
            let render = |n: f64| Identifier::Float(n).to_string();
            assert_eq!(render(18446744073709551615.0), "18446744073709552000");
            assert_eq!(render(1e20), "100000000000000000000");
            assert_eq!(render(1e21), "1e+21");
            assert_eq!(render(1.5e22), "1.5e+22");
            assert_eq!(render(0.000001), "0.000001");
            assert_eq!(render(1e-7), "1e-7");
            assert_eq!(render(-0.0), "0");
            assert_eq!(render(-2.5), "-2.5");
        }

        #[test]
        fn test_large_json_identifier() {
            use serde_json::json;
            let big = Identifier::from_json(&json!(18446744073709551615u64)).unwrap();
            assert_eq!(derive_slug(Some(&big), Some("Echo")), "18446744073709552000-echo");
        }

        #[test]
        fn test_fractional_identifier_loses_its_dot() {
            assert_eq!(derive_slug(Some(&Identifier::Float(1.5)), Some("x")), "15-x");
        }

        #[test]
        fn test_slugify_multiple_spaces() {
            assert_eq!(slugify("Hello   World", 200), "hello-world");
        }

        #[test]
        fn test_slugify_leading_trailing_spaces_become_hyphens() {
            assert_eq!(slugify("  Hello World  ", 200), "-hello-world-");
        }

        #[test]
        fn test_slugify_tabs_and_newlines() {
            assert_eq!(slugify("Hello\tWorld\nAgain", 200), "hello-world-again");
        }

        #[test]
        fn test_slugify_byte_order_mark_is_whitespace() {
            assert_eq!(slugify("Hello\u{FEFF}World", 200), "hello-world");
        }

        #[test]
        fn test_slugify_next_line_is_not_whitespace() {
            assert_eq!(slugify("a\u{85}b", 200), "ab");
            assert_eq!(slugify("a\u{180E}b", 200), "ab");
        }

        #[test]
        fn test_slugify_unicode_spaces() {
            assert_eq!(slugify("a\u{A0}b\u{2003}c\u{3000}d\u{2028}e", 200), "a-b-c-d-e");
            assert_eq!(slugify("a\x0B\x0Cb", 200), "a-b");
        }

        #[test]
        fn test_slugify_hyphen_surrounded_by_spaces() {
            assert_eq!(slugify("a - b", 200), "a---b");
        }

        #[test]
        fn test_slugify_drops_non_ascii_letters() {
            assert_eq!(slugify("Café au lait", 200), "caf-au-lait");
        }

        #[test]
        fn test_slugify_keeps_underscores() {
            assert_eq!(slugify("snake_case Title", 200), "snake_case-title");
        }

        #[test]
        fn test_slugify_only_special_characters() {
            assert_eq!(slugify("!!! ???", 200), "-");
            assert_eq!(slugify("&%$", 200), "");
        }

        #[test]
        fn test_slugify_truncates() {
            let long = "a".repeat(300);
            assert_eq!(slugify(&long, 200).len(), 200);
            assert_eq!(slugify("abcdef", 3), "abc");
        }

        #[test]
        fn test_derive_slug_length_bound() {
            let title = "Word ".repeat(100);
            let slug = derive_slug(Some(&id(123456)), Some(&title));
            assert_eq!(slug.len(), 200);
            assert!(slug.starts_with("123456-word-word"));
        }

        #[test]
        fn test_slugify_idempotent_on_slugs() {
            for slug in ["hello-world", "42-hello-world", "snake_case-1", "7-"] {
                assert_eq!(slugify(slug, 200), slug);
            }
        }

        #[test]
        fn test_derive_slug_case_invariant() {
            assert_eq!(
                derive_slug(Some(&id(3)), Some("ABC")),
                derive_slug(Some(&id(3)), Some("abc"))
            );
        }

        #[test]
        fn test_derive_slug_deterministic() {
            let first = derive_slug(Some(&id(9)), Some("Diffusion Tensor Imaging"));
            for _ in 0..10 {
                assert_eq!(derive_slug(Some(&id(9)), Some("Diffusion Tensor Imaging")), first);
            }
        }

        #[test]
        fn test_compose_source() {
            assert_eq!(compose_source(Some(&id(5)), Some("Title")), "5-Title");
            assert_eq!(compose_source(None, Some("Title")), "Title");
            assert_eq!(compose_source(Some(&id(5)), None), "5-");
        }

        #[test]
        fn test_identifier_from_json() {
            use serde_json::json;
            assert_eq!(Identifier::from_json(&json!(12)), Some(id(12)));
            assert_eq!(Identifier::from_json(&json!("x")), Some(Identifier::from("x")));
            assert_eq!(Identifier::from_json(&json!(null)), None);
            assert_eq!(Identifier::from_json(&json!(true)), None);
        }

        #[test]
        fn test_is_valid_slug() {
            assert!(is_valid_slug("hello-world", 200));
            assert!(is_valid_slug("42-hello_world", 200));
            assert!(is_valid_slug("7-", 200));
            assert!(!is_valid_slug("", 200));
            assert!(!is_valid_slug("Hello-World", 200));
            assert!(!is_valid_slug("hello world", 200));
            assert!(!is_valid_slug(&"a".repeat(201), 200));
            assert!(is_valid_slug(&"a".repeat(200), 200));
        }
    }

    mod schema_tests {
        use crate::models::{FieldType, Layout, OptionItem, Rule, SlugSource};
        use crate::schemas::{find_kind, options, schema_types, SchemaError, SchemaTable};

        #[test]
        fn test_registration_order() {
            let names: Vec<&str> = schema_types().iter().map(|k| k.name.as_str()).collect();
            assert_eq!(names, ["articles", "researchTopics", "news", "podcast"]);
        }

        #[test]
        fn test_builtin_table_is_sound() {
            let problems = SchemaTable::builtin().check();
            assert!(problems.is_empty(), "unexpected problems: {:?}", problems);
        }

        #[test]
        fn test_unknown_kind() {
            let err = find_kind("blog").unwrap_err();
            assert!(matches!(err, SchemaError::UnknownKind { .. }));
            assert!(err.to_string().contains("articles, researchTopics, news, podcast"));
        }

        #[test]
        fn test_article_content_id_rules() {
            let articles = find_kind("articles").unwrap();
            let content_id = articles.field("content_id").unwrap();
            assert_eq!(content_id.field_type, FieldType::Number);
            assert_eq!(content_id.rules, [Rule::Required, Rule::Integer, Rule::Positive]);
        }

        #[test]
        fn test_slug_sources() {
            let source = |kind: &str| find_kind(kind).unwrap().slug_field().unwrap().1.source.clone();
            assert_eq!(source("articles"), SlugSource::identifier_and_title("content_id", "title"));
            assert_eq!(source("podcast"), SlugSource::identifier_and_title("id", "title"));
            assert_eq!(source("news"), SlugSource::field("title"));
            assert_eq!(source("researchTopics"), SlugSource::field("title"));
        }

        #[test]
        fn test_slug_max_length_is_200() {
            for kind in schema_types() {
                let (field, opts) = kind.slug_field().unwrap();
                assert_eq!(opts.max_length, 200);
                assert!(field.is_required());
            }
        }

        #[test]
        fn test_article_type_values() {
            let field = find_kind("articles").unwrap().field("articleType").unwrap().clone();
            let values: Vec<&str> = field.options.list.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, ["part", "chapter", "section", "sub-section", "topic"]);
            assert_eq!(field.options.layout, Some(Layout::Radio));
        }

        #[test]
        fn test_news_and_podcast_share_categories() {
            let news = find_kind("news").unwrap().field("category").unwrap();
            let podcast = find_kind("podcast").unwrap().field("category").unwrap();
            assert_eq!(news.options.list, podcast.options.list);
            assert_eq!(news.options.list[2].value, "rnd");
            assert_eq!(news.options.list[2].title, "Research & Development");
        }

        #[test]
        fn test_research_values_are_labels() {
            let kind = find_kind("researchTopics").unwrap();
            let category = kind.field("category").unwrap();
            assert!(category.options.list.iter().all(|o| o.title == o.value));
            assert!(category.options.list.iter().any(|o| o.value == "MRI Safety"));
            let research_type = kind.field("researchType").unwrap();
            assert_eq!(research_type.options.list.len(), options::RESEARCH_TYPES.len());
        }

        #[test]
        fn test_related_topics_reference_articles() {
            let field = find_kind("researchTopics").unwrap().field("relatedTopics").unwrap().clone();
            assert_eq!(field.rules, [Rule::Required, Rule::Min(1.0)]);
            let member = &field.of[0];
            assert_eq!(member.field_type, FieldType::Reference);
            let reference = member.options.reference.as_ref().unwrap();
            assert_eq!(reference.to, ["articles"]);
            assert_eq!(reference.filter.as_deref(), Some("title != null"));
        }

        #[test]
        fn test_article_navigation_references() {
            let articles = find_kind("articles").unwrap();
            for name in ["previousArticle", "nextArticle", "parentArticle"] {
                let field = articles.field(name).unwrap();
                assert_eq!(field.field_type, FieldType::Reference);
                assert_eq!(field.options.reference.as_ref().unwrap().to, ["articles"]);
            }
        }

        #[test]
        fn test_article_seo_block() {
            let seo = find_kind("articles").unwrap().field("seo").unwrap().clone();
            assert_eq!(seo.field("metaTitle").unwrap().rules, [Rule::Max(60.0)]);
            assert_eq!(seo.field("metaDescription").unwrap().rules, [Rule::Max(160.0)]);
            assert!(seo.field("ogImage").unwrap().options.hotspot);
            let robots = seo.field("metaRobots").unwrap();
            assert_eq!(robots.options.list[1].value, "noindex, follow");
        }

        #[test]
        fn test_check_reports_broken_table() {
            let mut table = SchemaTable::builtin();
            table.types.truncate(2);
            let research = &mut table.types[1];
            let duplicate = research.fields[1].clone();
            research.fields.push(duplicate);
            table.types[0].name = "posts".to_string();

            let problems = table.check();
            let messages: Vec<String> = problems.iter().map(|p| p.to_string()).collect();
            assert!(messages.iter().any(|m| m == "researchTopics.title: duplicate field name"));
            assert!(messages
                .iter()
                .any(|m| m.contains("reference target 'articles' is not a document kind")));
        }

        #[test]
        fn test_check_reports_missing_slug_source() {
            let mut table = SchemaTable::builtin();
            table.types[0].fields.retain(|f| f.name != "content_id");
            let problems = table.check();
            assert_eq!(problems.len(), 1);
            assert_eq!(
                problems[0].to_string(),
                "articles.slug: slug source field 'content_id' does not exist"
            );
        }

        #[test]
        fn test_check_reports_duplicate_kind() {
            let mut table = SchemaTable::builtin();
            let duplicate = table.types[0].clone();
            table.types.push(duplicate);
            let problems = table.check();
            assert_eq!(problems.len(), 1);
            assert_eq!(problems[0].to_string(), "articles: duplicate document kind");
        }

        #[test]
        fn test_check_reports_duplicate_option_value() {
            let mut table = SchemaTable::builtin();
            let article_type = table.types[0]
                .fields
                .iter_mut()
                .find(|f| f.name == "articleType")
                .unwrap();
            article_type.options.list.push(OptionItem::new("Part (again)", "part"));
            let problems = table.check();
            assert_eq!(problems.len(), 1);
            assert_eq!(
                problems[0].to_string(),
                "articles.articleType: duplicate option value 'part'"
            );
        }

        #[test]
        fn test_field_type_from_str() {
            for ty in [FieldType::String, FieldType::Slug, FieldType::Reference] {
                assert_eq!(ty.to_string().parse::<FieldType>(), Ok(ty));
            }
            assert_eq!("Datetime".parse::<FieldType>(), Ok(FieldType::Datetime));
            assert!("portableText".parse::<FieldType>().is_err());
        }

        #[test]
        fn test_check_reports_min_above_max() {
            let mut table = SchemaTable::builtin();
            let images = table.types[2]
                .fields
                .iter_mut()
                .find(|f| f.name == "images")
                .unwrap();
            images.rules.push(Rule::Min(5.0));
            let problems = table.check();
            assert_eq!(problems.len(), 1);
            assert_eq!(problems[0].path, "images");
        }
    }

    mod document_tests {
        use crate::schemas::find_kind;
        use crate::services::document::{
            apply_initial_values, derive_document_slug, document_slug_source, fill_slug, preview,
        };
        use chrono::{TimeZone, Utc};
        use serde_json::json;

        #[test]
        fn test_initial_values_fill_created_at() {
            let news = find_kind("news").unwrap();
            let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
            let mut doc = json!({ "title": "Hello" });
            let applied = apply_initial_values(news, &mut doc, now);
            assert_eq!(applied, ["createdAt"]);
            assert_eq!(doc["createdAt"], "2024-03-01T09:30:00.000Z");
        }

        #[test]
        fn test_initial_values_do_not_overwrite() {
            let podcast = find_kind("podcast").unwrap();
            let mut doc = json!({ "createdAt": "2020-01-01T00:00:00.000Z" });
            let applied = apply_initial_values(podcast, &mut doc, Utc::now());
            assert!(applied.is_empty());
            assert_eq!(doc["createdAt"], "2020-01-01T00:00:00.000Z");
        }

        #[test]
        fn test_initial_values_replace_null() {
            let research = find_kind("researchTopics").unwrap();
            let mut doc = json!({ "createdAt": null });
            assert_eq!(apply_initial_values(research, &mut doc, Utc::now()).len(), 1);
            assert!(doc["createdAt"].is_string());
        }

        #[test]
        fn test_articles_have_no_initial_values() {
            let articles = find_kind("articles").unwrap();
            let mut doc = json!({});
            assert!(apply_initial_values(articles, &mut doc, Utc::now()).is_empty());
            assert_eq!(doc, json!({}));
        }

        #[test]
        fn test_article_slug_uses_content_id() {
            let articles = find_kind("articles").unwrap();
            let doc = json!({ "content_id": 42, "title": "Hello World" });
            assert_eq!(document_slug_source(articles, &doc).unwrap(), "42-Hello World");
            assert_eq!(derive_document_slug(articles, &doc).unwrap(), "42-hello-world");
        }

        #[test]
        fn test_news_slug_ignores_id() {
            let news = find_kind("news").unwrap();
            let doc = json!({ "id": 3, "title": "New 7T Scanner!" });
            assert_eq!(derive_document_slug(news, &doc).unwrap(), "new-7t-scanner");
        }

        #[test]
        fn test_podcast_slug_without_title() {
            let podcast = find_kind("podcast").unwrap();
            assert_eq!(derive_document_slug(podcast, &json!({ "id": 7 })).unwrap(), "7-");
        }

        #[test]
        fn test_slug_of_empty_document() {
            let articles = find_kind("articles").unwrap();
            assert_eq!(derive_document_slug(articles, &json!({})).unwrap(), "");
        }

        #[test]
        fn test_fill_slug_writes_slug_object() {
            let podcast = find_kind("podcast").unwrap();
            let mut doc = json!({ "id": 7, "title": "Gradient Echo Basics" });
            let slug = fill_slug(podcast, &mut doc).unwrap();
            assert_eq!(slug, "7-gradient-echo-basics");
            assert_eq!(
                doc["slug"],
                json!({ "_type": "slug", "current": "7-gradient-echo-basics" })
            );
        }

        #[test]
        fn test_fill_slug_rejects_non_object() {
            let news = find_kind("news").unwrap();
            let mut doc = json!(["not", "a", "document"]);
            assert!(fill_slug(news, &mut doc).is_none());
        }

        #[test]
        fn test_preview_news() {
            let news = find_kind("news").unwrap();
            let doc = json!({ "title": "Scanner", "teaser": "A new scanner" });
            let p = preview(news, &doc);
            assert_eq!(p.title.as_deref(), Some("Scanner"));
            assert_eq!(p.subtitle.as_deref(), Some("A new scanner"));
            assert!(p.media.is_none());
        }

        #[test]
        fn test_preview_podcast_media() {
            let podcast = find_kind("podcast").unwrap();
            let image = json!({ "_type": "image", "asset": { "_ref": "image-1" } });
            let doc = json!({ "title": "Episode 1", "headerImage": image.clone() });
            let p = preview(podcast, &doc);
            assert_eq!(p.title.as_deref(), Some("Episode 1"));
            assert_eq!(p.subtitle, None);
            assert_eq!(p.media, Some(image));
        }

        #[test]
        fn test_preview_falls_back_to_title() {
            let articles = find_kind("articles").unwrap();
            let p = preview(articles, &json!({ "title": "Relaxation" }));
            assert_eq!(p.title.as_deref(), Some("Relaxation"));
        }
    }

    mod validation_tests {
        use crate::schemas::find_kind;
        use crate::services::document::fill_slug;
        use crate::services::validation::{
            validate_document, DocumentLookup, ValidationIssue, ValidationOptions,
        };
        use serde_json::{json, Value};
        use std::collections::HashMap;

        fn valid_article() -> Value {
            json!({
                "_id": "art-1",
                "_type": "articles",
                "title": "Spin Echo",
                "content_id": 42,
                "slug": { "_type": "slug", "current": "42-spin-echo" },
                "articleType": "chapter",
                "chapter_id": "ch-1",
                "seo": { "metaTitle": "Spin echo basics", "ogType": "article" }
            })
        }

        fn validate(kind: &str, doc: &Value) -> Vec<ValidationIssue> {
            validate_document(find_kind(kind).unwrap(), doc, &ValidationOptions::default(), None)
        }

        fn paths(issues: &[ValidationIssue]) -> Vec<&str> {
            issues.iter().map(|i| i.path.as_str()).collect()
        }

        #[test]
        fn test_valid_article() {
            assert!(validate("articles", &valid_article()).is_empty());
        }

        #[test]
        fn test_empty_article_reports_required_fields() {
            let issues = validate("articles", &json!({}));
            assert_eq!(
                paths(&issues),
                ["title", "content_id", "slug", "articleType", "chapter_id"]
            );
            assert!(issues.iter().all(|i| i.message == "is required"));
        }

        #[test]
        fn test_non_object_document() {
            let issues = validate("news", &json!("hello"));
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].path, "");
        }

        #[test]
        fn test_content_id_must_be_positive_integer() {
            let mut doc = valid_article();
            doc["content_id"] = json!(-3.5);
            let issues = validate("articles", &doc);
            let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
            assert_eq!(messages, ["must be an integer", "must be a positive number"]);
        }

        #[test]
        fn test_content_id_must_be_number() {
            let mut doc = valid_article();
            doc["content_id"] = json!("42");
            assert_eq!(validate("articles", &doc)[0].message, "expected a number");
        }

        #[test]
        fn test_option_value_must_match() {
            let mut doc = valid_article();
            doc["articleType"] = json!("Chapter");
            let issues = validate("articles", &doc);
            assert_eq!(issues.len(), 1);
            assert!(issues[0].message.starts_with("'Chapter' is not one of: part | chapter"));
        }

        #[test]
        fn test_meta_title_length() {
            let mut doc = valid_article();
            doc["seo"]["metaTitle"] = json!("x".repeat(61));
            let issues = validate("articles", &doc);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].to_string(), "seo.metaTitle: must have at most 60 characters");
        }

        #[test]
        fn test_empty_slug_is_rejected() {
            let mut doc = valid_article();
            doc["slug"] = json!({ "_type": "slug", "current": "" });
            let issues = validate("articles", &doc);
            assert_eq!(issues[0].to_string(), "slug: is required");
        }

        #[test]
        fn test_malformed_slug_is_rejected() {
            let mut doc = valid_article();
            doc["slug"] = json!({ "_type": "slug", "current": "Spin Echo" });
            let issues = validate("articles", &doc);
            assert_eq!(paths(&issues), ["slug"]);
            assert!(issues[0].message.contains("lowercase letters"));
        }

        #[test]
        fn test_filled_slug_validates() {
            let articles = find_kind("articles").unwrap();
            let mut doc = valid_article();
            doc["title"] = json!("T2* Relaxation, Explained");
            fill_slug(articles, &mut doc);
            assert_eq!(doc["slug"]["current"], "42-t2-relaxation-explained");
            assert!(validate("articles", &doc).is_empty());
        }

        fn valid_news() -> Value {
            json!({
                "title": "New Scanner",
                "slug": { "_type": "slug", "current": "new-scanner" },
                "category": "equipment",
                "createdAt": "2024-03-01T09:30:00.000Z"
            })
        }

        #[test]
        fn test_too_many_images() {
            let mut doc = valid_news();
            let image = json!({ "_type": "imageObject", "position": 1 });
            doc["images"] = json!([image.clone(), image.clone(), image.clone(), image]);
            let issues = validate("news", &doc);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].to_string(), "images: must have at most 3 items");
        }

        #[test]
        fn test_nested_image_position_type() {
            let mut doc = valid_news();
            doc["images"] = json!([{ "_type": "imageObject", "position": "first" }]);
            let issues = validate("news", &doc);
            assert_eq!(issues[0].to_string(), "images[0].position: expected a number");
        }

        #[test]
        fn test_external_link_url() {
            let mut doc = valid_news();
            doc["externalLinks"] = json!([
                { "_type": "externalLink", "title": "Docs", "url": "https://example.com/mri" },
                { "_type": "externalLink", "title": "Broken", "url": "not a url" }
            ]);
            let issues = validate("news", &doc);
            assert_eq!(paths(&issues), ["externalLinks[1].url"]);
        }

        #[test]
        fn test_created_at_format() {
            let mut doc = valid_news();
            doc["createdAt"] = json!("yesterday");
            assert_eq!(paths(&validate("news", &doc)), ["createdAt"]);
        }

        #[test]
        fn test_podcast_keyword_items_are_strings() {
            let doc = json!({
                "id": 1,
                "title": "Episode",
                "slug": { "current": "1-episode" },
                "category": "experts",
                "seo": { "keywords": ["mri", 3] }
            });
            let issues = validate("podcast", &doc);
            assert_eq!(issues[0].to_string(), "seo.keywords[1]: expected a string");
        }

        fn valid_research(related: Value) -> Value {
            json!({
                "title": "Contrast Agents",
                "slug": { "_type": "slug", "current": "contrast-agents" },
                "category": "MRI Safety",
                "researchType": "Case study",
                "relatedTopics": related
            })
        }

        #[test]
        fn test_related_topics_required() {
            let issues = validate("researchTopics", &valid_research(json!([])));
            assert_eq!(issues[0].to_string(), "relatedTopics: is required");
        }

        #[test]
        fn test_related_topics_shape_only_without_lookup() {
            let doc = valid_research(json!([{ "_type": "reference", "_ref": "anything" }]));
            assert!(validate("researchTopics", &doc).is_empty());

            let doc = valid_research(json!([{ "_type": "reference" }]));
            assert_eq!(
                paths(&validate("researchTopics", &doc)),
                ["relatedTopics[0]"]
            );
        }

        #[test]
        fn test_related_topics_with_lookup() {
            let mut lookup = HashMap::new();
            lookup.insert("art-1".to_string(), "articles".to_string());
            lookup.insert("news-1".to_string(), "news".to_string());

            let doc = valid_research(json!([
                { "_type": "reference", "_ref": "art-1" },
                { "_type": "reference", "_ref": "news-1" },
                { "_type": "reference", "_ref": "gone" }
            ]));
            let kind = find_kind("researchTopics").unwrap();
            let issues = validate_document(kind, &doc, &ValidationOptions::default(), Some(&lookup as &dyn DocumentLookup));
            let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            assert_eq!(
                rendered,
                [
                    "relatedTopics[1]: must reference one of: articles (got 'news')",
                    "relatedTopics[2]: references unknown document 'gone'",
                ]
            );
        }

        #[test]
        fn test_mixed_array_members_matched_by_type() {
            use crate::models::{DocumentKind, FieldDef, FieldType, ReferenceOptions};

            let kind = DocumentKind::new(
                "reading",
                "Reading",
                vec![FieldDef::new("items", "Items", FieldType::Array).with_members(vec![
                    FieldDef::member(FieldType::String),
                    FieldDef::member(FieldType::Reference).with_reference(ReferenceOptions {
                        to: vec!["articles".to_string()],
                        filter: None,
                        search_field: None,
                    }),
                ])],
            );
            let doc = json!({
                "items": [
                    { "_type": "reference", "_ref": "art-1" },
                    { "_type": "image" },
                    { "_type": "reference" }
                ]
            });
            let issues = validate_document(&kind, &doc, &ValidationOptions::default(), None);
            let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            assert_eq!(
                rendered,
                [
                    "items[1]: item type 'image' is not allowed here",
                    "items[2]: expected a reference with a string '_ref'",
                ]
            );
        }

        #[test]
        fn test_unknown_fields_rejected_when_configured() {
            let options = ValidationOptions {
                reject_unknown_fields: true,
            };
            let mut doc = valid_news();
            doc["extra"] = json!(1);
            doc["headerImage"] = json!({ "_type": "image", "asset": { "_ref": "image-1" } });
            let issues = validate_document(find_kind("news").unwrap(), &doc, &options, None);
            assert_eq!(paths(&issues), ["extra"]);
            assert_eq!(issues[0].message, "unknown field");

            assert!(validate("news", &doc).is_empty());
        }
    }
}
