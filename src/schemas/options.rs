//! Fixed picker lists. The `value` strings are persisted and queried
//! verbatim, so they must never change.

use crate::models::OptionItem;

pub const ARTICLE_TYPES: [(&str, &str); 5] = [
    ("Part", "part"),
    ("Chapter", "chapter"),
    ("Section", "section"),
    ("Sub-section", "sub-section"),
    ("Topic", "topic"),
];

pub const NEWS_CATEGORIES: [(&str, &str); 9] = [
    ("MRI Technology & Innovations", "technology"),
    ("Clinical Applications & Case Studies", "clinical"),
    ("Research & Development", "rnd"),
    ("Equipment & Devices", "equipment"),
    ("Industry & Market News", "industry"),
    ("Safety & Regulations", "safety"),
    ("Conferences & Events", "events"),
    ("Educational Resources & Training", "education"),
    ("Expert Opinions & Interviews", "experts"),
];

pub const RESEARCH_CATEGORIES: [&str; 4] = [
    "MRI Fundamentals",
    "MRI Procedures",
    "MRI Safety",
    "Deeptech",
];

pub const RESEARCH_TYPES: [&str; 3] = ["Literature review", "Case study", "Latest advancements"];

pub const OPEN_GRAPH_TYPES: [&str; 4] = ["website", "article", "profile", "video"];

pub const META_ROBOTS: [&str; 4] = [
    "index, follow",
    "noindex, follow",
    "index, nofollow",
    "noindex, nofollow",
];

pub fn titled(items: &[(&str, &str)]) -> Vec<OptionItem> {
    items
        .iter()
        .map(|(title, value)| OptionItem::new(title, value))
        .collect()
}

pub fn plain(values: &[&str]) -> Vec<OptionItem> {
    values.iter().map(|v| OptionItem::plain(v)).collect()
}
