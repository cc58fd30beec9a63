use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SLUG_MAX_LENGTH: usize = 200;

// ECMAScript whitespace: includes U+FEFF, excludes U+0085 and U+180E.
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("Invalid whitespace regex pattern")
});
static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("Invalid non-word regex pattern"));

/// Identifier value a slug may be prefixed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write_number(f, *n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Number-to-string the way stored slugs rendered them: shortest round-trip
/// digits, zero padded below 1e21, exponent form (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return write!(f, "{}", n);
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, power)
        }
        _ => f.write_str(&exp),
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl Identifier {
    /// Reads an identifier out of a JSON value. Anything other than a number
    /// or a string counts as absent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Integer(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

/// Lowercases, turns whitespace runs into single hyphens, drops everything
/// outside `[A-Za-z0-9_-]` and cuts the result to `max_length`.
pub fn slugify(input: &str, max_length: usize) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_REGEX.replace_all(&lowered, "-");
    let mut slug = NON_WORD_REGEX.replace_all(&hyphenated, "").into_owned();
    // only ASCII survives the strip, so byte truncation is char-safe
    slug.truncate(max_length);
    slug
}

/// Builds the slug source: `"{id}-{title}"` when an identifier is present,
/// otherwise the title alone.
///
/// Present means non-empty once rendered, so a numeric `0` does prefix the
/// title (`"0-..."`). Slugs stored before this rule treated `0` as absent;
/// `content_id` must be positive, so only podcast ids can hit the difference.
pub fn compose_source(identifier: Option<&Identifier>, title: Option<&str>) -> String {
    let id_part = identifier.map(|id| id.to_string()).unwrap_or_default();
    let title_part = title.unwrap_or("");
    if id_part.is_empty() {
        title_part.to_string()
    } else {
        format!("{}-{}", id_part, title_part)
    }
}

/// Derives the slug for an identifier/title pair. Never fails; an empty
/// result has to be rejected by whoever validates the document.
///
/// An identifier with no title yields `"{id}-"`. The trailing hyphen is kept
/// so that existing stored slugs keep matching.
pub fn derive_slug(identifier: Option<&Identifier>, title: Option<&str>) -> String {
    let source = compose_source(identifier, title);
    let slug = slugify(&source, DEFAULT_SLUG_MAX_LENGTH);
    tracing::debug!("Derived slug '{}' from source '{}'", slug, source);
    slug
}

pub fn is_valid_slug(slug: &str, max_length: usize) -> bool {
    if slug.is_empty() || slug.len() > max_length {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
