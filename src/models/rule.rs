use serde::{Deserialize, Serialize};

/// Declarative validation rule attached to a field.
///
/// `Min`/`Max` count characters for strings, items for arrays and compare
/// the value itself for numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "lowercase")]
pub enum Rule {
    Required,
    Integer,
    Positive,
    Min(f64),
    Max(f64),
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Integer => write!(f, "integer"),
            Self::Positive => write!(f, "positive"),
            Self::Min(n) => write!(f, "min({})", n),
            Self::Max(n) => write!(f, "max({})", n),
        }
    }
}

impl Rule {
    pub fn min_of(rules: &[Rule]) -> Option<f64> {
        rules.iter().find_map(|r| match r {
            Rule::Min(n) => Some(*n),
            _ => None,
        })
    }

    pub fn max_of(rules: &[Rule]) -> Option<f64> {
        rules.iter().find_map(|r| match r {
            Rule::Max(n) => Some(*n),
            _ => None,
        })
    }
}
