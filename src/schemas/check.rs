use crate::models::{DocumentKind, FieldDef, Rule};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProblem {
    pub kind: String,
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for TableProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "{}.{}: {}", self.kind, self.path, self.message)
        }
    }
}

pub(super) fn check_table(types: &[DocumentKind]) -> Vec<TableProblem> {
    let mut problems = Vec::new();
    let kind_names: HashSet<&str> = types.iter().map(|k| k.name.as_str()).collect();

    let mut seen = HashSet::new();
    for kind in types {
        if !seen.insert(kind.name.as_str()) {
            problems.push(problem(&kind.name, "", "duplicate document kind"));
        }

        let mut checker = Checker {
            kind: &kind.name,
            kind_names: &kind_names,
            problems: &mut problems,
        };
        checker.check_fields("", &kind.fields);

        if let Some((field, opts)) = kind.slug_field() {
            for source in opts.source.referenced_fields() {
                if kind.field(source).is_none() {
                    problems.push(problem(
                        &kind.name,
                        &field.name,
                        &format!("slug source field '{}' does not exist", source),
                    ));
                }
            }
        }
    }

    problems
}

struct Checker<'a> {
    kind: &'a str,
    kind_names: &'a HashSet<&'a str>,
    problems: &'a mut Vec<TableProblem>,
}

impl Checker<'_> {
    fn check_fields(&mut self, prefix: &str, fields: &[FieldDef]) {
        let mut names = HashSet::new();
        for field in fields {
            let path = join(prefix, &field.name);
            if !field.name.is_empty() && !names.insert(field.name.as_str()) {
                self.push(&path, "duplicate field name");
            }
            self.check_field(&path, field);
        }
    }

    fn check_field(&mut self, path: &str, field: &FieldDef) {
        let mut values = HashSet::new();
        for item in &field.options.list {
            if !values.insert(item.value.as_str()) {
                self.push(path, &format!("duplicate option value '{}'", item.value));
            }
        }

        if let (Some(min), Some(max)) = (Rule::min_of(&field.rules), Rule::max_of(&field.rules)) {
            if min > max {
                self.push(path, &format!("min({}) is greater than max({})", min, max));
            }
        }

        if let Some(reference) = &field.options.reference {
            if reference.to.is_empty() {
                self.push(path, "reference has no target kinds");
            }
            for target in &reference.to {
                if !self.kind_names.contains(target.as_str()) {
                    self.push(path, &format!("reference target '{}' is not a document kind", target));
                }
            }
        }

        self.check_fields(path, &field.fields);
        for member in &field.of {
            let member_path = format!("{}[]", path);
            self.check_field(&join(&member_path, &member.name), member);
        }
    }

    fn push(&mut self, path: &str, message: &str) {
        self.problems.push(problem(self.kind, path, message));
    }
}

fn join(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}.{}", prefix, name),
    }
}

fn problem(kind: &str, path: &str, message: &str) -> TableProblem {
    TableProblem {
        kind: kind.to_string(),
        path: path.to_string(),
        message: message.to_string(),
    }
}
