//! Import directive collection.

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::config::{GLOBAL_PREFIX, Qualify};

/// Tracks `using` directives and deduplicates them.
///
/// Directives fall into four categories rendered in a fixed order:
/// standard library (`System`, `System.*`), other namespaces, `using static`
/// and aliases. Each category is deduplicated by exact string and sorted
/// case-insensitively when rendered.
///
/// # Example
///
/// ```
/// use quill_emit::{Imports, Qualify};
///
/// let mut imports = Imports::new();
/// imports.add_namespace("Newtonsoft.Json", Qualify::Unchanged);
/// imports.add_namespace("System.Linq", Qualify::Unchanged);
/// imports.add_namespace("System", Qualify::Unchanged);
/// imports.add_namespace("System", Qualify::Unchanged);
///
/// assert_eq!(
///     imports.lines(),
///     ["using System;", "using System.Linq;", "using Newtonsoft.Json;"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    system: IndexSet<String>,
    other: IndexSet<String>,
    statics: IndexSet<String>,
    aliases: IndexSet<(String, String)>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a namespace import. Returns `false` if it was already present.
    pub fn add_namespace(&mut self, namespace: &str, qualify: Qualify) -> bool {
        let namespace = qualify.apply(namespace.trim());
        if is_system(&namespace) {
            self.system.insert(namespace)
        } else {
            self.other.insert(namespace)
        }
    }

    /// Add a `using static` import.
    pub fn add_static(&mut self, type_name: &str, qualify: Qualify) -> bool {
        self.statics.insert(qualify.apply(type_name.trim()))
    }

    /// Add a `using alias = target;` import.
    pub fn add_alias(&mut self, alias: &str, target: &str, qualify: Qualify) -> bool {
        self.aliases
            .insert((alias.trim().to_string(), qualify.apply(target.trim())))
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &Imports) {
        self.system.extend(other.system.iter().cloned());
        self.other.extend(other.other.iter().cloned());
        self.statics.extend(other.statics.iter().cloned());
        self.aliases.extend(other.aliases.iter().cloned());
    }

    /// Check if a namespace is imported (exact match).
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.system.contains(namespace) || self.other.contains(namespace)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of directives across all categories.
    pub fn len(&self) -> usize {
        self.system.len() + self.other.len() + self.statics.len() + self.aliases.len()
    }

    /// The directives in render order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len());
        lines.extend(sorted(&self.system).map(|ns| format!("using {ns};")));
        lines.extend(sorted(&self.other).map(|ns| format!("using {ns};")));
        lines.extend(sorted(&self.statics).map(|ty| format!("using static {ty};")));

        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort_by(|a, b| compare(&a.0, &b.0).then_with(|| compare(&a.1, &b.1)));
        lines.extend(
            aliases
                .into_iter()
                .map(|(alias, target)| format!("using {alias} = {target};")),
        );
        lines
    }
}

/// `System` and its sub-namespaces, with or without the `global::` marker.
fn is_system(namespace: &str) -> bool {
    let bare = namespace.strip_prefix(GLOBAL_PREFIX).unwrap_or(namespace);
    bare == "System" || bare.starts_with("System.")
}

/// Case-insensitive order with an ordinal tiebreak, so output is stable.
fn compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn sorted(set: &IndexSet<String>) -> impl Iterator<Item = &String> {
    let mut items: Vec<&String> = set.iter().collect();
    items.sort_by(|a, b| compare(a, b));
    items.into_iter()
}
