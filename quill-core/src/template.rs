//! `{{ name }}` placeholder substitution.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::{Error, Result};

/// Placeholder values by name.
pub type Values = IndexMap<String, String>;

fn marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_.\-]*)\s*\}\}")
            .unwrap_or_else(|e| panic!("{}", e))
    })
}

/// Text with named `{{ name }}` markers.
///
/// ```
/// use quill_core::{Template, Values};
///
/// let template = Template::new("public sealed class {{ name }}Client");
/// let values = Values::from([("name".to_string(), "Orders".to_string())]);
/// assert_eq!(template.render(&values).unwrap(), "public sealed class OrdersClient");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for caps in marker().captures_iter(&self.source) {
            if let Some(name) = caps.get(1).map(|m| m.as_str())
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }

    /// Replace every marker with its value.
    ///
    /// Fails on the first marker without a value; extra values are ignored.
    pub fn render(&self, values: &Values) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in marker().captures_iter(&self.source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = values
                .get(name.as_str())
                .ok_or_else(|| Error::MissingValue {
                    name: name.as_str().to_string(),
                })?;
            out.push_str(&self.source[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }

        out.push_str(&self.source[last..]);
        Ok(out)
    }
}
