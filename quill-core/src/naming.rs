//! C# identifier rules.

use crate::{Error, Result, to_camel_case, to_pascal_case};

/// Reserved C# keywords. Contextual keywords (`var`, `async`, `record`...)
/// are valid identifiers and are not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Turn arbitrary text into a valid C# identifier.
///
/// Characters that cannot appear in an identifier become `replacement`,
/// a leading digit gets a `_` prefix and reserved keywords are escaped
/// with `@`.
///
/// ```
/// use quill_core::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("order-id", '_').unwrap(), "order_id");
/// assert_eq!(sanitize_identifier("2fa", '_').unwrap(), "_2fa");
/// assert_eq!(sanitize_identifier("class", '_').unwrap(), "@class");
/// ```
pub fn sanitize_identifier(input: &str, replacement: char) -> Result<String> {
    if input.is_empty() {
        return Err(Error::EmptyIdentifier);
    }
    if !is_identifier_char(replacement) {
        return Err(Error::InvalidReplacement(replacement));
    }

    let mut name: String = input
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { replacement })
        .collect();

    if name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    if is_keyword(&name) {
        name.insert(0, '@');
    }
    Ok(name)
}

/// How names from a manifest become C# names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Type and member names.
    pub type_case: fn(&str) -> String,
    /// Parameters and locals.
    pub local_case: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Escape `name` if it is reserved.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.type_case)(name))
    }

    pub fn local_name(&self, name: &str) -> String {
        self.safe_name(&(self.local_case)(name))
    }
}

fn escape_verbatim(name: &str) -> String {
    format!("@{name}")
}

impl NamingConvention {
    pub const CSHARP: Self = Self {
        type_case: to_pascal_case,
        local_case: to_camel_case,
        reserved_words: CSHARP_KEYWORDS,
        escape_reserved: escape_verbatim,
    };
}
