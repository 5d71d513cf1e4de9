//! Type-symbol naming.
//!
//! Turning a type into display text is a collaborator concern: the engine
//! only needs the text and the namespaces it depends on. [`name_in_scope`]
//! feeds those namespaces to the active build scope.

use crate::context;

/// A type reference: namespace, simple name, type arguments and a suffix
/// such as `[]` or `?`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeSymbol {
    pub namespace: Option<String>,
    pub name: String,
    pub arguments: Vec<TypeSymbol>,
    pub suffix: String,
}

impl TypeSymbol {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            namespace: (!namespace.is_empty()).then_some(namespace),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn argument(mut self, argument: TypeSymbol) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Parse a dotted, optionally generic name such as
    /// `System.Collections.Generic.List<System.String>[]`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let (head, arguments, suffix) = match split_generic(text) {
            Some((head, arguments, suffix)) => (head, arguments, suffix),
            None => {
                let end = text.find(['[', '?']).unwrap_or(text.len());
                (&text[..end], Vec::new(), &text[end..])
            }
        };

        let (namespace, name) = match head.rsplit_once('.') {
            Some((namespace, name)) => (Some(namespace.to_string()), name),
            None => (None, head),
        };

        Self {
            namespace,
            name: name.to_string(),
            arguments: arguments.into_iter().map(Self::parse).collect(),
            suffix: suffix.to_string(),
        }
    }

    /// Fully qualified text.
    pub fn full_name(&self) -> String {
        let mut text = match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone(),
        };
        push_arguments(&mut text, self.arguments.iter().map(Self::full_name));
        text.push_str(&self.suffix);
        text
    }
}

/// Split `Head<A, B<C>>suffix` at its outermost angle brackets.
fn split_generic(text: &str) -> Option<(&str, Vec<&str>, &str)> {
    let open = text.find('<')?;
    let mut depth = 0usize;
    let mut start = open + 1;
    let mut arguments = Vec::new();

    for (i, c) in text.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    arguments.push(text[start..i].trim());
                    return Some((&text[..open], arguments, &text[i + 1..]));
                }
            }
            ',' if depth == 1 => {
                arguments.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    None
}

fn push_arguments(text: &mut String, arguments: impl Iterator<Item = String>) {
    let arguments: Vec<String> = arguments.collect();
    if !arguments.is_empty() {
        text.push('<');
        text.push_str(&arguments.join(", "));
        text.push('>');
    }
}

/// Display text for a symbol plus the namespaces it needs imported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedSymbol {
    pub text: String,
    pub imports: Vec<String>,
}

/// Converts type symbols to display text.
pub trait SymbolNamer {
    /// Display text and required imports.
    fn name(&self, symbol: &TypeSymbol) -> NamedSymbol;

    /// Text usable without any imports.
    fn qualified(&self, symbol: &TypeSymbol) -> String {
        symbol.full_name()
    }
}

/// Names symbols either fully qualified or shortened via imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualifiedNamer {
    pub simplify: bool,
}

impl QualifiedNamer {
    pub fn simplifying() -> Self {
        Self { simplify: true }
    }
}

impl SymbolNamer for QualifiedNamer {
    fn name(&self, symbol: &TypeSymbol) -> NamedSymbol {
        if !self.simplify {
            return NamedSymbol {
                text: symbol.full_name(),
                imports: Vec::new(),
            };
        }

        let mut imports = Vec::new();
        if let Some(namespace) = &symbol.namespace {
            imports.push(namespace.clone());
        }

        let mut arguments = Vec::with_capacity(symbol.arguments.len());
        for argument in &symbol.arguments {
            let named = self.name(argument);
            for namespace in named.imports {
                if !imports.contains(&namespace) {
                    imports.push(namespace);
                }
            }
            arguments.push(named.text);
        }

        let mut text = symbol.name.clone();
        push_arguments(&mut text, arguments.into_iter());
        text.push_str(&symbol.suffix);
        NamedSymbol { text, imports }
    }
}

/// Name `symbol`, registering its imports with the active build scope.
///
/// Outside a build scope there is nowhere to register imports, so the
/// fully qualified form is returned instead.
pub fn name_in_scope(namer: &impl SymbolNamer, symbol: &TypeSymbol) -> String {
    if !context::is_building() {
        return namer.qualified(symbol);
    }
    let named = namer.name(symbol);
    for namespace in &named.imports {
        context::register_import(namespace);
    }
    named.text
}
