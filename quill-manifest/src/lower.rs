//! Lowering a manifest into a document through the fluent builders.

use quill_core::{NamingConvention, TemplateRegistry, Values};
use quill_emit::{
    Annotated, Document, Members, MethodBuilder, Statements, TopLevel, TypeBuilder,
};

use crate::{Error, Manifest, MethodSpec, ParameterSpec, Placement, Result, Snippet, TypeSpec};

/// Build the document a manifest describes.
///
/// Template snippets are looked up in `templates`; a snippet's own values
/// override the manifest-wide ones.
pub fn lower(manifest: &Manifest, templates: &TemplateRegistry) -> Result<Document> {
    let mut doc = Document::new(manifest.document.clone());

    if let Some(namespace) = &manifest.namespace {
        doc.namespace(namespace);
    }
    for using in &manifest.usings {
        doc.using(using);
    }
    for using in &manifest.static_usings {
        doc.using_static(using);
    }
    for (alias, target) in &manifest.aliases {
        doc.using_alias(alias, target);
    }

    lower_snippets(&mut doc, manifest, templates, Placement::Before)?;
    for ty in &manifest.types {
        doc.type_decl(type_signature(ty), |builder| lower_type(builder, ty));
    }
    lower_snippets(&mut doc, manifest, templates, Placement::After)?;

    tracing::debug!(
        types = manifest.type_count(),
        methods = manifest.method_count(),
        entries = doc.nodes().len(),
        "lowered manifest"
    );
    Ok(doc)
}

fn lower_snippets(
    doc: &mut Document,
    manifest: &Manifest,
    templates: &TemplateRegistry,
    placement: Placement,
) -> Result<()> {
    for snippet in manifest.snippets.iter().filter(|s| s.placement == placement) {
        let text = snippet_text(snippet, manifest, templates)?;
        doc.raw(text.trim_end());
    }
    Ok(())
}

fn snippet_text(
    snippet: &Snippet,
    manifest: &Manifest,
    templates: &TemplateRegistry,
) -> Result<String> {
    match (&snippet.raw, &snippet.template) {
        (Some(raw), _) => Ok(raw.clone()),
        (None, Some(id)) => {
            let values: Values = manifest
                .values
                .iter()
                .chain(&snippet.values)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            templates
                .render(id, &values)
                .map_err(|e| Box::new(Error::from(e)))
        }
        (None, None) => Ok(String::new()),
    }
}

fn lower_type(builder: &mut TypeBuilder, ty: &TypeSpec) {
    if let Some(summary) = &ty.summary {
        builder.doc(|doc| {
            doc.summary(summary);
        });
    }
    for attribute in &ty.attributes {
        builder.attribute(attribute);
    }
    for constraint in &ty.constraints {
        builder.constraint(constraint);
    }
    for base in &ty.bases {
        builder.base(base);
    }
    if ty.is_terminated() {
        builder.terminated();
        return;
    }

    for member in &ty.members {
        builder.member(member);
    }
    for method in &ty.methods {
        builder.method(method_signature(method, &ty.name), |m| lower_method(m, method));
    }
    for nested in &ty.types {
        builder.nested_type(type_signature(nested), |b| lower_type(b, nested));
    }
}

fn lower_method(builder: &mut MethodBuilder, method: &MethodSpec) {
    let documented = method.parameters.iter().any(|p| p.doc.is_some());
    if method.summary.is_some() || method.returns_doc.is_some() || documented {
        builder.doc(|doc| {
            if let Some(summary) = &method.summary {
                doc.summary(summary);
            }
            for parameter in &method.parameters {
                if let Some(text) = &parameter.doc {
                    doc.param(parameter_name(parameter), text);
                }
            }
            if let Some(returns) = &method.returns_doc {
                doc.returns(returns);
            }
        });
    }
    for attribute in &method.attributes {
        builder.attribute(attribute);
    }
    for constraint in &method.constraints {
        builder.constraint(constraint);
    }

    if method.is_abstract {
        builder.abstract_();
    } else if let Some(expression) = &method.arrow {
        builder.arrow().statement(expression);
    } else {
        for statement in &method.body {
            builder.statement(statement);
        }
    }
}

/// `public sealed class Name<T>(int x)`
fn type_signature(ty: &TypeSpec) -> String {
    let mut parts: Vec<&str> = ty.modifiers.iter().map(String::as_str).collect();
    parts.push(ty.kind.keyword());

    let mut signature = parts.join(" ");
    signature.push(' ');
    signature.push_str(&ty.name);
    push_generics(&mut signature, &ty.generics);
    if let Some(parameters) = &ty.parameters {
        signature.push('(');
        signature.push_str(parameters);
        signature.push(')');
    }
    signature
}

/// `public Task<Order> LoadAsync<T>(int id, bool cached = false)`; a
/// method named after its type is a constructor and has no return type.
fn method_signature(method: &MethodSpec, owner: &str) -> String {
    let mut parts: Vec<&str> = method.modifiers.iter().map(String::as_str).collect();
    if method.name != owner {
        parts.push(&method.returns);
    }
    parts.push(&method.name);

    let mut signature = parts.join(" ");
    push_generics(&mut signature, &method.generics);

    let parameters: Vec<String> = method
        .parameters
        .iter()
        .map(|p| match &p.default {
            Some(default) => format!("{} {} = {}", p.ty, parameter_name(p), default),
            None => format!("{} {}", p.ty, parameter_name(p)),
        })
        .collect();
    signature.push('(');
    signature.push_str(&parameters.join(", "));
    signature.push(')');
    signature
}

fn push_generics(signature: &mut String, generics: &[String]) {
    if !generics.is_empty() {
        signature.push('<');
        signature.push_str(&generics.join(", "));
        signature.push('>');
    }
}

/// Parameter names keep their spelling; reserved words get `@`.
fn parameter_name(parameter: &ParameterSpec) -> String {
    NamingConvention::CSHARP.safe_name(&parameter.name)
}
