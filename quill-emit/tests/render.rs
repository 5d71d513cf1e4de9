//! End-to-end rendering tests.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::panic::{AssertUnwindSafe, catch_unwind};

use quill_emit::{
    Annotated, Brackets, CodeBlock, Document, EmitConfig, Indent, Members, NamespaceStyle,
    QualifiedNamer, RawText, Renderable, Separator, Separators, SourceWriter, Statements,
    TopLevel, TypeSymbol, name_in_scope,
};

fn sample(config: EmitConfig) -> Document {
    let mut doc = Document::new(config);
    doc.using("System.Collections.Generic");
    doc.type_decl("public class Sample", |ty| {
        ty.method("public void Run()", |body| {
            body.statement("Console.WriteLine(1);");
        });
    });
    doc
}

#[test]
fn test_round_trip_example() {
    assert_eq!(
        sample(EmitConfig::default()).render().unwrap(),
        "using System.Collections.Generic;\n\
         \n\
         public class Sample\n\
         {\n\
         \x20   public void Run()\n\
         \x20   {\n\
         \x20       Console.WriteLine(1);\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn test_indent_unit_applies_at_every_level() {
    let tabbed = sample(EmitConfig::default().indent(Indent::Tab));
    assert_eq!(
        tabbed.render().unwrap(),
        "using System.Collections.Generic;\n\npublic class Sample\n{\n\tpublic void Run()\n\t{\n\t\tConsole.WriteLine(1);\n\t}\n}\n"
    );
}

#[test]
fn test_render_is_deterministic() {
    let doc = service();
    let first = doc.render().unwrap();
    let second = doc.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_brackets_balance() {
    let text = service().render().unwrap();
    for (open, close) in [('{', '}'), ('(', ')'), ('[', ']')] {
        assert_eq!(
            text.matches(open).count(),
            text.matches(close).count(),
            "unbalanced {open}{close} in:\n{text}"
        );
    }
}

#[test]
fn test_trailing_newline_law() {
    for trailing in [true, false] {
        let mut doc = Document::new(EmitConfig::default().trailing_newline(trailing));
        doc.raw("int a = 1;  \n\n")
            .raw("int b = 2;\t")
            .forced_separator();

        let text = doc.render().unwrap();
        let body = text.strip_suffix('\n').unwrap_or(&text);
        assert_eq!(text.ends_with('\n'), trailing);
        assert!(!body.ends_with('\n'));
        assert_eq!(body, body.trim_end());
    }
}

#[test]
fn test_imports_sorted_and_deduplicated() {
    let mut doc = Document::new(EmitConfig::default());
    doc.using("Newtonsoft.Json")
        .using("System.Text")
        .using("acme.Core")
        .using("System")
        .using("System.Text")
        .using_static("System.Console")
        .using_alias("Env", "System.Environment");

    assert_eq!(
        doc.render().unwrap(),
        "using System;\n\
         using System.Text;\n\
         using acme.Core;\n\
         using Newtonsoft.Json;\n\
         using static System.Console;\n\
         using Env = System.Environment;\n"
    );
}

#[test]
fn test_separator_is_idempotent_at_the_edges() {
    let mut doc = Document::new(EmitConfig::default());
    doc.separator().raw("// only").separator();
    assert_eq!(doc.render().unwrap(), "// only\n");

    let mut between = Document::new(EmitConfig::default());
    between.raw("// a").add(Separator::new()).raw("// b");
    let mut plain = Document::new(EmitConfig::default());
    plain.raw("// a").raw("// b");
    assert_eq!(between.render().unwrap(), "// a\n\n// b\n");
    assert_eq!(between.render().unwrap(), plain.render().unwrap());
}

#[test]
fn test_footer_glues_to_closing_bracket() {
    let inner = CodeBlock::braced("if (x)").child(RawText::new("return 1;"));
    let block = CodeBlock::new().expression().footer(";").child(inner);

    let mut out = SourceWriter::new(EmitConfig::default());
    block.render(&mut out, false);
    let text = out.finish().unwrap();

    assert_eq!(text, "if (x)\n{\n    return 1;\n};\n");
    assert!(text.contains("return 1;\n}"));
    assert!(!text.contains("}\n;"));
}

#[test]
fn test_deep_tail_propagation() {
    // Call argument -> lambda -> switch expression, closed on one chain.
    let switch = CodeBlock::braced("kind switch")
        .child(RawText::new("1 => \"one\","))
        .child(RawText::new("_ => \"other\","));
    let lambda = CodeBlock::new()
        .header("kind => ")
        .partial()
        .child(switch);
    let call = CodeBlock::new()
        .header("Register(")
        .partial()
        .footer(")")
        .child(lambda);

    let mut out = SourceWriter::new(EmitConfig::default());
    call.render(&mut out, true);
    out.append(";");
    assert_eq!(
        out.finish().unwrap(),
        "Register(kind => kind switch\n{\n    1 => \"one\",\n    _ => \"other\",\n});"
    );
}

#[test]
fn test_indent_restored_after_panic() {
    let mut out = SourceWriter::new(EmitConfig::default());
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut inner = out.indent_in(2);
        inner.append_line("started");
        panic!("generator failed");
    }));
    assert!(result.is_err());
    assert_eq!(out.depth(), 0);
    out.append_line("after");
    assert_eq!(out.to_string(), "        started\nafter\n");
}

fn service() -> Document {
    let config = EmitConfig::default().pragma("#nullable enable");
    Document::build(config, |doc| {
        let namer = QualifiedNamer::simplifying();
        let order = TypeSymbol::parse("System.Threading.Tasks.Task<Acme.Orders.Order>");
        let returns = name_in_scope(&namer, &order);

        doc.using("System").namespace("Acme.Services");
        doc.type_decl("public sealed class OrderService", |ty| {
            ty.doc(|d| {
                d.summary("Loads orders.");
            })
            .base("IOrderService")
            .member("private readonly IOrderStore _store;")
            .method("public OrderService(IOrderStore store)", |m| {
                m.statement("_store = store;");
            })
            .method(format!("public async {returns} LoadAsync(int id)"), |m| {
                m.doc(|d| {
                    d.param("id", "Order id.");
                })
                .statement("var order = await _store.FindAsync(id);")
                .scope("if (order is null)", |b| {
                    b.statement("throw new KeyNotFoundException($\"Order {id}\");");
                })
                .statement("return order;");
            })
            .method("public int Count", |m| {
                m.arrow().statement("_store.Count");
            });
        });
    })
}

#[test]
fn test_service_snapshot() {
    insta::assert_snapshot!("service_class", service().render().unwrap());
}

#[test]
fn test_file_scoped_snapshot() {
    let config = EmitConfig::default()
        .indent(Indent::Spaces(2))
        .namespace_style(NamespaceStyle::FileScoped);
    let mut doc = Document::new(config);
    doc.namespace("Acme.Models")
        .using_static("System.Math")
        .using_alias("Id", "System.Guid");
    doc.type_decl("public record Money(decimal Amount, string Currency)", |ty| {
        ty.terminated();
    });
    doc.type_decl("public enum Status", |ty| {
        ty.member("Draft,").member("Sent,");
    });
    doc.type_decl("public static class Rounding", |ty| {
        ty.method("public static T Clamp<T>(T value, T min, T max)", |m| {
            m.constraint("T : IComparable<T>")
                .arrow()
                .statement("value.CompareTo(min) < 0 ? min : value.CompareTo(max) > 0 ? max : value");
        });
    });
    insta::assert_snapshot!("file_scoped_models", doc.render().unwrap());
}

#[test]
fn test_directives_and_verbatim_snapshot() {
    let mut doc = Document::new(EmitConfig::default());
    doc.type_decl("internal static class Build", |ty| {
        ty.method("public static string Describe()", |m| {
            m.statement("#if DEBUG\nreturn \"debug\";\n#else\nreturn \"release\";\n#endif");
        })
        .raw_member("    public const string Banner = \"\"\"\n    hello\n      world\n    \"\"\";");
    });
    insta::assert_snapshot!("directives_and_verbatim", doc.render().unwrap());
}

#[test]
fn test_call_arguments_snapshot() {
    let mut doc = Document::new(EmitConfig::default());
    doc.type_decl("public static class Startup", |ty| {
        ty.method("public static void Configure(IServiceCollection services)", |m| {
            m.block(|call| {
                call.header("services.AddHttpClient(")
                    .partial()
                    .footer(");")
                    .statement("\"orders\",");
                call.block(|lambda| {
                    lambda.expression();
                    lambda.scope_with("client =>", Brackets::braces(), |body| {
                        body.statement("client.BaseAddress = new Uri(\"https://orders\");")
                            .statement("client.Timeout = TimeSpan.FromSeconds(5);");
                    });
                });
            });
        });
    });
    insta::assert_snapshot!("call_arguments", doc.render().unwrap());
}
