use super::{Annotated, Separators, Statements};
use crate::{Brackets, CodeBlock, Declaration, MethodDecl, Node, Separator};

/// Builder for a [`CodeBlock`] and its statements.
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    block: CodeBlock,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_block(block: CodeBlock) -> Self {
        Self { block }
    }

    pub fn header(&mut self, header: impl Into<String>) -> &mut Self {
        self.block.header = Some(header.into());
        self
    }

    /// Text written right after the body, such as `;` or `)`.
    pub fn footer(&mut self, footer: impl Into<String>) -> &mut Self {
        self.block.footer = Some(footer.into());
        self
    }

    pub fn brackets(&mut self, brackets: Brackets) -> &mut Self {
        self.block.brackets = Some(brackets);
        self
    }

    /// Treat the whole block as one expression: its last line stays open.
    pub fn expression(&mut self) -> &mut Self {
        self.block.expression = true;
        self
    }

    /// Header, body and footer form one continuous unit.
    pub fn partial(&mut self) -> &mut Self {
        self.block.partial = true;
        self
    }

    pub fn finish(self) -> CodeBlock {
        self.block
    }
}

impl Statements for BlockBuilder {
    fn push_statement(&mut self, node: Node) {
        self.block.children.push(node);
    }
}

impl Separators for BlockBuilder {
    fn push_separator(&mut self, separator: Separator) {
        self.block.children.push(separator.into());
    }
}

/// Builder for a [`MethodDecl`].
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    decl: MethodDecl,
}

impl MethodBuilder {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            decl: MethodDecl::new(signature),
        }
    }

    /// Render the body as `=> expression;`.
    pub fn arrow(&mut self) -> &mut Self {
        self.decl.style = crate::MethodBody::Arrow;
        self
    }

    /// No body at all, just `;`.
    pub fn abstract_(&mut self) -> &mut Self {
        self.decl.style = crate::MethodBody::Abstract;
        self
    }

    pub fn finish(self) -> MethodDecl {
        self.decl
    }
}

impl Statements for MethodBuilder {
    fn push_statement(&mut self, node: Node) {
        self.decl.body.children.push(node);
    }
}

impl Annotated for MethodBuilder {
    fn declaration(&mut self) -> &mut Declaration {
        &mut self.decl.decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmitConfig, Renderable, SourceWriter};

    fn render(node: &impl Renderable) -> String {
        let mut out = SourceWriter::new(EmitConfig::default());
        node.render(&mut out, false);
        out.to_string()
    }

    #[test]
    fn test_nested_scopes() {
        let mut method = MethodBuilder::new("public void Drain(Queue<int> queue)");
        method.scope("while (queue.Count > 0)", |body| {
            body.statement("var item = queue.Dequeue();")
                .separator()
                .scope("if (item < 0)", |inner| {
                    inner.statement("continue;");
                })
                .statement("Handle(item);");
        });
        assert_eq!(
            render(&method.finish()),
            "public void Drain(Queue<int> queue)\n{\n    while (queue.Count > 0)\n    {\n        var item = queue.Dequeue();\n\n        if (item < 0)\n        {\n            continue;\n        }\n        Handle(item);\n    }\n}\n"
        );
    }

    #[test]
    fn test_footer_glues_to_nested_scope() {
        let mut block = BlockBuilder::new();
        block
            .expression()
            .footer(";")
            .scope("if (x)", |inner| {
                inner.statement("return 1;");
            });
        assert_eq!(
            render(&block.finish()),
            "if (x)\n{\n    return 1;\n};\n"
        );
    }

    #[test]
    fn test_lambda_body_in_arrow_method() {
        let mut method = MethodBuilder::new("public Func<int, int> Make()");
        method.arrow().scope("x =>", |body| {
            body.statement("var y = x + 1;").statement("return y;");
        });
        assert_eq!(
            render(&method.finish()),
            "public Func<int, int> Make() => x =>\n{\n    var y = x + 1;\n    return y;\n};\n"
        );
    }

    #[test]
    fn test_call_arguments_as_partial_block() {
        let mut method = MethodBuilder::new("public void Log()");
        method.block(|call| {
            call.header("Write(")
                .partial()
                .footer(");")
                .brackets(Brackets::new("", ""))
                .statement("\"a\",")
                .statement("\"b\"");
        });
        assert_eq!(
            render(&method.finish()),
            "public void Log()\n{\n    Write(\n        \"a\",\n        \"b\"\n    );\n}\n"
        );
    }

    #[test]
    fn test_annotations() {
        let mut method = MethodBuilder::new("public T Get<T>()");
        method
            .doc(|doc| {
                doc.summary("Fetch a value.").type_param("T", "Value type.");
            })
            .attribute("Pure")
            .constraint("T : new()")
            .arrow()
            .statement("new T()");
        assert_eq!(
            render(&method.finish()),
            "/// <summary>\n/// Fetch a value.\n/// </summary>\n/// <typeparam name=\"T\">Value type.</typeparam>\n[Pure]\npublic T Get<T>()\n    where T : new()\n    => new T();\n"
        );
    }
}
