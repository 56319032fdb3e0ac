mod expr;
mod stmt;
mod ty;

pub(crate) use expr::*;
pub(crate) use stmt::*;
pub(crate) use ty::*;

use mint_ast::{Ident, Module, NodeId, NodeKind, Table};
use mint_lexer::TokenKind;

use crate::Parser;

pub fn module(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    let mut statements = Vec::new();

    while !p.at_end() {
        statements.push(statement(p));
        p.try_eat(TokenKind::Semicolon);
    }

    p.alloc(
        NodeKind::Module(Module {
            statements,
            locals: Table::new(),
        }),
        start..p.prev_end(),
    )
}

/// Consumes an identifier. When the current token is not an identifier, a
/// diagnostic is recorded and a placeholder identifier stands in so that
/// the surrounding node can still be built.
pub(crate) fn ident(p: &mut Parser<'_>) -> NodeId {
    if p.at(TokenKind::Ident) {
        let span = p.bump();
        let text = p.text(&span).to_string();
        p.alloc(NodeKind::Ident(Ident { text }), span)
    } else {
        p.unexpected("identifier");
        let pos = p.start();
        p.alloc(
            NodeKind::Ident(Ident {
                text: "(missing)".to_string(),
            }),
            pos..pos,
        )
    }
}

#[cfg(test)]
mod tests {
    use expect_test::{Expect, expect};
    use mint_ast::Database;
    use mint_diagnostic::Diagnostics;

    use crate::parse;

    fn check(source: &str, ast: Expect, errors: Expect) {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let module = parse(&mut db, source, &mut diagnostics);

        ast.assert_eq(&db.debug_node(module));

        let mut rendered = String::new();
        for diagnostic in diagnostics.iter() {
            rendered.push_str(&format!("{} at {}\n", diagnostic.kind, diagnostic.pos()));
        }
        errors.assert_eq(&rendered);
    }

    #[test]
    fn test_var_statement() {
        check(
            "var x: number = 1",
            expect![[r#"
                Module
                  Var
                    Ident `x`
                    Ident `number`
                    NumberLiteral `1`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_type_alias() {
        check(
            "type P = { x: number, y: number }",
            expect![[r#"
                Module
                  TypeAlias
                    Ident `P`
                    ObjectTypeNode
                      PropertyDeclaration
                        Ident `x`
                        Ident `number`
                      PropertyDeclaration
                        Ident `y`
                        Ident `number`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_object_literal() {
        check(
            "var p = { x: 1, y: \"two\" }",
            expect![[r#"
                Module
                  Var
                    Ident `p`
                    ObjectLiteral
                      PropertyAssignment
                        Ident `x`
                        NumberLiteral `1`
                      PropertyAssignment
                        Ident `y`
                        StringLiteral `two`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_function_expression() {
        check(
            "var id = function <T>(x: T): T { return x }",
            expect![[r#"
                Module
                  Var
                    Ident `id`
                    Function
                      TypeParameter
                        Ident `T`
                      Parameter
                        Ident `x`
                        Ident `T`
                      Ident `T`
                      Return
                        Ident `x`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_named_function_with_body() {
        check(
            "var f = function add(a: number, b: number): number { var sum = a; return sum }",
            expect![[r#"
                Module
                  Var
                    Ident `f`
                    Function
                      Ident `add`
                      Parameter
                        Ident `a`
                        Ident `number`
                      Parameter
                        Ident `b`
                        Ident `number`
                      Ident `number`
                      Var
                        Ident `sum`
                        Ident `a`
                      Return
                        Ident `sum`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_call_with_type_arguments() {
        check(
            "id<number>(1)",
            expect![[r#"
                Module
                  ExprStmt
                    Call
                      Ident `id`
                      Ident `number`
                      NumberLiteral `1`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_call_chain() {
        check(
            "f(1)(2)",
            expect![[r#"
                Module
                  ExprStmt
                    Call
                      Call
                        Ident `f`
                        NumberLiteral `1`
                      NumberLiteral `2`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_assignment() {
        check(
            "x = f(1)",
            expect![[r#"
                Module
                  ExprStmt
                    Assignment
                      Ident `x`
                      Call
                        Ident `f`
                        NumberLiteral `1`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_signature_type() {
        check(
            "type F = <T>(x: T) => T",
            expect![[r#"
                Module
                  TypeAlias
                    Ident `F`
                    SignatureTypeNode
                      TypeParameter
                        Ident `T`
                      Parameter
                        Ident `x`
                        Ident `T`
                      Ident `T`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_return_statement() {
        check(
            "return \"done\"",
            expect![[r#"
                Module
                  Return
                    StringLiteral `done`
            "#]],
            expect![""],
        );
    }

    #[test]
    fn test_missing_initializer() {
        check(
            "var x: number =",
            expect![[r#"
                Module
                  Var
                    Ident `x`
                    Ident `number`
                    Ident `(missing)`
            "#]],
            expect![[r#"
                Expected expression, found end of input at 15
            "#]],
        );
    }

    #[test]
    fn test_unknown_token() {
        check(
            "var x = @",
            expect![[r#"
                Module
                  Var
                    Ident `x`
                    Ident `(missing)`
            "#]],
            expect![[r#"
                Unknown token `@` at 8
            "#]],
        );
    }

    #[test]
    fn test_semicolons_are_optional_separators() {
        check(
            "var x = 1; var y = 2;\nvar z = 3",
            expect![[r#"
                Module
                  Var
                    Ident `x`
                    NumberLiteral `1`
                  Var
                    Ident `y`
                    NumberLiteral `2`
                  Var
                    Ident `z`
                    NumberLiteral `3`
            "#]],
            expect![""],
        );
    }
}
