use mint_ast::{ExprStmt, NodeId, NodeKind, Return, TypeAlias, Var};
use mint_lexer::TokenKind;

use crate::{
    Parser,
    grammar::{expression, ident, ty},
};

pub fn statement(p: &mut Parser<'_>) -> NodeId {
    if p.at(TokenKind::Var) {
        var_stmt(p)
    } else if p.at(TokenKind::Type) {
        type_alias(p)
    } else if p.at(TokenKind::Return) {
        return_stmt(p)
    } else {
        expr_stmt(p)
    }
}

fn var_stmt(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let name = ident(p);
    let typename = if p.try_eat(TokenKind::Colon) {
        Some(ty(p))
    } else {
        None
    };
    p.expect(TokenKind::Equals);
    let initializer = expression(p);

    p.alloc(
        NodeKind::Var(Var {
            name,
            typename,
            initializer,
        }),
        start..p.prev_end(),
    )
}

fn type_alias(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let name = ident(p);
    p.expect(TokenKind::Equals);
    let typename = ty(p);

    p.alloc(
        NodeKind::TypeAlias(TypeAlias { name, typename }),
        start..p.prev_end(),
    )
}

fn return_stmt(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let expression = expression(p);

    p.alloc(NodeKind::Return(Return { expression }), start..p.prev_end())
}

fn expr_stmt(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    let expression = expression(p);

    p.alloc(
        NodeKind::ExprStmt(ExprStmt { expression }),
        start..p.prev_end(),
    )
}
