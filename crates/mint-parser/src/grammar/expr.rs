use mint_ast::{
    Assignment, Call, Function, NodeId, NodeKind, NumberLiteral, ObjectLiteral, Parameter,
    PropertyAssignment, StringLiteral, Table, TypeParameter,
};
use mint_lexer::TokenKind;

use crate::{
    Parser,
    grammar::{ident, statement, ty},
};

pub fn expression(p: &mut Parser<'_>) -> NodeId {
    if p.at(TokenKind::Ident) && p.nth(1) == Some(TokenKind::Equals) {
        return assignment(p);
    }

    let mut expr = primary(p);

    loop {
        if p.at(TokenKind::OpenParen) {
            expr = call_suffix(p, expr, None);
        } else if p.at(TokenKind::LessThan) {
            let type_arguments = type_argument_list(p);
            expr = call_suffix(p, expr, Some(type_arguments));
        } else {
            break;
        }
    }

    expr
}

fn assignment(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    let name = ident(p);
    p.bump();
    let value = expression(p);

    p.alloc(
        NodeKind::Assignment(Assignment { name, value }),
        start..p.prev_end(),
    )
}

fn primary(p: &mut Parser<'_>) -> NodeId {
    if p.at(TokenKind::Number) {
        let span = p.bump();
        let value = p.text(&span).to_string();
        p.alloc(NodeKind::NumberLiteral(NumberLiteral { value }), span)
    } else if matches!(p.peek(), Some(TokenKind::String { .. })) {
        let span = p.bump();
        let value = p
            .text(&span)
            .trim_start_matches('"')
            .trim_end_matches('"')
            .to_string();
        p.alloc(NodeKind::StringLiteral(StringLiteral { value }), span)
    } else if p.at(TokenKind::Ident) {
        ident(p)
    } else if p.at(TokenKind::Function) {
        function_expr(p)
    } else if p.at(TokenKind::OpenBrace) {
        object_literal(p)
    } else {
        p.unexpected("expression");
        p.bump();
        let pos = p.start();
        p.alloc(
            NodeKind::Ident(mint_ast::Ident {
                text: "(missing)".to_string(),
            }),
            pos..pos,
        )
    }
}

fn function_expr(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let name = if p.at(TokenKind::Ident) {
        Some(ident(p))
    } else {
        None
    };

    let type_parameters = if p.at(TokenKind::LessThan) {
        Some(type_parameter_list(p))
    } else {
        None
    };

    p.expect(TokenKind::OpenParen);
    let parameters = parameter_list(p);

    let typename = if p.try_eat(TokenKind::Colon) {
        Some(ty(p))
    } else {
        None
    };

    p.expect(TokenKind::OpenBrace);
    let mut body = Vec::new();
    while !p.at(TokenKind::CloseBrace) && !p.at_end() {
        body.push(statement(p));
        p.try_eat(TokenKind::Semicolon);
    }
    p.expect(TokenKind::CloseBrace);

    p.alloc(
        NodeKind::Function(Function {
            name,
            type_parameters,
            parameters,
            typename,
            body,
            locals: Table::new(),
        }),
        start..p.prev_end(),
    )
}

fn object_literal(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let mut properties = Vec::new();
    while !p.at(TokenKind::CloseBrace) && !p.at_end() {
        let property_start = p.start();
        let name = ident(p);
        p.expect(TokenKind::Colon);
        let initializer = expression(p);

        properties.push(p.alloc(
            NodeKind::PropertyAssignment(PropertyAssignment { name, initializer }),
            property_start..p.prev_end(),
        ));

        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::CloseBrace);

    p.alloc(
        NodeKind::ObjectLiteral(ObjectLiteral { properties }),
        start..p.prev_end(),
    )
}

fn call_suffix(
    p: &mut Parser<'_>,
    expression_node: NodeId,
    type_arguments: Option<Vec<NodeId>>,
) -> NodeId {
    let start = p.db.node(expression_node).span.start;

    p.expect(TokenKind::OpenParen);
    let mut arguments = Vec::new();
    while !p.at(TokenKind::CloseParen) && !p.at_end() {
        arguments.push(expression(p));
        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::CloseParen);

    p.alloc(
        NodeKind::Call(Call {
            expression: expression_node,
            type_arguments,
            arguments,
        }),
        start..p.prev_end(),
    )
}

/// `<T, U>` in a function expression or signature type.
pub(crate) fn type_parameter_list(p: &mut Parser<'_>) -> Vec<NodeId> {
    p.bump();

    let mut parameters = Vec::new();
    while !p.at(TokenKind::GreaterThan) && !p.at_end() {
        let start = p.start();
        let name = ident(p);
        parameters.push(p.alloc(
            NodeKind::TypeParameter(TypeParameter { name }),
            start..p.prev_end(),
        ));

        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::GreaterThan);

    parameters
}

/// `(a: T, b)` in a function expression or signature type, including the
/// closing parenthesis.
pub(crate) fn parameter_list(p: &mut Parser<'_>) -> Vec<NodeId> {
    let mut parameters = Vec::new();
    while !p.at(TokenKind::CloseParen) && !p.at_end() {
        let start = p.start();
        let name = ident(p);
        let typename = if p.try_eat(TokenKind::Colon) {
            Some(ty(p))
        } else {
            None
        };

        parameters.push(p.alloc(
            NodeKind::Parameter(Parameter { name, typename }),
            start..p.prev_end(),
        ));

        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::CloseParen);

    parameters
}

fn type_argument_list(p: &mut Parser<'_>) -> Vec<NodeId> {
    p.bump();

    let mut arguments = Vec::new();
    while !p.at(TokenKind::GreaterThan) && !p.at_end() {
        arguments.push(ty(p));
        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::GreaterThan);

    arguments
}
