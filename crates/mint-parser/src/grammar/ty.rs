use mint_ast::{NodeId, NodeKind, ObjectTypeNode, PropertyDeclaration, SignatureTypeNode, Table};
use mint_lexer::TokenKind;

use crate::{
    Parser,
    grammar::{ident, parameter_list, type_parameter_list},
};

pub fn ty(p: &mut Parser<'_>) -> NodeId {
    if p.at(TokenKind::OpenBrace) {
        object_type(p)
    } else if p.at(TokenKind::LessThan) || p.at(TokenKind::OpenParen) {
        signature_type(p)
    } else {
        ident(p)
    }
}

fn object_type(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();
    p.bump();

    let mut properties = Vec::new();
    while !p.at(TokenKind::CloseBrace) && !p.at_end() {
        let property_start = p.start();
        let name = ident(p);
        let typename = if p.try_eat(TokenKind::Colon) {
            Some(ty(p))
        } else {
            None
        };

        properties.push(p.alloc(
            NodeKind::PropertyDeclaration(PropertyDeclaration { name, typename }),
            property_start..p.prev_end(),
        ));

        if !p.try_eat(TokenKind::Comma) {
            break;
        }
    }
    p.expect(TokenKind::CloseBrace);

    p.alloc(
        NodeKind::ObjectTypeNode(ObjectTypeNode { properties }),
        start..p.prev_end(),
    )
}

fn signature_type(p: &mut Parser<'_>) -> NodeId {
    let start = p.start();

    let type_parameters = if p.at(TokenKind::LessThan) {
        Some(type_parameter_list(p))
    } else {
        None
    };

    p.expect(TokenKind::OpenParen);
    let parameters = parameter_list(p);
    p.expect(TokenKind::FatArrow);
    let return_typename = Some(ty(p));

    p.alloc(
        NodeKind::SignatureTypeNode(SignatureTypeNode {
            type_parameters,
            parameters,
            return_typename,
            locals: Table::new(),
        }),
        start..p.prev_end(),
    )
}
