use std::fmt::Write as _;

use crate::{Database, NodeId, NodeKind};

impl Database {
    /// Renders an indented outline of a subtree, used by the parser's
    /// snapshot tests.
    pub fn debug_node(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.debug_node_impl(id, 0, &mut output);
        output
    }

    fn debug_node_impl(&self, id: NodeId, depth: usize, output: &mut String) {
        let pad = "  ".repeat(depth);

        let children: Vec<NodeId> = match &self.node(id).kind {
            NodeKind::Module(module) => {
                let _ = writeln!(output, "{pad}Module");
                module.statements.clone()
            }
            NodeKind::Var(var) => {
                let _ = writeln!(output, "{pad}Var");
                [Some(var.name), var.typename, Some(var.initializer)]
                    .into_iter()
                    .flatten()
                    .collect()
            }
            NodeKind::TypeAlias(alias) => {
                let _ = writeln!(output, "{pad}TypeAlias");
                vec![alias.name, alias.typename]
            }
            NodeKind::ExprStmt(stmt) => {
                let _ = writeln!(output, "{pad}ExprStmt");
                vec![stmt.expression]
            }
            NodeKind::Return(ret) => {
                let _ = writeln!(output, "{pad}Return");
                vec![ret.expression]
            }
            NodeKind::Ident(ident) => {
                let _ = writeln!(output, "{pad}Ident `{}`", ident.text);
                Vec::new()
            }
            NodeKind::NumberLiteral(literal) => {
                let _ = writeln!(output, "{pad}NumberLiteral `{}`", literal.value);
                Vec::new()
            }
            NodeKind::StringLiteral(literal) => {
                let _ = writeln!(output, "{pad}StringLiteral `{}`", literal.value);
                Vec::new()
            }
            NodeKind::Assignment(assignment) => {
                let _ = writeln!(output, "{pad}Assignment");
                vec![assignment.name, assignment.value]
            }
            NodeKind::ObjectLiteral(object) => {
                let _ = writeln!(output, "{pad}ObjectLiteral");
                object.properties.clone()
            }
            NodeKind::PropertyAssignment(property) => {
                let _ = writeln!(output, "{pad}PropertyAssignment");
                vec![property.name, property.initializer]
            }
            NodeKind::Function(function) => {
                let _ = writeln!(output, "{pad}Function");
                function
                    .name
                    .into_iter()
                    .chain(function.type_parameters.clone().unwrap_or_default())
                    .chain(function.parameters.clone())
                    .chain(function.typename)
                    .chain(function.body.clone())
                    .collect()
            }
            NodeKind::Call(call) => {
                let _ = writeln!(output, "{pad}Call");
                [call.expression]
                    .into_iter()
                    .chain(call.type_arguments.clone().unwrap_or_default())
                    .chain(call.arguments.clone())
                    .collect()
            }
            NodeKind::Parameter(parameter) => {
                let _ = writeln!(output, "{pad}Parameter");
                [Some(parameter.name), parameter.typename]
                    .into_iter()
                    .flatten()
                    .collect()
            }
            NodeKind::TypeParameter(parameter) => {
                let _ = writeln!(output, "{pad}TypeParameter");
                vec![parameter.name]
            }
            NodeKind::ObjectTypeNode(object) => {
                let _ = writeln!(output, "{pad}ObjectTypeNode");
                object.properties.clone()
            }
            NodeKind::PropertyDeclaration(property) => {
                let _ = writeln!(output, "{pad}PropertyDeclaration");
                [Some(property.name), property.typename]
                    .into_iter()
                    .flatten()
                    .collect()
            }
            NodeKind::SignatureTypeNode(signature) => {
                let _ = writeln!(output, "{pad}SignatureTypeNode");
                signature
                    .type_parameters
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .chain(signature.parameters.clone())
                    .chain(signature.return_typename)
                    .collect()
            }
        };

        for child in children {
            self.debug_node_impl(child, depth + 1, output);
        }
    }
}
