use mint_ast::{Database, NodeId, NodeKind};

/// Serialises a module back to source text, one statement per line. Type
/// annotations still present in the tree are rendered, so emitting an
/// untransformed module round-trips; after `transform` the output is the
/// type-free program.
pub fn emit(db: &Database, module: NodeId) -> String {
    db.module(module)
        .statements
        .iter()
        .map(|&statement| emit_statement(db, statement))
        .collect::<Vec<String>>()
        .join(";\n")
}

fn emit_statement(db: &Database, statement: NodeId) -> String {
    match &db.node(statement).kind {
        NodeKind::Var(var) => {
            let annotation = var
                .typename
                .map_or_else(String::new, |typename| format!(": {}", emit_type(db, typename)));
            format!(
                "var {}{annotation} = {}",
                db.ident_text(var.name),
                emit_expression(db, var.initializer)
            )
        }
        NodeKind::TypeAlias(alias) => format!(
            "type {} = {}",
            db.ident_text(alias.name),
            emit_type(db, alias.typename)
        ),
        NodeKind::ExprStmt(stmt) => emit_expression(db, stmt.expression),
        NodeKind::Return(ret) => format!("return {}", emit_expression(db, ret.expression)),
        _ => unreachable!("statement node expected"),
    }
}

fn emit_expression(db: &Database, expression: NodeId) -> String {
    match &db.node(expression).kind {
        NodeKind::Ident(ident) => ident.text.clone(),
        NodeKind::NumberLiteral(literal) => literal.value.clone(),
        NodeKind::StringLiteral(literal) => format!("\"{}\"", literal.value),
        NodeKind::Assignment(assignment) => format!(
            "{} = {}",
            db.ident_text(assignment.name),
            emit_expression(db, assignment.value)
        ),
        NodeKind::ObjectLiteral(object) => {
            if object.properties.is_empty() {
                "{}".to_string()
            } else {
                let properties: Vec<String> = object
                    .properties
                    .iter()
                    .map(|&property| {
                        let NodeKind::PropertyAssignment(assignment) = &db.node(property).kind
                        else {
                            unreachable!("object literal property expected")
                        };
                        format!(
                            "{}: {}",
                            db.ident_text(assignment.name),
                            emit_expression(db, assignment.initializer)
                        )
                    })
                    .collect();
                format!("{{ {} }}", properties.join(", "))
            }
        }
        NodeKind::Function(function) => {
            let name = function
                .name
                .map_or_else(|| " ".to_string(), |name| format!(" {}", db.ident_text(name)));
            let type_parameters = function.type_parameters.as_ref().map_or_else(
                String::new,
                |type_parameters| {
                    let names: Vec<String> = type_parameters
                        .iter()
                        .map(|&type_parameter| {
                            let NodeKind::TypeParameter(parameter) =
                                &db.node(type_parameter).kind
                            else {
                                unreachable!("type parameter expected")
                            };
                            db.ident_text(parameter.name).to_string()
                        })
                        .collect();
                    format!("<{}>", names.join(", "))
                },
            );
            let parameters: Vec<String> = function
                .parameters
                .iter()
                .map(|&parameter| emit_parameter(db, parameter))
                .collect();
            let annotation = function
                .typename
                .map_or_else(String::new, |typename| format!(": {}", emit_type(db, typename)));
            let body: Vec<String> = function
                .body
                .iter()
                .map(|&statement| emit_statement(db, statement))
                .collect();
            let body = if body.is_empty() {
                " ".to_string()
            } else {
                format!(" {} ", body.join("; "))
            };
            format!(
                "function{name}{type_parameters}({}){annotation} {{{body}}}",
                parameters.join(", ")
            )
        }
        NodeKind::Call(call) => {
            let type_arguments = call.type_arguments.as_ref().map_or_else(
                String::new,
                |type_arguments| {
                    let rendered: Vec<String> = type_arguments
                        .iter()
                        .map(|&type_argument| emit_type(db, type_argument))
                        .collect();
                    format!("<{}>", rendered.join(", "))
                },
            );
            let arguments: Vec<String> = call
                .arguments
                .iter()
                .map(|&argument| emit_expression(db, argument))
                .collect();
            format!(
                "{}{type_arguments}({})",
                emit_expression(db, call.expression),
                arguments.join(", ")
            )
        }
        _ => unreachable!("expression node expected"),
    }
}

fn emit_parameter(db: &Database, parameter: NodeId) -> String {
    let NodeKind::Parameter(declaration) = &db.node(parameter).kind else {
        unreachable!("parameter expected")
    };
    let annotation = declaration
        .typename
        .map_or_else(String::new, |typename| format!(": {}", emit_type(db, typename)));
    format!("{}{annotation}", db.ident_text(declaration.name))
}

fn emit_type(db: &Database, typename: NodeId) -> String {
    match &db.node(typename).kind {
        NodeKind::Ident(ident) => ident.text.clone(),
        NodeKind::ObjectTypeNode(object) => {
            if object.properties.is_empty() {
                "{}".to_string()
            } else {
                let properties: Vec<String> = object
                    .properties
                    .iter()
                    .map(|&property| {
                        let NodeKind::PropertyDeclaration(declaration) = &db.node(property).kind
                        else {
                            unreachable!("object type property expected")
                        };
                        let annotation = declaration.typename.map_or_else(String::new, |ty| {
                            format!(": {}", emit_type(db, ty))
                        });
                        format!("{}{annotation}", db.ident_text(declaration.name))
                    })
                    .collect();
                format!("{{ {} }}", properties.join(", "))
            }
        }
        NodeKind::SignatureTypeNode(signature) => {
            let type_parameters = signature.type_parameters.as_ref().map_or_else(
                String::new,
                |type_parameters| {
                    let names: Vec<String> = type_parameters
                        .iter()
                        .map(|&type_parameter| {
                            let NodeKind::TypeParameter(parameter) =
                                &db.node(type_parameter).kind
                            else {
                                unreachable!("type parameter expected")
                            };
                            db.ident_text(parameter.name).to_string()
                        })
                        .collect();
                    format!("<{}>", names.join(", "))
                },
            );
            let parameters: Vec<String> = signature
                .parameters
                .iter()
                .map(|&parameter| emit_parameter(db, parameter))
                .collect();
            let return_type = signature
                .return_typename
                .map_or_else(|| "any".to_string(), |ty| emit_type(db, ty));
            format!("{type_parameters}({}) => {return_type}", parameters.join(", "))
        }
        _ => unreachable!("type node expected"),
    }
}
