use mint_ast::{Database, NodeId, NodeKind};

/// Strips the type information out of a checked module: type aliases are
/// dropped, annotations on variables, parameters, and functions are
/// cleared, and generic parameter and argument lists are removed.
/// Everything else is left in place.
pub fn transform(db: &mut Database, module: NodeId) {
    let kept: Vec<NodeId> = db
        .module(module)
        .statements
        .clone()
        .into_iter()
        .filter(|&statement| !matches!(db.node(statement).kind, NodeKind::TypeAlias(_)))
        .collect();

    for &statement in &kept {
        transform_statement(db, statement);
    }

    let NodeKind::Module(module_data) = &mut db.node_mut(module).kind else {
        unreachable!("node is not a module")
    };
    module_data.statements = kept;
}

fn transform_statement(db: &mut Database, statement: NodeId) {
    match db.node(statement).kind.clone() {
        NodeKind::Var(var) => {
            let NodeKind::Var(var_data) = &mut db.node_mut(statement).kind else {
                unreachable!()
            };
            var_data.typename = None;
            transform_expression(db, var.initializer);
        }
        NodeKind::ExprStmt(stmt) => transform_expression(db, stmt.expression),
        NodeKind::Return(ret) => transform_expression(db, ret.expression),
        NodeKind::TypeAlias(_) => {}
        _ => unreachable!("statement node expected"),
    }
}

fn transform_expression(db: &mut Database, expression: NodeId) {
    match db.node(expression).kind.clone() {
        NodeKind::Ident(_) | NodeKind::NumberLiteral(_) | NodeKind::StringLiteral(_) => {}
        NodeKind::Assignment(assignment) => transform_expression(db, assignment.value),
        NodeKind::ObjectLiteral(object) => {
            for property in object.properties {
                let NodeKind::PropertyAssignment(assignment) = db.node(property).kind.clone()
                else {
                    unreachable!("object literal property expected")
                };
                transform_expression(db, assignment.initializer);
            }
        }
        NodeKind::Function(function) => {
            let body: Vec<NodeId> = function
                .body
                .iter()
                .copied()
                .filter(|&statement| !matches!(db.node(statement).kind, NodeKind::TypeAlias(_)))
                .collect();

            let NodeKind::Function(function_data) = &mut db.node_mut(expression).kind else {
                unreachable!()
            };
            function_data.typename = None;
            function_data.type_parameters = None;
            function_data.body = body.clone();

            for parameter in function.parameters {
                let NodeKind::Parameter(parameter_data) = &mut db.node_mut(parameter).kind
                else {
                    unreachable!("parameter expected")
                };
                parameter_data.typename = None;
            }

            for statement in body {
                transform_statement(db, statement);
            }
        }
        NodeKind::Call(call) => {
            let NodeKind::Call(call_data) = &mut db.node_mut(expression).kind else {
                unreachable!()
            };
            call_data.type_arguments = None;
            transform_expression(db, call.expression);
            for argument in call.arguments {
                transform_expression(db, argument);
            }
        }
        _ => unreachable!("expression node expected"),
    }
}
