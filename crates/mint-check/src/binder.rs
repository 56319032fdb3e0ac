use mint_ast::{Database, Meaning, NodeId, NodeKind, Symbol, SymbolId};
use mint_diagnostic::{DiagnosticKind, Diagnostics};

/// Walks the module once in pre-order, setting `parent` on every child,
/// attaching a symbol to every declaration, and populating the scope
/// tables. After binding the tree is ready for the checker.
pub fn bind(db: &mut Database, module: NodeId, diagnostics: &mut Diagnostics) {
    Binder { db, diagnostics }.bind_module(module);
}

/// The table a declaration is inserted into: the `locals` of a module,
/// function, or signature node, or the `members` of an object symbol.
#[derive(Debug, Clone, Copy)]
enum Container {
    Locals(NodeId),
    Members(SymbolId),
}

#[derive(Debug)]
struct Binder<'a> {
    db: &'a mut Database,
    diagnostics: &'a mut Diagnostics,
}

impl Binder<'_> {
    fn bind_module(&mut self, module: NodeId) {
        for statement in self.db.module(module).statements.clone() {
            self.set_parent(statement, module);
            self.bind_statement(module, statement);
        }
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.db.node_mut(child).parent = Some(parent);
    }

    fn bind_statement(&mut self, container: NodeId, statement: NodeId) {
        match self.db.node(statement).kind.clone() {
            NodeKind::Var(var) => {
                self.set_parent(var.name, statement);
                self.declare_symbol(Container::Locals(container), statement, Meaning::Value);
                if let Some(typename) = var.typename {
                    self.set_parent(typename, statement);
                    self.bind_type(typename);
                }
                self.set_parent(var.initializer, statement);
                self.bind_expression(var.initializer);
            }
            NodeKind::TypeAlias(alias) => {
                self.set_parent(alias.name, statement);
                self.declare_symbol(Container::Locals(container), statement, Meaning::Type);
                self.set_parent(alias.typename, statement);
                self.bind_type(alias.typename);
            }
            NodeKind::ExprStmt(stmt) => {
                self.set_parent(stmt.expression, statement);
                self.bind_expression(stmt.expression);
            }
            NodeKind::Return(ret) => {
                self.set_parent(ret.expression, statement);
                self.bind_expression(ret.expression);
            }
            _ => unreachable!("statement node expected"),
        }
    }

    fn bind_expression(&mut self, expression: NodeId) {
        match self.db.node(expression).kind.clone() {
            NodeKind::Ident(_) | NodeKind::NumberLiteral(_) | NodeKind::StringLiteral(_) => {}
            NodeKind::Assignment(assignment) => {
                self.set_parent(assignment.name, expression);
                self.set_parent(assignment.value, expression);
                self.bind_expression(assignment.value);
            }
            NodeKind::ObjectLiteral(object) => {
                let symbol = self
                    .db
                    .alloc_symbol(Symbol::with_members(expression, Meaning::Value));
                self.db.node_mut(expression).symbol = Some(symbol);

                for property in object.properties {
                    self.set_parent(property, expression);
                    let NodeKind::PropertyAssignment(assignment) =
                        self.db.node(property).kind.clone()
                    else {
                        unreachable!("object literal property expected")
                    };
                    self.set_parent(assignment.name, property);
                    self.declare_symbol(Container::Members(symbol), property, Meaning::Value);
                    self.set_parent(assignment.initializer, property);
                    self.bind_expression(assignment.initializer);
                }
            }
            NodeKind::Function(function) => {
                let symbol = self.db.alloc_symbol(Symbol::new(expression, Meaning::Value));
                self.db.node_mut(expression).symbol = Some(symbol);

                if let Some(name) = function.name {
                    self.set_parent(name, expression);
                }
                for type_parameter in function.type_parameters.into_iter().flatten() {
                    self.set_parent(type_parameter, expression);
                    self.bind_type_parameter(expression, type_parameter);
                }
                for parameter in function.parameters {
                    self.set_parent(parameter, expression);
                    self.bind_parameter(expression, parameter);
                }
                if let Some(typename) = function.typename {
                    self.set_parent(typename, expression);
                    self.bind_type(typename);
                }
                for statement in function.body {
                    self.set_parent(statement, expression);
                    self.bind_statement(expression, statement);
                }
            }
            NodeKind::Call(call) => {
                self.set_parent(call.expression, expression);
                self.bind_expression(call.expression);
                for type_argument in call.type_arguments.into_iter().flatten() {
                    self.set_parent(type_argument, expression);
                    self.bind_type(type_argument);
                }
                for argument in call.arguments {
                    self.set_parent(argument, expression);
                    self.bind_expression(argument);
                }
            }
            _ => unreachable!("expression node expected"),
        }
    }

    fn bind_type(&mut self, typename: NodeId) {
        match self.db.node(typename).kind.clone() {
            NodeKind::Ident(_) => {}
            NodeKind::ObjectTypeNode(object) => {
                let symbol = self
                    .db
                    .alloc_symbol(Symbol::with_members(typename, Meaning::Type));
                self.db.node_mut(typename).symbol = Some(symbol);

                for property in object.properties {
                    self.set_parent(property, typename);
                    let NodeKind::PropertyDeclaration(declaration) =
                        self.db.node(property).kind.clone()
                    else {
                        unreachable!("object type property expected")
                    };
                    self.set_parent(declaration.name, property);
                    if let Some(property_typename) = declaration.typename {
                        self.set_parent(property_typename, property);
                        self.bind_type(property_typename);
                    }
                    self.declare_symbol(Container::Members(symbol), property, Meaning::Value);
                }
            }
            NodeKind::SignatureTypeNode(signature) => {
                let symbol = self.db.alloc_symbol(Symbol::new(typename, Meaning::Type));
                self.db.node_mut(typename).symbol = Some(symbol);

                for type_parameter in signature.type_parameters.into_iter().flatten() {
                    self.set_parent(type_parameter, typename);
                    self.bind_type_parameter(typename, type_parameter);
                }
                for parameter in signature.parameters {
                    self.set_parent(parameter, typename);
                    self.bind_parameter(typename, parameter);
                }
                if let Some(return_typename) = signature.return_typename {
                    self.set_parent(return_typename, typename);
                    self.bind_type(return_typename);
                }
            }
            _ => unreachable!("type node expected"),
        }
    }

    fn bind_type_parameter(&mut self, owner: NodeId, type_parameter: NodeId) {
        let NodeKind::TypeParameter(parameter) = self.db.node(type_parameter).kind.clone() else {
            unreachable!("type parameter expected")
        };
        self.set_parent(parameter.name, type_parameter);
        self.declare_symbol(Container::Locals(owner), type_parameter, Meaning::Type);
    }

    fn bind_parameter(&mut self, owner: NodeId, parameter: NodeId) {
        let NodeKind::Parameter(declaration) = self.db.node(parameter).kind.clone() else {
            unreachable!("parameter expected")
        };
        self.set_parent(declaration.name, parameter);
        if let Some(typename) = declaration.typename {
            self.set_parent(typename, parameter);
            self.bind_type(typename);
        }
        self.declare_symbol(Container::Locals(owner), parameter, Meaning::Value);
    }

    /// Inserts a declaration into a table. A second declaration of the same
    /// name extends the existing symbol when its meaning is new, and is
    /// reported (but kept bound to the symbol) when the meaning is already
    /// taken.
    fn declare_symbol(&mut self, container: Container, declaration: NodeId, meaning: Meaning) {
        let name = self.db.declaration_name(declaration);

        let symbol_id = if let Some(existing) = self.lookup(container, &name) {
            let conflict = self
                .db
                .symbol(existing)
                .declarations
                .clone()
                .into_iter()
                .find(|&other| Meaning::of(&self.db.node(other).kind) == Some(meaning));

            if let Some(first) = conflict {
                let first_pos = self.db.node(first).pos();
                let span = self.db.node(declaration).span.clone();
                self.diagnostics
                    .insert(span, DiagnosticKind::Redeclaration(name, first_pos));
            } else {
                let symbol = self.db.symbol_mut(existing);
                symbol.declarations.push(declaration);
                if meaning == Meaning::Value && symbol.value_declaration.is_none() {
                    symbol.value_declaration = Some(declaration);
                }
            }

            existing
        } else {
            let symbol = self.db.alloc_symbol(Symbol::new(declaration, meaning));
            self.insert(container, name, symbol);
            symbol
        };

        self.db.node_mut(declaration).symbol = Some(symbol_id);
    }

    fn lookup(&self, container: Container, name: &str) -> Option<SymbolId> {
        match container {
            Container::Locals(node) => match &self.db.node(node).kind {
                NodeKind::Module(module) => module.locals.get(name).copied(),
                NodeKind::Function(function) => function.locals.get(name).copied(),
                NodeKind::SignatureTypeNode(signature) => signature.locals.get(name).copied(),
                _ => unreachable!("container does not own a locals table"),
            },
            Container::Members(symbol) => self
                .db
                .symbol(symbol)
                .members
                .as_ref()
                .and_then(|members| members.get(name).copied()),
        }
    }

    fn insert(&mut self, container: Container, name: String, symbol: SymbolId) {
        match container {
            Container::Locals(node) => {
                let locals = match &mut self.db.node_mut(node).kind {
                    NodeKind::Module(module) => &mut module.locals,
                    NodeKind::Function(function) => &mut function.locals,
                    NodeKind::SignatureTypeNode(signature) => &mut signature.locals,
                    _ => unreachable!("container does not own a locals table"),
                };
                locals.insert(name, symbol);
            }
            Container::Members(owner) => {
                let members = self
                    .db
                    .symbol_mut(owner)
                    .members
                    .as_mut()
                    .unwrap_or_else(|| unreachable!("owner has no members table"));
                members.insert(name, symbol);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mint_ast::{Database, Meaning, NodeKind};
    use mint_diagnostic::Diagnostics;
    use mint_parser::parse;

    use super::*;

    fn bind_source(source: &str) -> (Database, mint_ast::NodeId, Diagnostics) {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let module = parse(&mut db, source, &mut diagnostics);
        bind(&mut db, module, &mut diagnostics);
        (db, module, diagnostics)
    }

    #[test]
    fn test_module_locals() {
        let (db, module, diagnostics) = bind_source("var x = 1; type T = number");
        assert!(diagnostics.is_empty());

        let locals = &db.module(module).locals;
        assert_eq!(
            locals.keys().cloned().collect::<Vec<String>>(),
            vec!["x".to_string(), "T".to_string()]
        );
    }

    #[test]
    fn test_declaration_symbols_and_parents() {
        let (db, module, _) = bind_source("var x = 1");

        let statement = db.module(module).statements[0];
        let symbol_id = db.symbol_of(statement);
        let symbol = db.symbol(symbol_id);

        assert_eq!(symbol.declarations, vec![statement]);
        assert_eq!(symbol.value_declaration, Some(statement));
        assert_eq!(db.node(statement).parent, Some(module));

        let NodeKind::Var(var) = &db.node(statement).kind else {
            panic!("expected a var statement");
        };
        assert_eq!(db.node(var.name).parent, Some(statement));
        assert_eq!(db.node(var.initializer).parent, Some(statement));
    }

    #[test]
    fn test_value_and_type_meanings_share_a_symbol() {
        let (db, module, diagnostics) = bind_source("var T = 1; type T = number");
        assert!(diagnostics.is_empty());

        let locals = &db.module(module).locals;
        let symbol = db.symbol(locals["T"]);
        assert_eq!(symbol.declarations.len(), 2);
        assert_eq!(symbol.value_declaration, Some(symbol.declarations[0]));
    }

    #[test]
    fn test_redeclaration_is_reported_once() {
        let (db, module, diagnostics) = bind_source("var x = 1; var x = 2");

        let messages: Vec<String> = diagnostics
            .iter()
            .map(|diagnostic| diagnostic.kind.to_string())
            .collect();
        assert_eq!(messages, vec!["Cannot redeclare x; first declared at 0"]);

        // The first declaration stays in the table, and the second is still
        // attached to the same symbol.
        let locals = &db.module(module).locals;
        let symbol = db.symbol(locals["x"]);
        assert_eq!(symbol.declarations.len(), 1);

        let second = db.module(module).statements[1];
        assert_eq!(db.node(second).symbol, Some(locals["x"]));
    }

    #[test]
    fn test_function_locals_hold_parameters_and_type_parameters() {
        let (db, module, diagnostics) = bind_source("var id = function <T>(x: T): T { return x }");
        assert!(diagnostics.is_empty());

        let statement = db.module(module).statements[0];
        let NodeKind::Var(var) = &db.node(statement).kind else {
            panic!("expected a var statement");
        };
        let NodeKind::Function(function) = &db.node(var.initializer).kind else {
            panic!("expected a function initializer");
        };

        assert_eq!(
            function.locals.keys().cloned().collect::<Vec<String>>(),
            vec!["T".to_string(), "x".to_string()]
        );

        let type_parameter = db.symbol(function.locals["T"]);
        assert_eq!(type_parameter.value_declaration, None);
        assert_eq!(
            Meaning::of(&db.node(type_parameter.declarations[0]).kind),
            Some(Meaning::Type)
        );
    }

    #[test]
    fn test_every_node_is_linked() {
        let (db, module, diagnostics) = bind_source(
            "type P = { x: number }; var p: P = { x: 1 }; var id = function <T>(x: T): T { return x }; id(p)",
        );
        assert!(diagnostics.is_empty());

        for (id, node) in db.nodes() {
            if id == module {
                assert!(node.parent.is_none());
            } else {
                assert!(node.parent.is_some(), "no parent on {:?}", node.kind);
            }

            let is_declaration = matches!(
                node.kind,
                NodeKind::Var(_)
                    | NodeKind::TypeAlias(_)
                    | NodeKind::PropertyAssignment(_)
                    | NodeKind::PropertyDeclaration(_)
                    | NodeKind::Parameter(_)
                    | NodeKind::TypeParameter(_)
                    | NodeKind::ObjectLiteral(_)
                    | NodeKind::ObjectTypeNode(_)
                    | NodeKind::Function(_)
                    | NodeKind::SignatureTypeNode(_)
            );
            if is_declaration {
                let symbol_id = node.symbol.unwrap_or_else(|| {
                    panic!("no symbol on declaration {:?}", node.kind)
                });
                assert!(db.symbol(symbol_id).declarations.contains(&id));
            }
        }
    }

    #[test]
    fn test_object_members() {
        let (db, module, diagnostics) = bind_source("var p = { x: 1, y: 2 }");
        assert!(diagnostics.is_empty());

        let statement = db.module(module).statements[0];
        let NodeKind::Var(var) = &db.node(statement).kind else {
            panic!("expected a var statement");
        };

        let symbol = db.symbol(db.symbol_of(var.initializer));
        let members = symbol.members.as_ref().expect("object symbol has members");
        assert_eq!(
            members.keys().cloned().collect::<Vec<String>>(),
            vec!["x".to_string(), "y".to_string()]
        );
    }
}
