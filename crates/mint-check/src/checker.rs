use indexmap::IndexSet;
use mint_ast::{
    Database, Meaning, NodeId, NodeKind, ObjectLiteral, ObjectType, ObjectTypeNode, SymbolId,
    Table, Type, TypeId,
};
use mint_diagnostic::{DiagnosticKind, Diagnostics};

use crate::{BuiltinTypes, resolve};

/// Computes the type of every expression on demand, memoising per symbol.
/// The checker treats the bound tree as read-only apart from writing the
/// memoised types back onto symbols.
#[derive(Debug)]
pub struct Checker<'a> {
    pub(crate) db: &'a mut Database,
    pub(crate) diagnostics: &'a mut Diagnostics,
    pub(crate) builtins: BuiltinTypes,
    pub(crate) in_progress_values: IndexSet<SymbolId>,
    pub(crate) in_progress_types: IndexSet<SymbolId>,
    pub(crate) assignable_stack: IndexSet<(TypeId, TypeId)>,
}

impl<'a> Checker<'a> {
    pub fn new(db: &'a mut Database, diagnostics: &'a mut Diagnostics) -> Self {
        let builtins = BuiltinTypes::alloc(db);
        Self {
            db,
            diagnostics,
            builtins,
            in_progress_values: IndexSet::new(),
            in_progress_types: IndexSet::new(),
            assignable_stack: IndexSet::new(),
        }
    }

    pub fn builtins(&self) -> BuiltinTypes {
        self.builtins
    }

    /// Checks every top-level statement and returns their types in source
    /// order.
    pub fn check(&mut self, module: NodeId) -> Vec<TypeId> {
        self.db
            .module(module)
            .statements
            .clone()
            .into_iter()
            .map(|statement| self.check_statement(statement))
            .collect()
    }

    pub(crate) fn check_statement(&mut self, statement: NodeId) -> TypeId {
        match self.db.node(statement).kind.clone() {
            NodeKind::ExprStmt(stmt) => self.check_expression(stmt.expression),
            NodeKind::Var(var) => {
                let initializer_type = self.check_expression(var.initializer);
                let Some(typename) = var.typename else {
                    return initializer_type;
                };
                let declared_type = self.check_type(typename);
                if !self.is_assignable_to(initializer_type, declared_type) {
                    let initializer = self.type_to_string(initializer_type);
                    let declared = self.type_to_string(declared_type);
                    let span = self.db.node(var.initializer).span.clone();
                    self.diagnostics.insert(
                        span,
                        DiagnosticKind::InitializerNotAssignable(initializer, declared),
                    );
                }
                declared_type
            }
            NodeKind::TypeAlias(alias) => self.check_type(alias.typename),
            NodeKind::Return(ret) => self.check_expression(ret.expression),
            _ => unreachable!("statement node expected"),
        }
    }

    pub(crate) fn check_expression(&mut self, expression: NodeId) -> TypeId {
        match self.db.node(expression).kind.clone() {
            NodeKind::Ident(ident) => {
                match resolve(self.db, expression, &ident.text, Meaning::Value) {
                    Some(symbol) => self.get_value_type_of_symbol(symbol),
                    None => {
                        let span = self.db.node(expression).span.clone();
                        self.diagnostics
                            .insert(span, DiagnosticKind::CouldNotResolve(ident.text));
                        self.builtins.error
                    }
                }
            }
            NodeKind::NumberLiteral(_) => self.builtins.number,
            NodeKind::StringLiteral(_) => self.builtins.string,
            NodeKind::ObjectLiteral(object) => self.check_object(&object),
            NodeKind::Assignment(assignment) => {
                let value_type = self.check_expression(assignment.value);
                let name_type = self.check_expression(assignment.name);
                if !self.is_assignable_to(value_type, name_type) {
                    let value = self.type_to_string(value_type);
                    let name = self.type_to_string(name_type);
                    let span = self.db.node(assignment.name).span.clone();
                    self.diagnostics
                        .insert(span, DiagnosticKind::ValueNotAssignable(value, name));
                }
                name_type
            }
            NodeKind::Function(_) => {
                let symbol = self.db.symbol_of(expression);
                self.get_value_type_of_symbol(symbol)
            }
            NodeKind::Call(call) => self.check_call(&call),
            _ => unreachable!("expression node expected"),
        }
    }

    /// Builds a fresh object type for an object literal. Object types are
    /// never cached, so two identical literals get distinct type ids.
    fn check_object(&mut self, object: &ObjectLiteral) -> TypeId {
        let mut members = Table::new();

        for &property in &object.properties {
            let NodeKind::PropertyAssignment(assignment) = self.db.node(property).kind.clone()
            else {
                unreachable!("object literal property expected")
            };
            let name = self.db.ident_text(assignment.name).to_string();
            let Some(symbol) = resolve(self.db, property, &name, Meaning::Value) else {
                unreachable!("property has no symbol after binding")
            };
            members.insert(name, symbol);
            self.check_expression(assignment.initializer);
        }

        self.db.alloc_type(Type::Object(ObjectType { members }))
    }

    /// The object-type analog of `check_object`, memoised on the type
    /// node's symbol.
    pub(crate) fn check_object_literal_type(
        &mut self,
        node: NodeId,
        object: &ObjectTypeNode,
    ) -> TypeId {
        let symbol_id = self.db.symbol_of(node);
        if let Some(cached) = self.db.symbol(symbol_id).type_type {
            return cached;
        }

        let mut members = Table::new();
        for &property in &object.properties {
            let NodeKind::PropertyDeclaration(declaration) = self.db.node(property).kind.clone()
            else {
                unreachable!("object type property expected")
            };
            let name = self.db.ident_text(declaration.name).to_string();
            let Some(symbol) = resolve(self.db, property, &name, Meaning::Value) else {
                unreachable!("property has no symbol after binding")
            };
            members.insert(name, symbol);
            if let Some(typename) = declaration.typename {
                self.check_type(typename);
            }
        }

        let ty = self.db.alloc_type(Type::Object(ObjectType { members }));
        self.db.symbol_mut(symbol_id).type_type = Some(ty);
        ty
    }

    pub(crate) fn check_type(&mut self, typename: NodeId) -> TypeId {
        match self.db.node(typename).kind.clone() {
            NodeKind::Ident(ident) => match ident.text.as_str() {
                "string" => self.builtins.string,
                "number" => self.builtins.number,
                _ => match resolve(self.db, typename, &ident.text, Meaning::Type) {
                    Some(symbol) => self.get_type_type_of_symbol(symbol),
                    None => {
                        let span = self.db.node(typename).span.clone();
                        self.diagnostics
                            .insert(span, DiagnosticKind::CouldNotResolveType(ident.text));
                        self.builtins.error
                    }
                },
            },
            NodeKind::ObjectTypeNode(object) => self.check_object_literal_type(typename, &object),
            NodeKind::SignatureTypeNode(_) => {
                let symbol = self.db.symbol_of(typename);
                self.get_type_type_of_symbol(symbol)
            }
            _ => unreachable!("type node expected"),
        }
    }
}
