use log::trace;
use mint_ast::{
    Function, FunctionType, NodeId, NodeKind, Signature, SignatureTypeNode, SymbolId, Type,
    TypeId, TypeVariable,
};
use mint_diagnostic::DiagnosticKind;

use crate::{Checker, instantiate_type};

impl Checker<'_> {
    /// The type a symbol has when used as a value. Computed from the value
    /// declaration on first use and memoised. A reentrant query (a
    /// self-referential declaration) yields `any` instead of diverging.
    pub fn get_value_type_of_symbol(&mut self, symbol_id: SymbolId) -> TypeId {
        let symbol = self.db.symbol(symbol_id).clone();

        let Some(value_declaration) = symbol.value_declaration else {
            unreachable!("cannot get the value type of a symbol with no value declaration")
        };

        if let Some(cached) = symbol.value_type {
            return cached;
        }

        if !self.in_progress_values.insert(symbol_id) {
            trace!("value type of symbol {} is in progress", symbol_id.index());
            return self.builtins.any;
        }

        let result = if let (Some(target), Some(mapper)) = (symbol.target, symbol.mapper) {
            let target_type = self.get_value_type_of_symbol(target);
            instantiate_type(self.db, target_type, &mapper)
        } else {
            match self.db.node(value_declaration).kind.clone() {
                NodeKind::Var(_) => self.check_statement(value_declaration),
                NodeKind::ObjectLiteral(_) => self.check_expression(value_declaration),
                NodeKind::PropertyAssignment(property) => {
                    self.check_expression(property.initializer)
                }
                NodeKind::PropertyDeclaration(property) => match property.typename {
                    Some(typename) => self.check_type(typename),
                    None => self.builtins.any,
                },
                NodeKind::Parameter(parameter) => match parameter.typename {
                    Some(typename) => self.check_type(typename),
                    None => self.builtins.any,
                },
                NodeKind::Function(function) => {
                    self.get_type_of_function(value_declaration, &function)
                }
                _ => unreachable!("declaration cannot produce a value type"),
            }
        };

        self.in_progress_values.swap_remove(&symbol_id);
        self.db.symbol_mut(symbol_id).value_type = Some(result);
        result
    }

    /// The type a symbol has when used in type position: the aliased type
    /// for a type alias, a fresh type variable for a type parameter, and a
    /// function type for a signature type node.
    pub fn get_type_type_of_symbol(&mut self, symbol_id: SymbolId) -> TypeId {
        let symbol = self.db.symbol(symbol_id).clone();

        if let Some(cached) = symbol.type_type {
            return cached;
        }

        if !self.in_progress_types.insert(symbol_id) {
            trace!("type of symbol {} is in progress", symbol_id.index());
            return self.builtins.any;
        }

        let result = if let (Some(target), Some(mapper)) = (symbol.target, symbol.mapper) {
            let target_type = self.get_type_type_of_symbol(target);
            instantiate_type(self.db, target_type, &mapper)
        } else {
            let mut found = None;

            for declaration in symbol.declarations {
                match self.db.node(declaration).kind.clone() {
                    NodeKind::TypeAlias(alias) => {
                        found = Some(self.check_type(alias.typename));
                        break;
                    }
                    NodeKind::TypeParameter(parameter) => {
                        let name = self.db.ident_text(parameter.name).to_string();
                        found = Some(self.db.alloc_type(Type::Variable(TypeVariable { name })));
                        break;
                    }
                    NodeKind::SignatureTypeNode(signature) => {
                        found = Some(self.get_type_of_signature(&signature));
                        break;
                    }
                    _ => {}
                }
            }

            match found {
                Some(result) => result,
                None => unreachable!("no declaration of the symbol produces a type"),
            }
        };

        self.in_progress_types.swap_remove(&symbol_id);
        self.db.symbol_mut(symbol_id).type_type = Some(result);
        result
    }

    /// Builds a function type from a function expression: check the
    /// parameter lists for their side effects, then take the declared
    /// return type or fall back to what the body returns.
    pub(crate) fn get_type_of_function(&mut self, node: NodeId, function: &Function) -> TypeId {
        for &type_parameter in function.type_parameters.iter().flatten() {
            let symbol = self.db.symbol_of(type_parameter);
            self.get_type_type_of_symbol(symbol);
        }
        for &parameter in &function.parameters {
            let symbol = self.db.symbol_of(parameter);
            self.get_value_type_of_symbol(symbol);
        }

        let declared_type = function.typename.map(|typename| self.check_type(typename));
        let body_type = self.check_body(&function.body, declared_type);
        let return_type = declared_type.or(body_type).unwrap_or(self.builtins.any);

        let signature = Signature {
            type_parameters: function.type_parameters.as_ref().map(|type_parameters| {
                type_parameters
                    .iter()
                    .map(|&type_parameter| self.db.symbol_of(type_parameter))
                    .collect()
            }),
            parameters: function
                .parameters
                .iter()
                .map(|&parameter| self.db.symbol_of(parameter))
                .collect(),
            return_type,
            target: None,
            mapper: None,
        };

        let ty = self.db.alloc_type(Type::Function(FunctionType { signature }));
        let symbol_id = self.db.symbol_of(node);
        self.db.symbol_mut(symbol_id).value_type = Some(ty);
        ty
    }

    /// The analogous builder for signature type nodes; the return type
    /// defaults to `any` when the annotation is missing.
    fn get_type_of_signature(&mut self, signature_node: &SignatureTypeNode) -> TypeId {
        for &type_parameter in signature_node.type_parameters.iter().flatten() {
            let symbol = self.db.symbol_of(type_parameter);
            self.get_type_type_of_symbol(symbol);
        }
        for &parameter in &signature_node.parameters {
            let symbol = self.db.symbol_of(parameter);
            self.get_value_type_of_symbol(symbol);
        }

        let return_type = signature_node
            .return_typename
            .map_or(self.builtins.any, |typename| self.check_type(typename));

        let signature = Signature {
            type_parameters: signature_node.type_parameters.as_ref().map(|type_parameters| {
                type_parameters
                    .iter()
                    .map(|&type_parameter| self.db.symbol_of(type_parameter))
                    .collect()
            }),
            parameters: signature_node
                .parameters
                .iter()
                .map(|&parameter| self.db.symbol_of(parameter))
                .collect(),
            return_type,
            target: None,
            mapper: None,
        };

        self.db.alloc_type(Type::Function(FunctionType { signature }))
    }

    /// Checks every statement of a function body, then validates each
    /// `return` against the declared return type. Returns inside nested
    /// functions belong to those functions and are not visited here.
    fn check_body(&mut self, body: &[NodeId], declared_type: Option<TypeId>) -> Option<TypeId> {
        for &statement in body {
            self.check_statement(statement);
        }

        let mut first_return = None;

        for &statement in body {
            let NodeKind::Return(ret) = self.db.node(statement).kind.clone() else {
                continue;
            };

            let return_type = self.check_expression(ret.expression);

            if let Some(declared_type) = declared_type
                && return_type != declared_type
                && !self.is_assignable_to(return_type, declared_type)
            {
                let returned = self.type_to_string(return_type);
                let declared = self.type_to_string(declared_type);
                let span = self.db.node(statement).span.clone();
                self.diagnostics
                    .insert(span, DiagnosticKind::ReturnTypeMismatch(returned, declared));
            }

            if first_return.is_none() {
                first_return = Some(return_type);
            }
        }

        first_return
    }
}
