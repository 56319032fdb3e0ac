use mint_ast::{Call, Mapper, Type, TypeId};
use mint_diagnostic::DiagnosticKind;

use crate::{Checker, instantiate_signature};

impl Checker<'_> {
    /// Checks a call expression: resolve the callee to a function type,
    /// instantiate it if it is generic (inferring type arguments when none
    /// are written), then compare arity and argument types.
    pub(crate) fn check_call(&mut self, call: &Call) -> TypeId {
        let expression_type = self.check_expression(call.expression);

        let Type::Function(function) = self.db.ty(expression_type).clone() else {
            let rendered = self.type_to_string(expression_type);
            let span = self.db.node(call.expression).span.clone();
            self.diagnostics
                .insert(span, DiagnosticKind::NotCallable(rendered));
            return self.builtins.error;
        };

        let argument_types: Vec<TypeId> = call
            .arguments
            .iter()
            .map(|&argument| self.check_expression(argument))
            .collect();

        let mut signature = function.signature;

        if let Some(type_parameter_symbols) = signature.type_parameters.clone() {
            let type_parameters: Vec<TypeId> = type_parameter_symbols
                .iter()
                .map(|&type_parameter| self.get_type_type_of_symbol(type_parameter))
                .collect();

            let type_arguments: Vec<TypeId> = match &call.type_arguments {
                None => self.infer_type_arguments(&type_parameters, &signature, &argument_types),
                Some(nodes) if nodes.len() != type_parameters.len() => {
                    let span = self.db.node(call.expression).span.clone();
                    self.diagnostics.insert(
                        span,
                        DiagnosticKind::WrongTypeArgumentCount(type_parameters.len(), nodes.len()),
                    );
                    vec![self.builtins.any; type_parameters.len()]
                }
                Some(nodes) => nodes.iter().map(|&node| self.check_type(node)).collect(),
            };

            signature = instantiate_signature(
                self.db,
                &signature,
                &Mapper::new(type_parameters, type_arguments),
            );
        }

        if signature.parameters.len() != call.arguments.len() {
            let span = self.db.node(call.expression).span.clone();
            self.diagnostics.insert(
                span,
                DiagnosticKind::WrongArgumentCount(
                    signature.parameters.len(),
                    call.arguments.len(),
                ),
            );
        }

        for (index, (&argument_type, &parameter)) in argument_types
            .iter()
            .zip(signature.parameters.iter())
            .enumerate()
        {
            let parameter_type = self.get_value_type_of_symbol(parameter);
            if !self.is_assignable_to(argument_type, parameter_type) {
                let expected = self.type_to_string(parameter_type);
                let actual = self.type_to_string(argument_type);
                let span = self.db.node(call.arguments[index]).span.clone();
                self.diagnostics
                    .insert(span, DiagnosticKind::ArgumentNotAssignable(expected, actual));
            }
        }

        signature.return_type
    }
}
