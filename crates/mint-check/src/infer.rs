use log::trace;
use mint_ast::{Signature, Type, TypeId};

use crate::Checker;

impl Checker<'_> {
    /// Best-effort inference of type arguments for a generic call with no
    /// explicit type argument list. Each argument type is matched against
    /// the corresponding parameter type; the first candidate collected for
    /// a type parameter wins, and a parameter with no candidate infers
    /// `any`.
    pub(crate) fn infer_type_arguments(
        &mut self,
        type_parameters: &[TypeId],
        signature: &Signature,
        argument_types: &[TypeId],
    ) -> Vec<TypeId> {
        let mut inferences: Vec<Vec<TypeId>> = vec![Vec::new(); type_parameters.len()];

        for (&parameter, &argument_type) in signature.parameters.iter().zip(argument_types) {
            let parameter_type = self.get_value_type_of_symbol(parameter);
            self.infer_type(argument_type, parameter_type, type_parameters, &mut inferences);
        }

        inferences
            .into_iter()
            .enumerate()
            .map(|(index, candidates)| {
                trace!(
                    "type parameter {index} has {} inference candidates",
                    candidates.len()
                );
                candidates.first().copied().unwrap_or(self.builtins.any)
            })
            .collect()
    }

    /// Recurses structurally on the target. Only function types and type
    /// variable positions contribute inferences; primitive and object
    /// targets are skipped.
    fn infer_type(
        &mut self,
        source: TypeId,
        target: TypeId,
        type_parameters: &[TypeId],
        inferences: &mut [Vec<TypeId>],
    ) {
        match self.db.ty(target).clone() {
            Type::Primitive(_) | Type::Object(_) => {}
            Type::Variable(_) => {
                if let Some(index) = type_parameters
                    .iter()
                    .position(|&type_parameter| type_parameter == target)
                {
                    inferences[index].push(source);
                }
            }
            Type::Function(target_function) => {
                let Type::Function(source_function) = self.db.ty(source).clone() else {
                    return;
                };

                for (&source_parameter, &target_parameter) in source_function
                    .signature
                    .parameters
                    .iter()
                    .zip(target_function.signature.parameters.iter())
                {
                    let source_type = self.get_value_type_of_symbol(source_parameter);
                    let target_type = self.get_value_type_of_symbol(target_parameter);
                    self.infer_type(source_type, target_type, type_parameters, inferences);
                }

                if let (Some(source_type_parameters), Some(target_type_parameters)) = (
                    &source_function.signature.type_parameters,
                    &target_function.signature.type_parameters,
                ) {
                    for (&source_type_parameter, &target_type_parameter) in
                        source_type_parameters.iter().zip(target_type_parameters.iter())
                    {
                        let source_type = self.get_type_type_of_symbol(source_type_parameter);
                        let target_type = self.get_type_type_of_symbol(target_type_parameter);
                        self.infer_type(source_type, target_type, type_parameters, inferences);
                    }
                }

                self.infer_type(
                    source_function.signature.return_type,
                    target_function.signature.return_type,
                    type_parameters,
                    inferences,
                );
            }
        }
    }
}
