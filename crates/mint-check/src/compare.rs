use log::trace;
use mint_ast::{FunctionType, Mapper, ObjectType, Type, TypeId};

use crate::{Checker, instantiate_signature};

impl Checker<'_> {
    /// Structural assignability: can a value of type `source` be used where
    /// `target` is expected? Reflexive, not symmetric. `any` and `error`
    /// absorb in both directions so one failure does not cascade.
    pub fn is_assignable_to(&mut self, source: TypeId, target: TypeId) -> bool {
        if source == target || self.is_absorbing(source) || self.is_absorbing(target) {
            return true;
        }

        // A revisited pair means the comparison reached a cycle through a
        // recursive type; treat it as assignable.
        if !self.assignable_stack.insert((source, target)) {
            return true;
        }

        trace!(
            "comparing type {} to type {}",
            source.index(),
            target.index()
        );

        let result = match (self.db.ty(source).clone(), self.db.ty(target).clone()) {
            (Type::Primitive(_), _) | (_, Type::Primitive(_)) => false,
            (Type::Object(source_object), Type::Object(target_object)) => {
                self.is_object_assignable_to(&source_object, &target_object)
            }
            (Type::Function(source_function), Type::Function(target_function)) => {
                self.is_function_assignable_to(&source_function, &target_function)
            }
            _ => false,
        };

        self.assignable_stack.swap_remove(&(source, target));
        result
    }

    fn is_absorbing(&self, ty: TypeId) -> bool {
        ty == self.builtins.any || ty == self.builtins.error
    }

    /// Every member of the target must exist in the source with an
    /// assignable type; extra source members are fine.
    fn is_object_assignable_to(&mut self, source: &ObjectType, target: &ObjectType) -> bool {
        let mut result = true;

        for (name, &target_member) in &target.members {
            let Some(&source_member) = source.members.get(name) else {
                result = false;
                continue;
            };
            let source_member_type = self.get_value_type_of_symbol(source_member);
            let target_member_type = self.get_value_type_of_symbol(target_member);
            if !self.is_assignable_to(source_member_type, target_member_type) {
                result = false;
            }
        }

        result
    }

    /// Returns are compared covariantly and parameters contravariantly. A
    /// source with fewer parameters is fine (callers may pass extra
    /// arguments). When both sides are generic, the target's type
    /// variables are renamed into the source's before comparing.
    fn is_function_assignable_to(
        &mut self,
        source: &FunctionType,
        target: &FunctionType,
    ) -> bool {
        let source_signature = source.signature.clone();
        let mut target_signature = target.signature.clone();

        if let (Some(source_type_parameters), Some(target_type_parameters)) = (
            &source_signature.type_parameters,
            &target_signature.type_parameters,
        ) {
            let sources: Vec<TypeId> = target_type_parameters
                .iter()
                .map(|&type_parameter| self.get_type_type_of_symbol(type_parameter))
                .collect();
            let targets: Vec<TypeId> = source_type_parameters
                .iter()
                .map(|&type_parameter| self.get_type_type_of_symbol(type_parameter))
                .collect();

            let len = sources.len().min(targets.len());
            let mapper = Mapper::new(sources[..len].to_vec(), targets[..len].to_vec());
            target_signature = instantiate_signature(self.db, &target_signature, &mapper);
        }

        if !self.is_assignable_to(
            source_signature.return_type,
            target_signature.return_type,
        ) {
            return false;
        }

        if source_signature.parameters.len() > target_signature.parameters.len() {
            return false;
        }

        let mut result = true;
        for (&source_parameter, &target_parameter) in source_signature
            .parameters
            .iter()
            .zip(target_signature.parameters.iter())
        {
            let source_parameter_type = self.get_value_type_of_symbol(source_parameter);
            let target_parameter_type = self.get_value_type_of_symbol(target_parameter);
            if !self.is_assignable_to(target_parameter_type, source_parameter_type) {
                result = false;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use mint_ast::Database;
    use mint_diagnostic::Diagnostics;

    use super::*;

    #[test]
    fn test_primitives_are_only_assignable_to_themselves() {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let mut checker = Checker::new(&mut db, &mut diagnostics);
        let builtins = checker.builtins();

        assert!(checker.is_assignable_to(builtins.number, builtins.number));
        assert!(checker.is_assignable_to(builtins.string, builtins.string));
        assert!(!checker.is_assignable_to(builtins.number, builtins.string));
        assert!(!checker.is_assignable_to(builtins.string, builtins.number));
    }

    #[test]
    fn test_any_and_error_absorb_in_both_directions() {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let mut checker = Checker::new(&mut db, &mut diagnostics);
        let builtins = checker.builtins();

        for ty in [builtins.string, builtins.number, builtins.error, builtins.any] {
            assert!(checker.is_assignable_to(ty, builtins.any));
            assert!(checker.is_assignable_to(builtins.any, ty));
            assert!(checker.is_assignable_to(ty, builtins.error));
            assert!(checker.is_assignable_to(builtins.error, ty));
        }
    }

    #[test]
    fn test_type_variables_compare_by_identity() {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let mut checker = Checker::new(&mut db, &mut diagnostics);

        let t = checker.db.alloc_type(mint_ast::Type::Variable(mint_ast::TypeVariable {
            name: "T".to_string(),
        }));
        let u = checker.db.alloc_type(mint_ast::Type::Variable(mint_ast::TypeVariable {
            name: "U".to_string(),
        }));

        assert!(checker.is_assignable_to(t, t));
        assert!(!checker.is_assignable_to(t, u));
    }
}
