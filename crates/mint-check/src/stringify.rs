use indexmap::IndexSet;
use mint_ast::{Type, TypeId};

use crate::Checker;

impl Checker<'_> {
    /// Renders a type for a diagnostic. Member and parameter types are
    /// computed on demand, so rendering can itself fill symbol caches.
    pub fn type_to_string(&mut self, id: TypeId) -> String {
        let mut stack = IndexSet::new();
        self.type_to_string_impl(id, &mut stack)
    }

    fn type_to_string_impl(&mut self, id: TypeId, stack: &mut IndexSet<TypeId>) -> String {
        if !stack.insert(id) {
            return "...".to_string();
        }

        let result = match self.db.ty(id).clone() {
            Type::Primitive(primitive) => primitive.name().to_string(),
            Type::Variable(variable) => variable.name,
            Type::Object(object) => {
                if object.members.is_empty() {
                    "{}".to_string()
                } else {
                    let members: Vec<String> = object
                        .members
                        .into_iter()
                        .map(|(name, member)| {
                            let member_type = self.get_value_type_of_symbol(member);
                            format!("{name}: {}", self.type_to_string_impl(member_type, stack))
                        })
                        .collect();
                    format!("{{ {} }}", members.join(", "))
                }
            }
            Type::Function(function) => {
                let parameters: Vec<String> = function
                    .signature
                    .parameters
                    .into_iter()
                    .map(|parameter| {
                        let name = self
                            .db
                            .declaration_name(self.db.symbol(parameter).declarations[0]);
                        let parameter_type = self.get_value_type_of_symbol(parameter);
                        format!(
                            "{name}: {}",
                            self.type_to_string_impl(parameter_type, stack)
                        )
                    })
                    .collect();
                format!(
                    "({}) => {}",
                    parameters.join(", "),
                    self.type_to_string_impl(function.signature.return_type, stack)
                )
            }
        };

        stack.swap_remove(&id);
        result
    }
}
