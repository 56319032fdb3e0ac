use mint_ast::{Database, Primitive, Type, TypeId};

/// The canonical primitive types, allocated once per compile when the
/// checker is constructed. `error` and `any` are the absorbers that keep
/// one failure from cascading into a wall of diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTypes {
    pub string: TypeId,
    pub number: TypeId,
    pub error: TypeId,
    pub any: TypeId,
}

impl BuiltinTypes {
    pub fn alloc(db: &mut Database) -> Self {
        Self {
            string: db.alloc_type(Type::Primitive(Primitive::String)),
            number: db.alloc_type(Type::Primitive(Primitive::Number)),
            error: db.alloc_type(Type::Primitive(Primitive::Error)),
            any: db.alloc_type(Type::Primitive(Primitive::Any)),
        }
    }
}
