use log::trace;
use mint_ast::{Database, FunctionType, Mapper, ObjectType, Signature, Symbol, SymbolId, Table, Type, TypeId};

/// Applies a substitution to a type, allocating fresh ids for anything the
/// mapper touches. Primitives are returned unchanged, and a type variable
/// outside the mapper's sources stays itself. Nothing is cached: each
/// instantiation is a fresh type.
pub fn instantiate_type(db: &mut Database, ty: TypeId, mapper: &Mapper) -> TypeId {
    match db.ty(ty).clone() {
        Type::Primitive(_) => ty,
        Type::Variable(_) => mapper.get(ty).unwrap_or(ty),
        Type::Function(function) => {
            let signature = instantiate_signature(db, &function.signature, mapper);
            db.alloc_type(Type::Function(FunctionType { signature }))
        }
        Type::Object(object) => {
            let mut members = Table::new();
            for (name, member) in object.members {
                members.insert(name, instantiate_symbol(db, member, mapper));
            }
            db.alloc_type(Type::Object(ObjectType { members }))
        }
    }
}

/// Instantiating a signature erases its type parameters and records where
/// it came from.
pub fn instantiate_signature(db: &mut Database, signature: &Signature, mapper: &Mapper) -> Signature {
    trace!("instantiating signature with {} sources", mapper.sources.len());

    Signature {
        type_parameters: None,
        parameters: signature
            .parameters
            .iter()
            .map(|&parameter| instantiate_symbol(db, parameter, mapper))
            .collect(),
        return_type: instantiate_type(db, signature.return_type, mapper),
        target: Some(Box::new(signature.clone())),
        mapper: Some(mapper.clone()),
    }
}

/// A fresh symbol that shares the original's declarations but substitutes
/// its cached types. Types that have not been computed yet are left for
/// the checker, which follows `target` and applies `mapper` on demand.
pub fn instantiate_symbol(db: &mut Database, symbol_id: SymbolId, mapper: &Mapper) -> SymbolId {
    let symbol = db.symbol(symbol_id).clone();

    let value_type = symbol
        .value_type
        .map(|ty| instantiate_type(db, ty, mapper));
    let type_type = symbol.type_type.map(|ty| instantiate_type(db, ty, mapper));

    db.alloc_symbol(Symbol {
        declarations: symbol.declarations,
        value_declaration: symbol.value_declaration,
        value_type,
        type_type,
        members: symbol.members,
        target: Some(symbol_id),
        mapper: Some(mapper.clone()),
    })
}
