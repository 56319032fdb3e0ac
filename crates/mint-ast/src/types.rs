use id_arena::Id;

use crate::{SymbolId, Table};

pub type TypeId = Id<Type>;

/// The type universe. Every allocation gets a fresh arena id, and the
/// checker compares and substitutes types by id, so identity is stable for
/// the lifetime of a compile.
#[derive(Debug, Clone)]
pub enum Type {
    Primitive(Primitive),
    Object(ObjectType),
    Function(FunctionType),
    Variable(TypeVariable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Error,
    Any,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Error => "error",
            Self::Any => "any",
        }
    }
}

/// A structural record type. Members are property symbols whose value
/// types are computed on demand.
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub members: Table,
}

#[derive(Debug, Clone)]
pub struct FunctionType {
    pub signature: Signature,
}

/// A type parameter in scope, named after its declaring identifier.
#[derive(Debug, Clone)]
pub struct TypeVariable {
    pub name: String,
}

/// A function's parametric description. Parameters are symbols so that
/// instantiation can substitute their cached types without touching the
/// declarations they came from.
#[derive(Debug, Clone)]
pub struct Signature {
    pub type_parameters: Option<Vec<SymbolId>>,
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
    pub target: Option<Box<Signature>>,
    pub mapper: Option<Mapper>,
}

/// A substitution from type variables to types, applied by id identity.
/// `sources` and `targets` are parallel lists of equal length.
#[derive(Debug, Clone)]
pub struct Mapper {
    pub sources: Vec<TypeId>,
    pub targets: Vec<TypeId>,
}

impl Mapper {
    pub fn new(sources: Vec<TypeId>, targets: Vec<TypeId>) -> Self {
        Self { sources, targets }
    }

    pub fn get(&self, source: TypeId) -> Option<TypeId> {
        self.sources
            .iter()
            .position(|&candidate| candidate == source)
            .map(|index| self.targets[index])
    }
}
