use id_arena::Id;
use indexmap::IndexMap;

use crate::{Mapper, NodeId, NodeKind, TypeId};

pub type SymbolId = Id<Symbol>;

/// Ordered mapping from name to symbol, owned by a scope (the `locals` of a
/// module, function, or signature) or by an object symbol (its `members`).
pub type Table = IndexMap<String, SymbolId>;

/// Whether a name occurrence refers to a value or a type. A symbol may
/// carry one declaration of each meaning under the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meaning {
    Value,
    Type,
}

impl Meaning {
    /// The meaning a declaration node contributes, if it is a declaration
    /// at all.
    pub fn of(kind: &NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Var(_)
            | NodeKind::ObjectLiteral(_)
            | NodeKind::PropertyAssignment(_)
            | NodeKind::PropertyDeclaration(_)
            | NodeKind::Parameter(_) => Some(Self::Value),
            NodeKind::TypeAlias(_) | NodeKind::TypeParameter(_) => Some(Self::Type),
            _ => None,
        }
    }
}

/// All declarations of one name within a scope, plus the checker's memoised
/// types. Symbols produced by generic instantiation additionally record the
/// symbol they were instantiated from and the substitution that produced
/// them.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub declarations: Vec<NodeId>,
    pub value_declaration: Option<NodeId>,
    pub value_type: Option<TypeId>,
    pub type_type: Option<TypeId>,
    pub members: Option<Table>,
    pub target: Option<SymbolId>,
    pub mapper: Option<Mapper>,
}

impl Symbol {
    pub fn new(declaration: NodeId, meaning: Meaning) -> Self {
        Self {
            declarations: vec![declaration],
            value_declaration: (meaning == Meaning::Value).then_some(declaration),
            value_type: None,
            type_type: None,
            members: None,
            target: None,
            mapper: None,
        }
    }

    pub fn with_members(declaration: NodeId, meaning: Meaning) -> Self {
        Self {
            members: Some(Table::new()),
            ..Self::new(declaration, meaning)
        }
    }

    pub fn is_instantiated(&self) -> bool {
        self.target.is_some()
    }
}
