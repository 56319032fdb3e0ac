use id_arena::Arena;

use crate::{Module, Node, NodeId, NodeKind, Symbol, SymbolId, Type, TypeId};

/// Owns every node, symbol, and type allocated during one compile. Arena
/// ids hand out stable identity without reference cycles, so the node
/// `parent`/`symbol` back-edges and the symbol/type cross-references are
/// plain ids.
#[derive(Debug, Default, Clone)]
pub struct Database {
    nodes: Arena<Node>,
    symbols: Arena<Symbol>,
    types: Arena<Type>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        self.nodes.alloc(node)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    pub fn alloc_symbol(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.alloc(symbol)
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id]
    }

    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id]
    }

    pub fn alloc_type(&mut self, ty: Type) -> TypeId {
        self.types.alloc(ty)
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id]
    }

    pub fn module(&self, id: NodeId) -> &Module {
        match &self.node(id).kind {
            NodeKind::Module(module) => module,
            _ => unreachable!("node is not a module"),
        }
    }

    /// The text of an identifier node. Declaration names are identifier
    /// children, so this is the workhorse of binding and resolution.
    pub fn ident_text(&self, id: NodeId) -> &str {
        match &self.node(id).kind {
            NodeKind::Ident(ident) => &ident.text,
            _ => unreachable!("node is not an identifier"),
        }
    }

    /// The table name a declaration is inserted under. Object literals have
    /// no name of their own and fall back to a sentinel.
    pub fn declaration_name(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Var(var) => self.ident_text(var.name).to_string(),
            NodeKind::TypeAlias(alias) => self.ident_text(alias.name).to_string(),
            NodeKind::PropertyAssignment(property) => self.ident_text(property.name).to_string(),
            NodeKind::PropertyDeclaration(property) => self.ident_text(property.name).to_string(),
            NodeKind::Parameter(parameter) => self.ident_text(parameter.name).to_string(),
            NodeKind::TypeParameter(parameter) => self.ident_text(parameter.name).to_string(),
            NodeKind::ObjectLiteral(_) | NodeKind::ObjectTypeNode(_) => "__object".to_string(),
            _ => unreachable!("node is not a declaration"),
        }
    }

    /// The symbol attached to a node by the binder. Calling this before
    /// binding, or on a node that never receives a symbol, is a bug in the
    /// caller.
    pub fn symbol_of(&self, id: NodeId) -> SymbolId {
        self.node(id)
            .symbol
            .unwrap_or_else(|| unreachable!("node has no symbol attached"))
    }
}
