use mint_ast::{Database, Meaning, NodeId, NodeKind, SymbolId};

/// Walks parent links outward from `location`, consulting the table of
/// every scope-owning node on the way. A symbol only matches if one of its
/// declarations carries the requested meaning, so a type alias does not
/// shadow a variable of the same name (or vice versa).
pub fn resolve(db: &Database, location: NodeId, name: &str, meaning: Meaning) -> Option<SymbolId> {
    let mut current = Some(location);

    while let Some(node_id) = current {
        let node = db.node(node_id);

        let candidate = match &node.kind {
            NodeKind::Module(module) => module.locals.get(name).copied(),
            NodeKind::Function(function) => function.locals.get(name).copied(),
            NodeKind::SignatureTypeNode(signature) => signature.locals.get(name).copied(),
            NodeKind::ObjectLiteral(_) | NodeKind::ObjectTypeNode(_) => db
                .symbol(db.symbol_of(node_id))
                .members
                .as_ref()
                .and_then(|members| members.get(name).copied()),
            _ => None,
        };

        if let Some(symbol_id) = candidate
            && has_meaning(db, symbol_id, meaning)
        {
            return Some(symbol_id);
        }

        current = node.parent;
    }

    None
}

fn has_meaning(db: &Database, symbol_id: SymbolId, meaning: Meaning) -> bool {
    db.symbol(symbol_id)
        .declarations
        .iter()
        .any(|&declaration| Meaning::of(&db.node(declaration).kind) == Some(meaning))
}

#[cfg(test)]
mod tests {
    use mint_ast::Database;
    use mint_diagnostic::Diagnostics;
    use mint_parser::parse;

    use crate::bind;

    use super::*;

    fn bind_source(source: &str) -> (Database, NodeId) {
        let mut db = Database::new();
        let mut diagnostics = Diagnostics::new();
        let module = parse(&mut db, source, &mut diagnostics);
        bind(&mut db, module, &mut diagnostics);
        (db, module)
    }

    #[test]
    fn test_resolve_by_meaning() {
        let (db, module) = bind_source("var x = 1; type T = number");

        assert!(resolve(&db, module, "x", Meaning::Value).is_some());
        assert!(resolve(&db, module, "x", Meaning::Type).is_none());
        assert!(resolve(&db, module, "T", Meaning::Type).is_some());
        assert!(resolve(&db, module, "T", Meaning::Value).is_none());
    }

    #[test]
    fn test_parameter_shadows_module_variable() {
        let (db, module) = bind_source("var x = \"outer\"; var f = function (x: number) { return x }");

        let statement = db.module(module).statements[1];
        let mint_ast::NodeKind::Var(var) = &db.node(statement).kind else {
            panic!("expected a var statement");
        };
        let mint_ast::NodeKind::Function(function) = &db.node(var.initializer).kind else {
            panic!("expected a function initializer");
        };
        let body_return = function.body[0];

        let resolved = resolve(&db, body_return, "x", Meaning::Value).expect("x resolves");
        assert_eq!(resolved, function.locals["x"]);
        assert_ne!(resolved, db.module(module).locals["x"]);
    }
}
