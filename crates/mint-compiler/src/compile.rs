use mint_ast::{Database, NodeId};
use mint_check::{Checker, bind};
use mint_diagnostic::Diagnostics;
use mint_parser::parse;

use crate::{emit, transform};

#[derive(Debug)]
pub struct CompilerOutput {
    pub db: Database,
    pub module: NodeId,
    /// Rendered types of the top-level statements, in source order.
    pub statement_types: Vec<String>,
    pub diagnostics: Diagnostics,
    /// The program with all type annotations stripped.
    pub output: String,
}

/// Runs the whole pipeline over one compile unit: parse, bind, check,
/// strip the type annotations, and emit the result. Diagnostics from every
/// stage are collected in one sink.
pub fn compile(source: &str) -> CompilerOutput {
    let mut db = Database::new();
    let mut diagnostics = Diagnostics::new();

    let module = parse(&mut db, source, &mut diagnostics);
    bind(&mut db, module, &mut diagnostics);

    let statement_types = {
        let mut checker = Checker::new(&mut db, &mut diagnostics);
        let types = checker.check(module);
        types
            .into_iter()
            .map(|ty| checker.type_to_string(ty))
            .collect()
    };

    transform(&mut db, module);
    let output = emit(&db, module);

    CompilerOutput {
        db,
        module,
        statement_types,
        diagnostics,
        output,
    }
}
