mod grammar;
mod parser;

pub use parser::*;

use mint_ast::{Database, NodeId};
use mint_diagnostic::Diagnostics;

/// Parses a module out of `source`, allocating its nodes in `db`. Parse
/// problems are recorded in `diagnostics`; the returned module is always
/// usable (missing pieces are substituted with placeholder identifiers).
pub fn parse(db: &mut Database, source: &str, diagnostics: &mut Diagnostics) -> NodeId {
    let mut parser = Parser::new(db, source, diagnostics);
    grammar::module(&mut parser)
}
