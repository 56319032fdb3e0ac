use std::ops::Range;

use indexmap::IndexMap;

use crate::{Diagnostic, DiagnosticKind};

/// Per-compile diagnostic sink. Only the first diagnostic recorded at a
/// given position is kept, which is what suppresses cascades when several
/// checks fire on the same node.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    recorded: IndexMap<usize, Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, span: Range<usize>, kind: DiagnosticKind) {
        self.recorded
            .entry(span.start)
            .or_insert_with(|| Diagnostic::new(span, kind));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.recorded.values()
    }

    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    pub fn clear(&mut self) {
        self.recorded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_at_position_wins() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(4..5, DiagnosticKind::CouldNotResolve("x".to_string()));
        diagnostics.insert(
            4..5,
            DiagnosticKind::NotCallable("error".to_string()),
        );

        let recorded: Vec<&Diagnostic> = diagnostics.iter().collect();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].kind,
            DiagnosticKind::CouldNotResolve("x".to_string())
        );
    }

    #[test]
    fn test_insertion_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(9..10, DiagnosticKind::CouldNotResolve("b".to_string()));
        diagnostics.insert(2..3, DiagnosticKind::CouldNotResolve("a".to_string()));

        let positions: Vec<usize> = diagnostics.iter().map(Diagnostic::pos).collect();
        assert_eq!(positions, vec![9, 2]);
    }
}
