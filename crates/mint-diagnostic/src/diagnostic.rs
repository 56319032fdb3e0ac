use std::ops::Range;

use crate::{DiagnosticKind, LineCol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Range<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(span: Range<usize>, kind: DiagnosticKind) -> Self {
        Self { span, kind }
    }

    pub fn pos(&self) -> usize {
        self.span.start
    }

    /// Renders the diagnostic with a 1-based `line:col` suffix resolved
    /// against the source the compile ran over.
    pub fn message(&self, source: &str) -> String {
        let start = LineCol::new(source, self.span.start);
        format!("{} at {start}", self.kind)
    }
}
