use std::ops::Range;

use mint_ast::{Database, Node, NodeId, NodeKind};
use mint_diagnostic::{DiagnosticKind, Diagnostics};
use mint_lexer::{Lexer, TokenKind};

#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    items: Vec<(TokenKind, Range<usize>)>,
    cursor: usize,
    prev_end: usize,
    pub(crate) db: &'a mut Database,
    pub(crate) diagnostics: &'a mut Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(db: &'a mut Database, source: &'a str, diagnostics: &'a mut Diagnostics) -> Self {
        let mut items = Vec::new();

        for token in Lexer::new(source) {
            match token.kind {
                TokenKind::Whitespace | TokenKind::LineComment => continue,
                TokenKind::String {
                    is_terminated: false,
                } => {
                    diagnostics.insert(token.span.clone(), DiagnosticKind::UnterminatedString);
                }
                TokenKind::Unknown => {
                    diagnostics.insert(
                        token.span.clone(),
                        DiagnosticKind::UnknownToken(source[token.span.clone()].to_string()),
                    );
                }
                _ => {}
            }

            items.push((token.kind, token.span));
        }

        Self {
            source,
            items,
            cursor: 0,
            prev_end: 0,
            db,
            diagnostics,
        }
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn peek(&self) -> Option<TokenKind> {
        self.nth(0)
    }

    pub fn nth(&self, index: usize) -> Option<TokenKind> {
        self.items.get(self.cursor + index).map(|(kind, _)| *kind)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Start position of the current token, or the end of the source once
    /// the token stream is exhausted.
    pub fn start(&self) -> usize {
        self.items
            .get(self.cursor)
            .map_or(self.source.len(), |(_, span)| span.start)
    }

    /// End position of the most recently consumed token.
    pub fn prev_end(&self) -> usize {
        self.prev_end
    }

    pub fn bump(&mut self) -> Range<usize> {
        match self.items.get(self.cursor) {
            Some((_, span)) => {
                let span = span.clone();
                self.cursor += 1;
                self.prev_end = span.end;
                span
            }
            None => self.source.len()..self.source.len(),
        }
    }

    pub fn try_eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind, or records a diagnostic at the
    /// current position without consuming anything.
    pub fn expect(&mut self, kind: TokenKind) -> Range<usize> {
        if self.at(kind) {
            self.bump()
        } else {
            self.unexpected(describe(kind));
            let pos = self.start();
            pos..pos
        }
    }

    pub fn unexpected(&mut self, expected: &str) {
        let found = self
            .peek()
            .map_or_else(|| "end of input".to_string(), |kind| describe(kind).to_string());
        let pos = self.start();
        self.diagnostics.insert(
            pos..pos,
            DiagnosticKind::UnexpectedToken {
                expected: expected.to_string(),
                found,
            },
        );
    }

    pub fn text(&self, span: &Range<usize>) -> &str {
        &self.source[span.clone()]
    }

    pub fn alloc(&mut self, kind: NodeKind, span: Range<usize>) -> NodeId {
        self.db.alloc_node(Node::new(kind, span))
    }
}

fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Whitespace => "whitespace",
        TokenKind::LineComment => "comment",
        TokenKind::String { .. } => "string literal",
        TokenKind::Number => "number literal",
        TokenKind::Ident => "identifier",
        TokenKind::Function => "`function`",
        TokenKind::Var => "`var`",
        TokenKind::Type => "`type`",
        TokenKind::Return => "`return`",
        TokenKind::OpenParen => "`(`",
        TokenKind::CloseParen => "`)`",
        TokenKind::OpenBrace => "`{`",
        TokenKind::CloseBrace => "`}`",
        TokenKind::Equals => "`=`",
        TokenKind::FatArrow => "`=>`",
        TokenKind::LessThan => "`<`",
        TokenKind::GreaterThan => "`>`",
        TokenKind::Comma => "`,`",
        TokenKind::Colon => "`:`",
        TokenKind::Semicolon => "`;`",
        TokenKind::Unknown => "unknown token",
    }
}
