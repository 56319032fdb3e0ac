use std::str::Chars;

use crate::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    chars: Chars<'a>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars(),
            pos: 0,
        }
    }

    fn bump(&mut self) -> char {
        match self.chars.next() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or('\0')
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn eat_whitespace(&mut self) -> TokenKind {
        while is_whitespace(self.peek()) {
            self.bump();
        }
        TokenKind::Whitespace
    }

    fn eat_ident(&mut self, start: usize) -> TokenKind {
        while matches!(self.peek(), 'a'..='z' | 'A'..='Z' | '0'..='9' | '_') {
            self.bump();
        }

        match &self.source[start..self.pos] {
            "function" => TokenKind::Function,
            "var" => TokenKind::Var,
            "type" => TokenKind::Type,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }

    fn eat_line_comment(&mut self) -> TokenKind {
        while self.peek() != '\n' && !self.at_end() {
            self.bump();
        }
        TokenKind::LineComment
    }

    fn eat_string(&mut self) -> TokenKind {
        let is_terminated = loop {
            match self.peek() {
                '"' => {
                    self.bump();
                    break true;
                }
                '\0' => {
                    break false;
                }
                _ => {
                    self.bump();
                }
            }
        };

        TokenKind::String { is_terminated }
    }

    fn eat_number(&mut self) -> TokenKind {
        while self.peek().is_ascii_digit() {
            self.bump();
        }
        TokenKind::Number
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            return None;
        }

        let start = self.pos;

        let kind = match self.bump() {
            c if is_whitespace(c) => self.eat_whitespace(),
            'a'..='z' | 'A'..='Z' | '_' => self.eat_ident(start),
            '"' => self.eat_string(),
            '0'..='9' => self.eat_number(),
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '=' => match self.peek() {
                '>' => {
                    self.bump();
                    TokenKind::FatArrow
                }
                _ => TokenKind::Equals,
            },
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '/' if self.peek() == '/' => self.eat_line_comment(),
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            _ => TokenKind::Unknown,
        };

        Some(Token::new(start..self.pos, kind))
    }
}

#[cfg(test)]
mod tests {
    use expect_test::{Expect, expect};

    use super::*;

    #[allow(clippy::needless_pass_by_value)]
    fn check(source: &str, expect: Expect) {
        let mut output = String::new();

        for token in Lexer::new(source) {
            #[allow(clippy::format_push_string)]
            output.push_str(&format!("{:?}\n", token.kind));
        }

        expect.assert_eq(&output);
    }

    #[test]
    fn test_whitespace() {
        check(
            " \t\r\n",
            expect![[r#"
                Whitespace
            "#]],
        );
    }

    #[test]
    fn test_line_comments() {
        check(
            "// hello\nvar",
            expect![[r#"
                LineComment
                Whitespace
                Var
            "#]],
        );
    }

    #[test]
    fn test_string() {
        check(
            "\"hello world\"",
            expect![[r#"
                String { is_terminated: true }
            "#]],
        );

        check(
            "\"hello world",
            expect![[r#"
                String { is_terminated: false }
            "#]],
        );
    }

    #[test]
    fn test_number() {
        check(
            "0 1234567890",
            expect![[r#"
                Number
                Whitespace
                Number
            "#]],
        );
    }

    #[test]
    fn test_keywords() {
        check(
            "function var type return",
            expect![[r#"
                Function
                Whitespace
                Var
                Whitespace
                Type
                Whitespace
                Return
            "#]],
        );
    }

    #[test]
    fn test_ident() {
        check(
            "functions _tmp x1",
            expect![[r#"
                Ident
                Whitespace
                Ident
                Whitespace
                Ident
            "#]],
        );
    }

    #[test]
    fn test_punctuation() {
        check(
            "= => < > , : ; ( ) { }",
            expect![[r#"
                Equals
                Whitespace
                FatArrow
                Whitespace
                LessThan
                Whitespace
                GreaterThan
                Whitespace
                Comma
                Whitespace
                Colon
                Whitespace
                Semicolon
                Whitespace
                OpenParen
                Whitespace
                CloseParen
                Whitespace
                OpenBrace
                Whitespace
                CloseBrace
            "#]],
        );
    }

    #[test]
    fn test_arrow_vs_equals() {
        check(
            "==>",
            expect![[r#"
                Equals
                FatArrow
            "#]],
        );
    }

    #[test]
    fn test_unknown() {
        check(
            "@",
            expect![[r#"
                Unknown
            "#]],
        );
    }
}
