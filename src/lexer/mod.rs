//! Lexer for the Akyno programming language
//!
//! Handles tokenization including:
//! - Keywords (`static`, `if`, `for`, `int`, `struct`, ...)
//! - Identifiers and literals (integer, character, string)
//! - Operators and punctuation (`==`, `&&`, `:=`, ...)
//! - Trivia (whitespace, line and block comments), kept as tokens so that
//!   concatenating a stream's raw text reproduces the source exactly
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, LexErrorKind)
//! - `strings` - Character/string literal scanning and decoding

mod strings;
pub mod tokens;

pub use strings::{decode_char, decode_string};
pub use tokens::{LexErrorKind, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::lang::operators::OperatorId;
use crate::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Akyno source code.
///
/// An iterator over [`Token`]s: each call to `next` scans one token, trivia
/// included, and the stream ends with a single `Eof` token. Input the scanner
/// cannot interpret becomes `Error` tokens rather than stopping the stream,
/// so the iterator is always finite and total over the source.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            finished: false,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(
            kind,
            &self.source[start..self.current_pos],
            Span::new(start, self.current_pos),
        )
    }

    fn op(&self, id: OperatorId, start: usize) -> Token<'a> {
        self.token(TokenKind::Operator(id), start)
    }

    fn punct(&self, id: PunctuationId, start: usize) -> Token<'a> {
        self.token(TokenKind::Punctuation(id), start)
    }

    fn error(&self, kind: LexErrorKind, start: usize) -> Token<'a> {
        self.token(TokenKind::Error(kind), start)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Token<'a> {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return self.token(TokenKind::Eof, start);
        };

        match c {
            // Whitespace runs collapse into one trivia token
            c if c.is_ascii_whitespace() => {
                while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
                    self.advance();
                }
                self.token(TokenKind::Whitespace, start)
            }

            // Comments or division
            '/' => self.scan_slash(start),

            // Operators
            '+' => self.op(OperatorId::Plus, start),
            '-' => self.op(OperatorId::Minus, start),
            '*' => self.op(OperatorId::Star, start),
            '%' => self.op(OperatorId::Percent, start),
            '=' => {
                if self.match_char('=') {
                    self.op(OperatorId::EqEq, start)
                } else {
                    self.op(OperatorId::Eq, start)
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.op(OperatorId::NotEq, start)
                } else {
                    // `!` exists only as part of `!=`
                    self.error(LexErrorKind::UnrecognizedChar, start)
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.op(OperatorId::LtEq, start)
                } else {
                    self.op(OperatorId::Lt, start)
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.op(OperatorId::GtEq, start)
                } else {
                    self.op(OperatorId::Gt, start)
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.op(OperatorId::AmpAmp, start)
                } else {
                    self.op(OperatorId::Amp, start)
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.op(OperatorId::PipePipe, start)
                } else {
                    // `|` exists only as part of `||`
                    self.error(LexErrorKind::UnrecognizedChar, start)
                }
            }

            // Punctuation
            ',' => self.punct(PunctuationId::Comma, start),
            ';' => self.punct(PunctuationId::Semicolon, start),
            ':' => {
                if self.match_char('=') {
                    self.punct(PunctuationId::ColonEq, start)
                } else {
                    self.punct(PunctuationId::Colon, start)
                }
            }
            '.' => self.punct(PunctuationId::Dot, start),
            '(' => self.punct(PunctuationId::LParen, start),
            ')' => self.punct(PunctuationId::RParen, start),
            '[' => self.punct(PunctuationId::LBracket, start),
            ']' => self.punct(PunctuationId::RBracket, start),
            '{' => self.punct(PunctuationId::LBrace, start),
            '}' => self.punct(PunctuationId::RBrace, start),

            // Literals
            '"' => self.scan_string(start),
            '\'' => self.scan_char(start),
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            c if is_ident_start(c) => self.scan_identifier(start),

            // One code point of unrecognized input, already consumed
            _ => self.error(LexErrorKind::UnrecognizedChar, start),
        }
    }

    /// Scan `/` forms: a line comment, a block comment, or division.
    fn scan_slash(&mut self, start: usize) -> Token<'a> {
        if self.match_char('/') {
            // Line comment runs to end of line; the newline itself is
            // ordinary whitespace trivia
            while matches!(self.peek(), Some(c) if c != '\n') {
                self.advance();
            }
            self.token(TokenKind::Comment, start)
        } else if self.match_char('*') {
            self.scan_block_comment(start)
        } else {
            self.op(OperatorId::Slash, start)
        }
    }

    /// Scan a block comment body. Called after consuming `/*`.
    ///
    /// Tracks nesting depth so the comment runs to the first unnested `*/`.
    fn scan_block_comment(&mut self, start: usize) -> Token<'a> {
        let mut depth = 1usize;
        while depth > 0 {
            let Some(c) = self.advance() else {
                return self.error(LexErrorKind::UnterminatedComment, start);
            };
            match c {
                '/' if self.peek() == Some('*') => {
                    self.advance();
                    depth += 1;
                }
                '*' if self.peek() == Some('/') => {
                    self.advance();
                    depth -= 1;
                }
                _ => {}
            }
        }
        self.token(TokenKind::Comment, start)
    }

    // ========================================================================
    // Identifier and number scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) -> Token<'a> {
        while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
            self.advance();
        }

        // Look up the spelling in the reserved-word registry. A lone `_`
        // resolves to the underscore keyword; `_x` stays an identifier.
        match keyword_id(&self.source[start..self.current_pos]) {
            Some(id) => self.token(TokenKind::Keyword(id), start),
            None => self.token(TokenKind::Ident, start),
        }
    }

    fn scan_number(&mut self, start: usize) -> Token<'a> {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        self.token(TokenKind::Int, start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        if self.is_at_end() {
            self.finished = true;
            return Some(self.token(TokenKind::Eof, self.current_pos));
        }
        Some(self.scan_token())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string to completion.
///
/// This is a shorthand for `Lexer::new(source).collect()`. Lexing is pure: a
/// fresh lexer over the same source always yields the same stream.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::keywords::KeywordId;

    /// Lex and drop trivia, for tests that only care about grammar tokens.
    fn lex_code(source: &str) -> Vec<Token<'_>> {
        lex(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        use crate::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical);
            assert_eq!(
                tokens.len(),
                2,
                "expected token + EOF for keyword {:?}, got {:?}",
                k.id,
                tokens
            );
            assert!(tokens[0].kind.is_keyword(k.id));
            assert!(matches!(tokens[1].kind, TokenKind::Eof));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use crate::lang::operators;

        for o in operators::OPERATORS {
            let tokens = lex(o.spelling);
            assert_eq!(
                tokens.len(),
                2,
                "expected token + EOF for operator {:?}, got {:?}",
                o.id,
                tokens
            );
            assert!(tokens[0].kind.is_operator(o.id));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use crate::lang::punctuation;

        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical);
            assert_eq!(
                tokens.len(),
                2,
                "expected token + EOF for punctuation {:?}, got {:?}",
                p.id,
                tokens
            );
            assert!(tokens[0].kind.is_punctuation(p.id));
        }
    }

    #[test]
    fn test_keywords() {
        let tokens = lex_code("static if else while for return break continue");
        assert!(tokens[0].kind.is_keyword(KeywordId::Static));
        assert!(tokens[1].kind.is_keyword(KeywordId::If));
        assert!(tokens[2].kind.is_keyword(KeywordId::Else));
        assert!(tokens[3].kind.is_keyword(KeywordId::While));
        assert!(tokens[4].kind.is_keyword(KeywordId::For));
        assert!(tokens[5].kind.is_keyword(KeywordId::Return));
        assert!(tokens[6].kind.is_keyword(KeywordId::Break));
        assert!(tokens[7].kind.is_keyword(KeywordId::Continue));
    }

    #[test]
    fn test_type_keywords_and_underscore() {
        let tokens = lex_code("int char void struct _ _x");
        assert!(tokens[0].kind.is_keyword(KeywordId::Int));
        assert!(tokens[1].kind.is_keyword(KeywordId::Char));
        assert!(tokens[2].kind.is_keyword(KeywordId::Void));
        assert!(tokens[3].kind.is_keyword(KeywordId::Struct));
        assert!(tokens[4].kind.is_keyword(KeywordId::Underscore));
        assert!(matches!(tokens[5].kind, TokenKind::Ident));
        assert_eq!(tokens[5].text, "_x");
    }

    #[test]
    fn test_operators() {
        use crate::lang::operators::OperatorId;

        let tokens = lex_code("+ - * / % == != < > <= >= && || & =");
        assert!(tokens[0].kind.is_operator(OperatorId::Plus));
        assert!(tokens[1].kind.is_operator(OperatorId::Minus));
        assert!(tokens[2].kind.is_operator(OperatorId::Star));
        assert!(tokens[3].kind.is_operator(OperatorId::Slash));
        assert!(tokens[4].kind.is_operator(OperatorId::Percent));
        assert!(tokens[5].kind.is_operator(OperatorId::EqEq));
        assert!(tokens[6].kind.is_operator(OperatorId::NotEq));
        assert!(tokens[7].kind.is_operator(OperatorId::Lt));
        assert!(tokens[8].kind.is_operator(OperatorId::Gt));
        assert!(tokens[9].kind.is_operator(OperatorId::LtEq));
        assert!(tokens[10].kind.is_operator(OperatorId::GtEq));
        assert!(tokens[11].kind.is_operator(OperatorId::AmpAmp));
        assert!(tokens[12].kind.is_operator(OperatorId::PipePipe));
        assert!(tokens[13].kind.is_operator(OperatorId::Amp));
        assert!(tokens[14].kind.is_operator(OperatorId::Eq));
    }

    #[test]
    fn test_colon_forms() {
        let tokens = lex_code(": := i := 1");
        assert!(tokens[0].kind.is_punctuation(PunctuationId::Colon));
        assert!(tokens[1].kind.is_punctuation(PunctuationId::ColonEq));
        assert!(matches!(tokens[2].kind, TokenKind::Ident));
        assert!(tokens[3].kind.is_punctuation(PunctuationId::ColonEq));
        assert!(matches!(tokens[4].kind, TokenKind::Int));
    }

    #[test]
    fn test_integers() {
        let tokens = lex_code("42 007 123456");
        assert!(matches!(tokens[0].kind, TokenKind::Int));
        assert_eq!(tokens[0].text, "42");
        assert!(matches!(tokens[1].kind, TokenKind::Int));
        assert_eq!(tokens[1].text, "007");
        assert!(matches!(tokens[2].kind, TokenKind::Int));
        assert_eq!(tokens[2].text, "123456");
    }

    #[test]
    fn test_char_literals() {
        let tokens = lex_code(r"'a' '\n' '\x41' '\''");
        for t in &tokens[..4] {
            assert!(matches!(t.kind, TokenKind::CharLit), "got {:?}", t);
        }
        assert_eq!(decode_char(tokens[0].text), Some('a'));
        assert_eq!(decode_char(tokens[1].text), Some('\n'));
        assert_eq!(decode_char(tokens[2].text), Some('A'));
        assert_eq!(decode_char(tokens[3].text), Some('\''));
    }

    #[test]
    fn test_malformed_char_literals() {
        // Two characters inside the quotes
        let tokens = lex("'ab'");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::MalformedLiteral)
        ));
        assert_eq!(tokens[0].text, "'ab'");

        // Empty
        let tokens = lex("''");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::MalformedLiteral)
        ));

        // Unknown escape
        let tokens = lex(r"'\q'");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::MalformedLiteral)
        ));
    }

    #[test]
    fn test_unterminated_char_literal() {
        let tokens = lex("'a");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnterminatedLiteral)
        ));

        // The newline is not part of the broken literal
        let tokens = lex("'a\nx");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnterminatedLiteral)
        ));
        assert_eq!(tokens[0].text, "'a");
        assert!(matches!(tokens[1].kind, TokenKind::Whitespace));
        assert!(matches!(tokens[2].kind, TokenKind::Ident));
    }

    #[test]
    fn test_string_literals() {
        let tokens = lex_code(r#""hello" "" "a\tb" "\x41\x42""#);
        for t in &tokens[..4] {
            assert!(matches!(t.kind, TokenKind::StrLit), "got {:?}", t);
        }
        assert_eq!(decode_string(tokens[0].text), Some("hello".to_string()));
        assert_eq!(decode_string(tokens[1].text), Some(String::new()));
        assert_eq!(decode_string(tokens[2].text), Some("a\tb".to_string()));
        assert_eq!(decode_string(tokens[3].text), Some("AB".to_string()));
    }

    #[test]
    fn test_string_escaped_quote_does_not_close() {
        let tokens = lex(r#""a\"b""#);
        assert!(matches!(tokens[0].kind, TokenKind::StrLit));
        assert_eq!(tokens[0].text, r#""a\"b""#);
        assert_eq!(decode_string(tokens[0].text), Some("a\"b".to_string()));
    }

    #[test]
    fn test_unterminated_string_literal() {
        let tokens = lex(r#""abc"#);
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnterminatedLiteral)
        ));
    }

    #[test]
    fn test_line_comment() {
        let tokens = lex("x // rest of line\ny");
        assert!(matches!(tokens[0].kind, TokenKind::Ident));
        assert!(matches!(tokens[1].kind, TokenKind::Whitespace));
        assert!(matches!(tokens[2].kind, TokenKind::Comment));
        assert_eq!(tokens[2].text, "// rest of line");
        assert!(matches!(tokens[3].kind, TokenKind::Whitespace));
        assert!(matches!(tokens[4].kind, TokenKind::Ident));
    }

    #[test]
    fn test_block_comment_nesting() {
        let tokens = lex("/* a /* b */ c */ x");
        assert!(matches!(tokens[0].kind, TokenKind::Comment));
        assert_eq!(tokens[0].text, "/* a /* b */ c */");
        assert!(matches!(tokens[2].kind, TokenKind::Ident));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = lex("/* never closed");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnterminatedComment)
        ));
        assert!(matches!(tokens[1].kind, TokenKind::Eof));
    }

    #[test]
    fn test_unrecognized_characters() {
        // Lone `!` and `|` are not tokens of the language
        let tokens = lex("a ! b");
        assert!(matches!(
            tokens[2].kind,
            TokenKind::Error(LexErrorKind::UnrecognizedChar)
        ));
        assert!(matches!(tokens[4].kind, TokenKind::Ident));

        let tokens = lex("|");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnrecognizedChar)
        ));

        // Exactly one code point is consumed, multi-byte included
        let tokens = lex("π1");
        assert!(matches!(
            tokens[0].kind,
            TokenKind::Error(LexErrorKind::UnrecognizedChar)
        ));
        assert_eq!(tokens[0].text, "π");
        assert!(matches!(tokens[1].kind, TokenKind::Int));
    }

    #[test]
    fn test_eof_emitted_once() {
        let mut lexer = Lexer::new("");
        assert!(matches!(
            lexer.next().map(|t| t.kind),
            Some(TokenKind::Eof)
        ));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_round_trip() {
        let sources = [
            "main(): int { return 0; }",
            "static x := 'a'; // trailing\n",
            "/* block */ f(a, b) % 3\t|| weird ! input",
            "broken \"unterminated",
        ];
        for source in sources {
            let rebuilt: String = lex(source).iter().map(|t| t.text).collect();
            assert_eq!(rebuilt, source, "round trip failed for {:?}", source);
        }
    }
}
