//! Token types for the Akyno lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Every token borrows its raw text from the source, trivia included, so
//!   concatenating the `text` of a whole token stream reproduces the input
//!   byte for byte.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use crate::lang::keywords::{self, KeywordId};
use crate::lang::operators::OperatorId;
use crate::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - Keyword/operator/punctuation tokens carry stable IDs from `crate::lang`.
/// - Literal kinds carry no payload; the raw text on the token is decoded on
///   demand (see `crate::lexer::strings`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    CharLit,
    StrLit,

    // ========== Trivia ==========
    Whitespace,
    Comment,

    // ========== Special ==========
    /// Input the scanner could not form a token from. The parse stage turns
    /// each of these into a diagnostic; the token itself keeps the raw text
    /// so the stream still reproduces the source.
    Error(LexErrorKind),
    Eof,
}

/// Why an `Error` token was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character no token can start with.
    UnrecognizedChar,
    /// A quoted literal that closed but does not decode (bad escape, wrong
    /// arity, non-printable content).
    MalformedLiteral,
    /// A quoted literal with no closing quote before newline or end of file.
    UnterminatedLiteral,
    /// A block comment with no closing `*/` before end of file.
    UnterminatedComment,
}

/// A token with its kind, raw source text, and span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Human-readable rendering for diagnostics ("found ...").
    pub fn description(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Whitespace => "whitespace".to_string(),
            TokenKind::Comment => "a comment".to_string(),
            TokenKind::Error(_) => "invalid input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
