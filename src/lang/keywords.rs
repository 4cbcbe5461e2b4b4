//! Keyword vocabulary.
//!
//! This module defines the canonical keyword set of the Akyno surface grammar:
//! the declaration introducer `static`, the control-flow words, and the base
//! type words (including the `_` infer marker, which is a keyword rather than
//! an identifier).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A single `_` resolves to [`KeywordId::Underscore`]; `_x` and longer
//!   underscore-led spellings are ordinary identifiers and do not appear here.
//! - This module is vocabulary only (spellings + metadata). It does not
//!   tokenize source text.
//!
//! ## Examples
//! ```rust
//! use akyno_syntax::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("static"), Some(KeywordId::Static));
//! assert_eq!(keywords::as_str(KeywordId::Underscore), "_");
//! assert_eq!(keywords::from_str("_x"), None);
//! ```

/// Broad syntactic grouping for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Top-level declaration introducers.
    Declaration,
    /// Statement-level control flow.
    ControlFlow,
    /// Base type words usable inside type expressions.
    Type,
}

/// Stable identifier for every keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Static,

    // Control flow
    If,
    Else,
    While,
    For,
    Return,
    Break,
    Continue,

    // Base types
    Int,
    Char,
    Void,
    Struct,
    Underscore,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Static, "static", KeywordCategory::Declaration),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    // Base types
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Char, "char", KeywordCategory::Type),
    info(KeywordId::Void, "void", KeywordCategory::Type),
    info(KeywordId::Struct, "struct", KeywordCategory::Type),
    info(KeywordId::Underscore, "_", KeywordCategory::Type),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("keyword info missing")
}

/// Resolve a keyword spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**; `If` or `STATIC` are ordinary identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
    }
}
