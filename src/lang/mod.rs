//! Akyno language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved
//! keywords, operators (with binding powers), and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! lexer/parser and downstream tooling. Callers work with **stable IDs**
//! (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables; the operator table doubles as the precedence scheme the
//! expression parser climbs over.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side
//!   effects.
//! - The lexer/parser enforce syntax; registries provide spellings and
//!   metadata for shared use (diagnostics, docs, highlighting).
//!
//! ## Examples
//! ```rust
//! use akyno_syntax::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
