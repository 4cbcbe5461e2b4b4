#![forbid(unsafe_code)]
//! Syntax frontend for the Akyno language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the compiler and future
//! interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name resolution, type
//!   checking, or evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from the [`lang`]
//!   registries, including the binding powers that drive expression parsing.
//! - Parsing never aborts: every parse yields a tree, with `Error` placeholder nodes
//!   and diagnostics marking the regions that did not match the grammar.
//!
//! ## Examples
//! ```rust
//! use akyno_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("main(): int { return 0; }");
//! let result = parser::parse(&tokens);
//! assert!(!result.has_errors());
//! assert_eq!(result.file.node.items.len(), 1);
//! ```
//!
//! ## See also
//! - [`lang`] for registry-backed language vocabulary (keywords/operators/punctuation).

pub mod ast;
pub mod diagnostics;
pub mod lang;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
