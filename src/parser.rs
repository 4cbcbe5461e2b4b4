//! Parser for the Akyno programming language
//!
//! Converts a token stream into an error-tolerant [`SourceFile`] tree: every
//! parse yields a complete tree, with `Error` placeholder nodes standing in
//! for regions that did not match the grammar and diagnostics describing why.
//!
//! ## Examples
//!
//! ```rust
//! use akyno_syntax::{lexer, parser};
//!
//! let source = "main(): int { return 0; }";
//! let tokens = lexer::lex(source);
//! let result = parser::parse(&tokens);
//! assert!(result.diagnostics.is_empty());
//! assert_eq!(result.file.node.items.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{Diagnostic, SyntaxErrors, errors};
use crate::lang::keywords::KeywordId;
use crate::lang::operators::{self, Associativity, OperatorId};
use crate::lang::punctuation::PunctuationId;
use crate::lexer::{self, LexErrorKind, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/items.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
