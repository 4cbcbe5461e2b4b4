//! Diagnostics and error reporting for Akyno
//!
//! Syntax errors never abort a parse; they accumulate here as [`Diagnostic`]
//! values alongside the tree. Rendering goes through [`miette`], so anything
//! holding the source text can print errors with highlighted spans.

use crate::ast::Span;

use miette::LabeledSpan;

/// A frontend error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub kind: DiagnosticKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn lexical(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: DiagnosticKind::Lexical,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: DiagnosticKind::Syntactic,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The character scanner could not form a token.
    Lexical,
    /// The token stream did not match the grammar.
    Syntactic,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntactic => write!(f, "syntax error"),
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(match self.kind {
            DiagnosticKind::Lexical => "akyno::lexical",
            DiagnosticKind::Syntactic => "akyno::syntactic",
        }))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = self
            .notes
            .first()
            .cloned()
            .unwrap_or_else(|| "here".to_string());
        Some(Box::new(std::iter::once(LabeledSpan::at(
            self.span, label,
        ))))
    }
}

/// The aggregate error returned when a caller insists on an all-or-nothing
/// parse; see `ParseResult::into_result`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("source contains {} syntax error(s)", .diagnostics.len())]
pub struct SyntaxErrors {
    pub diagnostics: Vec<Diagnostic>,
}

impl miette::Diagnostic for SyntaxErrors {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new("akyno::syntax_errors"))
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn miette::Diagnostic> + 'a>> {
        Some(Box::new(
            self.diagnostics
                .iter()
                .map(|d| d as &dyn miette::Diagnostic),
        ))
    }
}

/// Get line number, column number, and line text for a byte offset
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}

// ============================================================================
// Error catalog: the messages the lexer and parser emit
// ============================================================================

/// Create common error values with consistent wording
pub mod errors {
    use super::*;

    pub fn unrecognized_character(c: char, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Unrecognized character {:?}", c), span)
    }

    pub fn unterminated_string(span: Span) -> Diagnostic {
        Diagnostic::lexical("Unterminated string literal".to_string(), span)
            .with_hint("Add a closing '\"' before the end of the line or file")
    }

    pub fn unterminated_char(span: Span) -> Diagnostic {
        Diagnostic::lexical("Unterminated character literal".to_string(), span)
            .with_hint("Add a closing '\\''")
    }

    pub fn unterminated_block_comment(span: Span) -> Diagnostic {
        Diagnostic::lexical("Unterminated block comment".to_string(), span)
            .with_note("Block comments nest; every '/*' needs its own '*/'")
    }

    pub fn malformed_char_literal(text: &str, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Malformed character literal {}", text), span)
            .with_note("A character literal holds exactly one character or escape")
    }

    pub fn malformed_string_literal(text: &str, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Malformed string literal {}", text), span)
            .with_hint("Valid escapes are \\\", \\', \\n, \\t, \\r, and \\xHH")
    }

    pub fn expected_token(expected: &str, found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Expected {}, found {}", expected, found), span)
    }

    pub fn unexpected_token(found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Unexpected token: {}", found), span)
    }

    pub fn expected_item(found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(
            format!("Expected a top-level item, found {}", found),
            span,
        )
        .with_note("A source file holds static variables and functions")
        .with_hint("Start an item with 'static' or a function name")
    }

    pub fn expected_expression(found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Expected an expression, found {}", found), span)
    }

    pub fn expected_type(found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Expected a type, found {}", found), span)
            .with_hint("Types start with 'int', 'char', 'void', 'struct', '_', '&', or '('")
    }

    pub fn integer_too_large(text: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Integer literal {} is too large", text), span)
            .with_note("Integer literals must fit in a signed 64-bit value")
    }

    pub fn unclosed_block(span: Span) -> Diagnostic {
        Diagnostic::syntax("Unclosed block".to_string(), span)
            .with_hint("Add a closing '}'")
    }
}
