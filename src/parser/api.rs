// Public parsing entrypoints. Included into `crate::parser`.

/// The outcome of a parse: a complete tree plus everything that went wrong.
///
/// The tree is always present, whatever the input looked like. Callers that
/// want all-or-nothing behavior can use [`ParseResult::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub file: Spanned<SourceFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Return `true` if any diagnostics were recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Convert to a plain `Result`, giving up the partial tree on error.
    pub fn into_result(self) -> Result<Spanned<SourceFile>, SyntaxErrors> {
        if self.diagnostics.is_empty() {
            Ok(self.file)
        } else {
            Err(SyntaxErrors {
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Parse a token stream into a [`SourceFile`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by [`crate::lexer`], trivia included.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token<'_>]) -> ParseResult {
    Parser::new(tokens).parse()
}

/// Lex and parse source text in one step.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> ParseResult {
    let tokens = lexer::lex(source);
    parse(&tokens)
}
