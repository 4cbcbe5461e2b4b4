// Token-stream primitives and error recovery. Included into `crate::parser`.

/// Check whether a token can begin an expression.
///
/// Error tokens count: they parse to `Error` placeholder nodes, so input like
/// a cast applied to garbage still produces the structure the writer meant.
fn token_starts_expr(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Ident
        | TokenKind::Int
        | TokenKind::CharLit
        | TokenKind::StrLit
        | TokenKind::Error(_) => true,
        TokenKind::Punctuation(PunctuationId::LParen) => true,
        // `&&` splits into two address-of prefixes in expression position.
        TokenKind::Operator(OperatorId::AmpAmp) => true,
        TokenKind::Operator(id) => operators::is_prefix(id),
        _ => false,
    }
}

/// Cursor helpers shared by every grammar rule.
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return `true` if the cursor has reached the end of the stream.
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    ///
    /// Reading past the end of the slice yields a synthetic `Eof`, so every
    /// rule stays total even over a truncated stream.
    fn peek(&self) -> Token<'a> {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", Span::new(self.last_end, self.last_end)))
    }

    /// Return the first non-trivia token after the current one.
    fn peek_next(&self) -> Token<'a> {
        let mut index = self.pos + 1;
        while let Some(token) = self.tokens.get(index) {
            if !token.kind.is_trivia() {
                return *token;
            }
            index += 1;
        }
        Token::new(TokenKind::Eof, "", Span::new(self.last_end, self.last_end))
    }

    /// Step over trivia so the cursor rests on a grammar token.
    fn skip_trivia(&mut self) {
        while matches!(self.tokens.get(self.pos), Some(t) if t.kind.is_trivia()) {
            self.pos += 1;
        }
    }

    /// Consume the current token and return it. At `Eof` the cursor stays put.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
            self.last_end = token.span.end;
            self.skip_trivia();
        }
        token
    }

    /// Return the span of the current token.
    fn current_span(&self) -> Span {
        self.peek().span
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Return `true` if the current token has exactly this kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Consume the keyword if it is next. Returns whether it was consumed.
    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the operator if it is next. Returns whether it was consumed.
    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the punctuation if it is next. Returns whether it was consumed.
    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the expected punctuation or fail with `expected`.
    ///
    /// ## Parameters
    /// - `expected`: Completion of the sentence "Expected ...", for example
    ///   `"';' after statement"`.
    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<Token<'a>, Diagnostic> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(errors::expected_token(
                expected,
                &self.peek().description(),
                self.peek().span,
            ))
        }
    }

    /// Consume an identifier token and return its text.
    fn identifier(&mut self) -> Result<Ident, Diagnostic> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text.to_string())
        } else {
            Err(errors::expected_token(
                "an identifier",
                &self.peek().description(),
                self.peek().span,
            ))
        }
    }

    /// Consume an identifier token, keeping its span.
    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, Diagnostic> {
        let span = self.current_span();
        Ok(Spanned::new(self.identifier()?, span))
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Check for `name (`, the first two tokens of any function form.
    fn at_function_start(&self) -> bool {
        self.check(TokenKind::Ident)
            && self
                .peek_next()
                .kind
                .is_punctuation(PunctuationId::LParen)
    }

    /// Check for a keyword that can only open a statement.
    fn at_stmt_keyword(&self) -> bool {
        matches!(
            self.peek().kind.keyword_id(),
            Some(
                KeywordId::If
                    | KeywordId::While
                    | KeywordId::For
                    | KeywordId::Return
                    | KeywordId::Break
                    | KeywordId::Continue
            )
        )
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Skip to the next top-level recovery point: a `static` keyword, a
    /// function-signature start, or just past a `;`.
    ///
    /// Returns the span of the region given up on, starting at the token the
    /// failed item began with.
    fn synchronize_item(&mut self, from: usize) -> Span {
        let start = self
            .tokens
            .get(from)
            .map(|t| t.span.start)
            .unwrap_or(self.last_end);
        if self.pos == from {
            // Guarantee progress whatever the region starts with.
            self.advance();
        }
        while !self.is_at_end() {
            if self.check_keyword(KeywordId::Static) || self.at_function_start() {
                break;
            }
            if self.match_punct(PunctuationId::Semicolon) {
                break;
            }
            self.advance();
        }
        Span::new(start, self.last_end.max(start))
    }

    /// Skip to the next statement boundary inside a block: past a `;`, or up
    /// to a brace or a statement keyword.
    fn synchronize_stmt(&mut self, from: usize) -> Span {
        let start = self
            .tokens
            .get(from)
            .map(|t| t.span.start)
            .unwrap_or(self.last_end);
        if self.pos == from {
            self.advance();
        }
        while !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                break;
            }
            // The balancing `}` belongs to the enclosing block.
            if self.check_punct(PunctuationId::RBrace)
                || self.check_punct(PunctuationId::LBrace)
                || self.at_stmt_keyword()
            {
                break;
            }
            self.advance();
        }
        Span::new(start, self.last_end.max(start))
    }
}
