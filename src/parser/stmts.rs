// Statement parsing methods. Included into `crate::parser`.

/// Statement grammar.
///
/// ## Notes
/// - Blocks recover per statement: a bad statement becomes an `Error` node
///   and parsing resumes at the next boundary, so one mistake cannot take
///   down the whole body.
/// - `else` binds to the nearest unmatched `if` because the `then` branch is
///   parsed by recursion before the outer `if` looks for its own `else`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Spanned<Block>, Diagnostic> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LBrace, "'{' to open a block")?;
        let mut body = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let before = self.pos;
            match self.statement() {
                Ok(stmt) => body.push(stmt),
                Err(err) => {
                    self.diagnostics.push(err);
                    let span = self.synchronize_stmt(before);
                    body.push(Spanned::new(Statement::Error, span));
                }
            }
        }
        if !self.match_punct(PunctuationId::RBrace) {
            // Ran off the end of the file; keep the statements we have.
            self.diagnostics
                .push(errors::unclosed_block(Span::new(start, self.last_end)));
        }
        Ok(Spanned::new(Block { body }, Span::new(start, self.last_end)))
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        if self.check_punct(PunctuationId::LBrace) {
            let block = self.block()?;
            let span = block.span;
            return Ok(Spanned::new(Statement::Block(block.node), span));
        }
        match self.peek().kind.keyword_id() {
            Some(KeywordId::If) => return self.if_stmt(),
            Some(KeywordId::While) => return self.while_stmt(),
            Some(KeywordId::For) => return self.for_stmt(),
            Some(KeywordId::Return) => return self.return_stmt(),
            Some(KeywordId::Break) => return self.terminal_stmt(Statement::Break),
            Some(KeywordId::Continue) => return self.terminal_stmt(Statement::Continue),
            _ => {}
        }
        if matches!(self.peek().kind, TokenKind::Error(_)) {
            // Already reported as a lexical diagnostic.
            let token = self.advance();
            return Ok(Spanned::new(Statement::Error, token.span));
        }
        // `name :` and `name :=` open local variables; everything else that
        // starts with an identifier is an expression statement.
        if self.check(TokenKind::Ident)
            && (self.peek_next().kind.is_punctuation(PunctuationId::Colon)
                || self.peek_next().kind.is_punctuation(PunctuationId::ColonEq))
        {
            return self.local_var();
        }
        self.expr_stmt()
    }

    /// Parse `name (':' type ('=' expr)? | ':=' expr) ';'`.
    fn local_var(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        let name = self.identifier_spanned()?;
        let (r#type, expr) = self.var_declarator()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after variable")?;
        Ok(Spanned::new(
            Statement::LocalVar { name, r#type, expr },
            Span::new(start, self.last_end),
        ))
    }

    fn if_stmt(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // `if`
        self.expect_punct(PunctuationId::LParen, "'(' after 'if'")?;
        let expr = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')' after condition")?;
        let then = Box::new(self.statement()?);
        let r#else = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Spanned::new(
            Statement::If { expr, then, r#else },
            Span::new(start, self.last_end),
        ))
    }

    fn while_stmt(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // `while`
        self.expect_punct(PunctuationId::LParen, "'(' after 'while'")?;
        let expr = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')' after condition")?;
        let body = Box::new(self.statement()?);
        Ok(Spanned::new(
            Statement::While { expr, body },
            Span::new(start, self.last_end),
        ))
    }

    fn for_stmt(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // `for`
        let pattern = self.range_pattern()?;
        let body = Box::new(self.statement()?);
        Ok(Spanned::new(
            Statement::For { pattern, body },
            Span::new(start, self.last_end),
        ))
    }

    /// Parse `name ':' ('['|'(') start ';' end (']'|')')`.
    ///
    /// Each side records which bracket was written; what inclusivity means
    /// for evaluation is a later stage's concern.
    fn range_pattern(&mut self) -> Result<Spanned<RangePattern>, Diagnostic> {
        let start = self.current_span().start;
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::Colon, "':' after loop variable")?;
        let left_inclusive = if self.match_punct(PunctuationId::LBracket) {
            true
        } else if self.match_punct(PunctuationId::LParen) {
            false
        } else {
            return Err(errors::expected_token(
                "'[' or '(' to open a range",
                &self.peek().description(),
                self.peek().span,
            ));
        };
        let range_start = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' between range bounds")?;
        let range_end = self.expression()?;
        let right_inclusive = if self.match_punct(PunctuationId::RBracket) {
            true
        } else if self.match_punct(PunctuationId::RParen) {
            false
        } else {
            return Err(errors::expected_token(
                "']' or ')' to close a range",
                &self.peek().description(),
                self.peek().span,
            ));
        };
        Ok(Spanned::new(
            RangePattern {
                name,
                left_inclusive,
                start: range_start,
                end: range_end,
                right_inclusive,
            },
            Span::new(start, self.last_end),
        ))
    }

    fn return_stmt(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // `return`
        let expr = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after return")?;
        Ok(Spanned::new(
            Statement::Return { expr },
            Span::new(start, self.last_end),
        ))
    }

    /// Parse `break ;` or `continue ;`, which carry nothing but their span.
    fn terminal_stmt(&mut self, node: Statement) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // keyword
        self.expect_punct(PunctuationId::Semicolon, "';' after statement")?;
        Ok(Spanned::new(node, Span::new(start, self.last_end)))
    }

    fn expr_stmt(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span().start;
        let expr = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after expression")?;
        Ok(Spanned::new(
            Statement::ExprStmt { expr },
            Span::new(start, self.last_end),
        ))
    }
}
