// Item parsing methods. Included into `crate::parser`.

/// Top-level item parsing.
///
/// A source file is a sequence of static variables and functions. One
/// signature sub-parser feeds both function forms, so a declaration and a
/// definition always carry identical name, parameter, and type shapes; the
/// token after the signature decides which variant is built.
impl<'a> Parser<'a> {
    // ========================================================================
    // Items
    // ========================================================================

    fn item(&mut self) -> Result<Spanned<Item>, Diagnostic> {
        if self.check_keyword(KeywordId::Static) {
            return self.static_var();
        }
        if self.check(TokenKind::Ident) {
            return self.function();
        }
        if matches!(self.peek().kind, TokenKind::Error(_)) {
            // Already reported as a lexical diagnostic.
            let token = self.advance();
            return Ok(Spanned::new(Item::Error, token.span));
        }
        Err(errors::expected_item(
            &self.peek().description(),
            self.peek().span,
        ))
    }

    /// Parse `static name (':' type ('=' expr)? | ':=' expr) ';'`.
    fn static_var(&mut self) -> Result<Spanned<Item>, Diagnostic> {
        let start = self.current_span().start;
        self.advance(); // `static`
        let name = self.identifier_spanned()?;
        let (r#type, value) = self.var_declarator()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after static variable")?;
        Ok(Spanned::new(
            Item::StaticVar { name, r#type, value },
            Span::new(start, self.last_end),
        ))
    }

    /// Parse what follows a variable name: `':' type ('=' expr)?` for a typed
    /// variable or `':=' expr` for an inferred one. Shared by static and
    /// local variables.
    fn var_declarator(
        &mut self,
    ) -> Result<(Option<Spanned<Type>>, Option<Spanned<Expr>>), Diagnostic> {
        if self.match_punct(PunctuationId::Colon) {
            let r#type = self.type_expr()?;
            let init = if self.match_op(OperatorId::Eq) {
                Some(self.expression()?)
            } else {
                None
            };
            Ok((Some(r#type), init))
        } else if self.match_punct(PunctuationId::ColonEq) {
            Ok((None, Some(self.expression()?)))
        } else {
            Err(errors::expected_token(
                "':' or ':='",
                &self.peek().description(),
                self.peek().span,
            ))
        }
    }

    /// Parse a function item: `;` after the signature makes a declaration, a
    /// block makes a definition.
    fn function(&mut self) -> Result<Spanned<Item>, Diagnostic> {
        let start = self.current_span().start;
        let (name, params, r#type) = self.signature()?;
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(Spanned::new(
                Item::FnDecl { name, params, r#type },
                Span::new(start, self.last_end),
            ));
        }
        if self.check_punct(PunctuationId::LBrace) {
            let block = self.block()?;
            return Ok(Spanned::new(
                Item::FnDefn {
                    name,
                    params,
                    r#type,
                    block,
                },
                Span::new(start, self.last_end),
            ));
        }
        Err(errors::expected_token(
            "';' or a function body",
            &self.peek().description(),
            self.peek().span,
        ))
    }

    /// Parse `name '(' (param (',' param)*)? ')' ':' type`.
    fn signature(
        &mut self,
    ) -> Result<(Spanned<Ident>, Vec<Spanned<Param>>, Spanned<Type>), Diagnostic> {
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::LParen, "'(' after function name")?;
        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                params.push(self.param()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "')' after parameters")?;
        self.expect_punct(PunctuationId::Colon, "':' before the return type")?;
        let r#type = self.type_expr()?;
        Ok((name, params, r#type))
    }

    /// Parse one `name ':' type` parameter.
    fn param(&mut self) -> Result<Spanned<Param>, Diagnostic> {
        let start = self.current_span().start;
        let name = self.identifier_spanned()?;
        self.expect_punct(PunctuationId::Colon, "':' after parameter name")?;
        let r#type = self.type_expr()?;
        let span = Span::new(start, r#type.span.end);
        Ok(Spanned::new(Param { name, r#type }, span))
    }
}
