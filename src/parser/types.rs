// Type-expression parsing methods. Included into `crate::parser`.

/// Type grammar.
///
/// Pointer `&` binds looser than the `[N]` array suffixes, so `&int[3]` is a
/// pointer to an array of three ints; an array of pointers takes parentheses,
/// `(&int)[3]`. Suffix dimensions collect greedily into a single `ArrayType`
/// node carrying the whole dimension list.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<Type>, Diagnostic> {
        let start = self.current_span().start;

        // Prefix pointer, right-associative.
        if self.match_op(OperatorId::Amp) {
            let pointee = self.type_expr()?;
            let span = Span::new(start, pointee.span.end);
            return Ok(Spanned::new(
                Type::PointerType {
                    pointee: Box::new(pointee),
                },
                span,
            ));
        }

        // `&&T` reaches us as a single token, but it still means two pointer
        // levels; the inner node's span starts at the second `&`.
        if self.check_op(OperatorId::AmpAmp) {
            let token = self.advance();
            let pointee = self.type_expr()?;
            let inner_span = Span::new(token.span.start + 1, pointee.span.end);
            let inner = Spanned::new(
                Type::PointerType {
                    pointee: Box::new(pointee),
                },
                inner_span,
            );
            let span = Span::new(start, inner.span.end);
            return Ok(Spanned::new(
                Type::PointerType {
                    pointee: Box::new(inner),
                },
                span,
            ));
        }

        let base = self.base_or_paren_type()?;
        self.array_suffixes(base)
    }

    /// Parse a base or parenthesized type, the two tightest-binding forms.
    fn base_or_paren_type(&mut self) -> Result<Spanned<Type>, Diagnostic> {
        let start = self.current_span().start;

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.type_expr()?;
            self.expect_punct(PunctuationId::RParen, "')' after type")?;
            return Ok(Spanned::new(
                Type::ParenType {
                    inner: Box::new(inner),
                },
                Span::new(start, self.last_end),
            ));
        }

        let base = match self.peek().kind.keyword_id() {
            Some(KeywordId::Int) => {
                self.advance();
                BaseType::Int
            }
            Some(KeywordId::Char) => {
                self.advance();
                BaseType::Char
            }
            Some(KeywordId::Void) => {
                self.advance();
                BaseType::Void
            }
            Some(KeywordId::Underscore) => {
                self.advance();
                BaseType::Infer
            }
            Some(KeywordId::Struct) => {
                self.advance();
                BaseType::Struct(self.identifier_spanned()?)
            }
            _ => {
                return Err(errors::expected_type(
                    &self.peek().description(),
                    self.peek().span,
                ));
            }
        };
        Ok(Spanned::new(
            Type::BaseType(base),
            Span::new(start, self.last_end),
        ))
    }

    /// Greedily wrap `base` with `[N]` suffixes, all dimensions in one node.
    fn array_suffixes(&mut self, base: Spanned<Type>) -> Result<Spanned<Type>, Diagnostic> {
        if !self.check_punct(PunctuationId::LBracket) {
            return Ok(base);
        }
        let start = base.span.start;
        let mut dims = Vec::new();
        while self.match_punct(PunctuationId::LBracket) {
            dims.push(self.array_dim()?);
            self.expect_punct(PunctuationId::RBracket, "']' after array size")?;
        }
        Ok(Spanned::new(
            Type::ArrayType {
                element: Box::new(base),
                dims,
            },
            Span::new(start, self.last_end),
        ))
    }

    /// Parse one integer array dimension.
    fn array_dim(&mut self) -> Result<Spanned<i64>, Diagnostic> {
        if !self.check(TokenKind::Int) {
            return Err(errors::expected_token(
                "an array size",
                &self.peek().description(),
                self.peek().span,
            ));
        }
        let token = self.advance();
        let value = token
            .text
            .parse::<i64>()
            .map_err(|_| errors::integer_too_large(token.text, token.span))?;
        Ok(Spanned::new(value, token.span))
    }
}
