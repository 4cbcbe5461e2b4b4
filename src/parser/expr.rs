// Expression parsing methods. Included into `crate::parser`.

/// Expression grammar.
///
/// One precedence-climbing loop drives every binary operator: the operator
/// registry supplies binding power and associativity, and the loop keeps
/// consuming while the next operator binds at least as tightly as the caller
/// requires. Prefix operators and the typecast form sit above the infix
/// levels; the postfix chain (`[...]`, `.field`, `(...)`) binds tightest.
///
/// ## Notes
/// - Assignment is only built when its left side is a bare identifier;
///   anything else leaves the `=` unconsumed for the statement layer to
///   report.
/// - `(T) e` versus `(e)` is resolved by speculation: try the type grammar
///   inside the parentheses and commit to a cast only when the closing `)` is
///   immediately followed by an expression start, otherwise rewind and parse
///   the parentheses as grouping.
/// - A `&&` token in prefix position splits into two address-of levels, the
///   same way the type grammar reads `&&T` as a pointer to a pointer.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.expr_bp(0)
    }

    /// The precedence-climbing loop. `min_bp` is the loosest binding power
    /// this call is allowed to consume.
    fn expr_bp(&mut self, min_bp: u8) -> Result<Spanned<Expr>, Diagnostic> {
        let mut left = self.unary_expr()?;

        loop {
            // Postfix chain first; it outbinds every infix operator.
            if operators::POSTFIX_POWER > min_bp {
                if self.check_punct(PunctuationId::LBracket) {
                    left = self.array_access(left)?;
                    continue;
                }
                if self.check_punct(PunctuationId::Dot) {
                    left = self.field_access(left)?;
                    continue;
                }
                if self.check_punct(PunctuationId::LParen) && matches!(left.node, Expr::Ident(_)) {
                    left = self.call(left)?;
                    continue;
                }
            }

            let Some(op_id) = self.peek().kind.operator_id() else {
                break;
            };
            let Some((lbp, assoc)) = operators::infix_power(op_id) else {
                break;
            };
            if lbp < min_bp {
                break;
            }

            if op_id == OperatorId::Eq {
                // The grammar only assigns to bare identifiers.
                let Expr::Ident(name) = &left.node else {
                    break;
                };
                let name = Spanned::new(name.clone(), left.span);
                self.advance();
                let right = self.expr_bp(lbp)?;
                let span = left.span.merge(right.span);
                left = Spanned::new(
                    Expr::Assignment {
                        left: name,
                        right: Box::new(right),
                    },
                    span,
                );
                continue;
            }

            let Some(kind) = infix_kind(op_id) else {
                break;
            };
            self.advance();
            let rhs_bp = match assoc {
                Associativity::Left => lbp + 1,
                Associativity::Right => lbp,
            };
            let right = self.expr_bp(rhs_bp)?;
            let span = left.span.merge(right.span);
            let (l, r) = (Box::new(left), Box::new(right));
            let node = match kind {
                InfixKind::Or => Expr::LogOr { left: l, right: r },
                InfixKind::And => Expr::LogAnd { left: l, right: r },
                InfixKind::Eq(op) => Expr::Eq { left: l, op, right: r },
                InfixKind::Cmp(op) => Expr::Comparison { left: l, op, right: r },
                InfixKind::Sum(op) => Expr::ArithLower { left: l, op, right: r },
                InfixKind::Mul(op) => Expr::ArithHigher { left: l, op, right: r },
            };
            left = Spanned::new(node, span);
        }

        Ok(left)
    }

    /// Prefix level: a typecast, a unary operator, or a primary expression.
    ///
    /// The typecast check comes first so that `(int) -x` casts a negation
    /// instead of stranding the `-`.
    fn unary_expr(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        if self.check_punct(PunctuationId::LParen) {
            if let Some(cast) = self.try_typecast()? {
                return Ok(cast);
            }
        }
        // `&&e` reaches us as a single token, but in prefix position it still
        // means two address-of levels, the same split the type grammar applies
        // to `&&T`; the inner node's span starts at the second `&`.
        if self.check_op(OperatorId::AmpAmp) {
            let token = self.advance();
            let expr = self.expr_bp(operators::UNARY_POWER)?;
            let inner_span = Span::new(token.span.start + 1, expr.span.end);
            let inner = Spanned::new(
                Expr::Unary {
                    op: UnaryOp::AddrOf,
                    expr: Box::new(expr),
                },
                inner_span,
            );
            let span = Span::new(token.span.start, inner.span.end);
            return Ok(Spanned::new(
                Expr::Unary {
                    op: UnaryOp::AddrOf,
                    expr: Box::new(inner),
                },
                span,
            ));
        }
        if let Some(op) = self.peek().kind.operator_id().and_then(prefix_op) {
            let token = self.advance();
            let expr = self.expr_bp(operators::UNARY_POWER)?;
            let span = Span::new(token.span.start, expr.span.end);
            return Ok(Spanned::new(
                Expr::Unary {
                    op,
                    expr: Box::new(expr),
                },
                span,
            ));
        }
        self.primary()
    }

    /// Speculatively parse `'(' type ')'` at the head of an expression.
    ///
    /// Commits only when the type grammar accepts the parenthesized tokens
    /// and the closing `)` is immediately followed by something that can
    /// start an expression. On any other outcome the cursor rewinds, the
    /// speculative error is discarded, and the caller falls back to grouping.
    fn try_typecast(&mut self) -> Result<Option<Spanned<Expr>>, Diagnostic> {
        let start = self.current_span().start;
        let saved_pos = self.pos;
        let saved_end = self.last_end;

        self.advance(); // `(`
        let Ok(r#type) = self.type_expr() else {
            self.pos = saved_pos;
            self.last_end = saved_end;
            return Ok(None);
        };
        if !self.check_punct(PunctuationId::RParen) || !token_starts_expr(self.peek_next().kind) {
            self.pos = saved_pos;
            self.last_end = saved_end;
            return Ok(None);
        }
        self.advance(); // `)`

        let expr = self.expr_bp(operators::UNARY_POWER)?;
        let span = Span::new(start, expr.span.end);
        Ok(Some(Spanned::new(
            Expr::Typecast {
                r#type,
                expr: Box::new(expr),
            },
            span,
        )))
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        match self.peek().kind {
            TokenKind::Ident => {
                let token = self.advance();
                Ok(Spanned::new(
                    Expr::Ident(token.text.to_string()),
                    token.span,
                ))
            }
            TokenKind::Int => {
                let token = self.advance();
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| errors::integer_too_large(token.text, token.span))?;
                Ok(Spanned::new(
                    Expr::Literal(Literal::Int(value)),
                    token.span,
                ))
            }
            TokenKind::CharLit => {
                let token = self.advance();
                match lexer::decode_char(token.text) {
                    Some(c) => Ok(Spanned::new(Expr::Literal(Literal::Char(c)), token.span)),
                    None => Err(errors::malformed_char_literal(token.text, token.span)),
                }
            }
            TokenKind::StrLit => {
                let token = self.advance();
                match lexer::decode_string(token.text) {
                    Some(s) => Ok(Spanned::new(
                        Expr::Literal(Literal::String(s)),
                        token.span,
                    )),
                    None => Err(errors::malformed_string_literal(token.text, token.span)),
                }
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                let start = self.current_span().start;
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "')' after expression")?;
                Ok(Spanned::new(
                    Expr::Paren {
                        inner: Box::new(inner),
                    },
                    Span::new(start, self.last_end),
                ))
            }
            TokenKind::Error(_) => {
                // Already reported as a lexical diagnostic.
                let token = self.advance();
                Ok(Spanned::new(Expr::Error, token.span))
            }
            _ => Err(errors::expected_expression(
                &self.peek().description(),
                self.peek().span,
            )),
        }
    }

    // ========================================================================
    // Postfix forms
    // ========================================================================

    fn array_access(&mut self, arr: Spanned<Expr>) -> Result<Spanned<Expr>, Diagnostic> {
        self.advance(); // `[`
        let index = self.expression()?;
        self.expect_punct(PunctuationId::RBracket, "']' after index")?;
        let span = Span::new(arr.span.start, self.last_end);
        Ok(Spanned::new(
            Expr::ArrayAccess {
                arr: Box::new(arr),
                index: Box::new(index),
            },
            span,
        ))
    }

    fn field_access(&mut self, r#struct: Spanned<Expr>) -> Result<Spanned<Expr>, Diagnostic> {
        self.advance(); // `.`
        let field = self.identifier_spanned()?;
        let span = Span::new(r#struct.span.start, field.span.end);
        Ok(Spanned::new(
            Expr::FieldAccess {
                r#struct: Box::new(r#struct),
                field,
            },
            span,
        ))
    }

    /// Parse a call's argument list. The caller has already checked that the
    /// callee is a bare identifier.
    fn call(&mut self, callee: Spanned<Expr>) -> Result<Spanned<Expr>, Diagnostic> {
        let Expr::Ident(name) = callee.node else {
            return Err(errors::unexpected_token(
                &self.peek().description(),
                self.peek().span,
            ));
        };
        let r#fn = Spanned::new(name, callee.span);
        self.advance(); // `(`
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "')' after arguments")?;
        let span = Span::new(r#fn.span.start, self.last_end);
        Ok(Spanned::new(Expr::Call { r#fn, args }, span))
    }
}
