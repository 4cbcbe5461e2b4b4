// Parser state and the top-level parse loop. Included into `crate::parser`.

/// Infix shape of an operator, resolved before the right operand is parsed.
///
/// Assignment is absent on purpose: the climbing loop special-cases `=`
/// because its left side must be a bare identifier.
#[derive(Debug, Clone, Copy)]
enum InfixKind {
    Or,
    And,
    Eq(EqOp),
    Cmp(CompareOp),
    Sum(SumOp),
    Mul(MulOp),
}

/// Map an operator to its infix role, if it has one.
fn infix_kind(id: OperatorId) -> Option<InfixKind> {
    match id {
        OperatorId::PipePipe => Some(InfixKind::Or),
        OperatorId::AmpAmp => Some(InfixKind::And),
        OperatorId::EqEq => Some(InfixKind::Eq(EqOp::Eq)),
        OperatorId::NotEq => Some(InfixKind::Eq(EqOp::NotEq)),
        OperatorId::Lt => Some(InfixKind::Cmp(CompareOp::Lt)),
        OperatorId::Gt => Some(InfixKind::Cmp(CompareOp::Gt)),
        OperatorId::LtEq => Some(InfixKind::Cmp(CompareOp::LtEq)),
        OperatorId::GtEq => Some(InfixKind::Cmp(CompareOp::GtEq)),
        OperatorId::Plus => Some(InfixKind::Sum(SumOp::Add)),
        OperatorId::Minus => Some(InfixKind::Sum(SumOp::Sub)),
        OperatorId::Star => Some(InfixKind::Mul(MulOp::Mul)),
        OperatorId::Slash => Some(InfixKind::Mul(MulOp::Div)),
        OperatorId::Percent => Some(InfixKind::Mul(MulOp::Mod)),
        OperatorId::Eq | OperatorId::Amp => None,
    }
}

/// Map a prefix-capable operator to its unary role.
///
/// The registry decides which operators may appear in prefix position; this
/// only translates the id into an AST operator.
fn prefix_op(id: OperatorId) -> Option<UnaryOp> {
    if !operators::is_prefix(id) {
        return None;
    }
    match id {
        OperatorId::Plus => Some(UnaryOp::Plus),
        OperatorId::Minus => Some(UnaryOp::Neg),
        OperatorId::Star => Some(UnaryOp::Deref),
        OperatorId::Amp => Some(UnaryOp::AddrOf),
        _ => None,
    }
}

/// Build the diagnostic for an error token carried over from the lexer.
fn lexical_diagnostic(kind: LexErrorKind, token: &Token<'_>) -> Diagnostic {
    match kind {
        LexErrorKind::UnrecognizedChar => {
            let c = token.text.chars().next().unwrap_or('\u{FFFD}');
            errors::unrecognized_character(c, token.span)
        }
        LexErrorKind::MalformedLiteral => {
            if token.text.starts_with('\'') {
                errors::malformed_char_literal(token.text, token.span)
            } else {
                errors::malformed_string_literal(token.text, token.span)
            }
        }
        LexErrorKind::UnterminatedLiteral => {
            if token.text.starts_with('\'') {
                errors::unterminated_char(token.span)
            } else {
                errors::unterminated_string(token.span)
            }
        }
        LexErrorKind::UnterminatedComment => errors::unterminated_block_comment(token.span),
    }
}

/// Recursive-descent parser over a lexed token stream.
///
/// ## Notes
/// - The parser never aborts: failed regions become `Error` placeholder
///   nodes, the cause is recorded as a [`Diagnostic`], and parsing resumes at
///   the next recovery point.
/// - The cursor always rests on a non-trivia token. Whitespace and comments
///   are stepped over when advancing, which is what keeps them transparent to
///   every grammar rule.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    /// End offset of the last consumed grammar token. Node end positions come
    /// from here so trailing trivia never leaks into a span.
    last_end: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by [`crate::lexer`], trivia included.
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        let mut parser = Self {
            tokens,
            pos: 0,
            last_end: 0,
            diagnostics: Vec::new(),
        };
        parser.skip_trivia();
        parser
    }

    /// Parse the whole token stream into a [`SourceFile`].
    ///
    /// Consumes the parser and always produces a tree; anything that went
    /// wrong along the way is reported through the result's diagnostics.
    pub fn parse(mut self) -> ParseResult {
        // Error tokens get their diagnostic exactly once, up front. The
        // grammar then treats them as opaque placeholders without reporting
        // them a second time.
        for token in self.tokens {
            if let TokenKind::Error(kind) = token.kind {
                self.diagnostics.push(lexical_diagnostic(kind, token));
            }
        }

        let mut items = Vec::new();
        while !self.is_at_end() {
            let before = self.pos;
            match self.item() {
                Ok(item) => items.push(item),
                Err(err) => {
                    self.diagnostics.push(err);
                    let span = self.synchronize_item(before);
                    items.push(Spanned::new(Item::Error, span));
                }
            }
        }

        let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
        ParseResult {
            file: Spanned::new(SourceFile { items }, Span::new(0, end)),
            diagnostics: self.diagnostics,
        }
    }
}
