//! Abstract Syntax Tree definitions for Akyno
//!
//! This module defines all AST node types for the Akyno language, grouped
//! into the four supertype families (`Literal`, `Type`, `Expr`, `Statement`)
//! plus top-level items and the `for`-loop range pattern.
//!
//! ## Notes
//! - Every node is wrapped in [`Spanned`]; spans cover exactly the tokens a
//!   node consumed, trivia excluded.
//! - Field names mirror the grammar's declared fields. Where a grammar field
//!   collides with a Rust keyword (`type`, `struct`, `fn`, `else`) the field
//!   keeps its name through a raw identifier.
//! - Trees are plain immutable data: the parser builds them once and no API
//!   mutates a node afterwards, so a finished tree can be read from any
//!   number of threads. Transformation passes build new trees.
//! - Each family carries an `Error` variant standing in for source regions
//!   the parser had to skip; see the diagnostics module for the recovery
//!   policy.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier (interned string index in practice, String for simplicity here)
pub type Ident = String;

/// A source file is an ordered sequence of top-level items.
///
/// Item order is preserved verbatim; declaration-before-use is not a concern
/// of this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub items: Vec<Spanned<Item>>,
}

// ============================================================================
// Items (top level)
// ============================================================================

/// Top-level items
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Static variable: `static x: int = 5;`, `static x: int;`, or
    /// `static x := 5;`
    ///
    /// `type` is absent exactly in the `:=` form; `value` is optional only
    /// in the `:` form.
    StaticVar {
        name: Spanned<Ident>,
        r#type: Option<Spanned<Type>>,
        value: Option<Spanned<Expr>>,
    },
    /// Function declaration: `f(a: int): void;`
    FnDecl {
        name: Spanned<Ident>,
        params: Vec<Spanned<Param>>,
        r#type: Spanned<Type>,
    },
    /// Function definition: `f(a: int): void { ... }`
    ///
    /// Shares the signature fields of [`Item::FnDecl`] exactly; only the
    /// trailing `block` distinguishes the two.
    FnDefn {
        name: Spanned<Ident>,
        params: Vec<Spanned<Param>>,
        r#type: Spanned<Type>,
        block: Spanned<Block>,
    },
    /// Placeholder for an item-level region the parser could not interpret.
    Error,
}

/// A function parameter: `name: type`
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Spanned<Ident>,
    pub r#type: Spanned<Type>,
}

// ============================================================================
// Types
// ============================================================================

/// Type expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Base type: `int`, `char`, `void`, `struct foo`, `_`
    BaseType(BaseType),
    /// Pointer type: `&int` (prefix `&`, binds looser than array suffixes,
    /// so `&int[3]` is a pointer to an array)
    PointerType { pointee: Box<Spanned<Type>> },
    /// Array type: `int[3]` or `int[3][4]`, one node carrying the whole
    /// dimension list, each dimension an integer literal with its span
    ArrayType {
        element: Box<Spanned<Type>>,
        dims: Vec<Spanned<i64>>,
    },
    /// Parenthesized type: `(&int)`, preserved so `(&int)[3]` (array of
    /// pointers) re-prints with its grouping intact
    ParenType { inner: Box<Spanned<Type>> },
    /// Placeholder for a type-level region the parser could not interpret.
    Error,
}

/// The closed set of base type forms.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseType {
    Int,
    Char,
    Void,
    /// `struct <ident>`, a named struct reference
    Struct(Spanned<Ident>),
    /// `_`, the to-be-inferred marker
    Infer,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseType::Int => write!(f, "int"),
            BaseType::Char => write!(f, "char"),
            BaseType::Void => write!(f, "void"),
            BaseType::Struct(name) => write!(f, "struct {}", name.node),
            BaseType::Infer => write!(f, "_"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::BaseType(base) => write!(f, "{}", base),
            Type::PointerType { pointee } => write!(f, "&{}", pointee.node),
            Type::ArrayType { element, dims } => {
                write!(f, "{}", element.node)?;
                for dim in dims {
                    write!(f, "[{}]", dim.node)?;
                }
                Ok(())
            }
            Type::ParenType { inner } => write!(f, "({})", inner.node),
            Type::Error => write!(f, "<error>"),
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A braced statement sequence: `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<Spanned<Statement>>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Nested block
    Block(Block),
    /// Local variable: `x: int = 5;`, `x: int;`, or `x := 5;`
    ///
    /// The `:` form carries a `type` and an optional `expr`; the `:=` form
    /// carries no `type` and a mandatory `expr`.
    LocalVar {
        name: Spanned<Ident>,
        r#type: Option<Spanned<Type>>,
        expr: Option<Spanned<Expr>>,
    },
    /// Range loop: `for i : [0; n) body`
    For {
        pattern: Spanned<RangePattern>,
        body: Box<Spanned<Statement>>,
    },
    /// `while (cond) body`
    While {
        expr: Spanned<Expr>,
        body: Box<Spanned<Statement>>,
    },
    /// `if (cond) then` with optional `else` bound to the nearest
    /// unmatched `if`
    If {
        expr: Spanned<Expr>,
        then: Box<Spanned<Statement>>,
        r#else: Option<Box<Spanned<Statement>>>,
    },
    /// `return;` or `return expr;`
    Return { expr: Option<Spanned<Expr>> },
    /// `break;`
    Break,
    /// `continue;`
    Continue,
    /// Bare expression statement: `expr;`
    ExprStmt { expr: Spanned<Expr> },
    /// Placeholder for a statement-level region the parser could not
    /// interpret.
    Error,
}

/// The `for`-loop header: `name ':' ('['|'(') start ';' end (']'|')')`.
///
/// The two bracket choices are independent; the parser only records which
/// bracket was written on each side. Inclusive/exclusive semantics belong to
/// a later stage.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePattern {
    pub name: Spanned<Ident>,
    /// `true` for `[`, `false` for `(`
    pub left_inclusive: bool,
    pub start: Spanned<Expr>,
    pub end: Spanned<Expr>,
    /// `true` for `]`, `false` for `)`
    pub right_inclusive: bool,
}

// ============================================================================
// Expressions
// ============================================================================

/// Expressions
///
/// Binary operators are split per precedence level rather than pooled into
/// one `Binary` node, mirroring the grammar's level structure: a consumer
/// matching `Expr::Comparison` knows the operator is one of `<`, `>`, `<=`,
/// `>=` without inspecting it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier reference
    Ident(Ident),
    /// Literal value (literals are a sub-family of expressions)
    Literal(Literal),
    /// Assignment: `x = expr`, where the left side is restricted to a bare
    /// identifier by the grammar
    Assignment {
        left: Spanned<Ident>,
        right: Box<Spanned<Expr>>,
    },
    /// Logical or: `a || b`
    LogOr {
        left: Box<Spanned<Expr>>,
        right: Box<Spanned<Expr>>,
    },
    /// Logical and: `a && b`
    LogAnd {
        left: Box<Spanned<Expr>>,
        right: Box<Spanned<Expr>>,
    },
    /// Equality: `a == b`, `a != b`
    Eq {
        left: Box<Spanned<Expr>>,
        op: EqOp,
        right: Box<Spanned<Expr>>,
    },
    /// Ordering comparison: `a < b`, `a > b`, `a <= b`, `a >= b`
    Comparison {
        left: Box<Spanned<Expr>>,
        op: CompareOp,
        right: Box<Spanned<Expr>>,
    },
    /// Additive arithmetic: `a + b`, `a - b`
    ArithLower {
        left: Box<Spanned<Expr>>,
        op: SumOp,
        right: Box<Spanned<Expr>>,
    },
    /// Multiplicative arithmetic: `a * b`, `a / b`, `a % b`
    ArithHigher {
        left: Box<Spanned<Expr>>,
        op: MulOp,
        right: Box<Spanned<Expr>>,
    },
    /// Typecast: `(int) x`
    Typecast {
        r#type: Spanned<Type>,
        expr: Box<Spanned<Expr>>,
    },
    /// Unary prefix: `+x`, `-x`, `&x`, `*x`
    Unary {
        op: UnaryOp,
        expr: Box<Spanned<Expr>>,
    },
    /// Array access: `a[i]`. Chained accesses nest (`a[0][1]` is an access
    /// on an access, unlike the flattened dimension list in types)
    ArrayAccess {
        arr: Box<Spanned<Expr>>,
        index: Box<Spanned<Expr>>,
    },
    /// Field access: `s.field`
    FieldAccess {
        r#struct: Box<Spanned<Expr>>,
        field: Spanned<Ident>,
    },
    /// Call: `f(a, b)`, where the callee is restricted to a bare identifier
    /// by the grammar; `()` yields an empty `args`
    Call {
        r#fn: Spanned<Ident>,
        args: Vec<Spanned<Expr>>,
    },
    /// Parenthesized expression, preserved (never collapsed) so grouping
    /// re-prints faithfully
    Paren { inner: Box<Spanned<Expr>> },
    /// Placeholder for an expression-level region the parser could not
    /// interpret.
    Error,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Character literal with escapes decoded: `'a'`, `'\n'`, `'\x41'`
    Char(char),
    /// Integer literal: `42`
    Int(i64),
    /// String literal with escapes decoded: `"hello\n"`
    String(String),
}

/// Equality-level operators (level 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqOp {
    Eq,
    NotEq,
}

impl fmt::Display for EqOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqOp::Eq => write!(f, "=="),
            EqOp::NotEq => write!(f, "!="),
        }
    }
}

/// Comparison-level operators (level 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::LtEq => write!(f, "<="),
            CompareOp::GtEq => write!(f, ">="),
        }
    }
}

/// Additive operators (level 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumOp {
    Add,
    Sub,
}

impl fmt::Display for SumOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumOp::Add => write!(f, "+"),
            SumOp::Sub => write!(f, "-"),
        }
    }
}

/// Multiplicative operators (level 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
    Mod,
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MulOp::Mul => write!(f, "*"),
            MulOp::Div => write!(f, "/"),
            MulOp::Mod => write!(f, "%"),
        }
    }
}

/// Unary prefix operators (level 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    AddrOf,
    Deref,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::AddrOf => write!(f, "&"),
            UnaryOp::Deref => write!(f, "*"),
        }
    }
}

// ============================================================================
// Visitor trait for AST traversal
// ============================================================================

/// A read-only traversal over a tree.
///
/// Every `visit_*` method defaults to the matching `walk_*` function, which
/// recurses into children. Override a method to observe one supertype family
/// (e.g. every expression, whatever statement it sits in); call the `walk_*`
/// function from the override to keep descending.
pub trait Visitor {
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_item(&mut self, item: &Spanned<Item>) {
        walk_item(self, item);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &Spanned<Statement>) {
        walk_statement(self, stmt);
    }

    fn visit_range_pattern(&mut self, pattern: &Spanned<RangePattern>) {
        walk_range_pattern(self, pattern);
    }

    fn visit_expr(&mut self, expr: &Spanned<Expr>) {
        walk_expr(self, expr);
    }

    fn visit_literal(&mut self, _lit: &Literal) {}

    fn visit_type(&mut self, ty: &Spanned<Type>) {
        walk_type(self, ty);
    }
}

pub fn walk_source_file<V: Visitor + ?Sized>(v: &mut V, file: &SourceFile) {
    for item in &file.items {
        v.visit_item(item);
    }
}

pub fn walk_item<V: Visitor + ?Sized>(v: &mut V, item: &Spanned<Item>) {
    match &item.node {
        Item::StaticVar { r#type, value, .. } => {
            if let Some(ty) = r#type {
                v.visit_type(ty);
            }
            if let Some(value) = value {
                v.visit_expr(value);
            }
        }
        Item::FnDecl { params, r#type, .. } => {
            for param in params {
                v.visit_type(&param.node.r#type);
            }
            v.visit_type(r#type);
        }
        Item::FnDefn {
            params,
            r#type,
            block,
            ..
        } => {
            for param in params {
                v.visit_type(&param.node.r#type);
            }
            v.visit_type(r#type);
            v.visit_block(&block.node);
        }
        Item::Error => {}
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    for stmt in &block.body {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(v: &mut V, stmt: &Spanned<Statement>) {
    match &stmt.node {
        Statement::Block(block) => v.visit_block(block),
        Statement::LocalVar { r#type, expr, .. } => {
            if let Some(ty) = r#type {
                v.visit_type(ty);
            }
            if let Some(expr) = expr {
                v.visit_expr(expr);
            }
        }
        Statement::For { pattern, body } => {
            v.visit_range_pattern(pattern);
            v.visit_statement(body);
        }
        Statement::While { expr, body } => {
            v.visit_expr(expr);
            v.visit_statement(body);
        }
        Statement::If { expr, then, r#else } => {
            v.visit_expr(expr);
            v.visit_statement(then);
            if let Some(else_stmt) = r#else {
                v.visit_statement(else_stmt);
            }
        }
        Statement::Return { expr } => {
            if let Some(expr) = expr {
                v.visit_expr(expr);
            }
        }
        Statement::ExprStmt { expr } => v.visit_expr(expr),
        Statement::Break | Statement::Continue | Statement::Error => {}
    }
}

pub fn walk_range_pattern<V: Visitor + ?Sized>(v: &mut V, pattern: &Spanned<RangePattern>) {
    v.visit_expr(&pattern.node.start);
    v.visit_expr(&pattern.node.end);
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Spanned<Expr>) {
    match &expr.node {
        Expr::Ident(_) | Expr::Error => {}
        Expr::Literal(lit) => v.visit_literal(lit),
        Expr::Assignment { right, .. } => v.visit_expr(right),
        Expr::LogOr { left, right }
        | Expr::LogAnd { left, right }
        | Expr::Eq { left, right, .. }
        | Expr::Comparison { left, right, .. }
        | Expr::ArithLower { left, right, .. }
        | Expr::ArithHigher { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Typecast { r#type, expr } => {
            v.visit_type(r#type);
            v.visit_expr(expr);
        }
        Expr::Unary { expr, .. } => v.visit_expr(expr),
        Expr::ArrayAccess { arr, index } => {
            v.visit_expr(arr);
            v.visit_expr(index);
        }
        Expr::FieldAccess { r#struct, .. } => v.visit_expr(r#struct),
        Expr::Call { args, .. } => {
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::Paren { inner } => v.visit_expr(inner),
    }
}

pub fn walk_type<V: Visitor + ?Sized>(v: &mut V, ty: &Spanned<Type>) {
    match &ty.node {
        Type::BaseType(_) | Type::Error => {}
        Type::PointerType { pointee } => v.visit_type(pointee),
        Type::ArrayType { element, .. } => v.visit_type(element),
        Type::ParenType { inner } => v.visit_type(inner),
    }
}
