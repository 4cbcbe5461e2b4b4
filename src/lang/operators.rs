//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the
//! expression parser is driven by: binding power (precedence level),
//! associativity, and whether the operator may open a prefix expression.
//!
//! The level numbers are the language's documented precedence scheme: odd
//! values from 1 (assignment) to 13 (multiplicative), with 15 reserved for
//! the prefix forms and typecasts, 17 for the postfix chain, and 19 for
//! parenthesized grouping. Higher binds tighter.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `+`, `-`, and `*` are both infix and prefix; `&` is prefix-only at the
//!   expression level (it is also the pointer-type constructor, which the
//!   type grammar handles separately).
//! - There is no `!`, `|`, or bitwise operator family; those spellings are
//!   not in the lexicon at all.
//!
//! ## Examples
//! ```rust
//! use akyno_syntax::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str("||"), Some(OperatorId::PipePipe));
//! assert_eq!(operators::info_for(OperatorId::Plus).infix_power, Some(11));
//! assert_eq!(
//!     operators::infix_power(OperatorId::Eq),
//!     Some((1, Associativity::Right))
//! );
//! assert!(operators::is_prefix(OperatorId::Amp));
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding power of the shared prefix level: unary `+`, `-`, `&`, `*` and
/// typecasts all bind at this rank, tighter than any infix operator.
pub const UNARY_POWER: u8 = 15;

/// Binding power of the postfix chain (`[expr]`, `.ident`, `(args)`).
pub const POSTFIX_POWER: u8 = 17;

/// Binding power of parenthesized grouping.
pub const GROUPING_POWER: u8 = 19;

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Eq,

    // Logical
    PipePipe,
    AmpAmp,

    // Equality
    EqEq,
    NotEq,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Address-of / pointer marker (prefix only)
    Amp,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `infix_power` is the precedence level from the language's table; `None`
///   marks prefix-only operators. Higher binds tighter.
/// - `associativity` describes the infix form; it is meaningless for
///   prefix-only entries and left at [`Associativity::Left`] there.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub infix_power: Option<u8>,
    pub associativity: Associativity,
    /// `true` when the operator may begin a prefix expression (level 15).
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Eq, "=", Some(1), Associativity::Right, false),
    // Logical
    op(OperatorId::PipePipe, "||", Some(3), Associativity::Left, false),
    op(OperatorId::AmpAmp, "&&", Some(5), Associativity::Left, false),
    // Equality
    op(OperatorId::EqEq, "==", Some(7), Associativity::Left, false),
    op(OperatorId::NotEq, "!=", Some(7), Associativity::Left, false),
    // Comparison
    op(OperatorId::Lt, "<", Some(9), Associativity::Left, false),
    op(OperatorId::Gt, ">", Some(9), Associativity::Left, false),
    op(OperatorId::LtEq, "<=", Some(9), Associativity::Left, false),
    op(OperatorId::GtEq, ">=", Some(9), Associativity::Left, false),
    // Arithmetic
    op(OperatorId::Plus, "+", Some(11), Associativity::Left, true),
    op(OperatorId::Minus, "-", Some(11), Associativity::Left, true),
    op(OperatorId::Star, "*", Some(13), Associativity::Left, true),
    op(OperatorId::Slash, "/", Some(13), Associativity::Left, false),
    op(OperatorId::Percent, "%", Some(13), Associativity::Left, false),
    // Address-of
    op(OperatorId::Amp, "&", None, Associativity::Left, true),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the infix binding power and associativity for an operator, or
/// `None` for prefix-only operators.
pub fn infix_power(id: OperatorId) -> Option<(u8, Associativity)> {
    let info = info_for(id);
    info.infix_power.map(|power| (power, info.associativity))
}

/// Return whether an operator may begin a prefix expression.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive** and exact; `"=="` and `"="` are distinct.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    infix_power: Option<u8>,
    associativity: Associativity,
    prefix: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        infix_power,
        associativity,
        prefix,
    }
}
