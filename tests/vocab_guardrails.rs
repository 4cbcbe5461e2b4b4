//! Guardrails over the language vocabulary registries
//!
//! The registries are the single source of truth for keyword, operator, and
//! punctuation identity, and the expression grammar reads its binding powers
//! straight out of the operator table. These tests catch table edits that
//! would silently break that contract.

use std::collections::HashSet;

use akyno_syntax::lang::operators::{self, Associativity, OperatorId};
use akyno_syntax::lang::{keywords, punctuation};

#[test]
fn keyword_spellings_and_ids_are_unique() {
    let mut spellings = HashSet::new();
    let mut ids = HashSet::new();
    for info in keywords::KEYWORDS {
        assert!(
            spellings.insert(info.canonical),
            "duplicate keyword spelling: {}",
            info.canonical
        );
        assert!(ids.insert(info.id), "duplicate keyword id: {:?}", info.id);
    }
}

#[test]
fn operator_spellings_and_ids_are_unique() {
    let mut spellings = HashSet::new();
    let mut ids = HashSet::new();
    for info in operators::OPERATORS {
        assert!(
            spellings.insert(info.spelling),
            "duplicate operator spelling: {}",
            info.spelling
        );
        assert!(ids.insert(info.id), "duplicate operator id: {:?}", info.id);
    }
}

#[test]
fn punctuation_spellings_and_ids_are_unique() {
    let mut spellings = HashSet::new();
    let mut ids = HashSet::new();
    for info in punctuation::PUNCTUATION {
        assert!(
            spellings.insert(info.canonical),
            "duplicate punctuation spelling: {}",
            info.canonical
        );
        assert!(ids.insert(info.id), "duplicate punctuation id: {:?}", info.id);
    }
}

#[test]
fn keywords_resolve_both_ways() {
    for info in keywords::KEYWORDS {
        assert_eq!(keywords::from_str(info.canonical), Some(info.id));
        assert_eq!(keywords::as_str(info.id), info.canonical);
    }
}

#[test]
fn operators_resolve_both_ways() {
    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert_eq!(operators::as_str(info.id), info.spelling);
    }
}

#[test]
fn punctuation_resolves_both_ways() {
    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
    }
}

#[test]
fn keyword_categories_partition_the_lexicon() {
    use akyno_syntax::lang::keywords::{KeywordCategory, KeywordId};

    for info in keywords::KEYWORDS {
        let expected = match info.id {
            KeywordId::Static => KeywordCategory::Declaration,
            KeywordId::If
            | KeywordId::Else
            | KeywordId::While
            | KeywordId::For
            | KeywordId::Return
            | KeywordId::Break
            | KeywordId::Continue => KeywordCategory::ControlFlow,
            KeywordId::Int
            | KeywordId::Char
            | KeywordId::Void
            | KeywordId::Struct
            | KeywordId::Underscore => KeywordCategory::Type,
        };
        assert_eq!(
            keywords::category(info.id),
            expected,
            "category drift for {:?}",
            info.id
        );
    }
}

#[test]
fn punctuation_categories_partition_the_lexicon() {
    use akyno_syntax::lang::punctuation::{PunctuationCategory, PunctuationId};

    for info in punctuation::PUNCTUATION {
        let expected = match info.id {
            PunctuationId::Comma
            | PunctuationId::Semicolon
            | PunctuationId::Colon
            | PunctuationId::ColonEq => PunctuationCategory::Separator,
            PunctuationId::Dot => PunctuationCategory::Access,
            PunctuationId::LParen
            | PunctuationId::RParen
            | PunctuationId::LBracket
            | PunctuationId::RBracket
            | PunctuationId::LBrace
            | PunctuationId::RBrace => PunctuationCategory::Delimiter,
        };
        assert_eq!(
            punctuation::category(info.id),
            expected,
            "category drift for {:?}",
            info.id
        );
    }
}

/// The odd-numbered precedence ladder the expression parser climbs.
#[test]
fn infix_powers_match_the_precedence_ladder() {
    let expected: &[(OperatorId, u8, Associativity)] = &[
        (OperatorId::Eq, 1, Associativity::Right),
        (OperatorId::PipePipe, 3, Associativity::Left),
        (OperatorId::AmpAmp, 5, Associativity::Left),
        (OperatorId::EqEq, 7, Associativity::Left),
        (OperatorId::NotEq, 7, Associativity::Left),
        (OperatorId::Lt, 9, Associativity::Left),
        (OperatorId::Gt, 9, Associativity::Left),
        (OperatorId::LtEq, 9, Associativity::Left),
        (OperatorId::GtEq, 9, Associativity::Left),
        (OperatorId::Plus, 11, Associativity::Left),
        (OperatorId::Minus, 11, Associativity::Left),
        (OperatorId::Star, 13, Associativity::Left),
        (OperatorId::Slash, 13, Associativity::Left),
        (OperatorId::Percent, 13, Associativity::Left),
    ];
    for &(id, power, assoc) in expected {
        assert_eq!(
            operators::infix_power(id),
            Some((power, assoc)),
            "binding power drifted for {:?}",
            id
        );
    }
    // Address-of never appears in infix position.
    assert_eq!(operators::infix_power(OperatorId::Amp), None);
}

#[test]
fn prefix_set_is_exactly_the_unary_operators() {
    for info in operators::OPERATORS {
        let expect_prefix = matches!(
            info.id,
            OperatorId::Plus | OperatorId::Minus | OperatorId::Star | OperatorId::Amp
        );
        assert_eq!(
            operators::is_prefix(info.id),
            expect_prefix,
            "prefix drift for {:?}",
            info.id
        );
    }
}

#[test]
fn structural_powers_outrank_every_infix_level() {
    assert!(operators::POSTFIX_POWER > operators::UNARY_POWER);
    assert!(operators::GROUPING_POWER > operators::POSTFIX_POWER);
    for info in operators::OPERATORS {
        if let Some((power, _)) = operators::infix_power(info.id) {
            assert!(
                power < operators::UNARY_POWER,
                "infix {:?} binds tighter than the unary level",
                info.id
            );
        }
    }
}
