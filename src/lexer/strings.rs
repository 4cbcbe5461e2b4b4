//! Character and string literal scanning for the Akyno lexer
//!
//! Scanning happens in two steps: first the lexer finds a literal's extent
//! (everything through the closing quote), then it classifies the raw text by
//! running the decoder over it. The decoder is public so consumers that need
//! literal values can reuse it on a token's text.

use super::Lexer;
use super::tokens::{LexErrorKind, Token, TokenKind};

// ============================================================================
// Extent scanning
// ============================================================================

impl<'a> Lexer<'a> {
    /// Scan a string literal. Called after consuming the opening `"`.
    pub(super) fn scan_string(&mut self, start: usize) -> Token<'a> {
        if !self.scan_quoted('"') {
            return self.error(LexErrorKind::UnterminatedLiteral, start);
        }
        if decode_string(&self.source[start..self.current_pos]).is_some() {
            self.token(TokenKind::StrLit, start)
        } else {
            self.error(LexErrorKind::MalformedLiteral, start)
        }
    }

    /// Scan a character literal. Called after consuming the opening `'`.
    pub(super) fn scan_char(&mut self, start: usize) -> Token<'a> {
        if !self.scan_quoted('\'') {
            return self.error(LexErrorKind::UnterminatedLiteral, start);
        }
        if decode_char(&self.source[start..self.current_pos]).is_some() {
            self.token(TokenKind::CharLit, start)
        } else {
            self.error(LexErrorKind::MalformedLiteral, start)
        }
    }

    /// Advance through a quoted literal's body. Returns `true` once the
    /// closing quote is consumed, `false` on newline or end of file. The
    /// newline stays unconsumed so it lexes as ordinary trivia afterwards.
    fn scan_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.peek() {
                None | Some('\n') => return false,
                Some(c) if c == quote => {
                    self.advance();
                    return true;
                }
                Some('\\') => {
                    self.advance();
                    // The character after a backslash never closes the
                    // literal, whatever it is.
                    if matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}

// ============================================================================
// Literal decoding
// ============================================================================

/// Decode a raw string literal, quotes included, into its value.
///
/// Returns `None` when the text is not a well-formed string literal: missing
/// quotes, an invalid escape, or a character outside the printable set.
pub fn decode_string(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(decode_escape(&mut chars)?),
            c if is_literal_char(c) => out.push(c),
            _ => return None,
        }
    }
    Some(out)
}

/// Decode a raw character literal, quotes included, into its value.
///
/// Returns `None` unless the quotes hold exactly one character or escape.
pub fn decode_char(raw: &str) -> Option<char> {
    let inner = raw.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    let value = match chars.next()? {
        '\\' => decode_escape(&mut chars)?,
        c if is_literal_char(c) => c,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(value)
}

/// Decode one escape sequence. Called after the backslash.
///
/// The accepted escapes are `\"`, `\'`, `\n`, `\t`, `\r`, and `\xHH` with
/// exactly two hex digits.
fn decode_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    match chars.next()? {
        '"' => Some('"'),
        '\'' => Some('\''),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'x' => {
            let hi = chars.next()?.to_digit(16)?;
            let lo = chars.next()?.to_digit(16)?;
            Some((hi * 16 + lo) as u8 as char)
        }
        _ => None,
    }
}

/// Characters allowed directly inside quoted literals. Everything outside
/// printable ASCII has to be written as an escape.
fn is_literal_char(c: char) -> bool {
    matches!(c, ' '..='~')
}
