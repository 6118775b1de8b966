//! Line validation and integer extraction.
//!
//! Parsing happens in two tiers. The line-level gate decides whether a line
//! may contribute at all: it must hold exactly one whitespace-separated
//! token and at most one `-` character. The token-level check then applies
//! the integer grammar `-?[0-9]+`. A line that fails the gate is discarded
//! wholesale; a token that fails the grammar is skipped.

use memchr::memchr_iter;

/// Why a line was accepted or rejected by the line-level gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict<'a> {
    /// Empty, or only whitespace.
    Blank,
    /// Two or more whitespace-separated tokens.
    MultipleTokens,
    /// Two or more `-` characters anywhere in the line.
    MultipleHyphens,
    /// Exactly one token, ready for the integer grammar check.
    Candidate(&'a str),
}

impl<'a> LineVerdict<'a> {
    /// The single token, if the line passed the gate.
    #[inline]
    pub fn token(self) -> Option<&'a str> {
        match self {
            LineVerdict::Candidate(token) => Some(token),
            _ => None,
        }
    }
}

/// Token separator: Unicode whitespace plus the ASCII information
/// separators U+001C..U+001F.
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classify a line (terminator already stripped).
pub fn classify(line: &str) -> LineVerdict<'_> {
    let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());

    let token = match tokens.next() {
        Some(token) => token,
        None => return LineVerdict::Blank,
    };
    if tokens.next().is_some() {
        return LineVerdict::MultipleTokens;
    }

    // Counted over the raw line, not the token.
    if memchr_iter(b'-', line.as_bytes()).nth(1).is_some() {
        return LineVerdict::MultipleHyphens;
    }

    LineVerdict::Candidate(token)
}

/// Returns true if the line holds exactly one token and at most one `-`.
#[inline]
pub fn validate(line: &str) -> bool {
    matches!(classify(line), LineVerdict::Candidate(_))
}

/// Parse a token matching `-?[0-9]+` exactly.
///
/// Returns `None` for anything else: a bare `-`, a leading `+`, a decimal
/// point, embedded letters or whitespace. Leading zeros are accepted.
/// Magnitudes beyond `i64` saturate to `i64::MIN` / `i64::MAX`; callers
/// range-filter the result anyway.
#[inline]
pub fn extract_integer(token: &str) -> Option<i64> {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
        None => return None,
    };
    if digits.is_empty() {
        return None;
    }

    let mut n: i64 = 0;
    let mut saturated = false;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        if !saturated {
            // Accumulate toward the sign so i64::MIN stays representable.
            let next = n.checked_mul(10).and_then(|n| {
                if negative {
                    n.checked_sub(d as i64)
                } else {
                    n.checked_add(d as i64)
                }
            });
            match next {
                Some(next) => n = next,
                None => {
                    n = if negative { i64::MIN } else { i64::MAX };
                    saturated = true;
                }
            }
        }
    }
    Some(n)
}

/// Run both tiers on a line.
#[inline]
pub fn parse_line(line: &str) -> Option<i64> {
    classify(line).token().and_then(extract_integer)
}
