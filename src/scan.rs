//! Line splitting and the scan loop feeding the collector.

use crate::collector::{Offer, UniqueSortedCollector};
use crate::line::{classify, extract_integer, LineVerdict};
use memchr::memchr2;
use std::borrow::Cow;

/// Iterator over the lines of a byte buffer.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. The terminator is not
/// part of the yielded slice, and a trailing terminator does not produce an
/// extra empty line.
pub struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        match memchr2(b'\n', b'\r', rest) {
            Some(i) => {
                let mut advance = i + 1;
                if rest[i] == b'\r' && rest.get(i + 1) == Some(&b'\n') {
                    advance += 1;
                }
                self.pos += advance;
                Some(&rest[..i])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }
}

/// Counters for one pass over an input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub rejected_lines: usize,
    pub malformed_tokens: usize,
    pub out_of_range: usize,
    pub duplicates: usize,
    pub accepted: usize,
}

impl ScanStats {
    #[inline]
    fn record_offer(&mut self, offer: Offer) {
        match offer {
            Offer::Inserted => self.accepted += 1,
            Offer::Duplicate => self.duplicates += 1,
            Offer::OutOfRange => self.out_of_range += 1,
        }
    }
}

/// Decode a line, replacing invalid UTF-8. Replacement characters can never
/// satisfy the integer grammar, so such tokens are simply skipped.
#[inline]
fn decode(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}

/// Scan every line of `data` into `collector`.
pub fn scan_bytes(data: &[u8], collector: &mut UniqueSortedCollector) -> ScanStats {
    let mut stats = ScanStats::default();

    for raw in Lines::new(data) {
        stats.lines_read += 1;
        let line = decode(raw);

        match classify(&line) {
            LineVerdict::Blank => stats.blank_lines += 1,
            LineVerdict::MultipleTokens | LineVerdict::MultipleHyphens => {
                stats.rejected_lines += 1
            }
            LineVerdict::Candidate(token) => match extract_integer(token) {
                Some(value) => stats.record_offer(collector.offer(value)),
                None => stats.malformed_tokens += 1,
            },
        }
    }

    stats
}
