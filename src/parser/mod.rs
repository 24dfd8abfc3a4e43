//! In-place tokenizer for completed input lines.
//!
//! Arguments are never copied. The tokenizer rewrites the line buffer where
//! needed (collapsing `\"` inside quotes) and records each argument as a
//! [`Span`] into that buffer.
//!
//! # Rules
//!
//! - Spaces between arguments are skipped.
//! - An argument starting with `"` runs to the next unescaped `"` (or to the
//!   end of the line when the quote is never closed). Inside it `\"` stands
//!   for a literal quote; a backslash before anything else is kept as is.
//! - Any other argument runs to the next space. A `"` inside it cuts the
//!   argument short; the rest of the word up to the next space is discarded.
//! - Parsing stops once the span list is full.
//!
//! ```text
//! mycmd param1 "param 2 with space"   ["mycmd", "param1", "param 2 with space"]
//! cmd "a\"b"                          ["cmd", "a\"b"]  (content: a"b)
//! cmd ab"cd ef                        ["cmd", "ab", "ef"]
//! ```

use heapless::Vec;


const SPACE: u8 = b' ';
const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';

/// Location of one argument inside the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl Span {
    pub(crate) fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Split `line` into argument spans, rewriting quoted arguments in place.
///
/// `spans` is cleared first. Returns `true` when the argument limit cut the
/// line short.
pub(crate) fn tokenize<const M: usize>(line: &mut [u8], spans: &mut Vec<Span, M>) -> bool {
    spans.clear();
    let len = line.len();
    let mut i = 0;

    while i < len {
        while i < len && line[i] == SPACE {
            i += 1;
        }
        if i >= len {
            break;
        }

        let span = if line[i] == QUOTE {
            i += 1;
            let start = i;
            let mut write = i;

            while i < len {
                match line[i] {
                    BACKSLASH if i + 1 < len && line[i + 1] == QUOTE => {
                        line[write] = QUOTE;
                        write += 1;
                        i += 2;
                    }
                    QUOTE => {
                        i += 1;
                        break;
                    }
                    byte => {
                        line[write] = byte;
                        write += 1;
                        i += 1;
                    }
                }
            }

            Span {
                start,
                len: write - start,
            }
        } else {
            let start = i;
            let mut end = None;

            while i < len && line[i] != SPACE {
                if line[i] == QUOTE && end.is_none() {
                    end = Some(i);
                }
                i += 1;
            }

            Span {
                start,
                len: end.unwrap_or(i) - start,
            }
        };

        if spans.push(span).is_err() {
            return true;
        }
        if spans.is_full() {
            return line[i..].iter().any(|&b| b != SPACE);
        }
    }

    false
}
