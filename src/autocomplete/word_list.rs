//! Candidate list parsing and sorting
//!
//! A candidate list is one delimited string. Items are never copied out of
//! it: parsing records byte offsets, sorting permutes indices, and only the
//! alphabetical order rewrites the string once for the list box.

use std::cmp::Ordering;

use memchr::{memchr, memchr2};

use super::compare::compare_n;

/// Byte range of one matchable word. `end` stops at the type annotation or
/// separator, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A candidate list split into word spans
#[derive(Debug, Clone)]
pub struct WordList<'a> {
    list: &'a str,
    spans: Vec<WordSpan>,
    /// Offset one past the last scanned byte.
    end: usize,
}

impl<'a> WordList<'a> {
    /// Split `list` on `separator`, stopping each word at `typesep`.
    ///
    /// An empty list holds a single empty word, and a trailing separator
    /// adds one more empty word after it.
    ///
    /// Both separators must be ASCII so every span starts and ends on a
    /// character boundary.
    pub fn parse(list: &'a str, separator: u8, typesep: u8) -> Self {
        debug_assert!(
            separator.is_ascii() && typesep.is_ascii(),
            "list separators must be ASCII"
        );
        let bytes = list.as_bytes();
        let len = bytes.len();
        let mut spans = Vec::new();
        if bytes.is_empty() {
            spans.push(WordSpan { start: 0, end: 0 });
        }

        let mut i = 0;
        while i < len {
            let start = i;
            i = memchr2(typesep, separator, &bytes[i..]).map_or(len, |offset| i + offset);
            spans.push(WordSpan { start, end: i });
            if i < len && bytes[i] == typesep {
                i = memchr(separator, &bytes[i..]).map_or(len, |offset| i + offset);
            }
            if i < len && bytes[i] == separator {
                i += 1;
                if i == len {
                    spans.push(WordSpan { start: i, end: i });
                }
            }
        }

        Self {
            list,
            spans,
            end: i,
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[WordSpan] {
        &self.spans
    }

    /// The matchable word at `index`, without annotation or separator.
    pub fn word(&self, index: usize) -> &'a str {
        let span = self.spans[index];
        &self.list[span.start..span.end]
    }

    /// The whole item at `index`: word, annotation and trailing separator.
    pub fn item(&self, index: usize) -> &'a str {
        let start = self.spans[index].start;
        let end = self.spans.get(index + 1).map_or(self.end, |next| next.start);
        &self.list[start..end]
    }

    /// Order two words byte-wise over their common length; on a tie the
    /// shorter word sorts first.
    pub fn compare(&self, a: usize, b: usize, ignore_case: bool) -> Ordering {
        let word_a = self.word(a).as_bytes();
        let word_b = self.word(b).as_bytes();
        let len = word_a.len().min(word_b.len());
        compare_n(word_a, word_b, len, ignore_case).then(word_a.len().cmp(&word_b.len()))
    }

    /// Original indices listed in alphabetical order: `matrix[rank] = index`.
    pub fn sort_matrix(&self, ignore_case: bool) -> Vec<usize> {
        let mut matrix = identity_matrix(self.len());
        matrix.sort_by(|&a, &b| self.compare(a, b, ignore_case));
        matrix
    }

    /// Rebuild the list with its items in `order`.
    ///
    /// Items keep their annotations. Every item but the last is followed by
    /// exactly one separator and the result never ends with one.
    pub fn serialize(&self, order: &[usize], separator: u8) -> String {
        let mut sorted = String::with_capacity(order.len() + self.end);
        for (rank, &index) in order.iter().enumerate() {
            let item = self.item(index);
            let has_separator = item.as_bytes().last() == Some(&separator);
            sorted.push_str(item);
            if rank + 1 == order.len() {
                if has_separator {
                    sorted.pop();
                }
            } else if !has_separator {
                sorted.push(char::from(separator));
            }
        }
        sorted
    }
}

/// `[0, 1, .., count)`: display order equals rank order.
pub fn identity_matrix(count: usize) -> Vec<usize> {
    (0..count).collect()
}

#[cfg(test)]
#[path = "word_list_tests.rs"]
mod word_list_tests;
