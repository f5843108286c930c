//! Greedy longest-match transliteration.
//!
//! The scan keeps a single cursor over the input's characters. At each
//! position it tries tokens of decreasing length (longest first), checking the
//! vowel table before the consonant table at every length:
//!
//! - a vowel emits its independent glyph;
//! - a consonant emits its glyph, then looks ahead for a vowel-mark token
//!   (again longest first). A hit emits the mark (empty for the inherent
//!   vowel) and consumes it; a miss emits the virama and consumes nothing
//!   beyond the consonant;
//! - anything else is copied through one character at a time.
//!
//! Decisions are never revisited, and every lookup is a direct hash lookup on
//! a slice of the input, so the scan is linear in the input length.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::scheme::Scheme;
use crate::unicode::char_count;

/// A dependent vowel mark attached to a consonant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark<'a> {
    pub token: &'a str,
    pub glyph: &'a str,
}

/// One decision of the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanStep<'a> {
    Vowel {
        token: &'a str,
        glyph: &'a str,
    },
    /// `mark: None` means the virama was emitted.
    Consonant {
        token: &'a str,
        glyph: &'a str,
        mark: Option<Mark<'a>>,
    },
    Passthrough {
        ch: char,
    },
}

impl ScanStep<'_> {
    /// Append this step's output.
    pub fn write_to(&self, out: &mut String, virama: &str) {
        match self {
            ScanStep::Vowel { glyph, .. } => out.push_str(glyph),
            ScanStep::Consonant { glyph, mark, .. } => {
                out.push_str(glyph);
                match mark {
                    Some(m) => out.push_str(m.glyph),
                    None => out.push_str(virama),
                }
            }
            ScanStep::Passthrough { ch } => out.push(*ch),
        }
    }
}

/// Transliterate with the built-in Harvard-Kyoto → Devanagari scheme.
pub fn transliterate(input: &str) -> String {
    Transliterator::new(Scheme::harvard_kyoto()).transliterate(input)
}

/// Runs the scan over one [`Scheme`]. Holds no per-call state.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'s> {
    scheme: &'s Scheme,
}

impl<'s> Transliterator<'s> {
    pub fn new(scheme: &'s Scheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &'s Scheme {
        self.scheme
    }

    pub fn transliterate(&self, input: &str) -> String {
        let _span = debug_span!(
            "transliterate",
            scheme = self.scheme.name(),
            char_count = char_count(input)
        )
        .entered();

        let virama = self.scheme.virama();
        // Devanagari glyphs are 3 bytes each in UTF-8.
        let mut out = String::with_capacity(input.len() * 3);
        self.scan(input, |step| step.write_to(&mut out, virama));

        debug!(output_len = out.len());
        out
    }

    /// The scan's decisions, in order. Concatenating their output gives
    /// [`transliterate`](Self::transliterate).
    pub fn steps<'a>(&'a self, input: &'a str) -> Vec<ScanStep<'a>> {
        let mut steps = Vec::new();
        self.scan(input, |step| steps.push(step));
        steps
    }

    fn scan<'a>(&'a self, input: &'a str, mut emit: impl FnMut(ScanStep<'a>)) {
        let scheme: &'a Scheme = self.scheme;
        let text = CharSlices::new(input);
        let n = text.len();
        let max = scheme.max_token_len();

        let mut i = 0;
        'scan: while i < n {
            for len in (1..=max.min(n - i)).rev() {
                let token = text.slice(i, len);

                if let Some(glyph) = scheme.vowel(token) {
                    emit(ScanStep::Vowel { token, glyph });
                    i += len;
                    continue 'scan;
                }

                if let Some(glyph) = scheme.consonant(token) {
                    let mark = self.match_mark(&text, i + len);
                    i += len + mark.as_ref().map_or(0, |(_, vlen)| *vlen);
                    emit(ScanStep::Consonant {
                        token,
                        glyph,
                        mark: mark.map(|(m, _)| m),
                    });
                    continue 'scan;
                }
            }

            emit(ScanStep::Passthrough { ch: text.char_at(i) });
            i += 1;
        }
    }

    /// Longest vowel-mark token starting at char position `at`, with its length.
    fn match_mark<'a>(&'a self, text: &CharSlices<'a>, at: usize) -> Option<(Mark<'a>, usize)> {
        let scheme: &'a Scheme = self.scheme;
        let remaining = text.len().saturating_sub(at);
        (1..=scheme.max_token_len().min(remaining))
            .rev()
            .find_map(|vlen| {
                let token = text.slice(at, vlen);
                scheme
                    .vowel_mark(token)
                    .map(|glyph| (Mark { token, glyph }, vlen))
            })
    }
}

/// Char-indexed view of a `&str`: slicing by character positions in O(1).
struct CharSlices<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> CharSlices<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.chars.get(pos).map_or(self.text.len(), |&(b, _)| b)
    }

    /// `len` characters starting at character `pos`.
    fn slice(&self, pos: usize, len: usize) -> &'a str {
        &self.text[self.byte_offset(pos)..self.byte_offset(pos + len)]
    }

    fn char_at(&self, pos: usize) -> char {
        self.chars[pos].1
    }
}
