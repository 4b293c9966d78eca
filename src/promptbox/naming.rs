//! # Content-Derived Naming
//!
//! Turns the beginning of a prompt into a short label that names the entry.
//!
//! Text is measured in display-width units:
//!
//! - every CJK ideograph is one token worth **1 unit**
//! - every maximal run of characters that are neither whitespace nor CJK is a
//!   "word" token worth **2 units** (punctuation stuck to a word belongs to it)
//! - whitespace is a zero-unit separator, kept only once a token exists
//!
//! Tokens are collected left to right until the total reaches
//! [`LABEL_UNIT_THRESHOLD`]. The label is every token up to and including the
//! one that crossed the threshold; a token is never split. Text that runs out
//! before the threshold has no label yet.

use std::iter::Peekable;
use std::str::Chars;

/// Units that must accumulate before a label is produced.
pub const LABEL_UNIT_THRESHOLD: usize = 10;

const IDEOGRAPH_UNITS: usize = 1;
const WORD_UNITS: usize = 2;

/// Returns true for characters in the CJK ideograph blocks.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'   // Unified Ideographs
        | '\u{3400}'..='\u{4DBF}' // Extension A
        | '\u{F900}'..='\u{FAFF}' // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // Extension B
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ideograph(char),
    Word(String),
    Space,
}

impl Token {
    fn units(&self) -> usize {
        match self {
            Token::Ideograph(_) => IDEOGRAPH_UNITS,
            Token::Word(_) => WORD_UNITS,
            Token::Space => 0,
        }
    }
}

/// Lazily splits text into tokens.
struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;

        if c.is_whitespace() {
            while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
            return Some(Token::Space);
        }

        if is_cjk(c) {
            return Some(Token::Ideograph(c));
        }

        let mut word = String::from(c);
        while let Some(next) = self
            .chars
            .next_if(|c| !c.is_whitespace() && !is_cjk(*c))
        {
            word.push(next);
        }
        Some(Token::Word(word))
    }
}

/// Derives a label from the beginning of `text`.
///
/// Returns `None` when the text does not yet hold [`LABEL_UNIT_THRESHOLD`]
/// units. That means "not enough content yet", never an empty label.
///
/// ```
/// use promptbox::naming::extract_label;
///
/// assert_eq!(
///     extract_label("the quick brown fox jumps over").as_deref(),
///     Some("the quick brown fox jumps")
/// );
/// assert_eq!(extract_label("too short"), None);
/// ```
pub fn extract_label(text: &str) -> Option<String> {
    let mut label = String::new();
    let mut units = 0;

    for token in Tokens::new(text) {
        units += token.units();
        match token {
            Token::Space => {
                if !label.is_empty() {
                    label.push(' ');
                }
            }
            Token::Ideograph(c) => label.push(c),
            Token::Word(word) => label.push_str(&word),
        }

        if units >= LABEL_UNIT_THRESHOLD {
            return Some(label.trim().to_string());
        }
    }

    None
}
