//! Splits running text into the words a spell checker should look up.
//!
//! A word is a run of ASCII letters, with apostrophes allowed anywhere but the
//! first position. Runs that contain a digit, or that grow longer than
//! [`MAX_WORD_LEN`], are dropped whole. Every other byte ends a word.

use std::borrow::Cow;

/// Longest word worth checking; longer runs are discarded.
pub const MAX_WORD_LEN: usize = 45;

pub struct Words<'a> {
    text: &'a [u8],
    pos: usize,
}

pub fn words(text: &[u8]) -> Words<'_> {
    Words { text, pos: 0 }
}

impl<'a> Words<'a> {
    fn skip_run(&mut self) {
        while self.pos < self.text.len() && self.text[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;
        while self.pos < self.text.len() {
            let b = self.text[self.pos];
            match start {
                None if b.is_ascii_alphabetic() => start = Some(self.pos),
                None if b.is_ascii_digit() => {
                    self.skip_run();
                    continue;
                }
                None => {}
                Some(s) if b.is_ascii_alphabetic() || b == b'\'' => {
                    if self.pos - s >= MAX_WORD_LEN {
                        self.skip_run();
                        start = None;
                        continue;
                    }
                }
                Some(_) if b.is_ascii_digit() => {
                    self.skip_run();
                    start = None;
                    continue;
                }
                Some(s) => {
                    let word = &self.text[s..self.pos];
                    self.pos += 1;
                    return Some(String::from_utf8_lossy(word));
                }
            }
            self.pos += 1;
        }
        start.map(|s| String::from_utf8_lossy(&self.text[s..]))
    }
}
