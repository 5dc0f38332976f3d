use std::str::FromStr;

use derive_new::new;
use serde::Serialize;
use tracing::trace;
use typed_builder::TypedBuilder;

use crate::alphabet::Symbol;
use crate::dictionary::trie::Trie;
use crate::error::DictionaryError;

/// What to do with a dictionary byte that is neither an alphabet symbol nor
/// part of a line terminator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum InvalidBytePolicy {
    /// Fail the load with [`DictionaryError::InvalidCharacter`].
    Reject,
    /// Drop the byte; the word around it continues.
    Skip,
    /// End the current word at the byte.
    Split,
}

impl Default for InvalidBytePolicy {
    fn default() -> Self {
        InvalidBytePolicy::Reject
    }
}

impl FromStr for InvalidBytePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(InvalidBytePolicy::Reject),
            "skip" => Ok(InvalidBytePolicy::Skip),
            "split" => Ok(InvalidBytePolicy::Split),
            other => Err(format!("unknown policy `{}`, expected reject, skip or split", other)),
        }
    }
}

#[derive(TypedBuilder, Clone, Debug, Default)]
pub struct LoadOptions {
    #[builder(default)]
    pub invalid_bytes: InvalidBytePolicy,
    #[builder(default, setter(strip_option))]
    pub node_limit: Option<usize>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LoadStats {
    pub lines: usize,
    pub words: usize,
    pub duplicates: usize,
    pub skipped_bytes: usize,
    pub nodes: usize,
}

/// Streams dictionary bytes into a trie, one word per line.
#[derive(new)]
pub(crate) struct Loader<'t> {
    trie: &'t mut Trie,
    policy: InvalidBytePolicy,
    #[new(default)]
    word: Vec<Symbol>,
    #[new(default)]
    pending_cr: bool,
    #[new(value = "1")]
    line: usize,
    #[new(default)]
    column: usize,
    #[new(default)]
    stats: LoadStats,
}

impl<'t> Loader<'t> {
    pub(crate) fn feed(&mut self, byte: u8) -> Result<(), DictionaryError> {
        if self.pending_cr {
            self.pending_cr = false;
            if byte != b'\n' {
                self.invalid(b'\r')?;
            }
        }
        self.column += 1;

        if let Some(symbol) = Symbol::from_byte(byte) {
            self.word.push(symbol);
            return Ok(());
        }
        match byte {
            b'\n' => {
                self.end_word()?;
                self.stats.lines += 1;
                self.line += 1;
                self.column = 0;
                Ok(())
            }
            b'\r' => {
                self.pending_cr = true;
                Ok(())
            }
            _ => self.invalid(byte)
        }
    }

    fn invalid(&mut self, byte: u8) -> Result<(), DictionaryError> {
        match self.policy {
            InvalidBytePolicy::Reject => Err(DictionaryError::InvalidCharacter {
                byte,
                line: self.line,
                column: self.column,
            }),
            InvalidBytePolicy::Skip => {
                trace!(byte, line = self.line, "skipping byte");
                self.stats.skipped_bytes += 1;
                Ok(())
            }
            InvalidBytePolicy::Split => {
                self.stats.skipped_bytes += 1;
                self.end_word()
            }
        }
    }

    fn end_word(&mut self) -> Result<(), DictionaryError> {
        if self.word.is_empty() {
            return Ok(());
        }
        if self.trie.insert(&self.word)? {
            self.stats.words += 1;
        } else {
            self.stats.duplicates += 1;
        }
        self.word.clear();
        Ok(())
    }

    /// Flushes a final word that had no line terminator after it.
    pub(crate) fn finish(mut self) -> Result<LoadStats, DictionaryError> {
        if self.pending_cr {
            self.pending_cr = false;
            self.invalid(b'\r')?;
        }
        if !self.word.is_empty() || self.column > 0 {
            self.stats.lines += 1;
        }
        self.end_word()?;
        self.stats.nodes = self.trie.node_count();
        Ok(self.stats)
    }
}
