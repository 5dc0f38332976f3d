use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use delegate::delegate;
use tracing::{debug, info, warn};

use crate::dictionary::loader::{LoadOptions, LoadStats, Loader};
use crate::dictionary::trie::Trie;
use crate::error::DictionaryError;

/// A spell-check dictionary: load a word list once, query it many times,
/// unload it when done. Instances are independent of each other.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: Trie,
    options: LoadOptions,
    loaded: bool,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Default::default()
    }

    pub fn with_options(options: LoadOptions) -> Dictionary {
        Dictionary {
            trie: Trie::new(),
            options,
            loaded: false,
        }
    }

    delegate! {
        to self.trie {
            pub fn size(&self) -> usize;
            pub fn node_count(&self) -> usize;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn words(&self) -> Vec<String>;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads the word list at `path`, replacing whatever was loaded before.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadStats, DictionaryError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dictionary");
        self.unload();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from(file)
    }

    /// Loads one word per line from `source`, replacing whatever was loaded
    /// before. On failure the dictionary is left empty.
    pub fn load_from<R: Read>(&mut self, source: R) -> Result<LoadStats, DictionaryError> {
        self.unload();
        self.trie.set_node_limit(self.options.node_limit);
        match self.stream(source) {
            Ok(stats) => {
                self.loaded = true;
                info!(words = stats.words, duplicates = stats.duplicates, nodes = stats.nodes,
                      "dictionary loaded");
                Ok(stats)
            }
            Err(e) => {
                let nodes = self.trie.node_count();
                self.unload();
                warn!(error = %e, released_nodes = nodes, rolled_back = self.trie.is_empty(),
                      "dictionary load failed");
                Err(e)
            }
        }
    }

    fn stream<R: Read>(&mut self, source: R) -> Result<LoadStats, DictionaryError> {
        let mut reader = BufReader::new(source);
        let mut loader = Loader::new(&mut self.trie, self.options.invalid_bytes);
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }
            let len = buf.len();
            for &byte in buf {
                loader.feed(byte)?;
            }
            reader.consume(len);
        }
        loader.finish()
    }

    /// Case-insensitive membership. Anything outside the alphabet, and the
    /// empty string, is never a word.
    pub fn check(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Releases every node. Calling it on an empty dictionary does nothing.
    pub fn unload(&mut self) {
        if !self.trie.is_empty() {
            debug!(nodes = self.trie.node_count(), "unloading dictionary");
        }
        self.trie.clear();
        self.loaded = false;
    }
}
