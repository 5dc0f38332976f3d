use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("could not open dictionary `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read dictionary: {0}")]
    Io(#[from] io::Error),
    #[error("out of memory after allocating {nodes} trie nodes")]
    Allocation { nodes: usize },
    #[error("invalid byte {byte:#04x} at line {line}, column {column}")]
    InvalidCharacter { byte: u8, line: usize, column: usize },
}

#[derive(Error, Debug)]
pub enum SpellerError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("could not read text `{path}`: {source}")]
    Text {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
