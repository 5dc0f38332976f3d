pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod speller;
pub mod text;

pub use dictionary::{Dictionary, InvalidBytePolicy, LoadOptions, LoadStats, Trie};
pub use error::{DictionaryError, SpellerError};
