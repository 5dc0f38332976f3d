pub mod dictionary;
pub mod loader;
pub mod trie;

mod trienode;

pub use dictionary::Dictionary;
pub use loader::{InvalidBytePolicy, LoadOptions, LoadStats};
pub use trie::Trie;
