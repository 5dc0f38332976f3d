use std::fmt::{Debug, Formatter};

use crate::alphabet::{Symbol, ALPHABET_LEN};
use crate::dictionary::trienode::{Exhausted, TrieNode};
use crate::error::DictionaryError;

#[derive(Debug, Default)]
struct NodeBudget {
    used: usize,
    limit: Option<usize>,
}

impl NodeBudget {
    fn charge(&mut self) -> Result<(), Exhausted> {
        if self.limit.map_or(false, |limit| self.used >= limit) {
            return Err(Exhausted);
        }
        self.used += 1;
        Ok(())
    }
}

/// Prefix tree over the dictionary alphabet. Each of the 27 root slots holds
/// the subtree of words starting with that symbol.
#[derive(Default)]
pub struct Trie {
    roots: [Option<TrieNode>; ALPHABET_LEN],
    budget: NodeBudget,
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    /// A trie that refuses to grow past `limit` nodes.
    pub fn with_node_limit(limit: usize) -> Trie {
        Trie {
            roots: Default::default(),
            budget: NodeBudget { used: 0, limit: Some(limit) },
        }
    }

    pub fn set_node_limit(&mut self, limit: Option<usize>) {
        self.budget.limit = limit;
    }

    /// Stores `word`, returning `true` if it was not already present.
    /// An empty word is never stored.
    pub fn insert(&mut self, word: &[Symbol]) -> Result<bool, DictionaryError> {
        let (&first, rest) = match word.split_first() {
            Some(split) => split,
            None => return Ok(false),
        };
        let Trie { roots, budget } = self;
        let exhausted = |budget: &NodeBudget| DictionaryError::Allocation { nodes: budget.used };

        let slot = &mut roots[first.index()];
        if slot.is_none() {
            budget.charge().map_err(|_| exhausted(budget))?;
        }
        let mut current = slot.get_or_insert_with(|| TrieNode::new(first));
        for &symbol in rest {
            current = current
                .get_or_create_child(symbol, || budget.charge())
                .map_err(|_| exhausted(budget))?;
        }
        Ok(current.mark_word())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| x.is_word).unwrap_or(false)
    }

    /// Whether any stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Walks one symbol at a time from the root slot of the first character,
    /// stopping at the first missing node.
    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut chars = word.chars();
        let first = Symbol::from_char(chars.next()?)?;
        let mut current = self.roots[first.index()].as_ref()?;
        for c in chars {
            current = current.get_child(Symbol::from_char(c)?)?;
        }
        Some(current)
    }

    /// Number of stored words, counted by a full depth-first walk.
    pub fn size(&self) -> usize {
        self.roots.iter()
            .flatten()
            .map(|root| root.count_words())
            .sum()
    }

    pub fn node_count(&self) -> usize {
        self.budget.used
    }

    pub fn is_empty(&self) -> bool {
        self.roots.iter().all(Option::is_none)
    }

    /// Drops every node and empties all root slots. Safe to call on an empty trie.
    pub fn clear(&mut self) {
        self.roots.iter_mut().for_each(|slot| { slot.take(); });
        self.budget.used = 0;
    }

    /// All stored words in alphabet order, uppercase.
    pub fn words(&self) -> Vec<String> {
        let mut words = vec![];
        let mut path = String::new();
        self.roots.iter().flatten().for_each(|root| {
            root.traverse_prefix(&mut path, &mut |word, node| {
                if node.is_word {
                    words.push(word.to_string());
                }
            })
        });
        words
    }

    #[cfg(test)]
    fn counted_nodes(&self) -> usize {
        self.roots.iter().flatten().map(|root| root.count_nodes()).sum()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("nodes", &self.budget.used)
            .field("node_limit", &self.budget.limit)
            .field("roots", &self.roots.iter().flatten()
                .map(|x| x.symbol.as_char())
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::symbols;
    use crate::dictionary::trie::Trie;
    use crate::error::DictionaryError;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        words.iter().for_each(|word| {
            trie.insert(&symbols(word).unwrap()).unwrap();
        });
        trie
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD", "DON'T"];
        let trie = trie_of(&words);
        (&words).iter().for_each(|word| assert!(trie.contains(word), "{}", word));
    }

    #[test]
    fn doesnt_finds_words_not_in_trie() {
        let trie = trie_of(&["HELLO", "HELP", "GOODBYE", "GOOD"]);
        let bad_words = vec!["HE", "H", "LOL", "BANANA", "GOODBYES", "HELL0", "GOOD BYE"];
        (&bad_words).iter().for_each(|word| assert!(!trie.contains(word), "{}", word));
    }

    #[test]
    fn lookup_ignores_case() {
        let trie = trie_of(&["apple"]);
        assert!(trie.contains("apple"));
        assert!(trie.contains("Apple"));
        assert!(trie.contains("APPLE"));
        assert!(trie.contains("aPpLe"));
    }

    #[test]
    fn empty_word_is_never_present() {
        let mut trie = trie_of(&["a"]);
        assert!(!trie.contains(""));
        assert!(!trie.insert(&[]).unwrap());
        assert_eq!(trie.size(), 1);
        assert!(!Trie::new().contains(""));
    }

    #[test]
    fn prefixes_are_not_words() {
        let trie = trie_of(&["apple", "banana", "app"]);
        assert_eq!(trie.size(), 3);
        assert!(trie.contains("app"));
        assert!(!trie.contains("appl"));
        assert!(trie.has_prefix("appl"));
        assert!(trie.contains("banana"));
        assert!(!trie.contains("ban"));
        assert!(!trie.has_prefix("bx"));
    }

    #[test]
    fn duplicates_count_once() {
        let mut trie = trie_of(&["cat"]);
        let nodes = trie.node_count();
        assert!(!trie.insert(&symbols("CAT").unwrap()).unwrap());
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn node_count_tracks_shared_prefixes() {
        let trie = trie_of(&["car", "cart", "cat", "'tis"]);
        // C, A, R, T, T + ', T, I, S
        assert_eq!(trie.node_count(), 9);
        assert_eq!(trie.node_count(), trie.counted_nodes());
    }

    #[test]
    fn words_come_back_in_alphabet_order() {
        let trie = trie_of(&["b", "a'", "ab", "a"]);
        assert_eq!(trie.words(), vec!["A", "AB", "A'", "B"]);
    }

    #[test]
    fn debug_shows_counts_not_words() {
        let trie = trie_of(&["zebra", "apple"]);
        let rendered = format!("{:?}", trie);
        assert!(rendered.contains("nodes: 10"), "{}", rendered);
        assert!(rendered.contains("roots: ['A', 'Z']"), "{}", rendered);
        assert!(!rendered.contains("ZEBRA"), "{}", rendered);
    }

    #[test]
    fn clear_empties_trie() {
        let mut trie = trie_of(&["HELLO", "HELP", "GOOD"]);
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.contains("HELLO"));
        trie.clear();
        assert!(trie.is_empty());
    }

    #[test]
    fn node_limit_stops_growth() {
        let mut trie = Trie::with_node_limit(4);
        trie.insert(&symbols("dog").unwrap()).unwrap();
        assert!(trie.insert(&symbols("dogs").unwrap()).unwrap());
        match trie.insert(&symbols("cat").unwrap()) {
            Err(DictionaryError::Allocation { nodes }) => assert_eq!(nodes, 4),
            other => panic!("expected allocation failure, got {:?}", other),
        }
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.counted_nodes(), 4);
        assert!(!trie.contains("cat"));
    }

    #[test]
    fn failed_insert_keeps_partial_path() {
        let mut trie = Trie::with_node_limit(2);
        assert!(trie.insert(&symbols("dog").unwrap()).is_err());
        assert_eq!(trie.counted_nodes(), 2);
        assert_eq!(trie.size(), 0);
        assert!(trie.has_prefix("do"));
    }
}
