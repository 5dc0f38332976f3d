use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};

use crate::alphabet::Symbol;

/// Raised when a new node cannot be allocated, either because the allocator
/// refused or because a configured node limit was reached.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Exhausted;

impl From<TryReserveError> for Exhausted {
    fn from(_: TryReserveError) -> Self {
        Exhausted
    }
}

/// A node owns its children outright; dropping a node drops its whole subtree.
/// Walks and drops use an explicit stack, so word length is bounded by memory
/// and not by the call stack.
pub(crate) struct TrieNode {
    pub(crate) symbol: Symbol,
    pub(crate) is_word: bool,
    // sorted by symbol, at most one entry per symbol
    children: Vec<TrieNode>,
}

impl TrieNode {
    pub(crate) fn new(symbol: Symbol) -> TrieNode {
        TrieNode {
            symbol,
            is_word: false,
            children: Vec::new(),
        }
    }

    fn position(&self, symbol: Symbol) -> Result<usize, usize> {
        self.children.binary_search_by_key(&symbol, |child| child.symbol)
    }

    pub(crate) fn get_child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.position(symbol).ok().map(|idx| &self.children[idx])
    }

    /// Returns the child for `symbol`, creating it if absent. `on_create` runs
    /// before anything is allocated and may veto the new node.
    pub(crate) fn get_or_create_child<F>(&mut self, symbol: Symbol, on_create: F)
                                         -> Result<&mut TrieNode, Exhausted>
        where F: FnOnce() -> Result<(), Exhausted> {
        let idx = match self.position(symbol) {
            Ok(idx) => idx,
            Err(idx) => {
                on_create()?;
                self.children.try_reserve(1)?;
                self.children.insert(idx, TrieNode::new(symbol));
                idx
            }
        };
        Ok(&mut self.children[idx])
    }

    /// Marks this node as the end of a word, returning whether it was not one already.
    pub(crate) fn mark_word(&mut self) -> bool {
        !std::mem::replace(&mut self.is_word, true)
    }

    /// Every node of this subtree, this one included, in no particular order.
    pub(crate) fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub(crate) fn count_words(&self) -> usize {
        self.descendants().filter(|node| node.is_word).count()
    }

    #[cfg(test)]
    pub(crate) fn count_nodes(&self) -> usize {
        self.descendants().count()
    }

    /// Visits the subtree in alphabet order, passing each node with the path
    /// that spells it, appended to `path`.
    pub(crate) fn traverse_prefix<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str, &TrieNode) {
        let base = path.len();
        let mut stack = vec![(self, base)];
        while let Some((node, depth)) = stack.pop() {
            path.truncate(depth);
            path.push(node.symbol.as_char());
            f(path.as_str(), node);
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        path.truncate(base);
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

pub(crate) struct Descendants<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter());
        Some(node)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("is_word", &self.is_word)
            .field("children", &self.children.iter()
                .map(|x| x.symbol.as_char())
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Symbol;
    use crate::dictionary::trienode::{Exhausted, TrieNode};

    fn ok() -> Result<(), Exhausted> {
        Ok(())
    }

    #[test]
    fn children_stay_sorted() {
        let mut node = TrieNode::new(Symbol::A);
        for symbol in [Symbol::Apostrophe, Symbol::M, Symbol::B, Symbol::Z] {
            node.get_or_create_child(symbol, ok).unwrap();
        }
        let mut order = vec![];
        node.traverse_prefix(&mut String::new(), &mut |path, _| order.push(path.to_string()));
        assert_eq!(order, vec!["A", "AB", "AM", "AZ", "A'"]);
    }

    #[test]
    fn existing_child_is_reused() {
        let mut node = TrieNode::new(Symbol::A);
        node.get_or_create_child(Symbol::B, ok).unwrap().is_word = true;
        let child = node.get_or_create_child(Symbol::B, || Err(Exhausted)).unwrap();
        assert!(child.is_word);
        assert_eq!(node.count_nodes(), 2);
    }

    #[test]
    fn veto_leaves_node_untouched() {
        let mut node = TrieNode::new(Symbol::A);
        let result = node.get_or_create_child(Symbol::C, || Err(Exhausted));
        assert!(result.is_err());
        assert!(node.get_child(Symbol::C).is_none());
        assert_eq!(node.count_nodes(), 1);
    }

    #[test]
    fn deep_chain_walks_and_drops() {
        let depth = 200_000;
        let mut root = TrieNode::new(Symbol::A);
        let mut current = &mut root;
        for _ in 1..depth {
            current = current.get_or_create_child(Symbol::B, ok).unwrap();
        }
        current.mark_word();

        assert_eq!(root.count_nodes(), depth);
        assert_eq!(root.count_words(), 1);
        let mut longest = 0;
        root.traverse_prefix(&mut String::new(), &mut |path, _| longest = longest.max(path.len()));
        assert_eq!(longest, depth);
        drop(root);
    }

    #[test]
    fn traverse_restores_path() {
        let mut node = TrieNode::new(Symbol::A);
        node.get_or_create_child(Symbol::B, ok).unwrap()
            .get_or_create_child(Symbol::C, ok).unwrap();
        let mut path = String::from("X");
        node.traverse_prefix(&mut path, &mut |_, _| {});
        assert_eq!(path, "X");
    }

    #[test]
    fn mark_word_is_idempotent() {
        let mut node = TrieNode::new(Symbol::A);
        assert!(node.mark_word());
        assert!(!node.mark_word());
        assert_eq!(node.count_words(), 1);
    }
}
