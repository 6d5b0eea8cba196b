// --- File: src/core/trie.rs
use crate::fuzzy::CharSubstitutes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type NodeId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrieNode<V> {
    children: BTreeMap<char, NodeId>,
    values: Vec<V>,
}

impl<V> TrieNode<V> {
    fn new() -> Self {
        Self { children: BTreeMap::new(), values: Vec::new() }
    }
}

/// A character trie mapping string keys to one or more values.
///
/// Used both for the word index (word -> paradigm/form pairs) and for the
/// ending indices consulted by the suffix predictor. Children are kept in
/// character order, so prefix enumeration is lexicographic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trie<V> {
    nodes: Vec<TrieNode<V>>,
    keys: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], keys: 0 }
    }

    /// Appends `value` to the values stored under `key`.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node_idx = 0usize;
        for ch in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id as usize
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id as NodeId);
                new_node_id
            };
            node_idx = next_idx;
        }
        let node = &mut self.nodes[node_idx];
        if node.values.is_empty() {
            self.keys += 1;
        }
        node.values.push(value);
    }

    fn walk(&self, key: &str) -> Option<usize> {
        let mut node_idx = 0usize;
        for ch in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&ch)? as usize;
        }
        Some(node_idx)
    }

    pub fn get(&self, key: &str) -> Option<&[V]> {
        let node = &self.nodes[self.walk(key)?];
        if node.values.is_empty() {
            None
        } else {
            Some(&node.values)
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Every stored key reachable from `key` by swapping characters for their
    /// substitutes, with its values. The exact spelling, if stored, comes first.
    pub fn similar_items(&self, key: &str, substitutes: &CharSubstitutes) -> Vec<(String, &[V])> {
        let chars: Vec<char> = key.chars().collect();
        let mut found = Vec::new();
        let mut prefix = String::with_capacity(key.len());
        self.collect_similar(0, &chars, substitutes, &mut prefix, &mut found);
        found
    }

    fn collect_similar<'a>(
        &'a self,
        node_idx: usize,
        rest: &[char],
        substitutes: &CharSubstitutes,
        prefix: &mut String,
        found: &mut Vec<(String, &'a [V])>,
    ) {
        let node = &self.nodes[node_idx];
        let Some((&ch, tail)) = rest.split_first() else {
            if !node.values.is_empty() {
                found.push((prefix.clone(), &node.values));
            }
            return;
        };
        for candidate in std::iter::once(&ch).chain(substitutes.alternatives(ch)) {
            if let Some(&child) = node.children.get(candidate) {
                prefix.push(*candidate);
                self.collect_similar(child as usize, tail, substitutes, prefix, found);
                prefix.pop();
            }
        }
    }

    /// Stored keys that are prefixes of `key`, shortest first.
    pub fn prefixes<'k>(&self, key: &'k str) -> Vec<&'k str> {
        let mut found = Vec::new();
        let mut node_idx = 0usize;
        if !self.nodes[node_idx].values.is_empty() {
            found.push(&key[..0]);
        }
        for (at, ch) in key.char_indices() {
            match self.nodes[node_idx].children.get(&ch) {
                Some(&child) => node_idx = child as usize,
                None => break,
            }
            if !self.nodes[node_idx].values.is_empty() {
                found.push(&key[..at + ch.len_utf8()]);
            }
        }
        found
    }

    /// Checks the node graph of a deserialized trie: every child id points
    /// forward into `nodes`, no node has two parents and `keys` counts the
    /// nodes holding values. A trie built with [`Trie::insert`] always passes.
    pub fn validate(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut has_parent = vec![false; self.nodes.len()];
        for (idx, node) in self.nodes.iter().enumerate() {
            for &child in node.children.values() {
                let child = child as usize;
                if child <= idx || child >= self.nodes.len() || has_parent[child] {
                    return false;
                }
                has_parent[child] = true;
            }
        }
        let with_values = self.nodes.iter().filter(|n| !n.values.is_empty()).count();
        with_values == self.keys
    }

    /// Lazily enumerates `(key, values)` for every key starting with `prefix`,
    /// in lexicographic order.
    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter<'_, V> {
        let stack = match self.walk(prefix) {
            Some(node_idx) => vec![(node_idx, prefix.to_string())],
            None => Vec::new(),
        };
        PrefixIter { trie: self, stack }
    }
}

/// Depth-first walk below a prefix node. Dropping it early has no side effects.
pub struct PrefixIter<'a, V> {
    trie: &'a Trie<V>,
    stack: Vec<(usize, String)>,
}

impl<V> Clone for PrefixIter<'_, V> {
    fn clone(&self) -> Self {
        Self { trie: self.trie, stack: self.stack.clone() }
    }
}

impl<'a, V> Iterator for PrefixIter<'a, V> {
    type Item = (String, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node_idx, key)) = self.stack.pop() {
            let node = &self.trie.nodes[node_idx];
            // Reverse so the smallest character is popped first.
            for (&ch, &child) in node.children.iter().rev() {
                let mut child_key = key.clone();
                child_key.push(ch);
                self.stack.push((child as usize, child_key));
            }
            if !node.values.is_empty() {
                return Some((key, &node.values));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie<u32> {
        let mut trie = Trie::new();
        trie.insert("ёж", 1);
        trie.insert("ежи", 2);
        trie.insert("ель", 3);
        trie.insert("ель", 4);
        trie.insert("е", 5);
        trie
    }

    #[test]
    fn test_exact_lookup() {
        let trie = sample();
        assert_eq!(trie.get("ель"), Some(&[3, 4][..]));
        assert_eq!(trie.get("ел"), None);
        assert_eq!(trie.get("ёжик"), None);
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_similar_items_uses_substitutes() {
        let trie = sample();
        let subs = CharSubstitutes::from_pairs([('е', 'ё')]);
        let keys = |key: &str, subs: &CharSubstitutes| -> Vec<String> {
            trie.similar_items(key, subs).into_iter().map(|(k, _)| k).collect()
        };
        assert_eq!(keys("еж", &subs), vec!["ёж".to_string()]);
        assert!(keys("еж", &CharSubstitutes::none()).is_empty());
        assert_eq!(keys("ежи", &subs), vec!["ежи".to_string()]);
        assert_eq!(trie.similar_items("ель", &subs)[0].1, &[3, 4][..]);
    }

    #[test]
    fn test_validate_accepts_built_trie() {
        assert!(sample().validate());
        assert!(Trie::<u32>::new().validate());
    }

    #[test]
    fn test_validate_rejects_dangling_child_after_reload() {
        let mut trie = sample();
        trie.nodes[0].children.insert('a', 999);
        let bytes = bincode::serialize(&trie).unwrap();
        let reloaded: Trie<u32> = bincode::deserialize(&bytes).unwrap();
        assert!(!reloaded.validate());
    }

    #[test]
    fn test_validate_rejects_cycles_and_bad_counts() {
        let mut cyclic = sample();
        let last = cyclic.nodes.len() - 1;
        cyclic.nodes[last].children.insert('я', 0);
        assert!(!cyclic.validate());

        let mut shared = sample();
        let target = shared.nodes[0].children[&'е'];
        shared.nodes[0].children.insert('я', target);
        assert!(!shared.validate());

        let mut miscounted = sample();
        miscounted.keys = 7;
        assert!(!miscounted.validate());

        let empty = Trie::<u32> { nodes: Vec::new(), keys: 0 };
        assert!(!empty.validate());
    }

    #[test]
    fn test_stored_prefixes_of_key() {
        let trie = sample();
        assert_eq!(trie.prefixes("ежиха"), vec!["е", "ежи"]);
        assert_eq!(trie.prefixes("ёжик"), vec!["ёж"]);
        assert!(trie.prefixes("кот").is_empty());
    }

    #[test]
    fn test_prefix_iteration_is_lexicographic() {
        let trie = sample();
        let keys: Vec<String> = trie.iter_prefix("е").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["е", "ежи", "ель"]);
        let all: Vec<String> = trie.iter_prefix("").map(|(k, _)| k).collect();
        assert_eq!(all, vec!["е", "ежи", "ель", "ёж"]);
        assert_eq!(trie.iter_prefix("я").count(), 0);
    }

    #[test]
    fn test_prefix_iteration_restarts_from_clone() {
        let trie = sample();
        let mut iter = trie.iter_prefix("");
        let snapshot = iter.clone();
        iter.next();
        assert_eq!(snapshot.count(), 4);
        assert_eq!(iter.count(), 3);
    }
}
