/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The encoder dictionary: a trie mapping byte strings to codes.
//!
//! The trie is a de la Briandais trie: the children of a node form a singly
//! linked list of siblings, in insertion order, and each sibling points to
//! the head of its own list of children. Nodes live in a flat arena and refer
//! to each other by index, so the whole dictionary is a single allocation
//! that can be reset without walking it.

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The index of the synthetic root node.
const ROOT: u32 = 0;
/// The index denoting a missing sibling or child.
const NIL: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
struct Node {
    /// The byte labeling the edge from the parent.
    byte: u8,
    /// The code of the string ending here, if one was inserted.
    code: Option<u32>,
    /// The next node with the same parent.
    sibling: u32,
    /// The first child.
    child: u32,
}

impl Node {
    const fn new(byte: u8) -> Self {
        Self {
            byte,
            code: None,
            sibling: NIL,
            child: NIL,
        }
    }
}

/// A trie mapping nonempty byte strings to `u32` codes, supporting
/// longest-prefix queries.
///
/// # Example
/// ```
/// use lzw_bitstream::prelude::*;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert(b"a", 0);
/// trie.insert(b"ab", 1);
/// assert_eq!(trie.longest_prefix_of(b"abc"), b"ab");
/// assert_eq!(trie.get(b"ab"), Some(1));
/// assert_eq!(trie.get(b"abc"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct PrefixTrie {
    /// The node arena; the first node is the root.
    nodes: Vec<Node>,
    /// The number of strings with a code.
    len: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty trie with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(Node::new(0));
        Self {
            nodes: arena,
            len: 0,
        }
    }

    /// The number of strings in the trie.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes, root included.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Remove all strings, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT as usize] = Node::new(0);
        self.len = 0;
    }

    /// Find the child of `parent` labeled by `byte`.
    #[inline]
    fn child(&self, parent: u32, byte: u8) -> Option<u32> {
        let mut node = self.nodes[parent as usize].child;
        while node != NIL {
            let current = &self.nodes[node as usize];
            if current.byte == byte {
                return Some(node);
            }
            node = current.sibling;
        }
        None
    }

    /// Find the child of `parent` labeled by `byte`, appending it to the end
    /// of the sibling list if it does not exist.
    fn child_or_insert(&mut self, parent: u32, byte: u8) -> u32 {
        let mut last = NIL;
        let mut node = self.nodes[parent as usize].child;
        while node != NIL {
            let current = &self.nodes[node as usize];
            if current.byte == byte {
                return node;
            }
            last = node;
            node = current.sibling;
        }

        let new = self.nodes.len() as u32;
        debug_assert!(new != NIL);
        self.nodes.push(Node::new(byte));
        if last == NIL {
            self.nodes[parent as usize].child = new;
        } else {
            self.nodes[last as usize].sibling = new;
        }
        new
    }

    /// Follow `key` from the root, returning the node reached, if any.
    fn find(&self, key: &[u8]) -> Option<u32> {
        key.iter()
            .try_fold(ROOT, |node, &byte| self.child(node, byte))
    }

    /// Insert `key` with the given code, returning the previous code of `key`,
    /// if any.
    ///
    /// The empty string cannot be inserted, and it is ignored.
    pub fn insert(&mut self, key: &[u8], code: u32) -> Option<u32> {
        if key.is_empty() {
            return None;
        }
        let node = key
            .iter()
            .fold(ROOT, |node, &byte| self.child_or_insert(node, byte));
        let previous = self.nodes[node as usize].code.replace(code);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Return the longest prefix of `s` that is a path of the trie.
    ///
    /// The path does not need to end at a string with a code; when all
    /// prefixes of the strings in the trie are in the trie, as it happens in
    /// an LZW dictionary, the two notions coincide.
    pub fn longest_prefix_of<'a>(&self, s: &'a [u8]) -> &'a [u8] {
        let mut node = ROOT;
        let mut len = 0;
        for &byte in s {
            match self.child(node, byte) {
                Some(child) => node = child,
                None => break,
            }
            len += 1;
        }
        &s[..len]
    }

    /// Return the code of `key`, or `None` if `key` is not in the trie.
    ///
    /// A key that is only a proper prefix of inserted keys has a path in the
    /// trie but no code, and it is reported as `None` as well: such a lookup
    /// does not return the value stored at the end of the path. The codec
    /// only queries keys returned by [`PrefixTrie::longest_prefix_of`], which
    /// in an LZW dictionary always carry a code.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<u32> {
        self.find(key)
            .and_then(|node| self.nodes[node as usize].code)
    }

    #[must_use]
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.insert(b"she", 1), None);
        assert_eq!(trie.insert(b"shell", 2), None);
        assert_eq!(trie.insert(b"sea", 3), None);
        assert_eq!(trie.len(), 3);

        assert_eq!(trie.get(b"she"), Some(1));
        assert_eq!(trie.get(b"shell"), Some(2));
        assert_eq!(trie.get(b"sea"), Some(3));
        // paths without a code
        assert_eq!(trie.get(b"sh"), None);
        assert_eq!(trie.get(b"shel"), None);
        // missing paths
        assert_eq!(trie.get(b"shells"), None);
        assert_eq!(trie.get(b"x"), None);
        assert_eq!(trie.get(b""), None);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut trie = PrefixTrie::new();
        trie.insert(b"ab", 7);
        let nodes = trie.num_nodes();
        assert_eq!(trie.insert(b"ab", 9), Some(7));
        assert_eq!(trie.get(b"ab"), Some(9));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.num_nodes(), nodes);
    }

    #[test]
    fn test_empty_key_is_ignored() {
        let mut trie = PrefixTrie::new();
        assert_eq!(trie.insert(b"", 5), None);
        assert!(trie.is_empty());
        assert_eq!(trie.num_nodes(), 1);
    }

    #[test]
    fn test_longest_prefix_of() {
        let mut trie = PrefixTrie::new();
        trie.insert(b"a", 0);
        trie.insert(b"ab", 1);
        trie.insert(b"abcd", 2);
        assert_eq!(trie.longest_prefix_of(b"abcde"), b"abcd");
        // structural match, even if "abc" has no code
        assert_eq!(trie.longest_prefix_of(b"abcx"), b"abc");
        assert_eq!(trie.longest_prefix_of(b"ax"), b"a");
        assert_eq!(trie.longest_prefix_of(b"xa"), b"");
        assert_eq!(trie.longest_prefix_of(b""), b"");
    }

    #[test]
    fn test_zero_byte_is_a_regular_byte() {
        let mut trie = PrefixTrie::new();
        trie.insert(b"a", 1);
        assert_eq!(trie.longest_prefix_of(b"a\0"), b"a");
        assert_eq!(trie.get(b"\0"), None);
        trie.insert(b"\0", 0);
        trie.insert(b"\0\0", 2);
        assert_eq!(trie.longest_prefix_of(b"\0\0\0"), b"\0\0");
        assert_eq!(trie.get(b"\0"), Some(0));
    }

    #[test]
    fn test_single_bytes() {
        let mut trie = PrefixTrie::new();
        for byte in 0..=255_u8 {
            trie.insert(&[byte], byte as u32);
        }
        assert_eq!(trie.len(), 256);
        for byte in 0..=255_u8 {
            assert_eq!(trie.longest_prefix_of(&[byte, byte]), [byte]);
            assert_eq!(trie.get(&[byte]), Some(byte as u32));
        }
    }

    #[test]
    fn test_clear() {
        let mut trie = PrefixTrie::new();
        trie.insert(b"abc", 1);
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.num_nodes(), 1);
        assert_eq!(trie.get(b"abc"), None);
        trie.insert(b"abd", 2);
        assert_eq!(trie.longest_prefix_of(b"abc"), b"ab");
    }
}
