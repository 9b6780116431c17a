// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{Letter, NUM_LETTERS, Tile};
use super::board::WordList;

// arc target 0 means no arc, since nothing points back to the root.
#[derive(Clone)]
pub(crate) struct Node<const N: usize> {
    arcs: [u32; N],
    accepts: bool,
}

impl<const N: usize> Default for Node<N> {
    fn default() -> Self {
        Node {
            arcs: [0; N],
            accepts: false,
        }
    }
}

// Flat node array. Nodes are handed out by index from a preallocated block so
// bulk construction does not allocate per node.
pub(crate) struct Arena<const N: usize> {
    nodes: Vec<Node<N>>,
    used: usize,
}

impl<const N: usize> Arena<N> {
    pub(crate) fn with_capacity(num_nodes: usize) -> Self {
        Arena {
            nodes: vec![Node::default(); num_nodes.max(1)],
            used: 1,
        }
    }

    #[inline(always)]
    fn alloc(&mut self) -> u32 {
        if self.used == self.nodes.len() {
            self.nodes.push(Node::default());
        }
        self.used += 1;
        (self.used - 1) as u32
    }

    // arcs must be < N.
    pub(crate) fn insert<I: IntoIterator<Item = u8>>(&mut self, path: I) {
        let mut p = 0usize;
        for arc in path {
            let next = self.nodes[p].arcs[arc as usize];
            p = if next != 0 {
                next as usize
            } else {
                let q = self.alloc();
                self.nodes[p].arcs[arc as usize] = q;
                q as usize
            };
        }
        self.nodes[p].accepts = true;
    }

    // drops the unused tail of the preallocation.
    pub(crate) fn finish(&mut self) {
        self.nodes.truncate(self.used);
        self.nodes.shrink_to_fit();
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.used
    }

    #[inline(always)]
    pub(crate) fn seek(&self, p: i32, arc: u8) -> i32 {
        if p < 0 {
            return -1;
        }
        match self.nodes[p as usize].arcs[arc as usize] {
            0 => -1,
            q => q as i32,
        }
    }

    #[inline(always)]
    pub(crate) fn accepts(&self, p: i32) -> bool {
        p >= 0 && self.nodes[p as usize].accepts
    }
}

const TRIE_ARCS: usize = NUM_LETTERS as usize;

pub struct Trie {
    arena: Arena<TRIE_ARCS>,
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl Trie {
    pub const ROOT: i32 = 0;

    pub fn new() -> Trie {
        Trie {
            arena: Arena::with_capacity(1),
        }
    }

    pub fn add_word(&mut self, word: &[Letter]) {
        self.arena.insert(word.iter().copied());
    }

    pub fn from_words<W: AsRef<[Letter]>>(words: &[W]) -> Trie {
        // every letter of every word is an upper bound on the node count.
        let mut builder = TrieBuilder::new(
            1 + words.iter().map(|w| w.as_ref().len()).sum::<usize>(),
        );
        for word in words {
            builder.add_word(word.as_ref());
        }
        builder.build()
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    // -1 when there is no such branch.
    #[inline(always)]
    pub fn seek(&self, p: i32, letter: Letter) -> i32 {
        self.arena.seek(p, letter)
    }

    #[inline(always)]
    pub fn accepts(&self, p: i32) -> bool {
        self.arena.accepts(p)
    }

    pub fn contains_letters(&self, word: &[Letter]) -> bool {
        self.accepts(
            word.iter()
                .fold(Self::ROOT, |p, &letter| self.seek(p, letter)),
        )
    }
}

impl WordList for Trie {
    fn contains(&self, word: &[Tile]) -> bool {
        self.accepts(
            word.iter()
                .fold(Self::ROOT, |p, &tile| self.seek(p, tile.letter())),
        )
    }
}

pub struct TrieBuilder {
    arena: Arena<TRIE_ARCS>,
}

impl TrieBuilder {
    pub fn new(expected_num_nodes: usize) -> TrieBuilder {
        TrieBuilder {
            arena: Arena::with_capacity(expected_num_nodes),
        }
    }

    pub fn add_word(&mut self, word: &[Letter]) {
        self.arena.insert(word.iter().copied());
    }

    pub fn build(mut self) -> Trie {
        self.arena.finish();
        Trie { arena: self.arena }
    }
}
