// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{Letter, NUM_LETTERS, Tile};
use super::board::WordList;
use super::trie::Arena;

// the extra arc after the 26 letters.
pub const REVERSE: u8 = NUM_LETTERS;
const GADDAG_ARCS: usize = NUM_LETTERS as usize + 1;

// Every word is stored once per split point i (0..=len) as
// word[i..], REVERSE, reversed word[..i].
// A walk reads forward from some letter of the word to its end, reverses,
// then reads backward to its start.
pub struct Gaddag {
    arena: Arena<GADDAG_ARCS>,
}

impl Default for Gaddag {
    fn default() -> Gaddag {
        Gaddag::new()
    }
}

impl Gaddag {
    pub const ROOT: i32 = 0;

    pub fn new() -> Gaddag {
        Gaddag {
            arena: Arena::with_capacity(1),
        }
    }

    pub fn add_word(&mut self, word: &[Letter]) {
        for i in 0..=word.len() {
            self.arena.insert(
                word[i..]
                    .iter()
                    .copied()
                    .chain(std::iter::once(REVERSE))
                    .chain(word[..i].iter().rev().copied()),
            );
        }
    }

    pub fn from_words<W: AsRef<[Letter]>>(words: &[W]) -> Gaddag {
        let mut gaddag = Gaddag {
            arena: Arena::with_capacity(
                1 + words
                    .iter()
                    .map(|w| {
                        let len = w.as_ref().len();
                        (len + 1) * (len + 1)
                    })
                    .sum::<usize>()
                    .min(1 << 18),
            ),
        };
        for word in words {
            gaddag.add_word(word.as_ref());
        }
        gaddag.arena.finish();
        gaddag
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    #[inline(always)]
    pub fn seek(&self, p: i32, letter: Letter) -> i32 {
        self.arena.seek(p, letter)
    }

    #[inline(always)]
    pub fn can_reverse(&self, p: i32) -> bool {
        self.reverse(p) >= 0
    }

    #[inline(always)]
    pub fn reverse(&self, p: i32) -> i32 {
        self.arena.seek(p, REVERSE)
    }

    #[inline(always)]
    pub fn accepts(&self, p: i32) -> bool {
        self.arena.accepts(p)
    }
}

// the whole word read forward, then nothing left to read backward.
impl WordList for Gaddag {
    fn contains(&self, word: &[Tile]) -> bool {
        let p = word
            .iter()
            .fold(Self::ROOT, |p, &tile| self.seek(p, tile.letter()));
        self.accepts(self.reverse(p))
    }
}
