// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{self, Tile};
use super::{error, rack};
use rand::prelude::*;

// Up to 128 tiles. Drawn tiles stay in place and get their bit set.
#[derive(Clone)]
pub struct Bag {
    tiles: std::sync::Arc<[Tile]>,
    consumed: [u64; 2],
}

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut tiles = Vec::with_capacity(alphabet.num_tiles() as usize);
        for letter in 0..alphabet.len() {
            for _ in 0..alphabet.freq(letter) {
                tiles.push(Tile::new(letter, false));
            }
        }
        for _ in 0..alphabet.num_blanks() {
            tiles.push(Tile::blank());
        }
        Bag {
            tiles: tiles.into(),
            consumed: [0; 2],
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[inline(always)]
    pub fn tile(&self, i: usize) -> Tile {
        self.tiles[i]
    }

    #[inline(always)]
    fn bit(consumed: &[u64; 2], i: usize) -> bool {
        consumed[i >> 6] & (1 << (i & 63)) != 0
    }

    #[inline(always)]
    fn set_bit(consumed: &mut [u64; 2], i: usize, value: bool) {
        if value {
            consumed[i >> 6] |= 1 << (i & 63);
        } else {
            consumed[i >> 6] &= !(1 << (i & 63));
        }
    }

    #[inline(always)]
    pub fn can_consume(&self, i: usize) -> bool {
        i < self.len() && !Self::bit(&self.consumed, i)
    }

    // caller checks can_consume.
    pub fn consume(&self, i: usize) -> Bag {
        let mut consumed = self.consumed;
        Self::set_bit(&mut consumed, i, true);
        Bag {
            tiles: self.tiles.clone(),
            consumed,
        }
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.len() - (self.consumed[0].count_ones() + self.consumed[1].count_ones()) as usize
    }

    pub fn remaining(&self) -> Vec<Tile> {
        (0..self.len())
            .filter(|&i| self.can_consume(i))
            .map(|i| self.tiles[i])
            .collect()
    }

    // Fisher-Yates over the whole sequence. A drawn tile stays drawn.
    pub fn shuffle(&self, rng: &mut dyn RngCore) -> Bag {
        let mut tiles = self.tiles.to_vec();
        let mut consumed = self.consumed;
        for i in (1..tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            tiles.swap(i, j);
            let (bi, bj) = (Self::bit(&consumed, i), Self::bit(&consumed, j));
            Self::set_bit(&mut consumed, i, bj);
            Self::set_bit(&mut consumed, j, bi);
        }
        Bag {
            tiles: tiles.into(),
            consumed,
        }
    }

    // the next n undrawn tiles in sequence order, or fewer if the bag runs out.
    pub fn draw(&self, n: usize) -> (Bag, Vec<Tile>) {
        let mut bag = self.clone();
        let mut drawn = Vec::with_capacity(n);
        for i in 0..self.len() {
            if drawn.len() >= n {
                break;
            }
            if bag.can_consume(i) {
                Self::set_bit(&mut bag.consumed, i, true);
                drawn.push(self.tiles[i]);
            }
        }
        (bag, drawn)
    }

    // tops up the unplayed part of rack to a full rack.
    pub fn fill_rack(&self, rack: &rack::Rack) -> error::Returns<(Bag, rack::Rack)> {
        let mut tiles = rack.remaining();
        let (bag, drawn) = self.draw(rack::MAX_RACK_SIZE.saturating_sub(tiles.len()));
        tiles.extend_from_slice(&drawn);
        Ok((bag, rack::Rack::new(&tiles)?))
    }

    // marks these particular tiles as drawn. a blank-as-letter takes a blank.
    pub fn consume_tiles(&self, tiles: &[Tile]) -> Option<Bag> {
        let mut bag = self.clone();
        for &tile in tiles {
            let want = if tile.is_blank() { Tile::blank() } else { tile };
            let i = (0..self.len()).find(|&i| bag.can_consume(i) && bag.tiles[i] == want)?;
            Self::set_bit(&mut bag.consumed, i, true);
        }
        Some(bag)
    }

    // returns drawn tiles to the bag. None if some tile was never drawn.
    pub fn replace(&self, tiles: &[Tile]) -> Option<Bag> {
        let mut bag = self.clone();
        for &tile in tiles {
            let want = if tile.is_blank() { Tile::blank() } else { tile };
            let i = (0..self.len())
                .find(|&i| Self::bit(&bag.consumed, i) && bag.tiles[i] == want)?;
            Self::set_bit(&mut bag.consumed, i, false);
        }
        Some(bag)
    }
}
