// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{self, Tile};
use super::error;

pub const MAX_RACK_SIZE: usize = 7;

// Tiles never move. Using one up sets its bit in `consumed`, so every Rack is
// a cheap value that search branches can fork freely.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rack {
    tiles: [Tile; MAX_RACK_SIZE],
    len: u8,
    consumed: u8,
}

impl Rack {
    pub fn new(tiles: &[Tile]) -> error::Returns<Rack> {
        if tiles.len() > MAX_RACK_SIZE {
            return_error!(
                InvalidInput,
                format!("rack holds at most {} tiles, got {}", MAX_RACK_SIZE, tiles.len())
            );
        }
        let mut rack = Rack {
            tiles: [Tile::NONE; MAX_RACK_SIZE],
            len: tiles.len() as u8,
            consumed: 0,
        };
        for (i, &tile) in tiles.iter().enumerate() {
            if tile.is_none() {
                return_error!(InvalidInput, "rack cannot hold an empty tile".into());
            }
            // a blank on the rack does not stand for anything yet.
            rack.tiles[i] = if tile.is_blank() { Tile::blank() } else { tile };
        }
        Ok(rack)
    }

    pub fn parse(s: &str) -> error::Returns<Rack> {
        Rack::new(&alphabet::parse_tiles(s)?)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_remaining() == 0
    }

    #[inline(always)]
    pub fn tile(&self, i: usize) -> Tile {
        self.tiles[i]
    }

    #[inline(always)]
    pub fn can_consume(&self, i: usize) -> bool {
        i < self.len() && self.consumed & (1 << i) == 0
    }

    // caller checks can_consume.
    #[inline(always)]
    pub fn consume(&self, i: usize) -> Rack {
        Rack {
            consumed: self.consumed | (1 << i),
            ..*self
        }
    }

    #[inline(always)]
    pub fn num_remaining(&self) -> usize {
        self.len() - self.consumed.count_ones() as usize
    }

    pub fn remaining(&self) -> Vec<Tile> {
        (0..self.len())
            .filter(|&i| self.can_consume(i))
            .map(|i| self.tiles[i])
            .collect()
    }

    // Indexes of remaining tiles, skipping any tile already offered by an
    // earlier index, so each distinct tile is tried once per step.
    pub fn distinct_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| {
            self.can_consume(i)
                && !(0..i).any(|j| self.can_consume(j) && self.tiles[j] == self.tiles[i])
        })
    }

    // Uses up one rack tile per tile in word. A blank in word needs a blank,
    // anything else needs that exact letter.
    pub fn play(&self, word: &[Tile]) -> Option<Rack> {
        let mut rack = *self;
        for &tile in word {
            let want = if tile.is_blank() { Tile::blank() } else { tile };
            let i = (0..rack.len()).find(|&i| rack.can_consume(i) && rack.tiles[i] == want)?;
            rack = rack.consume(i);
        }
        Some(rack)
    }

    // what is kept after this rack's consumed tiles are played.
    pub fn leave(&self) -> Rack {
        let remaining = self.remaining();
        let mut rack = Rack {
            tiles: [Tile::NONE; MAX_RACK_SIZE],
            len: remaining.len() as u8,
            consumed: 0,
        };
        rack.tiles[..remaining.len()].copy_from_slice(&remaining);
        rack
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", alphabet::fmt_rack(&self.remaining()))
    }
}

impl std::fmt::Debug for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rack({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::parse_tiles;

    #[test]
    fn rejects_impossible_racks() {
        assert!(Rack::parse("ABCDEFGH").is_err());
        assert!(Rack::new(&[Tile::NONE]).is_err());
        assert!(Rack::parse("A1").is_err());
        assert_eq!(Rack::parse("").unwrap().len(), 0);
        assert_eq!(Rack::parse("ab").unwrap().to_string(), "??");
    }

    #[test]
    fn consuming_leaves_the_original_alone() {
        let rack = Rack::parse("DOG").unwrap();
        let used = rack.consume(1);
        assert!(rack.can_consume(1));
        assert!(!used.can_consume(1));
        assert!(!rack.can_consume(3));
        assert_eq!(rack.num_remaining(), 3);
        assert_eq!(used.num_remaining(), 2);
        assert_eq!(used.to_string(), "DG");
        assert_eq!(used.leave().len(), 2);
        assert!(used.leave().can_consume(1));
    }

    #[test]
    fn plays_need_matching_tiles() {
        let rack = Rack::parse("DO?").unwrap();
        let after = rack.play(&parse_tiles("DoG").unwrap());
        assert!(after.is_none());
        let after = rack.play(&parse_tiles("DgO").unwrap()).unwrap();
        assert!(after.is_empty());
        assert!(rack.play(&parse_tiles("DD").unwrap()).is_none());
        // a blank cannot be played as a normal tile.
        assert!(Rack::parse("?").unwrap().play(&parse_tiles("A").unwrap()).is_none());
        assert_eq!(rack.play(&[]).unwrap(), rack);
    }

    #[test]
    fn distinct_indexes_skip_repeats() {
        let rack = Rack::parse("AABA??").unwrap();
        assert_eq!(rack.distinct_indexes().collect::<Vec<_>>(), vec![0, 2, 4]);
        let rack = rack.consume(0);
        assert_eq!(rack.distinct_indexes().collect::<Vec<_>>(), vec![1, 2, 4]);
    }
}
