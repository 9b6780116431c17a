// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{self, Tile};
use super::{board_layout, error, game_config, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    // (row, col) step to the next cell.
    #[inline(always)]
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    #[inline(always)]
    pub fn other(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

// Tiles read from (row, col) along direction. A move lists only its new tiles
// (occupied cells on the line are skipped), a word lists every tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct PlacedTiles {
    pub row: i8,
    pub col: i8,
    pub direction: Direction,
    pub tiles: Vec<Tile>,
}

impl PlacedTiles {
    pub fn new(row: i8, col: i8, direction: Direction, tiles: Vec<Tile>) -> PlacedTiles {
        PlacedTiles {
            row,
            col,
            direction,
            tiles,
        }
    }

    pub fn word(&self) -> String {
        alphabet::fmt_tiles(&self.tiles)
    }

    // "8H" is across from row 8 col H, "H8" is down.
    pub fn coord(&self) -> String {
        let col = (b'A' + self.col as u8) as char;
        match self.direction {
            Direction::Horizontal => format!("{}{}", self.row + 1, col),
            Direction::Vertical => format!("{}{}", col, self.row + 1),
        }
    }
}

impl std::fmt::Display for PlacedTiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.coord(), self.word())
    }
}

pub fn parse_coord(s: &str) -> Option<(i8, i8, Direction)> {
    let b = s.as_bytes();
    let (first, last) = (*b.first()?, *b.last()?);
    let (letter, digits, direction) = if first.is_ascii_alphabetic() {
        (first, &s[1..], Direction::Vertical)
    } else if last.is_ascii_alphabetic() {
        (last, &s[..s.len() - 1], Direction::Horizontal)
    } else {
        return None;
    };
    // rows are numbered from 1.
    let row = digits.parse::<i8>().ok()?.checked_sub(1).filter(|&row| row >= 0)?;
    let col = (letter.to_ascii_uppercase() - b'A') as i8;
    Some((row, col, direction))
}

pub trait WordList {
    // blanks count as the letter they stand for.
    fn contains(&self, word: &[Tile]) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub bonus: board_layout::Bonus,
    pub tile: Tile,
}

#[derive(Clone)]
pub struct Board {
    game_config: &'static game_config::GameConfig<'static>,
    tiles: Box<[Tile]>,
    num_tiles: u16,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(game_config::make_common_english_game_config())
    }
}

impl Board {
    pub fn new(game_config: &'static game_config::GameConfig<'static>) -> Board {
        Board {
            game_config,
            tiles: vec![Tile::NONE; game_config.board_layout().dim().num_cells()].into_boxed_slice(),
            num_tiles: 0,
        }
    }

    // rows of labels, '.' or ' ' for empty cells.
    pub fn from_rows<S: AsRef<str>>(
        game_config: &'static game_config::GameConfig<'static>,
        rows: &[S],
    ) -> error::Returns<Board> {
        let mut board = Board::new(game_config);
        let dim = board.dim();
        if rows.len() != dim.rows as usize {
            return_error!(
                InvalidInput,
                format!("board needs {} rows, got {}", dim.rows, rows.len())
            );
        }
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != dim.cols as usize {
                return_error!(InvalidInput, format!("row {:?} needs {} cells", row, dim.cols));
            }
            for (c, ch) in row.chars().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                match Tile::from_char(ch) {
                    Some(tile) if ch != '?' => {
                        board.tiles[dim.at_row_col(r as i8, c as i8)] = tile;
                        board.num_tiles += 1;
                    }
                    _ => {
                        return_error!(InvalidInput, format!("invalid board tile {:?}", ch));
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<String> {
        let dim = self.dim();
        (0..dim.rows)
            .map(|r| (0..dim.cols).map(|c| self.tile_at(r, c).to_char()).collect())
            .collect()
    }

    #[inline(always)]
    pub fn game_config(&self) -> &'static game_config::GameConfig<'static> {
        self.game_config
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.game_config.board_layout().dim()
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        self.dim().contains(row, col)
    }

    pub fn cell(&self, row: i8, col: i8) -> Option<Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(Cell {
            bonus: self.game_config.board_layout().bonus_at(row, col),
            tile: self.tiles[self.dim().at_row_col(row, col)],
        })
    }

    // Tile::NONE when empty or out of bounds.
    #[inline(always)]
    pub fn tile_at(&self, row: i8, col: i8) -> Tile {
        if self.in_bounds(row, col) {
            self.tiles[self.dim().at_row_col(row, col)]
        } else {
            Tile::NONE
        }
    }

    #[inline(always)]
    pub fn has_tile(&self, row: i8, col: i8) -> bool {
        !self.tile_at(row, col).is_none()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_tiles == 0
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        self.num_tiles
    }

    #[inline(always)]
    fn is_star(&self, row: i8, col: i8) -> bool {
        let layout = self.game_config.board_layout();
        row == layout.star_row() && col == layout.star_col()
    }

    #[inline(always)]
    fn touches_tile(&self, row: i8, col: i8) -> bool {
        self.has_tile(row - 1, col)
            || self.has_tile(row + 1, col)
            || self.has_tile(row, col - 1)
            || self.has_tile(row, col + 1)
    }

    // an empty cell a new word may grow from. an uncovered star stays one
    // even on a board loaded without it.
    pub fn is_anchor(&self, row: i8, col: i8) -> bool {
        self.in_bounds(row, col)
            && !self.has_tile(row, col)
            && (self.is_star(row, col) || self.touches_tile(row, col))
    }

    pub fn anchors(&self) -> Vec<(i8, i8)> {
        let dim = self.dim();
        let mut v = Vec::new();
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                if self.is_anchor(row, col) {
                    v.push((row, col));
                }
            }
        }
        v
    }

    // cells the new tiles land on, or None if the line leaves the board first.
    fn positions(&self, m: &PlacedTiles) -> Option<Vec<(i8, i8)>> {
        let (dr, dc) = m.direction.offsets();
        let (mut row, mut col) = (m.row, m.col);
        let mut v = Vec::with_capacity(m.tiles.len());
        while v.len() < m.tiles.len() {
            if !self.in_bounds(row, col) {
                return None;
            }
            if !self.has_tile(row, col) {
                v.push((row, col));
            }
            row += dr;
            col += dc;
        }
        Some(v)
    }

    pub fn place_tiles(&mut self, m: &PlacedTiles) -> error::Returns<()> {
        let Some(positions) = self.positions(m) else {
            return_error!(InvalidInput, format!("{} runs off the board", m));
        };
        if m.tiles.iter().any(|t| t.is_none()) {
            return_error!(InvalidInput, format!("{} has an empty tile", m));
        }
        let dim = self.dim();
        for (&(row, col), &tile) in positions.iter().zip(m.tiles.iter()) {
            self.tiles[dim.at_row_col(row, col)] = tile;
        }
        self.num_tiles += positions.len() as u16;
        Ok(())
    }

    // maximal run of tiles through (row, col), as reported by tile_at.
    fn run_through(
        &self,
        row: i8,
        col: i8,
        direction: Direction,
        tile_at: &dyn Fn(i8, i8) -> Tile,
    ) -> PlacedTiles {
        let (dr, dc) = direction.offsets();
        let (mut r, mut c) = (row, col);
        while !tile_at(r - dr, c - dc).is_none() {
            r -= dr;
            c -= dc;
        }
        let (start_row, start_col) = (r, c);
        let mut tiles = Vec::new();
        loop {
            let tile = tile_at(r, c);
            if tile.is_none() {
                break;
            }
            tiles.push(tile);
            r += dr;
            c += dc;
        }
        PlacedTiles::new(start_row, start_col, direction, tiles)
    }

    // the run of board tiles through (row, col), empty if that cell is empty.
    pub fn grow_word(&self, row: i8, col: i8, direction: Direction) -> PlacedTiles {
        if !self.has_tile(row, col) {
            return PlacedTiles::new(row, col, direction, Vec::new());
        }
        self.run_through(row, col, direction, &|r, c| self.tile_at(r, c))
    }

    // main word first, then one cross word per new tile that has a perpendicular neighbor.
    pub fn find_new_words(&self, m: &PlacedTiles) -> Vec<PlacedTiles> {
        let positions = match self.positions(m) {
            Some(positions) if !positions.is_empty() => positions,
            _ => return Vec::new(),
        };
        let overlay = |row: i8, col: i8| -> Tile {
            match positions.iter().position(|&p| p == (row, col)) {
                Some(i) => m.tiles[i],
                None => self.tile_at(row, col),
            }
        };
        let mut words = Vec::with_capacity(positions.len() + 1);
        let (row, col) = positions[0];
        words.push(self.run_through(row, col, m.direction, &overlay));
        let across = m.direction.other();
        let (dr, dc) = across.offsets();
        for (&(row, col), &tile) in positions.iter().zip(m.tiles.iter()) {
            if self.has_tile(row - dr, col - dc) || self.has_tile(row + dr, col + dc) {
                words.push(self.run_through(row, col, across, &|r, c| {
                    if (r, c) == (row, col) {
                        tile
                    } else {
                        self.tile_at(r, c)
                    }
                }));
            }
        }
        words
    }

    pub fn validate_move<W: WordList + ?Sized>(&self, m: &PlacedTiles, word_list: &W) -> bool {
        if m.tiles.is_empty() || m.tiles.iter().any(|t| t.is_none()) {
            return false;
        }
        let Some(positions) = self.positions(m) else {
            return false;
        };
        if !positions
            .iter()
            .any(|&(row, col)| self.is_star(row, col) || self.touches_tile(row, col))
        {
            return false;
        }
        self.find_new_words(m)
            .iter()
            .all(|word| word_list.contains(&word.tiles))
    }

    fn score_word(&self, word: &PlacedTiles) -> i32 {
        let alphabet = self.game_config.alphabet();
        let layout = self.game_config.board_layout();
        let (dr, dc) = word.direction.offsets();
        let mut word_score = 0;
        let mut word_multiplier = 1;
        for (i, &tile) in word.tiles.iter().enumerate() {
            let (row, col) = (word.row + dr * i as i8, word.col + dc * i as i8);
            let face = alphabet.score(tile);
            if self.has_tile(row, col) {
                word_score += face;
            } else {
                let bonus = layout.bonus_at(row, col);
                word_score += face * bonus.letter_multiplier();
                word_multiplier *= bonus.word_multiplier();
            }
        }
        word_score * word_multiplier
    }

    // panics if the move cannot be laid on the board at all.
    pub fn score(&self, m: &PlacedTiles) -> i32 {
        if self.positions(m).is_none() {
            panic!("cannot score {}: runs off the board", m);
        }
        self.find_new_words(m)
            .iter()
            .map(|word| self.score_word(word))
            .sum::<i32>()
            + self.game_config.num_played_bonus(m.tiles.len())
    }
}
