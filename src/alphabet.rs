// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Letter is an abstract alphabet index, 0 for A through 25 for Z.
pub type Letter = u8;

pub const NUM_LETTERS: u8 = 26;

// bits 0-6 = letter
// bit 7 = blank
// bits 8-15 = flags for the caller (ui highlighting etc.)
const LETTER_MASK: u16 = 0x7f;
const BLANK_BIT: u16 = 0x80;
const FLAG_MASK: u16 = 0xff00;
const FLAG_OFFSET: u16 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u16);

impl Tile {
    // marks an empty board cell.
    pub const NONE: Tile = Tile(0xffff);

    #[inline(always)]
    pub fn new(letter: Letter, blank: bool) -> Tile {
        Tile(letter as u16 | if blank { BLANK_BIT } else { 0 })
    }

    // an unassigned blank, as found on a rack or in the bag.
    #[inline(always)]
    pub fn blank() -> Tile {
        Tile::new(0, true)
    }

    #[inline(always)]
    pub fn letter(self) -> Letter {
        (self.0 & LETTER_MASK) as Letter
    }

    #[inline(always)]
    pub fn is_blank(self) -> bool {
        self.0 & BLANK_BIT != 0
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == Tile::NONE
    }

    #[inline(always)]
    pub fn flag(self, i: u16) -> bool {
        ((self.0 & FLAG_MASK) >> FLAG_OFFSET) & (1 << i) != 0
    }

    #[inline(always)]
    pub fn with_flag(self, i: u16, value: bool) -> Tile {
        if value {
            Tile(self.0 | (1 << (i + FLAG_OFFSET)))
        } else {
            Tile(self.0 & !(1 << (i + FLAG_OFFSET)))
        }
    }

    // same physical tile, flags ignored.
    #[inline(always)]
    pub fn same_tile(self, other: Tile) -> bool {
        (self.0 & !FLAG_MASK) == (other.0 & !FLAG_MASK)
    }

    // normal tiles are uppercase, blanks standing for a letter are lowercase.
    pub fn to_char(self) -> char {
        if self.is_none() {
            return '.';
        }
        let c = (b'A' + self.letter()) as char;
        if self.is_blank() { c.to_ascii_lowercase() } else { c }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'A'..='Z' => Some(Tile::new(c as u8 - b'A', false)),
            'a'..='z' => Some(Tile::new(c as u8 - b'a', true)),
            '?' => Some(Tile::blank()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl serde::Serialize for Tile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

pub struct LetterInfo {
    label: char,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    letters: &'a [LetterInfo],
    num_blanks: u8,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    fn letters(&self) -> &'a [LetterInfo] {
        match self {
            Alphabet::Static(x) => x.letters,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.letters().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.num_blanks,
        }
    }

    #[inline(always)]
    pub fn label(&self, letter: Letter) -> char {
        self.letters()[letter as usize].label
    }

    #[inline(always)]
    pub fn freq(&self, letter: Letter) -> u8 {
        self.letters()[letter as usize].freq
    }

    // blanks score zero whatever they stand for.
    #[inline(always)]
    pub fn score(&self, tile: Tile) -> i32 {
        if tile.is_blank() {
            0
        } else {
            self.letters()[tile.letter() as usize].score as i32
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        self.letters().iter().map(|x| x.freq as u16).sum::<u16>() + self.num_blanks() as u16
    }
}

macro_rules! letter {
    ($label:expr, $freq:expr, $score:expr) => {
        LetterInfo {
            label: $label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    letters: &[
        letter!('A', 9, 1),
        letter!('B', 2, 3),
        letter!('C', 2, 3),
        letter!('D', 4, 2),
        letter!('E', 12, 1),
        letter!('F', 2, 4),
        letter!('G', 3, 2),
        letter!('H', 2, 4),
        letter!('I', 9, 1),
        letter!('J', 1, 8),
        letter!('K', 1, 5),
        letter!('L', 4, 1),
        letter!('M', 2, 3),
        letter!('N', 6, 1),
        letter!('O', 8, 1),
        letter!('P', 2, 3),
        letter!('Q', 1, 10),
        letter!('R', 6, 1),
        letter!('S', 4, 1),
        letter!('T', 6, 1),
        letter!('U', 4, 1),
        letter!('V', 2, 4),
        letter!('W', 2, 4),
        letter!('X', 1, 8),
        letter!('Y', 2, 4),
        letter!('Z', 1, 10),
    ],
    num_blanks: 2,
});

pub fn parse_tiles(s: &str) -> error::Returns<Vec<Tile>> {
    let mut v = Vec::with_capacity(s.len());
    for c in s.chars() {
        match Tile::from_char(c) {
            Some(tile) => v.push(tile),
            None => {
                return_error!(InvalidInput, format!("invalid tile {:?} in {:?}", c, s));
            }
        }
    }
    Ok(v)
}

pub fn fmt_tiles(tiles: &[Tile]) -> String {
    tiles.iter().map(|&t| t.to_char()).collect()
}

// rack tiles print blanks as '?' since they stand for nothing yet.
pub fn fmt_rack(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|&t| if t.is_blank() { '?' } else { t.to_char() })
        .collect()
}
