// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bonus {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    #[inline(always)]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

pub struct StaticBoardLayout<'a> {
    bonuses: &'a [Bonus],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout<'a> {
    Static(StaticBoardLayout<'a>),
}

impl BoardLayout<'_> {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    // caller checks bounds.
    #[inline(always)]
    pub fn bonus_at(&self, row: i8, col: i8) -> Bonus {
        match self {
            BoardLayout::Static(x) => x.bonuses[x.dim.at_row_col(row, col)],
        }
    }
}

const TW: Bonus = Bonus::TripleWord;
const DW: Bonus = Bonus::DoubleWord;
const TL: Bonus = Bonus::TripleLetter;
const DL: Bonus = Bonus::DoubleLetter;
const NO: Bonus = Bonus::None;

pub static COMMON_BOARD_LAYOUT: BoardLayout = BoardLayout::Static(StaticBoardLayout {
    bonuses: &[
        TW, NO, NO, DL, NO, NO, NO, TW, NO, NO, NO, DL, NO, NO, TW, //
        NO, DW, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, DW, NO, //
        NO, NO, DW, NO, NO, NO, DL, NO, DL, NO, NO, NO, DW, NO, NO, //
        DL, NO, NO, DW, NO, NO, NO, DL, NO, NO, NO, DW, NO, NO, DL, //
        NO, NO, NO, NO, DW, NO, NO, NO, NO, NO, DW, NO, NO, NO, NO, //
        NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, //
        NO, NO, DL, NO, NO, NO, DL, NO, DL, NO, NO, NO, DL, NO, NO, //
        TW, NO, NO, DL, NO, NO, NO, DW, NO, NO, NO, DL, NO, NO, TW, //
        NO, NO, DL, NO, NO, NO, DL, NO, DL, NO, NO, NO, DL, NO, NO, //
        NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, //
        NO, NO, NO, NO, DW, NO, NO, NO, NO, NO, DW, NO, NO, NO, NO, //
        DL, NO, NO, DW, NO, NO, NO, DL, NO, NO, NO, DW, NO, NO, DL, //
        NO, NO, DW, NO, NO, NO, DL, NO, DL, NO, NO, NO, DW, NO, NO, //
        NO, DW, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, DW, NO, //
        TW, NO, NO, DL, NO, NO, NO, TW, NO, NO, NO, DL, NO, NO, TW, //
    ],
    dim: matrix::Dim { rows: 15, cols: 15 },
    star_row: 7,
    star_col: 7,
});
