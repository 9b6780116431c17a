// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{Letter, NUM_LETTERS};
use super::board::{Board, Direction};
use super::gaddag::Gaddag;

// bit n set means letter n may go here.
pub type Constraint = u32;

pub const ALL_LETTERS: Constraint = (1 << NUM_LETTERS) - 1;

#[inline(always)]
pub fn allows(constraint: Constraint, letter: Letter) -> bool {
    constraint & (1 << letter) != 0
}

// Letters that may be placed in each empty cell by a move in each direction.
// Only meaningful for the board it was computed from.
pub struct CrossChecks {
    masks: [Box<[Constraint]>; 2],
    cols: i8,
}

impl CrossChecks {
    pub fn new(board: &Board, gaddag: &Gaddag) -> CrossChecks {
        let dim = board.dim();
        let masks = Direction::ALL.map(|direction| {
            let mut v = vec![0; dim.num_cells()];
            for row in 0..dim.rows {
                for col in 0..dim.cols {
                    if !board.has_tile(row, col) {
                        v[dim.at_row_col(row, col)] =
                            constraint_at(board, gaddag, row, col, direction);
                    }
                }
            }
            v.into_boxed_slice()
        });
        CrossChecks {
            masks,
            cols: dim.cols,
        }
    }

    // caller checks bounds. occupied cells allow nothing.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8, direction: Direction) -> Constraint {
        self.masks[direction.index()][row as usize * self.cols as usize + col as usize]
    }
}

// The cross word for a move in `direction` runs along the other axis.
pub fn constraint_at(
    board: &Board,
    gaddag: &Gaddag,
    row: i8,
    col: i8,
    direction: Direction,
) -> Constraint {
    let (dr, dc) = direction.other().offsets();
    if !board.has_tile(row - dr, col - dc) && !board.has_tile(row + dr, col + dc) {
        return ALL_LETTERS;
    }
    let mut p = Gaddag::ROOT;
    let (mut r, mut c) = (row + dr, col + dc);
    while board.has_tile(r, c) {
        p = gaddag.seek(p, board.tile_at(r, c).letter());
        if p < 0 {
            return 0;
        }
        r += dr;
        c += dc;
    }
    let p = gaddag.reverse(p);
    if p < 0 {
        return 0;
    }
    let mut constraint = 0;
    for letter in 0..NUM_LETTERS {
        let mut q = gaddag.seek(p, letter);
        let (mut r, mut c) = (row - dr, col - dc);
        while q >= 0 && board.has_tile(r, c) {
            q = gaddag.seek(q, board.tile_at(r, c).letter());
            r -= dr;
            c -= dc;
        }
        if gaddag.accepts(q) {
            constraint |= 1 << letter;
        }
    }
    constraint
}
