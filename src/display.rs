// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout};

#[inline(always)]
pub fn empty_label(board: &board::Board, row: i8, col: i8) -> &'static str {
    let layout = board.game_config().board_layout();
    if row == layout.star_row() && col == layout.star_col() {
        return "*";
    }
    match layout.bonus_at(row, col) {
        board_layout::Bonus::TripleWord => "=",
        board_layout::Bonus::DoubleWord => "-",
        board_layout::Bonus::TripleLetter => "\"",
        board_layout::Bonus::DoubleLetter => "\'",
        board_layout::Bonus::None => " ",
    }
}

fn push_margin(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(((c as u8) + 0x41) as char);
    }
    s.push('\n');
}

fn push_rule(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn board_string(board: &board::Board) -> String {
    let dim = board.dim();
    let mut s = String::new();
    push_margin(&mut s, dim.cols);
    push_rule(&mut s, dim.cols);
    for r in 0..dim.rows {
        s.push_str(&format!("{:2}|", r + 1));
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            let tile = board.tile_at(r, c);
            if tile.is_none() {
                s.push_str(empty_label(board, r, c));
            } else {
                s.push(tile.to_char());
            }
        }
        s.push_str(&format!("|{}\n", r + 1));
    }
    push_rule(&mut s, dim.cols);
    push_margin(&mut s, dim.cols);
    s
}

pub fn print_board(board: &board::Board) {
    print!("{}", board_string(board));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_tiles_and_premiums() {
        let mut b = board::Board::default();
        assert_eq!(empty_label(&b, 7, 7), "*");
        assert_eq!(empty_label(&b, 0, 0), "=");
        b.place_tiles(&board::PlacedTiles::new(
            7,
            7,
            board::Direction::Horizontal,
            crate::alphabet::parse_tiles("DoG").unwrap(),
        ))
        .unwrap();
        let s = board_string(&b);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   A B C D E F G H I J K L M N O");
        assert_eq!(lines[9], " 8|=     '       D o G   '     =|8");
    }
}
