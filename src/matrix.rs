// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    // inverse of at_row_col.
    #[inline(always)]
    pub fn row_col(&self, idx: usize) -> (i8, i8) {
        (
            (idx / self.cols as usize) as i8,
            (idx % self.cols as usize) as i8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_round_trip() {
        let dim = Dim { rows: 15, cols: 15 };
        assert_eq!(dim.num_cells(), 225);
        assert_eq!(dim.at_row_col(7, 7), 112);
        assert_eq!(dim.row_col(112), (7, 7));
        assert!(dim.contains(14, 0));
        assert!(!dim.contains(15, 0));
        assert!(!dim.contains(0, -1));
    }
}
