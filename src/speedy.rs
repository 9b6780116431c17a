// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::board::{Board, PlacedTiles};
use super::cross_check::{self, CrossChecks};
use super::gaddag::Gaddag;
use super::movegen::{self, Job, JobPool, MoveGenerator, Turn};
use super::{error, pool, rack};
use std::sync::Arc;

// Grows words from anchors only, forward first and then backward through the
// gaddag, with cross words answered by precomputed masks.
pub struct Speedy {
    gaddag: Arc<Gaddag>,
    pool: JobPool<CrossChecks>,
}

impl Speedy {
    pub fn new(gaddag: Arc<Gaddag>, num_threads: usize) -> Speedy {
        let shared = Arc::clone(&gaddag);
        Speedy {
            gaddag,
            pool: pool::WorkerPool::new(num_threads, move |job: Job<CrossChecks>| {
                search(&shared, &job)
            }),
        }
    }

    #[inline(always)]
    pub fn gaddag(&self) -> &Arc<Gaddag> {
        &self.gaddag
    }
}

impl MoveGenerator for Speedy {
    fn name(&self) -> &str {
        "speedy"
    }

    fn generate_moves(
        &self,
        board: &Board,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<usize> {
        let cross_checks = CrossChecks::new(board, &self.gaddag);
        movegen::dispatch(
            &self.pool,
            board,
            rack,
            cross_checks,
            &movegen::anchor_cells(board),
            on_move,
        )
    }

    fn kill(&mut self) -> error::Returns<()> {
        self.pool.kill()
    }
}

fn search(gaddag: &Gaddag, job: &Job<CrossChecks>) {
    let mut searcher = Searcher {
        gaddag,
        board: &job.snapshot.board,
        cross_checks: &job.snapshot.extra,
        job,
        forward: Vec::new(),
        backward: Vec::new(),
    };
    searcher.go_forward(job.row, job.col, Gaddag::ROOT, job.rack);
}

struct Searcher<'a> {
    gaddag: &'a Gaddag,
    board: &'a Board,
    cross_checks: &'a CrossChecks,
    job: &'a Job<CrossChecks>,
    // new tiles from the anchor onwards, in board order.
    forward: Vec<Tile>,
    // new tiles before the anchor, nearest first.
    backward: Vec<Tile>,
}

impl Searcher<'_> {
    // Tries each rack tile allowed at (row, col), calling then() with the
    // resulting node and rack. Stops when then() returns false.
    fn try_rack_tiles<F: FnMut(&mut Self, Tile, i32, rack::Rack) -> bool>(
        &mut self,
        row: i8,
        col: i8,
        p: i32,
        rack: rack::Rack,
        mut then: F,
    ) -> bool {
        let allowed = self.cross_checks.get(row, col, self.job.direction);
        for i in rack.distinct_indexes() {
            let rest = rack.consume(i);
            for tile in movegen::tile_choices(rack.tile(i)) {
                if !cross_check::allows(allowed, tile.letter()) {
                    continue;
                }
                let q = self.gaddag.seek(p, tile.letter());
                if q >= 0 && !then(self, tile, q, rest) {
                    return false;
                }
            }
        }
        true
    }

    fn go_forward(&mut self, row: i8, col: i8, p: i32, rack: rack::Rack) -> bool {
        let tile = self.board.tile_at(row, col);
        if !tile.is_none() {
            let q = self.gaddag.seek(p, tile.letter());
            return q < 0 || self.after_forward(row, col, q, rack);
        }
        self.try_rack_tiles(row, col, p, rack, |s, tile, q, rest| {
            s.forward.push(tile);
            let keep_going = s.after_forward(row, col, q, rest);
            s.forward.pop();
            keep_going
        })
    }

    // (row, col) was just filled going forward.
    fn after_forward(&mut self, row: i8, col: i8, q: i32, rack: rack::Rack) -> bool {
        let (dr, dc) = self.job.direction.offsets();
        let (next_row, next_col) = (row + dr, col + dc);
        if !self.board.has_tile(next_row, next_col) {
            // the word may end here, so turn around at the anchor.
            let r = self.gaddag.reverse(q);
            let anchor = (self.job.row, self.job.col);
            if r >= 0 && !self.go_backward(anchor.0 - dr, anchor.1 - dc, r, rack, anchor) {
                return false;
            }
        }
        !self.board.in_bounds(next_row, next_col) || self.go_forward(next_row, next_col, q, rack)
    }

    // start is the leftmost (topmost) new tile so far.
    fn go_backward(
        &mut self,
        row: i8,
        col: i8,
        p: i32,
        rack: rack::Rack,
        start: (i8, i8),
    ) -> bool {
        if !self.board.has_tile(row, col) && self.gaddag.accepts(p) && !self.emit(start) {
            return false;
        }
        if !self.board.in_bounds(row, col) {
            return true;
        }
        let (dr, dc) = self.job.direction.offsets();
        let tile = self.board.tile_at(row, col);
        if !tile.is_none() {
            let q = self.gaddag.seek(p, tile.letter());
            return q < 0 || self.go_backward(row - dr, col - dc, q, rack, start);
        }
        // that anchor's own jobs place this tile.
        if self.board.is_anchor(row, col) {
            return true;
        }
        self.try_rack_tiles(row, col, p, rack, |s, tile, q, rest| {
            s.backward.push(tile);
            let keep_going = s.go_backward(row - dr, col - dc, q, rest, (row, col));
            s.backward.pop();
            keep_going
        })
    }

    fn emit(&self, (row, col): (i8, i8)) -> bool {
        let mut tiles = Vec::with_capacity(self.backward.len() + self.forward.len());
        tiles.extend(self.backward.iter().rev());
        tiles.extend_from_slice(&self.forward);
        let placed = PlacedTiles::new(row, col, self.job.direction, tiles);
        !self.board.validate_move(&placed, self.gaddag) || self.job.emit(placed)
    }
}
