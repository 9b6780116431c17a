// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::board::{Board, PlacedTiles, WordList};
use super::movegen::{self, Job, JobPool, MoveGenerator, Turn};
use super::trie::Trie;
use super::{error, pool, rack};
use std::sync::Arc;

// Walks the trie from every empty cell, checking cross words as it goes.
pub struct Smarty {
    trie: Arc<Trie>,
    pool: JobPool<()>,
}

impl Smarty {
    pub fn new(trie: Arc<Trie>, num_threads: usize) -> Smarty {
        let shared = Arc::clone(&trie);
        Smarty {
            trie,
            pool: pool::WorkerPool::new(num_threads, move |job: Job<()>| search(&shared, &job)),
        }
    }

    #[inline(always)]
    pub fn trie(&self) -> &Arc<Trie> {
        &self.trie
    }
}

impl MoveGenerator for Smarty {
    fn name(&self) -> &str {
        "smarty"
    }

    fn generate_moves(
        &self,
        board: &Board,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<usize> {
        movegen::dispatch(
            &self.pool,
            board,
            rack,
            (),
            &movegen::empty_cells(board),
            on_move,
        )
    }

    fn kill(&mut self) -> error::Returns<()> {
        self.pool.kill()
    }
}

fn search(trie: &Trie, job: &Job<()>) {
    let board = &job.snapshot.board;
    let (dr, dc) = job.direction.offsets();
    // the word begins at any run of tiles right before the job's cell.
    let mut p = Trie::ROOT;
    for tile in board.grow_word(job.row - dr, job.col - dc, job.direction).tiles {
        p = trie.seek(p, tile.letter());
        if p < 0 {
            return;
        }
    }
    let mut searcher = Searcher {
        trie,
        board,
        job,
        placed: Vec::new(),
    };
    searcher.extend(job.row, job.col, p, job.rack);
}

struct Searcher<'a> {
    trie: &'a Trie,
    board: &'a Board,
    job: &'a Job<()>,
    placed: Vec<Tile>,
}

impl Searcher<'_> {
    // a rack tile next to other tiles must make a real cross word.
    fn cross_word_ok(&self, row: i8, col: i8, tile: Tile) -> bool {
        let across = self.job.direction.other();
        let (dr, dc) = across.offsets();
        if !self.board.has_tile(row - dr, col - dc) && !self.board.has_tile(row + dr, col + dc) {
            return true;
        }
        let mut word = self.board.grow_word(row - dr, col - dc, across).tiles;
        word.push(tile);
        word.extend(self.board.grow_word(row + dr, col + dc, across).tiles);
        self.trie.contains(&word)
    }

    // fills (row, col). returns false once results are no longer wanted.
    fn extend(&mut self, row: i8, col: i8, p: i32, rack: rack::Rack) -> bool {
        let tile = self.board.tile_at(row, col);
        if !tile.is_none() {
            let q = self.trie.seek(p, tile.letter());
            return q < 0 || self.advance(row, col, q, rack);
        }
        for i in rack.distinct_indexes() {
            let rest = rack.consume(i);
            for tile in movegen::tile_choices(rack.tile(i)) {
                let q = self.trie.seek(p, tile.letter());
                if q < 0 || !self.cross_word_ok(row, col, tile) {
                    continue;
                }
                self.placed.push(tile);
                let keep_going = self.advance(row, col, q, rest);
                self.placed.pop();
                if !keep_going {
                    return false;
                }
            }
        }
        true
    }

    // (row, col) was just filled and the walk is at q.
    fn advance(&mut self, row: i8, col: i8, q: i32, rack: rack::Rack) -> bool {
        let (dr, dc) = self.job.direction.offsets();
        let (next_row, next_col) = (row + dr, col + dc);
        if self.trie.accepts(q) && !self.placed.is_empty() && !self.board.has_tile(next_row, next_col) {
            let placed = PlacedTiles::new(
                self.job.row,
                self.job.col,
                self.job.direction,
                self.placed.clone(),
            );
            if self.board.validate_move(&placed, self.trie) && !self.job.emit(placed) {
                return false;
            }
        }
        !self.board.in_bounds(next_row, next_col) || self.extend(next_row, next_col, q, rack)
    }
}
