// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::board::{Board, PlacedTiles};
use super::fash::MyHashSet;
use super::movegen::{self, Job, JobPool, MoveGenerator, Turn};
use super::trie::Trie;
use super::{error, pool, rack};
use std::sync::Arc;

// Tries every arrangement of the rack on every empty cell and keeps whatever
// the board accepts. Slow, and the reference the other generators are held to.
pub struct Brute {
    trie: Arc<Trie>,
    pool: JobPool<Vec<Vec<Tile>>>,
}

impl Brute {
    pub fn new(trie: Arc<Trie>, num_threads: usize) -> Brute {
        let shared = Arc::clone(&trie);
        Brute {
            trie,
            pool: pool::WorkerPool::new(num_threads, move |job: Job<Vec<Vec<Tile>>>| {
                search(&shared, &job)
            }),
        }
    }

    #[inline(always)]
    pub fn trie(&self) -> &Arc<Trie> {
        &self.trie
    }
}

// Every ordered selection of one or more rack tiles, blanks as each letter,
// without repeats.
pub fn arrangements(rack: &rack::Rack) -> Vec<Vec<Tile>> {
    fn go(rack: rack::Rack, word: &mut Vec<Tile>, seen: &mut MyHashSet<Vec<Tile>>) {
        for i in 0..rack.len() {
            if !rack.can_consume(i) {
                continue;
            }
            for tile in movegen::tile_choices(rack.tile(i)) {
                word.push(tile);
                seen.insert(word.clone());
                go(rack.consume(i), word, seen);
                word.pop();
            }
        }
    }
    let mut seen = MyHashSet::default();
    go(*rack, &mut Vec::new(), &mut seen);
    let mut v = seen.into_iter().collect::<Vec<_>>();
    v.sort_unstable();
    v
}

impl MoveGenerator for Brute {
    fn name(&self) -> &str {
        "brute"
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
            arrangements(rack),
            &movegen::empty_cells(board),
            on_move,
        )
    }

    fn kill(&mut self) -> error::Returns<()> {
        self.pool.kill()
    }
}

fn search(trie: &Trie, job: &Job<Vec<Vec<Tile>>>) {
    let board = &job.snapshot.board;
    for word in job.snapshot.extra.iter() {
        let placed = PlacedTiles::new(job.row, job.col, job.direction, word.clone());
        if board.validate_move(&placed, trie)
            && job.rack.play(&placed.tiles).is_some()
            && !job.emit(placed)
        {
            return;
        }
    }
}
