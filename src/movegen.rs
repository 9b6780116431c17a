// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{Letter, NUM_LETTERS, Tile};
use super::board::{Board, Direction, PlacedTiles};
use super::{brute, error, gaddag, pool, rack, smarty, speedy, trie};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct ScoredMove {
    #[serde(flatten)]
    pub placed: PlacedTiles,
    pub score: i32,
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.placed, self.score)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Turn {
    #[serde(rename = "scored_move")]
    Place(ScoredMove),
    Pass,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Place(m) => m.fmt(f),
            Turn::Pass => write!(f, "pass"),
        }
    }
}

pub trait MoveGenerator {
    fn name(&self) -> &str;

    // Streams every legal placement to on_move in arrival order, stopping
    // early when on_move returns false. Ok(0) means there was nothing to play.
    fn generate_moves(
        &self,
        board: &Board,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<usize>;

    fn kill(&mut self) -> error::Returns<()>;
}

impl<G: MoveGenerator + ?Sized> MoveGenerator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate_moves(
        &self,
        board: &Board,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<usize> {
        (**self).generate_moves(board, rack, on_move)
    }

    fn kill(&mut self) -> error::Returns<()> {
        (**self).kill()
    }
}

pub const GENERATOR_NAMES: [&str; 3] = ["brute", "smarty", "speedy"];

// builds whichever dictionary the named generator walks.
pub fn new_generator(
    name: &str,
    words: &[Vec<Letter>],
    num_threads: usize,
) -> error::Returns<Box<dyn MoveGenerator>> {
    let generator: Box<dyn MoveGenerator> = match name {
        "brute" => Box::new(brute::Brute::new(
            Arc::new(trie::Trie::from_words(words)),
            num_threads,
        )),
        "smarty" => Box::new(smarty::Smarty::new(
            Arc::new(trie::Trie::from_words(words)),
            num_threads,
        )),
        "speedy" => Box::new(speedy::Speedy::new(
            Arc::new(gaddag::Gaddag::from_words(words)),
            num_threads,
        )),
        _ => {
            return_error!(
                InvalidInput,
                format!("unknown generator {:?}, try one of {:?}", name, GENERATOR_NAMES)
            );
        }
    };
    Ok(generator)
}

// What every job of one generate call shares. `extra` is whatever the
// generator derives from the board up front.
pub struct BoardSnapshot<C> {
    pub board: Board,
    pub extra: C,
}

pub struct Job<C> {
    pub snapshot: Arc<BoardSnapshot<C>>,
    pub rack: rack::Rack,
    pub row: i8,
    pub col: i8,
    pub direction: Direction,
    results: mpsc::Sender<PlacedTiles>,
    num_done: Arc<AtomicUsize>,
}

impl<C> Job<C> {
    // false once the caller stopped listening.
    #[inline(always)]
    pub fn emit(&self, placed: PlacedTiles) -> bool {
        self.results.send(placed).is_ok()
    }
}

// a job dropped while unwinding did not finish its search.
impl<C> Drop for Job<C> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.num_done.fetch_add(1, Ordering::Release);
        }
    }
}

pub type JobPool<C> = pool::WorkerPool<Job<C>>;

pub fn empty_cells(board: &Board) -> Vec<(i8, i8, Direction)> {
    let dim = board.dim();
    let mut v = Vec::with_capacity(dim.num_cells() * 2);
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if !board.has_tile(row, col) {
                for direction in Direction::ALL {
                    v.push((row, col, direction));
                }
            }
        }
    }
    v
}

pub fn anchor_cells(board: &Board) -> Vec<(i8, i8, Direction)> {
    board
        .anchors()
        .into_iter()
        .flat_map(|(row, col)| Direction::ALL.map(|direction| (row, col, direction)))
        .collect()
}

// One job per origin. Results are scored here, on the calling thread.
pub fn dispatch<C: Send + Sync + 'static>(
    pool: &JobPool<C>,
    board: &Board,
    rack: &rack::Rack,
    extra: C,
    origins: &[(i8, i8, Direction)],
    on_move: &mut dyn FnMut(Turn) -> bool,
) -> error::Returns<usize> {
    if !pool.is_alive() {
        return_error!(PoolClosed, "generator was already killed".into());
    }
    if origins.len() > pool::JOB_QUEUE_SIZE {
        return_error!(
            InvalidInput,
            format!("board too large: {} jobs", origins.len())
        );
    }
    if rack.is_empty() {
        return Ok(0);
    }
    let snapshot = Arc::new(BoardSnapshot {
        board: board.clone(),
        extra,
    });
    let num_done = Arc::new(AtomicUsize::new(0));
    let (results, received) = mpsc::channel();
    for &(row, col, direction) in origins {
        pool.submit(Job {
            snapshot: Arc::clone(&snapshot),
            rack: *rack,
            row,
            col,
            direction,
            results: results.clone(),
            num_done: Arc::clone(&num_done),
        })?;
    }
    drop(results);
    let mut num_moves = 0;
    let mut stopped = false;
    for placed in received.iter() {
        let score = snapshot.board.score(&placed);
        num_moves += 1;
        if !on_move(Turn::Place(ScoredMove { placed, score })) {
            stopped = true;
            break;
        }
    }
    // the stream ends once every job has been dropped.
    if !stopped {
        let finished = num_done.load(Ordering::Acquire);
        if finished != origins.len() {
            return_error!(
                JobFailed,
                format!(
                    "{} of {} jobs failed after {} moves",
                    origins.len() - finished,
                    origins.len(),
                    num_moves
                )
            );
        }
    }
    Ok(num_moves)
}

// what a rack tile can be played as.
#[inline(always)]
pub fn tile_choices(tile: Tile) -> impl Iterator<Item = Tile> {
    let blank = tile.is_blank();
    let (lo, hi) = if blank {
        (0, NUM_LETTERS)
    } else {
        (tile.letter(), tile.letter() + 1)
    };
    (lo..hi).map(move |letter| Tile::new(letter, blank))
}
