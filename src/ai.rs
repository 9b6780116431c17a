// Copyright (C) 2020-2026 Andy Kurnia.

use super::board::Board;
use super::movegen::{MoveGenerator, ScoredMove, Turn};
use super::{bag, error, rack};

pub trait Ai {
    // diagnostics only.
    fn name(&self) -> String;

    // Reports candidate turns as they are found, then the choice last.
    // Pass is reported when nothing can be played.
    fn find_move(
        &self,
        board: &Board,
        bag: &bag::Bag,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<()>;
}

// Highest score now, ignoring the leave. Only strictly higher scores are
// reported while moves stream in. If a smaller move tied the last one
// reported, it is reported once more at the end.
pub struct Greedy<G: MoveGenerator> {
    generator: G,
}

impl<G: MoveGenerator> Greedy<G> {
    pub fn new(generator: G) -> Greedy<G> {
        Greedy { generator }
    }

    #[inline(always)]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn kill(&mut self) -> error::Returns<()> {
        self.generator.kill()
    }

    // convenience: the last turn find_move reports.
    pub fn best_move(&self, board: &Board, bag: &bag::Bag, rack: &rack::Rack) -> error::Returns<Turn> {
        let mut best = Turn::Pass;
        self.find_move(board, bag, rack, &mut |turn| {
            best = turn;
            true
        })?;
        Ok(best)
    }
}

impl<G: MoveGenerator> Ai for Greedy<G> {
    fn name(&self) -> String {
        format!("greedy-{}", self.generator.name())
    }

    fn find_move(
        &self,
        board: &Board,
        _bag: &bag::Bag,
        rack: &rack::Rack,
        on_move: &mut dyn FnMut(Turn) -> bool,
    ) -> error::Returns<()> {
        let mut best: Option<ScoredMove> = None;
        // whether best is the last turn on_move heard about.
        let mut reported = false;
        let mut listening = true;
        let num_moves = self.generator.generate_moves(board, rack, &mut |turn| {
            let Turn::Place(m) = turn else {
                return true;
            };
            let (higher, preferred) = match &best {
                None => (true, true),
                Some(b) => (
                    m.score > b.score,
                    m.score > b.score || (m.score == b.score && m.placed < b.placed),
                ),
            };
            if higher {
                best = Some(m.clone());
                reported = true;
                listening = on_move(Turn::Place(m));
            } else if preferred {
                best = Some(m);
                reported = false;
            }
            listening
        })?;
        if num_moves == 0 {
            on_move(Turn::Pass);
        } else if listening && !reported {
            // equal scores go to the smaller move, whatever order they arrived in.
            if let Some(m) = best {
                on_move(Turn::Place(m));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::mv;
    use crate::board::Direction;
    use crate::game_config::COMMON_ENGLISH_GAME_CONFIG;
    use crate::smarty::Smarty;
    use crate::trie::Trie;
    use std::sync::Arc;

    fn letters(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'A').collect()
    }

    fn greedy(words: &[&str]) -> Greedy<Smarty> {
        let words = words.iter().map(|w| letters(w)).collect::<Vec<_>>();
        Greedy::new(Smarty::new(Arc::new(Trie::from_words(&words)), 2))
    }

    fn reported_moves(ai: &Greedy<Smarty>, board: &Board, rack: &str) -> Vec<ScoredMove> {
        let bag = bag::Bag::new(COMMON_ENGLISH_GAME_CONFIG.alphabet());
        let rack = rack::Rack::parse(rack).unwrap();
        let mut reported = Vec::new();
        ai.find_move(board, &bag, &rack, &mut |turn| {
            match turn {
                Turn::Place(m) => reported.push(m),
                Turn::Pass => panic!("nothing to pass over"),
            }
            true
        })
        .unwrap();
        reported
    }

    #[test]
    fn reports_only_improvements() {
        let ai = greedy(&["DOG", "GOD", "DO", "GO", "OD"]);
        let reported = reported_moves(&ai, &Board::default(), "DOG");
        let (last, streamed) = reported.split_last().unwrap();
        assert!(streamed.windows(2).all(|w| w[0].score < w[1].score));
        if let Some(prev) = streamed.last() {
            assert!(prev.score < last.score || (prev.score == last.score && last.placed < prev.placed));
        }
        assert_eq!(last.score, 10);
        assert_eq!(ai.name(), "greedy-smarty");
    }

    #[test]
    fn ties_are_reported_once_at_the_end() {
        let ai = greedy(&["DOG", "GOD"]);
        // every placement of either word through the star scores 10.
        for _ in 0..5 {
            let reported = reported_moves(&ai, &Board::default(), "DOG");
            assert!(!reported.is_empty() && reported.len() <= 2);
            assert!(reported.iter().all(|m| m.score == 10));
            assert_eq!(reported.last().unwrap().placed, mv(5, 7, Direction::Vertical, "DOG"));
        }
    }

    #[test]
    fn best_move_breaks_ties_by_position() {
        let ai = greedy(&["DOG", "GOD"]);
        let board = Board::default();
        let bag = bag::Bag::new(COMMON_ENGLISH_GAME_CONFIG.alphabet());
        let best = ai.best_move(&board, &bag, &rack::Rack::parse("DOG").unwrap()).unwrap();
        let Turn::Place(m) = best else {
            panic!("expected a placement");
        };
        assert_eq!(m.score, 10);
        assert_eq!(m.placed, mv(5, 7, Direction::Vertical, "DOG"));
    }

    #[test]
    fn passes_when_nothing_fits() {
        let ai = greedy(&["CAT"]);
        let board = Board::default();
        let bag = bag::Bag::new(COMMON_ENGLISH_GAME_CONFIG.alphabet());
        let best = ai.best_move(&board, &bag, &rack::Rack::parse("DOG").unwrap()).unwrap();
        assert_eq!(best, Turn::Pass);
    }
}
