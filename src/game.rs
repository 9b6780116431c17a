// Copyright (C) 2020-2026 Andy Kurnia.

use super::ai::Ai;
use super::board::{Board, WordList};
use super::movegen::Turn;
use super::{alphabet, bag, error, rack};
use rand::prelude::*;

#[derive(Clone, Debug, serde::Serialize)]
pub struct GameTurn {
    pub player: usize,
    pub name: String,
    // before the turn, blanks as '?'.
    pub rack: String,
    // what is kept after playing, before drawing.
    pub leave: String,
    pub turn: Turn,
    pub total: i32,
}

pub struct GameRecord {
    pub board: Board,
    pub turns: Vec<GameTurn>,
    pub scores: Vec<i32>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<usize> {
        let best = *self.scores.iter().max()?;
        let mut leaders = (0..self.scores.len()).filter(|&i| self.scores[i] == best);
        let first = leaders.next()?;
        leaders.next().is_none().then_some(first)
    }
}

// Players take turns in seat order from a shuffled bag. A move the board
// rejects, or one using tiles the player does not hold, is an error. The game
// ends when a player goes out with the bag empty, or after enough
// consecutive passes.
pub fn play_game(
    board: Board,
    word_list: &dyn WordList,
    players: &[&dyn Ai],
    rng: &mut dyn RngCore,
) -> error::Returns<GameRecord> {
    if players.is_empty() {
        return_error!(InvalidInput, "a game needs players".into());
    }
    let game_config = board.game_config();
    let mut board = board;
    let mut bag = bag::Bag::new(game_config.alphabet()).shuffle(rng);
    let mut racks = Vec::with_capacity(players.len());
    for _ in players {
        let (rest, rack) = bag.fill_rack(&rack::Rack::new(&[])?)?;
        bag = rest;
        racks.push(rack);
    }
    let mut scores = vec![0; players.len()];
    let mut turns = Vec::new();
    let mut num_passes = 0;
    let mut player = 0;
    loop {
        let ai = players[player];
        let rack = racks[player];
        let mut chosen = Turn::Pass;
        ai.find_move(&board, &bag, &rack, &mut |turn| {
            chosen = turn;
            true
        })?;
        let mut leave = rack;
        let turn = match chosen {
            Turn::Place(mut m) => {
                if !board.validate_move(&m.placed, word_list) {
                    return_error!(InvalidInput, format!("{} played {}, not a legal move", ai.name(), m));
                }
                let Some(played) = rack.play(&m.placed.tiles) else {
                    return_error!(
                        InvalidInput,
                        format!("{} played {} from rack {}", ai.name(), m, rack)
                    );
                };
                m.score = board.score(&m.placed);
                board.place_tiles(&m.placed)?;
                scores[player] += m.score;
                leave = played.leave();
                let (rest, refilled) = bag.fill_rack(&played)?;
                bag = rest;
                racks[player] = refilled;
                num_passes = 0;
                Turn::Place(m)
            }
            Turn::Pass => {
                num_passes += 1;
                Turn::Pass
            }
        };
        turns.push(GameTurn {
            player,
            name: ai.name(),
            rack: rack.to_string(),
            leave: alphabet::fmt_rack(&leave.remaining()),
            turn,
            total: scores[player],
        });
        if racks[player].is_empty() || num_passes >= game_config.num_passes_to_end() as usize {
            break;
        }
        player = (player + 1) % players.len();
    }
    Ok(GameRecord {
        board,
        turns,
        scores,
    })
}
