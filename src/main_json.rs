// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use wordbot::{board, error, game_config, lexicon, movegen, rack};

// lexicon: path to a word list, one word per line.
// rack: labels, '?' for blank.
// board: one string per row, '.' for empty, lowercase for blank-as-letter.
//   leave it out for an empty board.
// count: maximum number of moves returned, best first.
// generator: defaults to speedy.
#[derive(serde::Deserialize)]
struct Question {
    lexicon: String,
    rack: String,
    #[serde(default)]
    board: Vec<String>,
    count: usize,
    #[serde(default)]
    generator: Option<String>,
}

#[derive(serde::Serialize)]
struct Answer<'a> {
    coord: String,
    word: String,
    #[serde(flatten)]
    scored_move: &'a movegen::ScoredMove,
}

// json [question.json]
// reads stdin when no file is given.
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let data = match args.get(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = game_config::make_common_english_game_config();
    let board = if question.board.is_empty() {
        board::Board::new(game_config)
    } else {
        board::Board::from_rows(game_config, &question.board)?
    };
    let rack = rack::Rack::parse(&question.rack)?;
    let words = lexicon::read_words(&question.lexicon)?;
    let mut generator = movegen::new_generator(
        question.generator.as_deref().unwrap_or("speedy"),
        &words,
        num_cpus::get(),
    )?;

    let mut moves = Vec::new();
    generator.generate_moves(&board, &rack, &mut |turn| {
        if let movegen::Turn::Place(m) = turn {
            moves.push(m);
        }
        true
    })?;
    generator.kill()?;
    moves.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.placed.cmp(&b.placed)));
    moves.truncate(question.count);

    let answer = moves
        .iter()
        .map(|m| Answer {
            coord: m.placed.coord(),
            word: m.placed.word(),
            scored_move: m,
        })
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&answer)?);

    Ok(())
}
