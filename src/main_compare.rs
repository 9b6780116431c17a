// Copyright (C) 2020-2026 Andy Kurnia.

use wordbot::{board, error, fash, game_config, lexicon, movegen, rack};

#[derive(serde::Serialize)]
struct MoveRecord {
    coord: String,
    word: String,
    row: i8,
    col: i8,
    direction: board::Direction,
    score: i32,
}

fn collect_moves(
    generator: &dyn movegen::MoveGenerator,
    board: &board::Board,
    rack: &rack::Rack,
) -> error::Returns<Vec<movegen::ScoredMove>> {
    let mut moves = Vec::new();
    generator.generate_moves(board, rack, &mut |turn| {
        if let movegen::Turn::Place(m) = turn {
            moves.push(m);
        }
        true
    })?;
    // arrival order depends on threads.
    moves.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.placed.cmp(&b.placed)));
    Ok(moves)
}

fn write_csv(path: &str, moves: &[movegen::ScoredMove]) -> error::Returns<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for m in moves {
        writer.serialize(MoveRecord {
            coord: m.placed.coord(),
            word: m.placed.word(),
            row: m.placed.row,
            col: m.placed.col,
            direction: m.placed.direction,
            score: m.score,
        })?;
    }
    writer.flush()?;
    Ok(())
}

// compare words.txt RACK [board.txt]
// board.txt has one line per row, '.' for empty cells.
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 3 {
        println!("args:\n  compare words.txt RACK [board.txt]");
        return Ok(());
    }
    let words = lexicon::read_words(&args[1])?;
    let rack = rack::Rack::parse(&args[2])?;
    let board = match args.get(3) {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let rows = text.lines().filter(|l| !l.is_empty()).collect::<Vec<_>>();
            board::Board::from_rows(game_config::make_common_english_game_config(), &rows)?
        }
        None => board::Board::default(),
    };

    let num_threads = num_cpus::get();
    let mut results = Vec::new();
    for name in movegen::GENERATOR_NAMES {
        let t0 = std::time::Instant::now();
        let mut generator = movegen::new_generator(name, &words, num_threads)?;
        let built = t0.elapsed();
        let t0 = std::time::Instant::now();
        let moves = collect_moves(generator.as_ref(), &board, &rack)?;
        println!(
            "{}: {} moves, {:?} to build, {:?} to generate",
            name,
            moves.len(),
            built,
            t0.elapsed()
        );
        generator.kill()?;
        write_csv(&format!("{}.csv", name), &moves)?;
        if let Some(best) = moves.first() {
            println!("  best: {}", best);
        }
        results.push((name, moves));
    }

    let Some((_, reference)) = results.iter().find(|(name, _)| *name == "brute") else {
        return Ok(());
    };
    let reference = reference.iter().collect::<fash::MyHashSet<_>>();
    for (name, moves) in results.iter() {
        let found = moves.iter().collect::<fash::MyHashSet<_>>();
        let mut extra = found.difference(&reference).collect::<Vec<_>>();
        let mut missing = reference.difference(&found).collect::<Vec<_>>();
        extra.sort_unstable();
        missing.sort_unstable();
        if moves.len() != found.len() {
            println!("{}: {} duplicates", name, moves.len() - found.len());
        }
        for m in extra {
            println!("{}: extra {}", name, m);
        }
        for m in missing {
            println!("{}: missing {}", name, m);
        }
    }

    Ok(())
}
