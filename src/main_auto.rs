// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordbot::{ai, board, display, error, game, lexicon, movegen, trie};

// auto words.txt [seed] [generator]
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:\n  auto words.txt [seed] [{}]",
            movegen::GENERATOR_NAMES.join("|")
        );
        return Ok(());
    }
    let words = lexicon::read_words(&args[1])?;
    let seed = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random(),
    };
    let generator_name = args.get(3).map_or("speedy", |s| s.as_str());

    let t0 = std::time::Instant::now();
    let word_list = trie::Trie::from_words(&words);
    let mut player = ai::Greedy::new(movegen::new_generator(
        generator_name,
        &words,
        num_cpus::get(),
    )?);
    println!("{:?} for loading {} words", t0.elapsed(), words.len());

    println!("\nplaying self with seed {}", seed);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    let t0 = std::time::Instant::now();
    let record = game::play_game(
        board::Board::default(),
        &word_list,
        &[&player, &player],
        &mut rng,
    )?;
    let elapsed = t0.elapsed();

    for (i, turn) in (1..).zip(record.turns.iter()) {
        println!(
            "{:3}. p{} {:7} -> {:7} {:20} total {}",
            i,
            turn.player + 1,
            turn.rack,
            turn.leave,
            turn.turn.to_string(),
            turn.total
        );
    }
    display::print_board(&record.board);
    for (i, score) in (1..).zip(record.scores.iter()) {
        print!("player {}: {}, ", i, score);
    }
    match record.winner() {
        Some(winner) => println!("player {} wins", winner + 1),
        None => println!("tie"),
    }
    println!("{:?} for {} turns", elapsed, record.turns.len());

    player.kill()?;
    Ok(())
}
