// Copyright (C) 2020-2026 Andy Kurnia.

use wordbot::{error, gaddag, lexicon, trie};

// buildlex words.txt
// loads the word list and reports how big and how slow each dictionary is.
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!("args:\n  buildlex words.txt");
        return Ok(());
    }

    let t0 = std::time::Instant::now();
    let mut words = lexicon::read_words(&args[1])?;
    println!("{:?} for reading {} words", t0.elapsed(), words.len());

    let t0 = std::time::Instant::now();
    words.sort_unstable();
    words.dedup();
    println!("{:?} for sorting, {} distinct", t0.elapsed(), words.len());

    let t0 = std::time::Instant::now();
    let trie = trie::Trie::from_words(&words);
    println!("{:?} for trie with {} nodes", t0.elapsed(), trie.num_nodes());

    let t0 = std::time::Instant::now();
    let gaddag = gaddag::Gaddag::from_words(&words);
    println!("{:?} for gaddag with {} nodes", t0.elapsed(), gaddag.num_nodes());

    let missing = words
        .iter()
        .filter(|w| !trie.contains_letters(w))
        .count();
    if missing != 0 {
        wordbot::return_error!(Lexicon, format!("{} words did not make it into the trie", missing));
    }

    Ok(())
}
