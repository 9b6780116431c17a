// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordbot::alphabet::{Letter, Tile, fmt_rack, parse_tiles};
use wordbot::board::{Board, Direction, PlacedTiles};
use wordbot::movegen::{self, MoveGenerator, ScoredMove, Turn};
use wordbot::rack::Rack;

fn letters(words: &[&str]) -> Vec<Vec<Letter>> {
    words
        .iter()
        .map(|w| w.bytes().map(|b| b.to_ascii_uppercase() - b'A').collect())
        .collect()
}

fn mv(row: i8, col: i8, direction: Direction, s: &str) -> PlacedTiles {
    PlacedTiles::new(row, col, direction, parse_tiles(s).unwrap())
}

fn board_with(moves: &[PlacedTiles]) -> Board {
    let mut board = Board::default();
    for m in moves {
        board.place_tiles(m).unwrap();
    }
    board
}

fn all_moves(generator: &dyn MoveGenerator, board: &Board, rack: &str) -> Vec<ScoredMove> {
    let rack = Rack::parse(rack).unwrap();
    let mut moves = Vec::new();
    let num_moves = generator
        .generate_moves(board, &rack, &mut |turn| {
            match turn {
                Turn::Place(m) => moves.push(m),
                Turn::Pass => panic!("generators do not pass"),
            }
            true
        })
        .unwrap();
    assert_eq!(num_moves, moves.len());
    moves.sort_unstable();
    moves
}

// every generator must find exactly what brute force finds.
fn assert_all_agree(words: &[Vec<Letter>], board: &Board, rack: &str) -> Vec<ScoredMove> {
    let mut generators = movegen::GENERATOR_NAMES
        .iter()
        .map(|name| movegen::new_generator(name, words, 3).unwrap())
        .collect::<Vec<_>>();
    let expected = all_moves(generators[0].as_ref(), board, rack);
    let mut deduped = expected.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), expected.len(), "brute repeated a move");
    for generator in generators.iter().skip(1) {
        let found = all_moves(generator.as_ref(), board, rack);
        assert_eq!(found, expected, "{} disagrees on rack {}", generator.name(), rack);
    }
    for generator in generators.iter_mut() {
        generator.kill().unwrap();
    }
    expected
}

#[test]
fn first_move_goes_through_the_star() {
    let words = letters(&["DOG", "GOD", "DO", "GO", "OD"]);
    let moves = assert_all_agree(&words, &Board::default(), "DOG");
    assert!(!moves.is_empty());
    let star = mv(7, 7, Direction::Horizontal, "DOG");
    assert!(moves.iter().any(|m| m.placed == star && m.score == 10));
    for m in &moves {
        let covers_star = (0..m.placed.tiles.len() as i8).any(|i| match m.placed.direction {
            Direction::Horizontal => m.placed.row == 7 && m.placed.col + i == 7,
            Direction::Vertical => m.placed.col == 7 && m.placed.row + i == 7,
        });
        assert!(covers_star, "{} misses the star", m);
    }
}

#[test]
fn plays_through_existing_tiles() {
    let words = letters(&["CAB", "AB", "BA"]);
    let board = board_with(&[mv(7, 6, Direction::Horizontal, "CAB")]);
    let moves = assert_all_agree(&words, &board, "BC");
    // C above the A and B below it spell CAB downwards.
    let down = ScoredMove {
        placed: mv(6, 7, Direction::Vertical, "CB"),
        score: 7,
    };
    assert!(moves.contains(&down));
}

#[test]
fn oats_hangs_off_dog() {
    let words = letters(&["DOG", "OATS", "OAT", "AT", "TA", "AS", "TO", "SO"]);
    let board = board_with(&[mv(7, 7, Direction::Horizontal, "DOG")]);
    let moves = assert_all_agree(&words, &board, "ATS");
    assert!(moves.iter().any(|m| m.placed == mv(8, 8, Direction::Vertical, "ATS")));
}

#[test]
fn blanks_and_repeated_tiles() {
    let words = letters(&["AA", "AB", "BA", "BAA", "ABA", "CAB", "AAH", "BAH", "HA", "AH"]);
    let board = board_with(&[
        mv(7, 6, Direction::Horizontal, "CAB"),
        mv(8, 8, Direction::Vertical, "AH"),
    ]);
    let moves = assert_all_agree(&words, &board, "AA?");
    assert!(moves.iter().any(|m| m.placed.tiles.iter().any(|t| t.is_blank())));
    assert!(moves.iter().all(|m| !m.placed.tiles.is_empty()));
}

#[test]
fn nothing_to_play() {
    let words = letters(&["CAT"]);
    let board = board_with(&[mv(7, 7, Direction::Horizontal, "CAT")]);
    assert!(assert_all_agree(&words, &board, "QZ").is_empty());
    assert!(assert_all_agree(&words, &board, "").is_empty());
}

static SMALL_WORDS: &[&str] = &[
    "AT", "TA", "AN", "NA", "AS", "IS", "IT", "TI", "TO", "ON", "NO", "SO", "OS", "IN", "RE", "ER",
    "EN", "NE", "ES", "ET", "TE", "ATE", "EAT", "TEA", "SAT", "SET", "SIT", "NOT", "TON", "TEN",
    "NET", "RAT", "TAR", "ART", "STAR", "RATS", "ARTS", "TARS", "NEST", "SENT", "TENS", "REST",
    "ONE", "EON", "SON", "NOS", "TOE", "TOES", "RAN", "EAR", "ERA", "ARE", "SEA", "TIN", "NIT",
    "SIN", "INS", "RIN", "IRE", "SIRE", "RISE", "TIRE", "RITE", "STIR", "SNORT", "STONE", "ONSET",
    "NOTES", "TONES", "RATE", "TEAR", "TARE", "STARE", "TEARS",
];

#[test]
fn agree_on_random_positions() {
    let words = letters(SMALL_WORDS);
    let mut generators = movegen::GENERATOR_NAMES
        .iter()
        .map(|name| movegen::new_generator(name, &words, 4).unwrap())
        .collect::<Vec<_>>();
    let trie = wordbot::trie::Trie::from_words(&words);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(2026);
    let pool = parse_tiles("AEIOSTRN").unwrap();
    let mut board = Board::default();
    for _ in 0..12 {
        let rack = (0..4)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect::<Vec<_>>();
        let rack = fmt_rack(&rack);
        let expected = all_moves(generators[0].as_ref(), &board, &rack);
        for generator in generators.iter().skip(1) {
            assert_eq!(
                all_moves(generator.as_ref(), &board, &rack),
                expected,
                "{} disagrees on rack {}",
                generator.name(),
                rack
            );
        }
        for m in &expected {
            assert!(board.validate_move(&m.placed, &trie));
            assert_eq!(board.score(&m.placed), m.score);
        }
        // grow the position with the top scoring move.
        let best = expected
            .iter()
            .max_by(|a, b| a.score.cmp(&b.score).then(b.placed.cmp(&a.placed)));
        if let Some(best) = best {
            let before = board.num_tiles();
            board.place_tiles(&best.placed).unwrap();
            assert_eq!(board.num_tiles() as usize, before as usize + best.placed.tiles.len());
        }
    }
    assert!(board.num_tiles() > 0);
    for generator in generators.iter_mut() {
        generator.kill().unwrap();
    }
}

#[test]
fn full_racks_agree_near_the_edges() {
    let mut word_list = SMALL_WORDS.to_vec();
    word_list.extend([
        "RETAINS", "STAINER", "NASTIER", "RETINAS", "SENATOR", "TREASON", "ATONERS", "ORIENTS",
        "STONIER", "ROASTS", "TOASTER", "ROTATES",
    ]);
    let words = letters(&word_list);
    let mut generators = ["smarty", "speedy"]
        .iter()
        .map(|name| movegen::new_generator(name, &words, 4).unwrap())
        .collect::<Vec<_>>();
    let trie = wordbot::trie::Trie::from_words(&words);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7007);
    let pool = parse_tiles("AEIOSTRN").unwrap();
    // words already along the top and left edges.
    let mut board = board_with(&[
        mv(0, 10, Direction::Horizontal, "STONE"),
        mv(10, 0, Direction::Vertical, "TEARS"),
    ]);
    let mut num_edge_moves = 0;
    for step in 0..10 {
        let mut rack = (0..7)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect::<Vec<_>>();
        if step % 2 == 1 {
            rack[0] = Tile::blank();
        }
        let rack = fmt_rack(&rack);
        let expected = all_moves(generators[0].as_ref(), &board, &rack);
        assert_eq!(
            all_moves(generators[1].as_ref(), &board, &rack),
            expected,
            "speedy disagrees on rack {}",
            rack
        );
        for m in &expected {
            assert!(board.validate_move(&m.placed, &trie));
            assert_eq!(board.score(&m.placed), m.score);
            let main = &board.find_new_words(&m.placed)[0];
            let (dr, dc) = main.direction.offsets();
            let last = main.tiles.len() as i8 - 1;
            let (end_row, end_col) = (main.row + dr * last, main.col + dc * last);
            if main.row == 0 || main.col == 0 || end_row == 14 || end_col == 14 {
                num_edge_moves += 1;
            }
        }
        let best = expected
            .iter()
            .max_by(|a, b| a.score.cmp(&b.score).then(b.placed.cmp(&a.placed)));
        if let Some(best) = best {
            board.place_tiles(&best.placed).unwrap();
        }
    }
    assert!(num_edge_moves > 0);
    for generator in generators.iter_mut() {
        generator.kill().unwrap();
    }
}

#[test]
fn moves_run_up_to_the_edge() {
    let words = letters(&["CAB", "AB", "BA", "AA", "ABA", "BAA"]);
    let board = board_with(&[
        mv(0, 12, Direction::Horizontal, "CAB"),
        mv(13, 0, Direction::Vertical, "AB"),
    ]);
    let moves = assert_all_agree(&words, &board, "AABC");
    for (placed, score) in [
        // BA down the right edge.
        (mv(1, 14, Direction::Vertical, "A"), 4),
        // BAA down the right edge.
        (mv(1, 14, Direction::Vertical, "AA"), 5),
        // AA on a double word, ending at the right edge, under AB.
        (mv(1, 13, Direction::Horizontal, "AA"), 12),
        // CAB down to the bottom edge.
        (mv(12, 0, Direction::Vertical, "C"), 7),
    ] {
        let m = ScoredMove { placed, score };
        assert!(moves.contains(&m), "missing {}", m);
    }
}

#[test]
fn seven_tiles_earn_the_bingo_bonus() {
    let words = letters(&["RETAINS", "STAINER", "NASTIER", "RETINAS", "RETAIN"]);
    let moves = assert_all_agree(&words, &Board::default(), "AEINRST");
    // DL under the I, doubled by the star, plus 50.
    let bingo = ScoredMove {
        placed: mv(7, 7, Direction::Horizontal, "RETAINS"),
        score: 66,
    };
    assert!(moves.contains(&bingo));
    let six = ScoredMove {
        placed: mv(7, 7, Direction::Horizontal, "RETAIN"),
        score: 14,
    };
    assert!(moves.contains(&six));
    for m in &moves {
        if m.placed.tiles.len() == 7 {
            assert!(m.score > 50, "{}", m);
        } else {
            assert!(m.score < 50, "{}", m);
        }
    }
}

#[test]
fn early_stop_leaves_the_generator_usable() {
    let words = letters(&["DOG", "GOD", "DO", "GO", "OD"]);
    let board = Board::default();
    let rack = Rack::parse("DOG").unwrap();
    for name in movegen::GENERATOR_NAMES {
        let mut generator = movegen::new_generator(name, &words, 2).unwrap();
        let mut seen = 0;
        let num_moves = generator
            .generate_moves(&board, &rack, &mut |_| {
                seen += 1;
                false
            })
            .unwrap();
        assert_eq!((seen, num_moves), (1, 1));
        let all = all_moves(generator.as_ref(), &board, "DOG");
        assert!(all.len() > 1);
        generator.kill().unwrap();
        assert!(generator.kill().is_err());
    }
}
