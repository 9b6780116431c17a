// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use rand::prelude::*;
use wordbot::{ai, alphabet, bag, board, display, error, game_config, lexicon, movegen, rack, trie};

static COMMANDS: &[&str] = &[
    "best", "board", "draw", "exit", "gen", "help", "lexicon", "moves", "new", "play", "rack",
    "score", "source",
];

static HELP: &str = "\
lexicon FILE [GEN]   load a word list, GEN is brute|smarty|speedy
gen GEN              switch generator
new                  empty board, fresh bag
board [FILE]         show the board, or load rows from FILE
rack TILES           set the rack, '?' for blank
draw                 top up the rack from the bag
moves [N]            list the N best moves (default 10)
best                 what the greedy player would do
score COORD TILES    check and score a move, 8H across or H8 down
play COORD TILES     score and place a move, using up rack tiles
source FILE          run commands from FILE
exit";

struct Shell {
    words: Vec<Vec<alphabet::Letter>>,
    word_list: trie::Trie,
    player: Option<ai::Greedy<Box<dyn movegen::MoveGenerator>>>,
    board: board::Board,
    bag: bag::Bag,
    rack: rack::Rack,
    rng: rand_chacha::ChaCha20Rng,
}

fn parse_move(coord: &str, tiles: &str) -> error::Returns<board::PlacedTiles> {
    let Some((row, col, direction)) = board::parse_coord(coord) else {
        wordbot::return_error!(InvalidInput, format!("bad coordinate {:?}", coord));
    };
    Ok(board::PlacedTiles::new(row, col, direction, alphabet::parse_tiles(tiles)?))
}

impl Shell {
    fn new() -> error::Returns<Shell> {
        let game_config = game_config::make_common_english_game_config();
        let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
        Ok(Shell {
            words: Vec::new(),
            word_list: trie::Trie::new(),
            player: None,
            board: board::Board::new(game_config),
            bag: bag::Bag::new(game_config.alphabet()).shuffle(&mut rng),
            rack: rack::Rack::new(&[])?,
            rng,
        })
    }

    fn use_generator(&mut self, name: &str) -> error::Returns<()> {
        if self.words.is_empty() {
            wordbot::return_error!(InvalidInput, "load a lexicon first".into());
        }
        let t0 = std::time::Instant::now();
        let generator = movegen::new_generator(name, &self.words, num_cpus::get())?;
        if let Some(mut old) = self.player.take() {
            old.kill()?;
        }
        self.player = Some(ai::Greedy::new(generator));
        println!("{:?} for building {}", t0.elapsed(), name);
        Ok(())
    }

    fn player(&self) -> error::Returns<&ai::Greedy<Box<dyn movegen::MoveGenerator>>> {
        match &self.player {
            Some(player) => Ok(player),
            None => {
                wordbot::return_error!(InvalidInput, "load a lexicon first".into());
            }
        }
    }

    fn list_moves(&self, count: usize) -> error::Returns<()> {
        let player = self.player()?;
        let t0 = std::time::Instant::now();
        let mut moves = Vec::new();
        let num_moves = player
            .generator()
            .generate_moves(&self.board, &self.rack, &mut |turn| {
                if let movegen::Turn::Place(m) = turn {
                    moves.push(m);
                }
                true
            })?;
        moves.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.placed.cmp(&b.placed)));
        println!("{:?} for {} moves", t0.elapsed(), num_moves);
        for (i, m) in (1..).zip(moves.iter().take(count)) {
            println!("{:3}. {}", i, m);
        }
        Ok(())
    }

    // Ok(false) to stop.
    fn run(&mut self, strings: &[String]) -> error::Returns<bool> {
        let args = &strings[1..];
        match (strings[0].as_str(), args.len()) {
            ("help", _) => println!("{}", HELP),
            ("exit", _) => return Ok(false),
            ("lexicon", 1 | 2) => {
                let t0 = std::time::Instant::now();
                self.words = lexicon::read_words(&args[0])?;
                self.word_list = trie::Trie::from_words(&self.words);
                println!("{:?} for {} words", t0.elapsed(), self.words.len());
                let name = args.get(1).map_or("speedy", |s| s.as_str());
                self.use_generator(name)?;
            }
            ("gen", 1) => self.use_generator(&args[0])?,
            ("new", 0) => {
                let game_config = self.board.game_config();
                self.board = board::Board::new(game_config);
                self.bag = bag::Bag::new(game_config.alphabet()).shuffle(&mut self.rng);
                self.rack = rack::Rack::new(&[])?;
            }
            ("board", 0) => display::print_board(&self.board),
            ("board", 1) => {
                let text = std::fs::read_to_string(&args[0])?;
                let rows = text.lines().filter(|l| !l.is_empty()).collect::<Vec<_>>();
                self.board = board::Board::from_rows(self.board.game_config(), &rows)?;
                display::print_board(&self.board);
            }
            ("rack", 1) => {
                self.rack = rack::Rack::parse(&args[0])?;
                println!("rack: {}", self.rack);
            }
            ("draw", 0) => {
                let (bag, rack) = self.bag.fill_rack(&self.rack)?;
                self.bag = bag;
                self.rack = rack;
                println!("rack: {}, {} in bag", self.rack, self.bag.count());
            }
            ("moves", 0) => self.list_moves(10)?,
            ("moves", 1) => self.list_moves(args[0].parse()?)?,
            ("best", 0) => {
                let turn = self.player()?.best_move(&self.board, &self.bag, &self.rack)?;
                println!("{}", turn);
            }
            ("score", 2) => {
                let m = parse_move(&args[0], &args[1])?;
                for word in self.board.find_new_words(&m) {
                    println!(
                        "  {} {}",
                        word,
                        if board::WordList::contains(&self.word_list, &word.tiles) {
                            "ok"
                        } else {
                            "not a word"
                        }
                    );
                }
                if self.board.validate_move(&m, &self.word_list) {
                    println!("{} scores {}", m, self.board.score(&m));
                } else {
                    println!("{} is not a legal move", m);
                }
            }
            ("play", 2) => {
                let m = parse_move(&args[0], &args[1])?;
                if !self.board.validate_move(&m, &self.word_list) {
                    wordbot::return_error!(InvalidInput, format!("{} is not a legal move", m));
                }
                let Some(played) = self.rack.play(&m.tiles) else {
                    wordbot::return_error!(
                        InvalidInput,
                        format!("{} needs tiles not on rack {}", m, self.rack)
                    );
                };
                let score = self.board.score(&m);
                self.board.place_tiles(&m)?;
                self.rack = played.leave();
                display::print_board(&self.board);
                println!("{} scores {}, rack: {}", m, score, self.rack);
            }
            _ => println!("invalid input, help for help"),
        }
        Ok(true)
    }
}

fn main() -> error::Returns<()> {
    let mut shell = Shell::new()?;
    let mut rl = rlhelper::new_rl_editor(COMMANDS)?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("bad quoting: {}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            if strings[0] == "source" {
                if strings.len() != 2 {
                    println!("need a file name");
                    continue;
                }
                match std::fs::read_to_string(&strings[1]) {
                    Ok(whole_file) => {
                        let v = cmd_stack.len();
                        for (line_num, line) in whole_file.lines().enumerate() {
                            cmd_stack.push((line.to_string(), Some((strings[1].clone(), line_num + 1))));
                        }
                        cmd_stack[v..].reverse();
                    }
                    Err(err) => println!("cannot open file: {}", err),
                }
                continue;
            }
            match shell.run(&strings) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    println!("{}", err);
                    // a failing script stops there.
                    cmd_stack.clear();
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    if let Some(mut player) = shell.player.take() {
        player.kill()?;
    }
    Ok(())
}
