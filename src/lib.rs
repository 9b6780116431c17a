// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod ai;
pub mod alphabet;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod brute;
pub mod cross_check;
pub mod display;
pub mod fash;
pub mod gaddag;
pub mod game;
pub mod game_config;
pub mod lexicon;
pub mod matrix;
pub mod movegen;
pub mod pool;
pub mod rack;
pub mod smarty;
pub mod speedy;
pub mod trie;
