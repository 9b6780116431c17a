// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout<'a>,
    rack_size: u8,
    num_players: u8,
    num_passes_to_end: u8,
    bingo_bonus: i32,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &'a board_layout::BoardLayout<'a> {
        match self {
            GameConfig::Static(x) => x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    // consecutive passes (across all players) that end the game.
    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_passes_to_end,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        match self {
            GameConfig::Static(x) => {
                if num_played >= x.rack_size as usize {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub static COMMON_ENGLISH_GAME_CONFIG: GameConfig = GameConfig::Static(StaticGameConfig {
    alphabet: &alphabet::ENGLISH_ALPHABET,
    board_layout: &board_layout::COMMON_BOARD_LAYOUT,
    rack_size: 7,
    num_players: 2,
    num_passes_to_end: 2,
    bingo_bonus: 50,
});

#[inline(always)]
pub fn make_common_english_game_config() -> &'static GameConfig<'static> {
    &COMMON_ENGLISH_GAME_CONFIG
}
