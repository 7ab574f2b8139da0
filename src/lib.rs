//! Ball-and-paddle game with a deterministic physics core and a headless
//! benchmark that grades a candidate controller against a reference bot.

pub mod ai;
pub mod config;
pub mod debug;
pub mod error;
pub mod game;
pub mod game_modes;
pub mod ui;
