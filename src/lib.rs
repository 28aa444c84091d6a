//! Falling-block puzzle game engine.
//!
//! The engine is the board, the pieces and the [`engine::Game`] state machine.
//! Rendering, input decoding and audio synthesis live outside; they drive the
//! game through its command methods and observe it through
//! [`events::GameListener`] and [`sound::Assist`].

pub mod board;
pub mod components;
pub mod config;
pub mod engine;
pub mod events;
pub mod game;
pub mod highscores;
pub mod random;
pub mod sound;

pub use board::{Board, Cell};
pub use components::{BlockColor, Position, Shape, Tetromino, TetrominoType};
pub use engine::{Command, Game, Status};
pub use events::{EventLog, GameEvent, GameListener};
pub use random::{Randomizer, ScriptedRandom};

#[cfg(test)]
mod tests;
