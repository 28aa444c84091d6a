#![warn(clippy::all, clippy::pedantic)]

//! The game session state machine.
//!
//! A [`Game`] owns the board and both pieces. An external driver calls
//! [`Game::tick`] on a gravity cadence and relays input through the command
//! methods; all calls must be serialized onto one thread. Rejected moves are
//! silent: they leave the state untouched and emit nothing.

use log::{debug, info, trace};

use crate::board::Board;
use crate::components::{Tetromino, TetrominoType};
use crate::config::GameConfig;
use crate::events::GameListener;
use crate::game::{STARTING_LEVEL, WALL_KICK_OFFSETS, level_for_score, line_clear_points};
use crate::random::Randomizer;
use crate::sound::{Assist, SoundEffect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    /// Terminal. Only read-only queries are meaningful afterwards.
    GameOver,
}

/// Discrete input, for embeddings that queue commands before applying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Drop,
    TogglePause,
}

pub struct Game<R: Randomizer = fastrand::Rng> {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    score: u32,
    level: u32,
    speed: u8,
    status: Status,
    rng: R,
    listener: Option<Box<dyn GameListener>>,
    assist: Option<Box<dyn Assist>>,
}

impl Game<fastrand::Rng> {
    /// Builds a session from configuration, seeding the generator when a seed is set.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::new(config.speed, config.starting_lines, rng)
    }
}

impl<R: Randomizer> Game<R> {
    /// Creates a session with fresh active and look-ahead pieces, then seeds
    /// `starting_lines` rows of garbage. Out-of-range counts seed nothing.
    pub fn new(speed: u8, starting_lines: usize, mut rng: R) -> Self {
        let current = Tetromino::new(TetrominoType::random(&mut rng));
        let next = Tetromino::new(TetrominoType::random(&mut rng));
        let mut board = Board::new();
        board.add_starting_lines(starting_lines, &mut rng);

        info!(
            "New game: speed {speed}, {starting_lines} starting line(s), first piece {:?}",
            current.tetromino_type
        );

        Self {
            board,
            current,
            next,
            score: 0,
            level: STARTING_LEVEL,
            speed,
            status: Status::Running,
            rng,
            listener: None,
            assist: None,
        }
    }

    pub fn set_listener(&mut self, listener: impl GameListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn set_assist(&mut self, assist: impl Assist + 'static) {
        self.assist = Some(Box::new(assist));
    }

    pub fn clear_assist(&mut self) {
        self.assist = None;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> &Tetromino {
        &self.current
    }

    #[must_use]
    pub fn next_piece(&self) -> &Tetromino {
        &self.next
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Configured speed. Only the gravity scheduler interprets it.
    #[must_use]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => {
                self.move_down();
            }
            Command::Drop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    pub fn move_left(&mut self) {
        self.try_shift(-1);
    }

    pub fn move_right(&mut self) {
        self.try_shift(1);
    }

    fn try_shift(&mut self, dx: i32) {
        if !self.is_running() {
            return;
        }
        let mut candidate = self.current;
        candidate.shift(dx);
        if self.board.is_valid_position(&candidate) {
            self.current = candidate;
            trace!("Moved to x={}", self.current.x());
            self.play(SoundEffect::Move);
            self.notify(|l| l.on_board_changed());
        }
    }

    /// Rotates clockwise, trying each wall-kick offset in turn. If none fits
    /// the piece is left exactly as it was.
    pub fn rotate(&mut self) {
        if !self.is_running() {
            return;
        }
        for offset in WALL_KICK_OFFSETS {
            let mut candidate = self.current;
            candidate.rotate();
            candidate.shift(offset);
            if self.board.is_valid_position(&candidate) {
                self.current = candidate;
                trace!("Rotated with kick {offset}");
                self.play(SoundEffect::Rotate);
                self.notify(|l| l.on_board_changed());
                return;
            }
        }
    }

    /// Gravity step. Identical to [`Game::move_down`].
    pub fn tick(&mut self) -> bool {
        self.move_down()
    }

    /// Moves the piece one row down. Returns `true` if it moved; `false` if
    /// the game is not running or the piece locked instead.
    pub fn move_down(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let mut candidate = self.current;
        candidate.move_down();
        if self.board.is_valid_position(&candidate) {
            self.current = candidate;
            self.notify(|l| l.on_board_changed());
            return true;
        }

        self.lock_piece();
        false
    }

    /// Falls until the piece locks, within this call.
    pub fn hard_drop(&mut self) {
        if !self.is_running() {
            return;
        }
        while self.move_down() {}
        self.play(SoundEffect::Drop);
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            Status::Running => self.status = Status::Paused,
            Status::Paused => self.status = Status::Running,
            Status::GameOver => {}
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.is_game_over() {
            return;
        }
        self.status = if paused {
            Status::Paused
        } else {
            Status::Running
        };
    }

    fn lock_piece(&mut self) {
        self.board.place_piece(&self.current);
        debug!(
            "Locked {:?} at ({}, {})",
            self.current.tetromino_type,
            self.current.x(),
            self.current.y()
        );

        let full = self.board.full_lines();
        if !full.is_empty() {
            self.notify(|l| l.on_lines_clearing(&full));
        }

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.play(SoundEffect::LineClear);
            self.award_lines(cleared);
        }

        self.current = self.next;
        self.next = Tetromino::new(TetrominoType::random(&mut self.rng));
        debug!(
            "Spawned {:?}, next {:?}",
            self.current.tetromino_type, self.next.tetromino_type
        );

        if !self.board.is_valid_position(&self.current) {
            self.status = Status::GameOver;
            info!("Game over: score {}, level {}", self.score, self.level);
            self.play(SoundEffect::GameOver);
            self.notify(|l| l.on_game_over());
        }

        self.notify(|l| l.on_board_changed());
    }

    fn award_lines(&mut self, lines: usize) {
        let points = line_clear_points(lines).saturating_mul(self.level);
        self.score = self.score.saturating_add(points);

        let new_level = level_for_score(self.score);
        if new_level != self.level {
            self.level = new_level;
            info!("Reached level {new_level}");
            self.play(SoundEffect::LevelUp);
            let level = self.level;
            self.notify(|l| l.on_level_changed(level));
        }

        let score = self.score;
        self.notify(|l| l.on_score_changed(score));
    }

    fn notify(&mut self, event: impl FnOnce(&mut dyn GameListener)) {
        if let Some(listener) = self.listener.as_deref_mut() {
            event(listener);
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if let Some(assist) = self.assist.as_deref_mut() {
            assist.play(effect);
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
        self.level = level_for_score(score);
    }

    #[cfg(test)]
    pub(crate) fn set_current_piece(&mut self, piece: Tetromino) {
        self.current = piece;
    }
}
