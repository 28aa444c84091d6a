//! Notifications the engine emits while it mutates state.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

/// Observer for game transitions. Every method defaults to a no-op so
/// listeners only implement what they care about.
///
/// Callbacks run synchronously inside the transition that triggers them.
pub trait GameListener {
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_level_changed(&mut self, _level: u32) {}
    /// Fired exactly once per session.
    fn on_game_over(&mut self) {}
    fn on_board_changed(&mut self) {}
    /// Fired with the full row indices (top to bottom) before they are removed.
    fn on_lines_clearing(&mut self, _lines: &[usize]) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LevelChanged(u32),
    GameOver,
    BoardChanged,
    LinesClearing(Vec<usize>),
}

/// Records every event in order. Clones share the same log, so one handle can
/// be given to the game and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Returns and forgets everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl GameListener for EventLog {
    fn on_score_changed(&mut self, score: u32) {
        self.push(GameEvent::ScoreChanged(score));
    }

    fn on_level_changed(&mut self, level: u32) {
        self.push(GameEvent::LevelChanged(level));
    }

    fn on_game_over(&mut self) {
        self.push(GameEvent::GameOver);
    }

    fn on_board_changed(&mut self) {
        self.push(GameEvent::BoardChanged);
    }

    fn on_lines_clearing(&mut self, lines: &[usize]) {
        self.push(GameEvent::LinesClearing(lines.to_vec()));
    }
}

/// Writes notifications to the `log` facade. Board changes are too frequent
/// for anything above debug.
#[derive(Debug, Default)]
pub struct LogListener {
    board_changes: u64,
}

impl LogListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameListener for LogListener {
    fn on_score_changed(&mut self, score: u32) {
        info!("Score: {score}");
    }

    fn on_level_changed(&mut self, level: u32) {
        info!("Level up: {level}");
    }

    fn on_game_over(&mut self) {
        info!("Game over after {} board updates", self.board_changes);
    }

    fn on_board_changed(&mut self) {
        self.board_changes += 1;
    }

    fn on_lines_clearing(&mut self, lines: &[usize]) {
        debug!("Clearing rows {lines:?}");
    }
}
