//! Session controller
//!
//! Owns the screen state machine, the live run (if any) and the
//! leaderboard. Screen transitions are explicit; a request that is not
//! legal from the current screen is ignored and logged, never applied.
//! This is the only place that touches persisted storage.

use crate::highscores::Leaderboard;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Which screen the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
    GameOver,
    Records,
}

impl Screen {
    /// Legal transitions: menu→game, game→{gameover, menu},
    /// gameover→{game, records, menu}, records→menu
    fn can_go(self, to: Screen) -> bool {
        use Screen::*;
        matches!(
            (self, to),
            (Menu, Game)
                | (Game, GameOver)
                | (Game, Menu)
                | (GameOver, Game)
                | (GameOver, Records)
                | (GameOver, Menu)
                | (Records, Menu)
        )
    }
}

/// One player session: screens, the live run and the record table
pub struct Session {
    screen: Screen,
    game: Option<GameState>,
    leaderboard: Leaderboard,
    /// Final stats of the last finished run, shown on the game-over screen
    pub last_score: u64,
    pub last_wave: u32,
}

impl Session {
    /// Start at the menu with the persisted leaderboard loaded
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            game: None,
            leaderboard: Leaderboard::load(),
            last_score: 0,
            last_wave: 1,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Read-only view of the live run, for rendering
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    fn transition(&mut self, to: Screen) -> bool {
        if !self.screen.can_go(to) {
            log::warn!("Ignoring illegal transition {:?} -> {:?}", self.screen, to);
            return false;
        }
        log::info!("Screen {:?} -> {:?}", self.screen, to);
        self.screen = to;
        true
    }

    /// Start a fresh run (from the menu or the game-over screen)
    pub fn start_game(&mut self, seed: u64) {
        if self.transition(Screen::Game) {
            self.game = Some(GameState::new(seed));
        }
    }

    /// Abandon the live run and return to the menu; the run is discarded
    /// and nothing is recorded
    pub fn exit_to_menu(&mut self) {
        if self.transition(Screen::Menu) {
            self.game = None;
        }
    }

    pub fn show_records(&mut self) {
        self.transition(Screen::Records);
    }

    /// Advance the live run by one frame and return its notifications
    ///
    /// Only the `Game` screen runs the loop; a stale tick arriving after
    /// a transition finds no run to mutate and does nothing. A player
    /// death recorded this frame moves to the game-over screen and
    /// persists the run before returning.
    pub fn tick_game(&mut self, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
        if self.screen != Screen::Game {
            return Vec::new();
        }
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };

        tick(game, input);
        let events = game.take_events();

        if game.phase == GamePhase::GameOver {
            self.last_score = game.score;
            self.last_wave = game.wave;
            self.game = None;
            self.transition(Screen::GameOver);
            self.record_run(self.last_score, self.last_wave, now_ms);
        }
        events
    }

    /// Snapshot a finished run into the leaderboard and persist it
    fn record_run(&mut self, score: u64, wave: u32, now_ms: f64) {
        match self.leaderboard.add_record(score, wave, now_ms) {
            Some(rank) => log::info!("Run recorded: score {score}, wave {wave}, rank {rank}"),
            None => log::info!("Run finished off the board: score {score}"),
        }
        // Best-effort; a failed save must not block the transition
        self.leaderboard.save();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
