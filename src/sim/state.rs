//! Game state and core simulation types
//!
//! One `GameState` owns the whole session: player, apples, difficulty,
//! spawn timer and RNG. Subsystems receive it by `&mut` and never keep
//! state of their own.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Apples falling, input accepted
    Playing,
    /// Player was hit; everything is frozen until restart
    GameOver,
}

/// Notable things that happened during a tick, in order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new apple entered above the viewport
    Spawned { id: u32 },
    /// An apple left the bottom edge
    Scored { score: u64 },
    /// Difficulty stepped up after a point
    DifficultyRaised {
        fall_speed: f64,
        spawn_cap: u32,
        spawn_interval_ms: f64,
    },
    /// The player was hit
    GameOver { score: u64 },
}

/// The player's paddle. Only `x` ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: VIEWPORT_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            y: VIEWPORT_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

impl Player {
    /// Largest allowed `x` (paddle flush with the right edge)
    #[inline]
    pub fn max_x(&self) -> f32 {
        (VIEWPORT_WIDTH - self.width).max(0.0)
    }

    /// Move to `x`, clamped to the viewport
    pub fn set_x(&mut self, x: f32) {
        self.x = x.clamp(0.0, self.max_x());
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A falling apple
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Apple {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// An in-progress pointer or touch drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer x when the drag began
    pub origin_x: f32,
    /// Player x when the drag began
    pub start_x: f32,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Apples dodged
    pub score: u64,
    /// Pixels per tick
    pub fall_speed: f64,
    /// Maximum apples alive at once
    pub spawn_cap: u32,
    /// Current spawn timer period (ms)
    pub spawn_interval_ms: f64,
    /// Time since the spawn timer last fired or was rescheduled (ms)
    pub spawn_clock_ms: f64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub player: Player,
    /// Live apples (sorted by id)
    pub apples: Vec<Apple>,
    /// Active drag, if any
    pub drag: Option<DragState>,
    /// Events not yet consumed by the host
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create and start a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create and start a session with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            fall_speed: tuning.base_fall_speed,
            spawn_cap: tuning.initial_spawn_cap,
            spawn_interval_ms: tuning.base_spawn_interval_ms,
            tuning,
            score: 0,
            spawn_clock_ms: 0.0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Player::default(),
            apples: Vec::new(),
            drag: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.start();
        state
    }

    /// Reset everything to initial values and resume play
    pub fn start(&mut self) {
        self.score = 0;
        self.fall_speed = self.tuning.base_fall_speed;
        self.spawn_cap = self.tuning.initial_spawn_cap;
        self.spawn_interval_ms = self.tuning.base_spawn_interval_ms;
        self.spawn_clock_ms = 0.0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.player = Player::default();
        self.apples.clear();
        self.drag = None;
        self.events.clear();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.next_id = 1;

        log::info!("Game started (seed {})", self.seed);
    }

    /// Start over with a fresh seed
    pub fn restart(&mut self, seed: u64) {
        self.seed = seed;
        self.start();
    }

    /// Freeze the session. Only the first call has any effect.
    pub fn end(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.drag = None;
        self.events.push(GameEvent::GameOver { score: self.score });

        log::info!("Game over at score {} (tick {})", self.score, self.time_ticks);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create an apple just above the top edge at a random column
    pub fn spawn_apple(&mut self) -> u32 {
        let max_x = VIEWPORT_WIDTH - APPLE_WIDTH;
        let x = if max_x > 0.0 {
            self.rng.random_range(0.0..max_x)
        } else {
            0.0
        };

        let id = self.next_entity_id();
        self.apples.push(Apple {
            id,
            x,
            y: -APPLE_HEIGHT,
            width: APPLE_WIDTH,
            height: APPLE_HEIGHT,
        });
        self.events.push(GameEvent::Spawned { id });
        id
    }

    /// Hand pending events to the caller
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.fall_speed, 2.0);
        assert_eq!(state.spawn_cap, 1);
        assert_eq!(state.spawn_interval_ms, 1500.0);
        assert!(state.apples.is_empty());
        assert_eq!(state.player.x, VIEWPORT_WIDTH / 2.0 - PLAYER_WIDTH / 2.0);
        assert_eq!(
            state.player.y,
            VIEWPORT_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN
        );
    }

    #[test]
    fn test_spawned_apple_is_above_viewport_and_in_bounds() {
        let mut state = GameState::new(42);
        for _ in 0..200 {
            state.spawn_apple();
        }
        for apple in &state.apples {
            assert_eq!(apple.y, -APPLE_HEIGHT);
            assert!(apple.x >= 0.0 && apple.x <= VIEWPORT_WIDTH - APPLE_WIDTH);
        }
        let ids: Vec<u32> = state.apples.iter().map(|a| a.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut state = GameState::new(1);
        state.end();
        state.end();
        let overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        assert!(state.is_over());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(3);
        state.spawn_apple();
        state.score = 12;
        state.fall_speed = 3.5;
        state.spawn_cap = 9;
        state.player.set_x(0.0);
        state.end();

        state.restart(4);
        assert_eq!(state.seed, 4);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.fall_speed, 2.0);
        assert_eq!(state.spawn_cap, 1);
        assert!(state.apples.is_empty());
        assert!(state.events.is_empty());
        assert_eq!(state.player, Player::default());
    }

    #[test]
    fn test_same_seed_spawns_same_columns() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..10 {
            a.spawn_apple();
            b.spawn_apple();
        }
        assert_eq!(a.apples, b.apples);
    }
}
