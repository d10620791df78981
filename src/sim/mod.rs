//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod controller;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use controller::{Direction, InputEvent, apply_input};
pub use state::{Apple, DragState, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
