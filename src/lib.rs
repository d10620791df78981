//! Apple Dodge - A falling-apple arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, difficulty)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input helpers (key mapping, coordinate conversion)
//! - `tuning`: Data-driven game balance
//! - `settings`: Display preferences from the page URL

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (20 ms, 50 Hz)
    pub const SIM_DT: f32 = 0.02;
    /// Simulation timestep in milliseconds (spawn timer bookkeeping)
    pub const TICK_MS: f64 = 20.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions (game pixels, y grows downward)
    pub const VIEWPORT_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player paddle size
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Gap between the paddle and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Falling apple size
    pub const APPLE_WIDTH: f32 = 30.0;
    pub const APPLE_HEIGHT: f32 = 30.0;
}
