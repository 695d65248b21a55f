//! Pocket Snake - a grid Snake game built around a deterministic
//! simulation core
//!
//! The crate splits into:
//! - game: the simulation core (state, tick advancement, collisions)
//! - input: key events mapped to typed commands
//! - render: the drawable snapshot and the terminal renderer
//! - metrics: in-session play statistics
//! - modes: the interactive harness that schedules ticks and frames

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
