//! The simulation core: grid state, tick advancement, collision rules, and
//! the typed command interface. Nothing in here knows about terminals,
//! timers, or drawing; the surrounding application drives it with
//! `set_direction`/`tick`/`reset` and reads the state back out.

pub mod command;
pub mod config;
pub mod engine;
pub mod state;

pub use command::{Command, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, GameEvent, TickResult};
pub use state::{Cell, CollisionKind, GameState};
