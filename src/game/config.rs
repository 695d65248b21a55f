use serde::{Deserialize, Serialize};

/// Startup constants for one game. All values are fixed for the lifetime of
/// the engine; restarting a run does not change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Pixel size of one cell, used by the rendered snapshot
    pub cell_size: u32,
    /// Scheduler calls per head advance. The harness drives `tick()` once
    /// per frame; the head only moves every `update_frequency` frames, so
    /// logical game speed stays below the render rate.
    pub update_frequency: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 20,
            update_frequency: 10,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Config where every `tick()` advances the head, handy in tests
    pub fn unthrottled(grid_size: usize) -> Self {
        Self {
            grid_size,
            update_frequency: 1,
            ..Default::default()
        }
    }
}
