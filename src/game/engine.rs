use rand::Rng;

use super::{
    command::Direction,
    config::GameConfig,
    state::{Cell, CollisionKind, GameState},
};

/// Terminal transition reported to the surrounding application. Emitted
/// exactly once; later ticks on a stopped state are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The run ended in a collision
    GameOver(CollisionKind),
    /// The snake filled the entire grid and there is nowhere left to put
    /// food. Counted as a win, not a loss.
    BoardFull,
}

/// Outcome of one scheduler call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing happened: the run is over, the snake has no heading yet, or
    /// the frame gate has not elapsed
    Skipped,
    /// The head moved one cell
    Advanced { ate_food: bool },
    /// The run just ended
    Terminal(GameEvent),
}

/// The simulation core. Owns the configuration and the food RNG; the
/// caller owns the `GameState` and hands it in mutably per operation.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh run: head at the origin with no heading, empty tail,
    /// food on a random cell other than the origin.
    pub fn reset(&mut self) -> GameState {
        let mut state = GameState::new(
            Cell::new(0, 0),
            Cell::new(0, 0),
            self.config.grid_size,
            self.config.update_frequency,
        );
        // grid_size >= 2 is validated at startup, so a free cell exists
        if let Some(food) = self.spawn_food(&state) {
            state.food = food;
        }
        state
    }

    /// Store a new heading, taking effect at the next tick boundary. A
    /// command pointing straight back along the current heading is ignored,
    /// the conventional rule that keeps a turn from being an instant loss.
    pub fn set_direction(&self, state: &mut GameState, direction: Direction) {
        if !state.running {
            return;
        }
        if let Some(current) = state.heading {
            if current.is_opposite(direction) {
                return;
            }
        }
        state.heading = Some(direction);
    }

    /// Advance the simulation by one scheduler call.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if !state.running {
            return TickResult::Skipped;
        }
        let Some(heading) = state.heading else {
            // Zero velocity: the snake has not been steered yet
            return TickResult::Skipped;
        };

        // Frame gate: only every update_frequency-th call moves the head
        if state.next_move > 1 {
            state.next_move -= 1;
            return TickResult::Skipped;
        }
        state.next_move = self.config.update_frequency;

        let new_head = state.head.stepped(heading);

        if !state.in_bounds(new_head) {
            state.running = false;
            return TickResult::Terminal(GameEvent::GameOver(CollisionKind::Wall));
        }
        if state.tail_contains(new_head) {
            state.running = false;
            return TickResult::Terminal(GameEvent::GameOver(CollisionKind::SelfHit));
        }

        let ate_food = new_head == state.food;
        let vacated = state.head;
        state.head = new_head;
        state.advance_tail(vacated, ate_food);
        state.ticks += 1;

        if ate_food {
            state.score += 1;
            match self.spawn_food(state) {
                Some(food) => state.food = food,
                None => {
                    state.running = false;
                    return TickResult::Terminal(GameEvent::BoardFull);
                }
            }
        }

        TickResult::Advanced { ate_food }
    }

    /// Pick a food cell uniformly from the cells the snake does not occupy.
    /// `None` means the snake fills the grid.
    fn spawn_food(&mut self, state: &GameState) -> Option<Cell> {
        let free = state.free_cells();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }
}
