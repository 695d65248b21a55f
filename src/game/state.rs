use std::collections::VecDeque;

use super::command::Direction;

/// An integer coordinate pair on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell one step along `direction`
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.velocity();
        self.offset(dx, dy)
    }
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the grid
    Wall,
    /// Head entered one of its own tail cells
    SelfHit,
}

/// Complete simulation state for one run.
///
/// The head and tail are kept separate: the tail holds only the cells the
/// snake has grown into, most recent at the front (adjacent to the head),
/// and its length equals the number of food items eaten so far. A heading
/// of `None` is the zero-velocity state the snake starts in; it does not
/// move until the first steer command arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub head: Cell,
    pub heading: Option<Direction>,
    pub tail: VecDeque<Cell>,
    pub food: Cell,
    pub running: bool,
    /// Countdown of scheduler calls until the next head advance
    pub next_move: u32,
    pub score: u32,
    pub ticks: u32,
    pub grid_size: usize,
}

impl GameState {
    pub fn new(head: Cell, food: Cell, grid_size: usize, update_frequency: u32) -> Self {
        Self {
            head,
            heading: None,
            tail: VecDeque::new(),
            food,
            running: true,
            next_move: update_frequency,
            score: 0,
            ticks: 0,
            grid_size,
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        let side = self.grid_size as i32;
        cell.x >= 0 && cell.x < side && cell.y >= 0 && cell.y < side
    }

    pub fn tail_contains(&self, cell: Cell) -> bool {
        self.tail.contains(&cell)
    }

    /// True if the head or any tail segment sits on `cell`
    pub fn occupied(&self, cell: Cell) -> bool {
        self.head == cell || self.tail_contains(cell)
    }

    /// Slide the tail one step behind the head: the cell the head just left
    /// becomes the newest segment, and unless the snake grew this tick the
    /// oldest segment is dropped so the length stays constant.
    pub fn advance_tail(&mut self, vacated: Cell, grow: bool) {
        self.tail.push_front(vacated);
        if !grow {
            self.tail.pop_back();
        }
    }

    /// Every cell not occupied by the head or tail
    pub fn free_cells(&self) -> Vec<Cell> {
        let side = self.grid_size as i32;
        let mut free = Vec::with_capacity(self.grid_size * self.grid_size);
        for y in 0..side {
            for x in 0..side {
                let cell = Cell::new(x, y);
                if !self.occupied(cell) {
                    free.push(cell);
                }
            }
        }
        free
    }
}
