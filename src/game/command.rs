/// Direction of travel on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit velocity vector for this heading. The y axis grows downward,
    /// matching screen coordinates.
    pub fn velocity(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True if `other` points straight back the way we came
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (dx, dy) = self.velocity();
        let (ox, oy) = other.velocity();
        dx == -ox && dy == -oy
    }
}

/// A command the input layer can send into the simulation. Keeping this a
/// closed enum means an invalid command is unrepresentable at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change the snake's heading at the next tick boundary
    Steer(Direction),
    /// Throw away the current run and start a fresh one
    Restart,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
