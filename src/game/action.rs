/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Discrete input event delivered to a session.
///
/// Commands carry no payload and are independent of any physical input
/// encoding; see [`crate::input::InputHandler`] for the keyboard mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    /// Pause while playing, start otherwise
    TogglePauseOrStart,
    Start,
    Pause,
    Restart,
}

impl Command {
    /// The direction requested by a turn command, if this is one
    pub fn turn(&self) -> Option<Direction> {
        match self {
            Command::TurnUp => Some(Direction::Up),
            Command::TurnDown => Some(Direction::Down),
            Command::TurnLeft => Some(Direction::Left),
            Command::TurnRight => Some(Direction::Right),
            _ => None,
        }
    }
}
