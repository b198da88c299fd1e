use std::collections::VecDeque;
use std::fmt;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake's body, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Lay out a snake of `length` cells with its head at `head`, trailing
    /// away from `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body }
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Self {
        let body: VecDeque<Position> = cells.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake needs at least one cell");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if position is covered by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Grid, snake and food of one session
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub size: usize,
    pub snake: Snake,
    pub food: Position,
}

impl Board {
    pub fn new(size: usize, snake: Snake, food: Position) -> Self {
        Self { size, snake, food }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    /// All cells not covered by the snake, column by column
    pub fn open_cells(&self) -> Vec<Position> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
            .filter(|&pos| !self.snake.occupies(pos))
            .collect()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Running,
    Paused,
    Over,
}

impl GamePhase {
    /// Label shown to the player
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Ready => "Ready",
            GamePhase::Running => "Playing",
            GamePhase::Paused => "Paused",
            GamePhase::Over => "Game Over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Wall,
    SelfCollision,
    /// Every cell is covered by the snake; this is the winning outcome
    BoardFull,
}

impl TerminationReason {
    pub fn message(&self) -> &'static str {
        match self {
            TerminationReason::Wall => "You hit a wall!",
            TerminationReason::SelfCollision => "You crashed into yourself!",
            TerminationReason::BoardFull => "You filled the board! Incredible!",
        }
    }
}

impl From<CollisionType> for TerminationReason {
    fn from(collision: CollisionType) -> Self {
        match collision {
            CollisionType::Wall => TerminationReason::Wall,
            CollisionType::SelfCollision => TerminationReason::SelfCollision,
        }
    }
}

/// Record kept once a session reaches [`GamePhase::Over`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub reason: TerminationReason,
    pub final_score: u32,
}

impl GameOver {
    pub fn message(&self) -> &'static str {
        self.reason.message()
    }

    /// Overlay text, e.g. "You hit a wall! Score: 30."
    pub fn summary(&self) -> String {
        format!("{} Score: {}.", self.message(), self.final_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(11, 12), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(11, 12));
        assert_eq!(snake.tail(), Position::new(9, 12));
        assert!(snake.occupies(Position::new(10, 12)));
    }

    #[test]
    fn test_snake_push_and_pop() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.push_head(Position::new(6, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 5));

        assert_eq!(snake.pop_tail(), Some(Position::new(3, 5)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_bounds_checking() {
        let board = Board::new(
            24,
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
        );

        assert!(board.is_in_bounds(Position::new(0, 0)));
        assert!(board.is_in_bounds(Position::new(23, 23)));
        assert!(!board.is_in_bounds(Position::new(-1, 0)));
        assert!(!board.is_in_bounds(Position::new(24, 0)));
        assert!(!board.is_in_bounds(Position::new(0, 24)));
    }

    #[test]
    fn test_open_cells_skip_snake() {
        let board = Board::new(
            4,
            Snake::from_cells([Position::new(0, 1), Position::new(0, 0)]),
            Position::new(3, 3),
        );

        let open = board.open_cells();
        assert_eq!(open.len(), 4 * 4 - 2);
        assert_eq!(open[0], Position::new(0, 2));
        assert!(!open.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_termination_summary() {
        let over = GameOver {
            reason: TerminationReason::Wall,
            final_score: 30,
        };
        assert_eq!(over.summary(), "You hit a wall! Score: 30.");
        assert_eq!(
            TerminationReason::from(CollisionType::SelfCollision).message(),
            "You crashed into yourself!"
        );
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(GamePhase::Ready.to_string(), "Ready");
        assert_eq!(GamePhase::Running.to_string(), "Playing");
        assert_eq!(GamePhase::Paused.to_string(), "Paused");
        assert_eq!(GamePhase::Over.to_string(), "Game Over");
    }
}
