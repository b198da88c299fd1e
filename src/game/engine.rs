use super::{
    action::Direction,
    state::{Board, CollisionType, Position},
};

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake moved; length unchanged
    Moved,
    /// Snake moved onto the food and grew by one
    Ate,
    /// Move rejected; the board is left untouched
    Collided(CollisionType),
}

/// Advance the snake one cell in `direction`.
///
/// Self-collision is checked against the whole body before the tail moves,
/// so stepping into the cell the tail is about to leave is fatal.
pub fn advance(board: &mut Board, direction: Direction) -> StepOutcome {
    let new_head = board.snake.head().moved_in_direction(direction);

    if let Some(collision) = check_collision(board, new_head) {
        return StepOutcome::Collided(collision);
    }

    board.snake.push_head(new_head);

    if new_head == board.food {
        StepOutcome::Ate
    } else {
        board.snake.pop_tail();
        StepOutcome::Moved
    }
}

/// Check if the new head position causes a collision
fn check_collision(board: &Board, pos: Position) -> Option<CollisionType> {
    if !board.is_in_bounds(pos) {
        return Some(CollisionType::Wall);
    }

    if board.snake.occupies(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Snake;

    fn board(snake: Snake, food: Position) -> Board {
        Board::new(24, snake, food)
    }

    #[test]
    fn test_basic_movement() {
        let mut board = board(
            Snake::new(Position::new(11, 12), Direction::Right, 3),
            Position::new(0, 0),
        );

        assert_eq!(advance(&mut board, Direction::Right), StepOutcome::Moved);
        assert_eq!(board.snake.head(), Position::new(12, 12));
        assert_eq!(board.snake.tail(), Position::new(10, 12));
        assert_eq!(board.snake.len(), 3);
    }

    #[test]
    fn test_food_consumption() {
        let mut board = board(
            Snake::new(Position::new(11, 12), Direction::Right, 3),
            Position::new(11, 11),
        );

        assert_eq!(advance(&mut board, Direction::Up), StepOutcome::Ate);
        assert_eq!(board.snake.head(), Position::new(11, 11));
        assert_eq!(board.snake.len(), 4);
        assert_eq!(board.snake.tail(), Position::new(9, 12));
    }

    #[test]
    fn test_wall_collision() {
        let mut board = board(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Position::new(5, 5),
        );
        let before = board.clone();

        assert_eq!(
            advance(&mut board, Direction::Left),
            StepOutcome::Collided(CollisionType::Wall)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,5) curled so that (4,5) is part of the body
        let mut board = board(
            Snake::from_cells([
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(4, 6),
                Position::new(4, 5),
                Position::new(4, 4),
            ]),
            Position::new(8, 8),
        );

        assert_eq!(
            advance(&mut board, Direction::Left),
            StepOutcome::Collided(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_moving_into_vacating_tail_collides() {
        // 2x2 loop: the head's next cell is the current tail
        let mut board = board(
            Snake::from_cells([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ]),
            Position::new(0, 0),
        );

        assert_eq!(
            advance(&mut board, Direction::Down),
            StepOutcome::Collided(CollisionType::SelfCollision)
        );
        assert_eq!(board.snake.len(), 4);
    }

    #[test]
    fn test_wall_takes_precedence_on_edge() {
        let mut board = board(
            Snake::new(Position::new(23, 12), Direction::Right, 3),
            Position::new(0, 0),
        );

        assert_eq!(
            advance(&mut board, Direction::Right),
            StepOutcome::Collided(CollisionType::Wall)
        );
    }
}
