use log::{debug, info, trace};
use std::time::Duration;

use super::{
    action::{Command, Direction},
    config::GameConfig,
    engine::{self, StepOutcome},
    food::{self, RandomSource, SessionRng},
    scheduler::{PendingTick, Scheduler, TickToken},
    speed::SpeedController,
    state::{Board, GameOver, GamePhase, Position, Snake, TerminationReason},
};

/// Render state handed to the front end after every tick or transition
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid_size: usize,
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    /// Speed multiplier label, e.g. "1.2x"
    pub speed: String,
    pub phase: GamePhase,
    pub game_over: Option<GameOver>,
}

/// One play session: board, score, speed, phase and the pending tick.
///
/// All mutation goes through the command handlers and [`GameSession::tick`];
/// nothing here is shared or locked.
pub struct GameSession<R = SessionRng> {
    config: GameConfig,
    board: Board,
    direction: Direction,
    queued_direction: Direction,
    score: u32,
    speed: SpeedController,
    phase: GamePhase,
    game_over: Option<GameOver>,
    scheduler: Scheduler,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session in the Ready phase with the standard opening layout
    pub fn new(config: GameConfig, rng: R) -> Self {
        let snake = Self::opening_snake(&config);
        let head = snake.head();
        let mut session = Self::from_parts(config, snake, Direction::Right, head, rng);
        session.reset();
        session
    }

    /// Create a Ready session with an explicit layout.
    ///
    /// `direction` is taken as the direction the snake last moved in.
    pub fn from_parts(
        config: GameConfig,
        snake: Snake,
        direction: Direction,
        food: Position,
        rng: R,
    ) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        let speed = SpeedController::new(&config);
        let board = Board::new(config.grid_size, snake, food);

        Self {
            config,
            board,
            direction,
            queued_direction: direction,
            score: 0,
            speed,
            phase: GamePhase::Ready,
            game_over: None,
            scheduler: Scheduler::new(),
            rng,
        }
    }

    fn opening_snake(config: &GameConfig) -> Snake {
        let center = (config.grid_size / 2) as i32;
        Snake::new(
            Position::new(center - 1, center),
            Direction::Right,
            config.initial_snake_length,
        )
    }

    /// Put every entity back to its opening state and enter Ready
    pub fn reset(&mut self) {
        self.scheduler.disarm();
        self.board = Board::new(
            self.config.grid_size,
            Self::opening_snake(&self.config),
            self.board.food,
        );
        self.direction = Direction::Right;
        self.queued_direction = Direction::Right;
        self.score = 0;
        self.speed.reset();
        self.game_over = None;
        self.set_phase(GamePhase::Ready);

        match food::place_food(&self.board, &mut self.rng) {
            Some(cell) => self.board.food = cell,
            // Only reachable with a config that skipped validation
            None => self.end(TerminationReason::BoardFull),
        }
    }

    /// Begin or resume play. Restarts from scratch after a game over.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Running {
            return;
        }
        if self.phase == GamePhase::Over {
            self.reset();
        }

        self.set_phase(GamePhase::Running);
        self.scheduler.arm(self.speed.delay());
    }

    pub fn pause(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.scheduler.disarm();
        self.set_phase(GamePhase::Paused);
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// End a running game. Ignored in any other phase.
    pub fn terminate(&mut self, reason: TerminationReason) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.end(reason);
    }

    fn end(&mut self, reason: TerminationReason) {
        self.scheduler.disarm();
        self.set_phase(GamePhase::Over);
        self.game_over = Some(GameOver {
            reason,
            final_score: self.score,
        });
        info!("game over: {} (score {})", reason.message(), self.score);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!("phase {} -> {}", self.phase, phase);
        }
        self.phase = phase;
    }

    /// Apply one input command
    pub fn handle_command(&mut self, command: Command) {
        if let Some(direction) = command.turn() {
            self.queue_turn(direction);
            return;
        }

        match command {
            Command::TogglePauseOrStart => {
                if self.phase == GamePhase::Running {
                    self.pause();
                } else {
                    self.start();
                }
            }
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Restart => self.restart(),
            _ => {}
        }
    }

    /// Request a turn. Reversals against the applied direction are dropped.
    fn queue_turn(&mut self, requested: Direction) {
        if self.direction.is_opposite(requested) {
            trace!("ignoring reversal {:?} -> {:?}", self.direction, requested);
            return;
        }
        self.queued_direction = requested;
    }

    /// Run the tick identified by `token`.
    ///
    /// Returns false without touching any state when the token is not the
    /// pending one or the session is not running.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if !self.scheduler.fire(token) {
            trace!("dropping stale tick {:?}", token);
            return false;
        }
        if self.phase != GamePhase::Running {
            return false;
        }

        self.direction = self.queued_direction;

        match engine::advance(&mut self.board, self.direction) {
            StepOutcome::Collided(collision) => {
                self.terminate(collision.into());
                return true;
            }
            StepOutcome::Ate => {
                self.score += self.config.food_score;
                self.speed.on_food_eaten();
                debug!(
                    "ate food at {:?}, score {}, delay {:?}",
                    self.board.food,
                    self.score,
                    self.speed.delay()
                );

                match food::place_food(&self.board, &mut self.rng) {
                    Some(cell) => {
                        debug!("food placed at {:?}", cell);
                        self.board.food = cell;
                    }
                    None => {
                        self.terminate(TerminationReason::BoardFull);
                        return true;
                    }
                }
            }
            StepOutcome::Moved => {}
        }

        self.scheduler.arm(self.speed.delay());
        true
    }

    /// The tick the front end should wait for, if any
    pub fn pending_tick(&self) -> Option<PendingTick> {
        self.scheduler.pending()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn delay(&self) -> Duration {
        self.speed.delay()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn queued_direction(&self) -> Direction {
        self.queued_direction
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.board.size,
            snake: self.board.snake.iter().copied().collect(),
            direction: self.direction,
            food: self.board.food,
            score: self.score,
            speed: self.speed.label(),
            phase: self.phase,
            game_over: self.game_over,
        }
    }
}

impl GameSession<SessionRng> {
    /// Session with a seeded RNG, or a random seed when `seed` is None
    pub fn seeded(config: GameConfig, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(SessionRng::from_random, SessionRng::new);
        info!("food rng seed {}", rng.seed());
        Self::new(config, rng)
    }
}
