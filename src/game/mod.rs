//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through [`GameSession`] commands and ticks.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod scheduler;
pub mod session;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GRID_SIZE, GameConfig};
pub use engine::StepOutcome;
pub use food::{RandomSource, SessionRng};
pub use scheduler::{PendingTick, Scheduler, TickToken};
pub use session::{GameSession, Snapshot};
pub use speed::SpeedController;
pub use state::{
    Board, CollisionType, GameOver, GamePhase, Position, Snake, TerminationReason,
};
