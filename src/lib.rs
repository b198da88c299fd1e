//! Grid Snake - a real-time snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module): board, movement, food, speed, phases, tick scheduling
//! - Keyboard mapping to game commands (input module)
//! - TUI rendering (render module)
//! - The terminal front end tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod render;
