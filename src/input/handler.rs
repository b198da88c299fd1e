use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Command(Command::TurnUp),
            KeyCode::Down => KeyAction::Command(Command::TurnDown),
            KeyCode::Left => KeyAction::Command(Command::TurnLeft),
            KeyCode::Right => KeyAction::Command(Command::TurnRight),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Command(Command::TurnUp),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Command(Command::TurnDown),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Command(Command::TurnLeft),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Command(Command::TurnRight),

            // Controls
            KeyCode::Char(' ') => KeyAction::Command(Command::TogglePauseOrStart),
            KeyCode::Enter => KeyAction::Command(Command::Start),
            KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Command(Command::Pause),
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Command(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
