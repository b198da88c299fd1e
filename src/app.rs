use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Sleep, interval, sleep};

use crate::game::{Command, GameConfig, GameSession, TickToken};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Real timer standing in for the session's pending tick
type ArmedTimer = Option<(TickToken, Pin<Box<Sleep>>)>;

/// Terminal front end: feeds key presses and timer ticks into a session and
/// draws the result.
pub struct App {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            session: GameSession::seeded(config, seed),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            "exiting after {} finished game(s)",
            self.metrics.games_finished
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut timer: ArmedTimer = None;

        // Keeps the play clock moving between ticks (30 FPS)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            self.sync_timer(&mut timer);

            let snapshot = self.session.snapshot();
            terminal
                .draw(|frame| self.renderer.render(frame, &snapshot, &self.metrics))
                .context("Failed to draw frame")?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                token = wait_for_tick(&mut timer) => {
                    self.session.tick(token);
                    self.metrics.observe(self.session.phase());
                }

                _ = render_timer.tick() => {}

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Make the real timer match the session's pending tick.
    ///
    /// A disarmed session drops the sleep here, before the loop can poll it.
    fn sync_timer(&self, timer: &mut ArmedTimer) {
        match (self.session.pending_tick(), timer.as_ref()) {
            (Some(pending), Some((token, _))) if pending.token == *token => {}
            (Some(pending), _) => {
                *timer = Some((pending.token, Box::pin(sleep(pending.delay))));
            }
            (None, _) => *timer = None,
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Command(command) => self.apply_command(command),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn apply_command(&mut self, command: Command) {
        if command == Command::Restart {
            self.metrics.on_game_start();
        }
        self.session.handle_command(command);
        self.metrics.observe(self.session.phase());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Resolve when the armed timer fires; never resolves while disarmed
async fn wait_for_tick(timer: &mut ArmedTimer) -> TickToken {
    match timer {
        Some((token, sleep)) => {
            sleep.as_mut().await;
            *token
        }
        None => std::future::pending().await,
    }
}
