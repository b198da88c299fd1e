use std::time::{Duration, Instant};

use crate::game::GamePhase;

/// Play clock and game counter for the running process.
///
/// The clock only advances while the session is running; nothing here is
/// written to disk.
pub struct GameMetrics {
    pub elapsed_time: Duration,
    pub games_finished: u32,
    running_since: Option<Instant>,
    last_phase: GamePhase,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            games_finished: 0,
            running_since: None,
            last_phase: GamePhase::Ready,
        }
    }

    /// Follow the session's phase; call after every command or tick
    pub fn observe(&mut self, phase: GamePhase) {
        self.observe_at(phase, Instant::now());
    }

    fn observe_at(&mut self, phase: GamePhase, now: Instant) {
        if phase == self.last_phase {
            return;
        }

        if let Some(since) = self.running_since.take() {
            self.elapsed_time += now.saturating_duration_since(since);
        }

        match phase {
            GamePhase::Running => {
                if self.last_phase == GamePhase::Over || self.last_phase == GamePhase::Ready {
                    self.elapsed_time = Duration::ZERO;
                }
                self.running_since = Some(now);
            }
            GamePhase::Over => self.games_finished += 1,
            GamePhase::Ready => self.elapsed_time = Duration::ZERO,
            GamePhase::Paused => {}
        }

        self.last_phase = phase;
    }

    /// Zero the clock for a game that restarted without passing through Over
    pub fn on_game_start(&mut self) {
        self.on_game_start_at(Instant::now());
    }

    fn on_game_start_at(&mut self, now: Instant) {
        self.elapsed_time = Duration::ZERO;
        self.running_since = self.running_since.map(|_| now);
    }

    /// Time played in the current game
    pub fn play_time(&self) -> Duration {
        self.play_time_at(Instant::now())
    }

    fn play_time_at(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.elapsed_time + now.saturating_duration_since(since),
            None => self.elapsed_time,
        }
    }

    pub fn format_time(&self) -> String {
        format_duration(self.play_time())
    }
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
