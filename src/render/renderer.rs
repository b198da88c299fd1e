use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Direction, GameOver, GamePhase, Position, Snapshot};
use crate::metrics::GameMetrics;

const SNAKE_BODY: &str = "□ ";
const FOOD: &str = "● ";
const EMPTY: &str = ". ";

/// Head glyph pointing the way the snake moves
fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.game_over {
            Some(over) => frame.render_widget(self.render_game_over(over), game_area),
            None => frame.render_widget(self.render_grid(snapshot), game_area),
        }

        frame.render_widget(self.render_controls(snapshot.phase), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let head = snapshot.snake.first().copied();
        let mut lines = Vec::with_capacity(snapshot.grid_size);

        for y in 0..snapshot.grid_size {
            let mut spans = Vec::with_capacity(snapshot.grid_size);

            for x in 0..snapshot.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    Span::styled(
                        head_symbol(snapshot.direction),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled(SNAKE_BODY, Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    Span::styled(
                        FOOD,
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match snapshot.phase {
            GamePhase::Ready => " Snake - press Space to start ".to_string(),
            GamePhase::Paused => " Snake - paused ".to_string(),
            _ => " Snake ".to_string(),
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(snapshot.speed.clone(), value),
            Span::raw("    "),
            Span::styled("State: ", label),
            Span::styled(snapshot.phase.name(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, over: GameOver) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                over.summary(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: GamePhase) -> Paragraph<'_> {
        let toggle = if phase == GamePhase::Running {
            " to pause | "
        } else {
            " to start | "
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(toggle),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TerminationReason;
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot() -> Snapshot {
        Snapshot {
            grid_size: 24,
            snake: vec![
                Position::new(11, 12),
                Position::new(10, 12),
                Position::new(9, 12),
            ],
            direction: Direction::Right,
            food: Position::new(15, 12),
            score: 20,
            speed: "1.1x".to_string(),
            phase: GamePhase::Running,
            game_over: None,
        }
    }

    fn draw(snapshot: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, snapshot, &metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_labels_and_board() {
        let screen = draw(&snapshot());

        assert!(screen.contains("Score: 20"));
        assert!(screen.contains("Speed: 1.1x"));
        assert!(screen.contains("State: Playing"));
        assert!(screen.contains("▶"));
        assert!(screen.contains("●"));
    }

    #[test]
    fn test_head_follows_direction() {
        let mut snapshot = snapshot();
        snapshot.direction = Direction::Up;
        let screen = draw(&snapshot);

        assert!(screen.contains("▲"));
        assert!(!screen.contains("▶"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snapshot = snapshot();
        snapshot.phase = GamePhase::Over;
        snapshot.game_over = Some(GameOver {
            reason: TerminationReason::SelfCollision,
            final_score: 20,
        });
        let screen = draw(&snapshot);

        assert!(screen.contains("Game Over"));
        assert!(screen.contains("You crashed into yourself! Score: 20."));
        assert!(!screen.contains("●"));
    }
}
