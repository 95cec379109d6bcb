use glam::Vec3;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{
    CameraMode, Orientation, Outcome, Snapshot, TileField, TileKind,
    field::{FIELD_X, FIELD_Z},
};
use crate::metrics::GameMetrics;

/// Draws a top-down view of the field, the HUD and the current camera pose
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        field: &TileField,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        if snapshot.hud.game_over {
            frame.render_widget(self.render_game_over(snapshot), body[0]);
        } else {
            frame.render_widget(self.render_grid(snapshot, field), body[0]);
        }
        frame.render_widget(self.render_camera(snapshot, metrics), body[1]);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot, field: &TileField) -> Paragraph<'_> {
        let player = snapshot.player;
        let mut lines = Vec::new();
        let mut spans = Vec::new();

        for tile in field.layout() {
            let cell = if tile.cell == player.cell() {
                self.player_span(snapshot)
            } else {
                match tile.kind {
                    TileKind::Floor => Span::styled("· ", Style::default().fg(Color::DarkGray)),
                    TileKind::Obstacle => Span::styled(
                        "▲ ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    TileKind::Gap => Span::raw("  "),
                    TileKind::Goal => Span::styled(
                        "★ ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                }
            };
            spans.push(cell);

            if tile.cell.x == *FIELD_X.end() {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }

        // Some moves reach columns east of the drawn field
        let cell = player.cell();
        if !FIELD_X.contains(&cell.x) || !FIELD_Z.contains(&cell.z) {
            lines.push(Line::from(vec![
                self.player_span(snapshot),
                Span::styled(
                    format!("off grid ({}, {})", cell.x, cell.z),
                    Style::default().fg(Color::Red),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Grid Runner "),
            )
            .alignment(Alignment::Center)
    }

    fn player_span(&self, snapshot: &Snapshot) -> Span<'static> {
        let symbol = if snapshot.camera_mode == CameraMode::Adventure {
            match snapshot.orientation {
                Orientation::Forward => "↑ ",
                Orientation::Back => "↓ ",
                Orientation::Left => "← ",
                Orientation::Right => "→ ",
            }
        } else {
            "@ "
        };

        let color = if snapshot.player.y > 0.0 {
            Color::Cyan
        } else if snapshot.player.y < 0.0 {
            Color::Red
        } else {
            Color::Green
        };

        Span::styled(symbol, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let hud = snapshot.hud;
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Lives: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "♥ ".repeat(hud.lives.max(0) as usize),
                Style::default().fg(Color::Red),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("View: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.camera_mode.as_str(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_camera(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let pose = snapshot.camera;
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
        };

        let text = vec![
            row("Eye:     ", format_vec(pose.eye)),
            row("Target:  ", format_vec(pose.target)),
            row("Up:      ", format_vec(pose.up)),
            row("FOV:     ", format!("{:.0}°", pose.fov)),
            Line::from(""),
            row("Facing:  ", snapshot.orientation.as_str().to_string()),
            row("Height:  ", format!("{:+.0}", snapshot.player.y)),
            row("Pattern: ", snapshot.pattern_offset.to_string()),
            Line::from(""),
            row("Falls:   ", metrics.falls.to_string()),
            row("Bumps:   ", metrics.rejected_moves.to_string()),
            row("Reseeds: ", metrics.reseeds.to_string()),
        ];

        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title(" Camera "),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let (title, color) = match snapshot.hud.outcome {
            Some(Outcome::Won) => ("YOU WIN", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.hud.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
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
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" jump | "),
            Span::styled("1-5", Style::default().fg(Color::Cyan)),
            Span::raw(" views | "),
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

fn format_vec(v: Vec3) -> String {
    format!("({:+.1}, {:+.1}, {:+.1})", v.x, v.y, v.z)
}
