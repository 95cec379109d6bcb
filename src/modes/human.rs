use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{Command, GameConfig, GameEngine, SimulationContext};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive session: one simulation tick per rendered frame
pub struct HumanMode {
    engine: GameEngine,
    context: SimulationContext,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    should_quit: bool,
    pending_command: Option<Command>,
}

impl HumanMode {
    pub fn new(config: GameConfig, fps: u32) -> Self {
        let mut engine = GameEngine::new(config);
        let context = engine.reset();

        Self {
            engine,
            context,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            should_quit: false,
            pending_command: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(config = ?self.engine.config(), "session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        let tracker = self.context.tracker();
        info!(
            score = tracker.score(),
            lives = tracker.lives(),
            steps = tracker.step_count(),
            outcome = ?tracker.outcome(),
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(self.frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let size = terminal.size().context("Failed to read terminal size")?;
                        self.handle_event(event, (size.width, size.height));
                    }
                }

                // One tick, then draw it
                _ = frame_timer.tick() => {
                    self.update_game();
                    self.metrics.update();
                    let snapshot = self.context.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, self.context.field(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
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

    fn handle_event(&mut self, event: Event, area: (u16, u16)) {
        let command = match event {
            // Only process key press events, not release or repeat
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse, area),
            _ => None,
        };

        match command {
            // Quit does not wait for the next frame
            Some(Command::Quit) => {
                let result = self.engine.tick(&mut self.context, Some(Command::Quit));
                self.should_quit = result.terminated;
            }
            Some(command) => {
                if let Some(dropped) = self.pending_command.replace(command) {
                    debug!(?dropped, "command superseded before tick");
                }
            }
            None => {}
        }
    }

    fn update_game(&mut self) {
        let command = self.pending_command.take();
        let result = self.engine.tick(&mut self.context, command);

        self.metrics.record(&result.events);
        if result.terminated {
            self.should_quit = true;
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::seeded(5), 30);
        let snapshot = mode.context.snapshot();
        assert_eq!(snapshot.hud.score, 0);
        assert_eq!(snapshot.hud.lives, 3);
        assert_eq!(mode.frame_interval, Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_one_command_per_tick() {
        let mut mode = HumanMode::new(GameConfig::seeded(5), 30);
        mode.handle_event(press(KeyCode::Up), (80, 24));
        mode.handle_event(press(KeyCode::Up), (80, 24));
        mode.update_game();

        // the second press replaced the first
        assert_eq!(mode.context.tracker().step_count(), 1);

        mode.update_game();
        assert_eq!(mode.context.tracker().step_count(), 1);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = HumanMode::new(GameConfig::seeded(5), 30);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        mode.handle_event(release, (80, 24));
        assert!(mode.pending_command.is_none());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::seeded(5), 30);
        mode.handle_event(press(KeyCode::Char('q')), (80, 24));
        assert!(mode.should_quit);
    }
}
