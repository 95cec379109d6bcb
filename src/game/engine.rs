use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    action::{Command, Orientation},
    camera::{CameraController, CameraMode, CameraPose},
    config::GameConfig,
    field::TileField,
    player::{AnimationEnd, MoveOutcome, PlayerController, RejectReason},
    state::{Cell, GameStateTracker, GridPosition, Outcome},
};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Moved(Cell),
    Turned(Orientation),
    MoveRejected { reason: RejectReason },
    JumpStarted,
    JumpLanded(Cell),
    FallStarted(Cell),
    LifeLost { lives: i32 },
    Reseeded { pattern_offset: i32 },
    ViewChanged(CameraMode),
    Won { score: i32 },
    Lost { score: i32 },
    Quit,
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    /// The session should end (quit requested)
    pub terminated: bool,
}

/// HUD values for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: i32,
    pub lives: i32,
    pub steps: u32,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub camera: CameraPose,
    pub camera_mode: CameraMode,
    pub player: GridPosition,
    pub orientation: Orientation,
    /// Pattern the field layout is derived from
    pub pattern_offset: i32,
    pub hud: Hud,
}

/// All mutable state of a session
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationContext {
    pub(crate) field: TileField,
    pub(crate) player: PlayerController,
    pub(crate) tracker: GameStateTracker,
    pub(crate) camera: CameraController,
    quit: bool,
}

impl SimulationContext {
    pub fn field(&self) -> &TileField {
        &self.field
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn tracker(&self) -> &GameStateTracker {
        &self.tracker
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Render-side view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            camera: self.camera.pose(),
            camera_mode: self.camera.mode(),
            player: self.player.position(),
            orientation: self.player.orientation(),
            pattern_offset: self.field.pattern_offset(),
            hud: Hud {
                score: self.tracker.score(),
                lives: self.tracker.lives(),
                steps: self.tracker.step_count(),
                game_over: self.tracker.is_game_over(),
                outcome: self.tracker.outcome(),
            },
        }
    }
}

/// Advances a [`SimulationContext`] one tick at a time
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh session state
    pub fn reset(&mut self) -> SimulationContext {
        let mut context = SimulationContext {
            field: TileField::new(
                self.config.initial_pattern_offset,
                self.config.modulus,
                Cell::from(self.config.goal),
            ),
            player: PlayerController::new(&self.config),
            tracker: GameStateTracker::new(self.config.initial_lives),
            camera: CameraController::new(self.config.fov),
            quit: false,
        };
        let player = context.player.position().to_vec3();
        context
            .camera
            .update(player, context.player.orientation());
        context
    }

    /// Execute one frame of the game.
    ///
    /// Order: command, animation frame, reseed, fall check, win/loss, camera.
    pub fn tick(
        &mut self,
        context: &mut SimulationContext,
        command: Option<Command>,
    ) -> TickResult {
        let mut events = Vec::new();

        if context.quit {
            return TickResult {
                events,
                terminated: true,
            };
        }

        if command == Some(Command::Quit) {
            info!("quit requested");
            context.quit = true;
            events.push(GameEvent::Quit);
            return TickResult {
                events,
                terminated: true,
            };
        }

        if context.tracker.is_game_over() {
            return TickResult {
                events,
                terminated: false,
            };
        }

        if let Some(command) = command {
            self.apply_command(context, command, &mut events);
        }

        match context.player.advance(&mut context.tracker) {
            Some(AnimationEnd::Landed(cell)) => events.push(GameEvent::JumpLanded(cell)),
            Some(AnimationEnd::LifeLost) => {
                let lives = context.tracker.lives();
                info!(lives, "life lost");
                events.push(GameEvent::LifeLost { lives });
            }
            None => {}
        }

        if context.tracker.key_press_count() > self.config.reseed_after {
            let pattern_offset = context
                .field
                .reseed(&mut self.rng, self.config.reseed_range);
            context.tracker.reset_key_presses();
            debug!(pattern_offset, "tile pattern reseeded");
            events.push(GameEvent::Reseeded { pattern_offset });
        }

        if context.player.check_fall(&context.field) {
            events.push(GameEvent::FallStarted(context.player.position().cell()));
        }

        if !context.player.is_animating() {
            self.check_game_over(context, &mut events);
        }

        let player = context.player.position().to_vec3();
        context
            .camera
            .update(player, context.player.orientation());

        TickResult {
            events,
            terminated: false,
        }
    }

    fn apply_command(
        &mut self,
        context: &mut SimulationContext,
        command: Command,
        events: &mut Vec<GameEvent>,
    ) {
        let regime = context.camera.mode().movement_regime();

        match command {
            Command::MoveLeft | Command::MoveRight | Command::MoveForward | Command::MoveBack => {
                let Some(key) = command.move_key() else {
                    return;
                };
                let outcome = context.player.handle_move(
                    key,
                    regime,
                    &context.field,
                    &mut context.tracker,
                );
                match outcome {
                    Some(MoveOutcome::Moved(cell)) => events.push(GameEvent::Moved(cell)),
                    Some(MoveOutcome::Turned(orientation)) => {
                        debug!(orientation = orientation.code(), "turned");
                        events.push(GameEvent::Turned(orientation));
                    }
                    Some(MoveOutcome::Rejected(reason)) => {
                        events.push(GameEvent::MoveRejected { reason })
                    }
                    None => {}
                }
            }
            Command::Jump => {
                if context.player.start_jump(regime) {
                    events.push(GameEvent::JumpStarted);
                }
            }
            Command::SelectView(mode) => {
                if context.camera.select(mode) {
                    events.push(GameEvent::ViewChanged(mode));
                }
            }
            Command::DragLook { dx, dy } => context.camera.drag_look(dx, dy),
            Command::Quit => {}
        }
    }

    fn check_game_over(&self, context: &mut SimulationContext, events: &mut Vec<GameEvent>) {
        if context.player.position().cell() == context.field.goal() {
            context.tracker.finish(Outcome::Won, self.config.win_bonus);
            let score = context.tracker.score();
            info!(score, "goal reached");
            events.push(GameEvent::Won { score });
        } else if context.tracker.lives() == 0 {
            context.tracker.finish(Outcome::Lost, -self.config.loss_penalty);
            let score = context.tracker.score();
            info!(score, "out of lives");
            events.push(GameEvent::Lost { score });
        }
    }
}
