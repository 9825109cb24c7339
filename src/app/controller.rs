//! Application Controller für zentrale Event-Verarbeitung.

use super::frame_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::FrameScene;

/// Orchestriert Fenster-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Simulation ===
            AppCommand::AdvanceChain { step_scale } => {
                handlers::simulation::advance(state, step_scale)
            }
            AppCommand::SetChainMode { mode } => handlers::simulation::set_chain_mode(state, mode),
            AppCommand::ApplyOptions { options } => {
                handlers::simulation::apply_options(state, options)?
            }

            // === Pointer ===
            AppCommand::PressKnobs { pos } => handlers::pointer::press_knobs(state, pos),
            AppCommand::SpawnTrailSegment => handlers::pointer::spawn_trail_segment(state),
            AppCommand::DragKnobs { pos } => handlers::pointer::drag_knobs(state, pos),
            AppCommand::ReleaseKnobs => handlers::pointer::release_knobs(state),
        }

        Ok(())
    }

    /// Ein Frame-Tick mit vergangener Zeit `dt` in Sekunden.
    pub fn tick(&mut self, state: &mut AppState, dt: f32) -> anyhow::Result<()> {
        self.handle_intent(state, AppIntent::Tick { dt })
    }

    /// Pointer gedrückt.
    pub fn pointer_down(&mut self, state: &mut AppState, x: f32, y: f32) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::PointerDown {
                pos: glam::Vec2::new(x, y),
            },
        )
    }

    /// Pointer bewegt.
    pub fn pointer_move(&mut self, state: &mut AppState, x: f32, y: f32) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::PointerMove {
                pos: glam::Vec2::new(x, y),
            },
        )
    }

    /// Pointer losgelassen.
    pub fn pointer_up(&mut self, state: &mut AppState, x: f32, y: f32) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::PointerUp {
                pos: glam::Vec2::new(x, y),
            },
        )
    }

    /// Baut die Frame-Szene aus dem aktuellen AppState.
    pub fn build_frame_scene(&self, state: &AppState) -> FrameScene {
        frame_scene::build(state)
    }
}
