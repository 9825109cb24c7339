//! Psychedelic Lines (headless).
//!
//! Treibt den Kinematik-Kern ohne Fenster: eine gescriptete Sitzung aus
//! Ticks und Pointer-Gesten, am Ende wird die Frame-Szene als JSON ausgegeben.
//! Aufruf: `psychedelic-lines [TICKS]`

use anyhow::Context;
use psychedelic_lines::app::START_KNOB;
use psychedelic_lines::{AppCommand, AppController, AppState, SimOptions};

const DEFAULT_TICKS: u64 = 600;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren (RUST_LOG überschreibt den Standard)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Psychedelic Lines v{} startet...", env!("CARGO_PKG_VERSION"));

    let ticks = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("Ungültige Tick-Anzahl: {arg}"))?,
        None => DEFAULT_TICKS,
    };

    let options = SimOptions::load_from_file(&SimOptions::config_path());
    let mut runner = SessionRunner::new(options)?;
    runner.run(ticks)?;

    let scene = runner.controller.build_frame_scene(&runner.state);
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

/// Gescriptete Sitzung: Regler ziehen, ins Leere klicken, Ticks laufen lassen.
struct SessionRunner {
    state: AppState,
    controller: AppController,
}

impl SessionRunner {
    fn new(options: SimOptions) -> anyhow::Result<Self> {
        let state = AppState::from_options(options).context("Simulation konnte nicht starten")?;
        Ok(Self {
            state,
            controller: AppController::new(),
        })
    }

    fn run(&mut self, ticks: u64) -> anyhow::Result<()> {
        let dt = self.state.options.reference_dt;
        let drag_start = ticks / 4;
        let drag_end = drag_start + 30;
        let canvas = self.state.options.canvas().size();

        for tick in 0..ticks {
            if tick == drag_start {
                let pos = self.state.knobs[START_KNOB].knob_position();
                self.controller.pointer_down(&mut self.state, pos.x, pos.y)?;
            }
            if (drag_start..drag_end).contains(&tick) {
                // Knopf langsam nach links oben ziehen
                let center = self.state.knobs[START_KNOB].geometry().center;
                let progress = (tick - drag_start) as f32 / 30.0;
                let target = center + glam::Vec2::new(-20.0, -20.0) * progress;
                self.controller
                    .pointer_move(&mut self.state, target.x, target.y)?;
            }
            if tick == drag_end {
                self.controller.pointer_up(&mut self.state, 0.0, 0.0)?;
            }
            if tick == ticks / 2 {
                // Klick ins Leere verlängert die Spur
                self.controller
                    .pointer_down(&mut self.state, canvas.x / 2.0, canvas.y / 2.0)?;
                self.controller
                    .pointer_up(&mut self.state, canvas.x / 2.0, canvas.y / 2.0)?;
            }

            self.controller.tick(&mut self.state, dt)?;
        }

        let head = self.state.chain.head();
        let drags = self
            .state
            .command_log
            .count_matching(|c| matches!(c, AppCommand::DragKnobs { .. }));
        log::info!(
            "{} Ticks, {} Segmente, Kopf {:?}, Steuerung {:?}, {} Commands geloggt ({} Drags)",
            self.state.tick_count,
            self.state.chain.len(),
            head.points,
            self.state.steering(),
            self.state.command_log.len(),
            drags
        );
        Ok(())
    }
}
