//! Mapping von Fenster-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::Tick { dt } => vec![AppCommand::AdvanceChain {
            step_scale: state.options.step_scale_for(dt),
        }],
        AppIntent::PointerDown { pos } => {
            // Erst die Regler, nur ohne Treffer wächst die Kette
            let claimed = state.knobs.iter().any(|knob| knob.hit_test(pos));
            if claimed {
                vec![AppCommand::PressKnobs { pos }]
            } else {
                vec![AppCommand::SpawnTrailSegment]
            }
        }
        AppIntent::PointerMove { pos } => {
            if state.knobs.iter().any(|knob| knob.is_pressed()) {
                vec![AppCommand::DragKnobs { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerUp { .. } => vec![AppCommand::ReleaseKnobs],
        AppIntent::SetChainModeRequested { mode } => vec![AppCommand::SetChainMode { mode }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
