//! Use-Case-Funktionen für die Ketten-Kinematik.

use crate::app::AppState;
use crate::core::{ChainMode, TickInput};

/// Bewegt die Kette um einen Tick; der Kopf übernimmt die Regler-Werte.
pub fn advance(state: &mut AppState, step_scale: f32) {
    let input = TickInput {
        steering: Some(state.steering()),
        step_scale,
    };
    state.chain.advance_with(&input);
    state.tick_count += 1;
}

/// Verlängert die Kette hinten um ein Segment.
pub fn spawn_trail_segment(state: &mut AppState) {
    state.chain.spawn_from_tail();
}

/// Wechselt den Integrationsmodus.
pub fn set_chain_mode(state: &mut AppState, mode: ChainMode) {
    if state.chain.mode() != mode {
        log::info!("Ketten-Modus: {:?} -> {:?}", state.chain.mode(), mode);
    }
    state.chain.set_mode(mode);
    state.options.chain_mode = mode;
}
