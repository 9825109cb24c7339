//! Handler für Tick, Ketten-Modus und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ChainMode;
use crate::shared::SimOptions;

/// Führt einen Tick aus.
pub fn advance(state: &mut AppState, step_scale: f32) {
    use_cases::kinematics::advance(state, step_scale);
}

/// Setzt den Integrationsmodus der Kette.
pub fn set_chain_mode(state: &mut AppState, mode: ChainMode) {
    use_cases::kinematics::set_chain_mode(state, mode);
}

/// Übernimmt Optionen und propagiert Validierungsfehler an den Aufrufer.
pub fn apply_options(state: &mut AppState, options: SimOptions) -> anyhow::Result<()> {
    use_cases::options::apply(state, options)
}
