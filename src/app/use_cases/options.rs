//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::state::build_knobs;
use crate::app::AppState;
use crate::shared::SimOptions;

/// Validiert und übernimmt neue Optionen.
///
/// Die Kette wird umkonfiguriert (Länge, Canvas, Modus), die Regler neu
/// aufgebaut und behalten dabei ihre aktuellen Ausgabewerte. Ungültige
/// Optionen lassen den Zustand unverändert.
pub fn apply(state: &mut AppState, options: SimOptions) -> anyhow::Result<()> {
    options.validate()?;
    state.chain.reconfigure(options.chain_config())?;

    let steering = state.steering();
    state.knobs = build_knobs(&options, steering);
    state.options = options;

    log::info!(
        "Optionen übernommen: {} Segmente, Modus {:?}",
        state.chain.len(),
        state.chain.mode()
    );
    Ok(())
}
