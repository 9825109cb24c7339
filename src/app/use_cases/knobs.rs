//! Use-Case-Funktionen für die Regler.

use crate::app::AppState;

/// Bietet allen Reglern einen Pointer-Druck an.
pub fn press(state: &mut AppState, pos: glam::Vec2) {
    for (index, knob) in state.knobs.iter_mut().enumerate() {
        if knob.press(pos) {
            log::debug!("Regler {} gedrückt bei {:?}", index, pos);
        }
    }
}

/// Zieht alle gedrückten Regler Richtung `pos`.
pub fn drag(state: &mut AppState, pos: glam::Vec2) {
    for (index, knob) in state.knobs.iter_mut().enumerate() {
        let before = knob.output_value();
        if let Some(value) = knob.drag(pos) {
            if value != before {
                log::debug!("Regler {}: Wert {:?} -> {:?}", index, before, value);
            }
        }
    }
}

/// Löst alle Regler.
pub fn release(state: &mut AppState) {
    for knob in state.knobs.iter_mut() {
        knob.release();
    }
}
