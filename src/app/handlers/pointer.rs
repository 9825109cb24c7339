//! Handler für Pointer-Gesten (Regler und Ketten-Wachstum).

use crate::app::use_cases;
use crate::app::AppState;

/// Pointer-Druck auf mindestens einen Regler.
pub fn press_knobs(state: &mut AppState, pos: glam::Vec2) {
    use_cases::knobs::press(state, pos);
}

/// Pointer-Druck ins Leere: Kette wächst hinten.
pub fn spawn_trail_segment(state: &mut AppState) {
    use_cases::kinematics::spawn_trail_segment(state);
}

/// Pointer-Bewegung bei gedrücktem Regler.
pub fn drag_knobs(state: &mut AppState, pos: glam::Vec2) {
    use_cases::knobs::drag(state, pos);
}

/// Pointer losgelassen.
pub fn release_knobs(state: &mut AppState) {
    use_cases::knobs::release(state);
}
