//! Ziehbarer 2D-Regler innerhalb einer festen Box.
//!
//! Der Versatz des Knopfs zur Box-Mitte wird linear auf einen Wertebereich
//! `±value_range` abgebildet. Die Box-Ränder (eingerückt um den Knopfradius)
//! entsprechen genau den Extremwerten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Feste Geometrie eines Reglers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnobGeometry {
    /// Box-Mitte in Canvas-Koordinaten
    pub center: Vec2,
    /// Box-Größe (Breite, Höhe)
    pub size: Vec2,
    /// Sichtbarer Knopfradius, gleichzeitig Trefferradius
    pub radius: f32,
    /// Maximaler Betrag der Ausgabewerte pro Achse (Vorzeichen wird ignoriert)
    pub value_range: Vec2,
}

impl KnobGeometry {
    /// Halbe Verfahrstrecke pro Achse: `size / 2 - radius`.
    ///
    /// Werte `<= 0` bedeuten: Achse hat keinen Verfahrweg.
    pub fn half_span(&self) -> Vec2 {
        self.size * 0.5 - Vec2::splat(self.radius)
    }

    /// Untere eingerückte Grenze.
    pub fn inset_min(&self) -> Vec2 {
        self.center - self.half_span().max(Vec2::ZERO)
    }

    /// Obere eingerückte Grenze.
    pub fn inset_max(&self) -> Vec2 {
        self.center + self.half_span().max(Vec2::ZERO)
    }

    /// Betrag des Wertebereichs pro Achse.
    pub fn range(&self) -> Vec2 {
        self.value_range.abs()
    }
}

/// Verhalten beim Ziehen über die Box hinaus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragClamping {
    /// Achse rastet auf der nächsten Grenze ein
    #[default]
    Saturate,
    /// Achse außerhalb bleibt auf ihrer bisherigen Position stehen
    HoldOutOfRange,
}

/// Ein 2D-Regler mit Knopf, Drückzustand und Ausgabewert.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedKnob {
    geometry: KnobGeometry,
    clamping: DragClamping,
    knob_position: Vec2,
    output_value: Vec2,
    pressed: bool,
}

impl BoundedKnob {
    /// Erstellt einen Regler, dessen Knopf so platziert ist, dass die Ausgabe
    /// `initial_value` entspricht (geklemmt auf `±value_range`).
    pub fn new(geometry: KnobGeometry, clamping: DragClamping, initial_value: Vec2) -> Self {
        let range = geometry.range();
        let half_span = geometry.half_span();
        let value = initial_value.clamp(-range, range);

        let mut knob_position = geometry.center;
        for axis in 0..2 {
            if range[axis] > 0.0 && half_span[axis] > 0.0 {
                knob_position[axis] += value[axis] / range[axis] * half_span[axis];
            }
        }

        Self {
            geometry,
            clamping,
            knob_position,
            output_value: value,
            pressed: false,
        }
    }

    /// Prüft ob `pos` innerhalb des Knopfradius liegt (Rand inklusive).
    pub fn hit_test(&self, pos: Vec2) -> bool {
        pos.distance_squared(self.knob_position) <= self.geometry.radius * self.geometry.radius
    }

    /// Registriert einen Pointer-Druck. Ein Fehlschlag löst den Regler.
    pub fn press(&mut self, pos: Vec2) -> bool {
        self.pressed = self.hit_test(pos);
        self.pressed
    }

    /// Zieht den Knopf Richtung `pos`, sofern gedrückt.
    ///
    /// Gibt den neuen Ausgabewert zurück, `None` wenn der Regler nicht gedrückt ist.
    pub fn drag(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }

        let min = self.geometry.inset_min();
        let max = self.geometry.inset_max();
        for axis in 0..2 {
            let target = pos[axis];
            if !target.is_finite() {
                continue;
            }
            match self.clamping {
                DragClamping::Saturate => {
                    self.knob_position[axis] = target.clamp(min[axis], max[axis]);
                }
                DragClamping::HoldOutOfRange => {
                    if (min[axis]..=max[axis]).contains(&target) {
                        self.knob_position[axis] = target;
                    }
                }
            }
        }

        self.recompute_output();
        Some(self.output_value)
    }

    /// Löst den Regler. Position und Ausgabe bleiben erhalten.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    fn recompute_output(&mut self) {
        let half_span = self.geometry.half_span();
        let range = self.geometry.range();
        let offset = self.knob_position - self.geometry.center;
        for axis in 0..2 {
            // Ohne Verfahrweg bleibt der letzte Wert stehen
            if half_span[axis] > 0.0 {
                self.output_value[axis] = offset[axis] / half_span[axis] * range[axis];
            }
        }
    }

    /// Aktuelle Knopfposition.
    pub fn knob_position(&self) -> Vec2 {
        self.knob_position
    }

    /// Aktueller Ausgabewert `(value_x, value_y)`.
    pub fn output_value(&self) -> Vec2 {
        self.output_value
    }

    /// Ob der Pointer gerade von diesem Regler gehalten wird.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Geometrie des Reglers.
    pub fn geometry(&self) -> &KnobGeometry {
        &self.geometry
    }
}
