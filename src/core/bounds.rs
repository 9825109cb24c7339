//! Canvas-Grenzen und Reflexions-Helfer für Segment-Koordinaten.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Rechteckige Zeichenfläche mit Ursprung (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Breite in Canvas-Einheiten
    pub width: f32,
    /// Höhe in Canvas-Einheiten
    pub height: f32,
}

impl CanvasBounds {
    /// Erstellt neue Canvas-Grenzen.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Größe als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Obere Grenze pro Segment-Koordinate `(x0, y0, x1, y1)`.
    pub fn limits(&self) -> Vec4 {
        Vec4::new(self.width, self.height, self.width, self.height)
    }

    /// Prüft ob ein Koordinatenwert innerhalb `[0, limit]` liegt (inklusive Rand).
    pub fn contains_coordinate(&self, index: usize, value: f32) -> bool {
        (0.0..=self.limits()[index]).contains(&value)
    }

    /// Prüft ob ein Punkt innerhalb der Fläche liegt (inklusive Rand).
    pub fn contains_point(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Ergebnis des Randtests für eine einzelne Koordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reflection {
    /// Kein Rand berührt
    Clear,
    /// Rand berührt, Geschwindigkeit zeigt bereits nach innen
    Inward,
    /// Rand berührt, Geschwindigkeitskomponente wurde umgekehrt
    Reversed(f32),
}

/// Randtest (inklusive `<=`/`>=`) für eine Koordinate.
///
/// `probe` ist die vorausberechnete Position, `velocity` die aktuelle Komponente.
/// Zeigt die Geschwindigkeit beim Überschreiten nach außen, wird sie negiert.
pub fn reflect_component(probe: f32, velocity: f32, limit: f32) -> Reflection {
    if probe <= 0.0 {
        if velocity < 0.0 {
            Reflection::Reversed(-velocity)
        } else {
            Reflection::Inward
        }
    } else if probe >= limit {
        if velocity > 0.0 {
            Reflection::Reversed(-velocity)
        } else {
            Reflection::Inward
        }
    } else {
        Reflection::Clear
    }
}

/// Wächter gegen Koordinaten, die weiter als einen Schritt außerhalb liegen.
///
/// Ein solcher Wert heißt, dass ein Randtest übersprungen wurde. Debug-Builds
/// brechen ab, Release-Builds klemmen den Wert in `[0, limit]`.
pub fn guard_escape(value: f32, step: f32, limit: f32) -> f32 {
    let slack = step.abs();
    let escaped = value < -slack || value > limit + slack;
    debug_assert!(
        !escaped,
        "Koordinate {value} ausserhalb [0, {limit}] um mehr als einen Schritt ({slack})"
    );
    if escaped {
        log::warn!(
            "Koordinate {} ausserhalb des Canvas (Grenze {}), wird geklemmt",
            value,
            limit
        );
        value.clamp(0.0, limit)
    } else {
        value
    }
}
