//! Einzelnes Liniensegment mit Geschwindigkeit pro Koordinate.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Ein gezeichnetes Liniensegment.
///
/// Alle Vektoren verwenden die Reihenfolge `(x0, y0, x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Endpunkte des Segments
    pub points: Vec4,
    /// Vorzeichenbehaftete Rate pro Koordinate und Tick
    pub velocity: Vec4,
    /// Richtungs-Multiplikatoren (±1), kippen bei jeder Reflexion
    pub sign: Vec4,
    /// Render-Attribut (RGBA), wird von der Kinematik nie gelesen
    pub color: [f32; 4],
}

impl Segment {
    /// Erstellt ein Segment mit positiven Richtungs-Flags.
    pub fn new(points: Vec4, velocity: Vec4, color: [f32; 4]) -> Self {
        Self {
            points,
            velocity,
            sign: Vec4::ONE,
            color,
        }
    }

    /// Startpunkt `(x0, y0)`.
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.points.x, self.points.y)
    }

    /// Endpunkt `(x1, y1)`.
    pub fn end(&self) -> Vec2 {
        Vec2::new(self.points.z, self.points.w)
    }

    /// Länge des Segments.
    pub fn length(&self) -> f32 {
        self.start().distance(self.end())
    }

    /// Liefert ein Segment, das um `distance` Ticks entlang der eigenen
    /// Geschwindigkeit versetzt ist. Geschwindigkeit, Flags und Farbe werden kopiert.
    ///
    /// Negative Distanz versetzt rückwärts (Nachfolger hinter dem Leader).
    pub fn offset_along(&self, distance: f32) -> Self {
        Self {
            points: self.points + distance * self.velocity,
            ..*self
        }
    }
}
