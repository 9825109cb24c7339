//! Frame-Szene als expliziter Übergabevertrag an den Zeichen-Kollaborateur.
//!
//! Lebt im shared-Modul, da `app` sie baut und externe Renderer sie konsumieren.

use crate::core::CanvasBounds;
use serde::Serialize;

/// Zu zeichnendes Liniensegment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentSprite {
    /// Endpunkte `(x0, y0, x1, y1)`
    pub points: [f32; 4],
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

/// Zu zeichnender Regler inklusive Telemetrie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KnobSprite {
    /// Box-Mitte
    pub center: [f32; 2],
    /// Box-Größe
    pub size: [f32; 2],
    /// Knopfradius
    pub radius: f32,
    /// Aktuelle Knopfposition
    pub knob_position: [f32; 2],
    /// Aktueller Ausgabewert
    pub output_value: [f32; 2],
    /// Ob der Regler gerade gezogen wird
    pub pressed: bool,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameScene {
    /// Anzahl bisher ausgeführter Ticks
    pub tick: u64,
    /// Zeichenfläche
    pub canvas: CanvasBounds,
    /// Segmente, Kopf zuerst
    pub segments: Vec<SegmentSprite>,
    /// Regler in fester Reihenfolge (Start, Ende)
    pub knobs: Vec<KnobSprite>,
}

impl FrameScene {
    /// Gibt zurück, ob Segmente zum Zeichnen vorhanden sind.
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}
