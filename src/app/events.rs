//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::ChainMode;
use crate::shared::SimOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Fenster/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Frame-Tick mit vergangener Zeit in Sekunden
    Tick { dt: f32 },
    /// Pointer gedrückt (Canvas-Koordinaten)
    PointerDown { pos: glam::Vec2 },
    /// Pointer bewegt
    PointerMove { pos: glam::Vec2 },
    /// Pointer losgelassen
    PointerUp { pos: glam::Vec2 },
    /// Integrationsmodus der Kette wechseln
    SetChainModeRequested { mode: ChainMode },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: SimOptions },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kette um einen Tick weiterbewegen
    AdvanceChain { step_scale: f32 },
    /// Alle Regler einen Pointer-Druck prüfen lassen
    PressKnobs { pos: glam::Vec2 },
    /// Kette hinten um ein Segment verlängern
    SpawnTrailSegment,
    /// Gedrückte Regler Richtung Pointer ziehen
    DragKnobs { pos: glam::Vec2 },
    /// Alle Regler lösen
    ReleaseKnobs,
    /// Integrationsmodus setzen
    SetChainMode { mode: ChainMode },
    /// Neue Optionen validieren und übernehmen
    ApplyOptions { options: SimOptions },
}
