//! Zentrale Konfiguration der Linien-Simulation.
//!
//! `SimOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CanvasBounds, ChainConfig, ChainMode, DragClamping, KnobGeometry};
use anyhow::ensure;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Breite in Einheiten.
pub const CANVAS_WIDTH: f32 = 1000.0;
/// Canvas-Höhe in Einheiten.
pub const CANVAS_HEIGHT: f32 = 800.0;

// ── Kette ───────────────────────────────────────────────────────────

/// Versatz in Ticks zwischen Leader und Nachfolger.
pub const FOLLOW_DISTANCE: f32 = 10.0;
/// Obergrenze der zufälligen Startgeschwindigkeit pro Koordinate.
pub const MAX_SPEED: f32 = 3.0;
/// Anzahl Segmente beim Start.
pub const CHAIN_LENGTH: usize = 20;
/// Segmentfarbe (RGBA: White Smoke).
pub const SEGMENT_COLOR: [f32; 4] = [0.961, 0.961, 0.961, 1.0];

// ── Regler ──────────────────────────────────────────────────────────

/// Box-Kantenlänge der Regler.
pub const KNOB_BOX_SIZE: f32 = 40.0;
/// Knopfradius (Darstellung und Trefferfläche).
pub const KNOB_RADIUS: f32 = 5.0;
/// Box-Mitte des Reglers für den Startpunkt `(dx0, dy0)`.
pub const START_KNOB_CENTER: [f32; 2] = [660.0, 25.0];
/// Box-Mitte des Reglers für den Endpunkt `(dx1, dy1)`.
pub const END_KNOB_CENTER: [f32; 2] = [730.0, 25.0];

// ── Zeitschritt ─────────────────────────────────────────────────────

/// Referenz-Frame-Dauer in Sekunden, entspricht einem vollen Tick.
pub const REFERENCE_DT: f32 = 1.0 / 60.0;
/// Obergrenze der Schrittweite nach Frame-Aussetzern.
pub const MAX_STEP_SCALE: f32 = 4.0;

/// Alle zur Laufzeit änderbaren Simulations-Optionen.
/// Wird als `psychedelic_lines.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite
    pub canvas_width: f32,
    /// Canvas-Höhe
    pub canvas_height: f32,

    // ── Kette ───────────────────────────────────────────────────
    /// Anzahl Segmente beim Start
    pub chain_length: usize,
    /// Versatz in Ticks zwischen Leader und Nachfolger (>= 1)
    pub follow_distance: f32,
    /// Obergrenze der Startgeschwindigkeit pro Koordinate
    pub max_speed: f32,
    /// Integrationsmodus der Kette
    pub chain_mode: ChainMode,
    /// Farbe neuer Segmente (RGBA)
    pub segment_color: [f32; 4],

    // ── Zeitschritt ─────────────────────────────────────────────
    /// Schrittweite an `dt` koppeln statt fester Tick-Schritte
    pub scale_by_dt: bool,
    /// Frame-Dauer, die einem vollen Tick entspricht
    pub reference_dt: f32,
    /// Seed für reproduzierbare Läufe (ohne: Entropie)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    // ── Regler ──────────────────────────────────────────────────
    /// Verhalten beim Ziehen über die Box hinaus
    pub drag_clamping: DragClamping,
    /// Regler für `(dx0, dy0)`
    pub start_knob: KnobGeometry,
    /// Regler für `(dx1, dy1)`
    pub end_knob: KnobGeometry,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            chain_length: CHAIN_LENGTH,
            follow_distance: FOLLOW_DISTANCE,
            max_speed: MAX_SPEED,
            chain_mode: ChainMode::LeaderFollower,
            segment_color: SEGMENT_COLOR,

            scale_by_dt: false,
            reference_dt: REFERENCE_DT,
            seed: None,

            drag_clamping: DragClamping::Saturate,
            start_knob: default_knob(START_KNOB_CENTER),
            end_knob: default_knob(END_KNOB_CENTER),
        }
    }
}

fn default_knob(center: [f32; 2]) -> KnobGeometry {
    KnobGeometry {
        center: Vec2::from_array(center),
        size: Vec2::splat(KNOB_BOX_SIZE),
        radius: KNOB_RADIUS,
        value_range: Vec2::splat(MAX_SPEED),
    }
}

impl SimOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("psychedelic_lines"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("psychedelic_lines.toml")
    }

    /// Prüft alle Werte; ungültige Optionen werden nie übernommen.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.chain_config().validate()?;
        for (name, knob) in [("start_knob", &self.start_knob), ("end_knob", &self.end_knob)] {
            ensure!(
                knob.radius.is_finite() && knob.radius >= 0.0,
                "{name}: Radius muss >= 0 sein (ist {})",
                knob.radius
            );
            ensure!(
                knob.size.is_finite() && knob.size.min_element() >= 0.0,
                "{name}: Box-Größe muss >= 0 sein"
            );
            ensure!(
                knob.value_range.is_finite() && knob.value_range.min_element() >= 0.0,
                "{name}: Wertebereich muss >= 0 sein"
            );
        }
        if self.scale_by_dt {
            ensure!(
                self.reference_dt.is_finite() && self.reference_dt > 0.0,
                "reference_dt muss > 0 sein (ist {})",
                self.reference_dt
            );
        }
        Ok(())
    }

    /// Canvas-Grenzen aus den Optionen.
    pub fn canvas(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width, self.canvas_height)
    }

    /// Ketten-Konfiguration aus den Optionen.
    pub fn chain_config(&self) -> ChainConfig {
        ChainConfig {
            length: self.chain_length,
            canvas: self.canvas(),
            follow_distance: self.follow_distance,
            max_speed: self.max_speed,
            mode: self.chain_mode,
            color: self.segment_color,
        }
    }

    /// Schrittweite für eine Frame-Dauer `dt`.
    ///
    /// Ohne `scale_by_dt` ist jeder Tick ein voller Schritt.
    pub fn step_scale_for(&self, dt: f32) -> f32 {
        if !self.scale_by_dt {
            return 1.0;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        (dt / self.reference_dt).min(MAX_STEP_SCALE)
    }
}
