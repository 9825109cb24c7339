//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{BoundedKnob, Segment, SegmentChain};
use crate::shared::SimOptions;
use glam::{Vec2, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Index des Reglers für den Startpunkt `(dx0, dy0)`.
pub const START_KNOB: usize = 0;
/// Index des Reglers für den Endpunkt `(dx1, dy1)`.
pub const END_KNOB: usize = 1;

/// Gesamter Simulationszustand einer Sitzung.
pub struct AppState {
    /// Die Segment-Kette (exklusiv besessen)
    pub chain: SegmentChain,
    /// Regler für Start- und Endpunkt-Geschwindigkeit
    pub knobs: [BoundedKnob; 2],
    /// Laufzeit-Optionen
    pub options: SimOptions,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
    /// Anzahl ausgeführter Ticks
    pub tick_count: u64,
}

impl AppState {
    /// Erstellt den Zustand mit einer injizierten Zufallsquelle.
    ///
    /// Die Regler starten auf der Geschwindigkeit des Kopf-Segments.
    pub fn new<R: Rng>(options: SimOptions, rng: &mut R) -> anyhow::Result<Self> {
        options.validate()?;
        let chain = SegmentChain::new(options.chain_config(), rng)?;
        let knobs = build_knobs(&options, chain.head().velocity);

        Ok(Self {
            chain,
            knobs,
            options,
            command_log: CommandLog::new(),
            tick_count: 0,
        })
    }

    /// Erstellt einen reproduzierbaren Zustand aus einem Seed.
    pub fn from_seed(options: SimOptions, seed: u64) -> anyhow::Result<Self> {
        Self::new(options, &mut StdRng::seed_from_u64(seed))
    }

    /// Erstellt den Zustand mit dem Seed aus den Optionen, sonst aus Entropie.
    pub fn from_options(options: SimOptions) -> anyhow::Result<Self> {
        match options.seed {
            Some(seed) => Self::from_seed(options, seed),
            None => Self::new(options, &mut StdRng::from_entropy()),
        }
    }

    /// Segmente zum Zeichnen, Kopf zuerst.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.chain.segments()
    }

    /// Beide Regler in fester Reihenfolge.
    pub fn knobs(&self) -> &[BoundedKnob] {
        &self.knobs
    }

    /// Aktuelle Steuerwerte `(dx0, dy0, dx1, dy1)` aus den Reglern.
    pub fn steering(&self) -> Vec4 {
        let start = self.knobs[START_KNOB].output_value();
        let end = self.knobs[END_KNOB].output_value();
        Vec4::new(start.x, start.y, end.x, end.y)
    }
}

/// Baut beide Regler so, dass ihre Ausgaben `velocity` entsprechen.
pub(crate) fn build_knobs(options: &SimOptions, velocity: Vec4) -> [BoundedKnob; 2] {
    [
        BoundedKnob::new(
            options.start_knob,
            options.drag_clamping,
            Vec2::new(velocity.x, velocity.y),
        ),
        BoundedKnob::new(
            options.end_knob,
            options.drag_clamping,
            Vec2::new(velocity.z, velocity.w),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knobs_start_at_head_velocity() {
        let state = AppState::from_seed(SimOptions::default(), 99).expect("State");
        let head = *state.chain.head();
        let steering = state.steering();

        for i in 0..4 {
            assert_relative_eq!(steering[i], head.velocity[i], epsilon = 1e-4);
        }
        assert_eq!(state.segments().len(), SimOptions::default().chain_length);
        assert_eq!(state.knobs().len(), 2);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let options = SimOptions {
            chain_length: 0,
            ..SimOptions::default()
        };
        assert!(AppState::from_seed(options, 1).is_err());
    }

    #[test]
    fn test_seed_from_options_is_reproducible() {
        let options = SimOptions {
            seed: Some(5),
            ..SimOptions::default()
        };
        let a = AppState::from_options(options.clone()).expect("State a");
        let b = AppState::from_options(options).expect("State b");
        assert!(a.segments().eq(b.segments()));
    }
}
