//! Segment-Kette mit Rand-Reflexion und Follow-the-Leader-Wachstum.
//!
//! Index 0 ist immer der Kopf (jüngster Leader), das hintere Ende der
//! älteste Nachfolger. Wachstum nach vorn passiert beim Tick im
//! Leader-Follower-Modus, Wachstum nach hinten über `spawn_from_tail()`.

use super::bounds::{guard_escape, reflect_component, CanvasBounds, Reflection};
use super::segment::Segment;
use anyhow::ensure;
use glam::Vec4;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};

/// Integrationsmodus der Kette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainMode {
    /// Jedes Segment bewegt und reflektiert sich selbst
    Independent,
    /// Nur der Kopf wird reflektiert; jeder Tick schiebt einen neuen Leader
    /// vorn ein und entfernt den ältesten Nachfolger
    #[default]
    LeaderFollower,
}

/// Parameter für Aufbau und Bewegung einer Kette.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    /// Anzahl Segmente beim Aufbau
    pub length: usize,
    /// Zeichenfläche
    pub canvas: CanvasBounds,
    /// Versatz in Ticks zwischen Leader und Nachfolger
    pub follow_distance: f32,
    /// Obergrenze (exklusiv) der zufälligen Startgeschwindigkeit pro Koordinate
    pub max_speed: f32,
    /// Integrationsmodus
    pub mode: ChainMode,
    /// Farbe neuer Segmente
    pub color: [f32; 4],
}

impl ChainConfig {
    /// Prüft die Konfiguration auf gültige Werte.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.length >= 1, "Kette braucht mindestens ein Segment");
        ensure!(
            self.canvas.width > 0.0 && self.canvas.height > 0.0,
            "Canvas-Größe muss positiv sein ({} x {})",
            self.canvas.width,
            self.canvas.height
        );
        ensure!(
            self.follow_distance.is_finite() && self.follow_distance >= 1.0,
            "follow_distance muss >= 1 sein (ist {})",
            self.follow_distance
        );
        ensure!(
            self.max_speed.is_finite() && self.max_speed >= 0.0,
            "max_speed muss >= 0 sein (ist {})",
            self.max_speed
        );
        Ok(())
    }
}

/// Eingaben für einen einzelnen Tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Steuerwerte `(dx0, dy0, dx1, dy1)`, überschreiben die Kopf-Geschwindigkeit
    /// nach dem Schritt (multipliziert mit den Richtungs-Flags)
    pub steering: Option<Vec4>,
    /// Schrittweite relativ zum festen Tick (1.0 = ein voller Tick)
    pub step_scale: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            steering: None,
            step_scale: 1.0,
        }
    }
}

/// Geordnete Kette von Liniensegmenten, exklusiv besessen.
#[derive(Debug, Clone)]
pub struct SegmentChain {
    segments: VecDeque<Segment>,
    config: ChainConfig,
}

impl SegmentChain {
    /// Baut eine Kette mit zufälligem Kopf auf.
    ///
    /// Der Kopf liegt gleichverteilt im Canvas, jede Geschwindigkeitskomponente
    /// in `[0, max_speed)`. Jeder weitere Nachfolger liegt `follow_distance`
    /// Ticks hinter seinem Vorgänger und übernimmt die Kopf-Geschwindigkeit.
    pub fn new<R: Rng>(config: ChainConfig, rng: &mut R) -> anyhow::Result<Self> {
        config.validate()?;

        let head = random_head(&config, rng);
        let mut segments = VecDeque::with_capacity(config.length);
        segments.push_back(head);
        while segments.len() < config.length {
            let previous = segments[segments.len() - 1];
            segments.push_back(previous.offset_along(-config.follow_distance));
        }

        log::debug!(
            "Kette aufgebaut: {} Segmente, Kopf {:?}, Geschwindigkeit {:?}",
            segments.len(),
            head.points,
            head.velocity
        );

        Ok(Self { segments, config })
    }

    /// Übernimmt eine explizite Segmentliste (Kopf zuerst).
    pub fn from_segments(
        mut config: ChainConfig,
        segments: impl IntoIterator<Item = Segment>,
    ) -> anyhow::Result<Self> {
        let segments: VecDeque<Segment> = segments.into_iter().collect();
        ensure!(!segments.is_empty(), "Kette braucht mindestens ein Segment");
        config.length = segments.len();
        config.validate()?;
        Ok(Self { segments, config })
    }

    /// Ein fester Tick ohne Steuerung.
    pub fn advance(&mut self) -> &VecDeque<Segment> {
        self.advance_with(&TickInput::default())
    }

    /// Führt einen Tick aus und liefert die aktuellen Segmente, Kopf zuerst.
    ///
    /// Der Ringpuffer wird dabei nicht umsortiert, ein Tick kostet im
    /// Leader-Follower-Modus unabhängig von der Kettenlänge gleich viel.
    pub fn advance_with(&mut self, input: &TickInput) -> &VecDeque<Segment> {
        let step_scale = sanitize_step_scale(input.step_scale);

        match self.config.mode {
            ChainMode::Independent => self.advance_independent(step_scale),
            ChainMode::LeaderFollower => self.advance_leader_follower(step_scale),
        }

        if let Some(steering) = input.steering {
            self.steer_head(steering);
        }

        &self.segments
    }

    fn advance_independent(&mut self, step_scale: f32) {
        let canvas = self.config.canvas;
        let limits = canvas.limits();
        let lookahead = self.config.follow_distance * step_scale;

        for segment in self.segments.iter_mut() {
            for i in 0..4 {
                let position = segment.points[i];
                let velocity = segment.velocity[i];
                let probe = position + lookahead * velocity;

                match reflect_component(probe, velocity, limits[i]) {
                    Reflection::Reversed(reversed) => {
                        // Position bleibt in diesem Tick stehen
                        segment.velocity[i] = reversed;
                        segment.sign[i] = -segment.sign[i];
                    }
                    Reflection::Inward | Reflection::Clear => {
                        let step = velocity * step_scale;
                        let moved = position + step;
                        segment.points[i] = if canvas.contains_coordinate(i, position) {
                            guard_escape(moved, step, limits[i])
                        } else {
                            moved
                        };
                    }
                }
            }
        }
    }

    fn advance_leader_follower(&mut self, step_scale: f32) {
        let Some(head) = self.segments.front().copied() else {
            return;
        };
        let canvas = self.config.canvas;
        let limits = canvas.limits();
        let distance = self.config.follow_distance * step_scale;

        let mut leader = head.offset_along(distance);
        for i in 0..4 {
            if canvas.contains_coordinate(i, head.points[i]) {
                leader.points[i] =
                    guard_escape(leader.points[i], distance * head.velocity[i], limits[i]);
            }
            if let Reflection::Reversed(reversed) =
                reflect_component(leader.points[i], leader.velocity[i], limits[i])
            {
                leader.velocity[i] = reversed;
                leader.sign[i] = -leader.sign[i];
            }
        }

        // Erst schrumpfen, dann wachsen: Länge bleibt gleich, nie leer
        self.segments.pop_back();
        self.segments.push_front(leader);
    }

    /// Überschreibt die Kopf-Geschwindigkeit mit `steering * sign`.
    pub fn steer_head(&mut self, steering: Vec4) {
        if let Some(head) = self.segments.front_mut() {
            head.velocity = steering * head.sign;
        }
    }

    /// Hängt hinten ein Segment an, `follow_distance` Ticks hinter dem Ende.
    pub fn spawn_from_tail(&mut self) {
        let Some(tail) = self.segments.back().copied() else {
            return;
        };
        let spawned = tail.offset_along(-self.config.follow_distance);
        self.segments.push_back(spawned);
        log::debug!(
            "Segment angehängt: {:?} (Länge {})",
            spawned.points,
            self.segments.len()
        );
    }

    /// Kürzt die Kette am alten Ende auf `keep` Segmente, mindestens eines.
    pub fn truncate_tail(&mut self, keep: usize) {
        self.segments.truncate(keep.max(1));
    }

    /// Übernimmt eine neue Konfiguration und passt die Länge an.
    ///
    /// Bestehende Segmente bleiben erhalten; fehlende werden hinten angehängt.
    pub fn reconfigure(&mut self, config: ChainConfig) -> anyhow::Result<()> {
        config.validate()?;
        let target = config.length;
        self.config = config;
        if self.segments.len() > target {
            self.truncate_tail(target);
        }
        while self.segments.len() < target {
            self.spawn_from_tail();
        }
        Ok(())
    }

    /// Alle Segmente, Kopf zuerst.
    pub fn segments(&self) -> vec_deque::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Der aktuelle Kopf (Leader).
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// Das älteste Segment.
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Segment an Position `index` (0 = Kopf).
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Anzahl Segmente (immer >= 1).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Immer `false`, eine Kette hat mindestens ein Segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Aktueller Integrationsmodus.
    pub fn mode(&self) -> ChainMode {
        self.config.mode
    }

    /// Wechselt den Integrationsmodus.
    pub fn set_mode(&mut self, mode: ChainMode) {
        self.config.mode = mode;
    }

    /// Aktive Konfiguration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

fn random_head<R: Rng>(config: &ChainConfig, rng: &mut R) -> Segment {
    let canvas = config.canvas;
    let points = Vec4::new(
        rng.gen_range(0.0..canvas.width),
        rng.gen_range(0.0..canvas.height),
        rng.gen_range(0.0..canvas.width),
        rng.gen_range(0.0..canvas.height),
    );
    let mut velocity = Vec4::ZERO;
    if config.max_speed > 0.0 {
        for i in 0..4 {
            velocity[i] = rng.gen_range(0.0..config.max_speed);
        }
    }
    Segment::new(points, velocity, config.color)
}

fn sanitize_step_scale(step_scale: f32) -> f32 {
    if step_scale.is_finite() && step_scale >= 0.0 {
        step_scale
    } else {
        log::warn!("Ungültige Schrittweite {}, verwende 0", step_scale);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn config(mode: ChainMode, length: usize) -> ChainConfig {
        ChainConfig {
            length,
            canvas: CanvasBounds::new(800.0, 600.0),
            follow_distance: 10.0,
            max_speed: 3.0,
            mode,
            color: WHITE,
        }
    }

    fn segment(points: [f32; 4], velocity: [f32; 4]) -> Segment {
        Segment::new(Vec4::from_array(points), Vec4::from_array(velocity), WHITE)
    }

    fn assert_vec4_eq(actual: Vec4, expected: [f32; 4]) {
        for i in 0..4 {
            assert_relative_eq!(actual[i], expected[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_head_near_corner_reflects_outward_axes() {
        let head = segment([10.0, 10.0, 50.0, 50.0], [-1.0, -1.0, 1.0, 1.0]);
        let mut chain = SegmentChain::from_segments(
            config(ChainMode::Independent, 3),
            [head, head.offset_along(-10.0), head.offset_along(-20.0)],
        )
        .expect("Kette sollte gültig sein");

        chain.advance();

        assert_vec4_eq(chain.head().velocity, [1.0, 1.0, 1.0, 1.0]);
        assert_vec4_eq(chain.head().points, [10.0, 10.0, 51.0, 51.0]);
        assert_vec4_eq(chain.head().sign, [-1.0, -1.0, 1.0, 1.0]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_one_step_crossing_always_reverses_velocity() {
        // c + v überschreitet jeweils die Grenze
        let cases = [
            ([0.5, 300.0, 400.0, 300.0], [-1.0, 0.0, 0.0, 0.0], 0),
            ([400.0, 599.0, 400.0, 300.0], [0.0, 2.5, 0.0, 0.0], 1),
            ([400.0, 300.0, 799.5, 300.0], [0.0, 0.0, 0.5, 0.0], 2),
            ([400.0, 300.0, 400.0, 1.0], [0.0, 0.0, 0.0, -3.0], 3),
        ];

        for (points, velocity, axis) in cases {
            let mut chain = SegmentChain::from_segments(
                config(ChainMode::Independent, 1),
                [segment(points, velocity)],
            )
            .expect("Kette sollte gültig sein");

            chain.advance();

            let head = chain.head();
            assert_relative_eq!(head.velocity[axis], -velocity[axis]);
            assert!(CanvasBounds::new(800.0, 600.0).contains_coordinate(axis, head.points[axis]));
        }
    }

    #[test]
    fn test_construction_places_followers_behind_head() {
        let mut rng = StdRng::seed_from_u64(7);
        let chain = SegmentChain::new(config(ChainMode::LeaderFollower, 5), &mut rng)
            .expect("Kette sollte aufgebaut werden");

        assert_eq!(chain.len(), 5);
        let head = *chain.head();
        for i in 0..4 {
            assert!((0.0..3.0).contains(&head.velocity[i]));
        }
        assert!(CanvasBounds::new(800.0, 600.0).contains_point(head.start()));
        assert!(CanvasBounds::new(800.0, 600.0).contains_point(head.end()));

        let segments: Vec<Segment> = chain.segments().copied().collect();
        for pair in segments.windows(2) {
            let (leader, follower) = (pair[0], pair[1]);
            assert_eq!(follower.velocity, head.velocity);
            for i in 0..4 {
                assert_relative_eq!(
                    follower.points[i],
                    leader.points[i] - 10.0 * leader.velocity[i],
                    epsilon = 1e-3
                );
            }
        }
    }

    #[test]
    fn test_same_seed_builds_same_chain() {
        let a = SegmentChain::new(
            config(ChainMode::LeaderFollower, 4),
            &mut StdRng::seed_from_u64(42),
        )
        .expect("Kette a");
        let b = SegmentChain::new(
            config(ChainMode::LeaderFollower, 4),
            &mut StdRng::seed_from_u64(42),
        )
        .expect("Kette b");

        assert!(a.segments().eq(b.segments()));
    }

    #[test]
    fn test_zero_max_speed_builds_resting_chain() {
        let mut cfg = config(ChainMode::LeaderFollower, 3);
        cfg.max_speed = 0.0;
        let chain = SegmentChain::new(cfg, &mut StdRng::seed_from_u64(1)).expect("Kette");

        assert_eq!(chain.head().velocity, Vec4::ZERO);
        assert_eq!(chain.head().points, chain.tail().points);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(SegmentChain::new(config(ChainMode::Independent, 0), &mut rng).is_err());

        let mut cfg = config(ChainMode::Independent, 3);
        cfg.follow_distance = 0.5;
        assert!(SegmentChain::new(cfg, &mut rng).is_err());

        assert!(
            SegmentChain::from_segments(config(ChainMode::Independent, 1), Vec::new()).is_err()
        );
    }

    #[test]
    fn test_leader_follower_keeps_length_over_many_ticks() {
        let mut chain = SegmentChain::new(
            config(ChainMode::LeaderFollower, 20),
            &mut StdRng::seed_from_u64(3),
        )
        .expect("Kette");

        for _ in 0..500 {
            let len = chain.advance().len();
            assert_eq!(len, 20);
        }
    }

    #[test]
    fn test_advance_yields_head_first_after_ring_wraps() {
        let head = segment([100.0, 100.0, 200.0, 200.0], [1.0, 1.0, 1.0, 1.0]);
        let mut chain = SegmentChain::from_segments(
            config(ChainMode::LeaderFollower, 4),
            [
                head,
                head.offset_along(-10.0),
                head.offset_along(-20.0),
                head.offset_along(-30.0),
            ],
        )
        .expect("Kette");

        for tick in 1..=6 {
            let xs: Vec<f32> = chain.advance().iter().map(|s| s.points.x).collect();
            let newest = 100.0 + 10.0 * tick as f32;
            assert_eq!(xs.len(), 4);
            for (offset, x) in xs.iter().enumerate() {
                assert_relative_eq!(*x, newest - 10.0 * offset as f32, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_leader_follower_pushes_new_leader_in_front() {
        let head = segment([100.0, 100.0, 200.0, 200.0], [1.0, 2.0, -1.0, 0.5]);
        let tail = head.offset_along(-10.0);
        let mut chain =
            SegmentChain::from_segments(config(ChainMode::LeaderFollower, 2), [head, tail])
                .expect("Kette");

        chain.advance();

        assert_vec4_eq(chain.head().points, [110.0, 120.0, 190.0, 205.0]);
        assert_eq!(chain.get(1).map(|s| s.points), Some(head.points));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_leader_follower_reflects_only_new_leader() {
        let head = segment([5.0, 300.0, 400.0, 300.0], [-1.0, 0.0, 0.0, 0.0]);
        // Nachfolger liegt außerhalb, wird aber nie reflektiert
        let outside = segment([-50.0, 300.0, 400.0, 300.0], [-1.0, 0.0, 0.0, 0.0]);
        let mut chain = SegmentChain::from_segments(
            config(ChainMode::LeaderFollower, 3),
            [head, outside, outside],
        )
        .expect("Kette");

        chain.advance();

        let leader = chain.head();
        assert_relative_eq!(leader.points.x, -5.0);
        assert_relative_eq!(leader.velocity.x, 1.0);
        assert_relative_eq!(leader.sign.x, -1.0);
        assert_relative_eq!(chain.get(2).map(|s| s.velocity.x).unwrap_or(0.0), -1.0);
    }

    #[test]
    fn test_steering_respects_accumulated_flags() {
        let head = segment([5.0, 300.0, 400.0, 300.0], [-1.0, 0.0, 0.0, 0.0]);
        let mut chain =
            SegmentChain::from_segments(config(ChainMode::LeaderFollower, 1), [head])
                .expect("Kette");

        let input = TickInput {
            steering: Some(Vec4::new(-2.0, 0.0, 1.0, 0.0)),
            step_scale: 1.0,
        };
        chain.advance_with(&input);

        // x wurde reflektiert: Steuerwert -2 wird zu +2
        assert_vec4_eq(chain.head().velocity, [2.0, 0.0, 1.0, 0.0]);

        chain.advance_with(&input);
        assert_relative_eq!(chain.head().points.x, 15.0);
        assert_relative_eq!(chain.head().velocity.x, 2.0);
    }

    #[test]
    fn test_independent_keeps_in_canvas_segments_inside() {
        let mut chain = SegmentChain::new(
            config(ChainMode::Independent, 1),
            &mut StdRng::seed_from_u64(11),
        )
        .expect("Kette");
        let canvas = CanvasBounds::new(800.0, 600.0);

        for _ in 0..2000 {
            chain.advance();
            let head = chain.head();
            for i in 0..4 {
                assert!(canvas.contains_coordinate(i, head.points[i]));
            }
        }
    }

    #[test]
    fn test_independent_segment_outside_travels_back_in() {
        let stray = segment([-50.0, 300.0, 400.0, 300.0], [-1.0, 0.0, 0.0, 0.0]);
        let mut chain =
            SegmentChain::from_segments(config(ChainMode::Independent, 1), [stray]).expect("Kette");

        chain.advance();
        assert_relative_eq!(chain.head().velocity.x, 1.0);
        assert_relative_eq!(chain.head().points.x, -50.0);

        for _ in 0..60 {
            chain.advance();
        }
        assert!(chain.head().points.x > 0.0);
    }

    #[test]
    fn test_step_scale_halves_motion() {
        let head = segment([100.0, 100.0, 200.0, 200.0], [2.0, 2.0, 2.0, 2.0]);
        let mut chain =
            SegmentChain::from_segments(config(ChainMode::Independent, 1), [head]).expect("Kette");

        chain.advance_with(&TickInput {
            steering: None,
            step_scale: 0.5,
        });

        assert_vec4_eq(chain.head().points, [101.0, 101.0, 201.0, 201.0]);
    }

    #[test]
    fn test_spawn_from_tail_grows_by_one_behind_tail() {
        let mut chain = SegmentChain::new(
            config(ChainMode::LeaderFollower, 3),
            &mut StdRng::seed_from_u64(5),
        )
        .expect("Kette");
        let old_tail = *chain.tail();

        chain.spawn_from_tail();

        assert_eq!(chain.len(), 4);
        let new_tail = chain.tail();
        assert_eq!(new_tail.velocity, old_tail.velocity);
        for i in 0..4 {
            assert_relative_eq!(
                new_tail.points[i],
                old_tail.points[i] - 10.0 * old_tail.velocity[i],
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn test_truncate_never_empties_chain() {
        let mut chain = SegmentChain::new(
            config(ChainMode::LeaderFollower, 4),
            &mut StdRng::seed_from_u64(9),
        )
        .expect("Kette");

        chain.truncate_tail(0);

        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        chain.advance();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_reconfigure_resizes_chain() {
        let mut chain = SegmentChain::new(
            config(ChainMode::LeaderFollower, 4),
            &mut StdRng::seed_from_u64(9),
        )
        .expect("Kette");

        chain
            .reconfigure(config(ChainMode::Independent, 7))
            .expect("Reconfigure sollte gelingen");
        assert_eq!(chain.len(), 7);
        assert_eq!(chain.mode(), ChainMode::Independent);

        chain
            .reconfigure(config(ChainMode::Independent, 2))
            .expect("Reconfigure sollte gelingen");
        assert_eq!(chain.len(), 2);

        assert!(chain.reconfigure(config(ChainMode::Independent, 0)).is_err());
        assert_eq!(chain.len(), 2);
    }
}
