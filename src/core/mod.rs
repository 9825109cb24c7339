//! Core-Kinematik: Segmente, Kette, Regler und Canvas-Grenzen.
//!
//! Keine Abhängigkeit auf `app` oder `shared`; alles hier ist reine Logik
//! ohne Rendering- oder Fenster-Bezug.

pub mod bounds;
pub mod chain;
pub mod knob;
pub mod segment;

pub use bounds::{guard_escape, reflect_component, CanvasBounds, Reflection};
pub use chain::{ChainConfig, ChainMode, SegmentChain, TickInput};
pub use knob::{BoundedKnob, DragClamping, KnobGeometry};
pub use segment::Segment;
