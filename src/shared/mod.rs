//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und die Frame-Szene, die zwischen `app` und
//! externen Konsumenten geteilt werden.

mod frame_scene;
pub mod options;

pub use frame_scene::{FrameScene, KnobSprite, SegmentSprite};
pub use options::SimOptions;
