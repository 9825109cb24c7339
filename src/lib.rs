//! Psychedelic Lines Library.
//! Kinematik-Kern (Segment-Kette + Regler) als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog};
pub use core::{
    BoundedKnob, CanvasBounds, ChainConfig, ChainMode, DragClamping, KnobGeometry, Segment,
    SegmentChain, TickInput,
};
pub use shared::{FrameScene, SimOptions};
