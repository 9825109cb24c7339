//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_scene;
pub mod handlers;
mod intent_mapping;
/// Simulationszustand einer Sitzung (Kette, Regler, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_scene::build as build_frame_scene;
pub use state::{AppState, END_KNOB, START_KNOB};
