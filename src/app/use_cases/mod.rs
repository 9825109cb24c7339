//! Use-Cases der Application-Layer-Orchestrierung.

pub mod kinematics;
pub mod knobs;
pub mod options;
