//! Traffic Simulation Kernel
//!
//! A small deterministic traffic simulation: vehicles advance along a road,
//! accelerate and stop, while traffic lights cycle between colors.

pub mod simulation;
