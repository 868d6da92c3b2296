//! Standalone traffic simulation kernel
//!
//! Vehicles travel along a single road and stop once they pass a threshold,
//! while traffic lights cycle between Green and Yellow. A run is a fixed
//! number of deterministic steps, each producing a `StepReport`.

mod config;
mod error;
mod kernel;
mod report;
mod road;
mod roster;
mod traffic_light;
mod types;
mod vehicle;

pub use config::{
    RoadConfig, SimConfig, DEFAULT_ACCEL_INCREMENT, DEFAULT_LIGHT_CYCLE_PERIOD,
    DEFAULT_MOVE_DISTANCE, DEFAULT_STEP_COUNT, DEFAULT_STOP_THRESHOLD,
};
pub use error::{SimError, SimResult};
pub use kernel::{SimKernel, StepReports};
pub use report::{LightReport, StepReport, VehicleEvent, VehicleReport};
pub use road::SimRoad;
pub use roster::{
    demo_lights, demo_roster, lights, random_roster, RANDOM_MAX_SPEED, RANDOM_MIN_SPEED,
};
pub use traffic_light::SimTrafficLight;
pub use types::{
    KernelPhase, LightId, LightState, VehicleId, CAR_ACCELERATION_MULTIPLIER,
    DEMO_LIGHT_COUNT, DEMO_ROSTER_SPEEDS,
};
pub use vehicle::SimVehicle;
