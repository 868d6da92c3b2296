//! Per-step observations produced by the kernel
//!
//! Reports are plain data; `Display` renders them as the console lines of a
//! run, one line per vehicle event and one per traffic light.

use std::fmt;

use super::error::SimError;
use super::types::{LightId, LightState, VehicleId};

/// Something that happened to a vehicle during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleEvent {
    Moved { position: u32 },
    SpeedIncreased { speed: u32 },
    Stopped { position: u32 },
}

/// State of one vehicle after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleReport {
    pub id: VehicleId,
    pub position: u32,
    pub speed: u32,
    /// Events in the order they happened
    pub events: Vec<VehicleEvent>,
    /// Set when the vehicle's update was abandoned for this step
    pub skipped: Option<SimError>,
}

/// State of one traffic light after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightReport {
    pub id: LightId,
    pub state: LightState,
}

/// Everything observed during one simulation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based step number
    pub step: u32,
    pub vehicles: Vec<VehicleReport>,
    pub lights: Vec<LightReport>,
}

impl StepReport {
    pub fn vehicle(&self, vehicle_id: VehicleId) -> Option<&VehicleReport> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    pub fn light(&self, light_id: LightId) -> Option<&LightReport> {
        self.lights.iter().find(|l| l.id == light_id)
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Step {}:", self.step)?;

        for vehicle in &self.vehicles {
            for event in &vehicle.events {
                match event {
                    VehicleEvent::Moved { position } => {
                        writeln!(f, "Vehicle {} position: {}", vehicle.id, position)?
                    }
                    VehicleEvent::SpeedIncreased { speed } => {
                        writeln!(f, "Vehicle {} speed increased to {} km/h", vehicle.id, speed)?
                    }
                    VehicleEvent::Stopped { position } => writeln!(
                        f,
                        "Vehicle {} has stopped at position {}",
                        vehicle.id, position
                    )?,
                }
            }
        }

        for light in &self.lights {
            writeln!(f, "Traffic light {} state: {}", light.id, light.state)?;
        }

        Ok(())
    }
}
