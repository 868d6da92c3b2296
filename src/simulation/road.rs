//! Road storage for the traffic simulation
//!
//! A road keeps its vehicles in insertion order and never holds two vehicles
//! with the same id. It has no update logic of its own.

use super::config::RoadConfig;
use super::error::{SimError, SimResult};
use super::types::VehicleId;
use super::vehicle::SimVehicle;

/// A road carrying an ordered set of vehicles
#[derive(Debug, Clone)]
pub struct SimRoad {
    name: String,
    length: u32,
    lanes: u32,
    vehicles: Vec<SimVehicle>,
}

impl SimRoad {
    /// Create an empty road. Length and lane count must both be positive.
    pub fn new(name: impl Into<String>, length: i32, lanes: u32) -> SimResult<Self> {
        let name = name.into();
        if length <= 0 {
            return Err(SimError::Configuration(format!(
                "road '{}' length must be positive, got {}",
                name, length
            )));
        }
        if lanes == 0 {
            return Err(SimError::Configuration(format!(
                "road '{}' needs at least one lane",
                name
            )));
        }

        Ok(Self {
            name,
            length: length as u32,
            lanes,
            vehicles: Vec::new(),
        })
    }

    pub fn from_config(config: &RoadConfig) -> SimResult<Self> {
        Self::new(config.name.clone(), config.length, config.lanes)
    }

    /// Append a vehicle to the end of the road.
    /// Fails with `DuplicateId` and leaves the road untouched if the id is taken.
    /// Vehicle ids must be positive.
    pub fn add_vehicle(&mut self, vehicle: SimVehicle) -> SimResult<()> {
        if vehicle.id().0 == 0 {
            return Err(SimError::invalid_argument(
                "add_vehicle",
                "vehicle id must be positive",
            ));
        }
        if self.contains(vehicle.id()) {
            return Err(SimError::DuplicateId {
                kind: "vehicle",
                id: vehicle.id().0,
            });
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Remove the vehicle with the given id, if present
    pub fn remove_vehicle(&mut self, vehicle_id: VehicleId) -> Option<SimVehicle> {
        let index = self.vehicles.iter().position(|v| v.id() == vehicle_id)?;
        Some(self.vehicles.remove(index))
    }

    pub fn contains(&self, vehicle_id: VehicleId) -> bool {
        self.vehicles.iter().any(|v| v.id() == vehicle_id)
    }

    pub fn get_vehicle(&self, vehicle_id: VehicleId) -> Option<&SimVehicle> {
        self.vehicles.iter().find(|v| v.id() == vehicle_id)
    }

    pub fn vehicles(&self) -> &[SimVehicle] {
        &self.vehicles
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut [SimVehicle] {
        &mut self.vehicles
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn lanes(&self) -> u32 {
        self.lanes
    }
}
