//! Vehicle movement logic for the traffic simulation

use std::hash::{Hash, Hasher};

use super::error::{SimError, SimResult};
use super::types::{VehicleId, CAR_ACCELERATION_MULTIPLIER};

/// A vehicle in the traffic simulation
///
/// Vehicles compare equal when their ids match, whatever their motion state.
#[derive(Debug, Clone)]
pub struct SimVehicle {
    id: VehicleId,
    /// Current speed in km/h
    speed: u32,
    /// Distance travelled along the road, never decreases
    position: u32,
    /// Factor applied to every acceleration increment
    acceleration_multiplier: u32,
    /// Set by `stop`; a stopped vehicle never moves or speeds up again
    stopped: bool,
}

impl SimVehicle {
    /// Create a vehicle at position 0
    pub fn new(id: VehicleId, speed: u32) -> Self {
        Self {
            id,
            speed,
            position: 0,
            acceleration_multiplier: 1,
            stopped: false,
        }
    }

    /// Create a car, which accelerates twice as hard as a plain vehicle
    pub fn car(id: VehicleId, speed: u32) -> Self {
        Self::new(id, speed).with_acceleration_multiplier(CAR_ACCELERATION_MULTIPLIER)
    }

    pub fn with_acceleration_multiplier(mut self, multiplier: u32) -> Self {
        self.acceleration_multiplier = multiplier;
        self
    }

    /// Advance by `distance` if the vehicle is moving.
    ///
    /// A vehicle with zero speed stays where it is. Returns the position after the move.
    pub fn move_by(&mut self, distance: i32) -> SimResult<u32> {
        let distance = u32::try_from(distance).map_err(|_| {
            SimError::invalid_argument("move", format!("distance {} is negative", distance))
        })?;

        if self.speed > 0 {
            self.position = self.position.checked_add(distance).ok_or_else(|| {
                SimError::invalid_argument(
                    "move",
                    format!("position {} + {} overflows", self.position, distance),
                )
            })?;
        }

        Ok(self.position)
    }

    /// Set speed to zero for good. Returns the position the vehicle stopped at.
    pub fn stop(&mut self) -> u32 {
        self.speed = 0;
        self.stopped = true;
        self.position
    }

    /// Raise speed by `increment` times the acceleration multiplier.
    /// Returns the new speed, which stays 0 once the vehicle has been stopped.
    pub fn accelerate(&mut self, increment: i32) -> SimResult<u32> {
        let increment = u32::try_from(increment).map_err(|_| {
            SimError::invalid_argument("accelerate", format!("increment {} is negative", increment))
        })?;

        if self.stopped {
            return Ok(self.speed);
        }

        let new_speed = increment
            .checked_mul(self.acceleration_multiplier)
            .and_then(|delta| self.speed.checked_add(delta))
            .ok_or_else(|| {
                SimError::invalid_argument(
                    "accelerate",
                    format!("speed {} + {} overflows", self.speed, increment),
                )
            })?;

        self.speed = new_speed;
        Ok(self.speed)
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn acceleration_multiplier(&self) -> u32 {
        self.acceleration_multiplier
    }

    /// True once `stop` has been called. A vehicle created with zero speed is
    /// not stopped and can still accelerate.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl PartialEq for SimVehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SimVehicle {}

impl Hash for SimVehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
