//! Core types for the traffic simulation kernel

use std::fmt;

/// A wrapper type for vehicle IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u32);

/// A wrapper type for traffic light IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color shown by a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightState {
    Red,
    Yellow,
    #[default]
    Green,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LightState::Red => "Red",
            LightState::Yellow => "Yellow",
            LightState::Green => "Green",
        };
        f.write_str(label)
    }
}

/// Lifecycle of a kernel run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelPhase {
    /// Constructed, no step applied yet
    Created,
    /// At least one step applied, steps remain
    Running,
    /// Every configured step has been applied
    Finished,
}

/// Initial speeds (km/h) of the demo roster, vehicles 1..=5
pub const DEMO_ROSTER_SPEEDS: [u32; 5] = [50, 30, 40, 20, 60];

/// Number of traffic lights in the demo setup
pub const DEMO_LIGHT_COUNT: u32 = 3;

/// Acceleration multiplier applied by cars
pub const CAR_ACCELERATION_MULTIPLIER: u32 = 2;
