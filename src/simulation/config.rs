//! Run configuration for the simulation kernel
//!
//! Defaults reproduce the classic ten-step Main Street run.

use super::error::{SimError, SimResult};

/// Default number of steps in a run
pub const DEFAULT_STEP_COUNT: u32 = 10;

/// Default distance a moving vehicle covers per step
pub const DEFAULT_MOVE_DISTANCE: i32 = 10;

/// Default speed gained per step (km/h)
pub const DEFAULT_ACCEL_INCREMENT: i32 = 5;

/// Default position at which vehicles stop
pub const DEFAULT_STOP_THRESHOLD: u32 = 50;

/// Default number of steps per light cycle; lights show Yellow on every multiple
pub const DEFAULT_LIGHT_CYCLE_PERIOD: u32 = 5;

/// Road the vehicles travel on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadConfig {
    pub name: String,
    /// Length in distance units. Must be positive.
    pub length: i32,
    /// Number of lanes. Must be positive.
    pub lanes: u32,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            name: "Main Street".to_string(),
            length: 1000,
            lanes: 2,
        }
    }
}

/// Parameters of a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub step_count: u32,
    pub move_distance: i32,
    pub accel_increment: i32,
    /// Vehicles at or beyond this position stop. `None` uses half the road length.
    pub stop_threshold: Option<u32>,
    pub light_cycle_period: u32,
    pub road: RoadConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            move_distance: DEFAULT_MOVE_DISTANCE,
            accel_increment: DEFAULT_ACCEL_INCREMENT,
            stop_threshold: Some(DEFAULT_STOP_THRESHOLD),
            light_cycle_period: DEFAULT_LIGHT_CYCLE_PERIOD,
            road: RoadConfig::default(),
        }
    }
}

impl SimConfig {
    /// Check the parameters that would make a run meaningless.
    ///
    /// Road dimensions are checked by `SimRoad::new`. Negative move distance or
    /// acceleration are accepted here and rejected per step instead.
    pub fn validate(&self) -> SimResult<()> {
        if self.step_count == 0 {
            return Err(SimError::Configuration(
                "step count must be at least 1".to_string(),
            ));
        }
        if self.light_cycle_period == 0 {
            return Err(SimError::Configuration(
                "light cycle period must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
