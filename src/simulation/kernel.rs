//! Main simulation kernel that ties everything together
//!
//! The kernel exclusively owns its road (and through it every vehicle) and its
//! traffic lights. Steps are applied strictly in order because position and
//! speed accumulate from one step to the next.

use std::collections::HashSet;
use std::iter::FusedIterator;

use log::{debug, info, warn};

use super::config::SimConfig;
use super::error::{SimError, SimResult};
use super::report::{LightReport, StepReport, VehicleEvent, VehicleReport};
use super::road::SimRoad;
use super::roster;
use super::traffic_light::SimTrafficLight;
use super::types::{KernelPhase, LightState, VehicleId};
use super::vehicle::SimVehicle;

/// Per-step update rules, resolved from the config once at construction
#[derive(Debug, Clone, Copy)]
struct StepRules {
    move_distance: i32,
    accel_increment: i32,
    stop_threshold: u32,
    light_cycle_period: u32,
}

/// The simulation kernel
pub struct SimKernel {
    road: SimRoad,
    lights: Vec<SimTrafficLight>,
    rules: StepRules,
    step_count: u32,
    steps_completed: u32,
    phase: KernelPhase,
}

impl SimKernel {
    /// Build a kernel from a config and its initial roster.
    ///
    /// Any invalid road dimension, cycle period, step count, zero id or
    /// duplicated id fails with `SimError::Configuration`.
    pub fn new(
        config: SimConfig,
        vehicles: Vec<SimVehicle>,
        lights: Vec<SimTrafficLight>,
    ) -> SimResult<Self> {
        config.validate()?;

        let mut road = SimRoad::from_config(&config.road)?;
        for vehicle in vehicles {
            road.add_vehicle(vehicle)
                .map_err(|err| SimError::Configuration(format!("initial roster: {}", err)))?;
        }

        let mut light_ids = HashSet::new();
        for light in &lights {
            if light.id().0 == 0 {
                return Err(SimError::Configuration(
                    "initial lights: traffic light id must be positive".to_string(),
                ));
            }
            if !light_ids.insert(light.id()) {
                return Err(SimError::Configuration(format!(
                    "initial lights: {}",
                    SimError::DuplicateId {
                        kind: "traffic light",
                        id: light.id().0,
                    }
                )));
            }
        }

        let rules = StepRules {
            move_distance: config.move_distance,
            accel_increment: config.accel_increment,
            stop_threshold: config.stop_threshold.unwrap_or(road.length() / 2),
            light_cycle_period: config.light_cycle_period,
        };

        info!(
            "Kernel created on '{}' ({} units, {} lanes): {} vehicles, {} lights, {} steps, stop threshold {}",
            road.name(),
            road.length(),
            road.lanes(),
            road.vehicle_count(),
            lights.len(),
            config.step_count,
            rules.stop_threshold
        );

        Ok(Self {
            road,
            lights,
            rules,
            step_count: config.step_count,
            steps_completed: 0,
            phase: KernelPhase::Created,
        })
    }

    /// Create the classic Main Street setup: five vehicles, three lights, ten steps
    pub fn create_demo_kernel() -> SimResult<Self> {
        Self::new(
            SimConfig::default(),
            roster::demo_roster(),
            roster::demo_lights(),
        )
    }

    /// Add a vehicle to the road. The id must not already be in use.
    pub fn add_vehicle(&mut self, vehicle: SimVehicle) -> SimResult<()> {
        self.road.add_vehicle(vehicle)
    }

    /// Remove a vehicle from the road; no-op if it is not there
    pub fn remove_vehicle(&mut self, vehicle_id: VehicleId) -> Option<SimVehicle> {
        self.road.remove_vehicle(vehicle_id)
    }

    /// Number of vehicles currently owned by the kernel
    pub fn vehicle_count(&self) -> usize {
        self.road.vehicle_count()
    }

    pub fn road(&self) -> &SimRoad {
        &self.road
    }

    pub fn lights(&self) -> &[SimTrafficLight] {
        &self.lights
    }

    pub fn phase(&self) -> KernelPhase {
        self.phase
    }

    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    pub fn remaining_steps(&self) -> u32 {
        self.step_count - self.steps_completed
    }

    pub fn stop_threshold(&self) -> u32 {
        self.rules.stop_threshold
    }

    /// Apply the next step and report what happened.
    ///
    /// Fails with `InvalidState` once every configured step has run.
    pub fn simulate_step(&mut self) -> SimResult<StepReport> {
        match self.phase {
            KernelPhase::Finished => {
                return Err(SimError::InvalidState { phase: self.phase });
            }
            KernelPhase::Created => {
                info!("Starting simulation on '{}'", self.road.name());
                self.phase = KernelPhase::Running;
            }
            KernelPhase::Running => {}
        }

        let step = self.steps_completed + 1;
        let rules = self.rules;

        let vehicles = self
            .road
            .vehicles_mut()
            .iter_mut()
            .map(|vehicle| update_vehicle(vehicle, &rules, step))
            .collect();

        let light_state = light_state_for_step(step, rules.light_cycle_period);
        let lights = self
            .lights
            .iter_mut()
            .map(|light| {
                light.change_state(light_state);
                LightReport {
                    id: light.id(),
                    state: light.state(),
                }
            })
            .collect();

        self.steps_completed = step;
        debug!("Step {} applied, lights {}", step, light_state);

        if self.steps_completed == self.step_count {
            self.phase = KernelPhase::Finished;
            info!("Simulation finished after {} steps", self.steps_completed);
        }

        Ok(StepReport {
            step,
            vehicles,
            lights,
        })
    }

    /// Lazily run up to `n` steps, stopping early if the run finishes.
    ///
    /// Each step is applied only when the iterator is advanced.
    pub fn run_steps(&mut self, n: u32) -> SimResult<StepReports<'_>> {
        if self.phase == KernelPhase::Finished {
            return Err(SimError::InvalidState { phase: self.phase });
        }
        Ok(StepReports {
            kernel: self,
            remaining: n,
        })
    }

    /// Lazily run every remaining step
    pub fn run(&mut self) -> SimResult<StepReports<'_>> {
        let remaining = self.remaining_steps();
        self.run_steps(remaining)
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let stopped = self
            .road
            .vehicles()
            .iter()
            .filter(|v| v.is_stopped())
            .count();
        format!(
            "Road: {} | Step: {}/{} | Vehicles: {} ({} stopped) | Lights: {}",
            self.road.name(),
            self.steps_completed,
            self.step_count,
            self.road.vehicle_count(),
            stopped,
            self.lights.len()
        )
    }
}

/// Lights turn Yellow on every multiple of the cycle period, Green otherwise
fn light_state_for_step(step: u32, cycle_period: u32) -> LightState {
    if step % cycle_period == 0 {
        LightState::Yellow
    } else {
        LightState::Green
    }
}

/// Advance a vehicle below the stop threshold, stop it otherwise.
/// A failed update is logged and the vehicle sits out the rest of the step.
fn update_vehicle(vehicle: &mut SimVehicle, rules: &StepRules, step: u32) -> VehicleReport {
    let mut events = Vec::new();

    let outcome = if vehicle.position() < rules.stop_threshold {
        advance_vehicle(vehicle, rules, &mut events)
    } else {
        let position = vehicle.stop();
        events.push(VehicleEvent::Stopped { position });
        Ok(())
    };

    let skipped = match outcome {
        Ok(()) => None,
        Err(err) => {
            warn!("Skipping vehicle {} for step {}: {}", vehicle.id(), step, err);
            Some(err)
        }
    };

    VehicleReport {
        id: vehicle.id(),
        position: vehicle.position(),
        speed: vehicle.speed(),
        events,
        skipped,
    }
}

fn advance_vehicle(
    vehicle: &mut SimVehicle,
    rules: &StepRules,
    events: &mut Vec<VehicleEvent>,
) -> SimResult<()> {
    let position = vehicle.move_by(rules.move_distance)?;
    events.push(VehicleEvent::Moved { position });

    let speed = vehicle.accelerate(rules.accel_increment)?;
    events.push(VehicleEvent::SpeedIncreased { speed });

    Ok(())
}

/// Lazy sequence of step reports returned by [`SimKernel::run_steps`]
pub struct StepReports<'a> {
    kernel: &'a mut SimKernel,
    remaining: u32,
}

impl Iterator for StepReports<'_> {
    type Item = StepReport;

    fn next(&mut self) -> Option<StepReport> {
        if self.remaining == 0 {
            return None;
        }
        // The run may finish before `remaining` reaches zero
        if self.kernel.phase() == KernelPhase::Finished {
            return None;
        }
        let report = self.kernel.simulate_step();
        debug_assert!(report.is_ok(), "a running kernel always applies its next step");
        self.remaining -= 1;
        report.ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining.min(self.kernel.remaining_steps()) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StepReports<'_> {}

impl FusedIterator for StepReports<'_> {}
