//! Ready-made vehicle and traffic light rosters

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::traffic_light::SimTrafficLight;
use super::types::{LightId, VehicleId, DEMO_LIGHT_COUNT, DEMO_ROSTER_SPEEDS};
use super::vehicle::SimVehicle;

/// Slowest initial speed handed out by [`random_roster`] (km/h)
pub const RANDOM_MIN_SPEED: u32 = 20;

/// Fastest initial speed handed out by [`random_roster`] (km/h)
pub const RANDOM_MAX_SPEED: u32 = 60;

/// Vehicles 1..=5 with the classic demo speeds
pub fn demo_roster() -> Vec<SimVehicle> {
    DEMO_ROSTER_SPEEDS
        .iter()
        .zip(1..)
        .map(|(&speed, id)| SimVehicle::new(VehicleId(id), speed))
        .collect()
}

/// Lights 1..=3, all Green
pub fn demo_lights() -> Vec<SimTrafficLight> {
    lights(DEMO_LIGHT_COUNT)
}

/// Lights 1..=count, all Green
pub fn lights(count: u32) -> Vec<SimTrafficLight> {
    (1..=count)
        .map(|id| SimTrafficLight::new(LightId(id)))
        .collect()
}

/// Vehicles 1..=count with random initial speeds. The same seed always
/// produces the same roster.
pub fn random_roster(count: u32, seed: u64) -> Vec<SimVehicle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|id| {
            let speed = rng.random_range(RANDOM_MIN_SPEED..=RANDOM_MAX_SPEED);
            SimVehicle::new(VehicleId(id), speed)
        })
        .collect()
}
