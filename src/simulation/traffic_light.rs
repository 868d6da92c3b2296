//! Traffic light state for the traffic simulation

use super::types::{LightId, LightState};

/// A traffic light in the traffic simulation
///
/// Any state may follow any other; the kernel decides the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimTrafficLight {
    id: LightId,
    state: LightState,
}

impl SimTrafficLight {
    /// Create a light showing Green
    pub fn new(id: LightId) -> Self {
        Self::with_state(id, LightState::default())
    }

    pub fn with_state(id: LightId, state: LightState) -> Self {
        Self { id, state }
    }

    pub fn change_state(&mut self, new_state: LightState) {
        self.state = new_state;
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn id(&self) -> LightId {
        self.id
    }
}
