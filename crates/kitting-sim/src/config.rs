//! Simulation constants as a value object.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every tunable constant of the simulation.
///
/// `Default` reproduces the reference task; tests typically zero the arrival
/// probabilities to make conveyor counts deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SimConfig {
    pub max_battery: u32,
    pub max_weight: u32,
    pub max_heavy: u32,
    pub max_light: u32,
    pub heavy_weight: u32,
    pub light_weight: u32,
    /// Maximum displacement along one axis per step.
    pub robot_speed: f64,
    /// Battery gained per accepted charge, before the step drain.
    pub charge_rate: u32,
    pub heavy_arrival_probability: f64,
    pub light_arrival_probability: f64,
    /// Extra battery spent by a move that displaces the robot, a pick or a place.
    pub effort_drain: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_battery: 100,
            max_weight: 10,
            max_heavy: 10,
            max_light: 10,
            heavy_weight: 4,
            light_weight: 2,
            robot_speed: 5.0,
            charge_rate: 10,
            heavy_arrival_probability: 0.05,
            light_arrival_probability: 0.1,
            effort_drain: 1,
        }
    }
}

impl SimConfig {
    /// Same constants with conveyor arrivals switched off.
    pub fn without_arrivals(mut self) -> Self {
        self.heavy_arrival_probability = 0.0;
        self.light_arrival_probability = 0.0;
        self
    }
}
