#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Pos, SimConfig};

/// Complete world state. Pure data; only [`crate::Simulator`] mutates it
/// during a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldState {
    pub robot_pos: Pos,
    pub battery_level: u32,
    pub carried_weight: u32,
    pub carried_light: u32,
    pub carried_heavy: u32,
    /// Light items currently waiting on the conveyor.
    pub cnv_n_light: u32,
    /// Heavy items currently waiting on the conveyor.
    pub cnv_n_heavy: u32,
    pub delivered_light: u32,
    pub delivered_heavy: u32,
}

impl WorldState {
    /// Fresh state at spawn with a full battery and empty conveyors.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            robot_pos: Pos::SPAWN,
            battery_level: config.max_battery,
            carried_weight: 0,
            carried_light: 0,
            carried_heavy: 0,
            cnv_n_light: 0,
            cnv_n_heavy: 0,
            delivered_light: 0,
            delivered_heavy: 0,
        }
    }

    /// Weight implied by the carried item counts.
    pub fn load_weight(&self, config: &SimConfig) -> u32 {
        self.carried_light * config.light_weight + self.carried_heavy * config.heavy_weight
    }

    /// Capacity and energy invariants that every simulator operation preserves.
    pub fn is_consistent(&self, config: &SimConfig) -> bool {
        self.carried_weight == self.load_weight(config)
            && self.carried_weight <= config.max_weight
            && self.battery_level <= config.max_battery
            && self.cnv_n_light <= config.max_light
            && self.cnv_n_heavy <= config.max_heavy
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}
