use crate::planner::step_towards;
use crate::{DeterministicRng, SimConfig, SplitMix64, Station, WorldState};

/// Owns the [`WorldState`] and the random source of one run.
///
/// Every operation returns whether it was accepted. An accepted operation
/// advances the world by exactly one step: battery drain and stochastic
/// conveyor arrivals. Rejected operations leave the state untouched.
///
/// Admission control ("one physical action per tick") is not enforced here; the
/// tree executor hands out that capability per tick.
#[derive(Debug, Clone)]
pub struct Simulator {
    state: WorldState,
    config: SimConfig,
    rng: SplitMix64,
    steps: u64,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self::with_config(SimConfig::default(), seed)
    }

    pub fn with_config(config: SimConfig, seed: u64) -> Self {
        Self {
            state: WorldState::new(&config),
            config,
            rng: SplitMix64::new(seed),
            steps: 0,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Direct state access for scenario setup. Writes bypass the capacity
    /// checks of the operations below.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Owned copy of the current state, e.g. for rendering.
    pub fn snapshot(&self) -> WorldState {
        self.state.clone()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of simulated steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn at_station(&self, station: Station) -> bool {
        self.state.robot_pos == station.pose()
    }

    /// Does nothing for one step.
    pub fn idle(&mut self) {
        self.advance();
    }

    /// Charges if parked on a charger.
    pub fn charge(&mut self) -> bool {
        if !Station::at(self.state.robot_pos).is_some_and(Station::is_charger) {
            tracing::debug!(pos = ?self.state.robot_pos, "charge rejected: not at a charger");
            return false;
        }

        self.state.battery_level = self.state.battery_level.saturating_add(self.config.charge_rate);
        self.advance();
        self.state.battery_level = self.state.battery_level.min(self.config.max_battery);
        true
    }

    /// Moves one planner step toward `station`.
    pub fn move_to(&mut self, station: Station) -> bool {
        if self.state.battery_level == 0 {
            tracing::debug!(%station, "move rejected: battery empty");
            return false;
        }

        let speed = self.config.robot_speed;
        if let Some(next) = step_towards(self.state.robot_pos, station.pose(), speed) {
            self.state.robot_pos = next;
            self.drain_effort();
        }
        self.advance();
        true
    }

    /// Picks a single item from the conveyor the robot is parked at.
    pub fn pick(&mut self) -> bool {
        if self.state.battery_level == 0 {
            return false;
        }

        let weight = self.state.carried_weight;
        if self.at_station(Station::ConveyorHeavy)
            && self.state.cnv_n_heavy > 0
            && weight + self.config.heavy_weight <= self.config.max_weight
        {
            self.state.cnv_n_heavy -= 1;
            self.state.carried_heavy += 1;
            self.state.carried_weight += self.config.heavy_weight;
        } else if self.at_station(Station::ConveyorLight)
            && self.state.cnv_n_light > 0
            && weight + self.config.light_weight <= self.config.max_weight
        {
            self.state.cnv_n_light -= 1;
            self.state.carried_light += 1;
            self.state.carried_weight += self.config.light_weight;
        } else {
            tracing::debug!(pos = ?self.state.robot_pos, weight, "pick rejected");
            return false;
        }

        self.drain_effort();
        self.advance();
        true
    }

    /// Delivers everything carried. Counts as a single action.
    pub fn place(&mut self) -> bool {
        if self.state.battery_level == 0 || !self.at_station(Station::Delivery) {
            tracing::debug!(pos = ?self.state.robot_pos, "place rejected");
            return false;
        }

        let state = &mut self.state;
        state.delivered_light += state.carried_light;
        state.delivered_heavy += state.carried_heavy;
        state.carried_light = 0;
        state.carried_heavy = 0;
        state.carried_weight = 0;

        self.drain_effort();
        self.advance();
        true
    }

    fn drain_effort(&mut self) {
        self.state.battery_level = self
            .state
            .battery_level
            .saturating_sub(self.config.effort_drain);
    }

    fn advance(&mut self) {
        if self.rng.chance(self.config.heavy_arrival_probability) {
            self.state.cnv_n_heavy = (self.state.cnv_n_heavy + 1).min(self.config.max_heavy);
        }
        if self.rng.chance(self.config.light_arrival_probability) {
            self.state.cnv_n_light = (self.state.cnv_n_light + 1).min(self.config.max_light);
        }
        self.state.battery_level = self.state.battery_level.saturating_sub(1);
        self.steps += 1;
    }
}
