//! Deterministic conveyor-kitting simulation.
//!
//! A single robot shuttles between fixed stations, picks items off a heavy and a
//! light conveyor, carries them under a weight budget and delivers them, all
//! while its battery drains one unit per simulated step.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod planner;
pub mod pos;
pub mod rng;
pub mod simulator;
pub mod state;
pub mod station;

pub use config::SimConfig;
pub use pos::Pos;
pub use rng::{DeterministicRng, SplitMix64};
pub use simulator::Simulator;
pub use state::WorldState;
pub use station::{ParseStationError, Station, STATION_TABLE};
