use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Pos;

/// Named fixed points the robot can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Station {
    Charge1,
    Charge2,
    ConveyorHeavy,
    ConveyorLight,
    Delivery,
}

/// Station layout of the reference map.
pub const STATION_TABLE: [(Station, Pos); 5] = [
    (Station::Charge1, Pos::new(2.0, 7.5)),
    (Station::Charge2, Pos::new(23.0, 12.0)),
    (Station::ConveyorHeavy, Pos::new(12.0, 12.0)),
    (Station::ConveyorLight, Pos::new(12.0, 3.0)),
    (Station::Delivery, Pos::new(21.0, 7.5)),
];

impl Station {
    pub const ALL: [Station; 5] = [
        Station::Charge1,
        Station::Charge2,
        Station::ConveyorHeavy,
        Station::ConveyorLight,
        Station::Delivery,
    ];

    pub fn pose(self) -> Pos {
        STATION_TABLE[self as usize].1
    }

    pub fn name(self) -> &'static str {
        match self {
            Station::Charge1 => "CHARGE1",
            Station::Charge2 => "CHARGE2",
            Station::ConveyorHeavy => "CONVEYOR_HEAVY",
            Station::ConveyorLight => "CONVEYOR_LIGHT",
            Station::Delivery => "DELIVERY",
        }
    }

    pub fn is_charger(self) -> bool {
        matches!(self, Station::Charge1 | Station::Charge2)
    }

    /// Station whose pose is exactly `pos`, if any.
    pub fn at(pos: Pos) -> Option<Station> {
        STATION_TABLE
            .iter()
            .find(|(_, pose)| *pose == pos)
            .map(|(station, _)| *station)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown station `{0}`")]
pub struct ParseStationError(pub String);

impl FromStr for Station {
    type Err = ParseStationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Station::ALL
            .into_iter()
            .find(|station| station.name() == name)
            .ok_or_else(|| ParseStationError(name.to_string()))
    }
}
