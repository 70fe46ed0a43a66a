//! Stateless condition leaves.

use core::fmt;

use kitting_sim::{Station, WorldState};

use crate::Status;

/// World-state quantity a comparison condition reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BatteryLevel,
    CarriedWeight,
    CarriedLight,
    CarriedHeavy,
    ConveyorLight,
    ConveyorHeavy,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::BatteryLevel,
        Field::CarriedWeight,
        Field::CarriedLight,
        Field::CarriedHeavy,
        Field::ConveyorLight,
        Field::ConveyorHeavy,
    ];

    /// Token prefix naming this field.
    pub fn label(self) -> &'static str {
        match self {
            Field::BatteryLevel => "battery level",
            Field::CarriedWeight => "carried weight",
            Field::CarriedLight => "carried light",
            Field::CarriedHeavy => "carried heavy",
            Field::ConveyorLight => "conveyor light",
            Field::ConveyorHeavy => "conveyor heavy",
        }
    }

    pub fn read(self, state: &WorldState) -> u32 {
        match self {
            Field::BatteryLevel => state.battery_level,
            Field::CarriedWeight => state.carried_weight,
            Field::CarriedLight => state.carried_light,
            Field::CarriedHeavy => state.carried_heavy,
            Field::ConveyorLight => state.cnv_n_light,
            Field::ConveyorHeavy => state.cnv_n_heavy,
        }
    }
}

/// Strict comparison direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Less,
    Greater,
}

impl Comparator {
    pub fn symbol(self) -> char {
        match self {
            Comparator::Less => '<',
            Comparator::Greater => '>',
        }
    }

    pub fn holds(self, value: i64, threshold: i64) -> bool {
        match self {
            Comparator::Less => value < threshold,
            Comparator::Greater => value > threshold,
        }
    }
}

/// Condition leaf. Never returns `Running` and never mutates the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Compare {
        field: Field,
        comparator: Comparator,
        threshold: i64,
    },
    AtStation(Station),
}

impl Condition {
    pub fn compare(field: Field, comparator: Comparator, threshold: i64) -> Self {
        Condition::Compare {
            field,
            comparator,
            threshold,
        }
    }

    pub fn evaluate(&self, state: &WorldState) -> Status {
        let holds = match *self {
            Condition::Compare {
                field,
                comparator,
                threshold,
            } => comparator.holds(i64::from(field.read(state)), threshold),
            Condition::AtStation(station) => state.robot_pos == station.pose(),
        };
        if holds {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare {
                field,
                comparator,
                threshold,
            } => write!(f, "{} {} {}", field.label(), comparator.symbol(), threshold),
            Condition::AtStation(station) => write!(f, "at station {station}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_are_strict() {
        let state = WorldState {
            battery_level: 50,
            ..WorldState::default()
        };
        let below = Condition::compare(Field::BatteryLevel, Comparator::Less, 50);
        let above = Condition::compare(Field::BatteryLevel, Comparator::Greater, 50);
        assert_eq!(below.evaluate(&state), Status::Failure);
        assert_eq!(above.evaluate(&state), Status::Failure);
        let just_above = Condition::compare(Field::BatteryLevel, Comparator::Greater, 49);
        assert_eq!(just_above.evaluate(&state), Status::Success);
    }

    #[test]
    fn displays_as_its_token() {
        let condition = Condition::compare(Field::ConveyorHeavy, Comparator::Less, -3);
        assert_eq!(condition.to_string(), "conveyor heavy < -3");
        assert_eq!(Condition::AtStation(Station::Delivery).to_string(), "at station DELIVERY");
    }
}
