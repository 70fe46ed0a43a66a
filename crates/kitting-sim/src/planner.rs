//! Axis-aligned stepping toward a station.
//!
//! The map has obstacles at fixed x ranges; vertical travel is only safe inside
//! the corridor `x ∈ [CORRIDOR_MIN_X, CORRIDOR_MAX_X]`. Outside it the robot
//! first closes the x gap, inside it the y gap. This matches the reference map
//! only and is not general path planning.

use crate::Pos;

pub const CORRIDOR_MIN_X: f64 = 12.0;
pub const CORRIDOR_MAX_X: f64 = 21.0;

/// One step from `from` toward `to`, or `None` when already there.
///
/// Each step moves along a single axis by at most `speed` and never overshoots
/// the target coordinate.
pub fn step_towards(from: Pos, to: Pos, speed: f64) -> Option<Pos> {
    if from == to {
        return None;
    }

    let mut next = from;
    if from.y != to.y {
        if from.x != to.x && !in_corridor(from.x) {
            next.x = approach(from.x, to.x, speed);
        } else {
            next.y = approach(from.y, to.y, speed);
        }
    } else {
        next.x = approach(from.x, to.x, speed);
    }
    Some(next)
}

pub fn in_corridor(x: f64) -> bool {
    (CORRIDOR_MIN_X..=CORRIDOR_MAX_X).contains(&x)
}

fn approach(from: f64, to: f64, speed: f64) -> f64 {
    if from < to {
        (from + speed).min(to)
    } else {
        (from - speed).max(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Station;

    fn path(mut from: Pos, to: Pos) -> Vec<Pos> {
        let mut out = Vec::new();
        while let Some(next) = step_towards(from, to, 5.0) {
            out.push(next);
            from = next;
            assert!(out.len() < 100, "planner did not converge");
        }
        out
    }

    #[test]
    fn inside_corridor_moves_vertically_first() {
        let steps = path(Pos::SPAWN, Station::Charge1.pose());
        assert_eq!(
            steps,
            vec![Pos::new(12.0, 7.5), Pos::new(7.0, 7.5), Pos::new(2.0, 7.5)]
        );
    }

    #[test]
    fn outside_corridor_moves_horizontally_first() {
        let steps = path(Station::Charge1.pose(), Station::Charge2.pose());
        assert_eq!(steps[0], Pos::new(7.0, 7.5));
        assert_eq!(steps[1], Pos::new(12.0, 7.5));
        // Entered the corridor: now vertical.
        assert_eq!(steps[2], Pos::new(12.0, 12.0));
        assert_eq!(*steps.last().unwrap(), Station::Charge2.pose());
    }

    #[test]
    fn never_overshoots() {
        let steps = path(Pos::new(12.0, 3.0), Pos::new(12.0, 4.5));
        assert_eq!(steps, vec![Pos::new(12.0, 4.5)]);
    }

    #[test]
    fn already_there_is_none() {
        assert_eq!(step_towards(Pos::SPAWN, Pos::SPAWN, 5.0), None);
    }
}
