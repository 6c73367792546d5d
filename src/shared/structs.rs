/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ElevatorState {
    Idle,
    MovingUp,
    MovingDown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of a single `request_floor`, `step` or `stop` call.
///
/// The state machine never prints; callers surface these however they
/// want (log, UI, test assertion). `Display` gives the human-readable
/// status text for each outcome.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorEvent {
    /// Left Idle for a moving state. No floor was traversed yet; the
    /// first step happens on the next move call.
    Departed { direction: Direction },
    /// Advanced one floor without reaching the requested floor.
    Moved { direction: Direction, floor: i32 },
    /// Advanced one floor and reached the requested floor; now Idle.
    Arrived { floor: i32 },
    /// Hit the top or bottom floor before reaching the requested one;
    /// now Idle.
    LimitReached { direction: Direction },
    AlreadyOnRequestedFloor,
    AlreadyIdle,
    /// Motion cancelled by `stop` while moving in `direction`.
    Stopped { direction: Direction },
    /// Requested floor outside `[min_floor, max_floor]`; nothing changed.
    InvalidRequest {
        floor: i32,
        min_floor: i32,
        max_floor: i32,
    },
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl fmt::Display for ElevatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ElevatorEvent::Departed { direction } => {
                write!(f, "Starting to move {}", direction)
            }
            ElevatorEvent::Moved { direction, floor } => {
                write!(f, "Moving {} to floor {}", direction, floor)
            }
            ElevatorEvent::Arrived { floor } => write!(f, "Arrived at floor {}", floor),
            ElevatorEvent::LimitReached { direction } => match direction {
                Direction::Up => write!(f, "Reached the top floor"),
                Direction::Down => write!(f, "Reached the bottom floor"),
            },
            ElevatorEvent::AlreadyOnRequestedFloor => {
                write!(f, "Elevator is already on the requested floor")
            }
            ElevatorEvent::AlreadyIdle => write!(f, "Elevator is already idle"),
            ElevatorEvent::Stopped { direction } => {
                write!(f, "Stopping the elevator while moving {}", direction)
            }
            ElevatorEvent::InvalidRequest {
                min_floor,
                max_floor,
                ..
            } => write!(
                f,
                "Invalid floor request. Floor must be between {} and {}",
                min_floor, max_floor
            ),
        }
    }
}
