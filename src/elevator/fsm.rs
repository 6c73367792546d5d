use crate::config::ElevatorConfig;
use crate::shared::Direction;
use crate::shared::ElevatorEvent;
use crate::shared::ElevatorState;

/**
 * Single-elevator state machine.
 *
 * The `Elevator` holds the floor bounds and the active state, and forwards
 * `step`/`stop` to the handler of that state. All movement and every state
 * transition happen inside the per-state handlers; `request_floor` only
 * validates the target and delegates.
 *
 * # Fields
 * - `min_floor`:        Lowest serviced floor, fixed at construction.
 * - `max_floor`:        Highest serviced floor, fixed at construction.
 * - `current_floor`:    Current position, always within the bounds.
 * - `requested_floor`:  Target set by the latest valid request.
 * - `state`:            The active state (Idle, MovingUp or MovingDown).
 */
pub struct Elevator {
    min_floor: i32,
    max_floor: i32,
    current_floor: i32,
    requested_floor: i32,
    state: ElevatorState,
}

impl Elevator {
    pub fn new(config: &ElevatorConfig) -> Elevator {
        Elevator {
            min_floor: config.min_floor,
            max_floor: config.max_floor,
            current_floor: config.min_floor,
            requested_floor: config.min_floor,
            state: ElevatorState::Idle,
        }
    }

    /// Sets the requested floor and performs one move step.
    ///
    /// A single call moves at most one floor: from Idle it only flips the
    /// state toward the target, and while moving it advances one floor.
    /// Reaching a multi-floor target takes repeated `step` (or
    /// `request_floor`) calls.
    pub fn request_floor(&mut self, floor: i32) -> ElevatorEvent {
        if floor < self.min_floor || floor > self.max_floor {
            return ElevatorEvent::InvalidRequest {
                floor,
                min_floor: self.min_floor,
                max_floor: self.max_floor,
            };
        }
        self.requested_floor = floor;
        self.step()
    }

    /// Performs one move step in the active state.
    pub fn step(&mut self) -> ElevatorEvent {
        match self.state {
            ElevatorState::Idle => self.move_idle(),
            ElevatorState::MovingUp => self.move_up(),
            ElevatorState::MovingDown => self.move_down(),
        }
    }

    /// Cancels any motion and returns to Idle.
    pub fn stop(&mut self) -> ElevatorEvent {
        match self.state {
            ElevatorState::Idle => ElevatorEvent::AlreadyIdle,
            ElevatorState::MovingUp => {
                self.set_state(ElevatorState::Idle);
                ElevatorEvent::Stopped {
                    direction: Direction::Up,
                }
            }
            ElevatorState::MovingDown => {
                self.set_state(ElevatorState::Idle);
                ElevatorEvent::Stopped {
                    direction: Direction::Down,
                }
            }
        }
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn requested_floor(&self) -> i32 {
        self.requested_floor
    }

    pub fn state(&self) -> ElevatorState {
        self.state
    }

    pub fn min_floor(&self) -> i32 {
        self.min_floor
    }

    pub fn max_floor(&self) -> i32 {
        self.max_floor
    }

    // Only the state handlers below may call this or touch current_floor.
    fn set_state(&mut self, state: ElevatorState) {
        self.state = state;
    }

    fn move_idle(&mut self) -> ElevatorEvent {
        if self.requested_floor > self.current_floor {
            self.set_state(ElevatorState::MovingUp);
            ElevatorEvent::Departed {
                direction: Direction::Up,
            }
        } else if self.requested_floor < self.current_floor {
            self.set_state(ElevatorState::MovingDown);
            ElevatorEvent::Departed {
                direction: Direction::Down,
            }
        } else {
            ElevatorEvent::AlreadyOnRequestedFloor
        }
    }

    fn move_up(&mut self) -> ElevatorEvent {
        if self.current_floor < self.max_floor {
            self.current_floor += 1;
            if self.current_floor == self.requested_floor {
                self.set_state(ElevatorState::Idle);
                ElevatorEvent::Arrived {
                    floor: self.current_floor,
                }
            } else {
                ElevatorEvent::Moved {
                    direction: Direction::Up,
                    floor: self.current_floor,
                }
            }
        } else {
            // Saturated at the top, whether or not the target was reached.
            self.set_state(ElevatorState::Idle);
            ElevatorEvent::LimitReached {
                direction: Direction::Up,
            }
        }
    }

    fn move_down(&mut self) -> ElevatorEvent {
        if self.current_floor > self.min_floor {
            self.current_floor -= 1;
            if self.current_floor == self.requested_floor {
                self.set_state(ElevatorState::Idle);
                ElevatorEvent::Arrived {
                    floor: self.current_floor,
                }
            } else {
                ElevatorEvent::Moved {
                    direction: Direction::Down,
                    floor: self.current_floor,
                }
            }
        } else {
            self.set_state(ElevatorState::Idle);
            ElevatorEvent::LimitReached {
                direction: Direction::Down,
            }
        }
    }
}
