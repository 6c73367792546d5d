pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::ElevatorEvent;
pub use structs::ElevatorState;
