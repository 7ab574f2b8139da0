pub mod input;
pub mod physics;
pub mod snapshot;
pub mod state;

pub use input::{poll_input, InputAction, KeyState};
pub use physics::{update_with_events, PhysicsEvents};
pub use snapshot::GameState;
pub use state::{normalize, Court, Move, Rect, Score, Side, Velocity};
