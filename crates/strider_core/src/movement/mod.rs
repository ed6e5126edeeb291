//! Movement domain — first-person контроллер
//!
//! Содержит:
//! - MovementConfig / EngineSetup (tunables)
//! - MovementState (velocity, прыжки, dash)
//! - MovementController (physics tick state machine + look/FOV)
//! - TickInput / MovementInput / LookMotion (input)
//! - MovementEvent / TickReport (что произошло за tick)

pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod look;
pub mod state;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;

// Re-export all components and events
pub use config::*;
pub use controller::*;
pub use events::*;
pub use input::*;
pub use look::*;
pub use state::*;
