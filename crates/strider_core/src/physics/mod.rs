//! Physics hosting module
//!
//! Collaborator traits (PhysicsBody, CameraPivot, InputSource) и их Bevy хосты.
//! Collision resolution всегда на стороне хоста (Godot / Rapier / плоскость пола).

pub mod body;
pub mod headless;
pub mod plugin;
pub mod rapier;

#[cfg(test)]
pub(crate) mod fake;

// Re-export основных типов
pub use body::{CameraPivot, InputSource, PhysicsBody};
pub use headless::{CameraRig, GroundPlane, HeadlessBody, TransformBody};
pub use plugin::{
    headless_character_bundle,
    spawn_headless_character,
    MovementControllerPlugin,
    MovementSet,
};
pub use rapier::{
    rapier_character_bundle, spawn_rapier_character, RapierCharacterBody, RapierHostPlugin,
};
