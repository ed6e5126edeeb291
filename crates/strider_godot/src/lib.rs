use godot::prelude::*;

mod bridge;
mod logger;
mod player_movement;
mod setup;

/// GDExtension entry point
struct StriderExtension;

#[gdextension]
unsafe impl ExtensionLibrary for StriderExtension {}
