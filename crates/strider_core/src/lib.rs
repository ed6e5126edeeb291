//! Strider Core
//!
//! First-person movement controller + Observer<T>.
//!
//! Архитектура:
//! - `movement` — state machine (physics tick, look, FOV), engine-agnostic
//! - `physics` — collaborator traits + Bevy хосты (headless, Rapier)
//! - `observer` — значение с уведомлением об изменении
//! - Godot хост — отдельный crate strider_godot

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod logger;
pub mod movement;
pub mod observer;
pub mod physics;
pub mod script;

// Re-export базовых типов для удобства
pub use logger::{
    current_log_level, init_logger, log, log_error, log_info, log_warning, set_log_level,
    set_logger, LogLevel, LogPrinter,
};
pub use movement::{
    fov_for_speed, ConfigError, EngineSetup, LookMotion, MovementConfig, MovementController,
    MovementEvent, MovementEventFired, MovementInput, MovementState, TickInput, TickReport,
};
pub use observer::{Listener, Observer};
pub use physics::{
    headless_character_bundle, rapier_character_bundle, spawn_headless_character, CameraPivot,
    InputSource, MovementControllerPlugin, PhysicsBody, RapierHostPlugin,
};
pub use script::{InputScriptPlugin, ScriptedInput};

/// Physics tick rate (FixedUpdate)
pub const PHYSICS_HZ: f64 = 60.0;

/// Главный plugin (контроллер + fixed timestep)
pub struct StriderPlugin;

impl Plugin for StriderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .add_plugins(MovementControllerPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную ровно на один physics tick за `app.update()`,
/// поэтому прогон не зависит от wall-clock.
pub fn create_headless_app(seed: u64) -> App {
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / PHYSICS_HZ,
        )))
        .add_plugins((StriderPlugin, InputScriptPlugin));

    app
}

/// Headless App с Rapier: коллизии решает KinematicCharacterController
///
/// Как `create_headless_app`, плюс TransformPlugin (GlobalTransform для Rapier sync)
/// и Rapier в том же fixed schedule.
pub fn create_rapier_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins((bevy::transform::TransformPlugin, RapierHostPlugin));
    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
