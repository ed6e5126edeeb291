//! Headless прогон контроллера
//!
//! Бот с seeded input бегает по плоскости пола, без рендера и Godot.

use bevy::prelude::*;
use strider_core::{
    create_headless_app, headless_character_bundle, log_info, MovementConfig, MovementController,
    MovementEvent, MovementEventFired, ScriptedInput,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting strider headless run (seed: {})", seed));

    let player = app
        .world_mut()
        .spawn((
            headless_character_bundle(Vec3::ZERO, MovementConfig::default()),
            ScriptedInput::default(),
        ))
        .id();

    let mut landings = 0;
    let mut dashes = 0;

    // 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        let events = app.world().resource::<Events<MovementEventFired>>();
        for fired in events.iter_current_update_events() {
            match fired.event {
                MovementEvent::Landed => landings += 1,
                MovementEvent::DashStarted { .. } => dashes += 1,
                _ => {}
            }
        }

        if tick % 100 == 0 {
            let world = app.world();
            let (Some(transform), Some(controller)) = (
                world.get::<Transform>(player),
                world.get::<MovementController>(player),
            ) else {
                continue;
            };
            log_info(&format!(
                "Tick {}: position {:.2?}, speed {:.2}, fov {:.1}",
                tick,
                transform.translation,
                controller.state().speed(),
                controller.current_fov(),
            ));
        }
    }

    log_info(&format!(
        "Run complete: {} landings, {} dashes",
        landings, dashes
    ));
}
