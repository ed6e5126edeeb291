//! Seeded input scripts для headless прогонов
//!
//! Бот-игрок: каждые N тиков меняет move вектор, изредка жмёт jump/dash
//! и двигает мышь. Всё из DeterministicRng, поэтому одинаковый seed
//! даёт одинаковую траекторию.

use bevy::prelude::*;
use rand::Rng;

use crate::movement::{LookMotion, MovementInput};
use crate::physics::MovementSet;
use crate::DeterministicRng;

/// Параметры скрипта для entity
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScriptedInput {
    /// Сколько тиков держать текущий move вектор
    pub hold_ticks: u32,
    pub jump_chance: f64,
    pub dash_chance: f64,
    pub look_chance: f64,
    /// Тиков до смены move вектора
    pub ticks_left: u32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            hold_ticks: 30, // 0.5 sec при 60Hz
            jump_chance: 0.03,
            dash_chance: 0.01,
            look_chance: 0.2,
            ticks_left: 0,
        }
    }
}

/// Генерация input для скриптовых entity (FixedUpdate, до physics tick)
pub fn drive_input_script(
    mut query: Query<(Entity, &mut ScriptedInput, &mut MovementInput)>,
    mut rng: ResMut<DeterministicRng>,
    mut look: EventWriter<LookMotion>,
) {
    let rng = &mut rng.rng;

    for (entity, mut script, mut input) in query.iter_mut() {
        if script.ticks_left == 0 {
            let x = rng.gen_range(-1i32..=1) as f32;
            let y = rng.gen_range(-1i32..=1) as f32;
            input.move_vector = Vec2::new(x, y);
            script.ticks_left = script.hold_ticks.max(1);
        }
        script.ticks_left -= 1;

        input.jump |= rng.gen_bool(script.jump_chance);
        input.dash |= rng.gen_bool(script.dash_chance);

        if rng.gen_bool(script.look_chance) {
            let delta = Vec2::new(rng.gen_range(-40.0..40.0), rng.gen_range(-10.0..10.0));
            look.write(LookMotion { entity, delta });
        }
    }
}

/// Plugin: seeded бот-input
pub struct InputScriptPlugin;

impl Plugin for InputScriptPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            drive_input_script.before(MovementSet::Physics),
        );
    }
}
