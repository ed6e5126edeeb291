//! One-time engine setup (не состояние контроллера)

use godot::classes::{input, Engine, Input};
use strider_core::EngineSetup;

/// Применить глобальные настройки окружения: max FPS, захват мыши
pub fn apply_engine_setup(setup: &EngineSetup) {
    Engine::singleton().set_max_fps(setup.max_fps);

    let mode = if setup.capture_mouse {
        input::MouseMode::CAPTURED
    } else {
        input::MouseMode::VISIBLE
    };
    Input::singleton().set_mouse_mode(mode);

    strider_core::log(&format!(
        "Engine setup: max_fps={}, capture_mouse={}",
        setup.max_fps, setup.capture_mouse
    ));
}
