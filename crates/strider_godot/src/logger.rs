//! GodotLogger implementation
//!
//! Bridges strider_core logging to Godot's godot_print!/godot_error! + logs/game.log file.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use strider_core::{LogLevel, LogPrinter};

// Godot запускается из godot/ директории, поэтому путь относительно project root
const LOG_PATH: &str = "../logs/game.log";

// Ошибку открытия файла логируем только один раз
static FILE_ERROR_REPORTED: AtomicBool = AtomicBool::new(false);

pub struct GodotLogger;

impl LogPrinter for GodotLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => godot::prelude::godot_error!("[{}] {}", level.as_str(), message),
            LogLevel::Warning => godot::prelude::godot_warn!("[{}] {}", level.as_str(), message),
            _ => godot::prelude::godot_print!("[{}] {}", level.as_str(), message),
        }

        append_to_file(&format!("[{}] {}", level.as_str(), message));
    }
}

impl GodotLogger {
    /// Новая сессия: пересоздать logs/game.log с заголовком
    pub fn start_session() {
        let log_path = Path::new(LOG_PATH);
        let _ = std::fs::remove_file(log_path);
        append_to_file(&format!(
            "=== strider session {} ===",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
    }
}

fn append_to_file(line: &str) {
    let log_path = Path::new(LOG_PATH);

    // Создаём директорию если не существует
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", line);
        }
        Err(e) => {
            if !FILE_ERROR_REPORTED.swap(true, Ordering::Relaxed) {
                godot::prelude::godot_error!("❌ Failed to open log file {:?}: {}", log_path, e);
            }
        }
    }
}
