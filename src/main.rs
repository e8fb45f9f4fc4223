//! Application entry point.

// Hides the console window on Windows in release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::info;
use speed_guru::{ApplicationState, Idle};

fn main() {
    env_logger::init();
    info!("Logger initialized");

    // Flags are parsed before the session log opens; -nolog keeps it closed.
    let mut state = ApplicationState::from_env();

    info!("Running...");
    speed_guru::run(&mut state, Idle);

    info!("Exiting...");
}
