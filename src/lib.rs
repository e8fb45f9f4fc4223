//! Library entry point for the application shell.

pub mod engine;
pub mod game;

// Re-export main types for convenience
pub use game::{run, App, ApplicationState, FrameHook, Idle};
