//! Application state management.

pub mod app_state;

pub use app_state::{ApplicationState, Dispatch, Phase};
