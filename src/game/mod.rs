//! Application lifecycle: state, the event loop bridge and the update hook.

pub mod app;
pub mod hook;
pub mod state;

// Re-export commonly used types
pub use app::{run, App};
pub use hook::{FrameHook, Idle};
pub use state::{ApplicationState, Dispatch, Phase};
