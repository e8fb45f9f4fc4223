//! Engine module containing configuration, logging, timing, and window management.

pub mod command_line;
pub mod config;
pub mod error;
pub mod logg;
pub mod timing;
pub mod window;

// Re-export commonly used types
pub use command_line::AppFlags;
pub use config::{AppConfig, WindowConfig};
pub use error::{LogError, StartupError};
pub use logg::{MessageBoxNotifier, Notifier, SessionLog};
pub use timing::FrameClock;
