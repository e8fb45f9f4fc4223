//! Session log: a plain-text `.logg` file per launch.

pub mod notify;
pub mod paths;
pub mod session;
pub mod timestamp;

pub use notify::{MessageBoxNotifier, Notifier};
pub use session::SessionLog;
