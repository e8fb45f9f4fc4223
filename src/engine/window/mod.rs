//! The single top-level window and the messages it reports.

pub mod manager;

pub use manager::{WindowManager, WindowMessage};
