//! Per-frame update hook.

/// Called once per idle iteration of the message loop with the elapsed
/// seconds since the previous call.
pub trait FrameHook {
    fn update(&mut self, delta: f32);
}

/// The default hook. Does nothing yet; rendering and game logic plug in here.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl FrameHook for Idle {
    fn update(&mut self, _delta: f32) {}
}
