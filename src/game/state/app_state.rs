//! Application state and its startup/run/shutdown transitions.

use log::{debug, warn};
use winit::window::WindowId;

use crate::engine::command_line::{self, AppFlags};
use crate::engine::config::AppConfig;
use crate::engine::logg::{MessageBoxNotifier, Notifier, SessionLog};
use crate::engine::timing::FrameClock;
use crate::engine::window::WindowMessage;
use crate::game::hook::FrameHook;

/// `Created -> WindowCreating -> Running -> Stopped`; any failure jumps to `Stopped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    WindowCreating,
    Running,
    Stopped,
}

/// What the message loop should do after a window message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Platform default handling.
    Default,
    /// Leave the loop.
    Quit,
}

pub struct ApplicationState {
    config: AppConfig,
    flags: AppFlags,
    phase: Phase,
    is_running: bool,
    window_handle: Option<WindowId>,
    clock: FrameClock,
    log: SessionLog,
}

impl ApplicationState {
    /// Opens the session log (unless `flags` says otherwise) and returns a
    /// state ready to start.
    pub fn new(config: AppConfig, flags: AppFlags, notifier: Box<dyn Notifier>) -> Self {
        let log = SessionLog::open(&config, flags, notifier);
        Self::with_log(config, flags, log)
    }

    pub fn with_log(config: AppConfig, flags: AppFlags, log: SessionLog) -> Self {
        Self {
            config,
            flags,
            phase: Phase::Created,
            is_running: false,
            window_handle: None,
            clock: FrameClock::new(),
            log,
        }
    }

    /// Default configuration, flags from the process command line.
    pub fn from_env() -> Self {
        let flags = command_line::from_env();
        Self::new(AppConfig::default(), flags, Box::new(MessageBoxNotifier))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn flags(&self) -> AppFlags {
        self.flags
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn window_handle(&self) -> Option<WindowId> {
        self.window_handle
    }

    pub fn time_delta(&self) -> f32 {
        self.clock.delta()
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn post_to_log(&self, message: impl AsRef<str>) {
        self.log.post(message);
    }

    pub fn activate_log(&mut self) -> bool {
        self.log.activate()
    }

    pub fn deactivate_log(&mut self) -> bool {
        self.log.deactivate()
    }

    /// Returns false unless the state is freshly created.
    pub fn begin_window_creation(&mut self) -> bool {
        if self.phase != Phase::Created {
            warn!("Window creation requested in phase {:?}", self.phase);
            return false;
        }
        self.phase = Phase::WindowCreating;
        true
    }

    pub fn window_created(&mut self, handle: WindowId) {
        self.post_to_log("Main window created.");
        self.window_handle = Some(handle);
        self.clock = FrameClock::new();
        self.is_running = true;
        self.phase = Phase::Running;
    }

    /// Terminal for this run; there is no retry.
    pub fn startup_failed(&mut self, reason: &str) {
        self.post_to_log(reason);
        self.is_running = false;
        self.phase = Phase::Stopped;
    }

    /// The window procedure. Close and destroy stop the run.
    pub fn handle_window_message(&mut self, message: WindowMessage) -> Dispatch {
        match message {
            WindowMessage::Close | WindowMessage::Destroy => {
                debug!("{:?} received, stopping", message);
                self.is_running = false;
                self.phase = Phase::Stopped;
                if message == WindowMessage::Destroy {
                    self.window_handle = None;
                }
                Dispatch::Quit
            }
            WindowMessage::Other => Dispatch::Default,
        }
    }

    /// Idle branch of the loop: measure the frame and run the update hook.
    ///
    /// Returns whether the hook ran.
    pub fn idle<H: FrameHook>(&mut self, hook: &mut H) -> bool {
        if !self.is_running {
            return false;
        }
        let delta = self.clock.tick();
        hook.update(delta);
        true
    }
}

impl Drop for ApplicationState {
    fn drop(&mut self) {
        self.post_to_log("Application terminating.");
    }
}

impl std::fmt::Debug for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationState")
            .field("phase", &self.phase)
            .field("is_running", &self.is_running)
            .field("flags", &self.flags)
            .field("window_handle", &self.window_handle)
            .field("log", &self.log)
            .finish()
    }
}
