use log::{debug, error};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::engine::error::StartupError;
use crate::engine::window::{WindowManager, WindowMessage};
use crate::game::hook::FrameHook;
use crate::game::state::{ApplicationState, Dispatch, Phase};

/// Bridges winit's event loop to [`ApplicationState`].
///
/// Window events are the dispatch branch of the loop; `about_to_wait` runs
/// once the queue is drained and is the idle branch.
pub struct App<'a, H: FrameHook> {
    state: &'a mut ApplicationState,
    windows: WindowManager,
    hook: H,
}

impl<'a, H: FrameHook> App<'a, H> {
    pub fn new(state: &'a mut ApplicationState, hook: H) -> Self {
        Self {
            state,
            windows: WindowManager::new(),
            hook,
        }
    }
}

impl<H: FrameHook> ApplicationHandler for App<'_, H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resumed can fire more than once; there is only ever one window.
        if self.windows.has_window() || self.state.phase() != Phase::Created {
            return;
        }

        self.state.begin_window_creation();
        let config = self.state.config().window.clone();
        match self.windows.create_window(event_loop, &config) {
            Ok(id) => {
                debug!("Window handle: {:?}", id);
                self.state.window_created(id);
            }
            Err(e) => {
                error!("{}", e);
                self.state
                    .post_to_log("Failed to create window handle. Shutting down.");
                self.state
                    .startup_failed("Main window creation failed. Shutting down.");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let message = WindowMessage::from_event(&event);
        if self.state.handle_window_message(message) == Dispatch::Quit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.state.idle(&mut self.hook);
    }
}

/// Creates the window and pumps messages until it is closed.
///
/// Startup failures are logged and end the run; nothing is returned to
/// distinguish them.
pub fn run<H: FrameHook>(state: &mut ApplicationState, hook: H) {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("{}", StartupError::from(e));
            state.startup_failed("Bad instance handle passed from o/s. Shutting down.");
            return;
        }
    };
    // Busy poll: idle iterations keep coming without waiting for input.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(state, hook);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
    }
}
