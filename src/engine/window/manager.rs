//! Window management implementation.

use log::{debug, error};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowButtons, WindowId};

use crate::engine::config::WindowConfig;
use crate::engine::error::StartupError;

/// The window messages the application reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMessage {
    Close,
    Destroy,
    /// Anything else; left to the platform's default handling.
    Other,
}

impl WindowMessage {
    pub fn from_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::CloseRequested => WindowMessage::Close,
            WindowEvent::Destroyed => WindowMessage::Destroy,
            _ => WindowMessage::Other,
        }
    }
}

#[derive(Default)]
pub struct WindowManager {
    window: Option<Window>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlapped window with caption, system menu and minimize box.
    ///
    /// The client area is `width x height` logical pixels; the frame grows
    /// to fit the title bar and borders.
    pub fn attributes(config: &WindowConfig) -> WindowAttributes {
        Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_position(PhysicalPosition::new(0, 0))
            .with_resizable(false)
            .with_enabled_buttons(WindowButtons::CLOSE | WindowButtons::MINIMIZE)
            .with_visible(true)
    }

    pub fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<WindowId, StartupError> {
        let window = event_loop
            .create_window(Self::attributes(config))
            .map_err(|e| {
                error!("Failed to create window: {:?}", e);
                e
            })?;

        let id = window.id();
        debug!("Window {:?} created at {:?}", id, window.inner_size());
        self.window = Some(window);
        Ok(id)
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn only_close_and_destroy_are_handled() {
        assert_eq!(
            WindowMessage::from_event(&WindowEvent::CloseRequested),
            WindowMessage::Close
        );
        assert_eq!(
            WindowMessage::from_event(&WindowEvent::Destroyed),
            WindowMessage::Destroy
        );
        assert_eq!(
            WindowMessage::from_event(&WindowEvent::Focused(true)),
            WindowMessage::Other
        );
        assert_eq!(
            WindowMessage::from_event(&WindowEvent::RedrawRequested),
            WindowMessage::Other
        );
    }

    #[test]
    fn attributes_follow_config() {
        let config = WindowConfig {
            title: "speed_guru".to_string(),
            width: 1280,
            height: 900,
        };
        let attrs = WindowManager::attributes(&config);
        assert_eq!(attrs.title, "speed_guru");
        assert!(!attrs.resizable);
        assert!(attrs.visible);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(1280.0, 900.0)))
        );
        assert_eq!(
            attrs.enabled_buttons,
            WindowButtons::CLOSE | WindowButtons::MINIMIZE
        );
    }
}
