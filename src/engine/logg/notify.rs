//! User-facing error notification for log failures.

pub const LOG_ERROR_TITLE: &str = "Logg error";
pub const LOG_ERROR_BODY: &str = "Unable to open .logg file!";

/// Something that can put an error in front of the user.
pub trait Notifier {
    fn error(&self, title: &str, body: &str);
}

/// Blocking modal message box on Windows; an error record elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageBoxNotifier;

impl Notifier for MessageBoxNotifier {
    #[cfg(windows)]
    fn error(&self, title: &str, body: &str) {
        if let Err(e) = msgbox::create(title, body, msgbox::IconType::None) {
            log::error!("{}: {} (message box failed: {:?})", title, body, e);
        }
    }

    #[cfg(not(windows))]
    fn error(&self, title: &str, body: &str) {
        log::error!("{}: {}", title, body);
    }
}
