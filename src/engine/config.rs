//! Application-wide constants: names, window geometry and log file layout.

/// Geometry and title of the main window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Client area width in logical pixels.
    pub width: u32,
    /// Client area height in logical pixels.
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Used for the per-user data folder and as the log file prefix.
    pub app_name: String,
    pub window: WindowConfig,
    pub log_subdirectory: String,
    pub log_extension: String,
    /// First line of every session log.
    pub log_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "speed_guru".to_string(),
            window: WindowConfig {
                title: "speed_guru".to_string(),
                width: 1280,
                height: 900,
            },
            log_subdirectory: "logg".to_string(),
            log_extension: "logg".to_string(),
            log_title: "Speed Guru Log File".to_string(),
        }
    }
}

impl AppConfig {
    /// The header written once at the top of a new session log.
    pub fn log_header(&self) -> String {
        format!("{}\n{}\n\n", self.log_title, "-".repeat(self.log_title.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipping_values() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "speed_guru");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 900);
        assert_eq!(config.log_extension, "logg");
    }

    #[test]
    fn header_divider_spans_title() {
        let header = AppConfig::default().log_header();
        assert_eq!(header, "Speed Guru Log File\n-------------------\n\n");
    }
}
