//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use speed_guru::engine::Notifier;

/// Records every dialog instead of showing it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub shown: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.shown.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, title: &str, body: &str) {
        self.shown
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

/// `[DD/MM/YY HH:MM:SS] <message>`
pub fn is_log_line(line: &str, message: &str) -> bool {
    let Some(rest) = line.strip_prefix('[') else {
        return false;
    };
    let Some((stamp, text)) = rest.split_once("] ") else {
        return false;
    };
    let shape_ok = stamp.len() == 17
        && stamp.chars().enumerate().all(|(i, c)| match i {
            2 | 5 => c == '/',
            8 => c == ' ',
            11 | 14 => c == ':',
            _ => c.is_ascii_digit(),
        });
    shape_ok && text == message
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
