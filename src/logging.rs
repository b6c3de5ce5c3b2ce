//! Console Logger
//!
//! `log` backend for the browser console. Lines look like
//! `[12:04:31.208] INFO  [SESSION] restored session for ops`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = JsValue::from_str(&format_line(
            &timestamp,
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. A second call is a no-op.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Last path segment of the target, upper-cased: `dnc_core::menu` -> `MENU`
fn tag(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} [{}] {}", timestamp, level, tag(target), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_target() {
        assert_eq!(tag("dnc_core::menu"), "MENU");
        assert_eq!(tag("dnc_admin_ui"), "DNC_ADMIN_UI");
    }

    #[test]
    fn test_format_line() {
        let line = format_line("08:00:00.000", Level::Warn, "dnc_admin_ui::session", "no token");
        assert_eq!(line, "[08:00:00.000] WARN  [SESSION] no token");
    }
}
