// Readout formatting and the browser console logger

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Two decimals, as shown in the landing label.
pub fn format_meters(m: f64) -> String {
    format!("{:.2}", m)
}

pub fn format_optional_meters(m: Option<f64>) -> String {
    match m {
        Some(v) if v.is_finite() => format_meters(v),
        Some(_) => "∞".to_string(),
        None => "—".to_string(),
    }
}

pub fn format_seconds(s: f64) -> String {
    format!("{:.2}s", s)
}

/// `log` backend that writes to the devtools console at the matching level.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`]. A second call keeps the first logger.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
