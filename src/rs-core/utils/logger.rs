use std::sync::atomic::{AtomicU8, Ordering};

use crate::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
use crate::bindings::{jsLog, LogLevel};

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(LoggerLevel::Debug as u8);

/// Maximum level of the logs emitted by the `Logger`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Logging facade.
///
/// Logs are sent to the JavaScript console when running as WebAssembly and through `tracing`
/// otherwise (for example when running tests natively).
pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, Ordering::Relaxed);
    }

    fn is_enabled(level: LoggerLevel) -> bool {
        MAX_LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
    }

    pub fn info(text: &str) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LoggerLevel::Info, text);
        }
    }

    pub fn error(text: &str) {
        if Self::is_enabled(LoggerLevel::Error) {
            emit(LoggerLevel::Error, text);
        }
    }

    pub fn warn(text: &str) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LoggerLevel::Warn, text);
        }
    }

    pub fn debug(text: &str) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, text);
        }
    }

    pub fn lazy_info(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LoggerLevel::Info, &func());
        }
    }

    pub fn lazy_error(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Error) {
            emit(LoggerLevel::Error, &func());
        }
    }

    pub fn lazy_warn(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LoggerLevel::Warn, &func());
        }
    }

    pub fn lazy_debug(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, &func());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LoggerLevel, text: &str) {
    let js_level = match level {
        LoggerLevel::None => return,
        LoggerLevel::Error => LogLevel::Error,
        LoggerLevel::Warn => LogLevel::Warn,
        LoggerLevel::Info => LogLevel::Info,
        LoggerLevel::Debug => LogLevel::Debug,
    };
    jsLog(js_level, text);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LoggerLevel, text: &str) {
    match level {
        LoggerLevel::None => {}
        LoggerLevel::Error => tracing::error!("{}", text),
        LoggerLevel::Warn => tracing::warn!("{}", text),
        LoggerLevel::Info => tracing::info!("{}", text),
        LoggerLevel::Debug => tracing::debug!("{}", text),
    }
}
