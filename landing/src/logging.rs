//! `tracing` output for the browser console.
//!
//! The fmt layer formats each event into a buffer; the buffer is flushed
//! to `console.log` / `console.warn` / `console.error` when the writer is
//! dropped at the end of the event. The filter sits behind a reload layer
//! so the level from `site.toml` can be applied after the content (and any
//! warning about it) has been processed.

use std::io;

use tracing::{Level, Metadata, debug, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, reload};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

use tracker_core::content::DEFAULT_LOG_LEVEL;

pub type LevelHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber at the default level.
///
/// Returns `None` when a subscriber is already installed.
pub fn init() -> Option<LevelHandle> {
    let (filter, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    // No clock in wasm32-unknown-unknown, and the console renders its own colors.
    let console = tracing_subscriber::fmt::layer()
        .with_writer(Console)
        .with_ansi(false)
        .without_time();

    match tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
    {
        Ok(()) => Some(handle),
        Err(err) => {
            debug!(%err, "console logger already installed");
            None
        }
    }
}

/// Switch to the `site.toml` filter directive. Invalid directives keep the default.
pub fn set_level(handle: &LevelHandle, directive: &str) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => {
            if let Err(err) = handle.reload(filter) {
                warn!(%err, "failed to apply log level");
            }
        }
        Err(err) => warn!(%err, directive, "invalid log_level, keeping default"),
    }
}

#[derive(Debug, Clone, Copy)]
struct Console;

#[derive(Debug)]
struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        emit(self.level, text.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    let line = JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

// Native builds (tests) have no console; stderr stands in for it.
#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{text}");
}
