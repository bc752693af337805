//! Browser Console Logging
//!
//! A `tracing-subscriber` layer that forwards events to `console.*`.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use wasm_bindgen::JsValue;

/// Output function receiving the level and the rendered line
pub type Sink = fn(Level, &str);

/// Layer rendering each event as `[target] message key=value ...`
pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let line = format!("[{}] {}{}", meta.target(), visitor.message, visitor.fields);
        (self.sink)(*meta.level(), &line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Write a line to the matching browser console method
pub fn browser_console(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

/// Install the console layer as the global subscriber (idempotent).
pub fn init(level: Level) {
    let layer = ConsoleLayer::new(browser_console).with_filter(LevelFilter::from_level(level));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn test_event_rendering() {
        let subscriber = tracing_subscriber::registry()
            .with(ConsoleLayer::new(capture).with_filter(LevelFilter::INFO));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "taskflow", count = 3, "loaded tasks");
            tracing::warn!(target: "taskflow", status = "500", "request failed");
            tracing::debug!(target: "taskflow", "filtered out");
        });

        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (Level::INFO, "[taskflow] loaded tasks count=3".to_string()));
        assert_eq!(lines[1], (Level::WARN, "[taskflow] request failed status=500".to_string()));
    }
}
