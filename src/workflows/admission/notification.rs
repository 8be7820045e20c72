use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::info;

/// Receiver for stage-completion messages.
///
/// Delivery is synchronous and cannot fail from the publishing stage's point of view.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes each message on its own line with the `[Notification]` tag.
///
/// Defaults to stdout; any writer can stand in so the console transcript can be
/// captured.
pub struct ConsoleNotifier<W = io::Stdout> {
    output: Mutex<W>,
}

impl ConsoleNotifier {
    pub const TAG: &'static str = "[Notification]";

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn render(message: &str) -> String {
        format!("{} {}", Self::TAG, message)
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }
}

impl<W: Write + Send> NotificationSink for ConsoleNotifier<W> {
    fn notify(&self, message: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", ConsoleNotifier::render(message));
            let _ = output.flush();
        }
    }
}

/// Forwards messages to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "admission::notifications", %message, "stage notification");
    }
}

/// Captures messages in memory, in delivery order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for MemoryNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Sinks attached to a single stage.
#[derive(Default, Clone)]
pub struct Observers {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl Observers {
    pub fn attach(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn publish(&self, message: &str) {
        for sink in &self.sinks {
            sink.notify(message);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
