use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use crate::trace::trace::TraceEvent;

/// Appends analysis trace events to a JSONL file, one event per line.
///
/// Trace output is advisory: any failure downgrades to a stderr warning
/// and the analysis keeps running.
pub struct TraceLogger {
    sink: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { sink: None }
            }
        }
    }

    /// A logger that swallows every event. Used when no trace path is set.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = append_line(sink, event) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}

fn append_line(sink: &Mutex<File>, event: &TraceEvent) -> std::io::Result<()> {
    let json = serde_json::to_string(event)?;
    let mut file = sink
        .lock()
        .map_err(|_| std::io::Error::other("trace lock poisoned"))?;
    writeln!(file, "{}", json)
}
