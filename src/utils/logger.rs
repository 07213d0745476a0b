use std::error::Error;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use backtrace::Backtrace;
use serde::Serialize;
use slog::{Drain, Logger, error, o};

#[derive(Serialize, Debug)]
pub struct StackFrame {
    func: String,
    source: String,
    line: u32,
}

/// Captures the current call stack, keeping only the last two path components of each source file.
fn marshal_stack() -> Option<Vec<StackFrame>> {
    let bt = Backtrace::new();
    let mut frames = Vec::new();

    for frame in bt.frames() {
        for symbol in frame.symbols() {
            let func = symbol
                .name()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".to_owned());
            let source = symbol
                .filename()
                .map(short_source)
                .unwrap_or_else(|| "unknown".to_owned());
            let line = symbol.lineno().unwrap_or(0);

            frames.push(StackFrame { func, source, line });
        }
    }
    if frames.is_empty() { None } else { Some(frames) }
}

fn short_source(path: &Path) -> String {
    match (path.parent().and_then(|p| p.file_name()), path.file_name()) {
        (Some(parent), Some(file)) => {
            format!("{}/{}", parent.to_string_lossy(), file.to_string_lossy())
        }
        _ => path.to_string_lossy().into_owned(),
    }
}

/// JSON logger on stderr, so stdout only carries the user-facing messages.
pub fn get_logger() -> Logger {
    let drain = slog_json::Json::default(io::stderr()).fuse();
    let drain = Mutex::new(drain).fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}

/// Logger that drops every record.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Logs `err` under `context` along with the chain of sources and a captured stack trace.
pub fn error_context(logger: &Logger, context: &str, err: &(dyn Error + 'static)) {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    let stack_trace = marshal_stack()
        .and_then(|frames| serde_json::to_string(&frames).ok())
        .unwrap_or_default();

    error!(logger, "{}", context;
        "error" => err.to_string(),
        "causes" => causes.join(": "),
        "stack_trace" => stack_trace);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SimError;

    #[test]
    fn test_short_source_keeps_two_components() {
        assert_eq!(short_source(Path::new("/home/me/crate/src/main.rs")), "src/main.rs");
        assert_eq!(short_source(Path::new("main.rs")), "main.rs");
    }

    #[test]
    fn test_stack_frame_serializes() {
        let frame = StackFrame { func: "run".to_string(), source: "src/main.rs".to_string(), line: 7 };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"func":"run","source":"src/main.rs","line":7}"#);
    }

    #[test]
    fn test_error_context_on_discard_logger() {
        let logger = discard_logger();
        let err = SimError::Log(io::Error::other("disk full"));
        error_context(&logger, "simulation failed", &err);
    }
}
