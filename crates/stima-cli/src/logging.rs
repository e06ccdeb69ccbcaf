//! Diagnostic logging, configured from the environment.
//!
//! `<BIN>_LOG_LEVEL` selects the level (default: off) and `<BIN>_LOG_STREAM`
//! the sink, where `<BIN>` is the upper-cased binary name with `-` mapped
//! to `_`.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogStream {
    #[default]
    Stderr,
    Stdout,
    /// `<bin>-<pid>.log` in the working directory
    File,
}

/// Environment variable prefix for a binary name: `my-app` -> `MY_APP`
pub fn env_prefix(binary: &str) -> String {
    binary.to_uppercase().replace('-', "_")
}

/// Parse a level name; `None` for unrecognized values.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "trace" | "trc" | "t" => Some(LevelFilter::TRACE),
        "debug" | "dbg" | "d" => Some(LevelFilter::DEBUG),
        "informational" | "info" | "inf" | "i" => Some(LevelFilter::INFO),
        "warning" | "warn" | "wrn" | "w" => Some(LevelFilter::WARN),
        "error" | "err" | "e" | "fatal" | "ftl" | "f" => Some(LevelFilter::ERROR),
        "off" | "none" | "null" | "nil" | "no" | "n" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Parse a stream name; `None` for unrecognized values.
pub fn parse_stream(value: &str) -> Option<LogStream> {
    match value.to_lowercase().as_str() {
        "stderr" | "error" | "err" | "e" => Some(LogStream::Stderr),
        "stdout" | "output" | "out" | "o" => Some(LogStream::Stdout),
        "file" => Some(LogStream::File),
        _ => None,
    }
}

/// Install the global subscriber. Nothing is installed when logging is off.
pub fn init(binary: &str) {
    let prefix = env_prefix(binary);

    let level = std::env::var(format!("{}_LOG_LEVEL", prefix))
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::OFF);
    if level == LevelFilter::OFF {
        return;
    }

    let stream = std::env::var(format!("{}_LOG_STREAM", prefix))
        .ok()
        .and_then(|v| parse_stream(&v))
        .unwrap_or_default();

    let (writer, ansi) = make_writer(binary, stream);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::default().add_directive(level.into()))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

fn make_writer(binary: &str, stream: LogStream) -> (BoxMakeWriter, bool) {
    match stream {
        LogStream::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogStream::Stdout => (BoxMakeWriter::new(io::stdout), true),
        LogStream::File => {
            let filename = format!("{}-{}.log", binary, std::process::id());
            match File::create(&filename) {
                Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
                Err(_) => (BoxMakeWriter::new(io::stderr), true),
            }
        }
    }
}
