//! JSON ingest
//!
//! Lets a separate process feed the view: it logs through
//! `tracing-subscriber`'s JSON formatter and its stdout is piped into
//! `logview tail`. Each line becomes one [`LogRecord`].
//!
//! stdin
//! ingest_line
//! parse_json_record
//! LogRecord


use crate::record::{CodePath, Level, LogRecord, compose_message};
use chrono::{DateTime, Local};
use serde_json::Value;

/// Module used for lines that are not JSON.
pub const RAW_MODULE: &str = "stdin";

/// Reads a JSON log event. Returns `None` for anything that is not an object.
pub fn parse_json_record(event: &Value) -> Option<LogRecord> {
    let fields = event.as_object()?;

    let level = fields
        .get("level")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::Info);

    let process_id = first_of(event, &["pid", "process_id"])
        .and_then(Value::as_u64)
        .and_then(|pid| u32::try_from(pid).ok())
        .unwrap_or(0);

    let thread_id = first_of(event, &["thread_id", "threadId"])
        .and_then(parse_thread_id)
        .unwrap_or(0);

    let module = fields
        .get("target")
        .and_then(Value::as_str)
        .unwrap_or(RAW_MODULE);

    let function = event
        .get("span")
        .and_then(|span| span.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("-");

    let line = event
        .get("line_number")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);

    let payload = payload(event);
    let code_path = CodePath::new(module, function, line);

    let mut record = LogRecord::new(
        level,
        process_id,
        thread_id,
        compose_message(&code_path, &payload),
    );

    if let Some(ts) = fields
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    {
        record = record.with_timestamp(ts.with_timezone(&Local));
    }

    Some(record)
}

/// Turns one input line into a record. Non-JSON lines are kept verbatim as
/// INFO records so nothing piped in is lost.
pub fn ingest_line(line: &str) -> Option<LogRecord> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(line) {
        if let Some(record) = parse_json_record(&json) {
            return Some(record);
        }
    }

    let code_path = CodePath::new(RAW_MODULE, "-", 0);
    Some(LogRecord::new(
        Level::Info,
        0,
        0,
        compose_message(&code_path, line),
    ))
}

/// Accepts `7`, `"7"` and the `ThreadId(7)` form `tracing-subscriber` writes.
pub fn parse_thread_id(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }

    let s = value.as_str()?.trim();
    let digits = s
        .strip_prefix("ThreadId(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(s);
    digits.parse().ok()
}

fn first_of<'a>(event: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| event.get(*key))
}

/// Event metadata written by `tracing-subscriber`; everything else at the top
/// level of a flattened event is a user field.
const METADATA_KEYS: &[&str] = &[
    "timestamp",
    "level",
    "message",
    "fields",
    "target",
    "span",
    "spans",
    "threadId",
    "threadName",
    "thread_id",
    "line_number",
    "filename",
    "pid",
    "process_id",
];

/// The message plus any extra event fields as `key=value`, read from the
/// nested `fields` object or, for flattened events, the top level.
fn payload(event: &Value) -> String {
    let nested = event.get("fields");

    let mut out = nested
        .and_then(|f| f.get("message"))
        .or_else(|| event.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("<no message>")
        .to_string();

    if let Some(Value::Object(extra)) = nested {
        append_fields(&mut out, extra.iter().filter(|(key, _)| key.as_str() != "message"));
    }

    if let Value::Object(top) = event {
        append_fields(
            &mut out,
            top.iter()
                .filter(|(key, _)| !METADATA_KEYS.contains(&key.as_str())),
        );
    }

    out
}

fn append_fields<'a>(out: &mut String, fields: impl Iterator<Item = (&'a String, &'a Value)>) {
    for (key, value) in fields {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(&format!(" {key}={value}"));
    }
}
