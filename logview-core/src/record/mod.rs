//! Log records as they travel from producers to the renderer.

mod level;
mod message;
#[cfg(test)]
mod tests;

pub use level::{Level, UnknownLevel};
pub use message::{
    CodePath, HEADER_DELIMITER, MessageError, PAYLOAD_DELIMITER, ParsedMessage, compose_message,
    parse_message,
};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One emitted log event.
///
/// `message` holds the raw `module:function:line |||| payload` form; it is
/// parsed on the display thread, not by the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub process_id: u32,
    pub thread_id: u64,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: Level, process_id: u32, thread_id: u64, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            process_id,
            thread_id,
            message: message.into(),
        }
    }

    /// Builds a record for the calling process from a code path and payload.
    pub fn from_parts(level: Level, thread_id: u64, code_path: &CodePath, payload: &str) -> Self {
        Self::new(
            level,
            std::process::id(),
            thread_id,
            compose_message(code_path, payload),
        )
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn parse(&self) -> Result<ParsedMessage, MessageError> {
        parse_message(&self.message)
    }
}
