use thiserror::Error;

/// Separates the code-path tag from the human payload.
pub const PAYLOAD_DELIMITER: &str = "||||";

/// Ends an optional formatter header in front of the code-path tag.
pub const HEADER_DELIMITER: &str = ":::::";

/// Location a record was emitted from. The line is informational only and is
/// never part of a color key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodePath {
    pub module: String,
    pub function: String,
    pub line: u32,
}

impl CodePath {
    pub fn new(module: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
            line,
        }
    }

    /// `module:function:line`
    pub fn tag(&self) -> String {
        format!("{}:{}:{}", self.module, self.function, self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub code_path: CodePath,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message has no '||||' delimiter")]
    MissingDelimiter,

    #[error("code path '{0}' is not of the form module:function:line")]
    MalformedCodePath(String),
}

/// Joins a code path and a payload into the raw message form.
pub fn compose_message(code_path: &CodePath, payload: &str) -> String {
    format!("{} {PAYLOAD_DELIMITER} {}", code_path.tag(), payload)
}

/// Splits a raw message into its code path and trimmed payload.
///
/// Anything up to and including the last [`HEADER_DELIMITER`] is discarded.
/// The module part may itself contain `::` (Rust module paths), so the tag is
/// split from the right.
pub fn parse_message(raw: &str) -> Result<ParsedMessage, MessageError> {
    let body = match raw.rfind(HEADER_DELIMITER) {
        Some(idx) => &raw[idx + HEADER_DELIMITER.len()..],
        None => raw,
    };

    let (tag, payload) = body
        .split_once(PAYLOAD_DELIMITER)
        .ok_or(MessageError::MissingDelimiter)?;

    let code_path = parse_code_path(tag.trim())?;

    Ok(ParsedMessage {
        code_path,
        payload: payload.trim().to_string(),
    })
}

fn parse_code_path(tag: &str) -> Result<CodePath, MessageError> {
    let malformed = || MessageError::MalformedCodePath(tag.to_string());

    let mut parts = tag.rsplitn(3, ':');
    let line = parts.next().ok_or_else(malformed)?;
    let function = parts.next().ok_or_else(malformed)?;
    let module = parts.next().ok_or_else(malformed)?;

    if module.is_empty() || function.is_empty() {
        return Err(malformed());
    }

    let line = line.trim().parse::<u32>().map_err(|_| malformed())?;

    Ok(CodePath::new(module, function, line))
}
