use crate::record::{
    CodePath, LogRecord, Level, MessageError, ParsedMessage, compose_message, parse_message,
};
use pretty_assertions::assert_eq;

#[test]
fn parse_extracts_code_path_and_payload() {
    // Act
    let parsed = parse_message("pkg.mod:do_thing:42 |||| hello world").unwrap();

    // Assert
    assert_eq!(
        parsed,
        ParsedMessage {
            code_path: CodePath::new("pkg.mod", "do_thing", 42),
            payload: "hello world".to_string(),
        }
    );
    assert_eq!(parsed.code_path.tag(), "pkg.mod:do_thing:42");
}

#[test]
fn parse_discards_formatter_header() {
    // Act
    let parsed =
        parse_message("2024-01-01 INFO 1234 ::::: pkg.mod:run:7 ||||   trimmed payload  ").unwrap();

    // Assert
    assert_eq!(parsed.code_path, CodePath::new("pkg.mod", "run", 7));
    assert_eq!(parsed.payload, "trimmed payload");
}

#[test]
fn parse_accepts_rust_module_paths() {
    // Act
    let parsed = parse_message("logview_core::render:render_record:118 |||| ok").unwrap();

    // Assert
    assert_eq!(parsed.code_path.module, "logview_core::render");
    assert_eq!(parsed.code_path.function, "render_record");
    assert_eq!(parsed.code_path.line, 118);
}

#[test]
fn parse_keeps_delimiters_inside_payload() {
    // Act
    let parsed = parse_message("m:f:1 |||| a |||| b").unwrap();

    // Assert
    assert_eq!(parsed.payload, "a |||| b");
}

#[test]
fn parse_rejects_missing_delimiter() {
    // Act
    let result = parse_message("just some text");

    // Assert
    assert_eq!(result, Err(MessageError::MissingDelimiter));
}

#[test]
fn parse_rejects_incomplete_code_path() {
    // Act
    let result = parse_message("module:function |||| payload");

    // Assert
    assert!(matches!(result, Err(MessageError::MalformedCodePath(_))));
}

#[test]
fn parse_rejects_non_numeric_line() {
    // Act
    let result = parse_message("m:f:abc |||| payload");

    // Assert
    assert_eq!(
        result,
        Err(MessageError::MalformedCodePath("m:f:abc".to_string()))
    );
}

#[test]
fn record_from_parts_round_trips_through_parse() {
    // Arrange
    let code_path = CodePath::new("capture::sync", "align", 300);

    // Act
    let record = LogRecord::from_parts(Level::Info, 3, &code_path, "aligned 4 cameras");

    // Assert
    assert_eq!(record.process_id, std::process::id());
    assert_eq!(
        record.message,
        compose_message(&code_path, "aligned 4 cameras")
    );
    assert_eq!(record.parse().unwrap().payload, "aligned 4 cameras");
}
