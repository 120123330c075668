use crate::record::{Level, UnknownLevel};

#[test]
fn level_parses_common_spellings() {
    assert_eq!("info".parse::<Level>(), Ok(Level::Info));
    assert_eq!("WARN".parse::<Level>(), Ok(Level::Warning));
    assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
    assert_eq!("CRITICAL".parse::<Level>(), Ok(Level::Error));
    assert_eq!(
        "loud".parse::<Level>(),
        Err(UnknownLevel("loud".to_string()))
    );
}

#[test]
fn level_display_honors_padding() {
    assert_eq!(format!("{:<7}|", Level::Info), "INFO   |");
    assert_eq!(format!("{:<7}|", Level::Warning), "WARNING|");
}

#[test]
fn level_is_ordered_by_severity() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Warning < Level::Error);
    assert_eq!(Level::from(tracing::Level::WARN), Level::Warning);
}
