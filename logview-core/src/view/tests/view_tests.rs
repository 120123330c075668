use crate::conf::ViewerConfig;
use crate::listener::ListenerState;
use crate::record::{CodePath, Level, LogRecord};
use crate::surface::{MemorySurface, StyledLine, Surface};
use crate::view::{LogView, ViewError};
use pretty_assertions::assert_eq;
use std::io;
use std::time::{Duration, Instant};

const IDLE: Duration = Duration::from_millis(1);
const WAIT: Duration = Duration::from_secs(5);

fn plain_config() -> ViewerConfig {
    let mut config = ViewerConfig::default();
    config.display.show_colors = false;
    config
}

fn record(payload: &str) -> LogRecord {
    LogRecord::from_parts(Level::Info, 1, &CodePath::new("app", "work", 7), payload)
}

fn wait_for(view: &mut LogView<MemorySurface>, lines: usize) {
    let deadline = Instant::now() + WAIT;
    while view.surface().len() < lines {
        assert!(Instant::now() < deadline, "view did not render in time");
        view.pump().unwrap();
        std::thread::sleep(IDLE);
    }
}

#[test]
fn records_render_in_submission_order() {
    // Arrange
    let mut view = LogView::open_detached(&plain_config(), MemorySurface::new()).unwrap();
    let sink = view.sink();

    // Act
    for i in 0..50 {
        sink.record(record(&format!("step {i}")));
    }
    wait_for(&mut view, 50);

    // Assert
    let payloads: Vec<String> = view
        .surface()
        .plain_lines()
        .iter()
        .map(|line| line.rsplit(" ::: ").next().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (0..50).map(|i| format!("step {i}")).collect();
    assert_eq!(payloads, expected);
    assert!(view.surface().plain_lines()[0].contains("app:work:7"));
}

#[test]
fn close_is_idempotent() {
    // Arrange
    let mut view = LogView::open_detached(&plain_config(), MemorySurface::new()).unwrap();

    // Act
    view.close().unwrap();
    view.close().unwrap();

    // Assert
    assert_eq!(view.listener_state(), ListenerState::Stopped);
}

#[test]
fn progress_sentinel_draws_progress_instead_of_a_line() {
    // Arrange
    let mut config = plain_config();
    config.tick_interval_ms = 1;
    let sentinel = config.progress_sentinel.clone();
    let mut view = LogView::open_detached(&config, MemorySurface::new()).unwrap();

    // Act
    view.sink().record(record(&sentinel));
    wait_for(&mut view, 1);

    // Assert
    let lines = view.surface().plain_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Processing:"));
    assert!(view.renderer().progress_mode());
}

#[test]
fn records_below_min_level_are_not_rendered() {
    // Arrange
    let config = ViewerConfig {
        min_level: "warning".to_string(),
        ..plain_config()
    };
    let mut view = LogView::open_detached(&config, MemorySurface::new()).unwrap();
    let sink = view.sink();

    // Act
    sink.record(record("quiet"));
    sink.record(LogRecord::from_parts(
        Level::Error,
        1,
        &CodePath::new("app", "work", 9),
        "loud",
    ));
    wait_for(&mut view, 1);
    view.close().unwrap();

    // Assert
    let lines = view.surface().plain_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("loud"));
}

#[test]
fn pump_until_stops_when_done() {
    // Arrange
    let mut view = LogView::open_detached(&plain_config(), MemorySurface::new()).unwrap();
    let mut passes = 0;

    // Act
    view.pump_until(
        |_| {
            passes += 1;
            passes == 3
        },
        IDLE,
    )
    .unwrap();

    // Assert
    assert_eq!(passes, 3);
    assert!(view.into_surface().unwrap().is_empty());
}

#[test]
fn finished_stream_is_rendered_in_full() {
    // Arrange
    let config = ViewerConfig {
        queue_capacity: 4,
        ..plain_config()
    };
    let mut view = LogView::open_detached(&config, MemorySurface::new()).unwrap();
    let sink = view.sink();

    // Act
    let producer = std::thread::spawn(move || {
        for i in 0..40 {
            assert!(sink.record_blocking(record(&format!("line {i}"))));
        }
        sink.finish();
    });
    view.pump_until(|v| v.listener_state() == ListenerState::Stopped, IDLE)
        .unwrap();
    producer.join().unwrap();
    view.close().unwrap();

    // Assert
    let lines = view.surface().plain_lines();
    assert_eq!(lines.len(), 40);
    assert!(lines[39].ends_with("line 39"));
}

#[derive(Default)]
struct BrokenSurface;

impl Surface for BrokenSurface {
    fn append(&mut self, _line: StyledLine) -> io::Result<()> {
        Err(io::Error::other("display went away"))
    }

    fn replace_last(&mut self, line: StyledLine) -> io::Result<()> {
        self.append(line)
    }

    fn last_line(&self) -> Option<String> {
        None
    }
}

#[test]
fn into_surface_reports_a_failed_final_render() {
    // Arrange
    let mut view = LogView::open_detached(&plain_config(), BrokenSurface).unwrap();
    let sink = view.sink();
    sink.record(record("never shown"));
    sink.finish();
    let deadline = Instant::now() + WAIT;
    while view.listener_state() == ListenerState::Running {
        assert!(Instant::now() < deadline, "listener did not stop");
        std::thread::sleep(IDLE);
    }

    // Act
    let result = view.into_surface();

    // Assert
    assert!(matches!(result, Err(ViewError::Surface(_))));
}
