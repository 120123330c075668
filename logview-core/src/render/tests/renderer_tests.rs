use crate::color::Rgb;
use crate::listener::ViewEvent;
use crate::record::{Level, LogRecord};
use crate::render::{DEFAULT_PROGRESS_SENTINEL, RenderOptions, Renderer, level_color};
use crate::surface::{MemorySurface, Surface};
use chrono::{Duration, Local, TimeZone};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn plain_renderer() -> Renderer {
    let options = RenderOptions {
        show_colors: false,
        ..Default::default()
    };
    Renderer::new(options, Arc::new(AtomicBool::new(false)))
}

fn record(pid: u32, tid: u64, message: &str) -> LogRecord {
    let ts = Local.with_ymd_and_hms(2024, 5, 1, 10, 22, 3).unwrap() + Duration::milliseconds(42);
    LogRecord::new(Level::Info, pid, tid, message).with_timestamp(ts)
}

fn span_color(surface: &MemorySurface, line: usize, text_prefix: &str) -> Option<Rgb> {
    surface
        .lines()
        .nth(line)
        .unwrap()
        .spans()
        .iter()
        .find(|s| s.text.starts_with(text_prefix))
        .and_then(|s| s.color)
}

#[test]
fn renders_fixed_width_line() {
    // Arrange
    let mut renderer = plain_renderer();
    let mut surface = MemorySurface::new();

    // Act
    renderer
        .render_record(
            &record(4242, 3, "capture::sync:align:88 |||| aligned 4 cameras"),
            &mut surface,
        )
        .unwrap();

    // Assert
    assert_eq!(
        surface.plain_lines(),
        vec![
            "[2024-05-01T10:22:03.0042][INFO   ] [ProcessID:  4242, ThreadID:     3] \
             capture::sync:align:88 ::: aligned 4 cameras"
        ]
    );
}

#[test]
fn hides_code_path_when_disabled() {
    // Arrange
    let options = RenderOptions {
        show_colors: false,
        show_code_path: false,
        ..Default::default()
    };
    let mut renderer = Renderer::new(options, Arc::new(AtomicBool::new(false)));
    let mut surface = MemorySurface::new();

    // Act
    renderer
        .render_record(&record(1, 1, "m:f:1 |||| hello"), &mut surface)
        .unwrap();

    // Assert
    let line = surface.last_line().unwrap();
    assert!(line.ends_with("ThreadID:     1] ::: hello"));
    assert!(!line.contains("m:f:1"));
}

#[test]
fn process_color_is_stable_across_records() {
    // Arrange
    let mut renderer = Renderer::new(RenderOptions::default(), Arc::new(AtomicBool::new(false)));
    let mut surface = MemorySurface::new();

    // Act
    renderer
        .render_record(&record(7, 1, "a:b:1 |||| one"), &mut surface)
        .unwrap();
    renderer
        .render_record(&record(8, 1, "a:b:2 |||| two"), &mut surface)
        .unwrap();
    renderer
        .render_record(&record(7, 2, "c:d:3 |||| three"), &mut surface)
        .unwrap();

    // Assert
    let first = span_color(&surface, 0, "[ProcessID:");
    let third = span_color(&surface, 2, "[ProcessID:");
    let other = span_color(&surface, 1, "[ProcessID:");
    assert_eq!(first, third);
    assert_ne!(first, other);

    // same (module, function) at a different line keeps its color
    assert_eq!(span_color(&surface, 0, "a:b:1"), span_color(&surface, 1, "a:b:2"));
}

#[test]
fn timestamp_color_advances_per_record() {
    // Arrange
    let mut renderer = Renderer::new(RenderOptions::default(), Arc::new(AtomicBool::new(false)));
    let mut surface = MemorySurface::new();

    // Act
    for _ in 0..2 {
        renderer
            .render_record(&record(1, 1, "m:f:1 |||| x"), &mut surface)
            .unwrap();
    }

    // Assert
    assert_ne!(
        span_color(&surface, 0, "[2024"),
        span_color(&surface, 1, "[2024")
    );
}

#[test]
fn level_and_payload_use_static_colors() {
    // Arrange
    let mut renderer = Renderer::new(RenderOptions::default(), Arc::new(AtomicBool::new(false)));
    let mut surface = MemorySurface::new();
    let warning = LogRecord {
        level: Level::Warning,
        ..record(1, 1, "m:f:1 |||| careful")
    };

    // Act
    renderer.render_record(&warning, &mut surface).unwrap();

    // Assert
    assert_eq!(span_color(&surface, 0, "WARNING"), Some(Rgb(255, 165, 0)));
    assert_eq!(span_color(&surface, 0, "careful"), Some(Rgb::WHITE));
    assert_eq!(level_color(Level::Trace), Rgb::WHITE);
}

#[test]
fn malformed_message_renders_raw_fallback() {
    // Arrange
    let mut renderer = plain_renderer();
    let mut surface = MemorySurface::new();

    // Act
    renderer
        .render_record(&record(1, 1, "  no delimiter here "), &mut surface)
        .unwrap();

    // Assert
    assert_eq!(renderer.malformed(), 1);
    assert!(
        surface
            .last_line()
            .unwrap()
            .ends_with("ThreadID:     1] ::: no delimiter here")
    );
}

#[test]
fn sentinel_toggles_progress_mode_without_output() {
    // Arrange
    let mut renderer = plain_renderer();
    let mut surface = MemorySurface::new();
    let sentinel = format!("m:f:1 |||| {DEFAULT_PROGRESS_SENTINEL}");

    // Act
    renderer
        .render_record(&record(1, 1, &sentinel), &mut surface)
        .unwrap();

    // Assert
    assert!(renderer.progress_mode());
    assert!(surface.is_empty());

    // Act
    renderer
        .render_record(&record(1, 1, "m:f:2 |||| done"), &mut surface)
        .unwrap();

    // Assert
    assert!(!renderer.progress_mode());
    assert_eq!(surface.len(), 1);
}

#[test]
fn ticks_draw_progress_only_in_progress_mode() {
    // Arrange
    let mut renderer = plain_renderer();
    let mut surface = MemorySurface::new();

    // Act
    renderer
        .handle(ViewEvent::ProgressTick, &mut surface)
        .unwrap();

    // Assert
    assert!(surface.is_empty());

    // Act
    renderer
        .handle(
            ViewEvent::Record(record(1, 1, &format!("m:f:1 |||| {DEFAULT_PROGRESS_SENTINEL}"))),
            &mut surface,
        )
        .unwrap();
    renderer
        .handle(ViewEvent::ProgressTick, &mut surface)
        .unwrap();

    // Assert
    assert_eq!(surface.len(), 1);
    assert!(surface.last_line().unwrap().starts_with("Processing: "));
}
