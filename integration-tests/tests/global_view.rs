use integration_tests::harness::{init_test_tracing, plain_config, serial, wait_until};
use logview_core::sink;
use logview_core::surface::MemorySurface;
use logview_core::view::LogView;
use pretty_assertions::assert_eq;
use std::thread;
use tracing::{info, info_span};

fn lines_with(view: &LogView<MemorySurface>, marker: &str) -> Vec<String> {
    view.surface()
        .plain_lines()
        .into_iter()
        .filter(|line| line.contains(marker))
        .collect()
}

#[test]
fn tracing_events_from_many_threads_reach_the_view() {
    let _serial = serial();
    init_test_tracing();

    // Arrange
    let mut view = LogView::open(&plain_config(), MemorySurface::new()).unwrap();
    let marker = "fanout-many-threads";

    // Act
    let producers: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                let span = info_span!("stitch_tiles", worker);
                let _entered = span.enter();
                for step in 0..25 {
                    info!("{marker} w{worker} s{step}");
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }
    wait_until(&mut view, |v| lines_with(v, marker).len() == 100);

    // Assert
    let lines = lines_with(&view, marker);
    for worker in 0..4 {
        let steps: Vec<usize> = lines
            .iter()
            .filter(|line| line.contains(&format!(" w{worker} ")))
            .map(|line| {
                line.rsplit(" s")
                    .next()
                    .and_then(|step| step.parse().ok())
                    .unwrap()
            })
            .collect();
        assert_eq!(steps, (0..25).collect::<Vec<_>>());
    }
    assert!(lines.iter().all(|line| line.contains("global_view:stitch_tiles:")));

    view.close().unwrap();
}

#[test]
fn closed_view_is_no_longer_a_destination() {
    let _serial = serial();
    init_test_tracing();

    // Arrange
    let mut view = LogView::open(&plain_config(), MemorySurface::new()).unwrap();
    let view_sink = view.sink();

    // Act
    view.close().unwrap();
    info!("after-close");

    // Assert
    assert!(!sink::uninstall(&view_sink));
    assert!(lines_with(&view, "after-close").is_empty());
}

#[test]
fn sentinel_event_animates_then_next_record_ends_progress() {
    let _serial = serial();
    init_test_tracing();

    // Arrange
    let mut config = plain_config();
    config.tick_interval_ms = 1;
    let sentinel = config.progress_sentinel.clone();
    let mut view = LogView::open(&config, config.memory_surface()).unwrap();

    // Act
    info!("{sentinel}");
    wait_until(&mut view, |v| v.renderer().progress_counter() >= 8);
    let lines_in_progress = view.surface().len();

    info!("progress-finished");
    wait_until(&mut view, |v| !lines_with(v, "progress-finished").is_empty());

    // Assert
    assert!(!view.renderer().progress_mode());
    let lines = view.surface().plain_lines();
    assert_eq!(lines.len(), lines_in_progress + 1);
    assert!(lines[lines.len() - 2].starts_with("Processing:"));
    assert!(lines.iter().all(|line| !line.contains(&sentinel)));

    view.close().unwrap();
}

#[test]
fn listener_lifecycle_is_logged() {
    let _serial = serial();
    let events = init_test_tracing();

    // Arrange
    let mut view = LogView::open(&plain_config(), MemorySurface::new()).unwrap();

    // Act
    view.close().unwrap();

    // Assert
    let events = events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|e| e.message() == Some("closing log queue listener"))
    );
}
