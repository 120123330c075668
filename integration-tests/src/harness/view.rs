use logview_core::conf::ViewerConfig;
use logview_core::surface::Surface;
use logview_core::view::LogView;
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_secs(5);
const IDLE: Duration = Duration::from_millis(1);

/// Defaults with colors off, so lines compare as plain text.
pub fn plain_config() -> ViewerConfig {
    let mut config = ViewerConfig::default();
    config.display.show_colors = false;
    config
}

/// Serializes tests that share the global destinations list.
pub fn serial() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Pumps `view` until `done` holds, panicking after a few seconds.
pub fn wait_until<S: Surface>(view: &mut LogView<S>, mut done: impl FnMut(&LogView<S>) -> bool) {
    let deadline = Instant::now() + WAIT;
    loop {
        view.pump().expect("surface write failed");
        if done(&*view) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for the view");
        thread::sleep(IDLE);
    }
}
