use super::{LOOP_IDLE_SLEEP, interrupt_flag, terminal_surface, viewer_config};
use crate::ingest::ingest_line;
use crate::listener::ListenerState;
use crate::view::LogView;
use clap::Args;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::thread;

#[derive(Args, Debug)]
pub struct TailArgs {
    /// Path to a logview.hcl file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Renders JSON log lines from stdin, e.g. `app 2>&1 | logview tail`.
pub fn run_tail(args: TailArgs) -> anyhow::Result<()> {
    let config = viewer_config(args.config.as_deref(), args.no_color)?;
    let interrupted = interrupt_flag()?;
    let mut view = LogView::open_detached(&config, terminal_surface(&config))?;
    let sink = view.sink();

    // Reader thread: stdin -> ingest_line -> sink
    let reader_handle = thread::Builder::new()
        .name("logview-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines().map_while(Result::ok) {
                let Some(record) = ingest_line(&line) else {
                    continue;
                };
                // listener gone, stop early
                if !sink.record_blocking(record) {
                    return;
                }
            }
            sink.finish();
        })?;

    view.pump_until(
        |v| interrupted.load(Ordering::SeqCst) || v.listener_state() == ListenerState::Stopped,
        LOOP_IDLE_SLEEP,
    )?;
    view.close()?;

    // A reader still blocked on stdin is left behind on Ctrl-C.
    if reader_handle.is_finished() {
        let _ = reader_handle.join();
    }

    Ok(())
}
