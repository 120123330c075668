use super::{LOOP_IDLE_SLEEP, interrupt_flag, terminal_surface, viewer_config};
use crate::view::LogView;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{info, info_span, warn};

const STEP_DELAY: Duration = Duration::from_millis(120);
const PROGRESS_STEPS: usize = 20;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of worker threads logging at once
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Steps each worker logs before finishing
    #[arg(long, default_value_t = 25)]
    pub steps: usize,

    /// Path to a logview.hcl file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Opens a view on the terminal and lets a few worker threads log into it
/// through `tracing`. The last worker to finish switches the view into
/// progress mode for a moment.
///
/// Requires [`crate::logging::init_logging`] to have installed the global
/// subscriber.
pub fn run_demo(args: DemoArgs) -> anyhow::Result<()> {
    let config = viewer_config(args.config.as_deref(), args.no_color)?;
    let interrupted = interrupt_flag()?;
    let mut view = LogView::open(&config, terminal_surface(&config))?;

    info!(workers = args.workers, "demo started");

    let remaining = Arc::new(AtomicUsize::new(args.workers));
    let handles: Vec<_> = (0..args.workers)
        .map(|id| {
            let worker = Worker {
                id,
                steps: args.steps,
                sentinel: config.progress_sentinel.clone(),
                interrupted: Arc::clone(&interrupted),
                remaining: Arc::clone(&remaining),
            };
            thread::Builder::new()
                .name(format!("demo-worker-{id}"))
                .spawn(move || worker.run())
        })
        .collect::<Result<_, _>>()?;

    view.pump_until(
        |_| interrupted.load(Ordering::SeqCst) || remaining.load(Ordering::SeqCst) == 0,
        LOOP_IDLE_SLEEP,
    )?;

    for handle in handles {
        let _ = handle.join();
    }

    info!("demo finished");
    view.pump()?;
    view.close()?;

    Ok(())
}

struct Worker {
    id: usize,
    steps: usize,
    sentinel: String,
    interrupted: Arc<AtomicBool>,
    remaining: Arc<AtomicUsize>,
}

impl Worker {
    fn run(self) {
        let span = info_span!("process_frames", worker = self.id);
        span.in_scope(|| self.process_frames());

        // last one out shows the progress bar for a while
        if self.remaining.load(Ordering::SeqCst) == 1 {
            info!("{}", self.sentinel);
            for _ in 0..PROGRESS_STEPS {
                if self.stopped() {
                    break;
                }
                thread::sleep(STEP_DELAY);
            }
        }
        self.remaining.fetch_sub(1, Ordering::SeqCst);
    }

    fn process_frames(&self) {
        for step in 0..self.steps {
            if self.stopped() {
                warn!(step, "interrupted");
                return;
            }

            match step % 10 {
                9 => warn!(step, "frame took longer than budget"),
                _ => info!(step, "processed frame"),
            }
            thread::sleep(STEP_DELAY + Duration::from_millis(self.id as u64 * 15));
        }
        info!(steps = self.steps, "worker done");
    }

    fn stopped(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}
