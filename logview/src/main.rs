use clap::{Parser, Subcommand};
use logview_core::cli::{self, DemoArgs, TailArgs};
use logview_core::logging::{LoggingOptions, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logview",
    version,
    about = "logview: colorized, thread-aware log viewer"
)]
struct Cli {
    /// Also write the tool's own events to this file as JSON
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log from a few worker threads into a live view
    Demo(DemoArgs),

    /// Render JSON log lines read from stdin
    Tail(TailArgs),

    /// Validate a logview.hcl file and exit
    CheckConfig {
        /// Path to the config file
        #[arg(default_value = "logview.hcl")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The view shows the tool's own events while it owns the terminal.
    let console = matches!(cli.command, Command::CheckConfig { .. });
    let _guard = init_logging(&LoggingOptions {
        log_file: cli.log_file,
        console,
    })?;

    match cli.command {
        Command::Demo(args) => cli::run_demo(args),
        Command::Tail(args) => cli::run_tail(args),
        Command::CheckConfig { path } => cli::check_config(path),
    }
}
