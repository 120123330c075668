use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check_config(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ min level {}", cfg.level());
            println!("✔ queue capacity {}", cfg.queue_capacity);
            println!("✔ progress tick every {}ms", cfg.tick_interval_ms);
            println!(
                "✔ colors {}",
                if cfg.display.show_colors { "on" } else { "off" }
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Invalid {
            field: "min_level", ..
        } => Some("Use one of: trace, debug, info, warning, error."),

        ConfigError::Invalid { .. } => Some(
            "Sizes and intervals must be at least 1.\n\
             \n\
             Example:\n\
             \n\
             queue_capacity   = 4096\n\
             tick_interval_ms = 50",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings are HCL. Display options live in a `display` block:\n\
             \n\
             display {\n\
             \x20 show_colors = false\n\
             }",
        ),

        ConfigError::ReadFile { .. } => None,
    }
}
