//! pixgrid - A terminal pixel-art editor for 8x8 sprites.
//!
//! # Usage
//!
//! ```bash
//! pixgrid
//! pixgrid --color1 '#222034' --pen 1
//! pixgrid --print-on-exit > sprite.txt
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use pixgrid::app::App;
use pixgrid::canvas::{Ink, Rgb};
use pixgrid::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A terminal pixel-art editor with a live JSON view
#[derive(Parser, Debug)]
#[command(name = "pixgrid", version, about, long_about = None)]
struct Cli {
    /// Starting color for palette slot 1 (#rrggbb)
    #[arg(long, value_name = "HEX")]
    color1: Option<Rgb>,

    /// Starting color for palette slot 2 (#rrggbb)
    #[arg(long, value_name = "HEX")]
    color2: Option<Rgb>,

    /// Starting color for palette slot 3 (#rrggbb)
    #[arg(long, value_name = "HEX")]
    color3: Option<Rgb>,

    /// Starting pen (0 = transparent, 1-3 = palette slot)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pen: Option<u8>,

    /// Print the palette and grid JSON to stdout on exit
    #[arg(long)]
    print_on_exit: bool,

    /// Write diagnostics to a file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// Flags given on the command line, in the same shape as config files.
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            colors: [self.color1, self.color2, self.color3],
            pen: self.pen.and_then(|pen| Ink::from_value(u64::from(pen))),
            print_on_exit: self.print_on_exit,
            log_file: self.log_file.clone(),
        }
    }
}

/// The TUI owns the terminal, so logs only go to an explicit file.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;
    tracing::debug!(?effective, "resolved flags");

    let app = App::new()
        .with_palette(effective.palette())
        .with_pen(effective.pen())
        .with_print_on_exit(effective.print_on_exit)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
