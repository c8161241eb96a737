//! iso-probe - inspect isometric viewport math
//!
//! # Commands
//!
//! - `iso-probe project <wx> <wy>` - world position to ortho/screen, plus culling
//! - `iso-probe unproject <sx> <sy>` - screen pixel to ortho/world
//! - `iso-probe visible <left> <top> <width> <height>` - tile rectangle culling
//!
//! # Usage
//!
//! ```bash
//! # Default 800x600 screen, no camera
//! iso-probe project 1 1
//!
//! # Viewport from a config file, rendered into the left split-screen half
//! iso-probe --config viewport.toml --align left unproject 400 300
//! ```

mod probe;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nether_iso::{Align, ViewportConfig};

/// Inspect isometric viewport projections and culling
#[derive(Parser)]
#[command(name = "iso-probe")]
#[command(about = "Inspect isometric viewport projections and culling")]
#[command(version)]
struct Cli {
    /// Viewport config file (TOML); defaults to an 800x600 screen with no camera
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Split-screen alignment to evaluate under
    #[arg(short, long, global = true, value_enum, default_value_t = AlignArg::Center)]
    align: AlignArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a world position to ortho and screen space
    Project {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Convert a screen pixel back to ortho and world space
    Unproject {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Check whether a tile-grid rectangle reaches the screen
    Visible {
        #[arg(allow_negative_numbers = true)]
        left: i32,
        #[arg(allow_negative_numbers = true)]
        top: i32,
        width: i32,
        height: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Center,
    Left,
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Center => Align::Center,
            AlignArg::Left => Align::Left,
            AlignArg::Right => Align::Right,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ViewportConfig> {
    match path {
        Some(path) => ViewportConfig::load(path)
            .with_context(|| format!("Failed to load viewport config {}", path.display())),
        None => Ok(ViewportConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let query = match cli.command {
        Commands::Project { x, y } => probe::Query::Project { x, y },
        Commands::Unproject { x, y } => probe::Query::Unproject { x, y },
        Commands::Visible {
            left,
            top,
            width,
            height,
        } => probe::Query::Visible {
            left,
            top,
            width,
            height,
        },
    };

    let report = probe::run(&config, cli.align.into(), query)?;
    print!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_default_without_path() {
        assert_eq!(load_config(None).unwrap(), ViewportConfig::default());
    }

    #[test]
    fn test_load_config_from_file_drives_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[screen]\nwidth = 640\nheight = 480\n\n[camera]\nx = 160.0\ny = 80.0"
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.screen.width, 640);

        let report = probe::run(
            &config,
            AlignArg::Center.into(),
            probe::Query::Unproject { x: 320, y: 240 },
        )
        .unwrap();
        assert!(report.starts_with("screen:   640x480 at (0, 0) [Center]"));
        assert!(report.contains("world:    (2, 0)"));
    }

    #[test]
    fn test_load_config_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
