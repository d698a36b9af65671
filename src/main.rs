// SPDX-License-Identifier: MIT
//
// shade — perceptual color scales from the command line.
//
// A thin, stateless front end over the palette engine:
//
//   shade-color   → hex parsing, Oklab/OKLCH and CIE Lab math
//   shade-palette → scale generation, nearest naming, CSS export
//
// One base color in; one palette printed as a table, CSS declarations, or
// an `@theme` block. Nothing is stored between runs.

mod args;

use std::process;

use anyhow::Result;
use clap::Parser;
use shade_color::fmt_fixed3;
use shade_palette::{ExportError, Palette, wrap_theme_block};
use tracing::debug;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::{CliArguments, OutputFormat};

/// Environment variable that overrides `-v` with a full filter directive.
const LOG_ENV: &str = "SHADE_LOG";

fn main() {
    let args = CliArguments::parse();
    setup_tracing(args.verbosity);

    if let Err(err) = run(&args) {
        eprintln!("shade: {err:#}");
        process::exit(1);
    }
}

fn run(args: &CliArguments) -> Result<()> {
    let mut palette = Palette::from_hex(&args.color)?;
    if let Some(name) = &args.name {
        palette = palette.with_name(name.clone());
    }
    debug!(base = %palette.base, name = %palette.name, "palette ready");

    print!("{}", render(&palette, args.format)?);
    Ok(())
}

/// Format a palette for the terminal.
fn render(palette: &Palette, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Table => Ok(render_table(palette)),
        OutputFormat::Css => palette.export(),
        OutputFormat::Theme => palette.export().map(|text| wrap_theme_block(&text)),
    }
}

fn render_table(palette: &Palette) -> String {
    let mut out = format!("{} ({})\n", palette.name, palette.base.to_hex_upper());
    for step in &palette.scale {
        let lch = step.oklch();
        out.push_str(&format!(
            "{:>5}  {}  oklch({} {} {})\n",
            step.label,
            step.color.to_hex_upper(),
            fmt_fixed3(lch.l),
            fmt_fixed3(lch.c),
            fmt_fixed3(lch.h),
        ));
    }
    out
}

/// Install the console subscriber. `-v` counts map to a max level unless
/// `SHADE_LOG` provides a filter.
fn setup_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    // Ignore the error: a subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

// ─── Tests ──────────────────────────────────────────────────────────────────
