// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Memory Book — turn captioned photos into a decorative PDF album.
//
// Entry point. Initialises logging, loads settings and the album manifest,
// then either prints a page preview or writes the PDF.

mod manifest;
mod preview;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use memorybook_core::error::Result;
use memorybook_core::human_errors::humanize_error;
use memorybook_core::{AlbumConfig, DeviceProfile};
use memorybook_document::{AlbumWriter, BuiltinFontMetrics, PagePlanner, PdfReader};

use manifest::Manifest;

#[derive(Debug, Parser)]
#[command(name = "memorybook", version, about)]
struct Cli {
    /// JSON settings file (paper size, spacing, colours).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the compact spacing profile.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the album described by a manifest to PDF.
    Build {
        manifest: PathBuf,
        #[arg(short, long, default_value = "Memory_Book.pdf")]
        output: PathBuf,
    },
    /// Print the planned pages without writing a PDF.
    Preview { manifest: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Memory Book failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.compact)?;

    match &cli.command {
        Command::Build { manifest, output } => {
            let manifest = Manifest::load(manifest)?;
            let album = manifest.load_album()?;
            AlbumWriter::new(config).write_to_file(&album, output)?;

            let pages = PdfReader::open(output)?.page_count();
            println!("Wrote {} ({} pages)", output.display(), pages);
        }
        Command::Preview { manifest } => {
            let manifest = Manifest::load(manifest)?;
            let planner = PagePlanner::new(&config, &BuiltinFontMetrics);
            let pages = planner.plan_album(&manifest.details(), manifest.photo_dimensions()?)?;
            print!("{}", preview::describe(&pages));
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>, compact: bool) -> Result<AlbumConfig> {
    let mut config = match path {
        Some(path) => AlbumConfig::from_json_file(path)?,
        None => AlbumConfig::default(),
    };
    if compact {
        config.profile = DeviceProfile::compact();
    }
    tracing::debug!(paper = ?config.paper_size, compact, "Configuration loaded");
    Ok(config)
}
