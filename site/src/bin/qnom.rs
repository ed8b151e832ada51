//! # qnom
//!
//! Builds the QNom landing page into a static directory.
//!
//! ```bash
//! qnom build --out dist --manifest   # write dist/index.html and dist/site.json
//! qnom check                         # content-completeness check
//! qnom render > index.html           # print the page
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use qnom_site::config::CONFIG_FILE;
use qnom_site::content::SiteContent;
use qnom_site::{SiteConfig, SiteManifest, build_site, check_content, render_home};

#[derive(Parser, Debug)]
#[command(name = "qnom")]
#[command(about = "Render the QNom landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site and write it to the output directory
    Build {
        /// Output directory (overrides `build.out_dir`)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Config file (default: ./qnom.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Also write site.json (overrides `build.emit_manifest`)
        #[arg(long)]
        manifest: bool,
    },
    /// Run the content-completeness check
    Check {
        /// Print the site manifest as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print the home page HTML to stdout
    Render,
}

fn load_config(path: Option<PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load_from_path(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => SiteConfig::load(&std::env::current_dir().context("resolving working directory")?)
            .with_context(|| format!("loading {}", CONFIG_FILE)),
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build {
            out,
            config,
            manifest,
        } => {
            let mut config = load_config(config)?;
            if let Some(out) = out {
                config.build.out_dir = out;
            }
            if manifest {
                config.build.emit_manifest = true;
            }

            let report = build_site(&config).context("building site")?;
            for file in &report.files {
                println!("{} ({} bytes)", file.path.display(), file.bytes);
            }
        }
        Command::Check { json } => {
            let content = SiteContent::QNOM;
            check_content(&content).context("content check")?;
            if json {
                println!("{}", SiteManifest::new(content).to_json()?);
            } else {
                println!(
                    "ok: {} nav links, {} footer columns, {} feature cards, {} stats, {} routes",
                    content.nav_links.len(),
                    content.footer_columns.len(),
                    content.features.len(),
                    content.stats.len(),
                    content.destinations().len()
                );
            }
        }
        Command::Render => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", render_home()).context("writing to stdout")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("qnom v{}", env!("CARGO_PKG_VERSION"));

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
