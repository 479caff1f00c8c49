use archive_index::{archive, config, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archive-index")]
#[command(about = "Build the archive index for a folder of sermon pages")]
#[command(long_about = "\
Build the archive index for a folder of sermon pages

Walks the site root, reads every archived .html page and writes one
date-sorted data file for the archive viewer.

Site structure:

  site/
  ├── archive.toml              # Optional config (see gen-config)
  ├── index.html                # The archive viewer (never listed)
  ├── 260111info.html           # YYMMDD prefix  → 2026-01-11
  ├── 2025-12-31-sermon.html    # YYYY-MM-DD prefix → 2025-12-31
  ├── guides/family.html        # No date prefix → listed last
  ├── data/archiveData.json     # Output (data/ is never scanned)
  └── scripts/                  # Tooling (never scanned)

Scripture lookup (first match wins):
  data-scripture attribute → .scripture-ref → SERMON INFOGRAPHIC • …
  → .subtitle → .bible-box <p> → fa-book-open icon → .guide-info | …

Run 'archive-index gen-config' to print a documented archive.toml.")]
#[command(version)]
struct Cli {
    /// Site root to scan
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output file, relative to the site root (overrides archive.toml)
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the site and write the archive data file (default)
    Build,
    /// Scan the site and list what would be written, without writing
    Check,
    /// Print a stock archive.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Build) => {
            let config = load_config(&cli)?;
            let result = archive::build(&cli.root, &config)?;
            output::print_build_output(&result.output, result.records.len());
        }
        Some(Command::Check) => {
            let config = load_config(&cli)?;
            let mut records = archive::collect_records(&cli.root, &config)?;
            archive::sort_records(&mut records);
            output::print_check_output(&records);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `archive.toml` from the site root and apply CLI overrides.
fn load_config(cli: &Cli) -> Result<config::ArchiveConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.root)?;
    if let Some(output) = &cli.output {
        config.output = output.clone();
        config.validate()?;
    }
    Ok(config)
}
