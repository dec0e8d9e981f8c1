use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sheet_peek::preview::{self, DEFAULT_PREVIEW_ROWS, DEFAULT_WORKBOOK};
use sheet_peek::{OutputMode, PreviewOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path
    #[arg(default_value = DEFAULT_WORKBOOK)]
    file_path: PathBuf,

    /// Number of rows to preview from the first sheet
    #[arg(long, short = 'n', default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Print the previewed rows as JSON instead of a text table
    #[arg(long, short = 'j')]
    json: bool,

    /// List every non-empty previewed cell with its raw text and line breaks
    #[arg(long, short = 'c')]
    cells: bool,
}

impl Cli {
    fn options(&self) -> PreviewOptions {
        PreviewOptions {
            rows: self.rows,
            mode: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Table
            },
            inspect_cells: self.cells,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the preview
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Failures inside the preview are reported on stdout and do not change
    // the exit status
    preview::preview(&cli.file_path, &cli.options(), &mut out);

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
