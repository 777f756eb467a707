//! `tally-cli` — import line-item tables from JSON and report exact totals.
//!
//! The binary is a thin wrapper around [`run`]; everything it does is reachable
//! from the library for tests.

pub mod book;
pub mod config;
pub mod import;
pub mod report;

pub use book::GroupBook;
pub use config::{CliConfig, OutputFormat};
pub use import::{ImportError, load_file, parse_document};
pub use report::{GroupSummary, Report};

/// Load every input in order, merge groups by key and build the report.
pub fn run(config: &CliConfig) -> Result<Report, ImportError> {
    let mut book = GroupBook::new();

    for path in &config.inputs {
        let groups = load_file(path).inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "import failed");
        })?;
        book.merge_all(groups);
    }

    tracing::info!(
        files = config.inputs.len(),
        groups = book.len(),
        "import complete"
    );

    Ok(Report::from_book(&book))
}
