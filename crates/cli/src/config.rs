//! Importer configuration from arguments and environment.

use std::path::PathBuf;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub inputs: Vec<PathBuf>,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Positional arguments are input files; `TALLY_INPUT` is used when there are none.
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::args().skip(1).collect(),
            std::env::var("TALLY_INPUT").ok(),
            std::env::var("TALLY_OUTPUT").ok(),
        )
    }

    pub fn from_parts(args: Vec<String>, input: Option<String>, output: Option<String>) -> Self {
        let mut inputs: Vec<PathBuf> = args.into_iter().map(PathBuf::from).collect();
        if inputs.is_empty() {
            if let Some(path) = input.filter(|p| !p.trim().is_empty()) {
                inputs.push(PathBuf::from(path));
            }
        }

        let output = match output {
            Some(raw) => OutputFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown TALLY_OUTPUT; using text");
                OutputFormat::Text
            }),
            None => OutputFormat::Text,
        };

        Self { inputs, output }
    }
}
