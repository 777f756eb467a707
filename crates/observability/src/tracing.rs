//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a `TALLY_LOG_FORMAT` value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Subscriber settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives (`RUST_LOG` syntax).
    pub filter: String,
    pub format: LogFormat,
    /// Set when `TALLY_LOG_FORMAT` held something unrecognised.
    pub unknown_format: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
            unknown_format: None,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("TALLY_LOG_FORMAT").ok(),
        )
    }

    /// Build from raw variable values; `None` means unset.
    pub fn from_vars(rust_log: Option<String>, log_format: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = log_format {
            match LogFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => config.unknown_format = Some(raw),
            }
        }

        config
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(TracingConfig::from_env());
}

/// Initialize tracing/logging with an explicit configuration.
pub fn init_with(config: TracingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout is reserved for reports.
    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if result.is_ok() {
        if let Some(raw) = config.unknown_format {
            ::tracing::warn!(value = %raw, "unknown TALLY_LOG_FORMAT; using default");
        }
    }
}
