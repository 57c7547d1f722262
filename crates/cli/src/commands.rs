use std::path::PathBuf;

use clap::Parser;

use boxoffice_observability::{LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "boxoffice")]
#[command(about = "Validate, price and book a ticket purchase.")]
pub struct CommandLine {
    /// JSON purchase request to process (`-` reads stdin)
    #[arg(long, short, env = "BOXOFFICE_REQUEST", default_value = "-")]
    pub request: PathBuf,

    /// Log line format: json or text
    #[arg(long, env = "BOXOFFICE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            default_filter: self.log_filter.clone(),
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.request.as_os_str() == "-"
    }
}
