use std::path::PathBuf;

use clap::Parser;
use voc_engine::{ApiSettings, DEFAULT_BASE_URL};

pub const DEFAULT_LOG_FILE: &str = "./voc_wizard.log";

/// Terminal wizard that collects app reviews for a company and its competitors.
#[derive(Debug, Parser)]
#[command(name = "voc_wizard", version, about)]
pub struct Cli {
    /// Base URL of the VoC backend.
    #[arg(long = "api-url", env = "VOC_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Where log output goes; the terminal itself belongs to the UI.
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::new(self.api_url.as_str())
    }
}
