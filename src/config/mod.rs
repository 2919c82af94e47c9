use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "psi-directory")]
#[command(about = "Deterministic directory resolution for provider listings")]
pub struct CliConfig {
    /// Listing collection endpoint (JSON array of listings).
    #[arg(long, default_value = "http://localhost:8080/api/listings")]
    pub api_endpoint: String,

    #[arg(long, default_value = "10")]
    pub page_size: usize,

    /// Free-text search over names, formation and tags.
    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long, value_delimiter = ',')]
    pub areas: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub approaches: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub audiences: Vec<String>,

    /// Resolve a single slug token instead of listing the directory.
    #[arg(long)]
    pub slug: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
