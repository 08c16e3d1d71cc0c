pub mod toml_config;

pub use toml_config::FormConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "car-price-form")]
#[command(about = "Drive the car price prediction form headlessly against a model list endpoint")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override endpoint.base_url from config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Manufacturer to select (empty leaves the brand unset)
    #[arg(long, default_value = "")]
    pub company: String,

    /// Model to pick once the list has loaded
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long, default_value = "Petrol")]
    pub fuel_type: String,

    #[arg(long, default_value = "")]
    pub year: String,

    #[arg(long, default_value = "")]
    pub kilo_driven: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// File config (or defaults) with command-line overrides applied, validated.
    pub fn load_form_config(&self) -> Result<FormConfig> {
        let mut config = match &self.config {
            Some(path) => FormConfig::from_file(path)?,
            None => FormConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            tracing::info!("🔧 Base URL overridden to: {}", base_url);
            config.endpoint.base_url = base_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }
        Ok(())
    }
}
