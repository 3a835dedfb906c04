pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "seat-organizer")]
#[command(about = "Orders and partitions course seats for display")]
pub struct CliConfig {
    /// Course JSON file with a `seats` array
    #[arg(long)]
    pub course: String,

    /// Credit provider JSON file (array of {id, display_name})
    #[arg(long)]
    pub providers: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Seat type to split out; overrides the configuration file
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("course", &self.course)?;
        validate_file_extensions("course", &[self.course.as_str()], &["json"])?;

        if let Some(providers) = &self.providers {
            validate_path("providers", providers)?;
            validate_file_extensions("providers", &[providers.as_str()], &["json"])?;
        }

        if let Some(config) = &self.config {
            validate_path("config", config)?;
            validate_file_extensions("config", &[config.as_str()], &["toml"])?;
        }

        if let Some(category) = &self.category {
            validate_non_empty_string("category", category)?;
        }

        Ok(())
    }
}
