// Command-line flow, kept in the library so the binary stays a thin shell.

use crate::adapters::json::{load_course, load_providers};
use crate::adapters::registry::ProviderRegistry;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::domain::model::SeatPartition;
use crate::utils::error::{Result, SeatError};
use crate::utils::validation::Validate;
use anyhow::Context;

/// Checks the arguments, then loads and checks the TOML file if one was given.
pub fn load_config(args: &CliConfig) -> Result<TomlConfig> {
    args.validate()?;

    let config = match &args.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;

    Ok(config)
}

pub fn organize(args: &CliConfig, file_config: &TomlConfig) -> anyhow::Result<SeatPartition> {
    let course = load_course(&args.course)
        .with_context(|| format!("Failed to load course from '{}'", args.course))?;

    let registry = match &args.providers {
        Some(path) => load_providers(path)
            .with_context(|| format!("Failed to load credit providers from '{}'", path))?,
        None => ProviderRegistry::new(),
    };

    let organizer = file_config.organizer_with_category(args.category.as_deref());

    tracing::info!(
        "📋 Course {}: {} seats, {} credit providers, category '{}'",
        course.id,
        course.seats.len(),
        registry.len(),
        organizer.category()
    );

    let partition = organizer.organize(&course, &registry);

    tracing::info!(
        "✅ {} residual seats, {} '{}' seats",
        partition.residual.len(),
        partition.filtered.len(),
        organizer.category()
    );

    Ok(partition)
}

pub fn render(partition: &SeatPartition, pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(partition)?
    } else {
        serde_json::to_string(partition)?
    };
    Ok(output)
}

/// Exit code for a failed run: the crate error's own code when there is one,
/// otherwise treated as an input problem.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SeatError>()
        .map(SeatError::exit_code)
        .unwrap_or(2)
}
