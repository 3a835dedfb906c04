use crate::adapters::registry::ProviderRegistry;
use crate::domain::model::{Course, CreditProvider};
use crate::utils::error::Result;
use std::path::Path;

pub fn course_from_json_str(content: &str) -> Result<Course> {
    let course: Course = serde_json::from_str(content)?;
    tracing::debug!("Parsed course {} with {} seats", course.id, course.seats.len());
    Ok(course)
}

pub fn load_course<P: AsRef<Path>>(path: P) -> Result<Course> {
    let content = std::fs::read_to_string(path)?;
    course_from_json_str(&content)
}

pub fn providers_from_json_str(content: &str) -> Result<ProviderRegistry> {
    let providers: Vec<CreditProvider> = serde_json::from_str(content)?;
    tracing::debug!("Parsed {} credit providers", providers.len());
    Ok(ProviderRegistry::from_providers(providers))
}

pub fn load_providers<P: AsRef<Path>>(path: P) -> Result<ProviderRegistry> {
    let content = std::fs::read_to_string(path)?;
    providers_from_json_str(&content)
}
