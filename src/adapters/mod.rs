// Adapters layer: concrete implementations of the domain ports.

pub mod json;
pub mod registry;

pub use registry::ProviderRegistry;
