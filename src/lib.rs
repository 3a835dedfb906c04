pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ProviderRegistry;
pub use config::toml_config::TomlConfig;
pub use crate::core::organizer::{
    filter_seats, order_seats_for_display, resolve_credit_provider_names, SeatOrganizer,
    CREDIT_CATEGORY,
};
pub use crate::core::ranking::SeatRanking;
pub use domain::model::{Course, CreditProvider, Seat, SeatPartition, SeatType};
pub use domain::ports::{CourseModel, CreditProviderLookup};
pub use utils::error::{Result, SeatError};
