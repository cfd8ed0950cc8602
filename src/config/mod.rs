//! Configuration for the staffing rules engine.
//!
//! This module provides strongly-typed configuration structures deserialized
//! from YAML files and a [`ConfigLoader`] to read them from a configuration
//! directory.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BankHoliday, BankHolidayConfig, DocumentTypeEntry, DocumentTypesConfig, PlatformMetadata,
    RateCard, RateCardsConfig, RoleInfo, RolesConfig, ShiftPolicy, StaffingConfig,
};
