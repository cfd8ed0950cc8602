//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the platform
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{RulesError, RulesResult};
use crate::models::{DayType, ShiftType};

use super::types::{
    BankHolidayConfig, DocumentTypeEntry, DocumentTypesConfig, PlatformMetadata, RateCard,
    RateCardsConfig, RoleInfo, RolesConfig, ShiftPolicy, StaffingConfig,
};

/// Loads and provides access to the platform configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query roles, rate cards, the document-type catalog,
/// the bank-holiday calendar, and the shift policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/staffing/
/// ├── platform.yaml        # Platform metadata
/// ├── roles.yaml           # Staff role catalog
/// ├── document_types.yaml  # Compliance document-type catalog
/// ├── rate_cards.yaml      # Base rates and multipliers
/// ├── bank_holidays.yaml   # Recognised bank holidays
/// └── policy.yaml          # Shift policy values
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_rules::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/staffing").unwrap();
///
/// let role = loader.get_role("registered_nurse").unwrap();
/// println!("Role: {}", role.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StaffingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/staffing")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The shift policy contains unusable values
    pub fn load<P: AsRef<Path>>(path: P) -> RulesResult<Self> {
        let path = path.as_ref();

        let platform = Self::load_yaml::<PlatformMetadata>(&path.join("platform.yaml"))?;
        let roles_config = Self::load_yaml::<RolesConfig>(&path.join("roles.yaml"))?;
        let document_types_config =
            Self::load_yaml::<DocumentTypesConfig>(&path.join("document_types.yaml"))?;
        let rate_cards_config = Self::load_yaml::<RateCardsConfig>(&path.join("rate_cards.yaml"))?;
        let bank_holiday_config =
            Self::load_yaml::<BankHolidayConfig>(&path.join("bank_holidays.yaml"))?;
        let policy = Self::load_yaml::<ShiftPolicy>(&path.join("policy.yaml"))?;

        policy.validate()?;

        let config = StaffingConfig::new(
            platform,
            roles_config.roles,
            document_types_config.document_types,
            rate_cards_config.rate_cards,
            bank_holiday_config.bank_holidays,
            policy,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RulesResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RulesError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RulesError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying platform configuration.
    pub fn config(&self) -> &StaffingConfig {
        &self.config
    }

    /// Returns the platform metadata.
    pub fn platform(&self) -> &PlatformMetadata {
        self.config.platform()
    }

    /// Gets a staff role by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The role code (e.g. "registered_nurse")
    ///
    /// # Returns
    ///
    /// Returns the role if found, or a `RoleNotFound` error.
    pub fn get_role(&self, code: &str) -> RulesResult<&RoleInfo> {
        self.config
            .roles()
            .get(code)
            .ok_or_else(|| RulesError::RoleNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the document-type catalog in display order.
    pub fn document_types(&self) -> &[DocumentTypeEntry] {
        self.config.document_types()
    }

    /// Returns the shift policy.
    pub fn policy(&self) -> &ShiftPolicy {
        self.config.policy()
    }

    /// Finds the active rate card for a (role, day type, shift type)
    /// combination. A miss returns `None`; it is not an error.
    pub fn find_rate_card(
        &self,
        role: &str,
        day_type: DayType,
        shift_type: ShiftType,
    ) -> Option<&RateCard> {
        self.config.find_rate_card(role, day_type, shift_type)
    }

    /// Returns true if the date is a recognised bank holiday.
    pub fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.config.is_bank_holiday(date)
    }
}
