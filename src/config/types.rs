//! Configuration types for the staffing rules engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{RulesError, RulesResult};
use crate::models::{DayType, ShiftType};

/// Metadata about the platform configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformMetadata {
    /// The human-readable platform name.
    pub name: String,
    /// The version or effective date of this configuration set.
    pub version: String,
    /// The region whose bank-holiday calendar applies.
    pub region: String,
}

/// A staff role that can be requested on the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleInfo {
    /// The human-readable name of the role.
    pub name: String,
    /// A description of the role.
    pub description: String,
}

/// Roles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Map of role code to role details.
    pub roles: HashMap<String, RoleInfo>,
}

/// One entry in the compliance document-type catalog.
///
/// The catalog is static configuration, not user data; the order of entries
/// is the order the compliance surfaces display them in.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTypeEntry {
    /// The document-type key (e.g. "dbs_certificate").
    pub key: String,
    /// The human-readable label.
    pub label: String,
    /// Whether an approved document of this type is required for compliance.
    pub mandatory: bool,
}

/// Document-type catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTypesConfig {
    /// The catalog entries, in display order.
    pub document_types: Vec<DocumentTypeEntry>,
}

/// A recognised bank holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct BankHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Bank-holiday calendar file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BankHolidayConfig {
    /// The recognised holidays.
    pub bank_holidays: Vec<BankHoliday>,
}

fn default_true() -> bool {
    true
}

/// A base rate card for one (role, day type, shift type) combination.
///
/// Multipliers are surcharges and by convention are at least 1.0; which of
/// them apply to a given shift is decided by the rate multiplier engine, not
/// by the card itself.
#[derive(Debug, Clone, Deserialize)]
pub struct RateCard {
    /// The role this card prices.
    pub role: String,
    /// The day classification this card covers.
    pub day_type: DayType,
    /// The shift classification this card covers.
    pub shift_type: ShiftType,
    /// Hourly rate paid to staff.
    pub internal_hourly_rate: Decimal,
    /// Hourly rate charged to the client.
    pub external_hourly_rate: Decimal,
    /// Multiplier for hours beyond the standard shift length.
    pub overtime_multiplier: Decimal,
    /// Multiplier for night-window shifts.
    pub night_shift_multiplier: Decimal,
    /// Multiplier for weekend shifts.
    pub weekend_multiplier: Decimal,
    /// Multiplier for bank-holiday shifts.
    pub bank_holiday_multiplier: Decimal,
    /// Whether the card participates in lookup. Superseded cards stay in the
    /// file with `is_active: false`.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Rate-card catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RateCardsConfig {
    /// All rate cards, active and superseded.
    pub rate_cards: Vec<RateCard>,
}

/// Shift policy values shared by the rule components.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftPolicy {
    /// The time the night window opens (inclusive).
    pub night_window_start: NaiveTime,
    /// The time the night window closes (exclusive).
    pub night_window_end: NaiveTime,
    /// Hours beyond which a shift attracts the overtime multiplier.
    pub standard_shift_hours: Decimal,
    /// The longest shift a request may describe.
    pub max_shift_hours: Decimal,
    /// Minimum notice, in hours, for cancelling a scheduled shift.
    pub cancellation_notice_hours: i64,
    /// How many months before expiry a document counts as expiring soon.
    pub expiry_warning_months: u32,
}

impl ShiftPolicy {
    /// Checks the policy for unusable values.
    ///
    /// Called once at load time so the rule components can trust the policy
    /// without re-validating on every evaluation.
    pub fn validate(&self) -> RulesResult<()> {
        if self.max_shift_hours <= Decimal::ZERO {
            return Err(RulesError::InvalidPolicy {
                message: "max_shift_hours must be positive".to_string(),
            });
        }
        if self.standard_shift_hours <= Decimal::ZERO
            || self.standard_shift_hours > self.max_shift_hours
        {
            return Err(RulesError::InvalidPolicy {
                message: "standard_shift_hours must be positive and no more than max_shift_hours"
                    .to_string(),
            });
        }
        if self.night_window_start == self.night_window_end {
            return Err(RulesError::InvalidPolicy {
                message: "night window must not be empty".to_string(),
            });
        }
        if self.cancellation_notice_hours < 0 {
            return Err(RulesError::InvalidPolicy {
                message: "cancellation_notice_hours must not be negative".to_string(),
            });
        }
        if self.expiry_warning_months == 0 {
            return Err(RulesError::InvalidPolicy {
                message: "expiry_warning_months must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete platform configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various YAML
/// files in a configuration directory.
#[derive(Debug, Clone)]
pub struct StaffingConfig {
    /// Platform metadata.
    platform: PlatformMetadata,
    /// Staff roles available on the platform.
    roles: HashMap<String, RoleInfo>,
    /// The compliance document-type catalog, in display order.
    document_types: Vec<DocumentTypeEntry>,
    /// All rate cards.
    rate_cards: Vec<RateCard>,
    /// The recognised bank holidays.
    bank_holidays: Vec<BankHoliday>,
    /// Shift policy values.
    policy: ShiftPolicy,
}

impl StaffingConfig {
    /// Creates a new StaffingConfig from its component parts.
    pub fn new(
        platform: PlatformMetadata,
        roles: HashMap<String, RoleInfo>,
        document_types: Vec<DocumentTypeEntry>,
        rate_cards: Vec<RateCard>,
        bank_holidays: Vec<BankHoliday>,
        policy: ShiftPolicy,
    ) -> Self {
        Self {
            platform,
            roles,
            document_types,
            rate_cards,
            bank_holidays,
            policy,
        }
    }

    /// Returns the platform metadata.
    pub fn platform(&self) -> &PlatformMetadata {
        &self.platform
    }

    /// Returns all staff roles.
    pub fn roles(&self) -> &HashMap<String, RoleInfo> {
        &self.roles
    }

    /// Returns the document-type catalog in display order.
    pub fn document_types(&self) -> &[DocumentTypeEntry] {
        &self.document_types
    }

    /// Returns all rate cards, active and superseded.
    pub fn rate_cards(&self) -> &[RateCard] {
        &self.rate_cards
    }

    /// Returns the shift policy.
    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }

    /// Finds the active rate card for a (role, day type, shift type)
    /// combination.
    ///
    /// A miss is a legitimate state (pricing configuration may be
    /// incomplete), so this returns `None` rather than an error; the rate
    /// multiplier engine turns it into an explicit pricing-unavailable
    /// preview.
    pub fn find_rate_card(
        &self,
        role: &str,
        day_type: DayType,
        shift_type: ShiftType,
    ) -> Option<&RateCard> {
        self.rate_cards.iter().find(|card| {
            card.is_active
                && card.role == role
                && card.day_type == day_type
                && card.shift_type == shift_type
        })
    }

    /// Returns true if the date is a recognised bank holiday.
    pub fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.bank_holidays.iter().any(|holiday| holiday.date == date)
    }
}
