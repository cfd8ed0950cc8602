//! Rate preview models.
//!
//! A rate preview is computed fresh on every form change and never stored.
//! It either carries fully priced figures or an explicit pricing-unavailable
//! marker when no active rate card matches the resolved shift context; a
//! missing card must never surface as a silent zero rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The day classification used for rate-card lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// The shift classification used for rate-card lookup, resolved from the
/// start time against the configured night window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Starts outside the night window.
    Day,
    /// Starts inside the night window.
    Night,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Day => write!(f, "day"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// The surcharge conditions a shift can attract, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierKind {
    /// Part of the shift runs beyond the standard shift length.
    Overtime,
    /// The shift sits in the night window.
    NightShift,
    /// The shift falls on a Saturday or Sunday.
    Weekend,
    /// The shift falls on a recognised bank holiday.
    BankHoliday,
}

impl std::fmt::Display for MultiplierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiplierKind::Overtime => write!(f, "Overtime"),
            MultiplierKind::NightShift => write!(f, "Night shift"),
            MultiplierKind::Weekend => write!(f, "Weekend"),
            MultiplierKind::BankHoliday => write!(f, "Bank holiday"),
        }
    }
}

/// A single condition that contributed to the final rate, carrying its own
/// multiplier value for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMultiplier {
    /// The condition that applied.
    pub kind: MultiplierKind,
    /// The multiplier taken from the rate card for this condition.
    pub multiplier: Decimal,
}

/// A fully priced rate preview.
///
/// # Example
///
/// ```
/// use staffing_rules::models::RatePreview;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let preview = RatePreview {
///     base_internal_rate: Decimal::from_str("14.50").unwrap(),
///     base_external_rate: Decimal::from_str("19.75").unwrap(),
///     applied_multipliers: vec![],
///     final_internal_rate: Decimal::from_str("14.50").unwrap(),
///     final_external_rate: Decimal::from_str("19.75").unwrap(),
///     duration_hours: Decimal::from_str("8").unwrap(),
///     total_internal_cost: Decimal::from_str("116.00").unwrap(),
///     total_external_cost: Decimal::from_str("158.00").unwrap(),
///     shift_context: vec!["Weekday day shift".to_string()],
/// };
/// assert!(preview.applied_multipliers.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePreview {
    /// The hourly rate paid to staff before multipliers.
    pub base_internal_rate: Decimal,
    /// The hourly rate charged to the client before multipliers.
    pub base_external_rate: Decimal,
    /// Every condition that contributed, in evaluation order.
    pub applied_multipliers: Vec<AppliedMultiplier>,
    /// The hourly rate paid to staff after multipliers.
    pub final_internal_rate: Decimal,
    /// The hourly rate charged to the client after multipliers.
    pub final_external_rate: Decimal,
    /// The shift duration in hours.
    pub duration_hours: Decimal,
    /// Total paid to staff for the shift.
    pub total_internal_cost: Decimal,
    /// Total charged to the client for the shift.
    pub total_external_cost: Decimal,
    /// Human-readable list of the conditions that applied.
    pub shift_context: Vec<String>,
}

/// The resolved context of a preview that could not be priced because no
/// active rate card matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingUnavailable {
    /// The requested staff role.
    pub role: String,
    /// The resolved day classification.
    pub day_type: DayType,
    /// The resolved shift classification.
    pub shift_type: ShiftType,
    /// Human-readable context, including the pricing-unavailable note.
    pub shift_context: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DayType::Weekday).unwrap(),
            "\"weekday\""
        );
        assert_eq!(
            serde_json::to_string(&DayType::Weekend).unwrap(),
            "\"weekend\""
        );
    }

    #[test]
    fn test_shift_type_display() {
        assert_eq!(format!("{}", ShiftType::Day), "day");
        assert_eq!(format!("{}", ShiftType::Night), "night");
    }

    #[test]
    fn test_multiplier_kind_display() {
        assert_eq!(format!("{}", MultiplierKind::Overtime), "Overtime");
        assert_eq!(format!("{}", MultiplierKind::NightShift), "Night shift");
        assert_eq!(format!("{}", MultiplierKind::Weekend), "Weekend");
        assert_eq!(format!("{}", MultiplierKind::BankHoliday), "Bank holiday");
    }

    #[test]
    fn test_applied_multiplier_serialization() {
        let applied = AppliedMultiplier {
            kind: MultiplierKind::BankHoliday,
            multiplier: dec("2.0"),
        };

        let json = serde_json::to_string(&applied).unwrap();
        assert!(json.contains("\"kind\":\"bank_holiday\""));
        assert!(json.contains("\"multiplier\":\"2.0\""));
    }

    #[test]
    fn test_rate_preview_round_trip() {
        let preview = RatePreview {
            base_internal_rate: dec("14.50"),
            base_external_rate: dec("19.75"),
            applied_multipliers: vec![AppliedMultiplier {
                kind: MultiplierKind::Weekend,
                multiplier: dec("1.3"),
            }],
            final_internal_rate: dec("18.85"),
            final_external_rate: dec("25.68"),
            duration_hours: dec("8"),
            total_internal_cost: dec("150.80"),
            total_external_cost: dec("205.44"),
            shift_context: vec![
                "Weekend day shift".to_string(),
                "Weekend rates apply".to_string(),
            ],
        };

        let json = serde_json::to_string(&preview).unwrap();
        let deserialized: RatePreview = serde_json::from_str(&json).unwrap();
        assert_eq!(preview, deserialized);
    }

    #[test]
    fn test_pricing_unavailable_serialization() {
        let unavailable = PricingUnavailable {
            role: "general_practitioner".to_string(),
            day_type: DayType::Weekend,
            shift_type: ShiftType::Night,
            shift_context: vec!["Pricing unavailable".to_string()],
        };

        let json = serde_json::to_string(&unavailable).unwrap();
        assert!(json.contains("\"day_type\":\"weekend\""));
        assert!(json.contains("\"shift_type\":\"night\""));
    }
}
