//! Rate multiplier determination.
//!
//! Decides which surcharge conditions a shift attracts. The four conditions
//! are evaluated independently and in a fixed order — overtime, night,
//! weekend, bank holiday — so the applied list is stable for auditing and
//! the final rate is the base rate times the product of every entry.

use rust_decimal::Decimal;

use crate::config::RateCard;
use crate::models::{AppliedMultiplier, DayType, MultiplierKind, ShiftType};

/// Determines the multipliers that apply to a shift, in evaluation order.
///
/// Conditions are independent; zero, one, or several may hold:
/// - overtime: the duration runs beyond `standard_shift_hours`
/// - night: the shift starts in the night window
/// - weekend: the shift date is a Saturday or Sunday
/// - bank holiday: the shift date is on the recognised calendar
///
/// Each entry carries the multiplier value taken from the rate card, so a
/// consumer can show how the final rate was built up.
///
/// # Examples
///
/// ```
/// use staffing_rules::config::RateCard;
/// use staffing_rules::models::{DayType, MultiplierKind, ShiftType};
/// use staffing_rules::rules::applicable_multipliers;
/// use rust_decimal::Decimal;
///
/// let card: RateCard = serde_yaml::from_str(r#"
/// role: healthcare_assistant
/// day_type: weekend
/// shift_type: night
/// internal_hourly_rate: 16.00
/// external_hourly_rate: 21.50
/// overtime_multiplier: 1.5
/// night_shift_multiplier: 1.2
/// weekend_multiplier: 1.3
/// bank_holiday_multiplier: 2.0
/// "#).unwrap();
///
/// let applied = applicable_multipliers(
///     &card,
///     Decimal::from(10),
///     Decimal::from(8),
///     ShiftType::Night,
///     DayType::Weekend,
///     false,
/// );
///
/// let kinds: Vec<MultiplierKind> = applied.iter().map(|a| a.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         MultiplierKind::Overtime,
///         MultiplierKind::NightShift,
///         MultiplierKind::Weekend,
///     ]
/// );
/// ```
pub fn applicable_multipliers(
    card: &RateCard,
    duration_hours: Decimal,
    standard_shift_hours: Decimal,
    shift_type: ShiftType,
    day_type: DayType,
    bank_holiday: bool,
) -> Vec<AppliedMultiplier> {
    let mut applied = Vec::new();

    if duration_hours > standard_shift_hours {
        applied.push(AppliedMultiplier {
            kind: MultiplierKind::Overtime,
            multiplier: card.overtime_multiplier,
        });
    }
    if shift_type == ShiftType::Night {
        applied.push(AppliedMultiplier {
            kind: MultiplierKind::NightShift,
            multiplier: card.night_shift_multiplier,
        });
    }
    if day_type == DayType::Weekend {
        applied.push(AppliedMultiplier {
            kind: MultiplierKind::Weekend,
            multiplier: card.weekend_multiplier,
        });
    }
    if bank_holiday {
        applied.push(AppliedMultiplier {
            kind: MultiplierKind::BankHoliday,
            multiplier: card.bank_holiday_multiplier,
        });
    }

    applied
}
