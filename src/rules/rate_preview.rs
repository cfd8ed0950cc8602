//! Rate preview calculation.
//!
//! Computes the inline pricing preview shown on the shift-request form.
//! The preview is recomputed on every input change, so the engine accepts a
//! partially filled form and returns `None` until every required field is
//! present and the duration is valid. A rate-card lookup miss is reported as
//! an explicit pricing-unavailable outcome; the form stays usable and
//! submission is never blocked on pricing.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::StaffingConfig;
use crate::models::{MultiplierKind, PricingUnavailable, RatePreview};

use super::day_detection::{get_day_type, get_shift_type};
use super::duration::compute_duration;
use super::multipliers::applicable_multipliers;

/// The shift-request form fields the preview is computed from. All fields
/// are optional because the form is previewed while still being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePreviewForm {
    /// The requested staff role.
    #[serde(default)]
    pub role: Option<String>,
    /// The date the shift starts.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The explicit end date, for overnight shifts that state one.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The time the shift starts.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The time the shift ends.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

/// The outcome of a rate preview calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pricing", rename_all = "snake_case")]
pub enum RatePreviewOutcome {
    /// The shift context matched an active rate card.
    Priced(RatePreview),
    /// No active rate card matched; pricing is unavailable for this
    /// context but the request itself may still be submitted.
    Unavailable(PricingUnavailable),
}

/// Calculates the rate preview for a shift-request form.
///
/// Returns `None` while the form is not yet computable: a missing role,
/// date, start time, or end time, or a duration outside the accepted range.
/// Once computable, the engine:
/// 1. Resolves the day type from the date and the shift type from the start
///    time against the policy's night window.
/// 2. Looks up the active rate card for (role, day type, shift type); a
///    miss yields [`RatePreviewOutcome::Unavailable`].
/// 3. Determines the applicable multipliers (overtime, night, weekend,
///    bank holiday) and stacks them multiplicatively onto both base rates.
/// 4. Prices the shift: final rate × duration, rounded to pence.
///
/// The calculation is deterministic: identical inputs produce identical
/// applied-multiplier order and identical totals.
///
/// # Examples
///
/// ```no_run
/// use staffing_rules::config::ConfigLoader;
/// use staffing_rules::rules::{RatePreviewForm, RatePreviewOutcome, calculate_rate_preview};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let loader = ConfigLoader::load("./config/staffing").unwrap();
/// let form = RatePreviewForm {
///     role: Some("healthcare_assistant".to_string()),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15),
///     end_date: None,
///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0),
/// };
///
/// match calculate_rate_preview(&form, loader.config()) {
///     Some(RatePreviewOutcome::Priced(preview)) => {
///         println!("Client pays £{}", preview.total_external_cost);
///     }
///     Some(RatePreviewOutcome::Unavailable(_)) => println!("Pricing unavailable"),
///     None => println!("Form incomplete"),
/// }
/// ```
pub fn calculate_rate_preview(
    form: &RatePreviewForm,
    config: &StaffingConfig,
) -> Option<RatePreviewOutcome> {
    let role = form.role.as_deref()?;
    let date = form.date?;
    let start_time = form.start_time?;
    let end_time = form.end_time?;

    let policy = config.policy();
    let duration = compute_duration(
        date,
        form.end_date,
        start_time,
        end_time,
        policy.max_shift_hours,
    );
    if !duration.is_valid {
        return None;
    }

    let day_type = get_day_type(date);
    let shift_type = get_shift_type(start_time, policy);
    let bank_holiday = config.is_bank_holiday(date);

    let mut shift_context = vec![format!("{} {} shift", day_type, shift_type)];

    let Some(card) = config.find_rate_card(role, day_type, shift_type) else {
        shift_context.push(format!(
            "Pricing unavailable: no active rate card for {} {} {} shifts",
            role,
            day_type.to_string().to_lowercase(),
            shift_type
        ));
        return Some(RatePreviewOutcome::Unavailable(PricingUnavailable {
            role: role.to_string(),
            day_type,
            shift_type,
            shift_context,
        }));
    };

    let duration_hours = duration.duration_hours();
    let applied_multipliers = applicable_multipliers(
        card,
        duration_hours,
        policy.standard_shift_hours,
        shift_type,
        day_type,
        bank_holiday,
    );

    for applied in &applied_multipliers {
        shift_context.push(match applied.kind {
            MultiplierKind::Overtime => format!(
                "Overtime beyond {} standard hours",
                policy.standard_shift_hours.normalize()
            ),
            MultiplierKind::NightShift => "Night shift rates apply".to_string(),
            MultiplierKind::Weekend => "Weekend rates apply".to_string(),
            MultiplierKind::BankHoliday => "Bank holiday rates apply".to_string(),
        });
    }

    let combined: Decimal = applied_multipliers
        .iter()
        .fold(Decimal::ONE, |product, applied| {
            product * applied.multiplier
        });

    // Commercial rounding to pence, half away from zero.
    let to_pence =
        |amount: Decimal| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let final_internal_rate = to_pence(card.internal_hourly_rate * combined);
    let final_external_rate = to_pence(card.external_hourly_rate * combined);

    Some(RatePreviewOutcome::Priced(RatePreview {
        base_internal_rate: card.internal_hourly_rate,
        base_external_rate: card.external_hourly_rate,
        applied_multipliers,
        final_internal_rate,
        final_external_rate,
        duration_hours,
        total_internal_cost: to_pence(final_internal_rate * duration_hours),
        total_external_cost: to_pence(final_external_rate * duration_hours),
        shift_context,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BankHoliday, DocumentTypeEntry, PlatformMetadata, RateCard, RoleInfo, ShiftPolicy,
        StaffingConfig,
    };
    use crate::models::{DayType, ShiftType};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn card(role: &str, day_type: &str, shift_type: &str, internal: &str, external: &str) -> RateCard {
        serde_yaml::from_str(&format!(
            r#"
role: {role}
day_type: {day_type}
shift_type: {shift_type}
internal_hourly_rate: {internal}
external_hourly_rate: {external}
overtime_multiplier: 1.5
night_shift_multiplier: 1.2
weekend_multiplier: 1.3
bank_holiday_multiplier: 2.0
"#
        ))
        .unwrap()
    }

    fn create_test_config() -> StaffingConfig {
        let mut roles = HashMap::new();
        roles.insert(
            "healthcare_assistant".to_string(),
            RoleInfo {
                name: "Healthcare Assistant".to_string(),
                description: "Care and support worker".to_string(),
            },
        );

        StaffingConfig::new(
            PlatformMetadata {
                name: "Test Platform".to_string(),
                version: "2025-04-01".to_string(),
                region: "england_and_wales".to_string(),
            },
            roles,
            Vec::<DocumentTypeEntry>::new(),
            vec![
                card("healthcare_assistant", "weekday", "day", "14.50", "19.75"),
                card("healthcare_assistant", "weekday", "night", "16.00", "21.50"),
                card("healthcare_assistant", "weekend", "day", "15.25", "20.75"),
                card("healthcare_assistant", "weekend", "night", "16.75", "22.50"),
            ],
            vec![BankHoliday {
                date: make_date("2026-12-25"),
                name: "Christmas Day".to_string(),
            }],
            ShiftPolicy {
                night_window_start: time(20, 0),
                night_window_end: time(6, 0),
                standard_shift_hours: dec("8"),
                max_shift_hours: dec("16"),
                cancellation_notice_hours: 24,
                expiry_warning_months: 3,
            },
        )
    }

    fn form(role: &str, date: &str, start: (u32, u32), end: (u32, u32)) -> RatePreviewForm {
        RatePreviewForm {
            role: Some(role.to_string()),
            date: Some(make_date(date)),
            end_date: None,
            start_time: Some(time(start.0, start.1)),
            end_time: Some(time(end.0, end.1)),
        }
    }

    fn priced(outcome: Option<RatePreviewOutcome>) -> RatePreview {
        match outcome {
            Some(RatePreviewOutcome::Priced(preview)) => preview,
            other => panic!("Expected priced preview, got {:?}", other),
        }
    }

    /// RP-001: incomplete form yields no preview
    #[test]
    fn test_missing_inputs_yield_none() {
        let config = create_test_config();

        let mut incomplete = form("healthcare_assistant", "2026-01-15", (9, 0), (17, 0));
        incomplete.role = None;
        assert_eq!(calculate_rate_preview(&incomplete, &config), None);

        let mut incomplete = form("healthcare_assistant", "2026-01-15", (9, 0), (17, 0));
        incomplete.date = None;
        assert_eq!(calculate_rate_preview(&incomplete, &config), None);

        let mut incomplete = form("healthcare_assistant", "2026-01-15", (9, 0), (17, 0));
        incomplete.end_time = None;
        assert_eq!(calculate_rate_preview(&incomplete, &config), None);
    }

    /// RP-002: invalid duration is not yet computable
    #[test]
    fn test_invalid_duration_yields_none() {
        let config = create_test_config();

        // Equal start and end — zero duration.
        let zero = form("healthcare_assistant", "2026-01-15", (9, 0), (9, 0));
        assert_eq!(calculate_rate_preview(&zero, &config), None);
    }

    /// RP-003: plain weekday day shift has no multipliers
    #[test]
    fn test_plain_weekday_shift() {
        let config = create_test_config();

        // 2026-01-15 is a Thursday.
        let preview = priced(calculate_rate_preview(
            &form("healthcare_assistant", "2026-01-15", (9, 0), (17, 0)),
            &config,
        ));

        assert!(preview.applied_multipliers.is_empty());
        assert_eq!(preview.base_internal_rate, dec("14.50"));
        assert_eq!(preview.final_internal_rate, dec("14.50"));
        assert_eq!(preview.duration_hours, dec("8"));
        assert_eq!(preview.total_internal_cost, dec("116.00"));
        assert_eq!(preview.total_external_cost, dec("158.00"));
        assert_eq!(preview.shift_context, vec!["Weekday day shift".to_string()]);
    }

    /// RP-004: weekend day shift applies the weekend multiplier to the
    /// weekend base card
    #[test]
    fn test_weekend_day_shift() {
        let config = create_test_config();

        // 2026-01-17 is a Saturday.
        let preview = priced(calculate_rate_preview(
            &form("healthcare_assistant", "2026-01-17", (9, 0), (17, 0)),
            &config,
        ));

        assert_eq!(preview.base_internal_rate, dec("15.25"));
        assert_eq!(preview.applied_multipliers.len(), 1);
        assert_eq!(preview.applied_multipliers[0].multiplier, dec("1.3"));
        // 15.25 * 1.3 = 19.825 -> 19.83 (rounded to pence)
        assert_eq!(preview.final_internal_rate, dec("19.83"));
        assert_eq!(preview.total_internal_cost, dec("158.64"));
    }

    /// RP-005: overnight weekday night shift stacks night only
    #[test]
    fn test_weekday_night_shift() {
        let config = create_test_config();

        // Thursday 22:00 to 06:00, inferred overnight.
        let preview = priced(calculate_rate_preview(
            &form("healthcare_assistant", "2026-01-15", (22, 0), (6, 0)),
            &config,
        ));

        assert_eq!(preview.base_internal_rate, dec("16.00"));
        assert_eq!(preview.applied_multipliers.len(), 1);
        assert_eq!(
            preview.applied_multipliers[0].kind,
            MultiplierKind::NightShift
        );
        // 16.00 * 1.2 = 19.20, 8h -> 153.60
        assert_eq!(preview.final_internal_rate, dec("19.20"));
        assert_eq!(preview.total_internal_cost, dec("153.60"));
        assert!(preview
            .shift_context
            .contains(&"Night shift rates apply".to_string()));
    }

    /// RP-006: bank holiday stacks on top of a weekday card
    #[test]
    fn test_bank_holiday_weekday_shift() {
        let config = create_test_config();

        // 2026-12-25 is a Friday and a recognised bank holiday.
        let preview = priced(calculate_rate_preview(
            &form("healthcare_assistant", "2026-12-25", (9, 0), (17, 0)),
            &config,
        ));

        assert_eq!(preview.base_internal_rate, dec("14.50"));
        assert_eq!(preview.applied_multipliers.len(), 1);
        assert_eq!(
            preview.applied_multipliers[0].kind,
            MultiplierKind::BankHoliday
        );
        assert_eq!(preview.final_internal_rate, dec("29.00"));
        assert!(preview
            .shift_context
            .contains(&"Bank holiday rates apply".to_string()));
    }

    /// RP-007: multiplicative stacking of overtime and night
    #[test]
    fn test_overtime_and_night_stack_multiplicatively() {
        let config = create_test_config();

        // Thursday 20:00 to 06:00 is 10 hours: overtime + night.
        let preview = priced(calculate_rate_preview(
            &form("healthcare_assistant", "2026-01-15", (20, 0), (6, 0)),
            &config,
        ));

        let kinds: Vec<MultiplierKind> = preview
            .applied_multipliers
            .iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![MultiplierKind::Overtime, MultiplierKind::NightShift]
        );
        // 16.00 * 1.5 * 1.2 = 28.80; 10h -> 288.00
        assert_eq!(preview.final_internal_rate, dec("28.80"));
        assert_eq!(preview.total_internal_cost, dec("288.00"));
        assert!(preview
            .shift_context
            .contains(&"Overtime beyond 8 standard hours".to_string()));
    }

    /// RP-008: lookup miss is an explicit pricing-unavailable outcome
    #[test]
    fn test_lookup_miss_is_unavailable_not_zero() {
        let config = create_test_config();

        // No rate cards exist for this role at all.
        let outcome = calculate_rate_preview(
            &form("general_practitioner", "2026-01-17", (22, 0), (6, 0)),
            &config,
        );

        match outcome {
            Some(RatePreviewOutcome::Unavailable(unavailable)) => {
                assert_eq!(unavailable.role, "general_practitioner");
                assert_eq!(unavailable.day_type, DayType::Weekend);
                assert_eq!(unavailable.shift_type, ShiftType::Night);
                assert!(unavailable.shift_context.iter().any(|line| {
                    line.contains("no active rate card for general_practitioner weekend night")
                }));
            }
            other => panic!("Expected unavailable outcome, got {:?}", other),
        }
    }

    /// RP-009: determinism — identical inputs, identical outputs
    #[test]
    fn test_preview_is_deterministic() {
        let config = create_test_config();
        let input = form("healthcare_assistant", "2026-01-17", (20, 0), (8, 0));

        let first = calculate_rate_preview(&input, &config);
        let second = calculate_rate_preview(&input, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_serialization_tags_pricing() {
        let config = create_test_config();

        let priced_json = serde_json::to_string(
            &calculate_rate_preview(
                &form("healthcare_assistant", "2026-01-15", (9, 0), (17, 0)),
                &config,
            )
            .unwrap(),
        )
        .unwrap();
        assert!(priced_json.contains("\"pricing\":\"priced\""));

        let unavailable_json = serde_json::to_string(
            &calculate_rate_preview(
                &form("general_practitioner", "2026-01-15", (9, 0), (17, 0)),
                &config,
            )
            .unwrap(),
        )
        .unwrap();
        assert!(unavailable_json.contains("\"pricing\":\"unavailable\""));
    }

    #[test]
    fn test_empty_form_yields_none() {
        let config = create_test_config();
        assert_eq!(
            calculate_rate_preview(&RatePreviewForm::default(), &config),
            None
        );
    }
}
