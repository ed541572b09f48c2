//! Event-effect composition.
//!
//! Joins impact links to their parent events, quantifies each link's
//! magnitude/direction/lag, ramps the effect in over three years, and
//! aggregates all contributions per year for one target indicator.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use forecast_spi::{link_effect, EffectModel, RAMP_WEIGHTS};
use records_core::RecordTable;
use tracing::debug;

/// Three-year linear onset ramp, weights `[0.3, 0.65, 1.0]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RampEffectModel;

impl EffectModel for RampEffectModel {
    fn name(&self) -> &str {
        "three-year-ramp"
    }

    fn contributions(&self, start_year: i32, effect: f64) -> Vec<(i32, f64)> {
        RAMP_WEIGHTS
            .iter()
            .enumerate()
            .map(|(offset, weight)| (start_year + offset as i32, effect * weight))
            .collect()
    }
}

/// Aggregate additive event effects per year for one indicator, using the
/// standard three-year ramp.
///
/// Links with a missing parent event, a different `related_indicator`, or an
/// unresolvable event date contribute nothing; years without a contribution
/// are absent from the mapping and read as zero downstream.
pub fn build_event_effects(table: &RecordTable, target_code: &str) -> BTreeMap<i32, f64> {
    build_event_effects_with(table, target_code, &RampEffectModel)
}

/// `build_event_effects` with a caller-supplied effect model.
pub fn build_event_effects_with(
    table: &RecordTable,
    target_code: &str,
    model: &dyn EffectModel,
) -> BTreeMap<i32, f64> {
    let events_by_id = table.events_by_id();

    // Flat per-link contributions first, grouped and summed afterwards, so
    // each link can be computed and tested in isolation.
    let mut contributions: Vec<(i32, f64)> = Vec::new();
    for link in table.impact_links() {
        if link.related_indicator.as_deref() != Some(target_code) {
            continue;
        }

        let parent = match link.parent_id.as_deref().and_then(|id| events_by_id.get(id)) {
            Some(parent) => parent,
            None => {
                debug!(link = %link.record_id, "impact link has no parent event");
                continue;
            }
        };
        let event_date = match parent.observation_date {
            Some(date) => date,
            None => continue,
        };

        let effect = link_effect(
            link.impact_magnitude.as_deref(),
            link.impact_direction.as_deref(),
        );
        let lag_months = link
            .lag_months
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        let start_year = shift_months(event_date, lag_months.trunc() as i64).year();
        contributions.extend(model.contributions(start_year, effect));
    }

    let mut effects = BTreeMap::new();
    for (year, contribution) in contributions {
        *effects.entry(year).or_insert(0.0) += contribution;
    }
    effects
}

/// Shift a date by whole months, in either direction. Saturates to the
/// original date on calendar overflow.
fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let magnitude = Months::new(months.unsigned_abs().min(u32::MAX as u64) as u32);
    let shifted = if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_spi::{Record, RecordType};

    fn event(id: &str, year: i32, month: u32) -> Record {
        let mut rec = Record::new(id, RecordType::Event);
        rec.observation_date = NaiveDate::from_ymd_opt(year, month, 1);
        rec.indicator = Some("policy change".to_string());
        rec
    }

    fn link(id: &str, parent: &str, code: &str, magnitude: &str, direction: &str, lag: &str) -> Record {
        let mut rec = Record::new(id, RecordType::ImpactLink);
        rec.parent_id = Some(parent.to_string());
        rec.related_indicator = Some(code.to_string());
        rec.impact_magnitude = Some(magnitude.to_string());
        rec.impact_direction = Some(direction.to_string());
        if !lag.is_empty() {
            rec.lag_months = Some(lag.to_string());
        }
        rec
    }

    #[test]
    fn test_single_link_ramp() {
        // Event 2020-01, lag 12 months -> start 2021, high/increase = +0.15
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "X", "high", "increase", "12"),
        ]);
        let effects = build_event_effects(&table, "X");

        assert_eq!(effects.len(), 3);
        assert!((effects[&2021] - 0.045).abs() < 1e-9);
        assert!((effects[&2022] - 0.0975).abs() < 1e-9);
        assert!((effects[&2023] - 0.15).abs() < 1e-9);
        assert!(!effects.contains_key(&2020));
        assert!(!effects.contains_key(&2024));
    }

    #[test]
    fn test_no_qualifying_links_is_empty() {
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "OTHER_CODE", "high", "increase", "0"),
        ]);
        assert!(build_event_effects(&table, "X").is_empty());
    }

    #[test]
    fn test_missing_parent_is_skipped() {
        let table = RecordTable::new(vec![link("l1", "ghost", "X", "high", "increase", "0")]);
        assert!(build_event_effects(&table, "X").is_empty());
    }

    #[test]
    fn test_undated_event_is_skipped() {
        let mut ev = event("ev1", 2020, 1);
        ev.observation_date = None;
        let table = RecordTable::new(vec![ev, link("l1", "ev1", "X", "high", "increase", "0")]);
        assert!(build_event_effects(&table, "X").is_empty());
    }

    #[test]
    fn test_unknown_magnitude_yields_zero_effect() {
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "X", "enormous", "increase", "0"),
        ]);
        let effects = build_event_effects(&table, "X");
        for value in effects.values() {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_unparseable_lag_defaults_to_zero() {
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "X", "low", "increase", "soon"),
        ]);
        let effects = build_event_effects(&table, "X");
        // Lag 0 -> ramp starts in the event year
        assert!((effects[&2020] - 0.03 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_missing_lag_defaults_to_zero() {
        let table = RecordTable::new(vec![
            event("ev1", 2021, 6),
            link("l1", "ev1", "X", "medium", "decrease", ""),
        ]);
        let effects = build_event_effects(&table, "X");
        assert!((effects[&2021] - (-0.08 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_lag_crossing_year_boundary() {
        // Event 2020-11 with a 3-month lag lands in 2021
        let table = RecordTable::new(vec![
            event("ev1", 2020, 11),
            link("l1", "ev1", "X", "high", "increase", "3"),
        ]);
        let effects = build_event_effects(&table, "X");
        assert!(effects.contains_key(&2021));
        assert!(!effects.contains_key(&2020));
    }

    #[test]
    fn test_overlapping_ramps_sum() {
        // Two identical events one year apart; their ramps overlap
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            event("ev2", 2021, 1),
            link("l1", "ev1", "X", "low", "increase", "0"),
            link("l2", "ev2", "X", "low", "increase", "0"),
        ]);
        let effects = build_event_effects(&table, "X");
        // 2021 gets 0.65 ramp of the first plus 0.3 ramp of the second
        assert!((effects[&2021] - 0.03 * (0.65 + 0.3)).abs() < 1e-9);
        assert_eq!(effects.len(), 4); // 2020..=2023
    }

    #[test]
    fn test_negative_lag_shifts_backward() {
        let table = RecordTable::new(vec![
            event("ev1", 2021, 6),
            link("l1", "ev1", "X", "high", "increase", "-12"),
        ]);
        let effects = build_event_effects(&table, "X");
        assert!(effects.contains_key(&2020));
        assert!(!effects.contains_key(&2024));
    }

    #[test]
    fn test_fractional_lag_truncates_toward_zero() {
        // 11.9 months truncates to 11, keeping 2020-01 + 11mo inside 2020
        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "X", "high", "increase", "11.9"),
        ]);
        let effects = build_event_effects(&table, "X");
        assert!(effects.contains_key(&2020));
    }

    #[test]
    fn test_custom_effect_model() {
        // A step model applies the full effect in the start year only
        struct StepModel;
        impl EffectModel for StepModel {
            fn name(&self) -> &str {
                "step"
            }
            fn contributions(&self, start_year: i32, effect: f64) -> Vec<(i32, f64)> {
                vec![(start_year, effect)]
            }
        }

        let table = RecordTable::new(vec![
            event("ev1", 2020, 1),
            link("l1", "ev1", "X", "high", "increase", "12"),
        ]);
        let effects = build_event_effects_with(&table, "X", &StepModel);
        assert_eq!(effects.len(), 1);
        assert!((effects[&2021] - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_model_contributions() {
        let model = RampEffectModel;
        assert_eq!(model.name(), "three-year-ramp");
        let contributions = model.contributions(2021, 0.15);
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[0], (2021, 0.045));
        assert_eq!(contributions[2], (2023, 0.15));
    }
}
