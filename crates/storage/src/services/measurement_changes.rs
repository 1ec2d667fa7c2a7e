use rust_decimal::Decimal;

use crate::dto::measurement::{FieldChange, MeasurementChangesResponse};
use crate::models::{BodyMeasurement, BodyMeasurementField};

fn measured(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Per-site change from `previous` to `current`. Sites missing or zero on
/// either side are left out.
pub fn field_changes(previous: &BodyMeasurement, current: &BodyMeasurement) -> Vec<FieldChange> {
    BodyMeasurementField::ALL
        .into_iter()
        .filter_map(|field| {
            let before = measured(field.get(previous))?;
            let after = measured(field.get(current))?;
            Some(FieldChange {
                field,
                previous: before,
                current: after,
                change: after - before,
            })
        })
        .collect()
}

/// Builds the changes report from measurements sorted newest first.
pub fn latest_changes(newest_first: &[BodyMeasurement]) -> MeasurementChangesResponse {
    match newest_first {
        [current, previous, ..] => MeasurementChangesResponse {
            previous_date: Some(previous.date),
            current_date: Some(current.date),
            changes: field_changes(previous, current),
        },
        [current] => MeasurementChangesResponse {
            previous_date: None,
            current_date: Some(current.date),
            changes: Vec::new(),
        },
        [] => MeasurementChangesResponse {
            previous_date: None,
            current_date: None,
            changes: Vec::new(),
        },
    }
}
