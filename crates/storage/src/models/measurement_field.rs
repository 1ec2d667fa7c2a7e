use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BodyMeasurement;

/// One circumference site of a [`BodyMeasurement`].
///
/// Field names coming from clients (path segments, change reports) are parsed
/// into this closed set, so reads, writes and the SQL column used for a
/// single-field update can never refer to a column that does not exist.
///
/// # Examples
///
/// ```
/// use storage::models::BodyMeasurementField;
///
/// let field: BodyMeasurementField = "waist".parse().unwrap();
/// assert_eq!(field.column(), "waist");
/// assert!("height".parse::<BodyMeasurementField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BodyMeasurementField {
    Neck,
    Shoulders,
    Forearms,
    Biceps,
    Chest,
    Waist,
    Belly,
    Hips,
    Thighs,
    Calves,
}

impl BodyMeasurementField {
    /// Every field, in the order the measurement form lists them.
    pub const ALL: [BodyMeasurementField; 10] = [
        BodyMeasurementField::Neck,
        BodyMeasurementField::Shoulders,
        BodyMeasurementField::Forearms,
        BodyMeasurementField::Biceps,
        BodyMeasurementField::Chest,
        BodyMeasurementField::Waist,
        BodyMeasurementField::Belly,
        BodyMeasurementField::Hips,
        BodyMeasurementField::Thighs,
        BodyMeasurementField::Calves,
    ];

    /// Column name in `body_measurements`. Also the wire name.
    pub fn column(&self) -> &'static str {
        match self {
            BodyMeasurementField::Neck => "neck",
            BodyMeasurementField::Shoulders => "shoulders",
            BodyMeasurementField::Forearms => "forearms",
            BodyMeasurementField::Biceps => "biceps",
            BodyMeasurementField::Chest => "chest",
            BodyMeasurementField::Waist => "waist",
            BodyMeasurementField::Belly => "belly",
            BodyMeasurementField::Hips => "hips",
            BodyMeasurementField::Thighs => "thighs",
            BodyMeasurementField::Calves => "calves",
        }
    }

    pub fn get(&self, measurement: &BodyMeasurement) -> Option<Decimal> {
        match self {
            BodyMeasurementField::Neck => measurement.neck,
            BodyMeasurementField::Shoulders => measurement.shoulders,
            BodyMeasurementField::Forearms => measurement.forearms,
            BodyMeasurementField::Biceps => measurement.biceps,
            BodyMeasurementField::Chest => measurement.chest,
            BodyMeasurementField::Waist => measurement.waist,
            BodyMeasurementField::Belly => measurement.belly,
            BodyMeasurementField::Hips => measurement.hips,
            BodyMeasurementField::Thighs => measurement.thighs,
            BodyMeasurementField::Calves => measurement.calves,
        }
    }

    pub fn set(&self, measurement: &mut BodyMeasurement, value: Option<Decimal>) {
        let slot = match self {
            BodyMeasurementField::Neck => &mut measurement.neck,
            BodyMeasurementField::Shoulders => &mut measurement.shoulders,
            BodyMeasurementField::Forearms => &mut measurement.forearms,
            BodyMeasurementField::Biceps => &mut measurement.biceps,
            BodyMeasurementField::Chest => &mut measurement.chest,
            BodyMeasurementField::Waist => &mut measurement.waist,
            BodyMeasurementField::Belly => &mut measurement.belly,
            BodyMeasurementField::Hips => &mut measurement.hips,
            BodyMeasurementField::Thighs => &mut measurement.thighs,
            BodyMeasurementField::Calves => &mut measurement.calves,
        };
        *slot = value;
    }
}

impl fmt::Display for BodyMeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for BodyMeasurementField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.column() == wanted)
            .ok_or_else(|| format!("Unknown measurement field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Biceps".parse(), Ok(BodyMeasurementField::Biceps));
        assert_eq!(" calves ".parse(), Ok(BodyMeasurementField::Calves));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!("notes".parse::<BodyMeasurementField>().is_err());
        assert!("waist; DROP TABLE".parse::<BodyMeasurementField>().is_err());
    }

    #[test]
    fn test_set_then_get_touches_only_one_field() {
        let mut measurement = BodyMeasurement::default();
        BodyMeasurementField::Hips.set(&mut measurement, Some(Decimal::new(985, 1)));

        for field in BodyMeasurementField::ALL {
            let expected = (field == BodyMeasurementField::Hips).then(|| Decimal::new(985, 1));
            assert_eq!(field.get(&measurement), expected, "{}", field);
        }
    }

    #[test]
    fn test_columns_are_unique() {
        let mut columns: Vec<_> = BodyMeasurementField::ALL.iter().map(|f| f.column()).collect();
        columns.sort();
        columns.dedup();
        assert_eq!(columns.len(), BodyMeasurementField::ALL.len());
    }
}
