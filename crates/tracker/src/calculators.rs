//! Closed-form strength and body-composition calculators.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("Unknown sex: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageOfMax {
    pub percent: u8,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMax {
    pub one_rep_max: f64,
    pub percentages: Vec<PercentageOfMax>,
}

const TRAINING_PERCENTAGES: [u8; 6] = [95, 90, 85, 80, 75, 70];

/// Brzycki estimate `weight × 36 / (37 − reps)`.
///
/// Returns `None` unless `weight > 0` and `1 <= reps < 37`.
pub fn one_rep_max(weight: f64, reps: u32) -> Option<OneRepMax> {
    if !(weight.is_finite() && weight > 0.0) || reps == 0 || reps >= 37 {
        return None;
    }

    let estimate = weight * (36.0 / (37.0 - f64::from(reps)));
    let one_rep_max = round1(estimate);
    let percentages = TRAINING_PERCENTAGES
        .iter()
        .map(|&percent| PercentageOfMax {
            percent,
            weight: round1(one_rep_max * f64::from(percent) / 100.0),
        })
        .collect();

    Some(OneRepMax {
        one_rep_max,
        percentages,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
    Athlete,
}

impl ActivityLevel {
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "1.2" => Ok(ActivityLevel::Sedentary),
            "light" | "1.375" => Ok(ActivityLevel::Light),
            "moderate" | "1.55" => Ok(ActivityLevel::Moderate),
            "high" | "1.725" => Ok(ActivityLevel::High),
            "athlete" | "1.9" => Ok(ActivityLevel::Athlete),
            other => Err(format!("Unknown activity level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyExpenditure {
    pub bmr: i64,
    pub tdee: i64,
}

/// Mifflin–St Jeor BMR and the activity-scaled TDEE, both rounded to whole kcal.
pub fn energy_expenditure(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity: ActivityLevel,
) -> Option<EnergyExpenditure> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(weight_kg) || !positive(height_cm) || age_years == 0 {
        return None;
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    let bmr = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };

    Some(EnergyExpenditure {
        bmr: bmr.round() as i64,
        tdee: (bmr * activity.factor()).round() as i64,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateCount {
    pub weight: Decimal,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateLoadout {
    pub per_side: Decimal,
    pub plates: Vec<PlateCount>,
    /// Weight per side that no available plate combination covers.
    pub remainder: Decimal,
}

pub fn available_plates() -> [Decimal; 7] {
    [
        Decimal::new(25, 0),
        Decimal::new(20, 0),
        Decimal::new(15, 0),
        Decimal::new(10, 0),
        Decimal::new(5, 0),
        Decimal::new(25, 1),
        Decimal::new(125, 2),
    ]
}

/// Greedy per-side plate breakdown for loading `target` on a bar of `bar`.
pub fn plate_loadout(target: Decimal, bar: Decimal) -> Option<PlateLoadout> {
    if target <= Decimal::ZERO || bar <= Decimal::ZERO || target < bar {
        return None;
    }

    let per_side = (target - bar) / Decimal::TWO;
    let mut remaining = per_side;
    let mut plates = Vec::new();

    for plate in available_plates() {
        let count = (remaining / plate).floor();
        if count > Decimal::ZERO {
            remaining -= plate * count;
            plates.push(PlateCount {
                weight: plate,
                count: count.to_u32().unwrap_or(u32::MAX),
            });
        }
    }

    Some(PlateLoadout {
        per_side: per_side.normalize(),
        plates,
        remainder: remaining.normalize(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeight {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub average: f64,
}

/// Devine, Robinson and Miller ideal body weight in kg for a height in cm.
pub fn ideal_weight(height_cm: f64, sex: Sex) -> Option<IdealWeight> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return None;
    }

    let over_five_feet = height_cm / 2.54 - 60.0;
    let (devine, robinson, miller) = match sex {
        Sex::Male => (
            50.0 + 2.3 * over_five_feet,
            52.0 + 1.9 * over_five_feet,
            56.2 + 1.41 * over_five_feet,
        ),
        Sex::Female => (
            45.5 + 2.3 * over_five_feet,
            49.0 + 1.7 * over_five_feet,
            53.1 + 1.36 * over_five_feet,
        ),
    };

    let (devine, robinson, miller) = (round1(devine), round1(robinson), round1(miller));
    Some(IdealWeight {
        devine,
        robinson,
        miller,
        average: round1((devine + robinson + miller) / 3.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_one_rep_max_brzycki() {
        let result = one_rep_max(100.0, 5).unwrap();
        // 100 * 36 / 32 = 112.5
        assert_eq!(result.one_rep_max, 112.5);
        assert_eq!(result.percentages.len(), 6);
        assert_eq!(result.percentages[0], PercentageOfMax { percent: 95, weight: 106.9 });
        assert_eq!(result.percentages[5], PercentageOfMax { percent: 70, weight: 78.8 });
    }

    #[test]
    fn test_one_rep_max_single_rep_is_identity() {
        assert_eq!(one_rep_max(140.0, 1).unwrap().one_rep_max, 140.0);
    }

    #[test]
    fn test_one_rep_max_rejects_invalid_input() {
        assert!(one_rep_max(0.0, 5).is_none());
        assert!(one_rep_max(100.0, 0).is_none());
        assert!(one_rep_max(100.0, 37).is_none());
    }

    #[test]
    fn test_energy_expenditure() {
        let male = energy_expenditure(75.0, 180.0, 25, Sex::Male, ActivityLevel::Moderate).unwrap();
        // 750 + 1125 - 125 + 5
        assert_eq!(male.bmr, 1755);
        assert_eq!(male.tdee, 2720);

        let female =
            energy_expenditure(60.0, 165.0, 30, Sex::Female, ActivityLevel::Sedentary).unwrap();
        // 600 + 1031.25 - 150 - 161 = 1320.25
        assert_eq!(female.bmr, 1320);
        assert_eq!(female.tdee, 1584);

        assert!(energy_expenditure(75.0, 180.0, 0, Sex::Male, ActivityLevel::High).is_none());
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!("1.55".parse::<ActivityLevel>(), Ok(ActivityLevel::Moderate));
        assert_eq!("Athlete".parse::<ActivityLevel>(), Ok(ActivityLevel::Athlete));
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_plate_loadout() {
        let loadout = plate_loadout(dec("100"), dec("20")).unwrap();
        assert_eq!(loadout.per_side, dec("40"));
        assert_eq!(
            loadout.plates,
            vec![
                PlateCount { weight: dec("25"), count: 1 },
                PlateCount { weight: dec("15"), count: 1 },
            ]
        );
        assert_eq!(loadout.remainder, Decimal::ZERO);
    }

    #[test]
    fn test_plate_loadout_small_plates_and_remainder() {
        let loadout = plate_loadout(dec("63.5"), dec("20")).unwrap();
        // 21.75 per side: 20 + 1.25, 0.5 left over
        assert_eq!(loadout.per_side, dec("21.75"));
        assert_eq!(
            loadout.plates,
            vec![
                PlateCount { weight: dec("20"), count: 1 },
                PlateCount { weight: dec("1.25"), count: 1 },
            ]
        );
        assert_eq!(loadout.remainder, dec("0.5"));
    }

    #[test]
    fn test_plate_loadout_rejects_light_target() {
        assert!(plate_loadout(dec("15"), dec("20")).is_none());
        assert!(plate_loadout(dec("100"), Decimal::ZERO).is_none());
        assert!(plate_loadout(dec("20"), dec("20")).unwrap().plates.is_empty());
    }

    #[test]
    fn test_ideal_weight_male() {
        let result = ideal_weight(180.0, Sex::Male).unwrap();
        // 180 / 2.54 - 60 = 10.8661...
        assert_eq!(result.devine, 75.0);
        assert_eq!(result.robinson, 72.6);
        assert_eq!(result.miller, 71.5);
        assert_eq!(result.average, 73.0);
    }

    #[test]
    fn test_ideal_weight_rejects_zero_height() {
        assert!(ideal_weight(0.0, Sex::Female).is_none());
    }
}
