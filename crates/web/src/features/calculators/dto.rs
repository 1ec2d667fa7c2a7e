use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracker::calculators::{
    ActivityLevel, EnergyExpenditure, IdealWeight, OneRepMax, PlateCount, PlateLoadout, Sex,
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OneRepMaxRequest {
    /// Weight lifted, kg
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[validate(range(min = 1, max = 36, message = "Reps must be between 1 and 36"))]
    pub reps: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PercentageOfMaxResponse {
    pub percent: u8,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxResponse {
    pub one_rep_max: f64,
    pub percentages: Vec<PercentageOfMaxResponse>,
}

impl From<OneRepMax> for OneRepMaxResponse {
    fn from(result: OneRepMax) -> Self {
        Self {
            one_rep_max: result.one_rep_max,
            percentages: result
                .percentages
                .into_iter()
                .map(|p| PercentageOfMaxResponse {
                    percent: p.percent,
                    weight: p.weight,
                })
                .collect(),
        }
    }
}

fn default_activity() -> ActivityLevel {
    ActivityLevel::Moderate
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BmrRequest {
    /// Body weight, kg
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    /// Height, cm
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: u32,

    #[schema(value_type = String, example = "male")]
    pub sex: Sex,

    /// sedentary, light, moderate, high or athlete
    #[serde(default = "default_activity")]
    #[schema(value_type = String, example = "moderate")]
    pub activity: ActivityLevel,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct BmrResponse {
    pub bmr: i64,
    pub tdee: i64,
}

impl From<EnergyExpenditure> for BmrResponse {
    fn from(result: EnergyExpenditure) -> Self {
        Self {
            bmr: result.bmr,
            tdee: result.tdee,
        }
    }
}

fn default_bar() -> Decimal {
    Decimal::from(20)
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlatesRequest {
    /// Total weight to load, kg
    pub target: Decimal,

    #[serde(default = "default_bar")]
    pub bar: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlateCountResponse {
    pub weight: Decimal,
    pub count: u32,
}

impl From<PlateCount> for PlateCountResponse {
    fn from(plate: PlateCount) -> Self {
        Self {
            weight: plate.weight,
            count: plate.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatesResponse {
    pub per_side: Decimal,
    pub plates: Vec<PlateCountResponse>,
    pub remainder: Decimal,
}

impl From<PlateLoadout> for PlatesResponse {
    fn from(loadout: PlateLoadout) -> Self {
        Self {
            per_side: loadout.per_side,
            plates: loadout.plates.into_iter().map(PlateCountResponse::from).collect(),
            remainder: loadout.remainder,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct IdealWeightRequest {
    /// Height, cm
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[schema(value_type = String, example = "female")]
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct IdealWeightResponse {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub average: f64,
}

impl From<IdealWeight> for IdealWeightResponse {
    fn from(result: IdealWeight) -> Self {
        Self {
            devine: result.devine,
            robinson: result.robinson,
            miller: result.miller,
            average: result.average,
        }
    }
}
