use tracker::calculators::{energy_expenditure, ideal_weight, one_rep_max, plate_loadout};

use super::dto::{
    BmrRequest, BmrResponse, IdealWeightRequest, IdealWeightResponse, OneRepMaxRequest,
    OneRepMaxResponse, PlatesRequest, PlatesResponse,
};
use crate::error::WebError;

pub fn estimate_one_rep_max(req: &OneRepMaxRequest) -> Result<OneRepMaxResponse, WebError> {
    one_rep_max(req.weight, req.reps)
        .map(OneRepMaxResponse::from)
        .ok_or_else(|| WebError::BadRequest("Weight must be positive and reps between 1 and 36".into()))
}

pub fn estimate_bmr(req: &BmrRequest) -> Result<BmrResponse, WebError> {
    energy_expenditure(req.weight, req.height, req.age, req.sex, req.activity)
        .map(BmrResponse::from)
        .ok_or_else(|| WebError::BadRequest("Weight, height and age must be positive".into()))
}

pub fn load_plates(req: &PlatesRequest) -> Result<PlatesResponse, WebError> {
    plate_loadout(req.target, req.bar)
        .map(PlatesResponse::from)
        .ok_or_else(|| WebError::BadRequest("Target must be at least the bar weight".into()))
}

pub fn estimate_ideal_weight(req: &IdealWeightRequest) -> Result<IdealWeightResponse, WebError> {
    ideal_weight(req.height, req.sex)
        .map(IdealWeightResponse::from)
        .ok_or_else(|| WebError::BadRequest("Height must be positive".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tracker::calculators::{ActivityLevel, Sex};

    #[test]
    fn test_one_rep_max_for_single_rep_is_the_weight() {
        let result = estimate_one_rep_max(&OneRepMaxRequest {
            weight: 100.0,
            reps: 1,
        })
        .unwrap();
        assert_eq!(result.one_rep_max, 100.0);
        assert_eq!(result.percentages[0].percent, 95);
        assert_eq!(result.percentages[0].weight, 95.0);
    }

    #[test]
    fn test_bmr_rejects_zero_age() {
        let req = BmrRequest {
            weight: 80.0,
            height: 180.0,
            age: 0,
            sex: Sex::Male,
            activity: ActivityLevel::Moderate,
        };
        assert!(matches!(estimate_bmr(&req), Err(WebError::BadRequest(_))));
    }

    #[test]
    fn test_bmr_for_male() {
        let req = BmrRequest {
            weight: 80.0,
            height: 180.0,
            age: 30,
            sex: Sex::Male,
            activity: ActivityLevel::Sedentary,
        };
        let result = estimate_bmr(&req).unwrap();
        // 800 + 1125 - 150 + 5
        assert_eq!(result.bmr, 1780);
        assert_eq!(result.tdee, 2136);
    }

    #[test]
    fn test_plates_below_bar_are_rejected() {
        let req = PlatesRequest {
            target: Decimal::from(15),
            bar: Decimal::from(20),
        };
        assert!(load_plates(&req).is_err());
    }

    #[test]
    fn test_plates_for_100kg() {
        let req = PlatesRequest {
            target: Decimal::from(100),
            bar: Decimal::from(20),
        };
        let result = load_plates(&req).unwrap();
        assert_eq!(result.per_side, Decimal::from(40));
        assert_eq!(result.plates[0].weight, Decimal::from(25));
        assert_eq!(result.plates[0].count, 1);
        assert_eq!(result.remainder, Decimal::ZERO);
    }
}
