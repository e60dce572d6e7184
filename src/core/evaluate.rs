use super::{Band, BmiResult};
use crate::errors::EvaluationError;

/// Compute BMI from a weight and a normalized height, then classify it.
///
/// Inputs are expected to be pre-validated positives; the checks here are the
/// backstop that keeps a zero height from turning into an infinite or NaN
/// result. There is no partial success: either a well-formed [`BmiResult`]
/// comes back or an [`EvaluationError`] does.
pub fn evaluate(weight_kg: f64, height_meters: f64) -> Result<BmiResult, EvaluationError> {
    if !weight_kg.is_finite() || !height_meters.is_finite() {
        return Err(EvaluationError::NonFiniteInput {
            weight_kg,
            height_meters,
        });
    }
    if weight_kg <= 0.0 {
        return Err(EvaluationError::NonPositiveWeight(weight_kg));
    }
    if height_meters <= 0.0 {
        return Err(EvaluationError::NonPositiveHeight(height_meters));
    }

    let value = weight_kg / (height_meters * height_meters);
    let band = classify(value);

    Ok(BmiResult {
        value,
        band,
        severity: band.severity(),
    })
}

/// Map a BMI value onto its band.
///
/// Ranges are checked in ascending order, first match wins, and each range is
/// closed on its lower bound (a value of exactly 16 is Underweight, exactly
/// 30 is Extremely Overweight). Total over positive finite values;
/// [`evaluate`] screens out everything else.
pub fn classify(value: f64) -> Band {
    match value {
        v if v < 16.0 => Band::ExtremeUnderweight,
        v if v < 18.5 => Band::Underweight,
        v if v < 25.0 => Band::Healthy,
        v if v < 30.0 => Band::Overweight,
        _ => Band::ExtremeOverweight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize, HeightUnit, Severity};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_matches_formula() {
        let result = evaluate(70.0, 1.75).unwrap();
        assert!((result.value - 70.0 / (1.75 * 1.75)).abs() < 1e-12);
    }

    #[test]
    fn test_healthy_example_from_centimeters() {
        // 70 kg at 175 cm comes out at 22.86 and lands in the healthy range.
        let height = normalize(175.0, HeightUnit::Centimeters);
        let result = evaluate(70.0, height).unwrap();
        assert!((result.value - 22.857142857142858).abs() < 1e-9);
        assert_eq!(result.band, Band::Healthy);
        assert_eq!(result.severity, Severity::Info);
    }

    #[test]
    fn test_underweight_example_from_feet() {
        // 50 kg at 6 ft normalizes to ~1.829 m and evaluates to ~14.95.
        let height = normalize(6.0, HeightUnit::Feet);
        let result = evaluate(50.0, height).unwrap();
        assert!((result.value - 14.944).abs() < 0.01);
        assert_eq!(result.band, Band::ExtremeUnderweight);
        assert_eq!(result.severity, Severity::Error);
    }

    #[test]
    fn test_lower_bounds_are_inclusive() {
        assert_eq!(classify(16.0), Band::Underweight);
        assert_eq!(classify(18.5), Band::Healthy);
        assert_eq!(classify(25.0), Band::Overweight);
        assert_eq!(classify(30.0), Band::ExtremeOverweight);
    }

    #[test]
    fn test_upper_bounds_are_exclusive() {
        assert_eq!(classify(15.999), Band::ExtremeUnderweight);
        assert_eq!(classify(18.499), Band::Underweight);
        assert_eq!(classify(24.999), Band::Healthy);
        assert_eq!(classify(29.999), Band::Overweight);
    }

    #[test]
    fn test_zero_height_is_an_error_not_infinity() {
        let err = evaluate(70.0, 0.0).unwrap_err();
        assert_eq!(err, EvaluationError::NonPositiveHeight(0.0));
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        assert_eq!(
            evaluate(-70.0, 1.75).unwrap_err(),
            EvaluationError::NonPositiveWeight(-70.0)
        );
        assert_eq!(
            evaluate(70.0, -1.75).unwrap_err(),
            EvaluationError::NonPositiveHeight(-1.75)
        );
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert!(evaluate(f64::NAN, 1.75).is_err());
        assert!(evaluate(70.0, f64::INFINITY).is_err());
    }
}
