use super::HeightUnit;

const CM_PER_METER: f64 = 100.0;
// The feet divisor the conversion tables use; kept at two decimals on purpose.
const FEET_PER_METER: f64 = 3.28;

/// Convert a raw height reading into meters.
///
/// Pure and side-effect free. Callers reject non-positive heights before
/// invoking this, so no validation happens here.
pub fn normalize(height_raw: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Centimeters => height_raw / CM_PER_METER,
        HeightUnit::Meters => height_raw,
        HeightUnit::Feet => height_raw / FEET_PER_METER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_divide_by_hundred() {
        assert_eq!(normalize(175.0, HeightUnit::Centimeters), 1.75);
    }

    #[test]
    fn test_meters_pass_through() {
        assert_eq!(normalize(1.75, HeightUnit::Meters), 1.75);
    }

    #[test]
    fn test_feet_divide_by_three_point_two_eight() {
        let meters = normalize(6.0, HeightUnit::Feet);
        assert!((meters - 1.8292682926829267).abs() < 1e-12);
    }

    #[test]
    fn test_units_agree_on_the_same_height() {
        let m = normalize(1.6, HeightUnit::Meters);
        let cm = normalize(160.0, HeightUnit::Centimeters);
        let ft = normalize(3.28 * 1.6, HeightUnit::Feet);
        assert!((m - cm).abs() < 1e-12);
        assert!((m - ft).abs() < 1e-12);
    }
}
