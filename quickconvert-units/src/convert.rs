//! The conversion engine
//!
//! A pure function of its four inputs: no I/O, no shared mutable state,
//! safe to call concurrently. Catalog lookups are O(1) against a small
//! fixed table.

use quickconvert_core::{Category, ConvertError};
use crate::catalog::CATALOG;
use crate::temperature::TempDirection;
use crate::Rule;

/// Convert `value` from `from_unit` to `to_unit` within `category`
///
/// Non-finite input is rejected before computing. The result is a
/// magnitude only; the caller pairs it with `to_unit` for presentation.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Category,
) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NonFiniteInput);
    }

    if category == Category::Temperature {
        return convert_temperature(value, from_unit, to_unit);
    }

    let from = CATALOG.rule_for(category, from_unit)?;
    let to = CATALOG.rule_for(category, to_unit)?;

    // Identity is exact for every unit, including reciprocal ones
    if from_unit == to_unit {
        return Ok(value);
    }

    let result = match (from, to) {
        // Single expression keeps the factor ratio in one rounding step
        (Rule::Linear(f), Rule::Linear(t)) => value * (f / t),
        _ => to.from_base(from.to_base(value)),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConvertError::NonFiniteResult)
    }
}

/// Temperature path: pairwise direction functions, no intermediate base
fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    if !CATALOG.contains(Category::Temperature, from_unit) {
        return Err(ConvertError::unknown_unit(Category::Temperature, from_unit));
    }
    if !CATALOG.contains(Category::Temperature, to_unit) {
        return Err(ConvertError::unknown_unit(Category::Temperature, to_unit));
    }

    if from_unit == to_unit {
        return Ok(value);
    }

    let direction = TempDirection::for_pair(from_unit, to_unit).ok_or_else(|| {
        ConvertError::UnknownTemperatureDirection {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        }
    })?;

    Ok(direction.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::units_of;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= 1e-9 * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_mile_to_kilometer() {
        let result = convert(1.0, "miles", "kilometers", Category::Length).unwrap();
        assert_close(result, 1.609344);
    }

    #[test]
    fn test_kilogram_to_pound() {
        let result = convert(1.0, "kilograms", "pounds", Category::Weight).unwrap();
        assert_close(result, 2.20462262184878);
    }

    #[test]
    fn test_byte_to_bit() {
        assert_eq!(convert(1.0, "byte", "bit", Category::Data).unwrap(), 8.0);
    }

    #[test]
    fn test_minutes_to_hours() {
        assert_eq!(convert(60.0, "minutes", "hours", Category::Time).unwrap(), 1.0);
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert(0.0, "celsius", "fahrenheit", Category::Temperature).unwrap(), 32.0);
        assert_eq!(convert(100.0, "celsius", "fahrenheit", Category::Temperature).unwrap(), 212.0);
        assert_eq!(convert(0.0, "celsius", "kelvin", Category::Temperature).unwrap(), 273.15);
        assert_eq!(convert(-40.0, "celsius", "fahrenheit", Category::Temperature).unwrap(), -40.0);
        assert_eq!(convert(32.0, "fahrenheit", "celsius", Category::Temperature).unwrap(), 0.0);
    }

    #[test]
    fn test_identity_is_exact_for_every_unit() {
        let v = 12.345678901;
        for category in Category::ALL {
            for unit in units_of(category) {
                assert_eq!(convert(v, unit, unit, category).unwrap(), v, "{category}/{unit}");
            }
        }
    }

    #[test]
    fn test_round_trip_all_non_temperature_pairs() {
        let values = [0.001, 1.0, 3.75, 1024.0, 98765.4321];
        for category in Category::ALL {
            if category == Category::Temperature {
                continue;
            }
            for a in units_of(category) {
                for b in units_of(category) {
                    for v in values {
                        let there = convert(v, a, b, category).unwrap();
                        let back = convert(there, b, a, category).unwrap();
                        assert!(
                            (back - v).abs() <= 1e-9 * v.abs(),
                            "{category}: {v} {a} -> {b} -> {back}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_linear_scaling() {
        let k = 7.5;
        let v = 3.2;
        for (category, a, b) in [
            (Category::Length, "feet", "inches"),
            (Category::Speed, "kilometer/hour", "mile/hour"),
            (Category::Energy, "calories", "joules"),
            (Category::Angle, "degrees", "radians"),
        ] {
            let scaled = convert(k * v, a, b, category).unwrap();
            let unscaled = convert(v, a, b, category).unwrap();
            assert!((scaled - k * unscaled).abs() <= 1e-9 * scaled.abs());
        }
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = convert(1.0, "lightyears", "meters", Category::Length).unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Length, "lightyears"));
    }

    #[test]
    fn test_cross_category_mismatch() {
        let err = convert(1.0, "grams", "meters", Category::Length).unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Length, "grams"));
    }

    #[test]
    fn test_unknown_temperature_unit() {
        let err = convert(1.0, "rankine", "celsius", Category::Temperature).unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Temperature, "rankine"));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(bad, "meters", "kilometers", Category::Length).unwrap_err();
            assert_eq!(err, ConvertError::NonFiniteInput);
        }
    }

    #[test]
    fn test_fuel_economy_reciprocal() {
        // 5 l/100km is 20 km/l
        let result = convert(5.0, "1/100km", "km/l", Category::FuelEconomy).unwrap();
        assert_close(result, 20.0);

        // 23.52 mpg is about 10 km/l, about 10 l/100km
        let kml = convert(23.521458329475324, "mpg", "km/l", Category::FuelEconomy).unwrap();
        assert_close(kml, 10.0);
        let per100 = convert(10.0, "km/l", "1/100km", Category::FuelEconomy).unwrap();
        assert_close(per100, 10.0);
    }

    #[test]
    fn test_fuel_economy_zero_is_non_finite() {
        let err = convert(0.0, "1/100km", "km/l", Category::FuelEconomy).unwrap_err();
        assert_eq!(err, ConvertError::NonFiniteResult);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_close(
            convert(180.0, "degrees", "radians", Category::Angle).unwrap(),
            std::f64::consts::PI,
        );
    }
}
