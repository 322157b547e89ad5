//! Pairwise temperature transforms
//!
//! Temperature does not route through a shared base factor. The catalog
//! exposes six explicit direction functions between celsius, fahrenheit
//! and kelvin, dispatched over an enumerated tag. An identity request
//! (from == to) returns the input unchanged and never reaches this table.

/// One direction in the pairwise temperature table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempDirection {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    CelsiusToKelvin,
    KelvinToCelsius,
    FahrenheitToKelvin,
    KelvinToFahrenheit,
}

impl TempDirection {
    /// Look up the direction for a non-identity (from, to) pair
    pub fn for_pair(from: &str, to: &str) -> Option<TempDirection> {
        match (from, to) {
            ("celsius", "fahrenheit") => Some(TempDirection::CelsiusToFahrenheit),
            ("fahrenheit", "celsius") => Some(TempDirection::FahrenheitToCelsius),
            ("celsius", "kelvin") => Some(TempDirection::CelsiusToKelvin),
            ("kelvin", "celsius") => Some(TempDirection::KelvinToCelsius),
            ("fahrenheit", "kelvin") => Some(TempDirection::FahrenheitToKelvin),
            ("kelvin", "fahrenheit") => Some(TempDirection::KelvinToFahrenheit),
            _ => None,
        }
    }

    /// Apply the transform to a value
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            TempDirection::CelsiusToFahrenheit => x * 9.0 / 5.0 + 32.0,
            TempDirection::FahrenheitToCelsius => (x - 32.0) * 5.0 / 9.0,
            TempDirection::CelsiusToKelvin => x + 273.15,
            TempDirection::KelvinToCelsius => x - 273.15,
            TempDirection::FahrenheitToKelvin => (x - 32.0) * 5.0 / 9.0 + 273.15,
            TempDirection::KelvinToFahrenheit => (x - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(TempDirection::CelsiusToFahrenheit.apply(0.0), 32.0);
        assert_eq!(TempDirection::CelsiusToFahrenheit.apply(100.0), 212.0);
        assert_eq!(TempDirection::CelsiusToKelvin.apply(0.0), 273.15);
        assert_eq!(TempDirection::FahrenheitToCelsius.apply(32.0), 0.0);
    }

    #[test]
    fn test_minus_forty_crossover() {
        assert_eq!(TempDirection::CelsiusToFahrenheit.apply(-40.0), -40.0);
        assert_eq!(TempDirection::FahrenheitToCelsius.apply(-40.0), -40.0);
    }

    #[test]
    fn test_fahrenheit_kelvin() {
        assert_eq!(TempDirection::FahrenheitToKelvin.apply(32.0), 273.15);
        let back = TempDirection::KelvinToFahrenheit.apply(273.15);
        assert!((back - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_pairs_mapped() {
        let scales = ["celsius", "fahrenheit", "kelvin"];
        for from in scales {
            for to in scales {
                if from == to {
                    assert!(TempDirection::for_pair(from, to).is_none());
                } else {
                    assert!(TempDirection::for_pair(from, to).is_some());
                }
            }
        }
    }

    #[test]
    fn test_unmapped_pair() {
        assert!(TempDirection::for_pair("rankine", "celsius").is_none());
    }
}
