//! quickconvert-units - Unit Catalog and Conversion Engine
//!
//! Maps named units to canonical base quantities and composes conversion
//! factors. Temperature is the one non-linear category and is handled by
//! explicit pairwise transforms instead of multiplicative factors.
//!
//! Categories:
//! - Length (meters, kilometers, miles, ...)
//! - Weight (grams, kilograms, pounds, ...)
//! - Volume (liters, gallons, cubic meters, ...)
//! - Speed (meter/second, mile/hour, ...)
//! - Time (seconds, minutes, hours, ...)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Energy (joules, calories, watt-hours, ...)
//! - Power (watts, kilowatts, horsepower)
//! - Pressure (pascals, bar, atm, psi, ...)
//! - Data (bit, byte, kilobyte, ...)
//! - Fuel Economy (mpg, km/l, 1/100km)
//! - Angle (degrees, radians)

mod unit;
mod catalog;
mod temperature;
mod convert;

pub use unit::Rule;
pub use catalog::{Catalog, CATALOG, units_of, rule_for};
pub use temperature::TempDirection;
pub use convert::convert;
