//! Unit catalog - the fixed category/unit table with conversion rules
//!
//! Immutable, process-wide, read-only static data. Unit names are the
//! exact catalog strings; there is no free-form parsing and no aliasing.

use std::collections::HashMap;
use std::sync::LazyLock;
use quickconvert_core::{Category, ConvertError};
use crate::Rule;

/// Global unit catalog
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// Registry of all known units, keyed by category
pub struct Catalog {
    /// Unit names per category, in display order
    names: HashMap<Category, Vec<&'static str>>,
    /// Conversion rule per (category, unit); temperature units carry none
    rules: HashMap<(Category, &'static str), Rule>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut catalog = Catalog {
            names: HashMap::new(),
            rules: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Ordered unit names for a category (drives selection controls)
    pub fn units_of(&self, category: Category) -> &[&'static str] {
        self.names.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether a unit name is registered under a category
    pub fn contains(&self, category: Category, unit: &str) -> bool {
        self.units_of(category).contains(&unit)
    }

    /// Conversion rule for a unit within a category
    ///
    /// Temperature has no rules here; the engine dispatches it through the
    /// pairwise direction table instead.
    pub fn rule_for(&self, category: Category, unit: &str) -> Result<Rule, ConvertError> {
        self.rules
            .get(&(category, unit))
            .copied()
            .ok_or_else(|| ConvertError::unknown_unit(category, unit))
    }

    fn register(&mut self, category: Category, name: &'static str, rule: Rule) {
        self.names.entry(category).or_default().push(name);
        self.rules.insert((category, name), rule);
    }

    /// Register a unit name with no linear rule (temperature scales)
    fn declare(&mut self, category: Category, name: &'static str) {
        self.names.entry(category).or_default().push(name);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_volume_units();
        self.register_speed_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_data_units();
        self.register_fuel_economy_units();
        self.register_angle_units();
    }

    fn register_length_units(&mut self) {
        // Base: meter
        self.register(Category::Length, "meters", Rule::Linear(1.0));
        self.register(Category::Length, "kilometers", Rule::Linear(1000.0));
        self.register(Category::Length, "miles", Rule::Linear(1609.344));
        self.register(Category::Length, "feet", Rule::Linear(0.3048));
        self.register(Category::Length, "inches", Rule::Linear(0.0254));
        self.register(Category::Length, "centimeters", Rule::Linear(0.01));
        self.register(Category::Length, "millimeters", Rule::Linear(0.001));
        self.register(Category::Length, "yards", Rule::Linear(0.9144));
    }

    fn register_weight_units(&mut self) {
        // Base: gram
        self.register(Category::Weight, "grams", Rule::Linear(1.0));
        self.register(Category::Weight, "kilograms", Rule::Linear(1000.0));
        self.register(Category::Weight, "pounds", Rule::Linear(453.59237));
        self.register(Category::Weight, "ounces", Rule::Linear(28.349523125));
        self.register(Category::Weight, "stones", Rule::Linear(6350.29318));
        self.register(Category::Weight, "milligrams", Rule::Linear(0.001));
    }

    fn register_volume_units(&mut self) {
        // Base: liter
        self.register(Category::Volume, "liters", Rule::Linear(1.0));
        self.register(Category::Volume, "milliliters", Rule::Linear(0.001));
        self.register(Category::Volume, "gallons", Rule::Linear(3.785411784));
        self.register(Category::Volume, "cubic meters", Rule::Linear(1000.0));
        self.register(Category::Volume, "cubic feet", Rule::Linear(28.316846592));
    }

    fn register_speed_units(&mut self) {
        // Base: meter per second
        self.register(Category::Speed, "meter/second", Rule::Linear(1.0));
        self.register(Category::Speed, "kilometer/hour", Rule::Linear(1000.0 / 3600.0));
        self.register(Category::Speed, "mile/hour", Rule::Linear(0.44704));
        self.register(Category::Speed, "foot/second", Rule::Linear(0.3048));
    }

    fn register_time_units(&mut self) {
        // Base: second; month and year are mean Gregorian values
        self.register(Category::Time, "seconds", Rule::Linear(1.0));
        self.register(Category::Time, "minutes", Rule::Linear(60.0));
        self.register(Category::Time, "hours", Rule::Linear(3600.0));
        self.register(Category::Time, "days", Rule::Linear(86_400.0));
        self.register(Category::Time, "weeks", Rule::Linear(604_800.0));
        self.register(Category::Time, "months", Rule::Linear(2_629_746.0));
        self.register(Category::Time, "years", Rule::Linear(31_556_952.0));
    }

    fn register_temperature_units(&mut self) {
        // No linear rules: temperature converts through the pairwise
        // direction table (see temperature.rs).
        self.declare(Category::Temperature, "celsius");
        self.declare(Category::Temperature, "fahrenheit");
        self.declare(Category::Temperature, "kelvin");
    }

    fn register_energy_units(&mut self) {
        // Base: joule
        self.register(Category::Energy, "joules", Rule::Linear(1.0));
        self.register(Category::Energy, "kilojoules", Rule::Linear(1000.0));
        self.register(Category::Energy, "calories", Rule::Linear(4.184));
        self.register(Category::Energy, "kilocalories", Rule::Linear(4184.0));
        self.register(Category::Energy, "watt-hours", Rule::Linear(3600.0));
    }

    fn register_power_units(&mut self) {
        // Base: watt
        self.register(Category::Power, "watts", Rule::Linear(1.0));
        self.register(Category::Power, "kilowatts", Rule::Linear(1000.0));
        self.register(Category::Power, "horsepower", Rule::Linear(745.699872));
    }

    fn register_pressure_units(&mut self) {
        // Base: pascal
        self.register(Category::Pressure, "pascals", Rule::Linear(1.0));
        self.register(Category::Pressure, "kilopascals", Rule::Linear(1000.0));
        self.register(Category::Pressure, "bar", Rule::Linear(100_000.0));
        self.register(Category::Pressure, "atm", Rule::Linear(101_325.0));
        self.register(Category::Pressure, "psi", Rule::Linear(6894.757293168));
    }

    fn register_data_units(&mut self) {
        // Base: bit, decimal (SI) byte multiples
        self.register(Category::Data, "bit", Rule::Linear(1.0));
        self.register(Category::Data, "byte", Rule::Linear(8.0));
        self.register(Category::Data, "kilobyte", Rule::Linear(8_000.0));
        self.register(Category::Data, "megabyte", Rule::Linear(8_000_000.0));
        self.register(Category::Data, "gigabyte", Rule::Linear(8_000_000_000.0));
        self.register(Category::Data, "terabyte", Rule::Linear(8_000_000_000_000.0));
    }

    fn register_fuel_economy_units(&mut self) {
        // Base: kilometer per liter. "1/100km" (liters per 100 km) is the
        // inverse of distance per volume, hence the reciprocal rule.
        self.register(Category::FuelEconomy, "mpg", Rule::Linear(1.609344 / 3.785411784));
        self.register(Category::FuelEconomy, "km/l", Rule::Linear(1.0));
        self.register(Category::FuelEconomy, "1/100km", Rule::Reciprocal(100.0));
    }

    fn register_angle_units(&mut self) {
        // Base: radian
        self.register(Category::Angle, "degrees", Rule::Linear(std::f64::consts::PI / 180.0));
        self.register(Category::Angle, "radians", Rule::Linear(1.0));
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered unit names for a category
pub fn units_of(category: Category) -> &'static [&'static str] {
    CATALOG.units_of(category)
}

/// Conversion rule for a unit within a category
pub fn rule_for(category: Category, unit: &str) -> Result<Rule, ConvertError> {
    CATALOG.rule_for(category, unit)
}
