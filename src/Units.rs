//! Conversion of quantities given as strings like "1.5 kg", "2 L" or "290K".
//!
//! Mass, volume, pressure and time are linear families: every unit is a multiple of the
//! family's base unit (g, L, Pa, s) and metric-prefixed units (kg, mL, hPa, ms, mug...)
//! are resolved from the prefix factor, never listed one by one.
//! Temperatures are affine and go through Celsius; temperature differences only use the
//! scaling part of the same maps, so 100 C of difference is 180 F, not 212.
//!
//!  # Examples
//! ```
//! use ChemHelpers::Units::{QuantityFamily, convert};
//! let grams = convert(QuantityFamily::Mass, "1 kg", "g").unwrap();
//! assert_eq!(grams, 1000.0);
//! let fahrenheit = convert(QuantityFamily::Temperature, "100 C", "f").unwrap();
//! assert!((fahrenheit - 212.0).abs() < 1e-9);
//! ```
pub mod temperature;
pub mod unit_converter;

use crate::chem_errors::ChemError;
use enum_dispatch::enum_dispatch;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
pub use temperature::{TemperatureConverter, TemperatureDifferenceConverter};
pub use unit_converter::{LinearConverter, METRIC_PREFIXES, split_metric_prefix};

/// Independent families of physical quantities known to the converters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityFamily {
    Mass,
    Volume,
    Pressure,
    Time,
    Temperature,
    TemperatureDifference,
}

impl fmt::Display for QuantityFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            QuantityFamily::Mass => "mass",
            QuantityFamily::Volume => "volume",
            QuantityFamily::Pressure => "pressure",
            QuantityFamily::Time => "time",
            QuantityFamily::Temperature => "temperature",
            QuantityFamily::TemperatureDifference => "temperature difference",
        };
        write!(f, "{}", name)
    }
}

/// numeric value tagged with the unit it was written in
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

fn quantity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?) ?([A-Za-z]+)$").expect("valid regex"))
}

fn magnitude_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?) ?[A-Za-z]*$").expect("valid regex"))
}

impl Quantity {
    /// Parses `<number><optional space><unit letters>`, anything else is a MalformedQuantity
    pub fn parse(input: &str, family: QuantityFamily) -> Result<Self, ChemError> {
        let malformed = || ChemError::MalformedQuantity {
            input: input.to_string(),
            family,
        };
        let caps = quantity_regex().captures(input).ok_or_else(malformed)?;
        let value: f64 = caps[1].parse().map_err(|_| malformed())?;
        Ok(Quantity {
            value,
            unit: caps[2].to_string(),
        })
    }

    /// Numeric part of a string like "23.79atm" or "2.5", ignoring the unit label
    pub fn magnitude(input: &str) -> Option<f64> {
        magnitude_regex()
            .captures(input.trim())
            .and_then(|caps| caps[1].parse().ok())
    }
}

#[enum_dispatch]
pub trait UnitConversion {
    fn family(&self) -> QuantityFamily;
    /// splits an input string into value and unit, rejecting malformed inputs
    fn parse(&self, input: &str) -> Result<Quantity, ChemError>;
    /// converts a bare value expressed in `from` into `to`
    fn convert_value(&self, value: f64, from: &str, to: &str) -> Result<f64, ChemError>;
    /// converts a string such as "1 kg" into the target unit
    fn convert(&self, input: &str, to: &str) -> Result<f64, ChemError>;
}

#[derive(Debug, Clone)]
#[enum_dispatch(UnitConversion)]
pub enum Converter {
    Linear(LinearConverter),
    Temperature(TemperatureConverter),
    TemperatureDifference(TemperatureDifferenceConverter),
}

/// Returns the converter that handles a quantity family
pub fn converter_for(family: QuantityFamily) -> Converter {
    match family {
        QuantityFamily::Mass => LinearConverter::mass().into(),
        QuantityFamily::Volume => LinearConverter::volume().into(),
        QuantityFamily::Pressure => LinearConverter::pressure().into(),
        QuantityFamily::Time => LinearConverter::time().into(),
        QuantityFamily::Temperature => TemperatureConverter.into(),
        QuantityFamily::TemperatureDifference => TemperatureDifferenceConverter.into(),
    }
}

/// Converts a quantity string of the given family into `target_unit`
pub fn convert(family: QuantityFamily, input: &str, target_unit: &str) -> Result<f64, ChemError> {
    converter_for(family).convert(input, target_unit)
}

pub fn convert_temperature(input: &str, target_unit: &str) -> Result<f64, ChemError> {
    TemperatureConverter.convert(input, target_unit)
}

pub fn convert_temperature_difference(input: &str, target_unit: &str) -> Result<f64, ChemError> {
    TemperatureDifferenceConverter.convert(input, target_unit)
}
