use super::{Quantity, QuantityFamily, UnitConversion};
use crate::chem_errors::ChemError;
use regex::Regex;
use std::sync::OnceLock;

/// affine map from Celsius: value = celsius * scale + offset
#[derive(Debug, Clone, Copy)]
struct TemperatureScale {
    symbol: char,
    scale: f64,
    offset: f64,
}

static SCALES: [TemperatureScale; 3] = [
    TemperatureScale {
        symbol: 'C',
        scale: 1.0,
        offset: 0.0,
    },
    TemperatureScale {
        symbol: 'K',
        scale: 1.0,
        offset: 273.15,
    },
    TemperatureScale {
        symbol: 'F',
        scale: 9.0 / 5.0,
        offset: 32.0,
    },
];

impl TemperatureScale {
    fn to_celsius(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }

    fn from_celsius(&self, celsius: f64) -> f64 {
        celsius * self.scale + self.offset
    }
}

fn temperature_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?) ?([CKFckf])$").expect("valid regex"))
}

fn scale_for(unit: &str, family: QuantityFamily) -> Result<&'static TemperatureScale, ChemError> {
    let mut chars = unit.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_uppercase(),
        _ => '?',
    };
    SCALES
        .iter()
        .find(|s| s.symbol == symbol)
        .ok_or_else(|| ChemError::UnknownUnit {
            unit: unit.to_string(),
            family,
        })
}

fn parse_temperature(input: &str, family: QuantityFamily) -> Result<Quantity, ChemError> {
    let malformed = || ChemError::MalformedQuantity {
        input: input.to_string(),
        family,
    };
    let caps = temperature_regex().captures(input).ok_or_else(malformed)?;
    Ok(Quantity {
        value: caps[1].parse().map_err(|_| malformed())?,
        unit: caps[2].to_string(),
    })
}

/// Absolute temperatures (C, K, F), converted through Celsius
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureConverter;

impl UnitConversion for TemperatureConverter {
    fn family(&self) -> QuantityFamily {
        QuantityFamily::Temperature
    }

    fn parse(&self, input: &str) -> Result<Quantity, ChemError> {
        parse_temperature(input, self.family())
    }

    fn convert_value(&self, value: f64, from: &str, to: &str) -> Result<f64, ChemError> {
        let from = scale_for(from, self.family())?;
        let to = scale_for(to, self.family())?;
        Ok(to.from_celsius(from.to_celsius(value)))
    }

    fn convert(&self, input: &str, to: &str) -> Result<f64, ChemError> {
        let quantity = self.parse(input)?;
        self.convert_value(quantity.value, &quantity.unit, to)
    }
}

/// Temperature differences: only the scale of the affine map applies, offsets cancel out
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureDifferenceConverter;

impl UnitConversion for TemperatureDifferenceConverter {
    fn family(&self) -> QuantityFamily {
        QuantityFamily::TemperatureDifference
    }

    fn parse(&self, input: &str) -> Result<Quantity, ChemError> {
        parse_temperature(input, self.family())
    }

    fn convert_value(&self, value: f64, from: &str, to: &str) -> Result<f64, ChemError> {
        let from = scale_for(from, self.family())?;
        let to = scale_for(to, self.family())?;
        Ok(value / from.scale * to.scale)
    }

    fn convert(&self, input: &str, to: &str) -> Result<f64, ChemError> {
        let quantity = self.parse(input)?;
        self.convert_value(quantity.value, &quantity.unit, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature() {
        let t = TemperatureConverter;
        assert_relative_eq!(t.convert("100 C", "f").unwrap(), 212.0, epsilon = 1e-9);
        assert_relative_eq!(t.convert("32F", "C").unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(t.convert("290K", "C").unwrap(), 16.85, epsilon = 1e-9);
        assert_relative_eq!(t.convert("290K", "K").unwrap(), 290.0, epsilon = 1e-9);
        assert_relative_eq!(t.convert("0 K", "F").unwrap(), -459.67, epsilon = 1e-9);
        assert_relative_eq!(t.convert("-40 C", "F").unwrap(), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_difference_has_no_offset() {
        let dt = TemperatureDifferenceConverter;
        assert_relative_eq!(dt.convert("100 C", "f").unwrap(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(dt.convert("180 F", "K").unwrap(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(dt.convert("-1.86 C", "K").unwrap(), -1.86, epsilon = 1e-12);
    }

    #[test]
    fn test_temperature_round_trip() {
        let t = TemperatureConverter;
        let dt = TemperatureDifferenceConverter;
        for a in ["C", "K", "F"] {
            for b in ["C", "K", "F"] {
                let back = t.convert_value(t.convert_value(36.6, a, b).unwrap(), b, a).unwrap();
                assert_relative_eq!(back, 36.6, epsilon = 1e-9);
                let back = dt.convert_value(dt.convert_value(5.5, a, b).unwrap(), b, a).unwrap();
                assert_relative_eq!(back, 5.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_temperature_errors() {
        let t = TemperatureConverter;
        assert_eq!(
            t.convert("100 X", "C").unwrap_err(),
            ChemError::MalformedQuantity {
                input: "100 X".to_string(),
                family: QuantityFamily::Temperature
            }
        );
        assert_eq!(
            t.convert("100 C", "R").unwrap_err(),
            ChemError::UnknownUnit {
                unit: "R".to_string(),
                family: QuantityFamily::Temperature
            }
        );
        assert!(matches!(
            TemperatureDifferenceConverter.convert("100 Kelvin", "C"),
            Err(ChemError::MalformedQuantity { .. })
        ));
    }
}
