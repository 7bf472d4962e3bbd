use super::{Quantity, QuantityFamily, UnitConversion};
use crate::chem_errors::ChemError;

/// Metric prefixes and their factors. A prefixed unit is resolved as prefix + base symbol of
/// the family, so "dag" is deca-gram and "mus" is micro-second.
pub const METRIC_PREFIXES: &[(&str, f64)] = &[
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("mu", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
];

const POUND: f64 = 453.5923;
const GALLON: f64 = 3.785411784;
const ATMOSPHERE: f64 = 101325.0;

// named units of every linear family, as multiples of the family base unit
const MASS_UNITS: &[(&str, f64)] = &[("g", 1.0), ("lb", POUND), ("oz", POUND / 16.0)];

const VOLUME_UNITS: &[(&str, f64)] = &[
    ("L", 1.0),
    ("gal", GALLON),
    ("qt", GALLON / 4.0),
    ("pt", GALLON / 8.0),
    ("cup", GALLON / 16.0),
    ("floz", GALLON / 128.0),
];

const PRESSURE_UNITS: &[(&str, f64)] = &[
    ("Pa", 1.0),
    ("atm", ATMOSPHERE),
    ("bar", 1e5),
    ("torr", ATMOSPHERE / 760.0),
    ("mmHg", 133.322387415),
    ("inHg", 3386.389),
    ("psi", 6894.757293168),
];

const TIME_UNITS: &[(&str, f64)] = &[
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("hr", 3600.0),
    ("day", 86400.0),
    ("week", 604800.0),
];

/// Splits a unit such as "kg" into its metric prefix and factor if the remainder is exactly
/// `base`. Returns None for plain or unrelated units ("g", "lb", "mmHg" with base "Pa").
pub fn split_metric_prefix(unit: &str, base: &str) -> Option<(&'static str, f64)> {
    METRIC_PREFIXES
        .iter()
        .find(|(prefix, _)| unit.strip_prefix(prefix) == Some(base))
        .map(|(prefix, factor)| (*prefix, *factor))
}

/// Converter for a family whose units are all multiples of one base unit
#[derive(Debug, Clone)]
pub struct LinearConverter {
    family: QuantityFamily,
    base: &'static str,
    units: &'static [(&'static str, f64)],
}

impl LinearConverter {
    pub fn mass() -> Self {
        Self {
            family: QuantityFamily::Mass,
            base: "g",
            units: MASS_UNITS,
        }
    }

    pub fn volume() -> Self {
        Self {
            family: QuantityFamily::Volume,
            base: "L",
            units: VOLUME_UNITS,
        }
    }

    pub fn pressure() -> Self {
        Self {
            family: QuantityFamily::Pressure,
            base: "Pa",
            units: PRESSURE_UNITS,
        }
    }

    pub fn time() -> Self {
        Self {
            family: QuantityFamily::Time,
            base: "s",
            units: TIME_UNITS,
        }
    }

    pub fn base_unit(&self) -> &'static str {
        self.base
    }

    fn named_unit(&self, unit: &str) -> Result<f64, ChemError> {
        self.units
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ChemError::UnknownUnit {
                unit: unit.to_string(),
                family: self.family,
            })
    }

    /// multiplier that turns a value in `unit` into the base unit
    pub fn scale(&self, unit: &str) -> Result<f64, ChemError> {
        match split_metric_prefix(unit, self.base) {
            Some((_, prefix_factor)) => Ok(prefix_factor * self.named_unit(self.base)?),
            None => self.named_unit(unit),
        }
    }
}

impl UnitConversion for LinearConverter {
    fn family(&self) -> QuantityFamily {
        self.family
    }

    fn parse(&self, input: &str) -> Result<Quantity, ChemError> {
        Quantity::parse(input, self.family)
    }

    fn convert_value(&self, value: f64, from: &str, to: &str) -> Result<f64, ChemError> {
        Ok(value * self.scale(from)? / self.scale(to)?)
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
    fn test_metric_prefix() {
        assert_eq!(split_metric_prefix("kg", "g").map(|p| p.0), Some("k"));
        assert_eq!(split_metric_prefix("mug", "g").map(|p| p.0), Some("mu"));
        assert_eq!(split_metric_prefix("dag", "g").map(|p| p.0), Some("da"));
        assert_eq!(split_metric_prefix("dL", "L").map(|p| p.0), Some("d"));
        assert_eq!(split_metric_prefix("hPa", "Pa").map(|p| p.0), Some("h"));
        assert_eq!(split_metric_prefix("GPa", "Pa").map(|p| p.0), Some("G"));
        assert_eq!(split_metric_prefix("pg", "g"), Some(("p", 1e-12)));
        // every prefix resolves against every base
        for (prefix, factor) in METRIC_PREFIXES {
            for base in ["g", "L", "Pa", "s"] {
                let unit = format!("{}{}", prefix, base);
                assert_eq!(split_metric_prefix(&unit, base), Some((*prefix, *factor)), "{}", unit);
            }
        }
        assert_eq!(split_metric_prefix("g", "g"), None);
        assert_eq!(split_metric_prefix("mmHg", "Pa"), None);
        assert_eq!(split_metric_prefix("lb", "g"), None);
    }

    #[test]
    fn test_mass() {
        let mass = LinearConverter::mass();
        assert_eq!(mass.convert("1 kg", "g").unwrap(), 1000.0);
        assert_eq!(mass.convert("1 kg", "dag").unwrap(), 100.0);
        assert_eq!(mass.convert("1 lb", "g").unwrap(), 453.5923);
        assert_relative_eq!(mass.convert("16 oz", "lb").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(mass.convert("250 mg", "g").unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(mass.convert("3 mug", "ng").unwrap(), 3000.0, epsilon = 1e-6);
        assert_relative_eq!(mass.convert("2.5Mg", "kg").unwrap(), 2500.0, epsilon = 1e-9);
        assert_relative_eq!(mass.convert("1 Gg", "kg").unwrap(), 1e6, max_relative = 1e-12);
        assert_relative_eq!(mass.convert("1 ng", "pg").unwrap(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_volume_pressure_time() {
        let volume = LinearConverter::volume();
        assert_relative_eq!(volume.convert("250 mL", "L").unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(volume.convert("1 gal", "qt").unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(volume.convert("2 L", "cL").unwrap(), 200.0, epsilon = 1e-9);

        let pressure = LinearConverter::pressure();
        assert_relative_eq!(pressure.convert("760 torr", "atm").unwrap(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(pressure.convert("760 mmHg", "atm").unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(pressure.convert("1 bar", "kPa").unwrap(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(pressure.convert("1013.25 hPa", "atm").unwrap(), 1.0, epsilon = 1e-9);

        let time = LinearConverter::time();
        assert_relative_eq!(time.convert("1 day", "h").unwrap(), 24.0, epsilon = 1e-12);
        assert_relative_eq!(time.convert("1500 ms", "s").unwrap(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(time.convert("1 week", "min").unwrap(), 10080.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let families = [
            (LinearConverter::mass(), vec!["g", "kg", "mg", "mug", "lb", "oz", "dag", "Tg", "Gg", "pg"]),
            (LinearConverter::volume(), vec!["L", "mL", "dL", "gal", "qt", "pt", "cup", "floz"]),
            (LinearConverter::pressure(), vec!["Pa", "kPa", "GPa", "atm", "bar", "torr", "mmHg", "inHg", "psi"]),
            (LinearConverter::time(), vec!["s", "ms", "ns", "ps", "min", "h", "hr", "day", "week"]),
        ];
        let x = 12.75;
        for (converter, units) in families.iter() {
            for a in units {
                for b in units {
                    let there = converter.convert_value(x, a, b).unwrap();
                    let back = converter.convert_value(there, b, a).unwrap();
                    assert_relative_eq!(back, x, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        let mass = LinearConverter::mass();
        assert_eq!(
            mass.convert("1 kg", "stone").unwrap_err(),
            ChemError::UnknownUnit {
                unit: "stone".to_string(),
                family: QuantityFamily::Mass
            }
        );
        // prefix of another family's base is not a mass unit
        assert!(matches!(
            mass.convert("1 kL", "g"),
            Err(ChemError::UnknownUnit { .. })
        ));
        assert!(matches!(
            mass.convert("one kg", "g"),
            Err(ChemError::MalformedQuantity { .. })
        ));
    }
}
