use super::elements::ElementTable;
use super::formula::{CompositionMap, parse_formula};
use crate::Units::{LinearConverter, UnitConversion};
use crate::chem_errors::ChemError;
use prettytable::{Table, row};
use serde::Serialize;
use std::collections::BTreeMap;

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(
    formula: &str,
    elements: &ElementTable,
) -> Result<(f64, CompositionMap), ChemError> {
    let counts = parse_formula(formula);
    let mut molar_mass = 0.0;
    for (element, count) in counts.iter() {
        molar_mass += elements.atomic_weight(element)? * *count as f64;
    }
    Ok((molar_mass, counts))
}

pub fn molar_mass(formula: &str, elements: &ElementTable) -> Result<f64, ChemError> {
    Ok(calculate_molar_mass(formula, elements)?.0)
}

// Function to calculate the molar mass of a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
    elements: &ElementTable,
) -> Result<Vec<f64>, ChemError> {
    vec_of_formulae
        .iter()
        .map(|formula| molar_mass(formula, elements))
        .collect()
}

/// Contribution of one element to the mass of a compound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementShare {
    pub atomic_mass: f64,
    /// atomic mass times coefficient, g/mol
    pub mass: f64,
    pub percent: f64,
    pub coefficient: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentComposition {
    pub elements: BTreeMap<String, ElementShare>,
    pub total_mass: f64,
}

impl PercentComposition {
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Element", "Atomic mass", "Coefficient", "Mass", "%"]);
        for (symbol, share) in &self.elements {
            table.add_row(row![
                symbol,
                format!("{:.4}", share.atomic_mass),
                share.coefficient,
                format!("{:.4}", share.mass),
                format!("{:.2}", share.percent)
            ]);
        }
        table.add_row(row!["Total", "", "", format!("{:.4}", self.total_mass), "100.00"]);
        table
    }

    pub fn pretty_print(&self) {
        self.to_table().printstd();
    }
}

/// Mass share of every element of a formula
pub fn percent_composition(
    formula: &str,
    elements: &ElementTable,
) -> Result<PercentComposition, ChemError> {
    let (total_mass, counts) = calculate_molar_mass(formula, elements)?;
    let mut shares = BTreeMap::new();
    for (symbol, coefficient) in counts {
        let atomic_mass = elements.atomic_weight(&symbol)?;
        let mass = atomic_mass * coefficient as f64;
        shares.insert(
            symbol,
            ElementShare {
                atomic_mass,
                mass,
                percent: mass / total_mass * 100.0,
                coefficient,
            },
        );
    }
    Ok(PercentComposition {
        elements: shares,
        total_mass,
    })
}

/// Mole ratios of the elements from their mass percents, normalised so the smallest is 1.
/// The ratios are returned unrounded, e.g. C 1.0, H 2.0 for glucose mass percents.
pub fn empirical_formula(
    mass_percents: &[(&str, f64)],
    elements: &ElementTable,
) -> Result<BTreeMap<String, f64>, ChemError> {
    let mut moles = BTreeMap::new();
    for (symbol, percent) in mass_percents {
        let mass = elements.atomic_weight(symbol)?;
        moles.insert(symbol.to_string(), percent / mass);
    }
    let smallest = moles.values().cloned().fold(f64::INFINITY, f64::min);
    Ok(moles
        .into_iter()
        .map(|(symbol, n)| (symbol, n / smallest))
        .collect())
}

/// moles of substance in `total_mass` grams
pub fn number_of_moles(
    formula: &str,
    total_mass: f64,
    elements: &ElementTable,
) -> Result<f64, ChemError> {
    Ok(total_mass / molar_mass(formula, elements)?)
}

/// Mole fractions of a mixture given as (formula, mass with unit) pairs like ("H2O", "18 g")
pub fn mole_fractions_from_mass(
    masses: &[(&str, &str)],
    elements: &ElementTable,
) -> Result<BTreeMap<String, f64>, ChemError> {
    let grams = LinearConverter::mass();
    let mut moles = BTreeMap::new();
    for (formula, mass) in masses {
        let n = grams.convert(mass, "g")? / molar_mass(formula, elements)?;
        *moles.entry(formula.to_string()).or_insert(0.0) += n;
    }
    let total: f64 = moles.values().sum();
    Ok(moles
        .into_iter()
        .map(|(formula, n)| (formula, n / total))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> ElementTable {
        ElementTable::builtin().unwrap()
    }

    #[test]
    fn test_calculate_molar_mass() {
        let elements = table();
        assert_relative_eq!(molar_mass("O2", &elements).unwrap(), 31.9988, epsilon = 1e-9);
        let (mass, counts) = calculate_molar_mass("H2O", &elements).unwrap();
        assert_relative_eq!(mass, 18.01528, epsilon = 1e-4);
        assert_eq!(counts.get("H"), Some(&2));
        assert_relative_eq!(molar_mass("NaCl", &elements).unwrap(), 58.44, epsilon = 1e-2);
        assert_relative_eq!(molar_mass("C6H8O6", &elements).unwrap(), 176.12, epsilon = 1e-2);
        assert_eq!(molar_mass("", &elements).unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(
            molar_mass("XyO2", &table()).unwrap_err(),
            ChemError::UnknownElement("Xy".to_string())
        );
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let expected = [18.01528, 58.44277, 176.12];
        let masses =
            calculate_molar_mass_of_vector_of_subs(&["H2O", "NaCl", "C6H8O6"], &table()).unwrap();
        for (m, e) in masses.iter().zip(expected.iter()) {
            assert_relative_eq!(*m, *e, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_percent_composition() {
        let composition = percent_composition("H2O", &table()).unwrap();
        let oxygen = &composition.elements["O"];
        assert_eq!(oxygen.coefficient, 1);
        assert_relative_eq!(oxygen.percent, 88.81, epsilon = 1e-2);
        let total: f64 = composition.elements.values().map(|s| s.percent).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-9);
        assert_relative_eq!(composition.total_mass, 18.01528, epsilon = 1e-4);
        assert_eq!(composition.to_table().len(), 4);
    }

    #[test]
    fn test_empirical_formula() {
        // glucose: 40.00 % C, 6.71 % H, 53.29 % O -> CH2O
        let ratios = empirical_formula(&[("C", 40.00), ("H", 6.71), ("O", 53.29)], &table()).unwrap();
        assert_relative_eq!(ratios["C"], 1.0, epsilon = 1e-2);
        assert_relative_eq!(ratios["H"], 2.0, epsilon = 2e-2);
        assert_relative_eq!(ratios["O"], 1.0, epsilon = 1e-2);
    }

    #[test]
    fn test_moles_and_fractions() {
        let elements = table();
        assert_relative_eq!(
            number_of_moles("O2", 63.9976, &elements).unwrap(),
            2.0,
            epsilon = 1e-9
        );
        let fractions =
            mole_fractions_from_mass(&[("O2", "31.9988 g"), ("N2", "0.0840402 kg")], &elements)
                .unwrap();
        assert_relative_eq!(fractions["O2"], 0.25, epsilon = 1e-6);
        assert_relative_eq!(fractions["N2"], 0.75, epsilon = 1e-6);
    }
}
