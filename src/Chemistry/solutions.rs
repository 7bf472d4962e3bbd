//! Concentration bookkeeping for solutions: molality, molarity, mass percent, dilution.
//! Unless stated otherwise the solution density is 1 kg/L, masses are in grams and the
//! molality conversions assume 1 kg of solvent.
use super::elements::ElementTable;
use super::molmass::molar_mass;
use crate::chem_errors::ChemError;
use serde::{Deserialize, Serialize};

const DEFAULT_DENSITY: f64 = 1.0;
const MERCURY_DENSITY: f64 = 13595.1; // kg/m3
const GRAVITY: f64 = 9.80665; // m/s2
const ATMOSPHERE: f64 = 101325.0; // Pa

/// Ebullioscopic (Kb) and cryoscopic (Kf) constants of a solvent, K*kg/mol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solvent {
    pub name: &'static str,
    pub kb: f64,
    pub kf: f64,
}

const SOLVENTS: &[Solvent] = &[
    Solvent {
        name: "water",
        kb: 0.512,
        kf: 1.86,
    },
    Solvent {
        name: "benzene",
        kb: 2.53,
        kf: 5.12,
    },
    Solvent {
        name: "acetic acid",
        kb: 3.07,
        kf: 3.90,
    },
    Solvent {
        name: "camphor",
        kb: 5.95,
        kf: 37.7,
    },
    Solvent {
        name: "carbon tetrachloride",
        kb: 5.03,
        kf: 29.8,
    },
    Solvent {
        name: "chloroform",
        kb: 3.63,
        kf: 4.68,
    },
    Solvent {
        name: "cyclohexane",
        kb: 2.79,
        kf: 20.0,
    },
    Solvent {
        name: "ethanol",
        kb: 1.22,
        kf: 1.99,
    },
    Solvent {
        name: "naphthalene",
        kb: 5.80,
        kf: 6.94,
    },
    Solvent {
        name: "phenol",
        kb: 3.04,
        kf: 7.40,
    },
];

pub fn solvent_constants(name: &str) -> Option<&'static Solvent> {
    SOLVENTS.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

/// pressure in atm of a mercury column `height` metres high
pub fn mercury_height_to_atm(height: f64) -> f64 {
    MERCURY_DENSITY * height * GRAVITY / ATMOSPHERE
}

pub fn molality_to_percent_mass(
    molecule: &str,
    molality: f64,
    elements: &ElementTable,
) -> Result<f64, ChemError> {
    let mass = molality * molar_mass(molecule, elements)?;
    let solution_mass = 1000.0 + mass;
    Ok(mass / solution_mass * 100.0)
}

/// molality of a solution of given mass percent, taking 1 L of solution
pub fn percent_mass_to_molality(
    molecule: &str,
    percent_mass: f64,
    solution_density: Option<f64>,
    elements: &ElementTable,
) -> Result<f64, ChemError> {
    let solution_mass_kg = solution_density.unwrap_or(DEFAULT_DENSITY);
    let mass = percent_mass / 100.0 * solution_mass_kg * 1000.0;
    let moles = mass / molar_mass(molecule, elements)?;
    let solvent_mass_kg = solution_mass_kg - mass / 1000.0;
    Ok(moles / solvent_mass_kg)
}

pub fn molality_to_molarity(
    molecule: &str,
    molality: f64,
    solution_density: Option<f64>,
    elements: &ElementTable,
) -> Result<f64, ChemError> {
    let solvent_mass_kg = 1.0;
    let solute_mass = molality * molar_mass(molecule, elements)?;
    let solution_mass_kg = solvent_mass_kg + solute_mass / 1000.0;
    let solution_volume = solution_mass_kg / solution_density.unwrap_or(DEFAULT_DENSITY);
    Ok(molality / solution_volume)
}

/// molality from molarity, taking 1 L of solution
pub fn molarity_to_molality(
    molecule: &str,
    molarity: f64,
    solution_density: Option<f64>,
    elements: &ElementTable,
) -> Result<f64, ChemError> {
    let solute_mass = molarity * molar_mass(molecule, elements)?;
    let solution_mass_kg = solution_density.unwrap_or(DEFAULT_DENSITY);
    let solvent_mass_kg = solution_mass_kg - solute_mass / 1000.0;
    Ok(molarity / solvent_mass_kg)
}

/// Input of [`percent_mass`]. The solution mass may be given directly or as solvent +
/// solute; the solute mass may be given directly or as moles of a molecule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PercentMassInput {
    pub solution_mass: Option<f64>,
    pub solvent_mass: Option<f64>,
    pub solute_mass: Option<f64>,
    pub solute_molecule: Option<String>,
    pub solute_moles: Option<f64>,
}

pub fn percent_mass(input: &PercentMassInput, elements: &ElementTable) -> Result<f64, ChemError> {
    let solute_mass = match (input.solute_mass, &input.solute_molecule, input.solute_moles) {
        (Some(mass), _, _) => mass,
        (None, Some(molecule), Some(moles)) => molar_mass(molecule, elements)? * moles,
        _ => return Err(ChemError::MissingParameter("solute_mass".to_string())),
    };
    let solution_mass = match (input.solution_mass, input.solvent_mass) {
        (Some(mass), _) => mass,
        (None, Some(solvent)) => solvent + solute_mass,
        _ => return Err(ChemError::MissingParameter("solution_mass".to_string())),
    };
    Ok(solute_mass / solution_mass * 100.0)
}

/// Input of [`dissolve`]. The final volume is `new_volume`, or the original volume plus
/// `added_volume`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DilutionInput {
    pub initial_concentration: f64,
    pub original_volume: f64,
    pub new_volume: Option<f64>,
    pub added_volume: Option<f64>,
}

/// concentration after dilution, C1*V1 = C2*V2
pub fn dissolve(input: &DilutionInput) -> Result<f64, ChemError> {
    let new_volume = match (input.new_volume, input.added_volume) {
        (Some(volume), _) => volume,
        (None, Some(added)) => input.original_volume + added,
        (None, None) => return Err(ChemError::MissingParameter("new_volume".to_string())),
    };
    Ok(input.initial_concentration * input.original_volume / new_volume)
}

pub fn percent_error(theoretical: f64, actual: f64) -> f64 {
    (theoretical - actual).abs() / actual * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> ElementTable {
        ElementTable::builtin().unwrap()
    }

    #[test]
    fn test_solvents() {
        let water = solvent_constants("Water").unwrap();
        assert_eq!(water.kf, 1.86);
        assert_eq!(solvent_constants(" benzene ").unwrap().kb, 2.53);
        assert!(solvent_constants("mercury").is_none());
    }

    #[test]
    fn test_mercury_column() {
        assert_relative_eq!(mercury_height_to_atm(0.76), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_molality_conversions() {
        let elements = table();
        // 1 mol/kg NaCl: 58.44 g in 1058.44 g
        let percent = molality_to_percent_mass("NaCl", 1.0, &elements).unwrap();
        assert_relative_eq!(percent, 5.5214, epsilon = 1e-3);
        let back = percent_mass_to_molality("NaCl", percent, None, &elements).unwrap();
        assert_relative_eq!(back, 1.0, epsilon = 1e-9);

        let molarity = molality_to_molarity("NaCl", 1.0, Some(1.04), &elements).unwrap();
        assert_relative_eq!(molarity, 1.04 / 1.05844277, epsilon = 1e-6);
        // at density 1 molarity_to_molality inverts molality_to_molarity
        let m = molality_to_molarity("NaCl", 0.5, None, &elements).unwrap();
        let molality = molarity_to_molality("NaCl", m, None, &elements).unwrap();
        assert_relative_eq!(molality, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_percent_mass() {
        let elements = table();
        let direct = PercentMassInput {
            solution_mass: Some(200.0),
            solute_mass: Some(10.0),
            ..Default::default()
        };
        assert_relative_eq!(percent_mass(&direct, &elements).unwrap(), 5.0, epsilon = 1e-12);

        let from_moles = PercentMassInput {
            solvent_mass: Some(1000.0),
            solute_molecule: Some("NaCl".to_string()),
            solute_moles: Some(1.0),
            ..Default::default()
        };
        assert_relative_eq!(
            percent_mass(&from_moles, &elements).unwrap(),
            5.5214,
            epsilon = 1e-3
        );
        assert_eq!(
            percent_mass(&PercentMassInput::default(), &elements).unwrap_err(),
            ChemError::MissingParameter("solute_mass".to_string())
        );
    }

    #[test]
    fn test_dilution_and_error() {
        let diluted = dissolve(&DilutionInput {
            initial_concentration: 2.0,
            original_volume: 0.5,
            added_volume: Some(1.5),
            ..Default::default()
        })
        .unwrap();
        assert_relative_eq!(diluted, 0.5, epsilon = 1e-12);
        assert!(dissolve(&DilutionInput::default()).is_err());
        assert_relative_eq!(percent_error(9.5, 10.0), 5.0, epsilon = 1e-12);
    }
}
