//! # Chemistry calculation API
//!
//! One entry point for callers that only need numbers: molar masses, percent compositions,
//! physical laws solved for their unknown, unit conversion, oxidation states and solubility.
//! The element and solubility tables are loaded once into a [`ChemData`] and shared read-only.
//!
//! ```rust
//! use ChemHelpers::chem_lib_api::ChemData;
//! use ChemHelpers::Equations::solver::known_params;
//!
//! let data = ChemData::global();
//! println!("M(H2SO4) = {}", data.molar_mass("H2SO4").unwrap());
//! let known = known_params([("n", 2.0.into()), ("T", "290K".into()), ("V", "2 L".into())]);
//! let solution = data.solve("ideal gas law", &known).unwrap();
//! println!("{} = {}", solution.solved_role, solution.value);
//! ```

use crate::Chemistry::charges::{ChargeAssignment, ChargeBalanceSolver};
use crate::Chemistry::elements::ElementTable;
use crate::Chemistry::molmass::{self, PercentComposition};
use crate::Chemistry::solubility::SolubilityTable;
use crate::Equations::relations::RelationRegistry;
use crate::Equations::solver::{EquationSolver, KnownParams, Solution};
use crate::Units::{self, QuantityFamily};
use crate::chem_errors::ChemError;
use crate::settings::Settings;
use log::info;
use std::sync::OnceLock;

/// Element and solubility tables used by the calculations
#[derive(Debug, Clone)]
pub struct ChemData {
    pub elements: ElementTable,
    pub solubility: SolubilityTable,
}

impl ChemData {
    /// tables embedded in the crate
    pub fn builtin() -> Result<Self, ChemError> {
        Ok(Self {
            elements: ElementTable::builtin()?,
            solubility: SolubilityTable::builtin()?,
        })
    }

    /// tables from the files named in the settings, embedded tables where no file is named
    pub fn from_settings(settings: &Settings) -> Result<Self, ChemError> {
        let elements = match &settings.elements_file {
            Some(path) => {
                info!("loading element table from {}", path);
                ElementTable::from_file(path)?
            }
            None => ElementTable::builtin()?,
        };
        let solubility = match &settings.solubility_file {
            Some(path) => {
                info!("loading solubility table from {}", path);
                SolubilityTable::from_file(path)?
            }
            None => SolubilityTable::builtin()?,
        };
        Ok(Self {
            elements,
            solubility,
        })
    }

    /// process-wide instance with the embedded tables
    pub fn global() -> &'static ChemData {
        static DATA: OnceLock<ChemData> = OnceLock::new();
        DATA.get_or_init(|| Self::builtin().expect("embedded tables are valid JSON"))
    }

    pub fn molar_mass(&self, formula: &str) -> Result<f64, ChemError> {
        molmass::molar_mass(formula, &self.elements)
    }

    pub fn percent_composition(&self, formula: &str) -> Result<PercentComposition, ChemError> {
        molmass::percent_composition(formula, &self.elements)
    }

    /// Solves the named built-in law for the one role missing from `known`
    pub fn solve(&self, relation_name: &str, known: &KnownParams) -> Result<Solution, ChemError> {
        let relation = RelationRegistry::global().get(relation_name)?;
        EquationSolver::new(relation).solve(known)
    }

    /// Converts a value like "1.5 kg" of the given family to `target_unit`
    pub fn convert(
        &self,
        family: QuantityFamily,
        value: &str,
        target_unit: &str,
    ) -> Result<f64, ChemError> {
        Units::convert(family, value, target_unit)
    }

    pub fn charge_assignments(
        &self,
        formula: &str,
        target_charge: i64,
    ) -> Result<Vec<ChargeAssignment>, ChemError> {
        ChargeBalanceSolver::new(&self.elements).solve(formula, target_charge)
    }

    /// charge assignments for the default net charge of +1
    pub fn charge_assignments_default(
        &self,
        formula: &str,
    ) -> Result<Vec<ChargeAssignment>, ChemError> {
        ChargeBalanceSolver::new(&self.elements).solve_default(formula)
    }

    pub fn solubility_lookup(&self, cation: &str, anion: &str) -> Option<&str> {
        self.solubility.lookup(cation, anion)
    }
}
