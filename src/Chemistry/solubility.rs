use crate::chem_errors::ChemError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_CHART: &str = include_str!("../data/solubility.json");

/// Solubility in water of the salt of a cation and an anion, e.g. Ag + Cl -> "insoluble".
/// Ions are written without their charge: "NH4", "Ag", "SO4", "CH3COO".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolubilityTable {
    chart: HashMap<String, HashMap<String, String>>,
}

impl SolubilityTable {
    pub fn builtin() -> Result<Self, ChemError> {
        Self::from_json_str(BUILTIN_CHART)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChemError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn lookup(&self, cation: &str, anion: &str) -> Option<&str> {
        self.chart
            .get(cation)
            .and_then(|anions| anions.get(anion))
            .map(String::as_str)
    }

    pub fn cations(&self) -> Vec<&str> {
        let mut cations: Vec<&str> = self.chart.keys().map(String::as_str).collect();
        cations.sort_unstable();
        cations
    }
}
