use crate::chem_errors::ChemError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Raw row of the built-in periodic table, oxidation states kept as written: "5,4,3,2,-3"
pub struct ElementEntry {
    pub symbol: &'static str,
    pub atomic_weight: f64,
    pub oxidation_states: &'static str,
}

// Define a list of elements, their atomic weights and known oxidation states
const ELEMENTS: &[ElementEntry] = &[
    ElementEntry {
        symbol: "H",
        atomic_weight: 1.00794,
        oxidation_states: "1,-1",
    },
    ElementEntry {
        symbol: "He",
        atomic_weight: 4.002602,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Li",
        atomic_weight: 6.941,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Be",
        atomic_weight: 9.012182,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "B",
        atomic_weight: 10.811,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "C",
        atomic_weight: 12.0107,
        oxidation_states: "4,2,-4",
    },
    ElementEntry {
        symbol: "N",
        atomic_weight: 14.0067,
        oxidation_states: "5,4,3,2,-3",
    },
    ElementEntry {
        symbol: "O",
        atomic_weight: 15.9994,
        oxidation_states: "-2,-1",
    },
    ElementEntry {
        symbol: "F",
        atomic_weight: 18.9984032,
        oxidation_states: "-1",
    },
    ElementEntry {
        symbol: "Ne",
        atomic_weight: 20.1797,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Na",
        atomic_weight: 22.98976928,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Mg",
        atomic_weight: 24.305,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Al",
        atomic_weight: 26.9815386,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Si",
        atomic_weight: 28.0855,
        oxidation_states: "4,-4",
    },
    ElementEntry {
        symbol: "P",
        atomic_weight: 30.973762,
        oxidation_states: "5,3,-3",
    },
    ElementEntry {
        symbol: "S",
        atomic_weight: 32.065,
        oxidation_states: "6,4,2,-2",
    },
    ElementEntry {
        symbol: "Cl",
        atomic_weight: 35.453,
        oxidation_states: "7,5,3,1,-1",
    },
    ElementEntry {
        symbol: "Ar",
        atomic_weight: 39.948,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "K",
        atomic_weight: 39.0983,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Ca",
        atomic_weight: 40.078,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Sc",
        atomic_weight: 44.955912,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Ti",
        atomic_weight: 47.867,
        oxidation_states: "4,3,2",
    },
    ElementEntry {
        symbol: "V",
        atomic_weight: 50.9415,
        oxidation_states: "5,4,3,2",
    },
    ElementEntry {
        symbol: "Cr",
        atomic_weight: 51.9961,
        oxidation_states: "6,3,2",
    },
    ElementEntry {
        symbol: "Mn",
        atomic_weight: 54.938045,
        oxidation_states: "7,6,4,3,2",
    },
    ElementEntry {
        symbol: "Fe",
        atomic_weight: 55.845,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Co",
        atomic_weight: 58.933195,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Ni",
        atomic_weight: 58.6934,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Cu",
        atomic_weight: 63.546,
        oxidation_states: "2,1",
    },
    ElementEntry {
        symbol: "Zn",
        atomic_weight: 65.38,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Ga",
        atomic_weight: 69.723,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Ge",
        atomic_weight: 72.64,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "As",
        atomic_weight: 74.9216,
        oxidation_states: "5,3,-3",
    },
    ElementEntry {
        symbol: "Se",
        atomic_weight: 78.96,
        oxidation_states: "6,4,-2",
    },
    ElementEntry {
        symbol: "Br",
        atomic_weight: 79.904,
        oxidation_states: "7,5,3,1,-1",
    },
    ElementEntry {
        symbol: "Kr",
        atomic_weight: 83.798,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Rb",
        atomic_weight: 85.4678,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Sr",
        atomic_weight: 87.62,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Y",
        atomic_weight: 88.90585,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Zr",
        atomic_weight: 91.224,
        oxidation_states: "4",
    },
    ElementEntry {
        symbol: "Nb",
        atomic_weight: 92.90638,
        oxidation_states: "5,3",
    },
    ElementEntry {
        symbol: "Mo",
        atomic_weight: 95.96,
        oxidation_states: "6,5,4,3,2",
    },
    ElementEntry {
        symbol: "Tc",
        atomic_weight: 98.0,
        oxidation_states: "7,6,4",
    },
    ElementEntry {
        symbol: "Ru",
        atomic_weight: 101.07,
        oxidation_states: "8,6,4,3,2",
    },
    ElementEntry {
        symbol: "Rh",
        atomic_weight: 102.9055,
        oxidation_states: "4,3,2",
    },
    ElementEntry {
        symbol: "Pd",
        atomic_weight: 106.42,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "Ag",
        atomic_weight: 107.8682,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Cd",
        atomic_weight: 112.411,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "In",
        atomic_weight: 114.818,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Sn",
        atomic_weight: 118.71,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "Sb",
        atomic_weight: 121.76,
        oxidation_states: "5,3,-3",
    },
    ElementEntry {
        symbol: "Te",
        atomic_weight: 127.6,
        oxidation_states: "6,4,2,-2",
    },
    ElementEntry {
        symbol: "I",
        atomic_weight: 126.90447,
        oxidation_states: "7,5,1,-1",
    },
    ElementEntry {
        symbol: "Xe",
        atomic_weight: 131.293,
        oxidation_states: "8,6,4,2",
    },
    ElementEntry {
        symbol: "Cs",
        atomic_weight: 132.9054519,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Ba",
        atomic_weight: 137.327,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "La",
        atomic_weight: 138.90547,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Ce",
        atomic_weight: 140.116,
        oxidation_states: "4,3",
    },
    ElementEntry {
        symbol: "Pr",
        atomic_weight: 140.90765,
        oxidation_states: "4,3",
    },
    ElementEntry {
        symbol: "Nd",
        atomic_weight: 144.242,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Pm",
        atomic_weight: 145.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Sm",
        atomic_weight: 150.36,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Eu",
        atomic_weight: 151.964,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Gd",
        atomic_weight: 157.25,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Tb",
        atomic_weight: 158.92535,
        oxidation_states: "4,3",
    },
    ElementEntry {
        symbol: "Dy",
        atomic_weight: 162.5,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Ho",
        atomic_weight: 164.93032,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Er",
        atomic_weight: 167.259,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Tm",
        atomic_weight: 168.93421,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Yb",
        atomic_weight: 173.054,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Lu",
        atomic_weight: 174.9668,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Hf",
        atomic_weight: 178.49,
        oxidation_states: "4",
    },
    ElementEntry {
        symbol: "Ta",
        atomic_weight: 180.94788,
        oxidation_states: "5",
    },
    ElementEntry {
        symbol: "W",
        atomic_weight: 183.84,
        oxidation_states: "6,5,4,3,2",
    },
    ElementEntry {
        symbol: "Re",
        atomic_weight: 186.207,
        oxidation_states: "7,6,4,2,-1",
    },
    ElementEntry {
        symbol: "Os",
        atomic_weight: 190.23,
        oxidation_states: "8,6,4,3,2",
    },
    ElementEntry {
        symbol: "Ir",
        atomic_weight: 192.217,
        oxidation_states: "6,4,3,2",
    },
    ElementEntry {
        symbol: "Pt",
        atomic_weight: 195.084,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "Au",
        atomic_weight: 196.966569,
        oxidation_states: "3,1",
    },
    ElementEntry {
        symbol: "Hg",
        atomic_weight: 200.59,
        oxidation_states: "2,1",
    },
    ElementEntry {
        symbol: "Tl",
        atomic_weight: 204.3833,
        oxidation_states: "3,1",
    },
    ElementEntry {
        symbol: "Pb",
        atomic_weight: 207.2,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "Bi",
        atomic_weight: 208.9804,
        oxidation_states: "5,3",
    },
    ElementEntry {
        symbol: "Po",
        atomic_weight: 209.0,
        oxidation_states: "4,2",
    },
    ElementEntry {
        symbol: "At",
        atomic_weight: 210.0,
        oxidation_states: "7,5,3,1,-1",
    },
    ElementEntry {
        symbol: "Rn",
        atomic_weight: 222.0,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Fr",
        atomic_weight: 223.0,
        oxidation_states: "1",
    },
    ElementEntry {
        symbol: "Ra",
        atomic_weight: 226.0,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Ac",
        atomic_weight: 227.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Th",
        atomic_weight: 232.03806,
        oxidation_states: "4",
    },
    ElementEntry {
        symbol: "Pa",
        atomic_weight: 231.03588,
        oxidation_states: "5,4",
    },
    ElementEntry {
        symbol: "U",
        atomic_weight: 238.02891,
        oxidation_states: "6,5,4,3",
    },
    ElementEntry {
        symbol: "Np",
        atomic_weight: 237.0,
        oxidation_states: "6,5,4,3",
    },
    ElementEntry {
        symbol: "Pu",
        atomic_weight: 244.0,
        oxidation_states: "6,5,4,3",
    },
    ElementEntry {
        symbol: "Am",
        atomic_weight: 243.0,
        oxidation_states: "6,5,4,3",
    },
    ElementEntry {
        symbol: "Cm",
        atomic_weight: 247.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Bk",
        atomic_weight: 247.0,
        oxidation_states: "4,3",
    },
    ElementEntry {
        symbol: "Cf",
        atomic_weight: 251.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Es",
        atomic_weight: 252.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Fm",
        atomic_weight: 257.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Md",
        atomic_weight: 258.0,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "No",
        atomic_weight: 259.0,
        oxidation_states: "3,2",
    },
    ElementEntry {
        symbol: "Lr",
        atomic_weight: 262.0,
        oxidation_states: "3",
    },
    ElementEntry {
        symbol: "Rf",
        atomic_weight: 267.0,
        oxidation_states: "4",
    },
    ElementEntry {
        symbol: "Db",
        atomic_weight: 268.0,
        oxidation_states: "5",
    },
    ElementEntry {
        symbol: "Sg",
        atomic_weight: 271.0,
        oxidation_states: "6",
    },
    ElementEntry {
        symbol: "Bh",
        atomic_weight: 272.0,
        oxidation_states: "7",
    },
    ElementEntry {
        symbol: "Hs",
        atomic_weight: 270.0,
        oxidation_states: "8",
    },
    ElementEntry {
        symbol: "Mt",
        atomic_weight: 276.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Ds",
        atomic_weight: 281.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Rg",
        atomic_weight: 280.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Cn",
        atomic_weight: 285.0,
        oxidation_states: "2",
    },
    ElementEntry {
        symbol: "Nh",
        atomic_weight: 284.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Fl",
        atomic_weight: 289.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Mc",
        atomic_weight: 288.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Lv",
        atomic_weight: 293.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Ts",
        atomic_weight: 294.0,
        oxidation_states: "",
    },
    ElementEntry {
        symbol: "Og",
        atomic_weight: 294.0,
        oxidation_states: "",
    },
];

/// Element as used by the calculations: symbol, atomic weight and parsed oxidation states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    pub atomic_weight: f64,
    #[serde(
        deserialize_with = "states_from_str",
        serialize_with = "states_to_str",
        default
    )]
    pub oxidation_states: Vec<i32>,
}

fn split_states(raw: &str) -> Result<Vec<i32>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Parses a comma separated list of oxidation states, an empty string gives an empty set
pub fn parse_oxidation_states(symbol: &str, raw: &str) -> Result<Vec<i32>, ChemError> {
    split_states(raw).map_err(|_| ChemError::InvalidOxidationStates {
        symbol: symbol.to_string(),
        states: raw.to_string(),
    })
}

fn states_from_str<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    split_states(&raw).map_err(serde::de::Error::custom)
}

fn states_to_str<S>(states: &Vec<i32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let joined = states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

/// Read-only lookup table of elements by symbol
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    records: Vec<ElementRecord>,
    index: HashMap<String, usize>,
}

impl ElementTable {
    pub fn new(records: Vec<ElementRecord>) -> Self {
        let mut index = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            index.entry(record.symbol.clone()).or_insert(i);
        }
        Self { records, index }
    }

    /// Table built from the periodic table shipped with the crate
    pub fn builtin() -> Result<Self, ChemError> {
        let records = ELEMENTS
            .iter()
            .map(|e| {
                Ok(ElementRecord {
                    symbol: e.symbol.to_string(),
                    atomic_weight: e.atomic_weight,
                    oxidation_states: parse_oxidation_states(e.symbol, e.oxidation_states)?,
                })
            })
            .collect::<Result<Vec<_>, ChemError>>()?;
        Ok(Self::new(records))
    }

    /// Loads a JSON array of `{symbol, atomic_weight, oxidation_states}` records
    pub fn from_json_str(json: &str) -> Result<Self, ChemError> {
        let records: Vec<ElementRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn get(&self, symbol: &str) -> Result<&ElementRecord, ChemError> {
        self.index
            .get(symbol)
            .map(|&i| &self.records[i])
            .ok_or_else(|| ChemError::UnknownElement(symbol.to_string()))
    }

    pub fn atomic_weight(&self, symbol: &str) -> Result<f64, ChemError> {
        Ok(self.get(symbol)?.atomic_weight)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.iter()
    }

    pub fn to_json_string(&self) -> Result<String, ChemError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
