use crate::Units::QuantityFamily;
use thiserror::Error;

/// error types shared by every calculation of the crate
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChemError {
    #[error("{input:?} is not a valid {family}")]
    MalformedQuantity {
        input: String,
        family: QuantityFamily,
    },
    #[error("unknown {family} unit: {unit:?}")]
    UnknownUnit { unit: String, family: QuantityFamily },
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error("relation {relation:?} needs exactly one unknown role, found {missing:?}")]
    AmbiguousOrCompleteParameters {
        relation: String,
        missing: Vec<String>,
    },
    #[error("unknown relation: {0}")]
    UnknownRelation(String),
    #[error("parameter {role} = {value:?} is not a number")]
    NonNumericParameter { role: String, value: String },
    #[error("relation {relation:?} is inconsistent: {reason}")]
    InvalidRelation { relation: String, reason: String },
    #[error("oxidation states {states:?} of {symbol} are not comma separated integers")]
    InvalidOxidationStates { symbol: String, states: String },
    #[error("charge of {element} x{coefficient} does not fit in a 64-bit integer")]
    ChargeOverflow { element: String, coefficient: usize },
    #[error("missing parameter: {0}")]
    MissingParameter(String),
    #[error("failed to load data table: {0}")]
    DataTable(String),
}

impl From<std::io::Error> for ChemError {
    fn from(err: std::io::Error) -> Self {
        ChemError::DataTable(err.to_string())
    }
}

impl From<serde_json::Error> for ChemError {
    fn from(err: serde_json::Error) -> Self {
        ChemError::DataTable(err.to_string())
    }
}
