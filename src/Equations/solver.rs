use super::relations::{RelationEntry, Rule, Term};
use crate::Units::{Quantity, convert};
use crate::chem_errors::ChemError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value of a role: a bare number (already in the canonical unit) or a string with a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// numeric part of the value, "23.8atm" gives 23.8
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(*value),
            ParamValue::Text(text) => Quantity::magnitude(text),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        ParamValue::Text(text)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamValue::Number(value) => write!(f, "{}", value),
            ParamValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// role name -> value supplied by the caller
pub type KnownParams = HashMap<String, ParamValue>;

/// Builds KnownParams from pairs, e.g. `known_params([("n", 2.0.into()), ("T", "290K".into())])`
pub fn known_params<const N: usize>(pairs: [(&str, ParamValue); N]) -> KnownParams {
    pairs
        .into_iter()
        .map(|(role, value)| (role.to_string(), value))
        .collect()
}

/// which role was computed and its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub solved_role: String,
    pub value: ParamValue,
}

/// Solves a relation for the single role that is absent from the known parameters.
///
/// The known values the rule reads are first copied into a map of plain numbers: values of
/// roles with a declared conversion are converted to the canonical unit when they carry a
/// unit, bare numbers (also written as text, "2") are taken as already canonical, and any
/// other text is an error.
/// Then the product of the numerator terms is divided by the product of the denominator
/// terms. No rounding is done and a zero denominator is not guarded: the result is then
/// infinite or NaN, as floating point division gives it.
pub struct EquationSolver<'a> {
    relation: &'a RelationEntry,
}

impl<'a> EquationSolver<'a> {
    pub fn new(relation: &'a RelationEntry) -> Self {
        Self { relation }
    }

    /// the one role of the relation without a known value
    pub fn missing_role(&self, known: &KnownParams) -> Result<&'a str, ChemError> {
        let missing: Vec<&'a str> = self
            .relation
            .roles()
            .filter(|role| !known.contains_key(*role))
            .collect();
        match missing.as_slice() {
            [role] => Ok(*role),
            _ => Err(ChemError::AmbiguousOrCompleteParameters {
                relation: self.relation.name().to_string(),
                missing: missing.iter().map(|r| r.to_string()).collect(),
            }),
        }
    }

    /// numeric values, in canonical units, of the roles read by `rule`
    pub fn normalize(
        &self,
        rule: &Rule,
        known: &KnownParams,
    ) -> Result<HashMap<String, f64>, ChemError> {
        let mut normalized = HashMap::new();
        for role in rule.referenced_roles() {
            let value = known
                .get(role)
                .ok_or_else(|| ChemError::MissingParameter(role.to_string()))?;
            // unitless text like "2" counts as a bare number whether or not a conversion is declared
            let number = match (value, rule.conversion_for(role)) {
                (ParamValue::Number(number), _) => *number,
                (ParamValue::Text(text), conversion) => match (text.trim().parse::<f64>(), conversion) {
                    (Ok(number), _) => number,
                    (Err(_), Some(conversion)) => {
                        convert(conversion.family, text, &conversion.unit)?
                    }
                    (Err(_), None) => {
                        return Err(ChemError::NonNumericParameter {
                            role: role.to_string(),
                            value: text.clone(),
                        });
                    }
                },
            };
            normalized.insert(role.to_string(), number);
        }
        Ok(normalized)
    }

    fn product(terms: &[Term], values: &HashMap<String, f64>) -> Result<f64, ChemError> {
        terms.iter().try_fold(1.0, |acc, term| match term {
            Term::Constant(constant) => Ok(acc * constant),
            Term::Role(role) => values
                .get(role)
                .map(|value| acc * value)
                .ok_or_else(|| ChemError::MissingParameter(role.clone())),
        })
    }

    /// evaluates a rule over already normalised values
    pub fn evaluate(rule: &Rule, values: &HashMap<String, f64>) -> Result<f64, ChemError> {
        Ok(Self::product(&rule.numerator, values)? / Self::product(&rule.denominator, values)?)
    }

    pub fn solve(&self, known: &KnownParams) -> Result<Solution, ChemError> {
        let role = self.missing_role(known)?;
        let rule = self
            .relation
            .rule(role)
            .ok_or_else(|| ChemError::MissingParameter(role.to_string()))?;
        let normalized = self.normalize(rule, known)?;
        let value = Self::evaluate(rule, &normalized)?;
        debug!(
            "{}: solved {} = {} from {:?}",
            self.relation.name(),
            role,
            value,
            normalized
        );
        if !value.is_finite() {
            warn!(
                "{}: {} evaluated to {}, a denominator term is zero",
                self.relation.name(),
                role,
                value
            );
        }
        let value = match &rule.output_unit {
            Some(unit) => ParamValue::Text(format!("{}{}", value, unit)),
            None => ParamValue::Number(value),
        };
        Ok(Solution {
            solved_role: role.to_string(),
            value,
        })
    }

    /// the known parameters extended with the solved role
    pub fn complete(&self, mut known: KnownParams) -> Result<KnownParams, ChemError> {
        let solution = self.solve(&known)?;
        known.insert(solution.solved_role, solution.value);
        Ok(known)
    }
}
