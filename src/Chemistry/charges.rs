use super::elements::ElementTable;
use super::formula::parse_formula;
use crate::chem_errors::ChemError;
use log::trace;
use prettytable::{Table, row};
use serde::Serialize;

/// charge assumed for a compound when the caller does not give one
pub const DEFAULT_MOLECULE_CHARGE: i64 = 1;

/// One element of a compound with the oxidation state chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeChoice {
    pub element: String,
    pub charge: i32,
    pub charge_multiplier: usize,
}

impl ChargeChoice {
    fn overflow(&self) -> ChemError {
        ChemError::ChargeOverflow {
            element: self.element.clone(),
            coefficient: self.charge_multiplier,
        }
    }

    /// charge times number of atoms, an error if it does not fit in i64
    pub fn contribution(&self) -> Result<i64, ChemError> {
        let atoms = i64::try_from(self.charge_multiplier).map_err(|_| self.overflow())?;
        i64::from(self.charge)
            .checked_mul(atoms)
            .ok_or_else(|| self.overflow())
    }
}

/// A full choice of oxidation states, one per element of the composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ChargeAssignment {
    pub choices: Vec<ChargeChoice>,
}

impl ChargeAssignment {
    pub fn total_charge(&self) -> Result<i64, ChemError> {
        self.choices.iter().try_fold(0i64, |total, choice| {
            total
                .checked_add(choice.contribution()?)
                .ok_or_else(|| choice.overflow())
        })
    }

    /// oxidation state chosen for an element, if the element is part of the assignment
    pub fn charge_of(&self, element: &str) -> Option<i32> {
        self.choices
            .iter()
            .find(|c| c.element == element)
            .map(|c| c.charge)
    }
}

pub fn assignments_table(assignments: &[ChargeAssignment]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Element", "Oxidation state", "Atoms", "Charge"]);
    for (i, assignment) in assignments.iter().enumerate() {
        for choice in &assignment.choices {
            table.add_row(row![
                i + 1,
                choice.element,
                choice.charge,
                choice.charge_multiplier,
                choice
                    .contribution()
                    .map_or_else(|e| e.to_string(), |c| c.to_string())
            ]);
        }
    }
    table
}

/// Enumerates the oxidation-state assignments of a compound that add up to a net charge.
///
/// Every element contributes a dimension with one choice per oxidation state listed in the
/// element table; the partial assignments are extended dimension by dimension. A partial
/// assignment is dropped as soon as the remaining dimensions can no longer bring its sum
/// to the target, which leaves the same survivors as filtering the full cartesian product.
/// Duplicate states in the table are kept as distinct choices.
pub struct ChargeBalanceSolver<'a> {
    elements: &'a ElementTable,
}

impl<'a> ChargeBalanceSolver<'a> {
    pub fn new(elements: &'a ElementTable) -> Self {
        Self { elements }
    }

    /// one dimension per element: every possible choice with its contribution to the charge
    fn dimensions(&self, formula: &str) -> Result<Vec<Vec<(ChargeChoice, i64)>>, ChemError> {
        let composition = parse_formula(formula);
        let mut dimensions = Vec::with_capacity(composition.len());
        for (symbol, coefficient) in composition {
            let record = self.elements.get(&symbol)?;
            let dimension = record
                .oxidation_states
                .iter()
                .map(|&charge| {
                    let choice = ChargeChoice {
                        element: symbol.clone(),
                        charge,
                        charge_multiplier: coefficient,
                    };
                    let contribution = choice.contribution()?;
                    Ok((choice, contribution))
                })
                .collect::<Result<Vec<_>, ChemError>>()?;
            dimensions.push(dimension);
        }
        Ok(dimensions)
    }

    /// Assignments of `formula` with the default net charge of +1
    pub fn solve_default(&self, formula: &str) -> Result<Vec<ChargeAssignment>, ChemError> {
        self.solve(formula, DEFAULT_MOLECULE_CHARGE)
    }

    pub fn solve(
        &self,
        formula: &str,
        target_charge: i64,
    ) -> Result<Vec<ChargeAssignment>, ChemError> {
        let dimensions = self.dimensions(formula)?;

        // reachable range of the dimensions that are still to be added
        let n = dimensions.len();
        let mut rest_min = vec![0i64; n + 1];
        let mut rest_max = vec![0i64; n + 1];
        for i in (0..n).rev() {
            let Some((first, _)) = dimensions[i].first() else {
                rest_min[i] = rest_min[i + 1];
                rest_max[i] = rest_max[i + 1];
                continue;
            };
            let contributions = dimensions[i].iter().map(|(_, contribution)| *contribution);
            rest_min[i] = rest_min[i + 1]
                .checked_add(contributions.clone().min().unwrap_or(0))
                .ok_or_else(|| first.overflow())?;
            rest_max[i] = rest_max[i + 1]
                .checked_add(contributions.max().unwrap_or(0))
                .ok_or_else(|| first.overflow())?;
        }

        let mut partials: Vec<(Vec<ChargeChoice>, i64)> = vec![(Vec::new(), 0)];
        for (i, dimension) in dimensions.iter().enumerate() {
            let mut extended = Vec::with_capacity(partials.len() * dimension.len());
            for (choices, sum) in &partials {
                for (choice, contribution) in dimension {
                    let new_sum = sum
                        .checked_add(*contribution)
                        .ok_or_else(|| choice.overflow())?;
                    let (Some(low), Some(high)) = (
                        new_sum.checked_add(rest_min[i + 1]),
                        new_sum.checked_add(rest_max[i + 1]),
                    ) else {
                        return Err(choice.overflow());
                    };
                    let reachable = low <= target_charge && target_charge <= high;
                    if !reachable {
                        continue;
                    }
                    let mut next = choices.clone();
                    next.push(choice.clone());
                    extended.push((next, new_sum));
                }
            }
            trace!(
                "{}: {} partial assignments after {} of {} elements",
                formula,
                extended.len(),
                i + 1,
                n
            );
            partials = extended;
        }

        Ok(partials
            .into_iter()
            .filter(|(_, sum)| *sum == target_charge)
            .map(|(choices, _)| ChargeAssignment { choices })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chemistry::elements::ElementRecord;
    use std::collections::HashSet;

    fn table() -> ElementTable {
        ElementTable::builtin().unwrap()
    }

    /// unpruned cartesian product, used as the reference result
    fn brute_force(elements: &ElementTable, formula: &str, target: i64) -> Vec<ChargeAssignment> {
        let dimensions = ChargeBalanceSolver::new(elements).dimensions(formula).unwrap();
        let mut product: Vec<Vec<ChargeChoice>> = vec![vec![]];
        for dimension in dimensions {
            product = product
                .iter()
                .flat_map(|partial| {
                    dimension.iter().map(move |(choice, _)| {
                        let mut next = partial.clone();
                        next.push(choice.clone());
                        next
                    })
                })
                .collect();
        }
        product
            .into_iter()
            .map(|choices| ChargeAssignment { choices })
            .filter(|a| a.total_charge().unwrap() == target)
            .collect()
    }

    #[test]
    fn test_single_states_give_at_most_one_assignment() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        let result = solver.solve("NaF", 0).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].charge_of("Na"), Some(1));
        assert_eq!(result[0].charge_of("F"), Some(-1));
        assert!(solver.solve("NaF", 2).unwrap().is_empty());
        assert!(solver.solve("MgF", 0).unwrap().is_empty());
    }

    #[test]
    fn test_multiple_valid_splits() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        let result = solver.solve("NO2", 0).unwrap();
        let nitrogen: HashSet<i32> = result.iter().filter_map(|a| a.charge_of("N")).collect();
        assert_eq!(nitrogen, HashSet::from([4, 2]));

        let sulfate = solver.solve("SO4", -2).unwrap();
        assert!(sulfate
            .iter()
            .any(|a| a.charge_of("S") == Some(6) && a.charge_of("O") == Some(-2)));
        for assignment in &sulfate {
            assert_eq!(assignment.total_charge().unwrap(), -2);
        }
    }

    #[test]
    fn test_default_charge_is_plus_one() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        let ammonium = solver.solve_default("NH4").unwrap();
        assert!(ammonium
            .iter()
            .any(|a| a.charge_of("N") == Some(-3) && a.charge_of("H") == Some(1)));
        assert_eq!(ammonium, solver.solve("NH4", 1).unwrap());
    }

    #[test]
    fn test_matches_unpruned_product() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        for (formula, target) in [
            ("KMnO4", 0),
            ("Fe2O3", 0),
            ("H2SO4", 0),
            ("NaClO3", 0),
            ("Cr2O7", -2),
            ("CH3COOH", 0),
            ("NH4", 1),
        ] {
            let pruned = solver.solve(formula, target).unwrap();
            assert_eq!(pruned, brute_force(&elements, formula, target), "{}", formula);
        }
    }

    #[test]
    fn test_states_come_from_the_table() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        for assignment in solver.solve("KClO4", 0).unwrap() {
            for choice in &assignment.choices {
                let allowed = &elements.get(&choice.element).unwrap().oxidation_states;
                assert!(allowed.contains(&choice.charge));
            }
        }
    }

    #[test]
    fn test_edge_cases() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        // an element without oxidation states empties the product
        assert!(solver.solve("NeO", 0).unwrap().is_empty());
        // an empty formula has exactly the empty assignment, with charge 0
        assert_eq!(solver.solve("", 0).unwrap(), vec![ChargeAssignment::default()]);
        assert!(solver.solve("", 1).unwrap().is_empty());
        assert_eq!(
            solver.solve("QqO", 0).unwrap_err(),
            ChemError::UnknownElement("Qq".to_string())
        );
    }

    #[test]
    fn test_duplicate_states_are_distinct_choices() {
        let elements = ElementTable::new(vec![
            ElementRecord {
                symbol: "A".to_string(),
                atomic_weight: 1.0,
                oxidation_states: vec![1, 1],
            },
            ElementRecord {
                symbol: "B".to_string(),
                atomic_weight: 1.0,
                oxidation_states: vec![-1],
            },
        ]);
        let result = ChargeBalanceSolver::new(&elements).solve("AB", 0).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(assignments_table(&result).len(), 5);
    }

    #[test]
    fn test_huge_coefficients_are_rejected() {
        let elements = table();
        let solver = ChargeBalanceSolver::new(&elements);
        // too long for usize, saturates in the parser and must not wrap to -1
        assert_eq!(
            solver.solve("F99999999999999999999", 1).unwrap_err(),
            ChemError::ChargeOverflow {
                element: "F".to_string(),
                coefficient: usize::MAX
            }
        );
        // fits in i64 but the product with the oxidation state does not
        assert!(matches!(
            solver.solve("Cl4611686018427387904", 0),
            Err(ChemError::ChargeOverflow { .. })
        ));
        // each contribution fits, their sum does not
        assert!(matches!(
            solver.solve("Na9223372036854775807K9223372036854775807", 0),
            Err(ChemError::ChargeOverflow { .. })
        ));
        let choice = ChargeChoice {
            element: "Cl".to_string(),
            charge: 7,
            charge_multiplier: usize::MAX,
        };
        assert!(choice.contribution().is_err());
        assert!(
            ChargeAssignment {
                choices: vec![choice]
            }
            .total_charge()
            .is_err()
        );
        // large but representable coefficients still balance
        let result = solver.solve("Na1000000000000F1000000000000", 0).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_charge().unwrap(), 0);
    }
}
