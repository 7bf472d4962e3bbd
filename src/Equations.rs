/// Declarative description of physical laws: a relation is a set of roles (P, V, n, T...),
/// each with a rule computing it as a product/quotient of the other roles and constants,
/// plus the unit conversions to apply to its inputs and the unit label of its output.
pub mod relations;
/// The laws shipped with the crate: ideal gas, freezing point depression, boiling point
/// elevation, molality and density.
pub mod laws;
/// eng
/// Generic evaluator of relations: finds the one unknown role among the known parameters,
/// normalises the units of the inputs and evaluates the rule of the unknown role.
///
///  # Examples
/// ```
/// use ChemHelpers::Equations::relations::RelationRegistry;
/// use ChemHelpers::Equations::solver::{EquationSolver, known_params};
/// let relation = RelationRegistry::global().get("ideal gas law").unwrap();
/// let known = known_params([("n", 2.0.into()), ("T", "290K".into()), ("V", "2 L".into())]);
/// let solution = EquationSolver::new(relation).solve(&known).unwrap();
/// assert_eq!(solution.solved_role, "P");
/// println!("P = {}", solution.value);
/// ```
pub mod solver;
