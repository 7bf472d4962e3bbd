/// Periodic table used by every calculation: symbols, atomic weights and oxidation states.
/// The built-in table can be replaced by a JSON file of the same records.
///
///  # Examples
/// ```
/// use ChemHelpers::Chemistry::elements::ElementTable;
/// let table = ElementTable::builtin().unwrap();
/// let iron = table.get("Fe").unwrap();
/// println!("{} {} {:?}", iron.symbol, iron.atomic_weight, iron.oxidation_states);
/// ```
pub mod elements;
/// Module to get the atomic composition of a chemical formula
///
///  # Examples
/// ```
/// use ChemHelpers::Chemistry::formula::parse_formula;
/// let composition = parse_formula("C6H12O6");
/// assert_eq!(composition["C"], 6);
/// ```
pub mod formula;
/// Module to calculate the molar mass, percent composition and empirical formula
///
///  # Examples
/// ```
/// use ChemHelpers::Chemistry::elements::ElementTable;
/// use ChemHelpers::Chemistry::molmass::{calculate_molar_mass, percent_composition};
/// let table = ElementTable::builtin().unwrap();
/// let (molar_mass, element_composition) = calculate_molar_mass("C6H8O6", &table).unwrap();
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// percent_composition("C6H8O6", &table).unwrap().pretty_print();
/// ```
pub mod molmass;
/// eng
/// Enumeration of oxidation states: every combination of the known oxidation states of the
/// elements of a compound whose weighted sum equals the charge of the compound.
/// Mixed-valence compounds can have several valid combinations, all of them are returned.
///
///  # Examples
/// ```
/// use ChemHelpers::Chemistry::elements::ElementTable;
/// use ChemHelpers::Chemistry::charges::ChargeBalanceSolver;
/// let table = ElementTable::builtin().unwrap();
/// let solver = ChargeBalanceSolver::new(&table);
/// for assignment in solver.solve("KMnO4", 0).unwrap() {
///     println!("{:?}", assignment.charge_of("Mn"));
/// }
/// ```
pub mod charges;
pub mod solubility;
pub mod solutions;
