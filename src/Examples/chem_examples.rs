use crate::Chemistry::charges::assignments_table;
use crate::Chemistry::molmass::{
    calculate_molar_mass, calculate_molar_mass_of_vector_of_subs, empirical_formula,
    mole_fractions_from_mass, number_of_moles,
};
use crate::Chemistry::solutions::{
    DilutionInput, PercentMassInput, dissolve, mercury_height_to_atm, molality_to_molarity,
    percent_error, percent_mass, solvent_constants,
};
use crate::Equations::relations::RelationRegistry;
use crate::Equations::solver::{EquationSolver, known_params};
use crate::Units::{QuantityFamily, convert, convert_temperature, convert_temperature_difference};
use crate::chem_lib_api::ChemData;
use log::error;

pub fn chem_examples(task: usize) {
    //
    let data = ChemData::global();
    match task {
        0 => {
            // molar masses and composition
            let (M, composition) = calculate_molar_mass("C6H12O6", &data.elements).unwrap();
            println!("glucose: {:?}, M = {} g/mol", composition, M);
            let substances = ["H2O", "CO2", "NaCl", "CaCO3"];
            let masses =
                calculate_molar_mass_of_vector_of_subs(&substances, &data.elements).unwrap();
            for (substance, M) in substances.iter().zip(masses.iter()) {
                println!("{}: {} g/mol", substance, M);
            }
            data.percent_composition("KMnO4").unwrap().pretty_print();
            let ratios =
                empirical_formula(&[("C", 40.0), ("H", 6.71), ("O", 53.29)], &data.elements)
                    .unwrap();
            println!("empirical formula ratios: {:?}", ratios);
            let n = number_of_moles("H2O", 36.0, &data.elements).unwrap();
            println!("36 g of water is {} mol", n);
            let fractions =
                mole_fractions_from_mass(&[("H2O", "90 g"), ("C2H6O", "0.046 kg")], &data.elements)
                    .unwrap();
            println!("mole fractions: {:?}", fractions);
        }
        1 => {
            // unit conversion
            for (family, input, target) in [
                (QuantityFamily::Mass, "1 kg", "g"),
                (QuantityFamily::Mass, "1 lb", "oz"),
                (QuantityFamily::Volume, "2 gal", "L"),
                (QuantityFamily::Pressure, "760 mmHg", "kPa"),
                (QuantityFamily::Time, "1 day", "min"),
            ] {
                match convert(family, input, target) {
                    Ok(value) => println!("{} ({}) = {} {}", input, family, value, target),
                    Err(e) => error!("{}", e),
                }
            }
            println!("100 C = {} F", convert_temperature("100 C", "F").unwrap());
            println!(
                "a 100 C difference is {} F",
                convert_temperature_difference("100 C", "F").unwrap()
            );
            println!("0.76 m of mercury = {} atm", mercury_height_to_atm(0.76));
            if let Err(e) = convert(QuantityFamily::Mass, "ten grams", "g") {
                println!("expected error: {}", e);
            }
        }
        2 => {
            // physical laws
            let registry = RelationRegistry::global();
            println!("relations on board: {:?}", registry.names());
            let ideal_gas = registry.get("ideal gas law").unwrap();
            let solver = EquationSolver::new(ideal_gas);
            let known = known_params([("n", 2.0.into()), ("T", "290K".into()), ("V", "2 L".into())]);
            let solution = solver.solve(&known).unwrap();
            println!("{} = {}", solution.solved_role, solution.value);
            println!("full set: {:?}", solver.complete(known).unwrap());

            let water = solvent_constants("water").unwrap();
            let known = known_params([("Kf", water.kf.into()), ("m", 0.5.into())]);
            let shift = data.solve("freezing point depression", &known).unwrap();
            println!("freezing point shift of 0.5 mol/kg in water: {}", shift.value);

            let known = known_params([("m", "5 g".into()), ("V", "2 mL".into())]);
            let density = data.solve("density", &known).unwrap();
            println!("density: {} g/mL", density.value);

            let known = known_params([("n", 1.0.into()), ("V", 1.0.into())]);
            if let Err(e) = solver.solve(&known) {
                println!("expected error: {}", e);
            }
        }
        3 => {
            // oxidation states
            for (formula, charge) in [("KMnO4", 0), ("Fe3O4", 0), ("SO4", -2), ("NH4", 1)] {
                let assignments = data.charge_assignments(formula, charge).unwrap();
                println!("{} with charge {}: {} assignments", formula, charge, assignments.len());
                assignments_table(&assignments).printstd();
            }
        }
        4 => {
            // solutions and solubility
            let w = percent_mass(
                &PercentMassInput {
                    solvent_mass: Some(95.0),
                    solute_molecule: Some("NaCl".to_string()),
                    solute_moles: Some(0.1),
                    ..PercentMassInput::default()
                },
                &data.elements,
            )
            .unwrap();
            println!("NaCl mass percent: {}", w);
            let diluted = dissolve(&DilutionInput {
                initial_concentration: 12.0,
                original_volume: 0.05,
                added_volume: Some(0.55),
                ..DilutionInput::default()
            })
            .unwrap();
            println!("12 M stock, 50 mL diluted with 550 mL: {} M", diluted);
            println!(
                "molarity of 1 mol/kg NaCl: {}",
                molality_to_molarity("NaCl", 1.0, Some(1.04), &data.elements).unwrap()
            );
            println!("percent error: {}", percent_error(9.81, 9.7));
            for (cation, anion) in [("Na", "Cl"), ("Ag", "Cl"), ("Ba", "SO4")] {
                println!(
                    "{}{}: {:?}",
                    cation,
                    anion,
                    data.solubility_lookup(cation, anion)
                );
            }
        }
        _ => {
            println!("no example with number {}", task);
        }
    }
}
