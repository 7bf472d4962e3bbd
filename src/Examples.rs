pub mod chem_examples;
