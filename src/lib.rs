#[allow(non_snake_case)]
pub mod Chemistry;
#[allow(non_snake_case)]
pub mod Equations;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Units;
pub mod chem_errors;
pub mod chem_lib_api;
pub mod settings;
