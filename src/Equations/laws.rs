use super::relations::{RelationEntry, Rule};
use crate::Units::QuantityFamily::{Mass, Pressure, Temperature, TemperatureDifference, Volume};
use crate::chem_errors::ChemError;

pub const IDEAL_GAS_LAW: &str = "ideal gas law";
pub const FREEZING_POINT_DEPRESSION: &str = "freezing point depression";
pub const BOILING_POINT_ELEVATION: &str = "boiling point elevation";
pub const MOLALITY: &str = "molality";
pub const DENSITY: &str = "density";

/// gas constant, L*atm/(K*mol)
pub const R: f64 = 0.08206;

/// PV = nRT with P in atm, V in L, T in K
pub fn ideal_gas_law() -> Result<RelationEntry, ChemError> {
    RelationEntry::new(
        IDEAL_GAS_LAW,
        vec![
            (
                "P",
                Rule::new()
                    .convert("T", Temperature, "K")
                    .convert("V", Volume, "L")
                    .times("n")
                    .times(R)
                    .times("T")
                    .over("V")
                    .labelled("atm"),
            ),
            (
                "V",
                Rule::new()
                    .convert("T", Temperature, "K")
                    .convert("P", Pressure, "atm")
                    .times("n")
                    .times(R)
                    .times("T")
                    .over("P")
                    .labelled("L"),
            ),
            (
                "n",
                Rule::new()
                    .convert("T", Temperature, "K")
                    .convert("P", Pressure, "atm")
                    .convert("V", Volume, "L")
                    .times("P")
                    .times("V")
                    .over(R)
                    .over("T"),
            ),
            (
                "T",
                Rule::new()
                    .convert("P", Pressure, "atm")
                    .convert("V", Volume, "L")
                    .times("P")
                    .times("V")
                    .over(R)
                    .over("n")
                    .labelled("K"),
            ),
        ],
    )
}

/// dTf = -Kf * m, the shift comes out negative and in Celsius degrees
pub fn freezing_point_depression() -> Result<RelationEntry, ChemError> {
    RelationEntry::new(
        FREEZING_POINT_DEPRESSION,
        vec![
            (
                "Kf",
                Rule::new()
                    .convert("dTf", TemperatureDifference, "C")
                    .times(-1.0)
                    .times("dTf")
                    .over("m"),
            ),
            (
                "m",
                Rule::new()
                    .convert("dTf", TemperatureDifference, "C")
                    .times(-1.0)
                    .times("dTf")
                    .over("Kf"),
            ),
            (
                "dTf",
                Rule::new().times(-1.0).times("Kf").times("m").labelled("C"),
            ),
        ],
    )
}

/// dTb = Kb * m
pub fn boiling_point_elevation() -> Result<RelationEntry, ChemError> {
    RelationEntry::new(
        BOILING_POINT_ELEVATION,
        vec![
            (
                "Kb",
                Rule::new()
                    .convert("dTb", TemperatureDifference, "C")
                    .times("dTb")
                    .over("m"),
            ),
            (
                "m",
                Rule::new()
                    .convert("dTb", TemperatureDifference, "C")
                    .times("dTb")
                    .over("Kb"),
            ),
            ("dTb", Rule::new().times("Kb").times("m").labelled("C")),
        ],
    )
}

/// m = n / mass, solvent mass in kg
pub fn molality() -> Result<RelationEntry, ChemError> {
    RelationEntry::new(
        MOLALITY,
        vec![
            (
                "n",
                Rule::new().convert("mass", Mass, "kg").times("m").times("mass"),
            ),
            ("mass", Rule::new().times("n").over("m").labelled("kg")),
            (
                "m",
                Rule::new().convert("mass", Mass, "kg").times("n").over("mass"),
            ),
        ],
    )
}

/// d = m / V with m in g and V in mL, so d is in g/mL.
/// Bare numbers are taken in these units: a bare V is millilitres, not litres as in the
/// volume converter; write "1 L" to pass litres.
pub fn density() -> Result<RelationEntry, ChemError> {
    RelationEntry::new(
        DENSITY,
        vec![
            (
                "m",
                Rule::new()
                    .convert("V", Volume, "mL")
                    .times("d")
                    .times("V")
                    .labelled("g"),
            ),
            (
                "V",
                Rule::new()
                    .convert("m", Mass, "g")
                    .times("m")
                    .over("d")
                    .labelled("mL"),
            ),
            (
                "d",
                Rule::new()
                    .convert("m", Mass, "g")
                    .convert("V", Volume, "mL")
                    .times("m")
                    .over("V"),
            ),
        ],
    )
}

pub fn standard_relations() -> Result<Vec<RelationEntry>, ChemError> {
    Ok(vec![
        ideal_gas_law()?,
        freezing_point_depression()?,
        boiling_point_elevation()?,
        molality()?,
        density()?,
    ])
}
