use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// element symbol -> number of atoms in one formula unit
pub type CompositionMap = BTreeMap<String, usize>;

fn element_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][^A-Z]*").expect("valid regex"))
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("valid regex"))
}

fn coefficient_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("valid regex"))
}

/// Function to get the atomic composition of a formula like "C6H8O6".
///
/// The formula is eaten run by run: a run is a capital letter followed by everything up to
/// the next capital letter. The letters at the start of a run are the element name, the
/// first group of digits in the run is its coefficient (1 if there is none). Repeated
/// elements are summed, so "H2H3" gives {H: 5}.
///
/// Parsing is permissive: a formula that does not start with a capital letter gives an
/// empty map, and brackets or other characters inside a run are simply absorbed by that
/// run ("Na(NO3)2" reads as Na, N and O3; multipliers after brackets are not expanded).
/// Coefficients too large for `usize` saturate at `usize::MAX`; the charge solver rejects
/// them with `ChargeOverflow`.
pub fn parse_formula(formula: &str) -> CompositionMap {
    let mut counts = CompositionMap::new();
    let mut rest = formula;
    while let Some(found) = element_run_regex().find(rest) {
        let run = found.as_str();
        let element = name_regex().find(run).map_or(run, |m| m.as_str());
        let count = coefficient_regex()
            .find(run)
            .map_or(1, |m| m.as_str().parse().unwrap_or(usize::MAX));
        let entry = counts.entry(element.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
        rest = &rest[run.len()..];
    }
    counts
}
