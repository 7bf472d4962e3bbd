use crate::Units::QuantityFamily;
use crate::chem_errors::ChemError;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Factor of a product: either a role of the relation or a literal constant
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Role(String),
    Constant(f64),
}

impl From<&str> for Term {
    fn from(role: &str) -> Self {
        Term::Role(role.to_string())
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Constant(value)
    }
}

/// Unit normalisation applied to a known role before evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct PreConversion {
    pub role: String,
    pub family: QuantityFamily,
    pub unit: String,
}

/// How one role is computed from the others: product(numerator) / product(denominator)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub conversions: Vec<PreConversion>,
    pub numerator: Vec<Term>,
    pub denominator: Vec<Term>,
    pub output_unit: Option<String>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    /// convert `role` to `unit` of `family` before evaluating
    pub fn convert(mut self, role: &str, family: QuantityFamily, unit: &str) -> Self {
        self.conversions.push(PreConversion {
            role: role.to_string(),
            family,
            unit: unit.to_string(),
        });
        self
    }

    pub fn times<T: Into<Term>>(mut self, term: T) -> Self {
        self.numerator.push(term.into());
        self
    }

    pub fn over<T: Into<Term>>(mut self, term: T) -> Self {
        self.denominator.push(term.into());
        self
    }

    /// unit label appended to the result, "atm" turns 2.5 into "2.5atm"
    pub fn labelled(mut self, unit: &str) -> Self {
        self.output_unit = Some(unit.to_string());
        self
    }

    pub fn conversion_for(&self, role: &str) -> Option<&PreConversion> {
        self.conversions.iter().find(|c| c.role == role)
    }

    /// roles the rule reads, in numerator then denominator order
    pub fn referenced_roles(&self) -> Vec<&str> {
        let mut roles = Vec::new();
        for term in self.numerator.iter().chain(self.denominator.iter()) {
            if let Term::Role(role) = term {
                if !roles.contains(&role.as_str()) {
                    roles.push(role.as_str());
                }
            }
        }
        roles
    }
}

/// A physical law as a set of roles, each with the rule computing it from all the others
#[derive(Debug, Clone, PartialEq)]
pub struct RelationEntry {
    name: String,
    rules: Vec<(String, Rule)>,
}

impl RelationEntry {
    /// Builds a relation and checks that every rule expresses its role through exactly the
    /// other roles of the relation, and only converts roles it reads.
    pub fn new(name: &str, rules: Vec<(&str, Rule)>) -> Result<Self, ChemError> {
        let invalid = |reason: String| ChemError::InvalidRelation {
            relation: name.to_string(),
            reason,
        };
        if rules.is_empty() {
            return Err(invalid("no roles".to_string()));
        }
        let roles: HashSet<&str> = rules.iter().map(|(role, _)| *role).collect();
        if roles.len() != rules.len() {
            return Err(invalid("a role is declared twice".to_string()));
        }
        for (role, rule) in &rules {
            let referenced: HashSet<&str> = rule.referenced_roles().into_iter().collect();
            let others: HashSet<&str> = roles.iter().copied().filter(|r| r != role).collect();
            if referenced != others {
                let mut expected: Vec<&str> = others.into_iter().collect();
                expected.sort_unstable();
                return Err(invalid(format!(
                    "rule for {} must use exactly the roles {:?}",
                    role, expected
                )));
            }
            if let Some(conversion) = rule
                .conversions
                .iter()
                .find(|c| !referenced.contains(c.role.as_str()))
            {
                return Err(invalid(format!(
                    "rule for {} converts {} which it does not use",
                    role, conversion.role
                )));
            }
        }
        Ok(Self {
            name: name.to_string(),
            rules: rules
                .into_iter()
                .map(|(role, rule)| (role.to_string(), rule))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// roles in declaration order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(role, _)| role.as_str())
    }

    pub fn rule(&self, role: &str) -> Option<&Rule> {
        self.rules.iter().find(|(r, _)| r == role).map(|(_, rule)| rule)
    }
}

/// Named collection of relations
#[derive(Debug, Clone, Default)]
pub struct RelationRegistry {
    relations: HashMap<String, RelationEntry>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// registry with the built-in laws: ideal gas, freezing point depression, boiling point
    /// elevation, molality and density
    pub fn standard() -> Result<Self, ChemError> {
        let mut registry = Self::new();
        for relation in super::laws::standard_relations()? {
            registry.register(relation);
        }
        Ok(registry)
    }

    /// process-wide registry of the built-in laws
    pub fn global() -> &'static RelationRegistry {
        static REGISTRY: OnceLock<RelationRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::standard().expect("built-in relations are consistent"))
    }

    /// adds a relation, replacing one registered under the same name
    pub fn register(&mut self, relation: RelationEntry) -> Option<RelationEntry> {
        self.relations.insert(relation.name.clone(), relation)
    }

    pub fn get(&self, name: &str) -> Result<&RelationEntry, ChemError> {
        self.relations
            .get(name)
            .ok_or_else(|| ChemError::UnknownRelation(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.relations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_law() -> Vec<(&'static str, Rule)> {
        vec![
            ("a", Rule::new().times("b").times("c")),
            ("b", Rule::new().times("a").over("c")),
            ("c", Rule::new().times("a").over("b")),
        ]
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new()
            .convert("T", QuantityFamily::Temperature, "K")
            .times("n")
            .times(0.08206)
            .times("T")
            .over("V")
            .labelled("atm");
        assert_eq!(rule.numerator.len(), 3);
        assert_eq!(rule.numerator[1], Term::Constant(0.08206));
        assert_eq!(rule.referenced_roles(), vec!["n", "T", "V"]);
        assert_eq!(rule.conversion_for("T").unwrap().unit, "K");
        assert!(rule.conversion_for("V").is_none());
        assert_eq!(rule.output_unit.as_deref(), Some("atm"));
    }

    #[test]
    fn test_relation_entry() {
        let relation = RelationEntry::new("product", product_law()).unwrap();
        assert_eq!(relation.name(), "product");
        assert_eq!(relation.roles().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(relation.rule("b").is_some());
        assert!(relation.rule("d").is_none());
    }

    #[test]
    fn test_inconsistent_relations_are_rejected() {
        // rule for c forgets b
        let mut rules = product_law();
        rules[2] = ("c", Rule::new().times("a"));
        assert!(matches!(
            RelationEntry::new("broken", rules),
            Err(ChemError::InvalidRelation { .. })
        ));
        // rule refers to itself
        let mut rules = product_law();
        rules[0] = ("a", Rule::new().times("a").times("b").times("c"));
        assert!(RelationEntry::new("broken", rules).is_err());
        // duplicated role
        let mut rules = product_law();
        rules.push(("a", Rule::new().times("b").times("c")));
        assert!(RelationEntry::new("broken", rules).is_err());
        // conversion of a role that is not read
        let mut rules = product_law();
        rules[0] = (
            "a",
            Rule::new()
                .convert("a", QuantityFamily::Mass, "g")
                .times("b")
                .times("c"),
        );
        assert!(RelationEntry::new("broken", rules).is_err());
        assert!(RelationEntry::new("empty", vec![]).is_err());
    }

    #[test]
    fn test_registry() {
        let mut registry = RelationRegistry::new();
        assert!(
            registry
                .register(RelationEntry::new("product", product_law()).unwrap())
                .is_none()
        );
        assert!(registry.get("product").is_ok());
        assert_eq!(
            registry.get("missing").unwrap_err(),
            ChemError::UnknownRelation("missing".to_string())
        );
        let standard = RelationRegistry::global();
        assert_eq!(
            standard.names(),
            vec![
                "boiling point elevation",
                "density",
                "freezing point depression",
                "ideal gas law",
                "molality"
            ]
        );
    }
}
