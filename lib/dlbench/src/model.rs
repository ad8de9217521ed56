//! Serialized benchmark records.

use serde::{Deserialize, Deserializer, Serialize};

/// Profile of a freshly generated test case.
pub const PROFILE_EL: &str = "EL";
/// Profile of a test case extended with role hierarchy axioms.
pub const PROFILE_ELH: &str = "ELH";
/// Expected answer for an entailed query.
pub const ANSWER_YES: &str = "Yes";
/// Expected answer for a non-entailed query or a failed check.
pub const ANSWER_NO: &str = "No";

/// One axiom in its two notations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderedAxiom {
    #[serde(alias = "symbolic-format")]
    pub symbolic: String,
    #[serde(alias = "OWL-format")]
    pub functional: String,
}

impl RenderedAxiom {
    pub fn new(symbolic: impl Into<String>, functional: impl Into<String>) -> Self {
        Self {
            symbolic: symbolic.into(),
            functional: functional.into(),
        }
    }

    /// The role hierarchy axiom `role ⊑ superOfRole` added by the EL to ELH extension.
    pub fn role_hierarchy(role: &str) -> Self {
        let super_role = format!("superOf{}", crate::extend::capitalize(role));
        Self {
            symbolic: format!("{role} ⊑ {super_role}"),
            functional: format!("SubObjectPropertyOf({role} {super_role})"),
        }
    }
}

/// A benchmark entry: a group of axioms, a yes/no question and its ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub dl_profile: String,
    pub axioms: Vec<RenderedAxiom>,
    pub query: String,
    pub expected: String,
    /// Robustness variant tag (`MR-1`, `MR-9`), absent on base test cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mr: Option<String>,
}

impl TestCase {
    /// Builds the id of the `n`-th generated test case.
    pub fn id_for(n: usize) -> String {
        format!("test_{n}")
    }

    pub fn is_expected_yes(&self) -> bool {
        self.expected == ANSWER_YES
    }
}

pub(crate) fn answer(entailed: bool) -> &'static str {
    if entailed { ANSWER_YES } else { ANSWER_NO }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Integer(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_without_variant_tag() -> serde_json::Result<()> {
        let case = TestCase {
            id: TestCase::id_for(1),
            dl_profile: PROFILE_EL.into(),
            axioms: vec![RenderedAxiom::new("A ⊑ B", "SubClassOf(<A> <B>)")],
            query: "Does every A have r.B?".into(),
            expected: ANSWER_NO.into(),
            mr: None,
        };
        let value = serde_json::to_value(&case)?;
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        assert!(!keys.contains(&"mr".to_owned()));
        assert_eq!(value["axioms"][0]["symbolic"], "A ⊑ B");
        Ok(())
    }

    #[test]
    fn test_deserialize_alternative_schema() -> serde_json::Result<()> {
        let case: TestCase = serde_json::from_str(
            r#"{"id": 7, "dl_profile": "EL", "query": "q", "expected": "Yes",
                "axioms": [{"symbolic-format": "A ⊑ B", "OWL-format": "SubClassOf(<A> <B>)"}]}"#,
        )?;
        assert_eq!(case.id, "7");
        assert_eq!(case.axioms[0], RenderedAxiom::new("A ⊑ B", "SubClassOf(<A> <B>)"));
        assert!(case.is_expected_yes());
        assert_eq!(case.mr, None);
        Ok(())
    }

    #[test]
    fn test_role_hierarchy_axiom() {
        assert_eq!(
            RenderedAxiom::role_hierarchy("hasPart"),
            RenderedAxiom::new(
                "hasPart ⊑ superOfHasPart",
                "SubObjectPropertyOf(hasPart superOfHasPart)"
            )
        );
    }
}
