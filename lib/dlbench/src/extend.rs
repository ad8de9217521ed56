//! EL to ELH extension of a serialized benchmark.
//!
//! The extension only reads the symbolic text of the axioms: every role used
//! in an existential restriction `∃role.Filler` gets a synthetic super-role,
//! and the test case moves to the ELH profile.

use crate::model::{PROFILE_ELH, RenderedAxiom, TestCase};
use tracing::{debug, info};

/// Extends every test case, see [`extend_test_case`].
pub fn extend(test_cases: &[TestCase]) -> Vec<TestCase> {
    let extended: Vec<_> = test_cases.iter().map(extend_test_case).collect();
    info!(
        test_cases = extended.len(),
        extended = extended
            .iter()
            .zip(test_cases)
            .filter(|(after, before)| after.axioms.len() > before.axioms.len())
            .count(),
        "benchmark extended to ELH"
    );
    extended
}

/// Appends a role hierarchy axiom for every role found in the test case.
///
/// Existing axioms are kept in order and an axiom already present is not
/// appended again, so extending twice gives the same result as extending once.
/// The profile becomes ELH as soon as one role is found.
pub fn extend_test_case(test_case: &TestCase) -> TestCase {
    let mut roles: Vec<&str> = Vec::new();
    for axiom in &test_case.axioms {
        if let Some(role) = extract_role(&axiom.symbolic) {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }

    let mut extended = test_case.clone();
    if roles.is_empty() {
        return extended;
    }
    for role in roles {
        let axiom = RenderedAxiom::role_hierarchy(role);
        if extended.axioms.contains(&axiom) {
            continue;
        }
        debug!(id = %test_case.id, role, "adding role hierarchy axiom");
        extended.axioms.push(axiom);
    }
    PROFILE_ELH.clone_into(&mut extended.dl_profile);
    extended
}

/// Returns the role of the first existential restriction in `symbolic`.
///
/// The role is the trimmed text between the first `∃` and the next `.`.
/// Nothing is returned without a `.` or when the role is empty.
pub fn extract_role(symbolic: &str) -> Option<&str> {
    let (_, after) = symbolic.split_once('∃')?;
    let (role, _) = after.split_once('.')?;
    let role = role.trim();
    (!role.is_empty()).then_some(role)
}

/// Uppercases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
