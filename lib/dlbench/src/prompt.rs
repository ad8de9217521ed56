//! Prompts asking a language model to answer a test case.

use crate::model::{PROFILE_EL, PROFILE_ELH, TestCase};

/// Describes the logic the axioms of a profile are written in.
pub fn profile_description(dl_profile: &str) -> &'static str {
    match dl_profile {
        PROFILE_EL => {
            "Description Logic EL (simple axioms with no role hierarchy extensions or existential quantifiers)"
        }
        PROFILE_ELH => {
            "Description Logic ELH (extended with role hierarchies and existential quantifiers)"
        }
        _ => "Description Logic (unknown profile)",
    }
}

/// Builds the prompt of a test case: its symbolic axioms as a bullet list, then the question.
pub fn build_prompt(test_case: &TestCase) -> String {
    let axioms = test_case
        .axioms
        .iter()
        .map(|axiom| format!("- {}", axiom.symbolic))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Given the following logical axioms written in {}:\n\n{axioms}\n\nAnswer the following question as truthfully as possible:\n{}\n\nReply only with \"Yes\" or \"No\", and do not explain your answer.",
        profile_description(&test_case.dl_profile),
        test_case.query
    )
}
