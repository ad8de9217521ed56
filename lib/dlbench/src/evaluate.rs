//! Offline scoring of model answers against a benchmark.

use crate::model::{ANSWER_NO, ANSWER_YES, TestCase};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub id: String,
    pub expected: String,
    /// `None` when no answer was given for this id.
    pub answer: Option<String>,
    pub correct: bool,
}

/// Aggregated scores of a set of answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    /// Ids answered `Yes` where `No` was expected.
    pub false_positives: Vec<String>,
    /// Ids answered `No` where `Yes` was expected.
    pub false_negatives: Vec<String>,
    pub unanswered: Vec<String>,
    pub results: Vec<CaseResult>,
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Scores `answers`, a map from test case id to raw model answer.
///
/// Answers are compared to the expected value ignoring case and surrounding
/// whitespace. Missing answers count as wrong.
pub fn score(test_cases: &[TestCase], answers: &FxHashMap<String, String>) -> EvaluationReport {
    let yes = normalize(ANSWER_YES);
    let no = normalize(ANSWER_NO);
    let mut report = EvaluationReport {
        total: test_cases.len(),
        correct: 0,
        accuracy: 0.,
        false_positives: Vec::new(),
        false_negatives: Vec::new(),
        unanswered: Vec::new(),
        results: Vec::with_capacity(test_cases.len()),
    };
    for test_case in test_cases {
        let answer = answers.get(&test_case.id);
        let expected = normalize(&test_case.expected);
        let given = answer.map(|a| normalize(a));
        let correct = given.as_ref() == Some(&expected);
        match given.as_deref() {
            None => report.unanswered.push(test_case.id.clone()),
            Some(given) if given == yes && expected == no => {
                report.false_positives.push(test_case.id.clone());
            }
            Some(given) if given == no && expected == yes => {
                report.false_negatives.push(test_case.id.clone());
            }
            Some(_) => (),
        }
        if correct {
            report.correct += 1;
        }
        report.results.push(CaseResult {
            id: test_case.id.clone(),
            expected: test_case.expected.clone(),
            answer: answer.cloned(),
            correct,
        });
    }
    report.accuracy = ratio(report.correct, report.total);
    report
}

#[expect(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.
    } else {
        part as f64 / total as f64
    }
}
