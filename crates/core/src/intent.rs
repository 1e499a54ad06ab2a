use crate::models::{ClassificationResult, Intent};

pub const FALLBACK_REASONING: &str = "Fallback rule-based classification";

// Triggers overlap; first hit wins.
const FALLBACK_RULES: &[(&[&str], Intent)] = &[
    (&["close", "reopen", "status"], Intent::UpdateTaskStatus),
    (&["pending"], Intent::ViewPendingTasks),
    (&["performance"], Intent::ViewEmployeePerformance),
    (&["add"], Intent::AddUser),
    (&["delete", "remove"], Intent::DeleteUser),
    (&["team", "employees"], Intent::ViewEmployeesUnderManager),
];

pub fn fallback_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    FALLBACK_RULES
        .iter()
        .find(|(triggers, _)| contains_any(&lower, triggers))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::TaskAssignment)
}

pub fn fallback_result(text: &str) -> ClassificationResult {
    ClassificationResult {
        intent: fallback_intent(text),
        reasoning: FALLBACK_REASONING.to_string(),
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
