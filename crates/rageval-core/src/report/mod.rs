pub mod console;
pub mod failure;
pub mod json;
pub mod markdown;
pub mod progress;

pub const EVALUATIONS_FILE: &str = "evaluations.json";
pub const FAILURE_REPORT_FILE: &str = "failure_report.json";
