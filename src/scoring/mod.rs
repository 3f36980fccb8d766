pub mod checks;
pub mod engine;
pub mod grade;
pub mod rules;
pub mod thresholds;
pub mod validation;

pub use checks::{
    active_specs, spec_for, CheckKey, CheckResult, CheckSpec, CheckValue, Status, CHECK_SPECS,
};
pub use engine::{
    analyze, AnalysisInput, AnalysisResult, Analyzer, Checks, Feedback, FeedbackKind,
    DEFAULT_PAGE_URL,
};
pub use grade::Grade;
pub use thresholds::*;
pub use validation::validate_thresholds;
