// ATS scoring: rule table, pure evaluator, and category grouping.
// The evaluator never touches I/O; handlers only decode input and shape output.

pub mod engine;
pub mod handlers;
pub mod rules;
pub mod summary;
