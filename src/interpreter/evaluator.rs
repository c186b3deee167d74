/// Binary operators.
///
/// Dispatches `suma` and `multesc` nodes to the rule table of each operator.
pub mod binary;
/// Core evaluator structure and the `eval` entry point.
pub mod core;
/// Variable resolution.
pub mod variable;
