/// Collapse loop orchestration and run reports
pub mod executor;
/// One-hop neighbor constraint propagation
pub mod propagation;
/// Lowest-entropy cell selection and seeded candidate choice
pub mod selection;
