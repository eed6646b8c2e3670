mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from briefly for tests
pub use briefly::{Brief, BriefRepository, BriefStore, NewBrief, TaglineError, submit_brief};
