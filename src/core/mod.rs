pub mod store;
pub mod submission;
pub mod tagline;
