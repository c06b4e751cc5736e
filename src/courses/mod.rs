pub mod course;
pub mod relevance;
pub mod store;
