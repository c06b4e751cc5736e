pub mod model;
pub mod patterns;
