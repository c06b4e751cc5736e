pub mod model;
pub mod gaps;
