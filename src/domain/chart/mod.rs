//! Chart aggregate: bar geometry and the chart panel view model.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
