//! Market data aggregate: the asset catalog, its value objects and display formatting.

pub mod catalog;
pub mod entities;
pub mod formatting;
pub mod value_objects;

pub use entities::*;
pub use formatting::{ChangeTone, format_change, format_number};
pub use value_objects::*;
