//! Entities - objects with identity (characters by name within a universe)

mod character;
mod universe;

pub use character::Character;
pub use universe::{Role, Universe};
