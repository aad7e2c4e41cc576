mod cell;
mod grid;
mod patterns;
mod catalog;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets, seed};
pub use catalog::{PatternSource, JsonCatalog, BuiltinCatalog, ShapesDocument};
