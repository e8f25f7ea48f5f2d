//! Loss triangle data structures and CSV loading

mod data;
pub mod loader;

pub use data::Triangle;
pub use loader::{load_triangle, load_triangle_from_reader};
