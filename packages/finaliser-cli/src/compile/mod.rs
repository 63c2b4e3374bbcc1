pub mod parallel;

pub use parallel::{finalise_units, UnitReport};
