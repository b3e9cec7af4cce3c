pub mod molecular_weights;

pub use molecular_weights::*;
