pub mod analysis;
pub mod codon;
pub mod conversion;
pub mod translation;
pub mod validation;

pub use analysis::*;
pub use codon::*;
pub use conversion::*;
pub use translation::*;
pub use validation::is_valid;
