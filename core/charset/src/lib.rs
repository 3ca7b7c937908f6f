pub mod tables;
pub mod class;
pub mod table;
pub mod classifier;
pub mod substitute;
pub mod normalizer;

#[cfg(test)]
mod strategies;

pub use class::*;
pub use table::*;
pub use classifier::*;
pub use substitute::*;
pub use normalizer::*;
