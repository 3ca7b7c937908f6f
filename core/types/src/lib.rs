pub mod error;
pub mod class;
pub mod region;
pub mod config;

pub use error::*;
pub use class::*;
pub use region::*;
pub use config::*;
