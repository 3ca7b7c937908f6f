pub mod host;
pub mod buffer;
pub mod highlight;
pub mod commands;

pub use host::*;
pub use buffer::*;
pub use highlight::*;
pub use commands::*;
