pub mod lines;
pub mod paste;
pub mod markup;

pub use lines::*;
pub use paste::*;
pub use markup::*;
