pub mod layer;
pub mod target;

pub use layer::*;
pub use target::*;
