pub mod investors;

pub use investors::*;
