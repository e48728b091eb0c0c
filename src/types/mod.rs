//! Host fact and lunar calendar types

mod festival;
mod host;
mod lunar;
mod solar_term;

pub use festival::*;
pub use host::*;
pub use lunar::*;
pub use solar_term::*;
