//! Host fact collection

mod host;

pub use host::{collect, InfoError};
