//! Container environment reporter
//!
//! One-shot diagnostic that prints a greeting banner and a small block of
//! host facts (OS name, runtime version, hostname, current user) to stdout.
//! The library side also carries the Chinese lunar calendar: solar→lunar
//! conversion for 1900-2100, the 24 solar terms, and the festival database.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! let info = envreport::info::collect()?;
//! print!("{}", envreport::report::render(&info));
//!
//! let day = envreport::lunar::day_info(2025, 1, 29)?;
//! assert!(day.lunar.is_lunar_new_year());
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `envreport`

pub mod info;
pub mod lunar;
pub mod report;
pub mod types;

// Re-export the facts struct and the error types
pub use info::InfoError;
pub use lunar::LunarError;
pub use types::{DayLunarInfo, HostInfo, LunarDate};
