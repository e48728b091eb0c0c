//! Host fact collection
//!
//! Four read-only queries: OS name and hostname via `sysinfo`, the runtime
//! version baked in at build time, and the current user from the process
//! environment.

use std::env;

use sysinfo::System;
use thiserror::Error;
use tracing::debug;

use crate::types::HostInfo;

/// A host query that returned nothing
#[derive(Debug, Error)]
pub enum InfoError {
    #[error("operating system name unavailable")]
    OsNameUnavailable,
    #[error("hostname unavailable")]
    HostnameUnavailable,
}

/// Collect all host facts in one pass.
///
/// Fails when the OS name or hostname query comes back empty; there is no
/// retry or fallback for those, the error propagates to the caller.
pub fn collect() -> Result<HostInfo, InfoError> {
    let os_name = System::name().ok_or(InfoError::OsNameUnavailable)?;
    let hostname = System::host_name().ok_or(InfoError::HostnameUnavailable)?;
    let user = user_or_unknown(env::var("USER").ok());

    debug!(%os_name, %hostname, %user, "collected host facts");

    Ok(HostInfo {
        os_name,
        runtime_version: runtime_version().to_string(),
        hostname,
        user,
    })
}

/// Version of the rustc toolchain this binary was built with, set by build.rs
fn runtime_version() -> &'static str {
    env!("ENVREPORT_RUSTC_VERSION")
}

/// Substitute "unknown" when the user variable is unset
fn user_or_unknown(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_fallback_when_unset() {
        assert_eq!(user_or_unknown(None), "unknown");
    }

    #[test]
    fn test_user_passthrough_when_set() {
        assert_eq!(user_or_unknown(Some("alice".to_string())), "alice");
    }

    #[test]
    fn test_runtime_version_is_nonempty() {
        let version = runtime_version();
        assert!(!version.is_empty());
        // e.g. "1.80.0" - starts with a digit, not the "rustc" prefix
        assert!(version.chars().next().unwrap().is_ascii_digit());
    }
}
