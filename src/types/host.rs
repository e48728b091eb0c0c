//! Host fact types

use serde::{Deserialize, Serialize};

/// Facts about the host, collected once per run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// OS name (e.g., "Linux", "Windows", "macOS")
    pub os_name: String,
    /// Version of the toolchain the binary was built with (e.g., "1.80.0")
    pub runtime_version: String,
    /// Machine hostname
    pub hostname: String,
    /// Current user from the process environment, "unknown" when unset
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_info_serializes() {
        let info = HostInfo {
            os_name: "Linux".to_string(),
            runtime_version: "1.80.0".to_string(),
            hostname: "node-1".to_string(),
            user: "unknown".to_string(),
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["os_name"], "Linux");
        assert_eq!(json["hostname"], "node-1");
        assert_eq!(json["user"], "unknown");
    }
}
