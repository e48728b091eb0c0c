//! Integration test: collect real host facts and render the full report.
//!
//! These run the same path the binary does, minus the stdout write, so they
//! only need a host where the OS name and hostname queries succeed (any
//! normal Linux/macOS/Windows box).

use envreport::{info, report};

#[test]
fn collected_facts_render_in_fixed_order() {
    let host = info::collect().expect("host queries should succeed here");
    let out = report::render(&host);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "🐳 Hello from Container!");
    assert_eq!(lines[1], "这是一个运行在容器中的 Python 应用程序");
    assert_eq!(lines[2], "Container technology is working! 🚀");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "系统信息:");
    assert!(lines[5].starts_with("操作系统: "));
    assert!(lines[6].starts_with("Python 版本: "));
    assert!(lines[7].starts_with("主机名: "));
    assert!(lines[8].starts_with("当前用户: "));
}

#[test]
fn os_and_runtime_facts_are_nonempty() {
    let host = info::collect().expect("host queries should succeed here");
    assert!(!host.os_name.is_empty());
    assert!(!host.runtime_version.is_empty());
    assert!(!host.hostname.is_empty());
    assert!(!host.user.is_empty());
}
