//! Report rendering
//!
//! The banner lines and field labels are fixed literals; only the four fact
//! values vary between hosts.

use std::io::{self, Write};

use crate::types::HostInfo;

/// Greeting banner, printed byte-for-byte on every run
const GREETING: [&str; 3] = [
    "🐳 Hello from Container!",
    "这是一个运行在容器中的 Python 应用程序",
    "Container technology is working! 🚀",
];

/// Header introducing the facts block, preceded by a blank line
const FACTS_HEADER: &str = "系统信息:";

/// Render the full report: three greeting lines, a blank line, the facts
/// header, then the four fact lines. Every line is newline-terminated.
pub fn render(info: &HostInfo) -> String {
    let mut out = String::new();
    for line in GREETING {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(FACTS_HEADER);
    out.push('\n');
    out.push_str(&format!("操作系统: {}\n", info.os_name));
    out.push_str(&format!("Python 版本: {}\n", info.runtime_version));
    out.push_str(&format!("主机名: {}\n", info.hostname));
    out.push_str(&format!("当前用户: {}\n", info.user));
    out
}

/// Stream the rendered report to a writer
pub fn write_report<W: Write>(out: &mut W, info: &HostInfo) -> io::Result<()> {
    out.write_all(render(info).as_bytes())
}
