//! Build script for envreport.
//!
//! Captures the rustc toolchain version at build time and emits it as the
//! `ENVREPORT_RUSTC_VERSION` compile-time environment variable, so the binary
//! can report the version of the runtime it was built with.

use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let output = Command::new(&rustc)
        .arg("--version")
        .output()
        .expect("failed to run rustc --version");
    let stdout = String::from_utf8(output.stdout).expect("rustc version is not utf-8");

    // "rustc 1.80.0 (051478957 2024-07-21)" -> "1.80.0"
    let version = stdout
        .split_whitespace()
        .nth(1)
        .expect("unexpected rustc --version output");

    println!("cargo:rustc-env=ENVREPORT_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
