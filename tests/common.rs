// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn mycat_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mycat"));
    // Keep stderr limited to the tool's own diagnostics.
    cmd.env("RUST_LOG", "off");
    cmd
}
