//! Shared helpers for binary-level tests.

use std::path::PathBuf;
use std::process::{Command, Output};

/// The `arb-bridge` binary with a clean environment and nodes that never answer.
pub fn bridge_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_arb-bridge"));
    cmd.env_clear()
        .env("L1RPC", "http://127.0.0.1:9")
        .env("L2RPC", "http://127.0.0.1:9")
        .env("RUST_LOG", "off");
    cmd
}

pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run arb-bridge")
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Write a config file into the system temp dir.
pub fn temp_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("arb-bridge-cli-{}.toml", std::process::id()));
    std::fs::write(&path, contents).expect("failed to write config");
    path
}
