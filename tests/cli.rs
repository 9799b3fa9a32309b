//! Exit status and argument handling of the `arb-bridge` binary.
//!
//! None of these reach a node: each run fails (or succeeds) before the first
//! RPC request.

mod common;

#[test]
fn test_help_exits_zero() {
    let output = common::run(common::bridge_cmd().arg("--help"));
    assert!(output.status.success());
    assert!(common::stdout(&output).contains("withdraw"));
}

#[test]
fn test_withdraw_without_key_exits_one() {
    let output = common::run(common::bridge_cmd().arg("withdraw"));
    assert_eq!(output.status.code(), Some(1));
    assert!(common::stderr(&output).contains("DEVNET_PRIVKEY"));
}

#[test]
fn test_invalid_rpc_url_exits_one() {
    let output = common::run(common::bridge_cmd().env("L1RPC", "not a url").arg("balances"));
    assert_eq!(output.status.code(), Some(1));
    assert!(common::stderr(&output).contains("l1.rpc_url"));
}

#[test]
fn test_bad_withdraw_amount_exits_one() {
    let output = common::run(
        common::bridge_cmd()
            .env(
                "DEVNET_PRIVKEY",
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            )
            .args(["withdraw", "--amount", "lots"]),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(common::stderr(&output).contains("invalid ether amount"));
}

#[test]
fn test_greet_requires_greeter_addresses() {
    let output = common::run(
        common::bridge_cmd()
            .env(
                "DEVNET_PRIVKEY",
                "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            )
            .arg("greet"),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(common::stderr(&output).contains("greeter.l1_address"));
}

#[test]
fn test_missing_config_file_exits_one() {
    let output = common::run(
        common::bridge_cmd().args(["--config", "/nonexistent/arb-bridge.toml", "balances"]),
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_config_file_exits_one() {
    let path = common::temp_config("[greeter]\nsubmission_price_multiplier = 0\n");
    let output = common::run(
        common::bridge_cmd()
            .arg("--config")
            .arg(&path)
            .arg("balances"),
    );
    let _ = std::fs::remove_file(&path);
    assert_eq!(output.status.code(), Some(1));
    assert!(common::stderr(&output).contains("submission_price_multiplier"));
}

#[test]
fn test_trace_rejects_malformed_hash() {
    let output = common::run(common::bridge_cmd().args(["trace", "0x1234"]));
    assert!(!output.status.success());
}
