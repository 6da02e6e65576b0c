mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn paths_prints_the_resolved_layout() {
    let env = TestEnv::new();
    env.cmd_with_home()
        .arg("paths")
        .assert()
        .success()
        .stdout(contains("root: "))
        .stdout(contains("artifact: "));
}

#[test]
fn missing_home_produces_a_friendly_error() {
    let env = TestEnv::new();
    env.cmd()
        .arg("paths")
        .assert()
        .failure()
        .stderr(contains("SIM_HOME"))
        .stderr(contains("--home"));
}

#[test]
fn sim_binary_override_wins_binary_resolution() {
    let env = TestEnv::new();
    env.cmd_with_home()
        .env("SIM_BINARY", "/opt/elsewhere/sim")
        .arg("paths")
        .assert()
        .success()
        .stdout(contains("simulator: /opt/elsewhere/sim"));
}
