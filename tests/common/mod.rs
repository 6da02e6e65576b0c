use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated harness environment: a fixture toolkit installation, a working
/// directory with test data, and scripted stand-ins for the external tools
/// that append their argv to an invocation log.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub root: PathBuf,
    pub work: PathBuf,
    pub log: PathBuf,
    tools: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let root = make_install_root(tmp.path());
        let work = make_workdir(tmp.path());
        let log = tmp.path().join("invocations.log");
        let tools = tmp.path().join("fakebin");
        fs::create_dir_all(&tools).expect("create fake tool dir");

        Self {
            _tmp: tmp,
            home,
            root,
            work,
            log,
            tools,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("simharness");
        cmd.env_remove("SIM_HOME")
            .env_remove("SIM_BINARY")
            .env("HOME", &self.home)
            .current_dir(&self.work);
        cmd
    }

    pub fn cmd_with_home(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("SIM_HOME", &self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd_with_home()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Write an executable stand-in that logs its invocation and exits with
    /// the given code.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, exit_code: i32) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = self.tools.join(name);
        let script = format!(
            "#!/bin/sh\nprintf '%s %s\\n' \"{name}\" \"$*\" >> \"{log}\"\nexit {exit_code}\n",
            log = self.log.display(),
        );
        fs::write(&path, script).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("mark executable");
        path.to_string_lossy().into_owned()
    }

    pub fn logged_invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(text) => text.lines().map(str::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn remove_artifact(&self) {
        fs::remove_file(self.root.join("bin/bridge.jar")).expect("remove artifact");
    }

    pub fn remove_source(&self) {
        fs::remove_file(self.work.join("data/ApiTest.java")).expect("remove source");
    }

    pub fn remove_config(&self) {
        fs::remove_file(self.work.join("data/config.cfg")).expect("remove config");
    }

    pub fn history_lines(&self) -> Vec<String> {
        match fs::read_to_string(self.home.join(".config/simharness/history.jsonl")) {
            Ok(text) => text.lines().map(str::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }
}

fn make_install_root(base: &Path) -> PathBuf {
    let root = base.join("toolkit");
    fs::create_dir_all(root.join("tools")).expect("create tools dir");
    fs::create_dir_all(root.join("bin")).expect("create bin dir");
    fs::write(root.join("bin/bridge.jar"), b"PK\x03\x04fixture").expect("write bridge artifact");
    // Resolvable simulator binary; never executed by the tests.
    fs::write(root.join("bin/sim"), "").expect("write simulator stub");
    root
}

fn make_workdir(base: &Path) -> PathBuf {
    let work = base.join("work");
    fs::create_dir_all(work.join("data")).expect("create data dir");
    fs::write(
        work.join("data/ApiTest.java"),
        "public class ApiTest { public static void main(String[] args) {} }\n",
    )
    .expect("write test source");
    fs::write(work.join("data/config.cfg"), "step-length = 0.1\n").expect("write config");
    work
}
