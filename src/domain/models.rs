use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One external invocation, planned or completed.
#[derive(Serialize, Clone)]
pub struct StepReport {
    pub step: String,
    pub program: String,
    pub args: Vec<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

#[derive(Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub steps: Vec<StepReport>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
    pub detail: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Serialize)]
pub struct PathsReport {
    pub root: String,
    pub tools_dir: String,
    pub artifact: String,
    pub simulator: String,
}

/// An external step exited non-zero. Carries the child's exit code so the
/// harness can surface it unchanged as its own exit status.
#[derive(Debug)]
pub struct StepFailure {
    pub step: String,
    pub code: i32,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} step exited with code {}", self.step, self.code)
    }
}

impl std::error::Error for StepFailure {}
