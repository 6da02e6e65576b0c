use anyhow::{anyhow, Context, Result};
use std::process::{Command, Stdio};

use crate::domain::models::{StepFailure, StepReport};

/// One planned external invocation.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub step: String,
    pub program: String,
    pub args: Vec<String>,
}

impl StepSpec {
    pub fn new(step: &str, program: &str, args: Vec<String>) -> Self {
        Self {
            step: step.to_owned(),
            program: program.to_owned(),
            args,
        }
    }

    pub fn planned_report(&self) -> StepReport {
        StepReport {
            step: self.step.clone(),
            program: self.program.clone(),
            args: self.args.clone(),
            status: "planned".to_owned(),
            exit_code: None,
        }
    }
}

/// Run a step to completion with inherited stdio. Non-zero exits become a
/// `StepFailure` carrying the child's code; signal death has no code and is
/// reported as its own error.
pub fn run_step(spec: &StepSpec) -> Result<StepReport> {
    let status = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("spawn {} for {} step", spec.program, spec.step))?;

    if status.success() {
        return Ok(StepReport {
            step: spec.step.clone(),
            program: spec.program.clone(),
            args: spec.args.clone(),
            status: "ok".to_owned(),
            exit_code: status.code(),
        });
    }
    match status.code() {
        Some(code) => Err(StepFailure {
            step: spec.step.clone(),
            code,
        }
        .into()),
        None => Err(anyhow!("{} step terminated by signal", spec.step)),
    }
}

/// Probe a tool by asking for its version, capturing output. Used by the
/// check command; failures are reported, never fatal mid-probe.
pub fn probe_tool(program: &str) -> Result<String> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .with_context(|| format!("invoke {program}"))?;
    if !output.status.success() {
        return Err(anyhow!("{} exited with {}", program, output.status));
    }
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        text = String::from_utf8_lossy(&output.stderr).into_owned();
    }
    let version = text.lines().next().unwrap_or("").trim().to_owned();
    if version.is_empty() {
        Ok("unknown".to_owned())
    } else {
        Ok(version)
    }
}
