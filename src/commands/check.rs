use anyhow::{anyhow, Result};
use std::path::Path;

use crate::cli::BuildArgs;
use crate::domain::models::{CheckItem, CheckReport, JsonOut};
use crate::services::layout::InstallLayout;
use crate::services::process::probe_tool;

/// Report every installation/tooling precondition, then fail once if any
/// check failed. Resolves the installation root itself so a missing
/// environment variable shows up as a check item rather than aborting the
/// report; keeps going past the first problem so a broken setup is
/// diagnosed in one pass.
pub fn handle_check(
    home: Option<&str>,
    json: bool,
    build: &BuildArgs,
    config: &str,
    runtime: &str,
) -> Result<()> {
    let mut checks = Vec::new();

    let layout = match InstallLayout::resolve(home) {
        Ok(layout) => {
            checks.push(CheckItem {
                name: "env".to_owned(),
                status: "ok".to_owned(),
                detail: layout.root.display().to_string(),
            });
            Some(layout)
        }
        Err(err) => {
            checks.push(CheckItem {
                name: "env".to_owned(),
                status: "error".to_owned(),
                detail: err.to_string(),
            });
            None
        }
    };
    if let Some(layout) = &layout {
        check_dir(&mut checks, "root", &layout.root);
        check_dir(&mut checks, "tools", &layout.tools_dir());
        check_file(&mut checks, "artifact", &layout.artifact());
    }
    check_file(&mut checks, "source", Path::new(&build.source));
    check_file(&mut checks, "config", Path::new(config));
    check_tool(&mut checks, "compiler", &build.compiler);
    check_tool(&mut checks, "runtime", runtime);

    let failed = checks.iter().filter(|c| c.status != "ok").count();
    let report = CheckReport {
        overall: if failed == 0 { "ok" } else { "needs_attention" }.to_owned(),
        checks,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: failed == 0,
                data: report
            })?
        );
    } else {
        println!("overall: {}", report.overall);
        for c in &report.checks {
            println!("{}\t{}\t{}", c.name, c.status, c.detail);
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(anyhow!("check failed: {failed} issue(s)"))
    }
}

fn check_dir(checks: &mut Vec<CheckItem>, name: &str, path: &Path) {
    push_path_check(checks, name, path, path.is_dir(), "directory missing");
}

fn check_file(checks: &mut Vec<CheckItem>, name: &str, path: &Path) {
    push_path_check(checks, name, path, path.is_file(), "file missing");
}

fn push_path_check(
    checks: &mut Vec<CheckItem>,
    name: &str,
    path: &Path,
    present: bool,
    reason: &str,
) {
    checks.push(CheckItem {
        name: name.to_owned(),
        status: if present { "ok" } else { "error" }.to_owned(),
        detail: if present {
            path.display().to_string()
        } else {
            format!("{reason}: {}", path.display())
        },
    });
}

fn check_tool(checks: &mut Vec<CheckItem>, name: &str, program: &str) {
    match probe_tool(program) {
        Ok(version) => checks.push(CheckItem {
            name: name.to_owned(),
            status: "ok".to_owned(),
            detail: format!("{program} ({version})"),
        }),
        Err(err) => checks.push(CheckItem {
            name: name.to_owned(),
            status: "error".to_owned(),
            detail: format!("{program}: {err:#}"),
        }),
    }
}
