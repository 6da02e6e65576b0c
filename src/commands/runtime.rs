use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::BuildArgs;
use crate::domain::models::{JsonOut, PathsReport, RunReport, StepReport};
use crate::services::layout::{
    classes_dir, ensure_input, entry_name, join_classpath, InstallLayout,
};
use crate::services::output::emit;
use crate::services::process::{run_step, StepSpec};
use crate::services::storage::{record_history, HistoryEvent};

/// Full orchestration: verify the bridge artifact and the input files,
/// compile the test source, then execute it against the resolved simulator
/// binary. The first failing step aborts the run; its exit code becomes the
/// harness exit code.
pub fn handle_run(
    layout: &InstallLayout,
    json: bool,
    build: &BuildArgs,
    config: &str,
    binary: &str,
    runtime: &str,
    dry_run: bool,
) -> Result<()> {
    let artifact = layout.ensure_artifact()?;
    let source = PathBuf::from(&build.source);
    ensure_input(&source, "test source")?;
    ensure_input(Path::new(config), "configuration file")?;
    let compile = compile_spec(&artifact, &source, &build.compiler);
    let execute = execute_spec(layout, &artifact, &source, config, binary, runtime)?;

    if dry_run {
        let report = RunReport {
            dry_run: true,
            steps: vec![compile.planned_report(), execute.planned_report()],
        };
        return emit(json, report, render_run_report);
    }

    let mut steps = Vec::new();
    for spec in [&compile, &execute] {
        match run_step(spec) {
            Ok(report) => steps.push(report),
            Err(err) => {
                record_history(HistoryEvent::failed("run", &spec.step));
                return Err(err);
            }
        }
    }
    record_history(
        HistoryEvent::ok("run")
            .with_source(&build.source)
            .with_config(config),
    );
    let report = RunReport {
        dry_run: false,
        steps,
    };
    emit(json, report, render_run_report)
}

/// Compile step alone.
pub fn handle_compile(layout: &InstallLayout, json: bool, build: &BuildArgs) -> Result<()> {
    let artifact = layout.ensure_artifact()?;
    let source = PathBuf::from(&build.source);
    ensure_input(&source, "test source")?;
    let spec = compile_spec(&artifact, &source, &build.compiler);
    let report = match run_step(&spec) {
        Ok(report) => report,
        Err(err) => {
            record_history(HistoryEvent::failed("compile", &spec.step));
            return Err(err);
        }
    };
    record_history(HistoryEvent::ok("compile").with_source(&build.source));
    emit(json, report, |r| render_step(r))
}

pub fn handle_paths(layout: &InstallLayout, json: bool, binary: &str) -> Result<()> {
    let report = PathsReport {
        root: layout.root.to_string_lossy().into_owned(),
        tools_dir: layout.tools_dir().to_string_lossy().into_owned(),
        artifact: layout.artifact().to_string_lossy().into_owned(),
        simulator: layout.resolve_binary(binary).to_string_lossy().into_owned(),
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("root: {}", report.root);
        println!("tools: {}", report.tools_dir);
        println!("artifact: {}", report.artifact);
        println!("simulator: {}", report.simulator);
    }
    Ok(())
}

fn compile_spec(artifact: &Path, source: &Path, compiler: &str) -> StepSpec {
    StepSpec::new(
        "compile",
        compiler,
        vec![
            "-cp".to_owned(),
            artifact.to_string_lossy().into_owned(),
            source.to_string_lossy().into_owned(),
        ],
    )
}

fn execute_spec(
    layout: &InstallLayout,
    artifact: &Path,
    source: &Path,
    config: &str,
    binary: &str,
    runtime: &str,
) -> Result<StepSpec> {
    let classpath = join_classpath(&[artifact.to_path_buf(), classes_dir(source)]);
    let entry = entry_name(source)?;
    let simulator = layout.resolve_binary(binary);
    Ok(StepSpec::new(
        "run",
        runtime,
        vec![
            "-cp".to_owned(),
            classpath,
            entry,
            simulator.to_string_lossy().into_owned(),
            config.to_owned(),
        ],
    ))
}

fn render_run_report(report: &RunReport) -> String {
    report
        .steps
        .iter()
        .map(render_step)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_step(step: &StepReport) -> String {
    format!("{}\t{}\t{}", step.step, step.program, step.status)
}
