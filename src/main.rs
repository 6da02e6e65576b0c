use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::StepFailure;
use services::layout::InstallLayout;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(&cli) {
        // A failed external step surfaces its own exit code unchanged;
        // everything else is a harness error and exits 1.
        if let Some(failure) = err.downcast_ref::<StepFailure>() {
            eprintln!("error: {failure}");
            std::process::exit(failure.code);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run {
            build,
            config,
            binary,
            runtime,
            dry_run,
        } => {
            let layout = InstallLayout::resolve(cli.home.as_deref())?;
            commands::handle_run(&layout, cli.json, build, config, binary, runtime, *dry_run)
        }
        Commands::Compile { build } => {
            let layout = InstallLayout::resolve(cli.home.as_deref())?;
            commands::handle_compile(&layout, cli.json, build)
        }
        // check resolves the root itself so a missing SIM_HOME is reported
        // as a check item, not a bare error.
        Commands::Check {
            build,
            config,
            runtime,
        } => commands::handle_check(cli.home.as_deref(), cli.json, build, config, runtime),
        Commands::Paths { binary } => {
            let layout = InstallLayout::resolve(cli.home.as_deref())?;
            commands::handle_paths(&layout, cli.json, binary)
        }
    }
}
