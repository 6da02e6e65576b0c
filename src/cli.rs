use clap::{Parser, Subcommand};

pub const HOME_ENV: &str = "SIM_HOME";

pub const DEFAULT_SOURCE: &str = "data/ApiTest.java";
pub const DEFAULT_CONFIG: &str = "data/config.cfg";
pub const DEFAULT_BINARY: &str = "sim";
pub const DEFAULT_COMPILER: &str = "javac";
pub const DEFAULT_RUNTIME: &str = "java";

#[derive(Parser, Debug)]
#[command(name = "simharness", version, about = "Simulation toolkit API test harness")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Toolkit installation root (overrides the SIM_HOME environment variable)"
    )]
    pub home: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the API test and run it against the simulator.
    Run {
        #[command(flatten)]
        build: BuildArgs,
        #[arg(long, default_value = DEFAULT_CONFIG, help = "Simulation configuration file")]
        config: String,
        #[arg(long, default_value = DEFAULT_BINARY, help = "Simulator binary name to resolve")]
        binary: String,
        #[arg(long, default_value = DEFAULT_RUNTIME, help = "Runtime program")]
        runtime: String,
        #[arg(long, default_value_t = false, help = "Report planned invocations without executing")]
        dry_run: bool,
    },
    /// Compile the API test only.
    Compile {
        #[command(flatten)]
        build: BuildArgs,
    },
    /// Verify the installation layout and external tools.
    Check {
        #[command(flatten)]
        build: BuildArgs,
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: String,
        #[arg(long, default_value = DEFAULT_RUNTIME)]
        runtime: String,
    },
    /// Print the resolved installation paths.
    Paths {
        #[arg(long, default_value = DEFAULT_BINARY)]
        binary: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    #[arg(long, default_value = DEFAULT_SOURCE, help = "Test source file")]
    pub source: String,
    #[arg(long, default_value = DEFAULT_COMPILER, help = "Compiler program")]
    pub compiler: String,
}
