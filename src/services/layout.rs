use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::cli::HOME_ENV;

/// Explicit override for the simulator binary path.
pub const BINARY_ENV: &str = "SIM_BINARY";

const TOOLS_DIR: &str = "tools";
const BIN_DIR: &str = "bin";
const ARTIFACT_FILE: &str = "bridge.jar";

/// Resolved toolkit installation. Built once at startup and passed down so
/// nothing below `main` has to consult the environment.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    pub root: PathBuf,
}

impl InstallLayout {
    /// Resolve the installation root from the `--home` flag, falling back to
    /// the `SIM_HOME` environment variable. Absence of both is a user error.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        let root = match flag {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => match std::env::var(HOME_ENV) {
                Ok(v) if !v.trim().is_empty() => PathBuf::from(v),
                _ => {
                    return Err(anyhow!(
                        "please declare environment variable '{HOME_ENV}' \
                         (or pass --home) pointing at the toolkit installation root"
                    ))
                }
            },
        };
        Ok(Self { root })
    }

    pub fn tools_dir(&self) -> PathBuf {
        self.root.join(TOOLS_DIR)
    }

    pub fn artifact(&self) -> PathBuf {
        self.root.join(BIN_DIR).join(ARTIFACT_FILE)
    }

    /// The bridge artifact must exist before anything is compiled against it.
    pub fn ensure_artifact(&self) -> Result<PathBuf> {
        let artifact = self.artifact();
        if !artifact.is_file() {
            return Err(anyhow!(
                "bridge artifact not found at {} (incomplete toolkit installation?)",
                artifact.display()
            ));
        }
        Ok(artifact)
    }

    /// Resolve a simulator binary name to an invocable path.
    pub fn resolve_binary(&self, name: &str) -> PathBuf {
        let explicit = std::env::var(BINARY_ENV).ok();
        self.resolve_binary_with(name, explicit.as_deref())
    }

    /// Precedence: explicit override, then `<root>/bin/<name>`, then the
    /// bare name (left for PATH lookup at execution time).
    fn resolve_binary_with(&self, name: &str, explicit: Option<&str>) -> PathBuf {
        if let Some(path) = explicit {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        let candidate = self.root.join(BIN_DIR).join(exe_name(name));
        if candidate.is_file() {
            candidate
        } else {
            PathBuf::from(name)
        }
    }
}

/// Inputs handed to the external tools must exist up front, so a bad path is
/// a friendly error instead of a raw tool failure.
pub fn ensure_input(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        return Err(anyhow!("{what} not found at {}", path.display()));
    }
    Ok(())
}

/// Entry-point name for the runtime: the source file's stem.
pub fn entry_name(source: &Path) -> Result<String> {
    source
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            anyhow!(
                "cannot derive an entry point name from source path {}",
                source.display()
            )
        })
}

/// Directory the compiler drops class files into (next to the source).
pub fn classes_dir(source: &Path) -> PathBuf {
    source.parent().unwrap_or_else(|| Path::new(".")).to_path_buf()
}

pub fn join_classpath(entries: &[PathBuf]) -> String {
    entries
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(classpath_sep())
}

fn classpath_sep() -> &'static str {
    if cfg!(windows) {
        ";"
    } else {
        ":"
    }
}

fn exe_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_owned()
    }
}
