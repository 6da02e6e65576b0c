use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// One entry in the harness run history.
#[derive(Serialize)]
pub struct HistoryEvent<'a> {
    pub action: &'a str,
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a str>,
}

impl<'a> HistoryEvent<'a> {
    pub fn ok(action: &'a str) -> Self {
        Self {
            action,
            status: "ok",
            step: None,
            source: None,
            config: None,
        }
    }

    pub fn failed(action: &'a str, step: &'a str) -> Self {
        Self {
            step: Some(step),
            status: "failed",
            ..Self::ok(action)
        }
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_config(mut self, config: &'a str) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Serialize)]
struct HistoryLine<'a> {
    ts: u64,
    #[serde(flatten)]
    event: HistoryEvent<'a>,
}

/// Append one history line for a completed or failed harness action.
/// Best effort: a missing HOME or unwritable disk never fails the run.
pub fn record_history(event: HistoryEvent<'_>) {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let path = PathBuf::from(home).join(".config/simharness/history.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let line = HistoryLine {
        ts: unix_now(),
        event,
    };
    let Ok(json) = serde_json::to_string(&line) else {
        return;
    };
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| writeln!(f, "{json}"));
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
