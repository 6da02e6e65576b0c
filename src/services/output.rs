use crate::domain::models::JsonOut;
use anyhow::Result;
use serde::Serialize;

/// Emit a result either as the harness JSON envelope or through the given
/// text renderer.
pub fn emit<T: Serialize>(json: bool, data: T, render: impl FnOnce(&T) -> String) -> Result<()> {
    if !json {
        println!("{}", render(&data));
        return Ok(());
    }
    let wrapped = JsonOut { ok: true, data };
    println!("{}", serde_json::to_string_pretty(&wrapped)?);
    Ok(())
}
