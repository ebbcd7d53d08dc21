//! Notebook execution collaborator.
//!
//! Delegates all execution semantics to `jupyter nbconvert --execute`; this
//! module only shells out, bounds the call, and hands back the executed
//! document for the renderer to walk.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use tokio::process::Command;

use crate::notebook::Notebook;

/// Extra wall-clock slack beyond the engine's own cell timeout before the
/// child process is killed outright.
const GRACE_SECS: u64 = 10;

/// Execute a notebook file with the given working directory and per-cell
/// timeout, returning the document with outputs populated.
///
/// Any failure (engine missing, non-zero exit, timeout, unparseable
/// output) comes back as an Err; callers decide how visible it is.
pub async fn execute(
    notebook_path: &Path,
    workdir: &Path,
    timeout_secs: u64,
    kernel: &str,
) -> Result<Notebook> {
    let mut cmd = Command::new("jupyter");
    cmd.arg("nbconvert")
        .arg("--to")
        .arg("notebook")
        .arg("--execute")
        .arg("--stdout")
        .arg(format!("--ExecutePreprocessor.timeout={}", timeout_secs))
        .arg(format!("--ExecutePreprocessor.kernel_name={}", kernel))
        .arg(notebook_path)
        .current_dir(workdir)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true);

    let child = cmd
        .spawn()
        .map_err(|e| anyhow!("could not start notebook engine: {}", e))?;

    let bound = Duration::from_secs(timeout_secs.saturating_add(GRACE_SECS));
    let output = match tokio::time::timeout(bound, child.wait_with_output()).await {
        Ok(res) => res?,
        Err(_) => bail!("notebook execution timed out after {}s", timeout_secs),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.lines().last().unwrap_or("unknown error");
        bail!("notebook engine failed: {}", detail);
    }

    let json = String::from_utf8_lossy(&output.stdout);
    Notebook::parse(&json)
}
