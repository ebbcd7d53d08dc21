//! Notebook view: execute via the external engine, then walk the cell list.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{Block, Rendered};
use crate::execution;
use crate::notebook::Notebook;

pub async fn render(
    path: &Path,
    workdir: &Path,
    timeout_secs: u64,
    kernel: &str,
) -> Result<Rendered> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let parsed = Notebook::parse(&raw)?;

    // Execution failure is non-fatal: warn once and keep the pre-execution
    // document (cells retain whatever outputs they already carried).
    let (doc, warning) = match execution::execute(path, workdir, timeout_secs, kernel).await {
        Ok(executed) => (executed, None),
        Err(e) => (parsed, Some(format!("Notebook execution error: {}", e))),
    };

    Ok(blocks_from_notebook(&doc, warning))
}

/// Pure cell walk: markdown cells become formatted text, code cells become
/// collapsible sections numbered by 1-based position with their captured
/// textual outputs in order.
pub fn blocks_from_notebook(doc: &Notebook, warning: Option<String>) -> Rendered {
    let mut blocks = Vec::new();
    if let Some(w) = warning {
        blocks.push(Block::Warning(w));
    }

    for (i, cell) in doc.cells.iter().enumerate() {
        match cell.cell_type.as_str() {
            "markdown" => blocks.push(Block::Markdown(cell.source.joined())),
            "code" => {
                let outputs = cell
                    .outputs
                    .iter()
                    .filter_map(|o| o.display_text())
                    .collect();
                blocks.push(Block::CodeCell {
                    index: i + 1,
                    source: cell.source.joined(),
                    outputs,
                });
            }
            _ => {}
        }
    }

    Rendered { blocks }
}
