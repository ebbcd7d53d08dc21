//! Algorithm source view: description followed by the highlighted listing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{Block, Rendered};

pub fn render(path: &Path, description: &str) -> Result<Rendered> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    Ok(Rendered {
        blocks: vec![
            Block::Info(description.to_string()),
            Block::Code {
                language: "python".to_string(),
                source,
            },
        ],
    })
}
