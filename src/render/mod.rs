//! Rendering: one strategy per category, producing tagged blocks that the
//! TUI and the CLI printer both consume.

pub mod code;
pub mod document;
pub mod notebook;
pub mod tabular;

use anyhow::Result;

use crate::catalog::{Category, Library};
use crate::config::Config;
use crate::metadata::Metadata;

/// A unit of rendered content. Each render strategy emits an ordered block
/// list; the output surface decides how to draw each variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Informational note (metadata description, unsupported-type notice).
    Info(String),
    /// Recoverable failure surfaced to the user.
    Warning(String),
    /// Formatted text content.
    Markdown(String),
    /// Syntax-highlighted source listing.
    Code { language: String, source: String },
    /// Collapsible notebook code cell, numbered by 1-based position.
    CodeCell {
        index: usize,
        source: String,
        outputs: Vec<String>,
    },
    /// Tabular preview.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Inline PDF viewer payload (full file, base64-encoded).
    PdfEmbed {
        base64: String,
        width: u32,
        height: u32,
    },
    /// Plain text (captured outputs, extracted previews).
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub blocks: Vec<Block>,
}

impl Rendered {
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Warning(w) => Some(w.as_str()),
            _ => None,
        })
    }
}

/// Dispatch to the category's render strategy; Algorithms sub-dispatches on
/// file extension. An Err here means the file itself could not be read or
/// parsed as its container format, fatal for this render attempt only —
/// collaborator failures (execution, tabular parse) come back as Warning
/// blocks instead.
pub async fn render(
    library: &Library,
    metadata: &Metadata,
    cfg: &Config,
    category: Category,
    filename: &str,
) -> Result<Rendered> {
    let path = library.file_path(category, filename);
    match category {
        Category::Algorithms => {
            // Description precedes everything in this category, notebooks
            // included.
            let description = metadata.describe(filename);
            if filename.to_lowercase().ends_with(".ipynb") {
                let mut rendered = notebook::render(
                    &path,
                    &library.category_dir(category),
                    cfg.notebook_timeout_secs(),
                    &cfg.notebook_kernel(),
                )
                .await?;
                rendered
                    .blocks
                    .insert(0, Block::Info(description.to_string()));
                Ok(rendered)
            } else {
                code::render(&path, description)
            }
        }
        Category::Datasets => Ok(tabular::render(&path, cfg.preview_rows())),
        Category::Notes => document::render(&path, filename),
    }
}
