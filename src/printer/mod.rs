//! Printers: text, markdown (termimad), and rendered-block output.

use std::fs;
use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use termimad::MadSkin;
use unicode_width::UnicodeWidthStr;

use crate::render::{document, Block, Rendered};

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    pub fn print(&self, text: &str) {
        if let Some(c) = self.color {
            match c {
                "green" => println!("{}", text.green()),
                "cyan" => println!("{}", text.cyan()),
                "magenta" => println!("{}", text.magenta()),
                "yellow" => println!("{}", text.yellow()),
                _ => println!("{}", text),
            }
        } else {
            println!("{}", text);
        }
    }
}

pub struct MarkdownPrinter {
    pub skin: MadSkin,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self { skin: MadSkin::default() }
    }
}

impl MarkdownPrinter {
    pub fn print(&self, text: &str) {
        self.skin.print_text(text);
        println!();
    }
}

/// Prints a rendered block list to stdout for the non-interactive `--show`
/// mode. PDF embeds are written out as a standalone viewer file when an
/// export directory is given, otherwise only announced.
pub struct BlockPrinter {
    markdown: bool,
}

impl BlockPrinter {
    pub fn new(markdown: bool) -> Self {
        Self { markdown }
    }

    pub fn print_blocks(&self, rendered: &Rendered, viewer_export: Option<&Path>) -> Result<()> {
        let md = MarkdownPrinter::default();
        for block in &rendered.blocks {
            match block {
                Block::Info(text) => TextPrinter { color: Some("cyan") }.print(text),
                Block::Warning(text) => TextPrinter { color: Some("yellow") }.print(text),
                Block::Text(text) => println!("{}", text),
                Block::Markdown(text) => {
                    if self.markdown {
                        md.print(text);
                    } else {
                        println!("{}", text);
                    }
                }
                Block::Code { language, source } => {
                    if self.markdown {
                        md.print(&format!("```{}\n{}\n```", language, source));
                    } else {
                        println!("{}", source);
                    }
                }
                Block::CodeCell { index, source, outputs } => {
                    TextPrinter { color: Some("green") }.print(&format!("Code Cell {}", index));
                    if self.markdown {
                        md.print(&format!("```python\n{}\n```", source));
                    } else {
                        println!("{}", source);
                    }
                    for output in outputs {
                        println!("{}", output.trim_end());
                    }
                }
                Block::Table { headers, rows } => print_table(headers, rows),
                Block::PdfEmbed { base64, width, height } => {
                    match viewer_export {
                        Some(path) => {
                            fs::write(path, document::viewer_html(base64, *width, *height))?;
                            TextPrinter { color: Some("cyan") }
                                .print(&format!("PDF viewer written to {}", path.display()));
                        }
                        None => TextPrinter { color: Some("cyan") }.print(
                            "PDF embedded viewer available; pass --out to export it as HTML.",
                        ),
                    }
                }
            }
        }
        Ok(())
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            } else {
                widths.push(cell.width());
            }
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:w$}", c, w = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers).bold());
    for row in rows {
        println!("{}", line(row));
    }
}
