//! Notes view: inline PDF embed, formatted text, or a download hint.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Block, Rendered};

pub const PDF_FRAME_WIDTH: u32 = 700;
pub const PDF_FRAME_HEIGHT: u32 = 800;

pub fn render(path: &Path, filename: &str) -> Result<Rendered> {
    let lower = filename.to_lowercase();

    if lower.ends_with(".pdf") {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
        let mut blocks = vec![Block::PdfEmbed {
            base64: STANDARD.encode(&bytes),
            width: PDF_FRAME_WIDTH,
            height: PDF_FRAME_HEIGHT,
        }];
        // Terminal-side preview; the embed block alone satisfies the
        // contract, so extraction failures stay silent.
        if let Some(text) = path.to_str().and_then(|p| pdf_extract::extract_text(p).ok()) {
            if !text.trim().is_empty() {
                blocks.push(Block::Text(text));
            }
        }
        return Ok(Rendered { blocks });
    }

    if lower.ends_with(".txt") || lower.ends_with(".md") {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        return Ok(Rendered {
            blocks: vec![Block::Markdown(content)],
        });
    }

    Ok(Rendered {
        blocks: vec![Block::Info(
            "File type cannot be displayed in browser. Use download.".to_string(),
        )],
    })
}

/// Inline viewer markup for a PDF embed, data-URI source at the fixed
/// 700x800 frame size.
pub fn viewer_html(base64: &str, width: u32, height: u32) -> String {
    format!(
        "<iframe src=\"data:application/pdf;base64,{}\" width=\"{}\" height=\"{}\" type=\"application/pdf\"></iframe>",
        base64, width, height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_extension_is_informational() {
        let rendered = render(Path::new("/tmp/whatever.docx"), "whatever.docx").unwrap();
        assert_eq!(rendered.blocks.len(), 1);
        match &rendered.blocks[0] {
            Block::Info(msg) => assert!(msg.contains("Use download")),
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn pdf_embed_decodes_to_exact_file_bytes() {
        let payload = b"%PDF-1.4 fake minimal body";
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(payload).unwrap();
        let rendered = render(file.path(), "fake.pdf").unwrap();
        match &rendered.blocks[0] {
            Block::PdfEmbed { base64, width, height } => {
                assert_eq!(*width, 700);
                assert_eq!(*height, 800);
                let decoded = STANDARD.decode(base64).unwrap();
                assert_eq!(decoded.len(), payload.len());
                assert_eq!(decoded, payload);
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn viewer_html_wraps_data_uri() {
        let html = viewer_html("QUJD", 700, 800);
        assert!(html.starts_with("<iframe src=\"data:application/pdf;base64,QUJD\""));
        assert!(html.contains("width=\"700\" height=\"800\""));
    }
}
