//! Notebook document model (ipynb JSON, nbformat v4 shape).
//!
//! Only the cell/output shape consumed by the renderer is modeled; any
//! extra fields the execution engine writes are ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    #[serde(default)]
    pub source: SourceText,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    pub output_type: String,
    #[serde(default)]
    pub text: Option<SourceText>,
    #[serde(default)]
    pub data: Option<serde_json::Map<String, Value>>,
}

/// ipynb stores text payloads either as one string or as a line array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Text(String::new())
    }
}

impl SourceText {
    pub fn joined(&self) -> String {
        match self {
            SourceText::Text(s) => s.clone(),
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl Output {
    /// Textual payload for display: `text` for stream outputs, the
    /// text/plain representation for execute_result/display_data, and
    /// nothing otherwise.
    pub fn display_text(&self) -> Option<String> {
        match self.output_type.as_str() {
            "stream" => self.text.as_ref().map(|t| t.joined()),
            "execute_result" | "display_data" => {
                let data = self.data.as_ref()?;
                match data.get("text/plain")? {
                    Value::String(s) => Some(s.clone()),
                    Value::Array(lines) => Some(
                        lines
                            .iter()
                            .filter_map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .concat(),
                    ),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl Notebook {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid notebook document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_text_joins_line_arrays() {
        let st: SourceText = serde_json::from_str(r#"["a\n", "b"]"#).unwrap();
        assert_eq!(st.joined(), "a\nb");
    }

    #[test]
    fn stream_output_uses_text_field() {
        let out: Output = serde_json::from_str(
            r#"{"output_type": "stream", "name": "stdout", "text": ["hello\n"]}"#,
        )
        .unwrap();
        assert_eq!(out.display_text().as_deref(), Some("hello\n"));
    }

    #[test]
    fn display_data_without_text_plain_is_skipped() {
        let out: Output = serde_json::from_str(
            r#"{"output_type": "display_data", "data": {"image/png": "aGk="}}"#,
        )
        .unwrap();
        assert_eq!(out.display_text(), None);
    }
}
