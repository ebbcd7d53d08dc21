//! Dataset view: header plus the first rows of a delimited file.

use std::path::Path;

use anyhow::Result;

use super::{Block, Rendered};

/// Parse failures are caught here: one warning block, nothing else.
pub fn render(path: &Path, max_rows: usize) -> Rendered {
    match preview(path, max_rows) {
        Ok((headers, rows)) => Rendered {
            blocks: vec![
                Block::Info("Preview of dataset:".to_string()),
                Block::Table { headers, rows },
            ],
        },
        Err(e) => Rendered {
            blocks: vec![Block::Warning(format!("Could not read dataset: {}", e))],
        },
    }
}

fn preview(path: &Path, max_rows: usize) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.iter().map(|h| h.to_string()).collect();

    // Parse the whole file, not just the preview window: a malformed row
    // anywhere must fail the render, matching a whole-file load.
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if rows.len() < max_rows {
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }
    }

    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn well_formed_csv_previews_first_rows() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b").unwrap();
        for i in 0..15 {
            writeln!(file, "{},{}", i, i * 2).unwrap();
        }
        let rendered = render(file.path(), 10);
        match &rendered.blocks[1] {
            Block::Table { headers, rows } => {
                assert_eq!(headers, &vec!["a".to_string(), "b".to_string()]);
                assert_eq!(rows.len(), 10);
                assert_eq!(rows[0], vec!["0".to_string(), "0".to_string()]);
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn malformed_csv_yields_single_warning() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,2,3,4").unwrap();
        let rendered = render(file.path(), 10);
        assert_eq!(rendered.blocks.len(), 1);
        assert_eq!(rendered.warnings().count(), 1);
        assert!(rendered
            .warnings()
            .next()
            .unwrap()
            .starts_with("Could not read dataset:"));
    }

    #[test]
    fn malformed_row_past_the_preview_window_still_warns() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "a,b").unwrap();
        for i in 0..11 {
            writeln!(file, "{},{}", i, i).unwrap();
        }
        writeln!(file, "ragged,row,extra").unwrap();
        let rendered = render(file.path(), 10);
        assert_eq!(rendered.blocks.len(), 1);
        assert_eq!(rendered.warnings().count(), 1);
    }

    #[test]
    fn missing_file_yields_single_warning() {
        let rendered = render(Path::new("/nonexistent/data.csv"), 10);
        assert_eq!(rendered.warnings().count(), 1);
        assert_eq!(rendered.blocks.len(), 1);
    }
}
