use std::fs;

use mlhub::render::{notebook, Block};
use tempfile::TempDir;

const NOTEBOOK: &str = r###"{
    "cells": [
        {"cell_type": "markdown", "metadata": {}, "source": ["## Setup\n", "Load the data."]},
        {"cell_type": "code", "metadata": {}, "execution_count": null, "source": ["x = 1\n", "print(x)"], "outputs": [
            {"output_type": "stream", "name": "stdout", "text": ["1\n"]}
        ]},
        {"cell_type": "code", "metadata": {}, "execution_count": null, "source": "x + 1", "outputs": [
            {"output_type": "execute_result", "execution_count": 2, "metadata": {}, "data": {"text/plain": ["2"]}}
        ]}
    ],
    "metadata": {},
    "nbformat": 4,
    "nbformat_minor": 5
}"###;

/// Execution against a kernel that cannot exist fails whether or not a
/// notebook engine is installed; either way the render must carry exactly
/// one warning and still show every pre-existing cell with its outputs.
#[tokio::test]
async fn failed_execution_warns_once_and_renders_all_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.ipynb");
    fs::write(&path, NOTEBOOK).unwrap();

    let rendered = notebook::render(&path, dir.path(), 5, "mlhub-no-such-kernel")
        .await
        .unwrap();

    let warnings: Vec<&str> = rendered.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Notebook execution error:"));

    // Warning first, then the three cells in document order.
    assert_eq!(rendered.blocks.len(), 4);
    assert!(matches!(rendered.blocks[0], Block::Warning(_)));
    assert_eq!(
        rendered.blocks[1],
        Block::Markdown("## Setup\nLoad the data.".into())
    );
    match &rendered.blocks[2] {
        Block::CodeCell { index, source, outputs } => {
            assert_eq!(*index, 2);
            assert_eq!(source, "x = 1\nprint(x)");
            assert_eq!(outputs, &vec!["1\n".to_string()]);
        }
        other => panic!("unexpected block: {:?}", other),
    }
    match &rendered.blocks[3] {
        Block::CodeCell { index, outputs, .. } => {
            assert_eq!(*index, 3);
            assert_eq!(outputs, &vec!["2".to_string()]);
        }
        other => panic!("unexpected block: {:?}", other),
    }
}

#[tokio::test]
async fn unreadable_notebook_is_fatal_for_the_render_attempt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.ipynb");
    let result = notebook::render(&path, dir.path(), 5, "python3").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn invalid_notebook_json_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.ipynb");
    fs::write(&path, "not a notebook").unwrap();
    let result = notebook::render(&path, dir.path(), 5, "python3").await;
    assert!(result.is_err());
}
