use std::fs;

use mlhub::catalog::{Category, Library};
use mlhub::config::Config;
use mlhub::metadata::Metadata;
use mlhub::render::{self, Block};
use tempfile::TempDir;

fn hub() -> TempDir {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    fs::create_dir(base.join("Algorithms")).unwrap();
    fs::create_dir(base.join("Datasets")).unwrap();
    fs::create_dir(base.join("Notes")).unwrap();

    fs::write(base.join("Algorithms/kmeans.py"), "print('kmeans')\n").unwrap();
    fs::write(
        base.join("Algorithms/intro.ipynb"),
        r#"{"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#,
    )
    .unwrap();
    let mut csv = String::from("sepal,petal\n");
    for i in 0..20 {
        csv.push_str(&format!("{},{}\n", i, i + 1));
    }
    fs::write(base.join("Datasets/iris.csv"), csv).unwrap();
    fs::write(base.join("Datasets/broken.csv"), "a,b\n1,2,3\n").unwrap();
    fs::write(base.join("Notes/model.bin"), [0u8, 1, 2]).unwrap();
    fs::write(base.join("Notes/summary.md"), "# Summary\nDone.\n").unwrap();
    fs::write(
        base.join("metadata.json"),
        r#"{"kmeans.py": "Clustering demo.", "intro.ipynb": "Notebook walkthrough."}"#,
    )
    .unwrap();

    dir
}

#[tokio::test]
async fn algorithms_source_renders_description_then_code() {
    let dir = hub();
    let lib = Library::new(dir.path().to_path_buf());
    let md = Metadata::load(&dir.path().join("metadata.json"));
    let cfg = Config::load();

    let rendered = render::render(&lib, &md, &cfg, Category::Algorithms, "kmeans.py")
        .await
        .unwrap();

    assert_eq!(rendered.blocks[0], Block::Info("Clustering demo.".into()));
    match &rendered.blocks[1] {
        Block::Code { language, source } => {
            assert_eq!(language, "python");
            assert_eq!(source, "print('kmeans')\n");
        }
        other => panic!("unexpected block: {:?}", other),
    }
}

/// The description leads the notebook view too, ahead of any execution
/// warning, whether or not a notebook engine is installed.
#[tokio::test]
async fn notebook_render_starts_with_metadata_description() {
    let dir = hub();
    let lib = Library::new(dir.path().to_path_buf());
    let md = Metadata::load(&dir.path().join("metadata.json"));
    let cfg = Config::load();

    let rendered = render::render(&lib, &md, &cfg, Category::Algorithms, "intro.ipynb")
        .await
        .unwrap();

    assert_eq!(rendered.blocks[0], Block::Info("Notebook walkthrough.".into()));
    // An execution failure, if any, lands after the description.
    for (i, block) in rendered.blocks.iter().enumerate() {
        if matches!(block, Block::Warning(_)) {
            assert!(i > 0);
        }
    }
}

#[tokio::test]
async fn datasets_render_first_ten_rows() {
    let dir = hub();
    let lib = Library::new(dir.path().to_path_buf());
    let md = Metadata::default();
    let cfg = Config::load();

    let rendered = render::render(&lib, &md, &cfg, Category::Datasets, "iris.csv")
        .await
        .unwrap();

    match &rendered.blocks[1] {
        Block::Table { headers, rows } => {
            assert_eq!(headers, &vec!["sepal".to_string(), "petal".to_string()]);
            assert_eq!(rows.len(), 10);
        }
        other => panic!("unexpected block: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_dataset_warns_and_renders_nothing_else() {
    let dir = hub();
    let lib = Library::new(dir.path().to_path_buf());
    let md = Metadata::default();
    let cfg = Config::load();

    let rendered = render::render(&lib, &md, &cfg, Category::Datasets, "broken.csv")
        .await
        .unwrap();

    assert_eq!(rendered.blocks.len(), 1);
    assert_eq!(rendered.warnings().count(), 1);
}

#[tokio::test]
async fn notes_dispatch_on_extension() {
    let dir = hub();
    let lib = Library::new(dir.path().to_path_buf());
    let md = Metadata::default();
    let cfg = Config::load();

    let rendered = render::render(&lib, &md, &cfg, Category::Notes, "summary.md")
        .await
        .unwrap();
    assert_eq!(rendered.blocks, vec![Block::Markdown("# Summary\nDone.\n".into())]);

    let rendered = render::render(&lib, &md, &cfg, Category::Notes, "model.bin")
        .await
        .unwrap();
    match &rendered.blocks[0] {
        Block::Info(msg) => assert!(msg.contains("Use download")),
        other => panic!("unexpected block: {:?}", other),
    }
}
