use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use mlhub::catalog::Library;
use mlhub::cli;
use mlhub::config::Config;
use mlhub::download::Download;
use mlhub::metadata::Metadata;
use mlhub::printer::BlockPrinter;
use mlhub::{render, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // CLI overrides land in the environment before config load, so the
    // config overlay order stays the single source of truth.
    if let Some(dir) = &args.base_dir {
        std::env::set_var("HUB_BASE_DIR", dir);
    }
    if let Some(secs) = args.timeout {
        std::env::set_var("NOTEBOOK_TIMEOUT", secs.to_string());
    }

    let cfg = Config::load();
    let library = Library::new(cfg.base_dir());
    let metadata = Metadata::load(&cfg.metadata_path());

    let md = if args.no_md {
        false
    } else if args.md {
        true
    } else {
        cfg.get_bool("PRETTIFY_MARKDOWN")
    };

    if args.list {
        let Some(category) = args.category else {
            bail!("--category is required with --list");
        };
        match library.list(category, args.search.as_deref()) {
            Ok(files) => {
                for f in files {
                    println!("{}", f);
                }
            }
            // Visible failure, empty listing: report once and keep going.
            Err(e) => eprintln!("{}", e.to_string().yellow()),
        }
        return Ok(());
    }

    if args.show {
        let (Some(category), Some(file)) = (args.category, args.file.as_deref()) else {
            bail!("--show requires --category and --file");
        };
        println!("{}: {}", category.label().bold(), file);
        let rendered = render::render(&library, &metadata, &cfg, category, file).await?;
        let viewer = args.out.as_ref().map(|dir| {
            let _ = std::fs::create_dir_all(dir);
            dir.join(format!("{}.html", file))
        });
        BlockPrinter::new(md).print_blocks(&rendered, viewer.as_deref())?;
        return Ok(());
    }

    if args.download {
        let (Some(category), Some(file)) = (args.category, args.file.as_deref()) else {
            bail!("--download requires --category and --file");
        };
        let target_dir = args.out.unwrap_or_else(|| cfg.download_path());
        let saved = Download::new(library.file_path(category, file), file).save_to(&target_dir)?;
        println!("Saved {}", saved.display());
        return Ok(());
    }

    tui::run_browser(cfg, library, metadata, args.category, args.search).await
}
