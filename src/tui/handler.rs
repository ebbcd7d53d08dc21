//! Async event handler for the browser TUI.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use is_terminal::IsTerminal;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::{
    catalog::{Category, Library},
    config::Config,
    download::Download,
    metadata::Metadata,
    render::{self, Block},
};

use super::{
    app::{App, Focus},
    events::TuiEvent,
    ui::render_ui,
};

/// Run the interactive hub browser
pub async fn run_browser(
    cfg: Config,
    library: Library,
    metadata: Metadata,
    category: Option<Category>,
    search: Option<String>,
) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(anyhow::anyhow!(
            "Browser mode requires a proper terminal environment"
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        category.unwrap_or(Category::Algorithms),
        search.unwrap_or_default(),
    );
    app.refresh_listing(&library);

    let (event_tx, event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    let result = run_app(
        &mut terminal,
        &mut app,
        &cfg,
        &library,
        &metadata,
        event_tx,
        event_rx,
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
#[allow(clippy::too_many_arguments)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cfg: &Config,
    library: &Library,
    metadata: &Metadata,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    mut event_rx: mpsc::UnboundedReceiver<TuiEvent>,
) -> Result<()> {
    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || loop {
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if input_tx.send(TuiEvent::Key(key)).is_err() {
                    break; // Channel closed
                }
            }
        }
    });

    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        if let Ok(tui_event) = event_rx.try_recv() {
            match tui_event {
                TuiEvent::Key(key) => {
                    if handle_key_event(app, key, cfg, library, metadata, event_tx.clone())? {
                        break; // Quit requested
                    }
                }
                TuiEvent::Rendered { filename, rendered } => {
                    app.finish_render(filename, rendered);
                }
                TuiEvent::RenderFailed { filename, error } => {
                    app.fail_render(&filename, &error);
                }
                TuiEvent::Downloaded(path) => {
                    app.set_status(format!("Saved {}", path.display()));
                }
                TuiEvent::DownloadFailed(error) => {
                    app.set_status(format!("Download failed: {}", error));
                }
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await;
    }

    Ok(())
}

/// Handle keyboard events; returns true when the app should quit.
fn handle_key_event(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    cfg: &Config,
    library: &Library,
    metadata: &Metadata,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) -> Result<bool> {
    // Help overlay swallows everything except its own toggle keys
    if app.show_help {
        app.toggle_help();
        return Ok(false);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(app.handle_ctrl_c());
    }
    if key.code == KeyCode::Char('h') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_help();
        return Ok(false);
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key, library),
        Focus::Files => return handle_files_key(app, key, cfg, library, metadata, event_tx),
    }

    Ok(false)
}

fn handle_search_key(app: &mut App, key: crossterm::event::KeyEvent, library: &Library) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.focus = Focus::Files,
        KeyCode::Backspace => {
            app.search_pop();
            app.refresh_listing(library);
        }
        KeyCode::Char(c) => {
            app.search_push(c);
            app.refresh_listing(library);
        }
        _ => {}
    }
}

fn handle_files_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    cfg: &Config,
    library: &Library,
    metadata: &Metadata,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Tab | KeyCode::Right => {
            app.next_category();
            app.refresh_listing(library);
        }
        KeyCode::Left => {
            app.prev_category();
            app.refresh_listing(library);
        }
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Enter => {
            if let Some(filename) = app.selected_file().map(|s| s.to_string()) {
                spawn_render(app, &filename, cfg, library, metadata, event_tx);
            }
        }
        KeyCode::Char('d') => {
            if let Some(filename) = app.selected_file().map(|s| s.to_string()) {
                spawn_download(app, &filename, cfg, library, event_tx);
            }
        }
        KeyCode::Char('o') => export_pdf_viewer(app, cfg)?,
        KeyCode::Char('e') => app.toggle_all_cells(),
        KeyCode::Char(c @ '1'..='9') => {
            app.toggle_cell(c as usize - '0' as usize);
        }
        _ => {}
    }
    Ok(false)
}

/// Render the selection in a background task; notebook execution can take
/// a while, so the event loop keeps drawing in the meantime.
fn spawn_render(
    app: &mut App,
    filename: &str,
    cfg: &Config,
    library: &Library,
    metadata: &Metadata,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) {
    app.start_render(filename);
    let filename = filename.to_string();
    let category = app.category;
    let cfg = cfg.clone();
    let library = library.clone();
    let metadata = metadata.clone();
    tokio::spawn(async move {
        let event = match render::render(&library, &metadata, &cfg, category, &filename).await {
            Ok(rendered) => TuiEvent::Rendered { filename, rendered },
            Err(e) => TuiEvent::RenderFailed {
                filename,
                error: e.to_string(),
            },
        };
        let _ = event_tx.send(event);
    });
}

fn spawn_download(
    app: &mut App,
    filename: &str,
    cfg: &Config,
    library: &Library,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) {
    app.set_status(format!("Downloading {} ...", filename));
    let download = Download::new(library.file_path(app.category, filename), filename);
    let target = cfg.download_path();
    tokio::task::spawn_blocking(move || {
        let event = match download.save_to(&target) {
            Ok(path) => TuiEvent::Downloaded(path),
            Err(e) => TuiEvent::DownloadFailed(e.to_string()),
        };
        let _ = event_tx.send(event);
    });
}

/// Write the current PDF embed as a standalone viewer HTML file.
fn export_pdf_viewer(app: &mut App, cfg: &Config) -> Result<()> {
    let Some(rendered) = &app.rendered else {
        return Ok(());
    };
    let embed = rendered.blocks.iter().find_map(|b| match b {
        Block::PdfEmbed { base64, width, height } => Some((base64, *width, *height)),
        _ => None,
    });
    let (Some((base64, width, height)), Some(filename)) = (embed, app.rendered_file.clone())
    else {
        app.set_status("No PDF loaded.".to_string());
        return Ok(());
    };

    let dir = cfg.download_path();
    std::fs::create_dir_all(&dir)?;
    let target = dir.join(format!("{}.html", filename));
    std::fs::write(&target, crate::render::document::viewer_html(base64, width, height))?;
    app.set_status(format!("PDF viewer written to {}", target.display()));
    Ok(())
}
