//! Browser TUI state management.

use std::collections::HashSet;
use std::time::Instant;

use crate::catalog::{Category, Library, ALL_CATEGORIES};
use crate::render::{Block, Rendered};

/// Which pane receives character input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Search,
}

/// Application state for the browser TUI
#[derive(Debug)]
pub struct App {
    /// Active resource category
    pub category: Category,
    /// Search box contents (case-insensitive filename filter)
    pub search: String,
    /// Current input focus
    pub focus: Focus,
    /// Filtered file listing for the active category
    pub files: Vec<String>,
    /// Selection index into `files`
    pub selected: usize,
    /// File whose render currently fills the content pane
    pub rendered_file: Option<String>,
    /// Blocks for the content pane
    pub rendered: Option<Rendered>,
    /// 1-based indices of expanded notebook code cells
    pub expanded_cells: HashSet<usize>,
    /// Content pane scroll offset (lines from the top)
    pub content_scroll: usize,
    /// Whether a render task is in flight
    pub is_rendering: bool,
    /// Status line text
    pub status_message: String,
    /// Whether to show help
    pub show_help: bool,
    /// Timestamp of last Ctrl+C press for double Ctrl+C detection
    pub last_ctrl_c_time: Option<Instant>,
}

const STATUS_HINT: &str =
    "enter=view  d=download  /=search  tab=category  e=cells  ctrl+h help";

impl App {
    pub fn new(category: Category, search: String) -> Self {
        Self {
            category,
            search,
            focus: Focus::Files,
            files: Vec::new(),
            selected: 0,
            rendered_file: None,
            rendered: None,
            expanded_cells: HashSet::new(),
            content_scroll: 0,
            is_rendering: false,
            status_message: STATUS_HINT.to_string(),
            show_help: false,
            last_ctrl_c_time: None,
        }
    }

    /// Recompute the listing for the active category and search term.
    /// A missing category directory is reported once in the status line;
    /// the listing degrades to empty.
    pub fn refresh_listing(&mut self, library: &Library) {
        let search = if self.search.is_empty() {
            None
        } else {
            Some(self.search.as_str())
        };
        match library.list(self.category, search) {
            Ok(files) => {
                self.files = files;
                self.status_message = STATUS_HINT.to_string();
            }
            Err(e) => {
                self.files = Vec::new();
                self.status_message = format!("Error: {}", e);
            }
        }
        self.selected = 0;
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.files.get(self.selected).map(|s| s.as_str())
    }

    pub fn select_next(&mut self) {
        if !self.files.is_empty() && self.selected + 1 < self.files.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn next_category(&mut self) {
        let i = ALL_CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        self.category = ALL_CATEGORIES[(i + 1) % ALL_CATEGORIES.len()];
    }

    pub fn prev_category(&mut self) {
        let i = ALL_CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        self.category = ALL_CATEGORIES[(i + ALL_CATEGORIES.len() - 1) % ALL_CATEGORIES.len()];
    }

    // ----- search input -----

    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn search_pop(&mut self) {
        self.search.pop();
    }

    // ----- render lifecycle -----

    pub fn start_render(&mut self, filename: &str) {
        self.is_rendering = true;
        self.status_message = format!("Rendering {} ...", filename);
    }

    pub fn finish_render(&mut self, filename: String, rendered: Rendered) {
        self.is_rendering = false;
        self.content_scroll = 0;
        self.expanded_cells.clear();
        // Keep the hint unless the render carried warnings worth echoing.
        self.status_message = match rendered.warnings().next() {
            Some(w) => w.to_string(),
            None => STATUS_HINT.to_string(),
        };
        self.rendered_file = Some(filename);
        self.rendered = Some(rendered);
    }

    pub fn fail_render(&mut self, filename: &str, error: &str) {
        self.is_rendering = false;
        self.status_message = format!("Error rendering {}: {}", filename, error);
    }

    // ----- code cell collapse state -----

    pub fn toggle_cell(&mut self, index: usize) {
        if !self.expanded_cells.remove(&index) {
            self.expanded_cells.insert(index);
        }
    }

    pub fn toggle_all_cells(&mut self) {
        let Some(rendered) = &self.rendered else {
            return;
        };
        let cells: Vec<usize> = rendered
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::CodeCell { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        if cells.iter().all(|i| self.expanded_cells.contains(i)) {
            self.expanded_cells.clear();
        } else {
            self.expanded_cells.extend(cells);
        }
    }

    // ----- content scrolling -----

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.content_scroll += 1;
    }

    pub fn page_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.content_scroll += 10;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
    }

    /// Handle Ctrl+C press and detect double press for quit.
    /// Returns true if should quit (double Ctrl+C), false otherwise.
    pub fn handle_ctrl_c(&mut self) -> bool {
        const DOUBLE_CTRL_C_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(500);

        let now = Instant::now();
        if let Some(last_time) = self.last_ctrl_c_time {
            if now.duration_since(last_time) <= DOUBLE_CTRL_C_TIMEOUT {
                self.last_ctrl_c_time = None;
                return true;
            }
        }

        self.last_ctrl_c_time = Some(now);
        self.status_message = "Press Ctrl+C again to quit".to_string();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycling_wraps() {
        let mut app = App::new(Category::Algorithms, String::new());
        app.next_category();
        assert_eq!(app.category, Category::Datasets);
        app.next_category();
        assert_eq!(app.category, Category::Notes);
        app.next_category();
        assert_eq!(app.category, Category::Algorithms);
        app.prev_category();
        assert_eq!(app.category, Category::Notes);
    }

    #[test]
    fn toggle_all_cells_flips_between_states() {
        let mut app = App::new(Category::Algorithms, String::new());
        app.rendered = Some(Rendered {
            blocks: vec![
                Block::CodeCell { index: 1, source: "a".into(), outputs: vec![] },
                Block::CodeCell { index: 2, source: "b".into(), outputs: vec![] },
            ],
        });
        app.toggle_all_cells();
        assert_eq!(app.expanded_cells.len(), 2);
        app.toggle_all_cells();
        assert!(app.expanded_cells.is_empty());
    }
}
