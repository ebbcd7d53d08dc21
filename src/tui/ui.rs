//! UI layout and rendering logic for the browser TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block as UiBlock, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::{App, Focus};
use crate::catalog::ALL_CATEGORIES;
use crate::render::Block;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Browser area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let browser = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(outer[0]);

    render_sidebar(frame, app, browser[0]);
    render_content(frame, app, browser[1]);
    render_status_bar(frame, app, outer[1]);

    if app.show_help {
        render_help_overlay(frame);
    }
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // File list
        ])
        .split(area);

    render_category_tabs(frame, app, layout[0]);
    render_search_box(frame, app, layout[1]);
    render_file_list(frame, app, layout[2]);
}

fn render_category_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ALL_CATEGORIES
        .iter()
        .map(|c| Line::from(c.label()))
        .collect();
    let selected = ALL_CATEGORIES
        .iter()
        .position(|c| *c == app.category)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(UiBlock::default().borders(Borders::ALL).title("Resources"));

    frame.render_widget(tabs, area);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = format!("Search {}", app.category.label());
    let search = Paragraph::new(app.search.as_str())
        .style(style)
        .block(UiBlock::default().borders(Borders::ALL).title(title));
    frame.render_widget(search, area);

    if app.focus == Focus::Search {
        let x = area.x + 1 + app.search.width() as u16;
        frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

fn render_file_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|f| ListItem::new(f.as_str()))
        .collect();

    let title = format!("Select {} ({})", app.category.label(), app.files.len());
    let list = List::new(items)
        .block(UiBlock::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.files.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.rendered_file {
        Some(f) => format!("{}: {}", app.category.label(), f),
        None => "Preview".to_string(),
    };

    let mut lines = Vec::new();
    if app.is_rendering {
        lines.push(Line::from(Span::styled(
            "Rendering ...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(rendered) = &app.rendered {
        for block in &rendered.blocks {
            lines.extend(block_lines(block, app));
            lines.push(Line::from(""));
        }
    } else {
        lines.push(Line::from("Select a file and press Enter."));
    }

    let total_lines = lines.len();
    let available_height = area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(available_height);
    let scroll_y = app.content_scroll.min(max_scroll) as u16;

    let paragraph = Paragraph::new(Text::from(lines))
        .block(UiBlock::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((scroll_y, 0));

    frame.render_widget(paragraph, area);
}

/// Convert one rendered block into styled lines, honoring collapse state
/// for notebook code cells.
fn block_lines<'a>(block: &'a Block, app: &App) -> Vec<Line<'a>> {
    match block {
        Block::Info(text) => styled_lines(text, Style::default().fg(Color::Cyan)),
        Block::Warning(text) => styled_lines(text, Style::default().fg(Color::Yellow)),
        Block::Text(text) => styled_lines(text, Style::default()),
        Block::Markdown(text) => styled_lines(text, Style::default().fg(Color::White)),
        Block::Code { source, .. } => styled_lines(source, Style::default().fg(Color::Green)),
        Block::CodeCell { index, source, outputs } => {
            let expanded = app.expanded_cells.contains(index);
            let marker = if expanded { "[-]" } else { "[+]" };
            let header = format!(
                "{} Code Cell {} ({} lines, {} outputs)",
                marker,
                index,
                source.lines().count(),
                outputs.len()
            );
            let mut lines = vec![Line::from(Span::styled(
                header,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))];
            if expanded {
                lines.extend(styled_lines(source, Style::default().fg(Color::Green)));
                for output in outputs {
                    lines.extend(styled_lines(output, Style::default().fg(Color::Gray)));
                }
            }
            lines
        }
        Block::Table { headers, rows } => {
            let widths = column_widths(headers, rows);
            let fmt_row = |cells: &[String]| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{:w$}", c, w = widths.get(i).copied().unwrap_or(0)))
                    .collect::<Vec<_>>()
                    .join("  ")
            };
            let mut lines = vec![Line::from(Span::styled(
                fmt_row(headers),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            for row in rows {
                lines.push(Line::from(fmt_row(row)));
            }
            lines
        }
        Block::PdfEmbed { base64, .. } => {
            // 3 base64 chars ~ 4/3 bytes; close enough for a size hint.
            let approx_kb = base64.len() * 3 / 4 / 1024;
            vec![Line::from(Span::styled(
                format!("Embedded PDF ({} KB). Press o to export the HTML viewer.", approx_kb),
                Style::default().fg(Color::Cyan),
            ))]
        }
    }
}

/// Column widths over headers and every row, including cells past the
/// header count so ragged-wide rows stay aligned.
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
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
    widths
}

fn styled_lines<'a>(text: &'a str, style: Style) -> Vec<Line<'a>> {
    text.lines()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from("Hub Browser Help"),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  Tab / ←→   - Switch category"),
        Line::from("  ↑/↓        - Select file"),
        Line::from("  Enter      - Render selection"),
        Line::from("  PgUp/PgDn  - Scroll content"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  /          - Edit search filter (Enter/Esc to leave)"),
        Line::from("  d          - Download selected file"),
        Line::from("  o          - Export PDF viewer HTML"),
        Line::from("  1-9        - Toggle one code cell"),
        Line::from("  e          - Toggle all code cells"),
        Line::from(""),
        Line::from("  Ctrl+H     - Toggle this help"),
        Line::from("  q / double Ctrl+C - Quit"),
    ];

    let help = Paragraph::new(Text::from(help_lines))
        .block(
            UiBlock::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_widths_cover_cells_past_the_header_count() {
        let headers = vec!["a".to_string(), "bb".to_string()];
        let rows = vec![vec![
            "1".to_string(),
            "2".to_string(),
            "wide-extra".to_string(),
        ]];
        let widths = column_widths(&headers, &rows);
        assert_eq!(widths, vec![1, 2, 10]);
    }
}
