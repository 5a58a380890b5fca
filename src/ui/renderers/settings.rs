use ratatui::{
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color},
    text::{Line, Span, Text},
    Frame
};
use crate::config::{config_path_display, load_config};
use crate::types::{App, SortDirection};

/// Render the settings mode for configuration management
pub fn render(f: &mut Frame, app: &App) {
    // Main layout: Title + Settings Content + Notification (if any)
    let main_chunks = if app.settings_notification.is_some() {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Title header
                Constraint::Min(0),     // Settings content
                Constraint::Length(3),  // Notification
            ])
            .split(f.size())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Title header
                Constraint::Min(0),     // Settings content
            ])
            .split(f.size())
    };

    render_title(f, main_chunks[0]);
    render_settings_content(f, app, main_chunks[1]);

    // Render notification if present
    if app.settings_notification.is_some() && main_chunks.len() > 2 {
        render_notification(f, app, main_chunks[2]);
    }
}

/// Render the title header
fn render_title(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default().title("Settings & Configuration").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav_text = "q: quit | r: remove saved config | Esc/Tab: back to table";
    let nav_paragraph = Paragraph::new(nav_text);
    f.render_widget(nav_paragraph, inner);
}

/// Render the main settings content
fn render_settings_content(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let saved_line = match load_config() {
        Some(saved) => Line::from(format!(
            "Saved configuration: present (stored {})",
            saved.saved_at.format("%Y-%m-%d %H:%M UTC")
        )),
        None => Line::from(vec![
            Span::raw("Saved configuration: "),
            Span::styled("none", Style::default().fg(Color::DarkGray)),
        ]),
    };

    let direction_label = if app.sort_direction == SortDirection::Asc { "ascending" } else { "descending" };
    let text = Text::from(vec![
        Line::from(format!("Config file: {}", config_path_display())),
        saved_line,
        Line::from(""),
        Line::from("Current session:"),
        Line::from(format!("  Data source: {}", app.data_source_label())),
        Line::from(format!(
            "  Net earnings column: {}",
            if app.show_earnings_column { "shown" } else { "hidden" }
        )),
        Line::from(format!("  Sort direction: {}", direction_label)),
        Line::from(""),
        Line::from("Press 'r' to delete the saved configuration file. The next"),
        Line::from("start with no arguments will run the interactive setup again."),
    ]);

    let content = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Configuration"));
    f.render_widget(content, area);
}

/// Render the notification bar
fn render_notification(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if let Some(message) = &app.settings_notification {
        let notification = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Notification"));
        f.render_widget(notification, area);
    }
}
