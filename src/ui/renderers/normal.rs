use ratatui::{
    widgets::{Block, Borders, Paragraph, Table, Row, Cell, TableState},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    Frame
};
use crate::types::{App, SortDirection, COLUMNS};

/// Render the normal mode view
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Employee table
                Constraint::Length(3), // Summary
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title("Utilboard").borders(Borders::ALL);
    f.render_widget(title, main_chunks[0]);

    render_employee_table(f, app, main_chunks[1]);
    render_summary_bar(f, app, main_chunks[2]);
    render_footer(f, app, main_chunks[3]);
}

/// Render the employee table
fn render_employee_table(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    // Last column is the net-earnings proxy and can be hidden
    let column_count = if app.show_earnings_column { COLUMNS.len() } else { COLUMNS.len() - 1 };

    let mut header_titles: Vec<String> = COLUMNS[..column_count]
        .iter()
        .enumerate()
        .map(|(i, column)| format!("({}) {}", i + 1, column.header))
        .collect();

    let sort_indicator = if app.sort_direction == SortDirection::Asc { " ▲" } else { " ▼" };
    let sort_index = app.sort_by.index();
    if sort_index < column_count {
        header_titles[sort_index].push_str(sort_indicator);
    }

    let header_cells: Vec<_> = header_titles
        .iter()
        .map(|h| Cell::from(h.as_str()).style(Style::default().fg(Color::Red)))
        .collect();
    let header = Row::new(header_cells);

    let sorted_rows = app.sorted_rows();
    let rows = sorted_rows.iter().map(|(index, data)| {
        let mut style = Style::default();
        if app.selected_row == Some(*index) {
            style = style.add_modifier(Modifier::BOLD);
        }

        let mut cells = vec![
            Cell::from(data.person.clone()),
            Cell::from(data.past_12_months.clone()),
            Cell::from(data.y2d.clone()),
            Cell::from(data.june.clone()),
            Cell::from(data.july.clone()),
            Cell::from(data.august.clone()),
        ];
        if app.show_earnings_column {
            cells.push(Cell::from(data.net_earnings_prev_month.clone()));
        }
        Row::new(cells).style(style)
    });

    let widths = if app.show_earnings_column {
        [
            Constraint::Percentage(22),
            Constraint::Percentage(13),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(21),
        ]
        .as_slice()
    } else {
        [
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ]
        .as_slice()
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Employees"));

    // Create table state and set selection to the currently selected row
    let mut table_state = TableState::default();
    if let Some(position) = app.selected_position(&sorted_rows) {
        table_state.select(Some(position));
    }

    f.render_stateful_widget(table, area, &mut table_state);
}

/// Render the summary bar
fn render_summary_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let summary_text = format!(
        "👥 {} employees | 📄 Source: {}",
        app.rows.len(),
        app.data_source_label()
    );
    let summary = Paragraph::new(summary_text)
        .block(Block::default().borders(Borders::ALL).title("Workforce Utilisation"));
    f.render_widget(summary, area);
}

/// Render the footer
fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let footer_text = if app.show_earnings_column {
        "q: quit | 1-7: sort | d: direction | e: hide earnings | ↑/↓: select | Enter: details | Tab: settings"
    } else {
        "q: quit | 1-6: sort | d: direction | e: show earnings | ↑/↓: select | Enter: details | Tab: settings"
    };
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
