use ratatui::{
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::{Line, Span, Text},
    Frame
};
use crate::data::{StatusAggregation, WorkforceUtilisation};
use crate::types::App;

/// Render the raw-value drill-down for the selected employee
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Raw values
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title("Utilboard - Employee Details").borders(Borders::ALL);
    f.render_widget(title, main_chunks[0]);

    render_raw_values(f, app, main_chunks[1]);

    let footer = Paragraph::new("Esc: back to table | q: quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, main_chunks[2]);
}

fn render_raw_values(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let text = match app.selected_row {
        Some(index) => {
            let row = &app.rows[index];
            let employee = app.records[index].employees.as_ref();

            let mut lines = vec![
                Line::from(Span::styled(
                    row.person.clone(),
                    Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
                )),
                Line::from(""),
            ];
            lines.extend(utilisation_lines(employee.and_then(|e| e.workforce_utilisation.as_ref())));
            lines.push(Line::from(""));
            lines.extend(salary_lines(employee.and_then(|e| e.status_aggregation.as_ref())));
            Text::from(lines)
        }
        None => Text::from("No employee selected"),
    };

    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Raw Source Values"));
    f.render_widget(panel, area);
}

fn utilisation_lines(utilisation: Option<&WorkforceUtilisation>) -> Vec<Line<'static>> {
    let Some(utilisation) = utilisation else {
        return vec![Line::from(Span::styled(
            "No workforce utilisation data",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let mut lines = vec![
        value_line("Last 12 months (fraction)", utilisation.utilisation_rate_last_twelve_months.as_deref()),
        value_line("Year to date (fraction)", utilisation.utilisation_rate_year_to_date.as_deref()),
        value_line(
            "Monthly cost difference",
            utilisation.monthly_cost_difference.map(|v| v.to_string()).as_deref(),
        ),
        value_line("Quarter earnings", utilisation.quarter_earnings.as_deref()),
        Line::from(""),
        Line::from("Recorded months:"),
    ];

    match utilisation.last_three_months_individually.as_deref() {
        Some(months) if !months.is_empty() => {
            for entry in months {
                lines.push(value_line(&format!("  {}", entry.month), entry.utilisation_rate.as_deref()));
            }
        }
        _ => lines.push(Line::from(Span::styled(
            "  none recorded",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines
}

fn salary_lines(aggregation: Option<&StatusAggregation>) -> Vec<Line<'static>> {
    // The source writes the string "null" for missing salaries; show it as absent
    let salary = aggregation
        .and_then(|a| a.monthly_salary.as_deref())
        .filter(|salary| *salary != "null");
    vec![value_line("Monthly salary", salary)]
}

fn value_line(label: &str, value: Option<&str>) -> Line<'static> {
    match value {
        Some(value) => Line::from(format!("{}: {}", label, value)),
        None => Line::from(vec![
            Span::raw(format!("{}: ", label)),
            Span::styled("absent", Style::default().fg(Color::DarkGray)),
        ]),
    }
}
