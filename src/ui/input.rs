use crossterm::event::KeyCode;

use crate::config::reset_config;
use crate::types::{App, AppMode, SortColumn};

/// Handle keyboard input events for all application modes
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match app.mode {
        AppMode::Normal => handle_normal_mode_keys(app, key),
        AppMode::Detail => handle_detail_mode_keys(app, key),
        AppMode::Settings => handle_settings_mode_keys(app, key),
    }
}

/// Handle key events in the table view
fn handle_normal_mode_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true, // Signal to quit
        KeyCode::Char(digit @ '1'..='7') => {
            if let Some(column) = SortColumn::from_digit(digit) {
                // The hidden earnings column is not a sort target
                if app.show_earnings_column || column != SortColumn::NetEarnings {
                    app.sort_by = column;
                }
            }
        }
        KeyCode::Char('d') => app.toggle_sort_direction(),
        KeyCode::Char('e') => {
            app.show_earnings_column = !app.show_earnings_column;
            if !app.show_earnings_column && app.sort_by == SortColumn::NetEarnings {
                app.sort_by = SortColumn::Person;
            }
        }
        KeyCode::Up => select_previous(app),
        KeyCode::Down => select_next(app),
        KeyCode::Enter => {
            if app.selected_row.is_some() {
                app.mode = AppMode::Detail;
            }
        }
        KeyCode::Tab => app.mode = AppMode::Settings,
        _ => {}
    }
    false
}

/// Handle key events in the employee detail view
fn handle_detail_mode_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Enter => app.mode = AppMode::Normal,
        _ => {}
    }
    false
}

/// Handle key events in the settings view
fn handle_settings_mode_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Tab => app.mode = AppMode::Normal,
        KeyCode::Char('r') => match reset_config() {
            Ok(true) => app.notify("✅ Saved configuration removed".to_string()),
            Ok(false) => app.notify("ℹ️  No saved configuration found".to_string()),
            Err(e) => app.notify(format!("❌ Could not remove configuration: {}", e)),
        },
        _ => {}
    }
    false
}

/// Move the selection one position up in the sorted order
fn select_previous(app: &mut App) {
    let sorted = app.sorted_rows();
    if sorted.is_empty() {
        return;
    }
    let position = match app.selected_position(&sorted) {
        Some(position) if position > 0 => position - 1,
        Some(position) => position,
        None => 0,
    };
    app.selected_row = Some(sorted[position].0);
}

/// Move the selection one position down in the sorted order
fn select_next(app: &mut App) {
    let sorted = app.sorted_rows();
    if sorted.is_empty() {
        return;
    }
    let position = match app.selected_position(&sorted) {
        Some(position) if position + 1 < sorted.len() => position + 1,
        Some(position) => position,
        None => 0,
    };
    app.selected_row = Some(sorted[position].0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawRecord;
    use crate::projector::project;
    use crate::types::SortDirection;

    fn app() -> App {
        let records = vec![RawRecord::default(), RawRecord::default(), RawRecord::default()];
        let rows = project(&records);
        App::new(records, rows, true, None)
    }

    #[test]
    fn digit_key_selects_sort_column() {
        let mut app = app();
        assert!(!handle_key_event(&mut app, KeyCode::Char('3')));
        assert_eq!(app.sort_by, SortColumn::YearToDate);
    }

    #[test]
    fn direction_key_toggles() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('d'));
        assert_eq!(app.sort_direction, SortDirection::Desc);
        handle_key_event(&mut app, KeyCode::Char('d'));
        assert_eq!(app.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn hiding_earnings_column_clears_its_sort() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('7'));
        assert_eq!(app.sort_by, SortColumn::NetEarnings);
        handle_key_event(&mut app, KeyCode::Char('e'));
        assert!(!app.show_earnings_column);
        assert_eq!(app.sort_by, SortColumn::Person);
        // And while hidden, '7' is ignored
        handle_key_event(&mut app, KeyCode::Char('7'));
        assert_eq!(app.sort_by, SortColumn::Person);
    }

    #[test]
    fn selection_moves_and_clamps_at_the_edges() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Down);
        assert!(app.selected_row.is_some());

        handle_key_event(&mut app, KeyCode::Down);
        handle_key_event(&mut app, KeyCode::Down);
        handle_key_event(&mut app, KeyCode::Down);
        let sorted = app.sorted_rows();
        assert_eq!(app.selected_position(&sorted), Some(sorted.len() - 1));

        handle_key_event(&mut app, KeyCode::Up);
        handle_key_event(&mut app, KeyCode::Up);
        handle_key_event(&mut app, KeyCode::Up);
        let sorted = app.sorted_rows();
        assert_eq!(app.selected_position(&sorted), Some(0));
    }

    #[test]
    fn enter_requires_a_selection() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);

        handle_key_event(&mut app, KeyCode::Down);
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Detail);

        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn quit_works_from_every_mode() {
        for mode in [AppMode::Normal, AppMode::Detail, AppMode::Settings] {
            let mut app = app();
            app.mode = mode;
            assert!(handle_key_event(&mut app, KeyCode::Char('q')));
        }
    }
}
