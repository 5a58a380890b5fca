use std::path::PathBuf;
use std::time::Instant;

use crate::data::RawRecord;
use crate::projector::DisplayRow;

/// Accessor key and header label for one table column.
pub struct ColumnSpec {
    pub key: &'static str,
    pub header: &'static str,
}

/// The fixed seven-column layout, in display order.
pub const COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec { key: "person", header: "Person" },
    ColumnSpec { key: "past12Months", header: "Past 12 Months" },
    ColumnSpec { key: "y2d", header: "Y2D" },
    ColumnSpec { key: "june", header: "June" },
    ColumnSpec { key: "july", header: "July" },
    ColumnSpec { key: "august", header: "August" },
    ColumnSpec { key: "netEarningsPrevMonth", header: "Net Earnings Prev Month" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Person,
    Past12Months,
    YearToDate,
    June,
    July,
    August,
    NetEarnings,
}

impl SortColumn {
    /// Position of this column in `COLUMNS`.
    pub fn index(self) -> usize {
        match self {
            SortColumn::Person => 0,
            SortColumn::Past12Months => 1,
            SortColumn::YearToDate => 2,
            SortColumn::June => 3,
            SortColumn::July => 4,
            SortColumn::August => 5,
            SortColumn::NetEarnings => 6,
        }
    }

    /// Column selected by the '1'-'7' sort keys.
    pub fn from_digit(digit: char) -> Option<SortColumn> {
        match digit {
            '1' => Some(SortColumn::Person),
            '2' => Some(SortColumn::Past12Months),
            '3' => Some(SortColumn::YearToDate),
            '4' => Some(SortColumn::June),
            '5' => Some(SortColumn::July),
            '6' => Some(SortColumn::August),
            '7' => Some(SortColumn::NetEarnings),
            _ => None,
        }
    }

    /// The row field this column displays.
    pub fn value(self, row: &DisplayRow) -> &str {
        match self {
            SortColumn::Person => &row.person,
            SortColumn::Past12Months => &row.past_12_months,
            SortColumn::YearToDate => &row.y2d,
            SortColumn::June => &row.june,
            SortColumn::July => &row.july,
            SortColumn::August => &row.august,
            SortColumn::NetEarnings => &row.net_earnings_prev_month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Detail,
    Settings,
}

pub struct App {
    /// Raw records and their projected rows, index-aligned.
    pub records: Vec<RawRecord>,
    pub rows: Vec<DisplayRow>,
    pub mode: AppMode,
    pub sort_by: SortColumn,
    pub sort_direction: SortDirection,
    /// Index into `rows` of the highlighted employee, stable across sorting.
    pub selected_row: Option<usize>,
    pub show_earnings_column: bool,
    /// None when the bundled sample payload is in use.
    pub data_path: Option<PathBuf>,
    pub settings_notification: Option<String>,
    pub settings_notification_time: Option<Instant>,
}

impl App {
    pub fn new(
        records: Vec<RawRecord>,
        rows: Vec<DisplayRow>,
        show_earnings_column: bool,
        data_path: Option<PathBuf>,
    ) -> Self {
        App {
            records,
            rows,
            mode: AppMode::Normal,
            sort_by: SortColumn::Person,
            sort_direction: SortDirection::Asc,
            selected_row: None,
            show_earnings_column,
            data_path,
            settings_notification: None,
            settings_notification_time: None,
        }
    }

    /// Rows in display order, paired with their original index. Columns hold
    /// pre-formatted strings, so ordering is the plain lexicographic compare
    /// a string-typed grid column gets by default.
    pub fn sorted_rows(&self) -> Vec<(usize, &DisplayRow)> {
        let mut sorted: Vec<_> = self.rows.iter().enumerate().collect();
        sorted.sort_by(|(_, a), (_, b)| self.sort_by.value(a).cmp(self.sort_by.value(b)));
        if self.sort_direction == SortDirection::Desc {
            sorted.reverse();
        }
        sorted
    }

    /// Position of the selected row within `sorted`, if any.
    pub fn selected_position(&self, sorted: &[(usize, &DisplayRow)]) -> Option<usize> {
        let selected = self.selected_row?;
        sorted.iter().position(|(index, _)| *index == selected)
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = match self.sort_direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
    }

    pub fn notify(&mut self, message: String) {
        self.settings_notification = Some(message);
        self.settings_notification_time = Some(Instant::now());
    }

    /// Human-readable label of the active data source.
    pub fn data_source_label(&self) -> String {
        match &self.data_path {
            Some(path) => path.display().to_string(),
            None => "bundled sample".to_string(),
        }
    }
}
