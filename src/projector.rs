//! Flattens the nested employee payload into pre-formatted table rows.
//!
//! This is the only place where absent or malformed source fields are
//! resolved: every lookup lands in an `Option`, and the defaults are applied
//! here, once. Downstream code only ever sees finished display strings.

use serde::Serialize;

use crate::data::{MonthlyUtilisation, RawRecord};

/// Substitute for a missing first or last name part.
pub const UNKNOWN_NAME_PART: &str = "unknown";

/// One table row. Field names double as the JSON accessor keys used by the
/// `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub person: String,
    pub past_12_months: String,
    pub y2d: String,
    pub june: String,
    pub july: String,
    pub august: String,
    pub net_earnings_prev_month: String,
}

/// Flatten every raw record into a display row. The output has the same
/// length and order as the input; a record degrades field-by-field but is
/// never dropped.
pub fn project(records: &[RawRecord]) -> Vec<DisplayRow> {
    records.iter().map(project_record).collect()
}

fn project_record(record: &RawRecord) -> DisplayRow {
    let employee = record.employees.as_ref();
    let utilisation = employee.and_then(|e| e.workforce_utilisation.as_ref());
    let months = utilisation
        .and_then(|u| u.last_three_months_individually.as_deref())
        .unwrap_or(&[]);

    let person = format!(
        "{} {}",
        name_part(employee.and_then(|e| e.firstname.as_deref())),
        name_part(employee.and_then(|e| e.lastname.as_deref())),
    );

    DisplayRow {
        person,
        past_12_months: percentage(
            utilisation.and_then(|u| u.utilisation_rate_last_twelve_months.as_deref()),
        ),
        y2d: percentage(utilisation.and_then(|u| u.utilisation_rate_year_to_date.as_deref())),
        june: percentage(month_rate(months, "June")),
        july: percentage(month_rate(months, "July")),
        august: percentage(month_rate(months, "August")),
        net_earnings_prev_month: format!(
            "{} EUR",
            utilisation.and_then(|u| u.monthly_cost_difference).unwrap_or(0.0)
        ),
    }
}

fn name_part(part: Option<&str>) -> &str {
    part.unwrap_or(UNKNOWN_NAME_PART)
}

/// Rate of the first entry whose label equals `month`. Matching is
/// case-sensitive; a missing array, no match, and a matched entry without a
/// rate all read as absent.
fn month_rate<'a>(months: &'a [MonthlyUtilisation], month: &str) -> Option<&'a str> {
    months
        .iter()
        .find(|entry| entry.month == month)
        .and_then(|entry| entry.utilisation_rate.as_deref())
}

/// Fraction string to percentage display string. One policy for both
/// degenerate cases: absent reads as zero, present but unparsable as NaN.
/// The float-to-string conversion is deliberately the shortest-roundtrip
/// default, with no fixed decimal truncation.
fn percentage(fraction: Option<&str>) -> String {
    let value = match fraction {
        None => 0.0,
        Some(raw) => raw.trim().parse::<f64>().unwrap_or(f64::NAN),
    };
    format!("{}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Employee, StatusAggregation, WorkforceUtilisation};

    fn month(label: &str, rate: Option<&str>) -> MonthlyUtilisation {
        MonthlyUtilisation {
            month: label.to_string(),
            utilisation_rate: rate.map(str::to_string),
        }
    }

    fn full_record() -> RawRecord {
        RawRecord {
            employees: Some(Employee {
                firstname: Some("Leonie".to_string()),
                lastname: Some("Brandt".to_string()),
                workforce_utilisation: Some(WorkforceUtilisation {
                    utilisation_rate_last_twelve_months: Some("0.5".to_string()),
                    utilisation_rate_year_to_date: Some("0.75".to_string()),
                    last_three_months_individually: Some(vec![
                        month("June", Some("0.25")),
                        month("July", Some("0.125")),
                        month("August", Some("1")),
                    ]),
                    monthly_cost_difference: Some(-580.5),
                    quarter_earnings: Some("22360.00".to_string()),
                }),
                status_aggregation: Some(StatusAggregation {
                    monthly_salary: Some("4100".to_string()),
                }),
            }),
        }
    }

    #[test]
    fn one_row_per_record_in_order() {
        let records = vec![full_record(), RawRecord::default(), full_record()];
        let rows = project(&records);
        assert_eq!(rows.len(), records.len());
        assert_eq!(rows[0].person, "Leonie Brandt");
        assert_eq!(rows[1].person, "unknown unknown");
        assert_eq!(rows[2].person, "Leonie Brandt");
    }

    #[test]
    fn full_record_maps_every_field() {
        let rows = project(&[full_record()]);
        let row = &rows[0];
        assert_eq!(row.person, "Leonie Brandt");
        assert_eq!(row.past_12_months, "50%");
        assert_eq!(row.y2d, "75%");
        assert_eq!(row.june, "25%");
        assert_eq!(row.july, "12.5%");
        assert_eq!(row.august, "100%");
        assert_eq!(row.net_earnings_prev_month, "-580.5 EUR");
    }

    #[test]
    fn empty_record_degrades_to_defaults() {
        let rows = project(&[RawRecord::default()]);
        let row = &rows[0];
        assert_eq!(row.person, "unknown unknown");
        assert_eq!(row.past_12_months, "0%");
        assert_eq!(row.y2d, "0%");
        assert_eq!(row.june, "0%");
        assert_eq!(row.july, "0%");
        assert_eq!(row.august, "0%");
        assert_eq!(row.net_earnings_prev_month, "0 EUR");
    }

    #[test]
    fn missing_monthly_array_zeroes_all_three_months() {
        let mut record = full_record();
        record
            .employees
            .as_mut()
            .unwrap()
            .workforce_utilisation
            .as_mut()
            .unwrap()
            .last_three_months_individually = None;
        let rows = project(&[record]);
        assert_eq!(rows[0].june, "0%");
        assert_eq!(rows[0].july, "0%");
        assert_eq!(rows[0].august, "0%");
    }

    #[test]
    fn partial_monthly_array_fills_only_matching_labels() {
        let mut record = full_record();
        record
            .employees
            .as_mut()
            .unwrap()
            .workforce_utilisation
            .as_mut()
            .unwrap()
            .last_three_months_individually = Some(vec![month("June", Some("0.25"))]);
        let rows = project(&[record]);
        assert_eq!(rows[0].june, "25%");
        assert_eq!(rows[0].july, "0%");
        assert_eq!(rows[0].august, "0%");
    }

    #[test]
    fn month_label_match_is_case_sensitive() {
        let months = [month("june", Some("0.25")), month("July", Some("0.5"))];
        assert_eq!(month_rate(&months, "June"), None);
        assert_eq!(month_rate(&months, "July"), Some("0.5"));
    }

    #[test]
    fn first_matching_month_entry_wins() {
        let months = [month("June", Some("0.25")), month("June", Some("0.75"))];
        assert_eq!(month_rate(&months, "June"), Some("0.25"));
    }

    #[test]
    fn matched_entry_without_rate_reads_as_absent() {
        let months = [month("June", None)];
        assert_eq!(month_rate(&months, "June"), None);
        assert_eq!(percentage(month_rate(&months, "June")), "0%");
    }

    #[test]
    fn year_to_date_example_value() {
        assert_eq!(percentage(Some("0.4236")), "42.36%");
    }

    #[test]
    fn unparsable_fraction_surfaces_as_nan() {
        assert_eq!(percentage(Some("n/a")), "NaN%");
        assert_eq!(percentage(Some("")), "NaN%");
    }

    #[test]
    fn absent_cost_difference_defaults_to_zero_eur() {
        let mut record = full_record();
        record
            .employees
            .as_mut()
            .unwrap()
            .workforce_utilisation
            .as_mut()
            .unwrap()
            .monthly_cost_difference = None;
        let rows = project(&[record]);
        assert_eq!(rows[0].net_earnings_prev_month, "0 EUR");
    }

    #[test]
    fn whole_cost_difference_prints_without_decimals() {
        let mut record = full_record();
        record
            .employees
            .as_mut()
            .unwrap()
            .workforce_utilisation
            .as_mut()
            .unwrap()
            .monthly_cost_difference = Some(1204.0);
        let rows = project(&[record]);
        assert_eq!(rows[0].net_earnings_prev_month, "1204 EUR");
    }

    #[test]
    fn missing_name_parts_use_the_sentinel() {
        let record = RawRecord {
            employees: Some(Employee {
                firstname: Some("Ilka".to_string()),
                ..Employee::default()
            }),
        };
        let rows = project(&[record]);
        assert_eq!(rows[0].person, "Ilka unknown");
    }
}
