use chrono::{Datelike, NaiveDate};

use crate::datefmt;

/// Cells in a rendered month view: 6 full weeks.
pub const GRID_LEN: usize = 42;

/// One position of the month grid. Spillover cells carry the year and month
/// they actually belong to, never the viewed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarCell {
    pub year: i32,
    pub month_idx: u32,
    pub day: u32,
}

impl CalendarCell {
    pub fn date_string(&self) -> String {
        datefmt::to_date_string(self.year, self.month_idx, self.day)
    }

    pub fn as_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_idx + 1, self.day)
            .expect("grid cells hold valid calendar dates")
    }
}

pub fn days_in_month(year: i32, month_idx: u32) -> u32 {
    assert!(month_idx < 12, "month index out of range: {}", month_idx);

    let first = first_of_month(year, month_idx);
    let next = if month_idx == 11 {
        first_of_month(year + 1, 0)
    } else {
        first_of_month(year, month_idx + 1)
    };

    next.signed_duration_since(first).num_days() as u32
}

/// Builds the 42-cell grid for `(year, month_idx)`: the tail of the previous
/// month, the whole viewed month, and the head of the next month, in
/// chronological order.
pub fn build_grid(year: i32, month_idx: u32) -> Vec<CalendarCell> {
    assert!(month_idx < 12, "month index out of range: {}", month_idx);

    let first_weekday = first_of_month(year, month_idx)
        .weekday()
        .num_days_from_sunday();

    // Months starting on Sunday or Monday both take a full leading week;
    // anything else takes enough cells to reach back to Monday.
    let leading = if first_weekday > 1 { first_weekday - 1 } else { 6 };

    let (prev_year, prev_month) = if month_idx == 0 {
        (year - 1, 11)
    } else {
        (year, month_idx - 1)
    };
    let (next_year, next_month) = if month_idx == 11 {
        (year + 1, 0)
    } else {
        (year, month_idx + 1)
    };

    let mut cells = Vec::with_capacity(GRID_LEN);

    let prev_days = days_in_month(prev_year, prev_month);
    for day in (prev_days - leading + 1)..=prev_days {
        cells.push(CalendarCell {
            year: prev_year,
            month_idx: prev_month,
            day,
        });
    }

    for day in 1..=days_in_month(year, month_idx) {
        cells.push(CalendarCell {
            year,
            month_idx,
            day,
        });
    }

    let mut day = 1;
    while cells.len() < GRID_LEN {
        cells.push(CalendarCell {
            year: next_year,
            month_idx: next_month,
            day,
        });
        day += 1;
    }

    cells
}

fn first_of_month(year: i32, month_idx: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month_idx + 1, 1).expect("first of month is a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use itertools::Itertools;

    fn assert_well_formed(year: i32, month_idx: u32) {
        let cells = build_grid(year, month_idx);

        assert_eq!(cells.len(), GRID_LEN);
        assert!(
            cells
                .iter()
                .tuple_windows()
                .all(|(a, b)| b.as_date() == a.as_date() + Duration::days(1)),
            "grid for {}-{} has a gap or duplicate",
            year,
            month_idx + 1
        );
    }

    #[test]
    fn every_month_of_a_year_is_well_formed() {
        for month_idx in 0..12 {
            assert_well_formed(2024, month_idx);
        }
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_well_formed(2024, 1);
    }

    #[test]
    fn month_starting_on_monday_takes_full_leading_week() {
        // 2024-01-01 was a Monday.
        let cells = build_grid(2024, 0);

        assert_eq!(
            cells[0],
            CalendarCell {
                year: 2023,
                month_idx: 11,
                day: 26
            }
        );
        // The 1st lands in the last column of the first row.
        assert_eq!(cells[6].day, 1);
        assert_eq!(cells[6].month_idx, 0);
    }

    #[test]
    fn month_starting_on_sunday_takes_full_leading_week() {
        // 2024-09-01 was a Sunday.
        let cells = build_grid(2024, 8);

        assert_eq!(cells[0].month_idx, 7);
        assert_eq!(cells[0].day, 26);
        assert_eq!(cells[6].day, 1);
    }

    #[test]
    fn midweek_start_reaches_back_to_monday() {
        // 2024-03-01 was a Friday: four leading cells from February.
        let cells = build_grid(2024, 2);

        assert_eq!(cells[0].day, 26);
        assert_eq!(cells[0].month_idx, 1);
        assert_eq!(cells[4].day, 1);
        assert_eq!(cells[4].month_idx, 2);
    }

    #[test]
    fn december_spills_into_next_year() {
        let cells = build_grid(2024, 11);
        let last = cells.last().unwrap();

        assert_eq!(last.year, 2025);
        assert_eq!(last.month_idx, 0);
        assert_well_formed(2024, 11);
    }

    #[test]
    fn january_leading_cells_come_from_previous_year() {
        let cells = build_grid(2024, 0);

        assert!(cells.iter().take(6).all(|c| c.year == 2023 && c.month_idx == 11));
    }

    #[test]
    #[should_panic]
    fn month_index_out_of_range() {
        build_grid(2024, 12);
    }
}
