use crate::grid::{self, CalendarCell};
use crate::holiday::HolidayIndex;
use crate::picker::{Selection, ViewedMonth};

/// Decides whether the cell at `grid_idx` of the viewed month's grid can be
/// clicked. Spillover days and the Sunday column are always inert; national
/// holidays are inert once the holiday list is loaded. While `holidays` is
/// still `None` (first fetch pending) days are provisionally selectable so
/// the grid never flashes wrongly-disabled days.
pub fn is_selectable(
    cell: &CalendarCell,
    grid_idx: usize,
    viewed: &ViewedMonth,
    holidays: Option<&HolidayIndex>,
) -> bool {
    if cell.month_idx != viewed.month_idx {
        return false;
    }

    // Monday-first rows put Sunday in the last column.
    if grid_idx % 7 == 6 {
        return false;
    }

    match holidays {
        Some(index) => !index.is_national_holiday(&cell.date_string()),
        None => true,
    }
}

/// Per-cell render contract handed to the UI, complete enough that no
/// validity logic has to be re-derived on the consumer side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayView {
    pub day: u32,
    pub date: String,
    pub in_viewed_month: bool,
    pub selected: bool,
    pub disabled: bool,
}

pub fn day_views(
    viewed: &ViewedMonth,
    selection: &Selection,
    holidays: Option<&HolidayIndex>,
) -> Vec<DayView> {
    grid::build_grid(viewed.year, viewed.month_idx)
        .iter()
        .enumerate()
        .map(|(idx, cell)| DayView {
            day: cell.day,
            date: cell.date_string(),
            in_viewed_month: cell.month_idx == viewed.month_idx,
            selected: selection.is_date(cell.year, cell.month_idx, cell.day),
            disabled: !is_selectable(cell, idx, viewed, holidays),
        })
        .collect()
}
