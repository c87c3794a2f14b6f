use chrono::Datelike;

use crate::cmds::Cmd;
use crate::datefmt;
use crate::holiday::{HolidayIndex, HolidayRecord};
use crate::policy::{self, DayView};

/// The highlighted date, if any. `time` is only ever set together with the
/// full date triple.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    year: Option<i32>,
    month_idx: Option<u32>,
    day: Option<u32>,
    time: Option<String>,
}

impl Selection {
    /// Unconditional overwrite: a previously chosen time survives only if a
    /// new one is supplied in the same call.
    pub fn set(&mut self, year: i32, month_idx: u32, day: u32, time: Option<&str>) {
        self.year = Some(year);
        self.month_idx = Some(month_idx);
        self.day = Some(day);
        self.time = time.map(str::to_owned);
    }

    pub fn is_complete(&self) -> bool {
        self.date_triple().is_some()
    }

    pub fn date_triple(&self) -> Option<(i32, u32, u32)> {
        match (self.year, self.month_idx, self.day) {
            (Some(year), Some(month_idx), Some(day)) => Some((year, month_idx, day)),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn is_date(&self, year: i32, month_idx: u32, day: u32) -> bool {
        self.date_triple() == Some((year, month_idx, day))
    }

    /// Canonical form for the selection callback: "YYYY-MM-DD", extended to
    /// "YYYY-MM-DDThh:mm" once a time slot is attached.
    pub fn date_string(&self) -> Option<String> {
        let (year, month_idx, day) = self.date_triple()?;

        Some(match &self.time {
            Some(time) => datefmt::to_datetime_string(year, month_idx, day, time),
            None => datefmt::to_date_string(year, month_idx, day),
        })
    }
}

/// The month on display, independent of any selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewedMonth {
    pub year: i32,
    pub month_idx: u32,
}

impl ViewedMonth {
    pub fn new(year: i32, month_idx: u32) -> Self {
        assert!(month_idx < 12, "month index out of range: {}", month_idx);

        ViewedMonth { year, month_idx }
    }

    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();

        ViewedMonth {
            year: today.year(),
            month_idx: today.month0(),
        }
    }

    pub fn next(&mut self) {
        if self.month_idx == 11 {
            self.month_idx = 0;
            self.year += 1;
        } else {
            self.month_idx += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.month_idx == 0 {
            self.month_idx = 11;
            self.year -= 1;
        } else {
            self.month_idx -= 1;
        }
    }

    /// Header line of the month view, e.g. "April 2024".
    pub fn title(&self) -> String {
        format!("{} {}", datefmt::month_name(self.month_idx), self.year)
    }
}

pub type SelectCallback = Box<dyn FnMut(&str)>;

/// Single-actor state of the picker. All transitions are synchronous; the
/// observance label is a pure derivation of selection and holiday index and
/// is recomputed whenever either changes.
pub struct DatePicker {
    viewed: ViewedMonth,
    selection: Selection,
    holidays: Option<HolidayIndex>,
    observance: Option<String>,
    on_select: Option<SelectCallback>,
}

impl DatePicker {
    pub fn new(viewed: ViewedMonth) -> Self {
        DatePicker {
            viewed,
            selection: Selection::default(),
            holidays: None,
            observance: None,
            on_select: None,
        }
    }

    pub fn with_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn viewed(&self) -> ViewedMonth {
        self.viewed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn observance_label(&self) -> Option<&str> {
        self.observance.as_deref()
    }

    /// False until the first (real or fallback) holiday list arrives.
    pub fn holidays_loaded(&self) -> bool {
        self.holidays.is_some()
    }

    pub fn handle(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::NextMonth => self.viewed.next(),
            Cmd::PrevMonth => self.viewed.prev(),
            Cmd::SelectDay {
                year,
                month_idx,
                day,
            } => self.select_date(year, month_idx, day, None),
            Cmd::SelectTime(time) => self.select_time(&time),
            Cmd::Noop => {}
        }
    }

    pub fn select_date(&mut self, year: i32, month_idx: u32, day: u32, time: Option<&str>) {
        self.selection.set(year, month_idx, day, time);
        self.refresh_observance();
        self.notify();
    }

    /// Attaching a time re-selects the current triple. A no-op while nothing
    /// is selected, since the time column only appears after a day click.
    pub fn select_time(&mut self, time: &str) {
        if let Some((year, month_idx, day)) = self.selection.date_triple() {
            self.select_date(year, month_idx, day, Some(time));
        }
    }

    /// Installs the holiday list for the viewed year, real or fallback.
    pub fn set_holidays(&mut self, records: &[HolidayRecord]) {
        self.holidays = Some(HolidayIndex::from_records(records));
        self.refresh_observance();
    }

    /// The full 42-cell render contract for the viewed month.
    pub fn day_views(&self) -> Vec<DayView> {
        policy::day_views(&self.viewed, &self.selection, self.holidays.as_ref())
    }

    fn refresh_observance(&mut self) {
        self.observance = match (self.holidays.as_ref(), self.selection.date_triple()) {
            (Some(index), Some((year, month_idx, day))) => index
                .observance_name(&datefmt::to_date_string(year, month_idx, day))
                .map(str::to_owned),
            _ => None,
        };
    }

    fn notify(&mut self) {
        let date = match self.selection.date_string() {
            Some(date) => date,
            None => return,
        };

        if let Some(callback) = self.on_select.as_mut() {
            callback(&date);
        }
    }
}
