//! Core of an inline date picker: 6-week month grids, day-validity rules
//! against Sundays and fetched national holidays, observance labels and
//! month navigation. The surrounding form UI and the actual HTTP transport
//! sit outside; see `fetch` for the boundary.

pub mod cmds;
pub mod config;
pub mod datefmt;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod holiday;
pub mod picker;
pub mod policy;

pub use cmds::Cmd;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use fetch::{Fetcher, HolidaySource, HttpSource};
pub use grid::{build_grid, days_in_month, CalendarCell, GRID_LEN};
pub use holiday::{fallback_holidays, HolidayIndex, HolidayRecord, HolidayType};
pub use picker::{DatePicker, Selection, ViewedMonth};
pub use policy::{day_views, is_selectable, DayView};
