pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday-first column headers matching the grid layout of `build_grid`.
pub const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn month_name(month_idx: u32) -> &'static str {
    assert!(month_idx < 12, "month index out of range: {}", month_idx);

    MONTH_NAMES[month_idx as usize]
}

/// Canonical "YYYY-MM-DD" form used for holiday lookups and the selection
/// callback. `month_idx` is zero-based and converted to a 1-based month.
pub fn to_date_string(year: i32, month_idx: u32, day: u32) -> String {
    assert!(month_idx < 12, "month index out of range: {}", month_idx);
    assert!((1..=31).contains(&day), "day out of range: {}", day);

    format!("{:04}-{:02}-{:02}", year, month_idx + 1, day)
}

/// "YYYY-MM-DDThh:mm" form emitted once a time slot is attached.
pub fn to_datetime_string(year: i32, month_idx: u32, day: u32, time: &str) -> String {
    format!("{}T{}", to_date_string(year, month_idx, day), time)
}
