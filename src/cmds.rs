/// Discrete events the surrounding form delivers to the picker. Each maps to
/// exactly one synchronous state transition; none of them can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    NextMonth,
    PrevMonth,
    SelectDay { year: i32, month_idx: u32, day: u32 },
    SelectTime(String),
}
