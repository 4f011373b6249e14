#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid month/day {month:02}-{day:02}")]
    InvalidMonthDay { month: u32, day: u32 },

    #[error("no Easter date for year {0}")]
    EasterOutOfRange(i32),
}
