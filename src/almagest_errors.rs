use thiserror::Error;

/// Errors raised at the boundary of the library, when constructing the validated
/// input value types.
///
/// The position models themselves are pure and infallible: once a
/// [`CivilDateTime`](crate::time::CivilDateTime) and an
/// [`Observer`](crate::observer::Observer) exist, every computation is a total
/// function of its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlmagestError {
    #[error("Invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    #[error("UTC offset out of range [-12, 12]: {0}")]
    InvalidUtcOffset(i8),

    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),
}
