use core::convert::TryFrom;

use super::{dec_u64, expect, token};
use crate::error::Error;
use crate::model::TimeDescription;

/// Parse a time active value: `<start-time> <stop-time>`
pub fn parse_time_active(value: &str) -> Result<TimeDescription, Error> {
    // the start time is read from the beginning of the value, not from the first token
    let (stop, _) = expect(token(' '), value, Error::NotEnoughInfo)?;
    let start_time = dec_u64(value).ok_or(Error::InvalidStartTime)?;
    let stop_time = dec_u64(stop).ok_or(Error::InvalidStopTime)?;
    Ok(TimeDescription {
        start_time,
        stop_time,
    })
}

impl TryFrom<&str> for TimeDescription {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_time_active(value)
    }
}
