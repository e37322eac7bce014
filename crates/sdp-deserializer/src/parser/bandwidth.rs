use core::convert::TryFrom;

use super::{dec_u64, expect, token};
use crate::error::Error;
use crate::model::BandwidthInfo;

/// Parse a bandwidth value: `<bwtype>:<bandwidth>`
pub fn parse_bandwidth_info(value: &str) -> Result<BandwidthInfo<'_>, Error> {
    let (bandwidth, bw_type) = expect(token(':'), value, Error::NotEnoughInfo)?;
    Ok(BandwidthInfo {
        bw_type,
        bandwidth: dec_u64(bandwidth).ok_or(Error::InvalidBandwidth)?,
    })
}

impl<'a> TryFrom<&'a str> for BandwidthInfo<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        parse_bandwidth_info(value)
    }
}
