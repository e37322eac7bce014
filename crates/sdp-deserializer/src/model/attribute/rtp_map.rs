use super::KnownAttribute;
use crate::error::{self, Error};
use crate::parser::{dec_u32, dec_u8};

/// `a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpMap<'a> {
    pub payload_type: u8,
    pub encoding_name: &'a str,
    pub clock_rate: u32,
    /// For audio streams the number of channels
    pub encoding_params: Option<&'a str>,
}

impl<'a> RtpMap<'a> {
    /// Number of audio channels, if the encoding parameters are a channel count
    pub fn channels(&self) -> Option<u32> {
        self.encoding_params.and_then(dec_u32)
    }
}

impl<'a> KnownAttribute<'a> for RtpMap<'a> {
    const NAME: &'static str = "rtpmap";

    fn decode(value: Option<&'a str>) -> Result<Self, Error> {
        let invalid = || error::invalid_attribute_value(Self::NAME);
        let (pt, encoding) = value.and_then(|v| v.split_once(' ')).ok_or_else(invalid)?;
        let payload_type = dec_u8(pt).ok_or_else(invalid)?;
        let (encoding_name, rest) = encoding.split_once('/').ok_or_else(invalid)?;
        if encoding_name.is_empty() {
            return Err(invalid());
        }
        let (clock_rate, encoding_params) = match rest.split_once('/') {
            Some((rate, params)) => (rate, Some(params)),
            None => (rest, None),
        };
        Ok(Self {
            payload_type,
            encoding_name,
            clock_rate: dec_u32(clock_rate).ok_or_else(invalid)?,
            encoding_params,
        })
    }
}
