//! Parsers for the values of individual lines.
//!
//! Every parser takes the value of a line as returned by
//! [`crate::SdpLine::value`] and returns a record borrowing from it.

use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit1, space0},
    combinator::map_res,
    sequence::{preceded, terminated},
    IResult,
};

use crate::deserializer::SdpLine;
use crate::error::Error;
use crate::model::{Attribute, BandwidthInfo, ConnectionInfo, Media, Originator, TimeDescription};

mod attribute;
mod bandwidth;
mod connection;
mod media;
mod origin;
mod timing;

pub use attribute::parse_attribute;
pub use bandwidth::parse_bandwidth_info;
pub use connection::parse_connection_info;
pub use media::parse_media;
pub use origin::parse_originator;
pub use timing::parse_time_active;

macro_rules! unsigned_int_parser {
    ($fname:tt, $name:ty) => {
        /// Parse the leading number of a token. Leading blanks are skipped and
        /// whatever follows the digits is ignored, a value that does not fit the
        /// target type is rejected.
        pub(crate) fn $fname(input: &str) -> Option<$name> {
            preceded(
                space0::<&str, ()>,
                map_res(digit1, |v: &str| v.parse::<$name>()),
            )(input)
            .ok()
            .map(|(_, v)| v)
        }
    };
}

unsigned_int_parser!(dec_u8, u8);
unsigned_int_parser!(dec_u16, u16);
unsigned_int_parser!(dec_u32, u32);
unsigned_int_parser!(dec_u64, u64);

/// Everything up to the next `sep`, the separator itself is consumed
pub(crate) fn token<'a>(sep: char) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str, ()> {
    terminated(take_till(move |c: char| c == sep), char(sep))
}

/// Run `parser` on `input` and turn any failure into `error`
pub(crate) fn expect<'a, O, P>(
    mut parser: P,
    input: &'a str,
    error: Error,
) -> Result<(&'a str, O), Error>
where
    P: FnMut(&'a str) -> IResult<&'a str, O, ()>,
{
    parser(input).map_err(|_| error)
}

/// A line with its value decoded according to the line type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdpField<'a> {
    Origin(Originator<'a>),
    Connection(ConnectionInfo<'a>),
    Bandwidth(BandwidthInfo<'a>),
    Timing(TimeDescription),
    Attribute(Attribute<'a>),
    Media(Media<'a>),
    /// Lines without a structured value, e.g. `v=`, `s=` or `i=`
    Other { line_type: char, value: &'a str },
}

impl<'a> SdpLine<'a> {
    /// Decode the value with the parser matching the line type.
    pub fn field(&self) -> Result<SdpField<'a>, Error> {
        let value = self.value();
        let field = match self.line_type() {
            'o' => parse_originator(value).map(SdpField::Origin),
            'c' => parse_connection_info(value).map(SdpField::Connection),
            'b' => parse_bandwidth_info(value).map(SdpField::Bandwidth),
            't' => parse_time_active(value).map(SdpField::Timing),
            'a' => Ok(SdpField::Attribute(parse_attribute(value))),
            'm' => parse_media(value).map(SdpField::Media),
            line_type => Ok(SdpField::Other { line_type, value }),
        };
        if let Err(error) = &field {
            tracing::debug!(line_type = %self.line_type(), value, %error, "malformed sdp field");
        }
        field
    }
}
