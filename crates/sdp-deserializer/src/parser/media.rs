use core::convert::TryFrom;

use super::{dec_u16, expect, token};
use crate::error::Error;
use crate::model::Media;

/// Parse a media description value: `<media> <port>[/<number of ports>] <proto> <fmt> ...`
///
/// The format list is returned verbatim, use [`Media::iter_formats`] to walk its entries.
pub fn parse_media(value: &str) -> Result<Media<'_>, Error> {
    let (rest, media) = expect(token(' '), value, Error::NotEnoughInfo)?;

    let (rest, port) = expect(token(' '), rest, Error::NotEnoughInfo)?;
    let (port, port_count) = match token('/')(port) {
        Ok((count, port)) => (
            dec_u16(port).ok_or(Error::InvalidPort)?,
            dec_u16(count).ok_or(Error::InvalidPortnum)?,
        ),
        Err(_) => (dec_u16(port).ok_or(Error::InvalidPort)?, 0),
    };

    let (formats, protocol) = expect(token(' '), rest, Error::NotEnoughInfo)?;

    Ok(Media {
        media,
        port,
        port_count,
        protocol,
        formats,
    })
}

impl<'a> TryFrom<&'a str> for Media<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        parse_media(value)
    }
}
