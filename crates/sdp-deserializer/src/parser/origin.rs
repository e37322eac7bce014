use core::convert::TryFrom;

use super::{dec_u64, expect, parse_connection_info, token};
use crate::error::Error;
use crate::model::Originator;

/// Parse an origin value:
/// `<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
pub fn parse_originator(value: &str) -> Result<Originator<'_>, Error> {
    let (rest, username) = expect(token(' '), value, Error::NotEnoughInfo)?;

    let (rest, session_id) = expect(token(' '), rest, Error::NotEnoughInfo)?;
    let session_id = dec_u64(session_id).ok_or(Error::NoSessionId)?;

    let (rest, session_version) = expect(token(' '), rest, Error::NotEnoughInfo)?;
    let session_version = dec_u64(session_version).ok_or(Error::NoSessionVersion)?;

    Ok(Originator {
        username,
        session_id,
        session_version,
        connection_info: parse_connection_info(rest)?,
    })
}

impl<'a> TryFrom<&'a str> for Originator<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        parse_originator(value)
    }
}
