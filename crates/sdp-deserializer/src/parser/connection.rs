use core::convert::TryFrom;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    combinator::{all_consuming, map},
    IResult,
};

use super::{expect, token};
use crate::error::Error;
use crate::model::{AddressType, ConnectionInfo, NetworkType};

fn net_type(input: &str) -> IResult<&str, NetworkType, ()> {
    map(tag("IN"), |_| NetworkType::IN)(input)
}

fn addr_type(input: &str) -> IResult<&str, AddressType, ()> {
    alt((
        map(tag("IP4"), |_| AddressType::IPv4),
        map(tag("IP6"), |_| AddressType::IPv6),
    ))(input)
}

/// Parse a connection information value: `<nettype> <addrtype> <address>`
///
/// The address is not interpreted, it may be a unicast or multicast address, a
/// domain name, and may carry the `/ttl` and `/count` suffixes.
pub fn parse_connection_info(value: &str) -> Result<ConnectionInfo<'_>, Error> {
    let (rest, net) = expect(token(' '), value, Error::NotEnoughInfo)?;
    let (_, network_type) = expect(all_consuming(net_type), net, Error::InvalidNetworkType)?;

    let (rest, addr) = expect(token(' '), rest, Error::NotEnoughInfo)?;
    let (_, address_type) = expect(all_consuming(addr_type), addr, Error::InvalidAddressType)?;

    let (_, address) = expect(
        all_consuming(take_till(|c: char| c == ' ')),
        rest,
        Error::RedundantInfo,
    )?;

    Ok(ConnectionInfo {
        network_type,
        address_type,
        address,
    })
}

impl<'a> TryFrom<&'a str> for ConnectionInfo<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        parse_connection_info(value)
    }
}
