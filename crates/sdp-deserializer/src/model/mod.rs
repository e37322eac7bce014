//! Records produced by the field parsers.
//!
//! None of the records own any bytes, every string is a slice of the value that
//! was parsed.

use core::fmt::Display;

pub mod attribute;

pub use attribute::Attribute;

/// Network type of a connection, `IN` is the only one defined
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    IN,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::IN => "IN",
        }
    }
}

/// Address type of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    IPv4,
    IPv6,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::IPv4 => "IP4",
            AddressType::IPv6 => "IP6",
        }
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a `c=` line, also the tail of an `o=` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionInfo<'a> {
    pub network_type: NetworkType,
    pub address_type: AddressType,
    /// The address exactly as written, may carry a `/ttl` or `/count` suffix
    pub address: &'a str,
}

/// Value of an `o=` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Originator<'a> {
    pub username: &'a str,
    pub session_id: u64,
    pub session_version: u64,
    pub connection_info: ConnectionInfo<'a>,
}

/// Well known bandwidth modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandwidthType<'a> {
    /// `CT`
    ConferenceTotal,
    /// `AS`
    ApplicationSpecific,
    /// Any other modifier, e.g. `TIAS` or an `X-` extension
    Other(&'a str),
}

/// Value of a `b=` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandwidthInfo<'a> {
    pub bw_type: &'a str,
    pub bandwidth: u64,
}

impl<'a> BandwidthInfo<'a> {
    /// Classify the bandwidth modifier
    pub fn kind(&self) -> BandwidthType<'a> {
        match self.bw_type {
            "CT" => BandwidthType::ConferenceTotal,
            "AS" => BandwidthType::ApplicationSpecific,
            other => BandwidthType::Other(other),
        }
    }
}

/// Value of a `t=` line. Times are NTP seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDescription {
    pub start_time: u64,
    pub stop_time: u64,
}

impl TimeDescription {
    /// `t=0 0`, the session is not bounded in time
    pub fn is_permanent(&self) -> bool {
        self.start_time == 0 && self.stop_time == 0
    }

    /// The session has a start but no end
    pub fn is_unbounded(&self) -> bool {
        self.stop_time == 0
    }
}

/// Value of an `m=` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media<'a> {
    pub media: &'a str,
    pub port: u16,
    /// Number of ports from `port/count`, 0 if not specified
    pub port_count: u16,
    pub protocol: &'a str,
    /// The format list exactly as written
    pub formats: &'a str,
}

impl<'a> Media<'a> {
    /// Iterate the space separated entries of the format list
    pub fn iter_formats(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.formats.split(' ').filter(|f| !f.is_empty())
    }
}
