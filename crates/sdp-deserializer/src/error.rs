use core::fmt::Display;

/// Everything that can go wrong while deserializing a message or one of its fields.
///
/// The end of a message is not an error, [`crate::Deserializer::next_line`]
/// reports it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller handed in something unusable, e.g. an empty message
    BadParam,

    /// A byte message was not valid UTF-8
    InvalidUtf8,

    /// An index computation would have overflowed
    Malformed,

    /// The line or field is too short to contain all mandatory parts
    NotEnoughInfo,

    /// The second byte of a line is not `=`
    EqualNotFound,

    /// The last line of the message is not terminated
    NewlineNotFound,

    /// The line has a type but an empty value
    NoValue,

    /// The origin session id is not an unsigned integer
    NoSessionId,

    /// The origin session version is not an unsigned integer
    NoSessionVersion,

    /// The network type is not `IN`
    InvalidNetworkType,

    /// The address type is neither `IP4` nor `IP6`
    InvalidAddressType,

    /// The connection information has more segments than `nettype addrtype address`
    RedundantInfo,

    /// The bandwidth value is not an unsigned integer
    InvalidBandwidth,

    /// The start time is not an unsigned integer
    InvalidStartTime,

    /// The stop time is not an unsigned integer
    InvalidStopTime,

    /// The media port is not an unsigned 16 bit integer
    InvalidPort,

    /// The media port count is not an unsigned 16 bit integer
    InvalidPortnum,

    /// The value of a well known attribute does not have the expected shape
    InvalidAttributeValue { name: &'static str },
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BadParam => write!(f, "Bad parameter"),
            Error::InvalidUtf8 => write!(f, "Message is not valid utf-8"),
            Error::Malformed => write!(f, "Malformed message, index out of range"),
            Error::NotEnoughInfo => write!(f, "Not enough data to read all mandatory parts"),
            Error::EqualNotFound => write!(f, "Expected '=' after the line type"),
            Error::NewlineNotFound => write!(f, "Line is not terminated by a newline"),
            Error::NoValue => write!(f, "Line has no value"),
            Error::NoSessionId => write!(f, "Invalid or missing session id"),
            Error::NoSessionVersion => write!(f, "Invalid or missing session version"),
            Error::InvalidNetworkType => write!(f, "Invalid network type, expected 'IN'"),
            Error::InvalidAddressType => {
                write!(f, "Invalid address type, expected 'IP4' or 'IP6'")
            }
            Error::RedundantInfo => write!(f, "Unexpected data after the connection address"),
            Error::InvalidBandwidth => write!(f, "Invalid bandwidth value"),
            Error::InvalidStartTime => write!(f, "Invalid start time"),
            Error::InvalidStopTime => write!(f, "Invalid stop time"),
            Error::InvalidPort => write!(f, "Invalid media port"),
            Error::InvalidPortnum => write!(f, "Invalid number of media ports"),
            Error::InvalidAttributeValue { name } => {
                write!(f, "Invalid value for attribute [{}]", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Make an error that indicates that the attribute `name` has a value it cannot have
pub(crate) fn invalid_attribute_value(name: &'static str) -> Error {
    Error::InvalidAttributeValue { name }
}
