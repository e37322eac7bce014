use crate::error::Error;

/// Value of an `a=` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// `None` for flag attributes like `a=recvonly`, `Some` (possibly empty) if
    /// the name was followed by a ':'
    pub value: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    /// Attribute without a value
    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }

    /// Decode the attribute as a well known attribute. Returns `None` if the
    /// attribute has a different name.
    pub fn decode<T: KnownAttribute<'a>>(&self) -> Option<Result<T, Error>> {
        (self.name == T::NAME).then(|| T::decode(self.value))
    }
}

/// An attribute with a defined name and value syntax
pub trait KnownAttribute<'a>: Sized {
    const NAME: &'static str;
    fn decode(value: Option<&'a str>) -> Result<Self, Error>;
}

mod rtp_map;
mod string_like;
mod tag_like;

pub use rtp_map::RtpMap;
pub use string_like::Category;
pub use string_like::Charset;
pub use string_like::Keywords;
pub use string_like::Type;
pub use tag_like::Inactive;
pub use tag_like::RecvOnly;
pub use tag_like::SendOnly;
pub use tag_like::SendRecv;
