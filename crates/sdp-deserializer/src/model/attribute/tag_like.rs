use super::KnownAttribute;
use crate::error::{self, Error};

macro_rules! tag_like_attribute {
    ($type_name:tt, $attr_name:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $type_name;

        impl<'a> KnownAttribute<'a> for $type_name {
            const NAME: &'static str = $attr_name;

            fn decode(value: Option<&'a str>) -> Result<Self, Error> {
                match value {
                    None => Ok(Self),
                    Some(_) => Err(error::invalid_attribute_value($attr_name)),
                }
            }
        }
    };
}

tag_like_attribute!(RecvOnly, "recvonly");
tag_like_attribute!(SendRecv, "sendrecv");
tag_like_attribute!(SendOnly, "sendonly");
tag_like_attribute!(Inactive, "inactive");
