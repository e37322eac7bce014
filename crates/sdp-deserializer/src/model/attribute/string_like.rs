use super::KnownAttribute;
use crate::error::{self, Error};

macro_rules! string_like_attribute {
    ($type_name:tt, $attr_name:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $type_name<'a>(pub &'a str);

        impl<'a> KnownAttribute<'a> for $type_name<'a> {
            const NAME: &'static str = $attr_name;

            fn decode(value: Option<&'a str>) -> Result<Self, Error> {
                match value {
                    Some(v) if !v.is_empty() => Ok(Self(v)),
                    _ => Err(error::invalid_attribute_value($attr_name)),
                }
            }
        }
    };
}

string_like_attribute!(Charset, "charset");
string_like_attribute!(Type, "type");
string_like_attribute!(Category, "cat");
string_like_attribute!(Keywords, "keywds");
