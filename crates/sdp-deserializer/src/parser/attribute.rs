use super::token;
use crate::model::Attribute;

/// Parse an attribute value: `<name>[:<value>]`
///
/// Never fails, a value without a ':' is a flag attribute.
pub fn parse_attribute(value: &str) -> Attribute<'_> {
    match token(':')(value) {
        Ok((value, name)) => Attribute {
            name,
            value: Some(value),
        },
        Err(_) => Attribute { name: value, value: None },
    }
}

impl<'a> From<&'a str> for Attribute<'a> {
    fn from(value: &'a str) -> Self {
        parse_attribute(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn with_value() {
        let attr = parse_attribute("rtpmap:96 opus/48000/2");
        assert_eq!(attr.name, "rtpmap");
        assert_eq!(attr.value, Some("96 opus/48000/2"));
        assert!(!attr.is_flag());
    }

    #[test]
    fn flag() {
        let attr = Attribute::from("recvonly");
        assert_eq!(attr.name, "recvonly");
        assert_eq!(attr.value, None);
        assert!(attr.is_flag());
    }

    #[test]
    fn empty_value_is_present() {
        assert_eq!(
            parse_attribute("tool:"),
            Attribute {
                name: "tool",
                value: Some("")
            }
        );
    }

    #[test]
    fn splits_at_first_colon() {
        let attr = parse_attribute("fingerprint:sha-256 AB:CD:EF");
        assert_eq!(attr.name, "fingerprint");
        assert_eq!(attr.value, Some("sha-256 AB:CD:EF"));
    }
}
