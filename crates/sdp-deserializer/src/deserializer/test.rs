use super::*;

use proptest::prelude::*;

const OFFER: &str = "v=0\r\no=alice 123 456 IN IP4 10.0.0.1\r\n";

fn test_init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn expect_line<'a>(de: &mut Deserializer<'a>, line_type: char, value: &str) -> SdpLine<'a> {
    match de.next_line() {
        Ok(Some(line)) => {
            assert_eq!(line.line_type(), line_type);
            assert_eq!(line.value(), value);
            line
        }
        other => panic!("expected line {}={}, got {:?}", line_type, value, other),
    }
}

fn first_error(message: &str) -> Error {
    test_init();
    let mut de = Deserializer::new(message).unwrap();
    loop {
        match de.next_line() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("message was read without error"),
            Err(e) => return e,
        }
    }
}

#[test]
fn basic() {
    test_init();
    let mut de = Deserializer::new(OFFER).unwrap();
    expect_line(&mut de, 'v', "0");
    expect_line(&mut de, 'o', "alice 123 456 IN IP4 10.0.0.1");
    assert_eq!(de.next_line(), Ok(None));
    assert_eq!(de.offset(), OFFER.len());
    assert_eq!(de.remaining(), "");
}

#[test]
fn end_of_message_is_sticky() {
    let mut de = Deserializer::new("s=-\n").unwrap();
    expect_line(&mut de, 's', "-");
    for _ in 0..4 {
        assert_eq!(de.next_line(), Ok(None));
    }
}

#[test]
fn line_endings() {
    let mut de = Deserializer::new("s=crlf\r\ni=lf\n").unwrap();
    let crlf = expect_line(&mut de, 's', "crlf");
    assert_eq!(crlf.line_ending(), "\r\n");
    assert_eq!(crlf.raw(), "s=crlf\r\n");
    let lf = expect_line(&mut de, 'i', "lf");
    assert_eq!(lf.line_ending(), "\n");
    assert_eq!(lf.raw(), "i=lf\n");
}

#[test]
fn value_keeps_inner_carriage_return() {
    let mut de = Deserializer::new("i=a\rb\r\n").unwrap();
    expect_line(&mut de, 'i', "a\rb");
}

#[test]
fn empty_message() {
    assert_eq!(Deserializer::new("").unwrap_err(), Error::BadParam);
    assert_eq!(Deserializer::from_bytes(&[]).unwrap_err(), Error::BadParam);
}

#[test]
fn from_bytes() {
    let mut de = Deserializer::from_bytes(OFFER.as_bytes()).unwrap();
    expect_line(&mut de, 'v', "0");

    let invalid = [b'v', b'=', 0xff, b'\n'];
    assert_eq!(
        Deserializer::from_bytes(&invalid).unwrap_err(),
        Error::InvalidUtf8
    );
}

#[test]
fn no_value() {
    assert_eq!(first_error("a=\r\n"), Error::NoValue);
    assert_eq!(first_error("a=\n"), Error::NoValue);
    assert_eq!(first_error("v=0\r\na=\r\n"), Error::NoValue);
}

#[test]
fn equal_not_found() {
    assert_eq!(first_error("v:0\r\n"), Error::EqualNotFound);
    assert_eq!(first_error("v=0\nvv=0\n"), Error::EqualNotFound);
}

#[test]
fn newline_not_found() {
    assert_eq!(first_error("v=0"), Error::NewlineNotFound);
    assert_eq!(first_error("v=0\r\ns=session\r"), Error::NewlineNotFound);
}

#[test]
fn not_enough_info() {
    assert_eq!(first_error("v\n"), Error::NotEnoughInfo);
    assert_eq!(first_error("v=0\r\n\r\n"), Error::NotEnoughInfo);
}

#[test]
fn failed_read_does_not_advance() {
    test_init();
    let mut de = Deserializer::new("v=0\nx\n").unwrap();
    expect_line(&mut de, 'v', "0");
    let offset = de.offset();
    assert_eq!(de.next_line(), Err(Error::NotEnoughInfo));
    assert_eq!(de.next_line(), Err(Error::NotEnoughInfo));
    assert_eq!(de.offset(), offset);
    assert_eq!(de.remaining(), "x\n");
}

#[test]
fn iterator() {
    let lines = Deserializer::new(OFFER)
        .unwrap()
        .map(|line| line.map(|l| (l.line_type(), l.value())))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(
        lines,
        vec![('v', "0"), ('o', "alice 123 456 IN IP4 10.0.0.1")]
    );
}

#[test]
fn iterator_stops_after_error() {
    test_init();
    let mut de = Deserializer::new("v=0\r\nbroken\r\ns=never\r\n").unwrap();
    assert!(matches!(de.next(), Some(Ok(_))));
    assert_eq!(de.next(), Some(Err(Error::EqualNotFound)));
    assert_eq!(de.next(), None);
    assert_eq!(de.next(), None);
}

#[test]
fn values_borrow_from_message() {
    let message = String::from(OFFER);
    let range = message.as_bytes().as_ptr_range();
    for line in Deserializer::new(&message).unwrap() {
        let value = line.unwrap().value().as_bytes().as_ptr_range();
        assert!(range.start <= value.start && value.end <= range.end);
    }
}

fn sdp_line() -> impl Strategy<Value = (char, String, &'static str)> {
    (
        proptest::char::range('a', 'z'),
        "[^\r\n]{1,40}",
        prop_oneof![Just("\r\n"), Just("\n")],
    )
}

proptest! {
    #[test]
    fn tokenize_and_rejoin(lines in proptest::collection::vec(sdp_line(), 1..20)) {
        let message: String = lines
            .iter()
            .map(|(t, v, end)| format!("{}={}{}", t, v, end))
            .collect();

        let mut rejoined = String::new();
        let mut count = 0;
        for line in Deserializer::new(&message).unwrap() {
            let line = line.unwrap();
            let (t, v, _) = &lines[count];
            prop_assert_eq!(line.line_type(), *t);
            prop_assert_eq!(line.value(), v.as_str());
            rejoined.push(line.line_type());
            rejoined.push('=');
            rejoined.push_str(line.value());
            rejoined.push_str(line.line_ending());
            count += 1;
        }
        prop_assert_eq!(count, lines.len());
        prop_assert_eq!(rejoined, message);
    }

    #[test]
    fn arbitrary_input_never_panics(message in "(\\PC|\r|\n|=){1,200}") {
        let mut de = Deserializer::new(&message).unwrap();
        let mut last = de.offset();
        while let Ok(Some(_)) = de.next_line() {
            prop_assert!(de.offset() > last);
            prop_assert!(de.offset() <= message.len());
            last = de.offset();
        }
    }
}
