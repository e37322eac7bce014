use core::iter::FusedIterator;

use crate::error::Error;
use crate::parser::{expect, token};

#[cfg(test)]
mod test;

/// Minimum size of a line: type, '=' and a newline
const MIN_LINE_LEN: usize = 3;

/// One `type=value` line of a message.
///
/// Both the value and the raw line borrow from the message the line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdpLine<'a> {
    line_type: char,
    value: &'a str,
    raw: &'a str,
}

impl<'a> SdpLine<'a> {
    /// The type of the line, the character in front of the '='
    pub fn line_type(&self) -> char {
        self.line_type
    }

    /// The value of the line, without the leading `type=` and without the line ending
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// The line ending as it appeared in the message, either `"\r\n"` or `"\n"`
    pub fn line_ending(&self) -> &'a str {
        &self.raw[2 + self.value.len()..]
    }

    /// The complete line including the line ending
    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

/// Walks an SDP message line by line.
///
/// The deserializer only moves forward. Once it reached the end of the message
/// it keeps reporting the end, to read the message again create a new one.
#[derive(Debug)]
pub struct Deserializer<'a> {
    message: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Deserializer<'a> {
    /// Create a deserializer for a complete message. Fails with [`Error::BadParam`]
    /// if the message is empty.
    pub fn new(message: &'a str) -> Result<Self, Error> {
        if message.is_empty() {
            Err(Error::BadParam)
        } else {
            Ok(Self {
                message,
                cursor: 0,
                failed: false,
            })
        }
    }

    /// Create a deserializer for a message that is available as bytes only.
    /// The message is checked to be utf-8 once, nothing is copied.
    pub fn from_bytes(message: &'a [u8]) -> Result<Self, Error> {
        if message.is_empty() {
            return Err(Error::BadParam);
        }
        let message = core::str::from_utf8(message).map_err(|_| Error::InvalidUtf8)?;
        Self::new(message)
    }

    /// Offset of the next line to be read
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// The part of the message that was not read yet
    pub fn remaining(&self) -> &'a str {
        self.message.get(self.cursor..).unwrap_or_default()
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` once the whole message was read. A failed read does not
    /// move the deserializer, calling this again returns the same error.
    pub fn next_line(&mut self) -> Result<Option<SdpLine<'a>>, Error> {
        let total = self.message.len();
        if self.cursor > total {
            return Err(Error::BadParam);
        }
        if self.cursor == total {
            return Ok(None);
        }
        match read_line(self.message, self.cursor) {
            Ok((line, next)) => {
                tracing::trace!(
                    line_type = %line.line_type,
                    offset = self.cursor,
                    len = line.value.len(),
                    "sdp line"
                );
                self.cursor = next;
                Ok(Some(line))
            }
            Err(error) => {
                tracing::debug!(offset = self.cursor, %error, "malformed sdp line");
                Err(error)
            }
        }
    }
}

/// Read the line starting at `start`. Returns the line and the offset of the line after it.
fn read_line(message: &str, start: usize) -> Result<(SdpLine<'_>, usize), Error> {
    let bytes = message.as_bytes();
    if bytes.len() - start < MIN_LINE_LEN {
        return Err(Error::NotEnoughInfo);
    }

    let eq = start.checked_add(1).ok_or(Error::Malformed)?;
    if bytes[eq] != b'=' {
        return Err(Error::EqualNotFound);
    }

    // the type is followed by an ascii '=', so it is a single byte char and the
    // value starts on a char boundary
    let value_start = start.checked_add(2).ok_or(Error::Malformed)?;
    let rest = message.get(value_start..).ok_or(Error::Malformed)?;
    let (_, body) = expect(token('\n'), rest, Error::NewlineNotFound)?;

    let value = body.strip_suffix('\r').unwrap_or(body);
    if value.is_empty() {
        return Err(Error::NoValue);
    }

    let next = value_start
        .checked_add(body.len())
        .and_then(|newline| newline.checked_add(1))
        .ok_or(Error::Malformed)?;
    let raw = message.get(start..next).ok_or(Error::Malformed)?;

    Ok((
        SdpLine {
            line_type: bytes[start] as char,
            value,
            raw,
        },
        next,
    ))
}

impl<'a> Iterator for Deserializer<'a> {
    type Item = Result<SdpLine<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_line() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a> FusedIterator for Deserializer<'a> {}
