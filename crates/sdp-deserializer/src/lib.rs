// enable std feature
#![cfg_attr(not(feature = "std"), no_std)]

//! Zero-copy deserializer for SDP (RFC 4566) messages.
//!
//! A [`Deserializer`] walks a complete message and yields one [`SdpLine`] per
//! `type=value` line. The value of a line can then be handed to the field
//! parser matching its type, see [`parser`]. Nothing is copied: every record
//! borrows from the original message.
//!
//! ```
//! use sdp_deserializer::{parser, Deserializer};
//!
//! let msg = "v=0\r\nm=audio 49170 RTP/AVP 0\r\n";
//! let mut de = Deserializer::new(msg).unwrap();
//! assert_eq!(de.next_line().unwrap().unwrap().value(), "0");
//!
//! let line = de.next_line().unwrap().unwrap();
//! let media = parser::parse_media(line.value()).unwrap();
//! assert_eq!(media.port, 49170);
//! assert!(de.next_line().unwrap().is_none());
//! ```

pub mod deserializer;
pub mod error;
pub mod model;
pub mod parser;

pub use deserializer::{Deserializer, SdpLine};
pub use error::Error;
pub use parser::SdpField;
