//! A JSON5 parser and serialiser.
//!
//! JSON5 is a superset of JSON permitting comments, unquoted object
//! keys, single-quoted strings, hexadecimal literals, leading and
//! trailing decimal points, explicit `+` signs, trailing commas, and
//! line continuations inside strings.
//!
//! ```
//! let value = json5::parse(r#"{ unquoted: 'hi', n: .5 }"#).unwrap();
//! assert_eq!(value.as_object().unwrap().get("unquoted").unwrap().as_str(), Some("hi"));
//!
//! let text = json5::format(&value, Some(2)).unwrap();
//! assert_eq!(json5::parse(&text).unwrap(), value);
//! ```

mod format;
mod io;
mod parser;
mod value;

pub use format::format;
pub use io::{dump, load, StreamError};
pub use json5_util::{FormatError, ParseError, ParseErrorKind};
pub use parser::{parse, Parser};
pub use value::{Object, Value};
