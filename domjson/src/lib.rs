// SPDX-License-Identifier: Apache-2.0

//! A from-scratch JSON decoder and validator.
//!
//! [`decode`] parses a byte slice into an owned [`Value`] tree. [`validate`]
//! walks the same grammar without building a tree and additionally rejects
//! trailing content after the top-level value. Both pinpoint failures with
//! the byte position and a window of the surrounding input.
//!
//! Numbers keep the syntactic shape of the input: a numeral without a
//! fraction or exponent decodes as [`Value::Integer`], anything else as
//! [`Value::Float`], even when the value is integral.
//!
//! ```
//! use domjson::{decode, validate, Value};
//!
//! let value = decode(br#"{"k": [1, 2.0, null]}"#).unwrap();
//! let items = value.get("k").and_then(Value::as_array).unwrap();
//! assert_eq!(items[0], Value::Integer(1));
//! assert_eq!(items[1], Value::Float(2.0));
//!
//! assert!(validate(br#"{"k": [1, 2.0, null]}"#).is_ok());
//! assert!(validate(b"[1,]").is_err());
//! ```

mod context;

mod cursor;

mod escape;

mod parse_error;
pub use parse_error::{ParseError, ParseErrorKind};

mod value;
pub use value::Value;

mod decoder;
pub use decoder::{decode, MAX_DEPTH};

mod validator;
pub use validator::{validate, ValidationError};

// Object maps preserve insertion order; re-exported so callers can name the
// map type without depending on indexmap themselves.
pub use indexmap::IndexMap;
