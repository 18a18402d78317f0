//! Error types for building [`Value`](crate::Value)s from typed data.
//!
//! Key conversion itself never fails: unknown scalars are copied, integer
//! keys pass through, and odd identifiers degrade to zero or one word. The
//! only fallible step is [`to_value`](crate::to_value), which has to map an
//! arbitrary `Serialize` type onto the [`Value`](crate::Value) tree.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pascal_case::{to_value, Error};
//! use std::collections::BTreeMap;
//!
//! let mut by_flag = BTreeMap::new();
//! by_flag.insert(true, "yes");
//!
//! let result = to_value(&by_flag);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while converting typed data into a [`Value`](crate::Value).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input contains something the value tree cannot represent
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::Error;
    ///
    /// let err = Error::unsupported_type("map key of type bool");
    /// assert_eq!(err.to_string(), "Unsupported type: map key of type bool");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
