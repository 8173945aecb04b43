//! Plain RGBA color values with convenience constructors.
//!
//! This crate provides a single small building block for UI code:
//!
//! - [`color`]: the [`Color`] value type and its constructors (hex strings,
//!   byte components, packed integers)
//! - [`error`]: the strict parser's error type
//!
//! The hex parser is total by design: [`Color::from_hex`] accepts any string
//! and substitutes opaque white for malformed input, so UI construction code
//! never has to thread an error path. The strict [`Color::try_from_hex`]
//! variant reports the failure instead.
//!
//! # Examples
//!
//! ```
//! use tinct::Color;
//!
//! // From a hex string, with or without the leading '#'
//! let coral = Color::from_hex("#FF7F50");
//! assert_eq!(coral, Color::from_hex("FF7F50"));
//!
//! // From byte components with a float alpha
//! let overlay = Color::from_rgb_u8_alpha(0, 0, 0, 0.6);
//!
//! // From a packed 0xRRGGBB integer
//! let gold = Color::from_packed_rgb(0xFFD700);
//! assert_eq!(gold.to_hex(), "#FFD700");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod color;
pub mod error;

// Re-export the two types callers actually name.
pub use color::Color;
pub use error::ColorParseError;
