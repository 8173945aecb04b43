//! RGBA color representation and convenience constructors.
//!
//! This module provides the [`Color`] type, a plain value with four `f32`
//! channels normalized to the range 0.0 to 1.0, along with constructors for
//! the formats UI code commonly starts from:
//!
//! - Hex strings: `#RRGGBB`, `RRGGBB`, `#RRGGBBAA`, `RRGGBBAA`
//! - Byte components: `(0-255, 0-255, 0-255)` with either a byte or float alpha
//! - Packed integers: `0xRRGGBB` with implied full opacity
//!
//! The primary hex entry point, [`Color::from_hex`], is total: it never fails
//! and substitutes opaque white for malformed input. Callers that need to
//! distinguish "explicitly white" from "malformed" use the strict
//! [`Color::try_from_hex`] instead.
//!
//! # Examples
//!
//! ```
//! use tinct::Color;
//!
//! let red = Color::from_hex("#FF0000");
//! assert_eq!(red, Color::RED);
//!
//! // Malformed input falls back to opaque white rather than failing.
//! assert_eq!(Color::from_hex("not a color"), Color::WHITE);
//!
//! let sea = Color::from_rgb_u8(32, 178, 170);
//! let packed = Color::from_packed_rgb(0x20B2AA);
//! assert_eq!(sea, packed);
//! ```

use crate::error::ColorParseError;
use std::fmt;

/// An RGBA color with `f32` channels normalized to the range 0.0 to 1.0.
///
/// A `Color` is a plain value: it has no identity, never mutates after
/// construction, and is returned by value from every constructor. A GUI layer
/// builds its native color object from the four channel fields at its own
/// boundary.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 to 1.0).
    pub r: f32,
    /// Green channel (0.0 to 1.0).
    pub g: f32,
    /// Blue channel (0.0 to 1.0).
    pub b: f32,
    /// Alpha channel (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    /// Defaults to opaque white, the same value the hex parser falls back to.
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// Constants
// ============================================================================

impl Color {
    /// Opaque white (#FFFFFF). Also the fallback for malformed hex input.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque red (#FF0000).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green (#00FF00).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue (#0000FF).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Opaque yellow (#FFFF00).
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Opaque cyan (#00FFFF).
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Opaque magenta (#FF00FF).
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Fully transparent black (alpha = 0).
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from normalized RGBA channels.
    ///
    /// Channels are expected in the range 0.0 to 1.0 and are stored as given.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized RGB channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from byte components (0-255), normalizing each by
    /// division by 255.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Creates an opaque color from byte components (0-255).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates a color from byte components (0-255) and a normalized float
    /// alpha (0.0 to 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let highlight = Color::from_rgb_u8_alpha(255, 255, 0, 0.25);
    /// assert_eq!(highlight.a, 0.25);
    /// ```
    #[inline]
    pub fn from_rgb_u8_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: alpha,
        }
    }
}

// ============================================================================
// Packed integer conversion
// ============================================================================

impl Color {
    /// Creates an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Only the low 24 bits are read; anything above is masked off.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// assert_eq!(Color::from_packed_rgb(0x0000FF), Color::BLUE);
    /// ```
    #[inline]
    pub fn from_packed_rgb(value: u32) -> Self {
        Self::from_rgb_u8(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Packs the rounded byte channels into a `0xRRGGBB` integer, dropping
    /// alpha.
    #[inline]
    pub fn to_packed_rgb(&self) -> u32 {
        let (r, g, b, _) = self.to_rgba_u8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Creates a color from a packed `0xRRGGBBAA` integer, most significant
    /// byte first.
    #[inline]
    pub fn from_rgba_u32(value: u32) -> Self {
        Self::from_rgba_u8(
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Packs the rounded byte channels into a `0xRRGGBBAA` integer.
    #[inline]
    pub fn to_rgba_u32(&self) -> u32 {
        let (r, g, b, a) = self.to_rgba_u8();
        (u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8) | u32::from(a)
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a color from a hex string, falling back to opaque white.
    ///
    /// Accepted formats are `RRGGBB`, `RRGGBBAA`, `#RRGGBB`, and `#RRGGBBAA`.
    /// Any other input — wrong length, non-hex characters, the empty string —
    /// yields [`Color::WHITE`]. This function is total: it never fails and
    /// never panics, for any input.
    ///
    /// Use [`Color::try_from_hex`] to observe the failure instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// assert_eq!(Color::from_hex("#FF0000"), Color::RED);
    /// assert_eq!(Color::from_hex("00FF00"), Color::GREEN);
    ///
    /// // 8-digit form carries an explicit alpha byte.
    /// let translucent = Color::from_hex("#0000FF80");
    /// assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    ///
    /// // Malformed input is substituted, not reported.
    /// assert_eq!(Color::from_hex("12345"), Color::WHITE);
    /// ```
    #[inline]
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or(Self::WHITE)
    }

    /// Parses a color from a hex string, reporting malformed input.
    ///
    /// Accepts the same formats as [`Color::from_hex`]: exactly 6 or 8 hex
    /// digits with an optional leading `#`. The 6-digit form implies a `FF`
    /// alpha byte.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidLength`] when the digit count is
    /// neither 6 nor 8, and [`ColorParseError::InvalidDigit`] when a
    /// character is not a hexadecimal digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::{Color, ColorParseError};
    ///
    /// let teal = Color::try_from_hex("#008080").unwrap();
    /// assert_eq!(teal.to_hex(), "#008080");
    ///
    /// assert_eq!(
    ///     Color::try_from_hex("#12345"),
    ///     Err(ColorParseError::InvalidLength(5)),
    /// );
    /// ```
    pub fn try_from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        // RRGGBB implies a FF alpha byte; RRGGBBAA carries its own.
        let has_alpha = match digits.chars().count() {
            6 => false,
            8 => true,
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        // Hex digits only. An integer scan alone would also take a leading
        // sign, so this check is the real gate.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit);
        }

        let scanned =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit)?;
        let rgba = if has_alpha {
            scanned
        } else {
            (scanned << 8) | 0xFF
        };

        Ok(Self::from_rgba_u32(rgba))
    }

    /// Formats the color as a hex string.
    ///
    /// Returns `#RRGGBB` when fully opaque and `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Color {
    /// Returns the channels as bytes (0-255), clamping and rounding.
    #[inline]
    pub fn to_rgba_u8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Returns the same color with the given alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Returns whether the color is fully opaque (alpha ≈ 1.0).
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 0.999
    }

    /// Returns whether every channel is within `epsilon` of the other color's.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}
