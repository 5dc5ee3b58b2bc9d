// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid length values and the physical units they can be written in.

use core::fmt;

/// Device-independent pixels per inch.
///
/// Every qualified length is converted to pixels on this basis.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// How a [`GridLength`] claims space along its axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridUnit {
    /// An absolute size in device-independent pixels.
    Pixel,
    /// A proportional share of the space left over once absolute and auto
    /// tracks have been sized.
    Star,
    /// Sized to fit the content.
    Auto,
}

/// A normalized layout dimension: a magnitude plus the [`GridUnit`] it is measured in.
///
/// Lengths written with a physical unit (`in`, `cm`, `pt`) are already
/// converted to pixels, so a `GridLength` only distinguishes pixels, stars and
/// auto.
///
/// Auto lengths carry no meaningful magnitude. They always store `1.0`, which
/// keeps every auto length equal to [`GridLength::AUTO`].
///
/// The [`Display`](fmt::Display) impl writes the canonical form of the value,
/// which parses back to an equal length for pixel and star lengths with a
/// finite, non-negative magnitude:
///
/// ```rust
/// use understory_grid_length::GridLength;
///
/// assert_eq!(GridLength::pixels(42.9).to_string(), "42.9");
/// assert_eq!(GridLength::stars(2.5).to_string(), "2.5*");
/// assert_eq!(GridLength::STAR.to_string(), "*");
/// assert_eq!(GridLength::AUTO.to_string(), "auto");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLength {
    value: f64,
    unit: GridUnit,
}

impl GridLength {
    /// Size to content.
    pub const AUTO: Self = Self {
        value: 1.0,
        unit: GridUnit::Auto,
    };

    /// A single star: an equal share of the remaining space.
    pub const STAR: Self = Self {
        value: 1.0,
        unit: GridUnit::Star,
    };

    /// An absolute length in device-independent pixels.
    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self {
            value,
            unit: GridUnit::Pixel,
        }
    }

    /// A proportional length weighted by `weight` stars.
    #[must_use]
    pub const fn stars(weight: f64) -> Self {
        Self {
            value: weight,
            unit: GridUnit::Star,
        }
    }

    /// Returns the magnitude: pixels for [`GridUnit::Pixel`], the weight for
    /// [`GridUnit::Star`], and `1.0` for [`GridUnit::Auto`].
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the unit the magnitude is measured in.
    #[must_use]
    pub const fn unit(self) -> GridUnit {
        self.unit
    }

    /// Returns `true` for absolute pixel lengths.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self.unit, GridUnit::Pixel)
    }

    /// Returns `true` for star lengths.
    #[must_use]
    pub const fn is_star(self) -> bool {
        matches!(self.unit, GridUnit::Star)
    }

    /// Returns `true` for auto lengths.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self.unit, GridUnit::Auto)
    }
}

impl Default for GridLength {
    fn default() -> Self {
        Self::STAR
    }
}

impl fmt::Display for GridLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            GridUnit::Pixel => write!(f, "{}", self.value),
            GridUnit::Star if self.value == 1.0 => f.write_str("*"),
            GridUnit::Star => write!(f, "{}*", self.value),
            GridUnit::Auto => f.write_str("auto"),
        }
    }
}

/// A unit suffix accepted after a number, such as the `cm` in `2.54cm`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Device-independent pixels, `px`.
    Px,
    /// Inches, `in`.
    In,
    /// Centimeters, `cm`.
    Cm,
    /// Typographic points, `pt`.
    Pt,
}

impl LengthUnit {
    /// Every suffix the grammar recognizes.
    pub const ALL: [Self; 4] = [Self::Px, Self::In, Self::Cm, Self::Pt];

    /// Looks up the unit for a two-character suffix.
    ///
    /// Matching is exact: `"PX"` is not a unit.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.suffix() == suffix)
    }

    /// Returns the suffix this unit is written with.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::In => "in",
            Self::Cm => "cm",
            Self::Pt => "pt",
        }
    }

    /// Returns how many device-independent pixels make up one of this unit.
    #[must_use]
    pub const fn pixels_per_unit(self) -> f64 {
        match self {
            Self::Px => 1.0,
            Self::In => PIXELS_PER_INCH,
            Self::Cm => PIXELS_PER_INCH / 2.54,
            Self::Pt => PIXELS_PER_INCH / 72.0,
        }
    }

    /// Converts `value`, measured in this unit, to pixels.
    #[must_use]
    pub fn to_pixels(self, value: f64) -> f64 {
        match self {
            Self::Px => value,
            _ => value * self.pixels_per_unit(),
        }
    }
}
