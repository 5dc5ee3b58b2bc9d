// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_grid_length --heading-base-level=0

//! Understory Grid Length: the compact text form of row and column sizes.
//!
//! Grid layouts size each row and column in one of three ways: an absolute
//! length, a proportional ("star") share of the leftover space, or the size of
//! its content. This crate parses the short notation commonly used to write
//! those sizes in markup and styles, and normalizes it to a [`GridLength`].
//!
//! It does **not** lay anything out. Mapping a [`GridLength`] onto a layout
//! engine's own track sizing is left to the caller.
//!
//! ## Grammar
//!
//! | Text                | Result               |
//! |---------------------|----------------------|
//! | `20`, `42.9`        | 20 and 42.9 pixels   |
//! | `20px`              | 20 pixels            |
//! | `1in`               | 96 pixels            |
//! | `2.54cm`            | 96 pixels            |
//! | `72pt`              | 96 pixels            |
//! | `*`                 | one star             |
//! | `2.5*`              | two and a half stars |
//! | `auto`, `AUTO`, `!` | auto                 |
//!
//! Numbers use `.` as the decimal point. They may be surrounded by whitespace
//! and carry a leading `+`, but never a `-`, an exponent or a grouping
//! separator, so every parsed magnitude is finite and non-negative.
//! Physical units are converted at [`PIXELS_PER_INCH`].
//!
//! ## Validating and parsing
//!
//! There are two entry points over one shared grammar:
//!
//! - [`is_valid_grid_length`] answers whether a string is in the grammar.
//! - [`parse_grid_length`] produces the value. Its star branch is lenient and
//!   reads any string ending in `*` as a star length, falling back to a weight
//!   of one when the prefix is not a number.
//!
//! The [`FromStr`](core::str::FromStr) impl on [`GridLength`] accepts exactly
//! what [`is_valid_grid_length`] accepts.
//!
//! ```rust
//! use understory_grid_length::{GridLength, GridUnit, is_valid_grid_length, parse_grid_length};
//!
//! assert_eq!(parse_grid_length("2*"), Ok(GridLength::stars(2.0)));
//! assert_eq!(parse_grid_length("20.5px").unwrap().unit(), GridUnit::Pixel);
//!
//! // The lenient star branch.
//! assert!(!is_valid_grid_length("d*"));
//! assert_eq!(parse_grid_length("d*"), Ok(GridLength::STAR));
//! assert!("d*".parse::<GridLength>().is_err());
//! ```
//!
//! ## Track lists
//!
//! All rows or all columns of a grid can be written at once, separated by
//! spaces and/or commas. See [`parse_track_list`] and [`TrackList`].
//!
//! ```rust
//! use understory_grid_length::{GridLength, parse_track_list};
//!
//! let rows = parse_track_list("auto, *, 2*").unwrap();
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows.as_slice()[2], GridLength::stars(2.0));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): no effect today; the crate is `no_std` and
//!   uses `alloc`.
//! - `serde`: `Serialize`/`Deserialize` for [`GridLength`] and [`TrackList`]
//!   using their canonical strings. Deserialization is strict.

#![no_std]

extern crate alloc;

mod error;
mod length;
mod parse;
#[cfg(feature = "serde")]
mod serde_impls;
mod track_list;

pub use error::{ParseGridLengthError, ParseTrackListError};
pub use length::{GridLength, GridUnit, LengthUnit, PIXELS_PER_INCH};
pub use parse::{is_valid_grid_length, parse_grid_length};
pub use track_list::{TrackList, is_valid_track_list, parse_track_list};
