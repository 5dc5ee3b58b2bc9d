// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track lists: every row or column of a grid written as one string.

use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::error::{ParseGridLengthError, ParseTrackListError};
use crate::length::GridLength;
use crate::parse::{is_valid_grid_length, parse_grid_length};

/// Entries are separated by any run of these characters.
const SEPARATORS: [char; 2] = [' ', ','];

/// An ordered list of grid lengths, one per row or column.
///
/// Short lists are stored inline. The default list holds a single star track,
/// which is what a grid with no explicit definitions behaves like.
///
/// ```rust
/// use understory_grid_length::{GridLength, parse_track_list};
///
/// let columns = parse_track_list("auto, 2*,20px").unwrap();
/// assert_eq!(
///     columns.as_slice(),
///     &[GridLength::AUTO, GridLength::stars(2.0), GridLength::pixels(20.0)]
/// );
/// assert_eq!(columns.to_string(), "auto, 2*, 20");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TrackList {
    tracks: SmallVec<[GridLength; 4]>,
}

impl TrackList {
    /// Returns the number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the list has no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the tracks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[GridLength] {
        &self.tracks
    }

    /// Returns an iterator over the tracks.
    pub fn iter(&self) -> core::slice::Iter<'_, GridLength> {
        self.tracks.iter()
    }

    /// Appends a track.
    pub fn push(&mut self, track: GridLength) {
        self.tracks.push(track);
    }
}

impl Default for TrackList {
    fn default() -> Self {
        core::iter::once(GridLength::STAR).collect()
    }
}

impl FromIterator<GridLength> for TrackList {
    fn from_iter<I: IntoIterator<Item = GridLength>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TrackList {
    type Item = GridLength;
    type IntoIter = smallvec::IntoIter<[GridLength; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrackList {
    type Item = &'a GridLength;
    type IntoIter = core::slice::Iter<'a, GridLength>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, track) in self.tracks.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(track, f)?;
        }
        Ok(())
    }
}

fn entries(value: &str) -> impl Iterator<Item = &str> {
    value.split(SEPARATORS).filter(|entry| !entry.is_empty())
}

fn collect_tracks(
    value: &str,
    parse: impl Fn(&str) -> Result<GridLength, ParseGridLengthError>,
) -> Result<TrackList, ParseTrackListError> {
    let tracks: SmallVec<[GridLength; 4]> = entries(value)
        .enumerate()
        .map(|(index, entry)| {
            parse(entry).map_err(|source| ParseTrackListError::Entry { index, source })
        })
        .collect::<Result<_, _>>()?;
    if tracks.is_empty() {
        return Err(ParseTrackListError::Empty);
    }
    Ok(TrackList { tracks })
}

/// Parses a track list: grid lengths separated by spaces and/or commas.
///
/// Runs of separators are collapsed, so `"auto, *"` and `"auto,,*"` both hold
/// two tracks. Each entry goes through [`parse_grid_length`], including its
/// lenient handling of star weights.
///
/// # Errors
///
/// Returns [`ParseTrackListError::Empty`] when there is no entry at all, or
/// [`ParseTrackListError::Entry`] for the first entry that fails to parse.
pub fn parse_track_list(value: &str) -> Result<TrackList, ParseTrackListError> {
    collect_tracks(value, parse_grid_length)
}

/// Returns `true` if `value` holds at least one entry and every entry passes
/// [`is_valid_grid_length`].
#[must_use]
pub fn is_valid_track_list(value: &str) -> bool {
    let mut any = false;
    for entry in entries(value) {
        if !is_valid_grid_length(entry) {
            return false;
        }
        any = true;
    }
    any
}

/// Parses only what [`is_valid_track_list`] accepts.
impl FromStr for TrackList {
    type Err = ParseTrackListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        collect_tracks(s, str::parse::<GridLength>)
    }
}
