// Copyright (c) 2024 Via Technology Ltd. All Rights Reserved.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `geo` module converts `Position`s to and from
//! [geo-types](https://crates.io/crates/geo-types) types.
//! Note: `geo-types` coordinates are in **x (longitude), y (latitude)** order
//! and do not carry an altitude.

use crate::position::Position;

impl TryFrom<&geo_types::Coord> for Position {
    type Error = &'static str;

    /// Attempt to convert a `geo_types::Coord` to a `Position`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::try_from((item.y, item.x))
    }
}

impl From<&Position> for geo_types::Coord {
    fn from(a: &Position) -> Self {
        Self {
            x: a.longitude().0,
            y: a.latitude().0,
        }
    }
}

impl TryFrom<&geo_types::Point> for Position {
    type Error = &'static str;

    /// Attempt to convert a `geo_types::Point` to a `Position`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&Position> for geo_types::Point {
    fn from(a: &Position) -> Self {
        Self::new(a.longitude().0, a.latitude().0)
    }
}

/// Attempt to convert a `geo_types::LineString` into a path of `Position`s.
/// * `values` the `LineString`.
///
/// returns the `Position`s or the error of the first invalid coordinate.
pub fn try_from_line_string(values: &geo_types::LineString) -> Result<Vec<Position>, &'static str> {
    values.0.iter().map(Position::try_from).collect()
}

/// Convert a path of `Position`s into a `geo_types::LineString`.
#[must_use]
pub fn to_line_string(values: &[Position]) -> geo_types::LineString {
    geo_types::LineString::new(values.iter().map(geo_types::Coord::from).collect())
}
