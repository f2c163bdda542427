// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

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

//! The cross_track module contains functions for calculating the
//! perpendicular (cross track) distance of a position from a great circle
//! path and the closest position on the path.

use super::{destination, distance, initial_bearing};
use crate::is_equal_to_decimal_places;
use crate::position::Position;
use crate::trig::{Degrees, Radians};
use crate::{Metres, EARTH_RADIUS};

/// The number of decimal places of a `Metres` cross track distance that
/// is considered to be on the path.
const ON_PATH_DECIMAL_PLACES: i32 = 3;

/// Calculate the cross track distance of a position from the great circle
/// path between a start and an end position.
/// * `position` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the signed cross track distance: positive if the position is to
/// the right of the path, negative if it is to the left.
/// Zero if the position is the start or end position.
#[must_use]
pub fn cross_track_distance(position: &Position, start: &Position, end: &Position) -> Metres {
    if position == start || position == end {
        Metres(0.0)
    } else {
        let delta_13 = distance(start, position).0 / EARTH_RADIUS.0;
        let theta_13 = Radians::from(initial_bearing(start, position));
        let theta_12 = Radians::from(initial_bearing(start, end));
        Metres(
            libm::asin(libm::sin(delta_13) * libm::sin(theta_13.0 - theta_12.0)) * EARTH_RADIUS.0,
        )
    }
}

/// Calculate the closest position on the great circle path between a start
/// and an end position to a position.
/// * `position` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the cross track position, the position if it is on the path.
#[must_use]
pub fn cross_track_position(position: &Position, start: &Position, end: &Position) -> Position {
    if position == start || position == end {
        *position
    } else {
        let xtd = cross_track_distance(position, start, end);
        if is_equal_to_decimal_places(xtd.abs().0, 0.0, ON_PATH_DECIMAL_PLACES) {
            *position
        } else {
            // turn back towards the path
            let turn = if xtd.0 < 0.0 { 90.0 } else { 270.0 };
            let bearing = Degrees(initial_bearing(start, end).0 + turn).to_bearing();
            destination(position, bearing, xtd.abs())
        }
    }
}
