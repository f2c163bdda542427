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

//! The great_circle module contains functions for calculating distances,
//! bearings and positions along great circle paths on a spherical earth.
//!
//! Distances are in `Metres` on a sphere of radius [`EARTH_RADIUS`].
//! Bearings are in `Degrees` clockwise from North in the range:
//! 0.0 <= bearing < 360.0
//!
//! Longitudes of calculated positions are normalised by
//! [`Degrees::to_longitude`] and calculated positions have zero altitude.
//!
//! The formulae are from [Aviation Formulary](http://www.edwilliams.org/avform147.htm)
//! and [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html).

pub mod cross_track;
pub mod intersection;

pub use cross_track::{cross_track_distance, cross_track_position};
pub use intersection::intersection;

use crate::position::Position;
use crate::trig::{calculate_gc_azimuth, calculate_gc_distance, Degrees, Radians};
use crate::{clamp, Metres, Validate, EARTH_RADIUS};
use contracts::debug_ensures;

/// Calculate the great circle distance between two positions using the
/// haversine formula.
/// * `a`, `b` - the start and end positions
///
/// returns the great circle distance, zero if the positions are equal.
#[debug_ensures(0.0 <= ret.0)]
#[must_use]
pub fn distance(a: &Position, b: &Position) -> Metres {
    if a == b {
        Metres(0.0)
    } else {
        let delta_long = Radians(Radians::from(b.longitude()).0 - Radians::from(a.longitude()).0);
        let angle = calculate_gc_distance(
            Radians::from(a.latitude()),
            Radians::from(b.latitude()),
            delta_long,
        );
        Metres(EARTH_RADIUS.0 * angle.0)
    }
}

/// Calculate the initial bearing (forward azimuth) of the great circle path
/// from position a to position b.
/// * `a`, `b` - the start and end positions
///
/// returns the bearing at a in the range 0.0 <= bearing < 360.0,
/// zero if the positions are equal.
#[debug_ensures(Degrees::is_bearing(ret.0))]
#[must_use]
pub fn initial_bearing(a: &Position, b: &Position) -> Degrees {
    if a == b {
        Degrees(0.0)
    } else {
        let delta_long = Radians::from(Degrees(b.longitude().0 - a.longitude().0));
        let azimuth = calculate_gc_azimuth(
            Radians::from(a.latitude()),
            Radians::from(b.latitude()),
            delta_long,
        );
        Degrees::from(azimuth).to_bearing()
    }
}

/// Calculate the final bearing of the great circle path from position a
/// to position b, i.e. the reciprocal of the initial bearing from b to a.
/// * `a`, `b` - the start and end positions
///
/// returns the bearing at b in the range 0.0 <= bearing < 360.0,
/// zero if the positions are equal.
#[debug_ensures(Degrees::is_bearing(ret.0))]
#[must_use]
pub fn final_bearing(a: &Position, b: &Position) -> Degrees {
    if a == b {
        Degrees(0.0)
    } else {
        initial_bearing(b, a).reciprocal()
    }
}

/// Calculate the midpoint of the great circle path between two positions.
/// See: [Dr Math](http://mathforum.org/library/drmath/view/51822.html)
/// * `a`, `b` - the start and end positions
///
/// returns the midpoint, a if the positions are equal.
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn midpoint(a: &Position, b: &Position) -> Position {
    if a == b {
        *a
    } else {
        let lat_a = Radians::from(a.latitude()).0;
        let lon_a = Radians::from(a.longitude()).0;
        let lat_b = Radians::from(b.latitude()).0;
        let delta_long = Radians::from(Degrees(b.longitude().0 - a.longitude().0)).0;

        let cos_lat_b = libm::cos(lat_b);
        let b_x = cos_lat_b * libm::cos(delta_long);
        let b_y = cos_lat_b * libm::sin(delta_long);
        let cos_lat_a_plus_b_x = libm::cos(lat_a) + b_x;

        let lat = libm::atan2(
            libm::sin(lat_a) + libm::sin(lat_b),
            libm::sqrt(cos_lat_a_plus_b_x * cos_lat_a_plus_b_x + b_y * b_y),
        );
        let lon = lon_a + libm::atan2(b_y, cos_lat_a_plus_b_x);
        to_position(Radians(lat), Radians(lon))
    }
}

/// Calculate the position at a distance along a bearing from a position.
/// * `a` - the start position
/// * `bearing` - the initial bearing from a.
/// * `distance` - the great circle distance from a.
///
/// returns the destination position, a if the distance is zero.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn destination(a: &Position, bearing: Degrees, distance: Metres) -> Position {
    if distance.0 == 0.0 {
        *a
    } else {
        calculate_position(
            Radians::from(a.latitude()),
            Radians::from(a.longitude()),
            Radians::from(bearing),
            Radians(distance.0 / EARTH_RADIUS.0),
        )
    }
}

/// Calculate the position at an angular distance along a bearing from a
/// latitude and longitude, see: [Aviation Formulary](http://www.edwilliams.org/avform147.htm#LL)
/// * `lat`, `lon` - the start latitude and longitude.
/// * `bearing` - the initial bearing.
/// * `angular_distance` - the great circle distance from the start.
///
/// returns the position.
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn calculate_position(
    lat: Radians,
    lon: Radians,
    bearing: Radians,
    angular_distance: Radians,
) -> Position {
    let (sin_lat, cos_lat) = (libm::sin(lat.0), libm::cos(lat.0));
    let (sin_d, cos_d) = (libm::sin(angular_distance.0), libm::cos(angular_distance.0));

    let lat_2 = libm::asin(clamp(
        sin_lat * cos_d + cos_lat * sin_d * libm::cos(bearing.0),
        -1.0,
        1.0,
    ));
    let x = cos_d - sin_lat * libm::sin(lat_2);
    let y = libm::sin(bearing.0) * sin_d * cos_lat;
    let lon_2 = lon.0 + libm::atan2(y, x);
    to_position(Radians(lat_2), Radians(lon_2))
}

/// Construct a `Position` from a latitude and an unnormalised longitude.
fn to_position(lat: Radians, lon: Radians) -> Position {
    Position::new(Degrees::from(lat), Degrees::from(lon).to_longitude())
}
