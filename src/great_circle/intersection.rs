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

//! The intersection module contains functions for calculating the
//! intersection of a pair of great circle paths on the surface of a sphere,
//! where each path is defined by a start position and an initial bearing.
//!
//! See: [Aviation Formulary](http://www.edwilliams.org/avform147.htm#Intersection)

#![allow(clippy::float_cmp)]

use super::calculate_position;
use crate::position::Position;
use crate::trig::{calculate_gc_azimuth_from_sides, haversine, Degrees, Radians};
use crate::{clamp, is_small, Validate};
use contracts::debug_ensures;

/// The minimum sine of the turn angle of a path that is not on the great
/// circle between the start positions.
pub const MIN_SIN_ANGLE: f64 = 1.0e-7;

/// Calculate the angles at the start positions of a pair of great circle
/// paths between each path and the great circle joining the start positions.
/// * `bearing_1`, `bearing_2` - the initial bearings of the paths.
/// * `azimuth_12` - the bearing of the second start position from the first.
/// * `azimuth_21` - the bearing of the first start position from the second.
///
/// returns the angles at the first and second start positions in the range:
/// -PI < angle <= PI
#[debug_ensures(ret.0.is_valid() && ret.1.is_valid())]
#[must_use]
pub fn calculate_turn_angles(
    bearing_1: Radians,
    bearing_2: Radians,
    azimuth_12: Radians,
    azimuth_21: Radians,
) -> (Radians, Radians) {
    (bearing_1 - azimuth_12, azimuth_21 - bearing_2)
}

/// Calculate the intersection of two great circle paths.
/// * `a` - the start position of the first path.
/// * `bearing_a` - the initial bearing of the first path.
/// * `b` - the start position of the second path.
/// * `bearing_b` - the initial bearing of the second path.
///
/// returns the intersection position or None if:
/// - the paths start at the same position,
/// - the paths are on the same great circle (infinite intersections),
///   i.e. the sines of both turn angles are within `MIN_SIN_ANGLE` of zero,
/// - the paths head away from the intersection (ambiguous intersection).
#[must_use]
pub fn intersection(
    a: &Position,
    bearing_a: Degrees,
    b: &Position,
    bearing_b: Degrees,
) -> Option<Position> {
    let lat_a = Radians::from(a.latitude());
    let lon_a = Radians::from(a.longitude());
    let lat_b = Radians::from(b.latitude());
    let lon_b = Radians::from(b.longitude());
    let theta_13 = Radians::from(bearing_a.to_bearing());
    let theta_23 = Radians::from(bearing_b.to_bearing());

    // the distance between the start positions
    let delta_long = lon_b.0 - lon_a.0;
    let h = clamp(haversine(lat_a, lat_b, Radians(delta_long)), 0.0, 1.0);
    let delta_12 = 2.0 * libm::asin(libm::sqrt(h));
    if delta_12 == 0.0 {
        return None;
    }

    // the bearings between the start positions
    let theta_1 = calculate_gc_azimuth_from_sides(lat_a, lat_b, Radians(delta_12));
    let theta_2 = calculate_gc_azimuth_from_sides(lat_b, lat_a, Radians(delta_12));
    let (theta_12, theta_21) = if libm::sin(delta_long) > 0.0 {
        (theta_1, Radians(2.0 * std::f64::consts::PI - theta_2.0))
    } else {
        (Radians(2.0 * std::f64::consts::PI - theta_1.0), theta_2)
    };

    let (alpha_1, alpha_2) = calculate_turn_angles(theta_13, theta_23, theta_12, theta_21);
    let (sin_alpha_1, cos_alpha_1) = (libm::sin(alpha_1.0), libm::cos(alpha_1.0));
    let (sin_alpha_2, cos_alpha_2) = (libm::sin(alpha_2.0), libm::cos(alpha_2.0));

    if is_small(libm::fabs(sin_alpha_1), MIN_SIN_ANGLE)
        && is_small(libm::fabs(sin_alpha_2), MIN_SIN_ANGLE)
    {
        // infinite intersections
        None
    } else if sin_alpha_1 * sin_alpha_2 < 0.0 {
        // ambiguous intersection
        None
    } else {
        let alpha_3 = libm::acos(clamp(
            -cos_alpha_1 * cos_alpha_2 + sin_alpha_1 * sin_alpha_2 * libm::cos(delta_12),
            -1.0,
            1.0,
        ));
        let delta_13 = libm::atan2(
            libm::sin(delta_12) * sin_alpha_1 * sin_alpha_2,
            cos_alpha_2 + cos_alpha_1 * libm::cos(alpha_3),
        );
        Some(calculate_position(lat_a, lon_a, theta_13, Radians(delta_13)))
    }
}
