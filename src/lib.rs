// Copyright (c) 2018-2024 Via Technology Ltd.

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

//! This library uses spherical trigonometry to calculate distances, bearings
//! and positions on the surface of a spherical earth.
//!
//! The `trig` module contains the angle types and the trigonometric formulae;
//! the `position` module contains the `Position` type and the
//! `great_circle` module contains the navigation calculations:
//! distance, initial and final bearing, midpoint, destination,
//! intersection and cross-track distance and position.
//!
//! All calculations assume a spherical earth of radius [`EARTH_RADIUS`],
//! no ellipsoidal correction is applied and altitude is ignored.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.

pub mod great_circle;
pub mod position;
pub mod trig;

pub use position::Position;
pub use trig::{Degrees, Radians};

use contracts::{debug_ensures, debug_requires};
use serde::{Deserialize, Serialize};

/// The Metres newtype an f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Metres(pub f64);

impl Metres {
    /// The absolute value of the distance.
    /// # Examples
    /// ```
    /// use sphere_geodesy::Metres;
    ///
    /// assert_eq!(Metres(200.0), Metres(-200.0).abs());
    /// ```
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }
}

/// The mean radius of the earth, see: [Earth radius](https://en.wikipedia.org/wiki/Earth_radius#Mean_radius)
pub const EARTH_RADIUS: Metres = Metres(6_371_000.0);

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a pair of values are within tolerance of each other
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value are within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}

/// Check whether a pair of values are equal when rounded to a number of
/// decimal places.
/// * `a`, `b` the values to compare
/// * `decimal_places` the number of decimal places to round to.
///
/// return true if the rounded values are equal.
/// # Examples
/// ```
/// use sphere_geodesy::is_equal_to_decimal_places;
///
/// assert!(is_equal_to_decimal_places(199.9998684, 200.0, 3));
/// assert!(!is_equal_to_decimal_places(199.9984, 200.0, 3));
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn is_equal_to_decimal_places(a: f64, b: f64, decimal_places: i32) -> bool {
    let multiplier = libm::pow(10.0, f64::from(decimal_places));
    libm::round(a * multiplier) == libm::round(b * multiplier)
}
