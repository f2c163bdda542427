// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.
// Consult your license regarding permissions and restrictions.

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

//! The trig module contains types and functions for performing trigonometric
//! calculations.
//!
//! Angles are passed in and out of the library in `Degrees`, the
//! trigonometric calculations are performed in `Radians`.

#![allow(clippy::float_cmp)]

use super::{clamp, Validate};
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::ops::Sub;

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Test whether a value is a valid bearing.
    /// I.e. whether it lies in the range: 0.0 <= value < 360.0
    #[must_use]
    pub fn is_bearing(value: f64) -> bool {
        (0.0..360.0).contains(&value)
    }

    /// Test whether a Degrees value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    ///
    /// assert!(!Degrees(-90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude());
    /// assert!(Degrees(-90.0).is_valid_latitude());
    /// assert!(Degrees(90.0).is_valid_latitude());
    /// assert!(!(Degrees(90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude()));
    /// ```
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }

    /// Normalise a Degrees value into a bearing: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(360.0).to_bearing().0);
    /// assert_eq!(270.0, Degrees(-90.0).to_bearing().0);
    /// assert_eq!(245.0, Degrees(245.0).to_bearing().0);
    /// assert_eq!(90.0, Degrees(450.0).to_bearing().0);
    /// ```
    #[debug_ensures(Self::is_bearing(ret.0))]
    #[must_use]
    pub fn to_bearing(self) -> Self {
        let value = (self.0 + 360.0) % 360.0;
        if value < 0.0 {
            Self(value + 360.0)
        } else {
            Self(value)
        }
    }

    /// Normalise a Degrees value into a longitude using:
    /// ((value + 540) mod 360) - 180.
    /// Note: for values greater than -540.0 the result lies in the range:
    /// -180.0 <= value < 180.0
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    ///
    /// assert_eq!(2.5, Degrees(2.5).to_longitude().0);
    /// assert_eq!(-179.0, Degrees(181.0).to_longitude().0);
    /// assert_eq!(179.0, Degrees(-181.0).to_longitude().0);
    /// assert_eq!(-180.0, Degrees(180.0).to_longitude().0);
    /// ```
    #[must_use]
    pub fn to_longitude(self) -> Self {
        Self(((self.0 + 540.0) % 360.0) - 180.0)
    }

    /// The reciprocal of a bearing, i.e. the bearing + 180 degrees.
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    ///
    /// assert_eq!(245.0, Degrees(65.0).reciprocal().0);
    /// assert_eq!(65.0, Degrees(245.0).reciprocal().0);
    /// ```
    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self((self.0 + 180.0) % 360.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    /// use sphere_geodesy::Validate;
    ///
    /// assert!(!Degrees(-180.0 * (1.0 + std::f64::EPSILON)).is_valid());
    /// assert!(Degrees(-180.0).is_valid());
    /// assert!(Degrees(180.0).is_valid());
    /// assert!(!(Degrees(180.0 * (1.0 + std::f64::EPSILON)).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    /// use sphere_geodesy::trig::Radians;
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Radians {
    /// Normalise a Radians into the range:
    /// -std::f64::consts::PI < value <= std::f64::consts::PI
    /// Note: only values within 2 * PI of the range are normalised.
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Radians;
    ///
    /// assert_eq!(0.0, Radians(-2.0 * std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(-std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(std::f64::consts::PI).normalise().0);
    /// assert_eq!(0.0, Radians(2.0 * std::f64::consts::PI).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -std::f64::consts::PI {
            Self(self.0 + 2.0 * std::f64::consts::PI)
        } else if self.0 <= std::f64::consts::PI {
            *self
        } else {
            Self(self.0 - 2.0 * std::f64::consts::PI)
        }
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Degrees;
    /// use sphere_geodesy::trig::Radians;
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

impl Sub for Radians {
    type Output = Self;

    /// Subtract a pair of angles in Radians, wraps around +/-PI.
    /// # Examples
    /// ```
    /// use sphere_geodesy::trig::Radians;
    ///
    /// let angle_m120 = Radians(-2.0 * std::f64::consts::FRAC_PI_3);
    /// let angle_120 = Radians(2.0 * std::f64::consts::FRAC_PI_3);
    /// let result = angle_m120 - angle_120;
    /// // Note: wrapping is not precise...
    /// // assert_eq!(angle_120, result);
    /// let delta_angle = libm::fabs(angle_120.0 - result.0);
    /// assert!(delta_angle <= 4.0 * std::f64::EPSILON);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

/// Calculate the haversine of the central angle between two positions:
/// sin<sup>2</sup>(Δφ/2) + cos φ1 · cos φ2 · sin<sup>2</sup>(Δλ/2)
/// * `lat_a`, `lat_b` - the latitudes of the positions.
/// * `delta_long` - the longitude difference: b - a.
///
/// returns the haversine of the central angle.
#[must_use]
pub fn haversine(lat_a: Radians, lat_b: Radians, delta_long: Radians) -> f64 {
    let sin_half_delta_lat = libm::sin((lat_b.0 - lat_a.0) / 2.0);
    let sin_half_delta_long = libm::sin(delta_long.0 / 2.0);
    sin_half_delta_lat * sin_half_delta_lat
        + libm::cos(lat_a.0) * libm::cos(lat_b.0) * sin_half_delta_long * sin_half_delta_long
}

/// Calculate the Great Circle distance (angle from centre) between two
/// points using the haversine formula.
/// * `lat_a`, `lat_b` - the latitudes of the points.
/// * `delta_long` - the longitude difference: b - a.
///
/// returns the Great Circle distance between the points in Radians.
/// # Examples
/// ```
/// use sphere_geodesy::trig::{calculate_gc_distance, Degrees, Radians};
///
/// let distance = calculate_gc_distance(
///     Radians::from(Degrees(0.0)),
///     Radians::from(Degrees(0.0)),
///     Radians::from(Degrees(90.0)),
/// );
/// let delta = libm::fabs(std::f64::consts::FRAC_PI_2 - distance.0);
/// assert!(delta <= 4.0 * std::f64::EPSILON);
/// ```
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn calculate_gc_distance(lat_a: Radians, lat_b: Radians, delta_long: Radians) -> Radians {
    let h = clamp(haversine(lat_a, lat_b, delta_long), 0.0, 1.0);
    Radians(2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}

/// Calculate the azimuth (bearing) along the great circle of point b from
/// point a, see: [Dr Math](http://mathforum.org/library/drmath/view/55417.html).
/// * `lat_a`, `lat_b` - the latitudes of the points.
/// * `delta_long` - the longitude difference: b - a.
///
/// returns the Great Circle azimuth relative to North in the range:
/// -PI <= value <= PI
#[must_use]
pub fn calculate_gc_azimuth(lat_a: Radians, lat_b: Radians, delta_long: Radians) -> Radians {
    let y = libm::sin(delta_long.0) * libm::cos(lat_b.0);
    let x = libm::cos(lat_a.0) * libm::sin(lat_b.0)
        - libm::sin(lat_a.0) * libm::cos(lat_b.0) * libm::cos(delta_long.0);
    Radians(libm::atan2(y, x))
}

/// Calculate the angle at point a between the meridian and the great circle
/// to point b, from the sides of the spherical triangle a, b, North pole.
/// I.e. the unsigned azimuth of b from a: 0 <= value <= PI
/// * `lat_a`, `lat_b` - the latitudes of the points.
/// * `distance` - the Great Circle distance between the points.
///
/// returns the angle, zero if rounding takes the cosine outside of -1..=1.
#[must_use]
pub fn calculate_gc_azimuth_from_sides(lat_a: Radians, lat_b: Radians, distance: Radians) -> Radians {
    let value = libm::acos(
        (libm::sin(lat_b.0) - libm::sin(lat_a.0) * libm::cos(distance.0))
            / (libm::sin(distance.0) * libm::cos(lat_a.0)),
    );
    if value.is_nan() {
        Radians(0.0)
    } else {
        Radians(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Validate;
    use crate::is_within_tolerance;
    use crate::trig::*;
    use serde_json::to_string;

    #[test]
    fn test_degrees_traits() {
        let angle = Degrees(-45.0);
        assert_eq!(Degrees(-45.0), angle);
        assert!(angle < Degrees(45.0));
        assert!(angle.is_valid());
        assert!(angle.is_valid_latitude());
        assert!(!Degrees(-91.0).is_valid_latitude());

        print!("Degrees: {:?}", angle);
    }

    #[test]
    fn test_degrees_to_bearing() {
        assert_eq!(0.0, Degrees(0.0).to_bearing().0);
        assert_eq!(0.0, Degrees(-360.0).to_bearing().0);
        assert_eq!(180.0, Degrees(-180.0).to_bearing().0);
        assert_eq!(359.0, Degrees(-1.0).to_bearing().0);
        assert_eq!(1.0, Degrees(721.0).to_bearing().0);
        assert_eq!(359.0, Degrees(-721.0).to_bearing().0);

        // tiny negative values must not round up to 360
        let result = Degrees(-std::f64::EPSILON).to_bearing();
        assert!(Degrees::is_bearing(result.0));
    }

    #[test]
    fn test_degrees_to_longitude() {
        assert_eq!(0.0, Degrees(0.0).to_longitude().0);
        assert_eq!(-180.0, Degrees(-180.0).to_longitude().0);
        assert_eq!(-90.0, Degrees(270.0).to_longitude().0);
        assert_eq!(90.0, Degrees(-270.0).to_longitude().0);
        assert_eq!(0.0, Degrees(360.0).to_longitude().0);
    }

    #[test]
    fn test_degrees_reciprocal() {
        assert_eq!(180.0, Degrees(0.0).reciprocal().0);
        assert_eq!(0.0, Degrees(180.0).reciprocal().0);
        assert_eq!(90.0, Degrees(270.0).reciprocal().0);
    }

    #[test]
    fn test_radians_normalise() {
        let pi = std::f64::consts::PI;
        assert_eq!(Radians(0.0), Radians(0.0).normalise());
        assert_eq!(Radians(pi), Radians(-pi).normalise());
        assert!(is_within_tolerance(
            -0.5 * pi,
            Radians(1.5 * pi).normalise().0,
            4.0 * std::f64::EPSILON
        ));
        assert!(is_within_tolerance(
            0.5 * pi,
            Radians(-1.5 * pi).normalise().0,
            4.0 * std::f64::EPSILON
        ));
        assert!(Radians(1.5 * pi).normalise().is_valid());
        assert!(!Radians(1.5 * pi).is_valid());
    }

    #[test]
    fn test_degrees_radians_conversion() {
        for i in -180..=180 {
            let value = f64::from(i);
            let result = Degrees::from(Radians::from(Degrees(value)));
            assert!(is_within_tolerance(value, result.0, 1.0e-12));
        }
    }

    #[test]
    fn test_calculate_gc_distance() {
        let zero = Radians(0.0);
        let angle_30 = Radians::from(Degrees(30.0));
        let angle_60 = Radians::from(Degrees(60.0));

        // along a meridian
        let distance = calculate_gc_distance(angle_30, angle_60, zero);
        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_6,
            distance.0,
            48.0 * std::f64::EPSILON
        ));

        // along the Equator
        let distance = calculate_gc_distance(zero, zero, Radians::from(Degrees(120.0)));
        assert!(is_within_tolerance(
            Radians::from(Degrees(120.0)).0,
            distance.0,
            48.0 * std::f64::EPSILON
        ));

        // same point
        assert_eq!(Radians(0.0), calculate_gc_distance(angle_30, angle_30, zero));

        // antipodal points
        let distance = calculate_gc_distance(zero, zero, Radians::from(Degrees(180.0)));
        assert!(is_within_tolerance(
            std::f64::consts::PI,
            distance.0,
            48.0 * std::f64::EPSILON
        ));
    }

    #[test]
    fn test_calculate_gc_azimuth() {
        let zero = Radians(0.0);
        let angle_30 = Radians::from(Degrees(30.0));
        let angle_60 = Radians::from(Degrees(60.0));
        let angle_90 = Radians::from(Degrees(90.0));

        // North along a meridian
        assert_eq!(0.0, calculate_gc_azimuth(angle_30, angle_60, zero).0);
        // South along a meridian
        assert_eq!(
            std::f64::consts::PI,
            calculate_gc_azimuth(angle_60, angle_30, zero).0
        );
        // East along the Equator
        assert_eq!(
            std::f64::consts::FRAC_PI_2,
            calculate_gc_azimuth(zero, zero, angle_90).0
        );
        // West along the Equator
        assert_eq!(
            -std::f64::consts::FRAC_PI_2,
            calculate_gc_azimuth(zero, zero, Radians(-angle_90.0)).0
        );
    }

    #[test]
    fn test_calculate_gc_azimuth_from_sides() {
        let zero = Radians(0.0);
        let angle_90 = Radians::from(Degrees(90.0));

        // East along the Equator
        let result = calculate_gc_azimuth_from_sides(zero, zero, angle_90);
        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_2,
            result.0,
            4.0 * std::f64::EPSILON
        ));

        // North along a meridian: the cosine may round to just over 1.0
        let lat_b = Radians::from(Degrees(10.0));
        let distance = calculate_gc_distance(zero, lat_b, zero);
        let result = calculate_gc_azimuth_from_sides(zero, lat_b, distance);
        assert!(!result.0.is_nan());
        assert!(is_within_tolerance(0.0, result.0, 1.0e-7));
    }

    #[test]
    fn test_serde_degrees() {
        let bearing = Degrees(245.25);

        let serialized = to_string(&bearing).unwrap();
        assert_eq!("245.25", serialized);
        let deserialized: Degrees = serde_json::from_str(&serialized).unwrap();
        assert_eq!(bearing, deserialized);
        assert!(Degrees::is_bearing(deserialized.0));
    }
}
