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

//! The position module contains the `Position` type for representing
//! geographic positions on the surface of the earth.
//!
//! A `Position` is a latitude and longitude in `Degrees` and an altitude in
//! `Metres`. The altitude is carried with the position but it is not used
//! by any of the great circle calculations.
//!
//! `Position` also provides methods for the great circle calculations
//! in the [`great_circle`](crate::great_circle) module, e.g.:
//! ```
//! use sphere_geodesy::{Degrees, Position};
//!
//! let eiffel_tower = Position::new(Degrees(48.858158), Degrees(2.294825));
//! let versailles = Position::new(Degrees(48.804766), Degrees(2.120339));
//!
//! let distance = eiffel_tower.distance_to(&versailles);
//! assert!(libm::fabs(14084.280704919684 - distance.0) < 1.0e-6);
//! ```
//!
//! The module also contains conversions to and from
//! [geo-types](https://crates.io/crates/geo-types) and serializes and
//! deserializes `Position` using [serde](https://crates.io/crates/serde).

pub mod geo;

use crate::great_circle;
use crate::great_circle::cross_track;
use crate::trig::Degrees;
use crate::{Metres, Validate};
use serde::{Deserialize, Serialize};

/// A geographic position: latitude, longitude and altitude.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Position {
    latitude: Degrees,
    longitude: Degrees,
    #[serde(default)]
    altitude: Metres,
}

impl Validate for Position {
    /// Test whether a `Position` is valid.
    /// I.e. whether the latitude lies in the range: -90.0 <= value <= 90.0
    /// and the longitude lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        self.latitude.is_valid_latitude() && self.longitude.is_valid()
    }
}

impl PartialEq for Position {
    /// Positions are equal if their latitudes and longitudes are equal,
    /// altitude is ignored. See `equal_to` to compare altitudes.
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other, false)
    }
}

impl Position {
    /// Construct a `Position` at zero altitude.
    /// * `latitude` - the latitude, -90.0 <= latitude <= 90.0
    /// * `longitude` - the longitude, -180.0 <= longitude <= 180.0
    #[must_use]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Metres(0.0),
        }
    }

    /// Construct a `Position` with an altitude.
    #[must_use]
    pub const fn with_altitude(latitude: Degrees, longitude: Degrees, altitude: Metres) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    #[must_use]
    pub const fn altitude(&self) -> Metres {
        self.altitude
    }

    /// Compare this position to another position.
    /// * `other` - the other position.
    /// * `include_altitude` - whether to compare the altitudes.
    ///
    /// returns true if the latitudes, longitudes and optionally altitudes
    /// are exactly equal, false otherwise.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn equal_to(&self, other: &Self, include_altitude: bool) -> bool {
        self.latitude.0 == other.latitude.0
            && self.longitude.0 == other.longitude.0
            && (!include_altitude || self.altitude.0 == other.altitude.0)
    }

    /// The great circle distance from this position to another position.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Metres {
        great_circle::distance(self, other)
    }

    /// The initial bearing from this position to another position.
    #[must_use]
    pub fn initial_bearing_to(&self, other: &Self) -> Degrees {
        great_circle::initial_bearing(self, other)
    }

    /// The final bearing at another position, arriving from this position.
    #[must_use]
    pub fn final_bearing_to(&self, other: &Self) -> Degrees {
        great_circle::final_bearing(self, other)
    }

    /// The midpoint of the great circle path between this position and
    /// another position.
    #[must_use]
    pub fn midpoint_to(&self, other: &Self) -> Self {
        great_circle::midpoint(self, other)
    }

    /// The position at a distance along a bearing from this position.
    #[must_use]
    pub fn destination_point(&self, bearing: Degrees, distance: Metres) -> Self {
        great_circle::destination(self, bearing, distance)
    }

    /// The signed distance of this position from the great circle path
    /// from `start` to `end`, positive to the right of the path.
    #[must_use]
    pub fn cross_track_distance_to(&self, start: &Self, end: &Self) -> Metres {
        cross_track::cross_track_distance(self, start, end)
    }

    /// The closest position to this position on the great circle path
    /// from `start` to `end`.
    #[must_use]
    pub fn cross_track_position_of(&self, start: &Self, end: &Self) -> Self {
        cross_track::cross_track_position(self, start, end)
    }
}

impl TryFrom<(f64, f64)> for Position {
    type Error = &'static str;

    /// Attempt to convert a pair of values in Latitude, Longitude order.
    fn try_from(values: (f64, f64)) -> Result<Self, Self::Error> {
        let (latitude, longitude) = values;
        if !Degrees::is_latitude(latitude) {
            Err("latitude invalid")
        } else if !Degrees::is_longitude(longitude) {
            Err("longitude invalid")
        } else {
            Ok(Self::new(Degrees(latitude), Degrees(longitude)))
        }
    }
}

impl From<&Position> for (Degrees, Degrees) {
    /// Convert a `Position` to a pair of latitude, longitude `Degrees`.
    fn from(value: &Position) -> Self {
        (value.latitude, value.longitude)
    }
}
