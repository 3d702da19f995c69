//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Degrees to radians, using the same truncated pi as the reference data.
#[allow(clippy::approx_constant)]
const DEG_TO_RAD: f64 = 3.1415926535 / 180.0;

/// Error returned when constructing coordinates out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A point on the earth's surface, in decimal degrees.
///
/// Latitude is within `[-90, 90]` and longitude within `[-180, 180]`.
/// Any `Coordinates` value is valid by construction.
///
/// # Examples
///
/// ```
/// use transit_catalogue::domain::Coordinates;
///
/// let a = Coordinates::new(55.611087, 37.20829).unwrap();
/// assert_eq!(a.distance_to(&a), 0.0);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinates {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Coordinates { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly 0 apart.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let cos_angle = (self.lat * DEG_TO_RAD).sin() * (other.lat * DEG_TO_RAD).sin()
            + (self.lat * DEG_TO_RAD).cos()
                * (other.lat * DEG_TO_RAD).cos()
                * ((self.lng - other.lng).abs() * DEG_TO_RAD).cos();
        // Rounding can push nearly-equal points just past 1.0
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}
