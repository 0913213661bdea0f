use std::{fmt::Display, str::FromStr};

use crate::{epsg::EpsgCode, utility::GeoMath, zone::{utm_zone_from_longitude, Hemisphere}, Error, ParseCoord};

/// A WGS84 longitude/latitude point in degrees. The order follows the
/// `[x, y]` convention of web map libraries: longitude first.
///
/// Conversions from `[f64; 2]` and `(f64, f64)` do not check anything, so
/// out-of-range or `NaN` values pass straight through to the resolver.
/// Use [`Coordinate::create`] when the input should be validated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl Coordinate {
    /// Internal-only constructor that doesn't check the bounds of lon/lat
    pub(crate) fn new(longitude: f64, latitude: f64) -> Coordinate {
        Self {
            longitude,
            latitude,
        }
    }

    /// Tries to create a point from a lon/lat pair. First checks if the
    /// values are valid:
    /// * Longitude must be in range [-180,180)
    /// * Latitude must be in range [-90,90]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are
    /// invalid, including `NaN` and infinities.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_epsg::Coordinate;
    ///
    /// let coord = Coordinate::create(-58.3816, -34.6037).unwrap();
    ///
    /// assert_eq!(coord.longitude(), -58.3816);
    /// assert_eq!(coord.latitude(), -34.6037);
    ///
    /// assert!(Coordinate::create(180.0, 0.0).is_err());
    /// assert!(Coordinate::create(0.0, 90.5).is_err());
    /// assert!(Coordinate::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(longitude: f64, latitude: f64) -> Result<Coordinate, Error> {
        if !longitude.is_valid_longitude() {
            log::debug!("Rejecting longitude {longitude}");
            Err(Error::InvalidCoord(format!("Longitude {longitude} outside of valid range [-180, 180).")))
        } else if !latitude.is_valid_latitude() {
            log::debug!("Rejecting latitude {latitude}");
            Err(Error::InvalidCoord(format!("Latitude {latitude} outside of valid range [-90, 90].")))
        } else {
            Ok(Coordinate::new(longitude, latitude))
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_latitude(self.latitude)
    }

    /// Returns whether the point is strictly north of the equator.
    ///
    /// ```
    /// use utm_epsg::Coordinate;
    ///
    /// assert!(Coordinate::from([2.3522, 48.8566]).is_north());
    /// assert!(!Coordinate::from([2.3522, 0.0]).is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.hemisphere().is_north()
    }

    pub fn utm_zone(&self) -> i32 {
        utm_zone_from_longitude(self.longitude)
    }

    /// Resolves the UTM EPSG code for this point. See
    /// [`utm_epsg_from_coordinate`](crate::utm_epsg_from_coordinate).
    pub fn utm_epsg(&self) -> EpsgCode {
        crate::epsg::utm_epsg_from_coordinate(*self)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Coordinate::new(longitude, latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Coordinate::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.longitude, value.latitude]
    }
}

impl ParseCoord for Coordinate {
    /// Parses `"lon lat"` or `"lon,lat"`, then validates with
    /// [`Coordinate::create`].
    ///
    /// ```
    /// use utm_epsg::{Coordinate, ParseCoord};
    ///
    /// let coord = Coordinate::parse_coord("-58.3816, -34.6037").unwrap();
    /// assert_eq!(coord.utm_zone(), 21);
    ///
    /// assert!(Coordinate::parse_coord("-58.3816").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let (Some(lon), Some(lat), None) = (pieces.next(), pieces.next(), pieces.next()) else {
            return Err(Error::InvalidCoord(format!("Expected \"<longitude> <latitude>\", got \"{value}\"")));
        };

        let parse = |piece: &str| piece
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("\"{piece}\" is not a number")));

        Coordinate::create(parse(lon)?, parse(lat)?)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse_coord(s)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        write!(
            f,
            "{lon} {lat}",
        )
    }
}
