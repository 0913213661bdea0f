use std::fmt::Display;

use num::Integer;

use crate::{constants::{EPSG_UTM_NORTH_BASE, EPSG_UTM_SOUTH_BASE, MAX_UTM_ZONE, ZONE_WIDTH}, utility::dms, ThisOrThat};

/// Hemisphere half of a UTM projection. Only the sign of the latitude
/// matters, and the equator itself belongs to [`Hemisphere::South`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Classifies a latitude in degrees. Only strictly positive latitudes are
    /// northern, so `0.0` and `NaN` resolve to [`Hemisphere::South`].
    ///
    /// # Example
    ///
    /// ```
    /// use utm_epsg::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::from_latitude(48.8566), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_latitude(-34.6037), Hemisphere::South);
    /// assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::South);
    /// ```
    pub fn from_latitude(latitude: f64) -> Hemisphere {
        (latitude > 0.0).ternary(Hemisphere::North, Hemisphere::South)
    }

    #[inline]
    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }

    /// Third digit of a WGS84 / UTM EPSG code: `6` in the north, `7` in the south.
    pub fn epsg_digit(self) -> char {
        self.is_north().ternary('6', '7')
    }

    pub(crate) fn epsg_base(self) -> i32 {
        self.is_north().ternary(EPSG_UTM_NORTH_BASE, EPSG_UTM_SOUTH_BASE)
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.is_north().ternary("N", "S"))
    }
}

/// Returns the UTM zone containing `longitude` (degrees). The globe is cut
/// into 60 bands of 6°, zone 1 starting at -180°.
///
/// Input outside `[-180, 180)` is wrapped with a period of 360°, which gives
/// an in-range but not geodetically meaningful zone. `NaN` maps to zone 1.
/// This never panics.
///
/// # Example
///
/// ```
/// use utm_epsg::utm_zone_from_longitude;
///
/// assert_eq!(utm_zone_from_longitude(-180.0), 1);
/// assert_eq!(utm_zone_from_longitude(0.0), 31);
/// assert_eq!(utm_zone_from_longitude(179.9999), 60);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn utm_zone_from_longitude(longitude: f64) -> i32 {
    // Saturating cast, so infinities and NaN still land on an integer
    let column = ((longitude + f64::from(dms::HD)) / f64::from(ZONE_WIDTH)).floor() as i64;

    // mod_floor keeps the result in [0, 60) for negative columns too
    (column.mod_floor(&i64::from(MAX_UTM_ZONE)) + 1) as i32
}

/// Longitude of origin in degrees of the transverse Mercator projection for
/// `zone`.
///
/// ```
/// use utm_epsg::central_meridian;
///
/// assert_eq!(central_meridian(31), 3.0);
/// assert_eq!(central_meridian(1), -177.0);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    f64::from(ZONE_WIDTH) * f64::from(zone) - 183.
}
