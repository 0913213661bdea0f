use std::{fmt::Display, str::FromStr};

use crate::{constants::{EPSG_UTM_PREFIX, MAX_UTM_ZONE, MIN_UTM_ZONE}, coordinate::Coordinate, zone::{utm_zone_from_longitude, Hemisphere}, Error, ParseCoord};

/// EPSG code of a WGS84 / UTM projected coordinate reference system, kept
/// as its zone and hemisphere. The numeric code is `32600 + zone` in the
/// north and `32700 + zone` in the south.
///
/// Values built by [`utm_epsg_code`] and [`utm_epsg_from_coordinate`] are not
/// checked, so the zone may be outside `[1, 60]` when the caller passes one.
/// [`EpsgCode::create`], [`EpsgCode::from_code`] and parsing always produce
/// a registered code.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsgCode {
    pub(crate) zone: i32,
    pub(crate) hemisphere: Hemisphere,
}

impl EpsgCode {
    /// Internal-only constructor that doesn't check the zone
    pub(crate) fn new(zone: i32, hemisphere: Hemisphere) -> EpsgCode {
        Self {
            zone,
            hemisphere,
        }
    }

    /// Tries to create a code from a zone and hemisphere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_epsg::{EpsgCode, Hemisphere};
    ///
    /// let code = EpsgCode::create(21, Hemisphere::South).unwrap();
    /// assert_eq!(code.code(), 32721);
    ///
    /// assert!(EpsgCode::create(0, Hemisphere::North).is_err());
    /// assert!(EpsgCode::create(61, Hemisphere::North).is_err());
    /// ```
    pub fn create(zone: i32, hemisphere: Hemisphere) -> Result<EpsgCode, Error> {
        if !(MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(&zone) {
            log::debug!("Rejecting UTM zone {zone}");
            return Err(Error::InvalidZone(zone));
        }

        Ok(EpsgCode::new(zone, hemisphere))
    }

    /// Recovers zone and hemisphere from a numeric code in `32601..=32660`
    /// or `32701..=32760`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEpsg`] for any other number.
    ///
    /// # Usage
    ///
    /// ```
    /// use utm_epsg::{EpsgCode, Hemisphere};
    ///
    /// let code = EpsgCode::from_code(32631).unwrap();
    /// assert_eq!(code.zone(), 31);
    /// assert_eq!(code.hemisphere(), Hemisphere::North);
    ///
    /// // WGS84 geographic, not a UTM projection
    /// assert!(EpsgCode::from_code(4326).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<EpsgCode, Error> {
        [Hemisphere::North, Hemisphere::South]
            .into_iter()
            .find_map(|hemisphere| {
                i32::try_from(code.saturating_sub(i64::from(hemisphere.epsg_base())))
                    .ok()
                    .filter(|zone| (MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(zone))
                    .map(|zone| EpsgCode::new(zone, hemisphere))
            })
            .ok_or_else(|| {
                log::debug!("Rejecting EPSG code {code}");
                Error::InvalidEpsg(code.to_string())
            })
    }

    /// Returns the numeric EPSG code.
    ///
    /// # Example
    /// ```
    /// use utm_epsg::utm_epsg_code;
    ///
    /// assert_eq!(utm_epsg_code(1, 5.0).code(), 32601);
    /// assert_eq!(utm_epsg_code(31, -10.0).code(), 32731);
    /// ```
    pub fn code(&self) -> i64 {
        i64::from(self.hemisphere.epsg_base()) + i64::from(self.zone)
    }

    #[inline]
    pub fn zone(&self) -> i32 {
        self.zone
    }

    #[inline]
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }

    /// Formats the code as an `AUTHORITY:CODE` string, the form projection
    /// libraries register definitions under.
    ///
    /// ```
    /// use utm_epsg::utm_epsg_code;
    ///
    /// assert_eq!(utm_epsg_code(31, 10.0).to_authority_string(), "EPSG:32631");
    /// ```
    pub fn to_authority_string(&self) -> String {
        format!("EPSG:{}", self.code())
    }

    /// Legacy string form: `"32"`, the hemisphere digit, then the zone number
    /// with no zero padding. Zones 10 to 60 match the numeric code, but zones
    /// 1 to 9 come out one character short.
    ///
    /// ```
    /// use utm_epsg::utm_epsg_code;
    ///
    /// assert_eq!(utm_epsg_code(31, 10.0).to_unpadded_string(), "32631");
    /// assert_eq!(utm_epsg_code(1, 5.0).to_unpadded_string(), "3261");
    /// ```
    pub fn to_unpadded_string(&self) -> String {
        format!("{EPSG_UTM_PREFIX}{}{}", self.hemisphere.epsg_digit(), self.zone)
    }
}

impl TryFrom<i64> for EpsgCode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        EpsgCode::from_code(value)
    }
}

impl ParseCoord for EpsgCode {
    /// Parses `"32631"` or `"EPSG:32631"` (prefix is case-insensitive).
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let value = value.trim();
        let digits = match value.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("epsg:") => &value[5..],
            _ => value,
        };

        let code = digits
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidEpsg(format!("\"{value}\" is not a numeric EPSG code")))?;

        EpsgCode::from_code(code)
    }
}

impl FromStr for EpsgCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EpsgCode::parse_coord(s)
    }
}

impl Display for EpsgCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Builds the EPSG code for `zone` in the hemisphere of `latitude`. The
/// zone is not checked, and a latitude of exactly `0.0` counts as southern.
///
/// ```
/// use utm_epsg::utm_epsg_code;
///
/// assert_eq!(utm_epsg_code(31, 10.0).code(), 32631);
/// assert_eq!(utm_epsg_code(31, 0.0).code(), 32731);
/// ```
pub fn utm_epsg_code(zone: i32, latitude: f64) -> EpsgCode {
    EpsgCode::new(zone, Hemisphere::from_latitude(latitude))
}

/// Resolves the UTM EPSG code covering a longitude/latitude point.
///
/// Nothing is validated: out-of-range or `NaN` input still yields a code,
/// just not a meaningful one. See [`try_utm_epsg_from_coordinate`] for the
/// checked variant.
///
/// ```
/// use utm_epsg::utm_epsg_from_coordinate;
///
/// // Buenos Aires
/// let code = utm_epsg_from_coordinate([-58.3816, -34.6037]);
/// assert_eq!(code.code(), 32721);
/// ```
pub fn utm_epsg_from_coordinate<C: Into<Coordinate>>(coordinate: C) -> EpsgCode {
    let coordinate = coordinate.into();
    let zone = utm_zone_from_longitude(coordinate.longitude);
    let code = utm_epsg_code(zone, coordinate.latitude);

    log::trace!("Resolved {coordinate} to EPSG:{code}");

    code
}

/// Like [`utm_epsg_from_coordinate`], but validates the point with
/// [`Coordinate::create`] first.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if the longitude is outside `[-180, 180)`,
/// the latitude is outside `[-90, 90]`, or either is not finite.
///
/// ```
/// use utm_epsg::try_utm_epsg_from_coordinate;
///
/// assert_eq!(try_utm_epsg_from_coordinate(2.3522, 48.8566).unwrap().code(), 32631);
/// assert!(try_utm_epsg_from_coordinate(f64::NAN, 48.8566).is_err());
/// ```
pub fn try_utm_epsg_from_coordinate(longitude: f64, latitude: f64) -> Result<EpsgCode, Error> {
    Coordinate::create(longitude, latitude).map(utm_epsg_from_coordinate::<Coordinate>)
}
