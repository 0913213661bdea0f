#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Resolves WGS84 longitude/latitude points to the EPSG code of the
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! projection that covers them.
//!
//! ```
//! use utm_epsg::{utm_epsg_from_coordinate, Coordinate};
//!
//! // Paris
//! let code = utm_epsg_from_coordinate(Coordinate::from([2.3522, 48.8566]));
//! assert_eq!(code.code(), 32631);
//! assert_eq!(code.to_authority_string(), "EPSG:32631");
//! ```

use thiserror::Error;

pub mod coordinate;
pub mod epsg;
pub mod zone;
pub(crate) mod utility;

pub use coordinate::Coordinate;
pub use epsg::{try_utm_epsg_from_coordinate, utm_epsg_code, utm_epsg_from_coordinate, EpsgCode};
pub use zone::{central_meridian, utm_zone_from_longitude, Hemisphere};

pub(crate) mod constants;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Zone {0} not in valid UTM range [1, 60]")]
    InvalidZone(i32),
    #[error("Not a WGS84 UTM EPSG code: {0}")]
    InvalidEpsg(String),
}

/// Parses a value from its textual form. Implemented by [`Coordinate`] and
/// [`EpsgCode`].
pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an [`Error`] describing why `value` could not be parsed.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Generic entry point for [`ParseCoord`].
///
/// ```
/// use utm_epsg::{Coordinate, EpsgCode};
///
/// let coord: Coordinate = utm_epsg::from_str("2.3522 48.8566").unwrap();
/// let code: EpsgCode = utm_epsg::from_str("EPSG:32631").unwrap();
///
/// assert_eq!(coord.utm_epsg(), code);
/// ```
///
/// # Errors
///
/// Returns whatever error the target type's parser reports.
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
