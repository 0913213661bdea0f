// Lowest and highest UTM zone numbers
pub(crate) const MIN_UTM_ZONE: i32 = 1;
pub(crate) const MAX_UTM_ZONE: i32 = 60;
// Width of a UTM zone in degrees of longitude
pub(crate) const ZONE_WIDTH: i32 = 6;

// EPSG codes of WGS84 / UTM zone 0N and 0S; the zone number is added on top
pub(crate) const EPSG_UTM_NORTH_BASE: i32 = 32_600;
pub(crate) const EPSG_UTM_SOUTH_BASE: i32 = 32_700;
// Leading digits shared by every WGS84 / UTM code
pub(crate) const EPSG_UTM_PREFIX: &str = "32";
